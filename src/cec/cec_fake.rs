use crate::queue::CommandRecord;

/// Fake command source for integration testing and for running the binary
/// without an adapter: replays a scripted sequence of records from its own
/// thread, mimicking the callbacks libcec would deliver.
pub struct FakeSource {
    records: Vec<CommandRecord>,
    interval: std::time::Duration,
    worker: Option<std::thread::JoinHandle<()>>,
}

impl FakeSource {
    pub fn new(records: Vec<CommandRecord>, interval: std::time::Duration) -> FakeSource {
        FakeSource {
            records,
            interval,
            worker: None,
        }
    }

    /// A short remote control session: volume up pressed and released, then
    /// the TV going to standby.
    pub fn with_demo_script() -> FakeSource {
        FakeSource::new(
            vec![
                CommandRecord::new(0x44, &[0x41]),
                CommandRecord::new(0x45, &[]),
                CommandRecord::new(0x36, &[]),
            ],
            std::time::Duration::from_millis(500),
        )
    }
}

impl super::CommandSource for FakeSource {
    fn open(&mut self, sink: std::sync::Arc<crate::queue::EventQueue>) -> Result<(), super::CECError> {
        if self.worker.is_some() {
            return Err(super::CECError::AlreadyInitialized);
        }
        let records = self.records.clone();
        let interval = self.interval;
        self.worker = Some(std::thread::spawn(move || {
            for record in records {
                std::thread::sleep(interval);
                sink.push(record);
            }
        }));
        Ok(())
    }

    fn close(&mut self) {
        if let Some(worker) = self.worker.take() {
            if let Err(e) = worker.join() {
                log::error!("The fake source worker panicked: {:?}", e);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::super::CommandSource;
    use super::*;

    #[test]
    fn it_replays_its_script_in_order() {
        let queue = std::sync::Arc::new(crate::queue::EventQueue::new(16));
        let mut source = FakeSource::new(
            vec![
                CommandRecord::new(0x44, &[0x01]),
                CommandRecord::new(0x45, &[]),
            ],
            std::time::Duration::from_millis(0),
        );

        source.open(queue.clone()).unwrap();
        source.close();

        assert_eq!(0x44, queue.try_pop().unwrap().opcode);
        assert_eq!(0x45, queue.try_pop().unwrap().opcode);
        assert_eq!(None, queue.try_pop());
    }

    #[test]
    fn it_rejects_a_second_open() {
        let queue = std::sync::Arc::new(crate::queue::EventQueue::new(16));
        let mut source = FakeSource::new(vec![], std::time::Duration::from_millis(0));

        source.open(queue.clone()).unwrap();

        assert_eq!(
            Err(super::super::CECError::AlreadyInitialized),
            source.open(queue)
        );
    }
}
