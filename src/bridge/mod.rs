use crate::cec::{CECError, CommandSource};
use crate::queue::{CommandRecord, EventQueue, QueueStats};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeState {
    Uninitialized,
    Ready,
    Failed,
}

/// Owns the hand-off queue and the connection to the command source.
///
/// The source pushes records into the queue from a thread the bridge does not
/// control; the consumer drains them at its own pace through [poll_next].
/// Only [BridgeState::Ready] makes polling meaningful; a failed
/// initialization leaves the bridge in [BridgeState::Failed] until
/// [shutdown] resets it.
///
/// [poll_next]: CecBridge::poll_next
/// [shutdown]: CecBridge::shutdown
pub struct CecBridge {
    queue: std::sync::Arc<EventQueue>,
    source: Box<dyn CommandSource>,
    state: BridgeState,
}

impl CecBridge {
    pub fn new(queue_capacity: usize, source: Box<dyn CommandSource>) -> CecBridge {
        CecBridge {
            queue: std::sync::Arc::new(EventQueue::new(queue_capacity)),
            source,
            state: BridgeState::Uninitialized,
        }
    }

    /// Opens the source and wires its callback to the queue. On failure no
    /// half-open handle is retained: the source is required to have cleaned
    /// up after itself, and the bridge moves to [BridgeState::Failed].
    pub fn initialize(&mut self) -> Result<(), CECError> {
        if self.state != BridgeState::Uninitialized {
            return Err(CECError::AlreadyInitialized);
        }
        match self.source.open(self.queue.clone()) {
            Ok(()) => {
                log::info!("CEC bridge initialized");
                self.state = BridgeState::Ready;
                Ok(())
            }
            Err(e) => {
                log::warn!("CEC bridge initialization failed: {:?}", e);
                self.state = BridgeState::Failed;
                Err(e)
            }
        }
    }

    /// Removes and returns the oldest record, or [None] when the queue is
    /// empty or the bridge is not ready. Never blocks; the caller decides
    /// its own polling cadence.
    pub fn poll_next(&self) -> Option<CommandRecord> {
        if self.state != BridgeState::Ready {
            return None;
        }
        self.queue.try_pop()
    }

    /// Closes the source and returns to [BridgeState::Uninitialized]. Also
    /// clears [BridgeState::Failed], so a fresh [initialize] can be retried
    /// after an error.
    ///
    /// [initialize]: CecBridge::initialize
    pub fn shutdown(&mut self) {
        if self.state == BridgeState::Ready {
            self.source.close();
        }
        self.state = BridgeState::Uninitialized;
    }

    pub fn state(&self) -> BridgeState {
        self.state
    }

    pub fn stats(&self) -> QueueStats {
        self.queue.stats()
    }
}

impl Drop for CecBridge {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cec::MockCommandSource;
    use assert_matches::assert_matches;

    #[test]
    fn it_polls_records_pushed_by_the_source() {
        let mut source = MockCommandSource::new();
        source.expect_open().times(1).returning(|sink| {
            sink.push(CommandRecord::new(0x04, &[0x01, 0x02]));
            Ok(())
        });
        source.expect_close().times(1).return_const(());

        let mut bridge = CecBridge::new(16, Box::new(source));
        bridge.initialize().unwrap();

        assert_eq!(BridgeState::Ready, bridge.state());
        let record = bridge.poll_next().unwrap();
        assert_eq!(0x04, record.opcode);
        assert_eq!(&[0x01, 0x02], record.parameters());
        assert_eq!(None, bridge.poll_next());
    }

    #[test]
    fn it_polls_nothing_before_initialization() {
        let mut source = MockCommandSource::new();
        source.expect_open().never();
        source.expect_close().never();

        let bridge = CecBridge::new(16, Box::new(source));

        assert_eq!(BridgeState::Uninitialized, bridge.state());
        assert_eq!(None, bridge.poll_next());
    }

    #[test]
    fn it_rejects_a_second_initialization() {
        let mut source = MockCommandSource::new();
        source.expect_open().times(1).returning(|_| Ok(()));
        source.expect_close().times(1).return_const(());

        let mut bridge = CecBridge::new(16, Box::new(source));
        bridge.initialize().unwrap();

        assert_eq!(Err(CECError::AlreadyInitialized), bridge.initialize());
        assert_eq!(BridgeState::Ready, bridge.state());
    }

    #[test]
    fn it_can_retry_after_a_failure_once_reset() {
        let mut seq = mockall::Sequence::new();
        let mut source = MockCommandSource::new();
        source
            .expect_open()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(CECError::SourceOpenFailed));
        source
            .expect_open()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        source.expect_close().times(1).return_const(());

        let mut bridge = CecBridge::new(16, Box::new(source));

        assert_eq!(Err(CECError::SourceOpenFailed), bridge.initialize());
        assert_eq!(BridgeState::Failed, bridge.state());
        assert_eq!(None, bridge.poll_next());
        // a failed bridge stays failed until explicitly reset
        assert_eq!(Err(CECError::AlreadyInitialized), bridge.initialize());

        bridge.shutdown();
        bridge.initialize().unwrap();
        assert_eq!(BridgeState::Ready, bridge.state());
    }

    #[test]
    fn it_closes_the_source_exactly_once_on_shutdown() {
        let mut source = MockCommandSource::new();
        source.expect_open().times(1).returning(|_| Ok(()));
        source.expect_close().times(1).return_const(());

        let mut bridge = CecBridge::new(16, Box::new(source));
        bridge.initialize().unwrap();

        bridge.shutdown();
        assert_eq!(BridgeState::Uninitialized, bridge.state());
        // dropping the bridge must not close again
        drop(bridge);
    }

    #[test]
    fn it_surfaces_an_open_failure_after_the_configured_timeout() {
        let timeout = std::time::Duration::from_millis(150);
        let mut source = MockCommandSource::new();
        source.expect_open().times(1).returning(move |_| {
            std::thread::sleep(timeout);
            Err(CECError::SourceOpenFailed)
        });
        source.expect_close().never();

        let mut bridge = CecBridge::new(16, Box::new(source));

        let start = std::time::Instant::now();
        assert_matches!(bridge.initialize(), Err(CECError::SourceOpenFailed));
        let elapsed = start.elapsed();

        assert!(elapsed >= timeout);
        assert!(elapsed < timeout * 10);
    }
}
