pub mod bridge;
pub mod cec;
pub mod configuration;
pub mod queue;

/// Runs the bridge until the exit channel fires (or forever without one):
/// builds the command source from the configuration, initializes the bridge
/// and drains the queue on the configured cadence, logging every record.
///
/// This is the demo consumer used by the binary; a real consumer would map
/// the records to injected input events instead.
pub fn run_bridge(
    configuration: &configuration::BridgeConfiguration,
    mut exit_channel: Option<futures::channel::oneshot::Receiver<()>>,
) -> Result<(), cec::CECError> {
    let source = cec::get_command_source(&configuration.cec)?;
    let mut bridge = bridge::CecBridge::new(configuration.queue.capacity, source);
    bridge.initialize()?;

    let poll_interval = std::time::Duration::from_millis(configuration.consumer.poll_interval_ms);
    loop {
        if let Some(channel) = exit_channel.as_mut() {
            match channel.try_recv() {
                Ok(None) => (),
                // exit on an explicit signal or on a dropped sender
                _ => break,
            }
        }
        while let Some(record) = bridge.poll_next() {
            log::info!(
                "Received command {:#04x} with parameters {:?}",
                record.opcode,
                record.parameters()
            );
        }
        std::thread::sleep(poll_interval);
    }

    let stats = bridge.stats();
    log::info!(
        "Shutting down after {} records received and {} dropped",
        stats.pushed,
        stats.dropped
    );
    bridge.shutdown();
    Ok(())
}
