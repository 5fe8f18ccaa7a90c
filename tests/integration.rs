use cecbridge::bridge::CecBridge;
use cecbridge::cec::FakeSource;
use cecbridge::queue::CommandRecord;

fn drain(bridge: &CecBridge, expected: usize) -> Vec<CommandRecord> {
    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    let mut received = Vec::new();
    while received.len() < expected && std::time::Instant::now() < deadline {
        match bridge.poll_next() {
            Some(record) => received.push(record),
            None => std::thread::sleep(std::time::Duration::from_millis(1)),
        }
    }
    received
}

#[rstest::rstest]
#[case::remote_session(vec![
    CommandRecord::new(0x44, &[0x41]),
    CommandRecord::new(0x45, &[]),
    CommandRecord::new(0x36, &[]),
])]
#[case::vendor_payloads(vec![
    CommandRecord::new(0x89, &[0x00, 0x10, 0xfa]),
    CommandRecord::new(0xa0, &(0u8..16).collect::<Vec<u8>>()),
])]
fn it_bridges_a_scripted_session(#[case] script: Vec<CommandRecord>) {
    let _ = env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stdout)
        .try_init();

    let source = FakeSource::new(script.clone(), std::time::Duration::from_millis(5));
    let mut bridge = CecBridge::new(16, Box::new(source));
    bridge.initialize().unwrap();

    let received = drain(&bridge, script.len());

    assert_eq!(script, received);
    assert_eq!(None, bridge.poll_next());
    bridge.shutdown();
}

#[test_log::test]
fn it_runs_until_told_to_exit() {
    let configuration: cecbridge::configuration::BridgeConfiguration = serde_json::from_str(
        r#"{"cec":{"fake":true},"consumer":{"pollIntervalMs":1},"logging":{"level":"WARN"}}"#,
    )
    .unwrap();

    let (exit_channel, receiver) = futures::channel::oneshot::channel::<()>();

    let bridge = std::thread::spawn(move || cecbridge::run_bridge(&configuration, Some(receiver)));
    std::thread::sleep(std::time::Duration::from_millis(50));

    exit_channel.send(()).expect("The bridge exited on its own");
    bridge
        .join()
        .expect("The bridge panicked")
        .expect("The bridge failed to start");
}

#[cfg(not(feature = "libcec"))]
#[test_log::test]
fn it_refuses_a_real_adapter_without_libcec() {
    let configuration: cecbridge::configuration::BridgeConfiguration =
        serde_json::from_str(r#"{}"#).unwrap();

    assert!(cecbridge::run_bridge(&configuration, None).is_err());
}
