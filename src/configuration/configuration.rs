#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct CECConfiguration {
    /// Name this device announces on the CEC bus, at most 12 characters
    #[serde(rename = "deviceName", default = "cec_default_device_name")]
    pub device_name: String,
    #[serde(rename = "cecVersion", default = "cec_default_version")]
    pub cec_version: String,
    #[serde(rename = "activateSource", default)]
    pub activate_source: bool,
    #[serde(rename = "openTimeoutMs", default = "cec_default_open_timeout_ms")]
    pub open_timeout_ms: u32,
    /// Replay a canned script instead of opening a real adapter
    #[serde(default)]
    pub fake: bool,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct QueueConfiguration {
    /// Records kept while the consumer lags; beyond this the oldest is dropped
    #[serde(default = "queue_default_capacity")]
    pub capacity: usize,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct ConsumerConfiguration {
    #[serde(rename = "pollIntervalMs", default = "consumer_default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct LoggingConfiguration {
    #[serde(default = "logging_default_enabled")]
    pub enabled: bool,
    #[serde(default = "logging_default_level")]
    #[serde(deserialize_with = "deserialize_level")]
    #[serde(serialize_with = "serialize_level")]
    pub level: log::LevelFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct BridgeConfiguration {
    #[serde(default)]
    pub cec: CECConfiguration,
    #[serde(default)]
    pub queue: QueueConfiguration,
    #[serde(default)]
    pub consumer: ConsumerConfiguration,
    #[serde(default)]
    pub logging: LoggingConfiguration,
}

impl std::default::Default for CECConfiguration {
    fn default() -> Self {
        CECConfiguration {
            device_name: cec_default_device_name(),
            cec_version: cec_default_version(),
            activate_source: false,
            open_timeout_ms: cec_default_open_timeout_ms(),
            fake: false,
        }
    }
}

impl std::default::Default for QueueConfiguration {
    fn default() -> Self {
        QueueConfiguration {
            capacity: queue_default_capacity(),
        }
    }
}

impl std::default::Default for ConsumerConfiguration {
    fn default() -> Self {
        ConsumerConfiguration {
            poll_interval_ms: consumer_default_poll_interval_ms(),
        }
    }
}

impl std::default::Default for LoggingConfiguration {
    fn default() -> Self {
        LoggingConfiguration {
            enabled: logging_default_enabled(),
            level: logging_default_level(),
            path: None,
        }
    }
}

fn cec_default_device_name() -> String {
    String::from("cecbridge")
}

fn cec_default_version() -> String {
    String::from("4.0.4")
}

fn cec_default_open_timeout_ms() -> u32 {
    1000
}

fn queue_default_capacity() -> usize {
    1024
}

fn consumer_default_poll_interval_ms() -> u64 {
    10
}

fn logging_default_enabled() -> bool {
    true
}

fn logging_default_level() -> log::LevelFilter {
    log::LevelFilter::Warn
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<log::LevelFilter, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = serde::Deserialize::deserialize(deserializer)?;
    match s.to_uppercase().as_str() {
        "OFF" => Ok(log::LevelFilter::Off),
        "ERROR" => Ok(log::LevelFilter::Error),
        "WARN" => Ok(log::LevelFilter::Warn),
        "INFO" => Ok(log::LevelFilter::Info),
        "DEBUG" => Ok(log::LevelFilter::Debug),
        "TRACE" => Ok(log::LevelFilter::Trace),
        _ => Err(serde::de::Error::custom(format!(
            "Invalid log level: {}",
            s
        ))),
    }
}

pub fn serialize_level<S>(level: &log::LevelFilter, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let level = format!("{}", level).to_uppercase();
    s.serialize_str(level.as_str())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_has_a_default_configuration() {
        let json = r#"{}"#;
        let configuration: BridgeConfiguration =
            serde_json::from_str(json).expect("Could not build a default configuration");

        assert_eq!("cecbridge", configuration.cec.device_name);
        assert_eq!("4.0.4", configuration.cec.cec_version);
        assert_eq!(1000, configuration.cec.open_timeout_ms);
        assert_eq!(false, configuration.cec.fake);
        assert_eq!(1024, configuration.queue.capacity);
        assert_eq!(10, configuration.consumer.poll_interval_ms);
    }

    #[test]
    fn it_decodes_the_cec_section() {
        let json = r#"{"deviceName":"living room","openTimeoutMs":250,"fake":true}"#;
        let configuration: CECConfiguration = serde_json::from_str(json).unwrap();

        assert_eq!("living room", configuration.device_name);
        assert_eq!(250, configuration.open_timeout_ms);
        assert!(configuration.fake);
    }

    #[test]
    fn it_decodes_logging() {
        for (json_level, expected_level) in
            [("ERROR", log::Level::Error), ("INFO", log::Level::Info)]
        {
            let json = format!(r#"{{"enabled":true,"level":"{}"}}"#, json_level);
            let de_json =
                serde_json::from_str::<super::LoggingConfiguration>(json.as_str()).unwrap();

            assert_eq!(expected_level, de_json.level);

            let ser_json = serde_json::to_string(&de_json).unwrap();

            assert_eq!(json, ser_json);
        }
    }
}
