pub use enums::CECError;

#[cfg(feature = "libcec")]
pub use self::cec::LibcecSource;
pub use cec_fake::FakeSource;

#[cfg(feature = "libcec")]
mod cec;
mod cec_fake;
mod enums;
#[cfg(feature = "libcec")]
mod functions;
#[cfg(feature = "libcec")]
mod structs;

/// Seam between the bridge and whatever produces command records. The real
/// implementation wraps the libcec adapter, the fake one replays a script
/// from its own thread.
#[cfg_attr(test, mockall::automock)]
pub trait CommandSource: Send {
    /// Connects to the source and registers the given queue as the sink for
    /// every received command. The implementation must bound the time it
    /// spends waiting for the connection.
    fn open(&mut self, sink: std::sync::Arc<crate::queue::EventQueue>) -> Result<(), CECError>;

    /// Disconnects from the source and stops pushing into the sink.
    /// Idempotent.
    fn close(&mut self);
}

pub fn get_command_source(
    configuration: &crate::configuration::CECConfiguration,
) -> Result<Box<dyn CommandSource>, CECError> {
    if configuration.fake {
        return Ok(Box::new(cec_fake::FakeSource::with_demo_script()));
    }
    #[cfg(feature = "libcec")]
    {
        Ok(Box::new(cec::LibcecSource::new(configuration)?))
    }
    #[cfg(not(feature = "libcec"))]
    {
        Err(CECError::InvalidConfiguration(
            "Built without the libcec feature, only the fake source is available",
        ))
    }
}

/// Packs an "a.b.c" version string into the u32 layout libcec expects for
/// its client version field.
pub fn parse_client_version(version: &str) -> Result<u32, CECError> {
    let mut versions: Vec<Result<u32, CECError>> = version
        .split('.')
        .map(|s| {
            s.parse()
                .map_err(|_| CECError::InvalidConfiguration("Invalid CEC client version"))
        })
        .take(3)
        .collect();
    versions.resize(3, Ok(0));
    Ok(versions[0]? << 16 | versions[1]? << 8 | versions[2]?)
}

/// Encodes the device name shown on the bus into the fixed 13 byte buffer of
/// the libcec configuration (12 characters plus terminator).
pub fn encode_device_name(name: &str) -> Result<[libc::c_char; 13], CECError> {
    if name.len() > 12 {
        return Err(CECError::InvalidConfiguration(
            "Device name is longer than 12 bytes",
        ));
    }
    if name.bytes().any(|b| b == 0) {
        return Err(CECError::InvalidConfiguration(
            "Device name contains a nul byte",
        ));
    }
    let mut buffer = [0 as libc::c_char; 13];
    for (i, b) in name.bytes().enumerate() {
        buffer[i] = b as libc::c_char;
    }
    Ok(buffer)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_parses_client_versions() {
        assert_eq!(Ok(0x04_00_04), parse_client_version("4.0.4"));
        assert_eq!(Ok(0x06_00_02), parse_client_version("6.0.2"));
        // missing components default to 0
        assert_eq!(Ok(0x04_00_00), parse_client_version("4"));
        // extra components are ignored
        assert_eq!(Ok(0x04_00_04), parse_client_version("4.0.4.1"));
    }

    #[test]
    fn it_rejects_garbage_versions() {
        assert_eq!(
            Err(CECError::InvalidConfiguration("Invalid CEC client version")),
            parse_client_version("latest")
        );
    }

    #[test]
    fn it_encodes_device_names() {
        let encoded = encode_device_name("cecbridge").unwrap();
        assert_eq!('c' as libc::c_char, encoded[0]);
        assert_eq!('e' as libc::c_char, encoded[8]);
        assert_eq!(0, encoded[9]);
        assert_eq!(0, encoded[12]);
    }

    #[test]
    fn it_rejects_too_long_device_names() {
        assert_eq!(
            Err(CECError::InvalidConfiguration(
                "Device name is longer than 12 bytes"
            )),
            encode_device_name("a name that does not fit")
        );
    }
}
