use super::enums::*;
use super::functions::*;
use super::structs::*;

type LibcecConnectionT = *mut libc::c_void;

extern "C" fn bridge_log_message(_cbparam: *mut libc::c_void, message: *const CECLogMessage) {
    if log::log_enabled!(log::Level::Debug) {
        unsafe {
            if let Some(msg) = message.as_ref().map(|m| m.message.as_ref()).flatten() {
                let level = match message.as_ref().unwrap().level {
                    CECLogLevel::ERROR => log::Level::Warn,
                    CECLogLevel::WARNING => log::Level::Info,
                    _ => log::Level::Debug,
                };
                log::log!(
                    level,
                    "CEC log [{:?}]: {:?}",
                    message.as_ref().unwrap().level,
                    std::ffi::CStr::from_ptr(msg)
                )
            }
        }
    }
}

// Runs on libcec's own thread: copy the fixed-size data, push, return. The
// reported parameter size is not trusted beyond the packet buffer.
extern "C" fn bridge_command_received(cbparam: *mut libc::c_void, command: *const CECCommand) {
    if cbparam.is_null() || command.is_null() {
        return;
    }
    unsafe {
        let sink = &*(cbparam as *const crate::queue::EventQueue);
        let command = &*command;
        let size = std::cmp::min(command.parameters.size as usize, CEC_MAX_DATA_PACKET_SIZE);
        sink.push(crate::queue::CommandRecord::new(
            command.opcode as u8,
            &command.parameters.data[..size],
        ));
    }
}

extern "C" fn bridge_key_press(_cbparam: *mut libc::c_void, _key: *const CECKeypress) {}

extern "C" fn bridge_configuration_changed(
    _cbparam: *mut libc::c_void,
    _configuration: *const LibcecConfiguration,
) {
}

extern "C" fn bridge_alert(_cbparam: *mut libc::c_void, alert: LibcecAlert, param: LibcecParameter) {
    if param.param_type == LibcecParameterType::String && !param.param_data.is_null() {
        unsafe {
            log::info!(
                "CEC alert [{:?}]: {:?}",
                alert,
                std::ffi::CStr::from_ptr(param.param_data as *const std::os::raw::c_char)
            );
        }
    } else {
        log::info!("CEC alert [{:?}]", alert);
    }
}

extern "C" fn bridge_menu_state_changed(
    _cbparam: *mut libc::c_void,
    _state: CECMenuState,
) -> libc::c_int {
    0
}

extern "C" fn bridge_source_activated(
    _cbparam: *mut libc::c_void,
    _logical_address: CECLogicalAddress,
    _b_activated: u8,
) {
}

// libcec takes the table as mut but never writes to it
static BRIDGE_CALLBACKS: ICECCallbacks = ICECCallbacks {
    log_message: bridge_log_message,
    key_press: bridge_key_press,
    command_received: bridge_command_received,
    configuration_changed: bridge_configuration_changed,
    alert: bridge_alert,
    menu_state_changed: bridge_menu_state_changed,
    source_activated: bridge_source_activated,
};

pub struct LibcecConfigurationBuilder {
    device_name: Result<[libc::c_char; 13], CECError>,
    client_version: Result<u32, CECError>,
    activate_source: bool,
    callback_param: *mut libc::c_void,
}

impl LibcecConfigurationBuilder {
    pub fn new() -> Self {
        LibcecConfigurationBuilder {
            device_name: Err(CECError::InvalidConfiguration(
                "No device name given for the CEC bus",
            )),
            client_version: Err(CECError::InvalidConfiguration(
                "No version given for CEC client version",
            )),
            activate_source: false,
            callback_param: std::ptr::null_mut(),
        }
    }

    pub fn with_device_name(mut self, name: &str) -> Self {
        self.device_name = super::encode_device_name(name);
        self
    }

    pub fn with_client_version(mut self, version: &str) -> Self {
        self.client_version = super::parse_client_version(version);
        log::debug!("Using CEC version number {:?}", self.client_version);
        self
    }

    pub fn with_activate_source(mut self, activate_source: bool) -> Self {
        self.activate_source = activate_source;
        self
    }

    pub fn with_callback_param(mut self, callback_param: *mut libc::c_void) -> Self {
        self.callback_param = callback_param;
        self
    }

    pub fn build(self) -> Result<LibcecConfiguration, CECError> {
        unsafe {
            let mut configuration = std::mem::zeroed::<LibcecConfiguration>();
            libcec_clear_configuration(&mut configuration);
            configuration.client_version = self.client_version?;
            configuration.str_device_name = self.device_name?;
            configuration.device_types.types[0] = CECDeviceType::RecordingDevice;
            configuration.b_activate_source = self.activate_source as u8;
            configuration.callback_param = self.callback_param;
            configuration.callbacks =
                &BRIDGE_CALLBACKS as *const ICECCallbacks as *mut ICECCallbacks;
            Ok(configuration)
        }
    }
}

/// Command source backed by a real adapter through libcec. The queue handed
/// to [CommandSource::open] is kept alive for as long as the connection
/// exists, since libcec holds a raw pointer to it as the callback parameter.
pub struct LibcecSource {
    configuration: crate::configuration::CECConfiguration,
    connection: LibcecConnectionT,
    sink: Option<std::sync::Arc<crate::queue::EventQueue>>,
}

unsafe impl Send for LibcecSource {}

impl LibcecSource {
    pub fn new(
        configuration: &crate::configuration::CECConfiguration,
    ) -> Result<LibcecSource, CECError> {
        super::encode_device_name(&configuration.device_name)?;
        super::parse_client_version(&configuration.cec_version)?;
        Ok(LibcecSource {
            configuration: configuration.clone(),
            connection: std::ptr::null_mut(),
            sink: None,
        })
    }

    fn find_adapters(&mut self) -> Result<Vec<CECAdapter>, CECError> {
        let mut buf = [CECAdapter::default(); 10];
        let adapter_count = unsafe {
            libcec_find_adapters(
                self.connection,
                buf.as_mut_ptr(),
                buf.len() as u8,
                std::ptr::null_mut(),
            )
        };
        log::debug!("Found {} CEC adapters", adapter_count);
        if adapter_count >= 0 {
            Ok(buf
                .iter()
                .take(adapter_count as usize)
                .map(|x| *x)
                .collect())
        } else {
            Err(CECError::SourceOpenFailed)
        }
    }
}

impl super::CommandSource for LibcecSource {
    fn open(&mut self, sink: std::sync::Arc<crate::queue::EventQueue>) -> Result<(), CECError> {
        if !self.connection.is_null() {
            return Err(CECError::AlreadyInitialized);
        }
        let mut libcec_configuration = LibcecConfigurationBuilder::new()
            .with_device_name(&self.configuration.device_name)
            .with_client_version(&self.configuration.cec_version)
            .with_activate_source(self.configuration.activate_source)
            .with_callback_param(std::sync::Arc::as_ptr(&sink) as *mut libc::c_void)
            .build()?;
        // The sink must be held before the connection exists: the callback
        // can fire from libcec's thread as soon as the adapter is open.
        self.sink = Some(sink);
        unsafe {
            self.connection = libcec_initialise(&mut libcec_configuration);
        }
        if self.connection.is_null() {
            self.sink = None;
            return Err(CECError::SourceConstructionFailed);
        }
        unsafe {
            libcec_init_video_standalone(self.connection);
        }
        let adapter = match self.find_adapters().map(|adapters| adapters.first().cloned()) {
            Ok(Some(adapter)) => adapter,
            _ => {
                self.close();
                return Err(CECError::SourceOpenFailed);
            }
        };
        log::info!("Connecting to CEC adapter {:?}", adapter);
        unsafe {
            if libcec_open(
                self.connection,
                adapter.comm.as_ptr(),
                self.configuration.open_timeout_ms,
            ) == 0
            {
                // a failed open must not leak the half-open handle
                self.close();
                return Err(CECError::SourceOpenFailed);
            }
        }
        Ok(())
    }

    fn close(&mut self) {
        if !self.connection.is_null() {
            log::info!("Dropping connection to the CEC adapter");
            unsafe {
                libcec_close(self.connection);
                libcec_destroy(self.connection);
            }
            self.connection = std::ptr::null_mut();
        }
        self.sink = None;
    }
}

impl Drop for LibcecSource {
    fn drop(&mut self) {
        use super::CommandSource;
        self.close();
    }
}
