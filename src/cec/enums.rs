#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CECError {
    AlreadyInitialized,
    InvalidConfiguration(&'static str),
    SourceConstructionFailed,
    SourceOpenFailed,
}

// Contains the C bindings from https://github.com/Pulse-Eight/libcec
#[cfg(feature = "libcec")]
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug)]
pub enum CECVersion {
    Unknown = 0x00,
    V1_2 = 0x01,
    V1_2A = 0x02,
    V1_3 = 0x03,
    V1_3A = 0x04,
    V1_4 = 0x05,
    V2_0 = 0x06,
}

#[cfg(feature = "libcec")]
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug)]
pub enum CECDeviceType {
    TV = 0,
    RecordingDevice = 1,
    Reserved = 2,
    Tuner = 3,
    PlaybackDevice = 4,
    AudioSystem = 5,
}

#[cfg(feature = "libcec")]
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug)]
pub enum CECMenuState {
    Activated = 0,
    Deactivated = 1,
}

#[cfg(feature = "libcec")]
#[repr(C)]
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CECLogicalAddress {
    Unknown = -1,
    TV = 0,
    RecordingDevice1 = 1,
    RecordingDevice2 = 2,
    Tuner1 = 3,
    PlaybackDevice1 = 4,
    AudioSystem = 5,
    Tuner2 = 6,
    Tuner3 = 7,
    PlaybackDevice2 = 8,
    RecordingDevice3 = 9,
    Tuner4 = 10,
    PlaybackDevice3 = 11,
    Reserved1 = 12,
    Reserved2 = 13,
    FreeUse = 14,
    Broadcast = 15,
}

#[cfg(feature = "libcec")]
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug)]
pub enum CECLogLevel {
    ERROR = 1,
    WARNING = 2,
    NOTICE = 4,
    TRAFFIC = 8,
    DEBUG = 16,
    ALL = 31,
}

#[cfg(feature = "libcec")]
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug)]
pub enum CECAdapterType {
    Unknown = 0,
    P8External = 0x1,
    P8Daughterboard = 0x2,
    RPI = 0x100,
    TDA995x = 0x200,
    Exynos = 0x300,
    AOCEC = 0x500,
}

#[cfg(feature = "libcec")]
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug)]
pub enum LibcecAlert {
    ServiceDevice,
    ConnectionLost,
    PermissionError,
    PortBusy,
    PhysicalAddressError,
    TVPollFailed,
}

#[cfg(feature = "libcec")]
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, PartialEq)]
pub enum LibcecParameterType {
    String,
    Unknown,
}
