//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error (parse or validation failure)
pub const USAGE: i32 = 64;

/// Internal software error (inconsistent CLI declaration)
pub const SOFTWARE: i32 = 70;

/// Configuration error
pub const CONFIG: i32 = 78;

/// Input/output error
pub const IOERR: i32 = 74;
