//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error (malformed expression tree)
pub const DATAERR: i32 = 65;

/// Configuration error
pub const CONFIG: i32 = 78;
