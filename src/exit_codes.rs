//! Standard exit codes for xamprofile binaries

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Generic error (avoid using - be more specific)
pub const EXIT_ERROR: i32 = 1;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// Wire-format error (unknown tag, truncated or forged record)
pub const EXIT_FORMAT_ERROR: i32 = 102;

/// I/O error (file not found, permission denied, disk error)
pub const EXIT_IO_ERROR: i32 = 103;

/// Invalid command-line arguments
pub const EXIT_INVALID_ARGS: i32 = 104;
