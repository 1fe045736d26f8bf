//! Exit code constants for the argstone CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Server failure (bind or serve)
//! - 3: Browser launch failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable or invalid config, bad prompt input.
pub const USER_ERROR: i32 = 1;

/// The HTTP server could not bind or stopped with an error.
pub const SERVER_FAILURE: i32 = 2;

/// The system browser could not be launched.
pub const BROWSER_FAILURE: i32 = 3;
