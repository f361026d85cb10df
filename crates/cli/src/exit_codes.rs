//! CLI Exit Code Registry
//!
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! | Code | Meaning                                                |
//! |------|--------------------------------------------------------|
//! | 0    | Run finished (per-job failures are reported, not exit) |
//! | 2    | CLI usage error (bad or unknown arguments)             |
//! | 3    | Run log could not be opened                            |

/// Run finished. Individual jobs may still have failed.
pub const EXIT_SUCCESS: u8 = 0;

/// Usage error - bad arguments, unknown options.
pub const EXIT_USAGE: u8 = 2;

/// Log file could not be opened.
pub const EXIT_IO: u8 = 3;
