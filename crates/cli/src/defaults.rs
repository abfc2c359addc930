//! Shared default values for the command line and the interactive shell.

/// Parameter file used when `--constants` is not given.
pub const CONSTANTS_FILE: &str = "constants.txt";

/// Menu entry that leaves the parameter editor.
pub const EDITOR_EXIT_CHOICE: i64 = 6;
