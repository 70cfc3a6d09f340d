//! Default configuration values

/// Maximum width of the interactive prompt label
pub const MAX_PROMPT_CHARS: usize = 50;

/// Marker prepended to a prompt label that had to be shortened
pub const ELLIPSIS: &str = "...";

/// Prompt label when the input denotes only directories
pub const PROMPT_FOLDER: &str = "Create folders in: ";

/// Prompt label when the input ends in a file name
pub const PROMPT_FILE: &str = "Create file in: ";

/// Message shown for any failure that is not a validation rejection
pub const GENERIC_ERROR: &str =
    "An error occurred while creating the path. Run with -v for details.";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
