//! Exit code registry for the payrecon binary.
//!
//! Scripts branch on these codes, so they are a compatibility surface:
//! never renumber an existing code, only append.
//!
//! | Code | Meaning                                |
//! |------|----------------------------------------|
//! | 0    | Success, every row matches             |
//! | 1    | Differences found (like `diff(1)`)     |
//! | 2    | Usage error                            |
//! | 3    | A dataset is empty                     |
//! | 4    | Malformed line (wrong column count)    |
//! | 5    | Unparsable amount field                |
//! | 6    | Input read failure                     |
//! | 7    | Export or output write failure         |

use payrecon_core::{CompareError, ParseError};

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Every row matched.
pub const EXIT_SUCCESS: u8 = 0;

/// The datasets differ: mismatched amounts or missing people.
pub const EXIT_DIFFERENCES: u8 = 1;

/// Bad arguments, or nothing to replay.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Compare (3-7)
// =============================================================================

/// A dataset is empty after trimming.
pub const EXIT_EMPTY_INPUT: u8 = 3;

/// A line has the wrong number of tab-separated columns for its layout.
pub const EXIT_MALFORMED: u8 = 4;

/// A non-empty amount field that does not parse.
pub const EXIT_BAD_AMOUNT: u8 = 5;

/// Cannot read an input file or stdin.
pub const EXIT_READ: u8 = 6;

/// Cannot write an export file or stdout.
pub const EXIT_EXPORT: u8 = 7;

/// Map a comparison failure to its registered exit code.
pub fn compare_exit_code(err: &CompareError) -> u8 {
    match err {
        CompareError::EmptyInput(_) => EXIT_EMPTY_INPUT,
        CompareError::Parse { source, .. } => match source {
            ParseError::MalformedLine { .. } => EXIT_MALFORMED,
            ParseError::UnparsableAmount { .. } => EXIT_BAD_AMOUNT,
        },
    }
}
