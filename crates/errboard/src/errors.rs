//! Exit codes for errboard
//!
//! Only the non-interactive `list` command reports them; the panel shows
//! failures inline instead.

use errboard_common::{FailureKind, FetchError};

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors (bad config, terminal setup)
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the service returns something that is not an error group list
pub const EXIT_INVALID_RESPONSE: i32 = 65;

/// Exit code when the service is unreachable or answers with an error status
pub const EXIT_SERVICE_UNAVAILABLE: i32 = 70;

/// Exit code when the fetch was interrupted
pub const EXIT_INTERRUPTED: i32 = 130;

pub fn exit_code_for(error: &FetchError) -> i32 {
    match error.kind() {
        FailureKind::Network => EXIT_SERVICE_UNAVAILABLE,
        FailureKind::Decode => EXIT_INVALID_RESPONSE,
        FailureKind::Cancelled => EXIT_INTERRUPTED,
    }
}
