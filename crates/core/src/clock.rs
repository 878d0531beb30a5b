//! Wall-clock access for domain timestamps.

use chrono::{DateTime, SubsecRound, Utc};

/// Current instant, truncated to microseconds.
///
/// Stored timestamps round-trip through relational stores at microsecond
/// precision, so the domain never holds anything finer.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
