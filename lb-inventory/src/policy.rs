//! Error and retry policies for the inventory walk.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use thiserror::Error;

/// Reaction of one call site to a client error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Print the error and stop the run with a non-zero exit code.
    Fatal,
    /// Print the error and carry on.
    LogAndContinue,
}

/// Error policy of every call site that talks to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallPolicies {
    /// Listing the zones of the account (first and following pages).
    pub zone_listing: ErrorPolicy,
    /// First page of load balancers in a zone.
    pub first_page: ErrorPolicy,
    /// Every following page of load balancers in a zone.
    pub next_page: ErrorPolicy,
}

impl Default for CallPolicies {
    fn default() -> Self {
        Self {
            zone_listing: ErrorPolicy::Fatal,
            first_page: ErrorPolicy::LogAndContinue,
            next_page: ErrorPolicy::LogAndContinue,
        }
    }
}

const DEFAULT_PAGE_RETRIES: NonZeroU32 = NonZeroU32::MIN.saturating_add(2);

/// How long a zone keeps probing for its next page after failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRetryPolicy {
    /// Probe again after every failure, forever.
    Unbounded,
    /// Give up on the zone after this many consecutive failed probes.
    Bounded(NonZeroU32),
}

impl Default for PageRetryPolicy {
    fn default() -> Self {
        Self::Bounded(DEFAULT_PAGE_RETRIES)
    }
}

impl PageRetryPolicy {
    /// Whether the walker should stop after `consecutive_failures` failed probes.
    pub fn gives_up_after(self, consecutive_failures: u32) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Bounded(limit) => consecutive_failures >= limit.get(),
        }
    }
}

impl fmt::Display for PageRetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("unbounded"),
            Self::Bounded(limit) => write!(f, "{limit}"),
        }
    }
}

/// Value that is neither `unbounded` nor a positive integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected \"unbounded\" or a positive integer, got {0:?}")]
pub struct ParsePageRetryError(pub String);

impl FromStr for PageRetryPolicy {
    type Err = ParsePageRetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("unbounded") {
            return Ok(Self::Unbounded);
        }
        value
            .parse::<NonZeroU32>()
            .map(Self::Bounded)
            .map_err(|_| ParsePageRetryError(s.to_string()))
    }
}
