//! Configuration for path diagnostics.
//!
//! The only tunable is how many candidate objects a failed resolution lists.
//! It is read from the `PQOBJECTNAMING_MATCH_LIMIT` environment variable:
//!
//! | Value            | Effect                        |
//! |------------------|-------------------------------|
//! | unset or empty   | list up to 20 candidates      |
//! | positive integer | list up to that many          |
//! | `0` or negative  | list every candidate          |
//! | not an integer   | treated as `0`, with a warning |

use std::env;

use horizon_naming_core::logging::targets;

/// Environment variable controlling the candidate listing limit.
pub const MATCH_LIMIT_ENV: &str = "PQOBJECTNAMING_MATCH_LIMIT";

/// Number of candidates listed when the environment does not say otherwise.
pub const DEFAULT_MATCH_LIMIT: usize = 20;

/// Cap on the number of candidates listed in a diagnostic report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLimit {
    /// List at most this many candidates (always greater than zero).
    Limited(usize),
    /// List every candidate.
    Unlimited,
}

impl Default for MatchLimit {
    fn default() -> Self {
        Self::Limited(DEFAULT_MATCH_LIMIT)
    }
}

impl MatchLimit {
    /// Build a limit from a signed count; zero or negative means unlimited.
    pub fn from_count(count: i64) -> Self {
        match usize::try_from(count) {
            Ok(0) | Err(_) => Self::Unlimited,
            Ok(n) => Self::Limited(n),
        }
    }

    /// How many of `total` candidates should be listed.
    pub fn listed(self, total: usize) -> usize {
        match self {
            Self::Limited(n) => total.min(n),
            Self::Unlimited => total,
        }
    }

    /// How many of `total` candidates are left out, if any.
    pub fn omitted(self, total: usize) -> Option<usize> {
        match self {
            Self::Limited(n) if total > n => Some(total - n),
            _ => None,
        }
    }
}

/// Parse a raw `PQOBJECTNAMING_MATCH_LIMIT` value.
pub fn parse_match_limit(raw: Option<&str>) -> MatchLimit {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return MatchLimit::default();
    };

    match raw.parse::<i64>() {
        Ok(count) => MatchLimit::from_count(count),
        Err(err) => {
            tracing::warn!(
                target: targets::CONFIG,
                value = raw,
                %err,
                "{MATCH_LIMIT_ENV} is not an integer, listing all candidates"
            );
            MatchLimit::Unlimited
        }
    }
}

/// Settings for an [`ObjectNaming`](crate::ObjectNaming) context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingConfig {
    /// Cap on candidates listed when a path cannot be resolved.
    pub match_limit: MatchLimit,
}

impl NamingConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        let raw = env::var(MATCH_LIMIT_ENV).ok();
        Self {
            match_limit: parse_match_limit(raw.as_deref()),
        }
    }

    /// Set the candidate listing limit.
    pub fn with_match_limit(mut self, match_limit: MatchLimit) -> Self {
        self.match_limit = match_limit;
        self
    }
}
