//! Natural language to search-engine query compiler.
//! Turns operator utterances like "errors in last 5 minutes for checkout-service"
//! into a compact JSON search request, a fixed admin API call, or an error payload.
pub mod classifier;
pub mod compiler;
pub mod config;
pub mod error;
pub mod extract;
pub mod observer;
pub mod query;
pub mod route;

pub use classifier::{AdminFamily, Classifier, Intent};
pub use compiler::QueryCompiler;
pub use config::{load_config, CompilerConfig, ConfigError};
pub use error::CompileError;
pub use extract::{Extractors, FacetExtractor, Facets};
pub use observer::{CompileObserver, Facet, TracingObserver};
pub use query::{assemble, CanonicalQuery, Clause, Query, SearchRequest};
pub use route::{Method, Route};

use regex::Regex;

/// The one error message callers ever see.
pub const UNSUPPORTED_MESSAGE: &str = "Unsupported query. Please rephrase or check available APIs.";

/// Result count used when the utterance does not ask for one.
pub const DEFAULT_SIZE: u64 = 50;

/// Field every search is sorted and time-filtered on.
pub const TIMESTAMP_FIELD: &str = "@timestamp";

// every pattern in this crate is a literal, a failure here is a typo
pub(crate) fn compile_pattern(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

pub(crate) fn compile_patterns(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| compile_pattern(p)).collect()
}

// LOG LEVEL //

/// Log severity levels a search can filter on

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Canonicalize a level word or one of its synonyms
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "error" | "errors" => Some(Self::Error),
            "warn" | "warning" | "warnings" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }

    // value written into the log.level match clause
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

// TIME //

/// Calendar units a relative time range can be expressed in

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// Map a unit word (singular, plural or abbreviation) to its unit
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "minute" | "minutes" | "min" => Some(Self::Minute),
            "hour" | "hours" | "hr" | "hrs" => Some(Self::Hour),
            "day" | "days" => Some(Self::Day),
            "week" | "weeks" => Some(Self::Week),
            "month" | "months" => Some(Self::Month),
            "year" | "years" => Some(Self::Year),
            _ => None,
        }
    }

    /// Engine date-math code. Month and minute differ only by case.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Minute => "m",
            Self::Hour => "h",
            Self::Day => "d",
            Self::Week => "w",
            Self::Month => "M",
            Self::Year => "y",
        }
    }
}

/// Time window a search is restricted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeRange {
    /// now minus amount * unit, open-ended.
    /// The amount is the digit run as typed, leading zeros included.
    Relative { amount: String, unit: TimeUnit },
    Today,
    Yesterday,
}

impl TimeRange {
    // lower bound in engine date math
    pub fn gte(&self) -> String {
        match self {
            Self::Relative { amount, unit } => format!("now-{}{}", amount, unit.code()),
            Self::Today => "now/d".to_string(),
            Self::Yesterday => "now-1d/d".to_string(),
        }
    }

    // upper bound, only yesterday is closed
    pub fn lt(&self) -> Option<&'static str> {
        match self {
            Self::Yesterday => Some("now/d"),
            _ => None,
        }
    }
}
