//! facet extractors - pull level, service, time, terms and size out of a search utterance

pub mod level;
pub mod service;
pub mod size;
pub mod terms;
pub mod time;

pub use level::LevelExtractor;
pub use service::ServiceExtractor;
pub use size::SizeExtractor;
pub use terms::TermsExtractor;
pub use time::TimeExtractor;

use crate::error::CompileError;
use crate::{LogLevel, TimeRange};

// Extractor trait - every facet implements this
// Ok(None) means the facet is absent, Err is a real fault

pub trait FacetExtractor: Send + Sync {
    type Output;

    fn name(&self) -> &'static str;
    fn extract(&self, query: &str) -> Result<Option<Self::Output>, CompileError>;
}

/// Everything extracted from one search utterance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub level: Option<LogLevel>,
    pub service: Option<String>,
    pub time: Option<TimeRange>,
    pub terms: Vec<String>,
    pub size: Option<u64>,
}

impl Facets {
    // true when no clause would be produced, size alone does not count
    pub fn is_unfiltered(&self) -> bool {
        self.level.is_none() && self.service.is_none() && self.time.is_none() && self.terms.is_empty()
    }
}

// The five extractors, compiled once and run in assembly order

pub struct Extractors {
    level: LevelExtractor,
    service: ServiceExtractor,
    time: TimeExtractor,
    terms: TermsExtractor,
    size: SizeExtractor,
}

impl Extractors {
    pub fn new() -> Self {
        Self {
            level: LevelExtractor,
            service: ServiceExtractor::new(),
            time: TimeExtractor::new(),
            terms: TermsExtractor::new(),
            size: SizeExtractor::new(),
        }
    }

    // level -> service -> time -> terms -> size
    pub fn extract(&self, query: &str) -> Result<Facets, CompileError> {
        Ok(Facets {
            level: self.level.extract(query)?,
            service: self.service.extract(query)?,
            time: self.time.extract(query)?,
            terms: self.terms.extract(query)?.unwrap_or_default(),
            size: self.size.extract(query)?,
        })
    }
}

impl Default for Extractors {
    fn default() -> Self {
        Self::new()
    }
}

// parse a captured run of ascii digits, overflow is a fault not a miss
pub(crate) fn parse_number<T: std::str::FromStr>(facet: &'static str, digits: &str) -> Result<T, CompileError> {
    digits
        .parse::<T>()
        .map_err(|_| CompileError::out_of_range(facet, digits))
}
