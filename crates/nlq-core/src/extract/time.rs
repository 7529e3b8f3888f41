// Time range extractor
// "last N <unit>" first, then the literal days: today before yesterday

use super::FacetExtractor;
use crate::error::CompileError;
use crate::{compile_pattern, TimeRange, TimeUnit};
use regex::Regex;

pub struct TimeExtractor {
    relative_pattern: Regex,
}

impl TimeExtractor {
    pub fn new() -> Self {
        Self {
            // alternatives mirror TimeUnit::from_word
            relative_pattern: compile_pattern(
                r"last\s+([0-9]+)\s+(minute|minutes|min|hour|hours|hr|hrs|day|days|week|weeks|month|months|year|years)",
            ),
        }
    }

    fn relative(&self, query: &str) -> Result<Option<TimeRange>, CompileError> {
        let Some(caps) = self.relative_pattern.captures(query) else {
            return Ok(None);
        };
        let (Some(amount), Some(unit)) = (caps.get(1), caps.get(2)) else {
            return Ok(None);
        };
        // digits are carried through as written
        Ok(TimeUnit::from_word(unit.as_str()).map(|unit| TimeRange::Relative {
            amount: amount.as_str().to_string(),
            unit,
        }))
    }
}

impl Default for TimeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FacetExtractor for TimeExtractor {
    type Output = TimeRange;

    fn name(&self) -> &'static str {
        "time"
    }

    fn extract(&self, query: &str) -> Result<Option<TimeRange>, CompileError> {
        if let Some(range) = self.relative(query)? {
            return Ok(Some(range));
        }
        if query.contains("today") {
            return Ok(Some(TimeRange::Today));
        }
        if query.contains("yesterday") {
            return Ok(Some(TimeRange::Yesterday));
        }
        Ok(None)
    }
}
