// Log level extractor
// plain substring scan, first word in list order wins

use super::FacetExtractor;
use crate::error::CompileError;
use crate::LogLevel;

// scan order, "error" is checked before its plural
const LEVEL_WORDS: &[&str] = &[
    "error", "errors", "warn", "warning", "warnings", "info", "debug", "trace",
];

pub struct LevelExtractor;

impl FacetExtractor for LevelExtractor {
    type Output = LogLevel;

    fn name(&self) -> &'static str {
        "level"
    }

    fn extract(&self, query: &str) -> Result<Option<LogLevel>, CompileError> {
        Ok(LEVEL_WORDS
            .iter()
            .find(|word| query.contains(*word))
            .and_then(|word| LogLevel::from_word(word)))
    }
}
