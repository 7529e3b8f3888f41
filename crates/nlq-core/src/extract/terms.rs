// Search term extractor
// whatever is left once service, time and level phrases are stripped

use super::service::SERVICE_PHRASE_PATTERNS;
use super::FacetExtractor;
use crate::{compile_pattern, compile_patterns};
use crate::error::CompileError;
use regex::Regex;
use std::collections::HashSet;

// filler verbs, prepositions and words the other facets already cover
const STOP_WORDS: &[&str] = &[
    "get", "show", "find", "search", "logs", "log", "details", "of", "in", "for",
    "last", "minutes", "minute", "hours", "hour", "days", "day", "service", "errors",
    "error", "warnings", "warning", "info", "debug", "trace", "the", "and", "with",
    "want", "checkout", "payment", "user", "auth", "authentication", "from", "me",
    "cluster", "health", "status", "list", "nodes", "indices", "shards", "top",
    "results", "limit", "first", "today", "yesterday", "complex", "unsupported",
    "that", "should", "fail", "query", "api", "to", "a", "an", "is", "are", "was",
    "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
];

const TIME_PHRASE_PATTERNS: &[&str] = &[r"last\s+[0-9]+\s+\w+", r"today", r"yesterday"];

const LEVEL_WORD_PATTERN: &str = r"\b(error|errors|warn|warning|warnings|info|debug|trace)\b";

pub struct TermsExtractor {
    // applied in order: service phrases, time phrases, level words
    strip_patterns: Vec<Regex>,
    word_pattern: Regex,
    stop_words: HashSet<&'static str>,
}

impl TermsExtractor {
    pub fn new() -> Self {
        let mut strip_patterns = compile_patterns(SERVICE_PHRASE_PATTERNS);
        strip_patterns.extend(compile_patterns(TIME_PHRASE_PATTERNS));
        strip_patterns.push(compile_pattern(LEVEL_WORD_PATTERN));

        Self {
            strip_patterns,
            word_pattern: compile_pattern(r"\b[a-zA-Z]+\b"),
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    fn strip(&self, query: &str) -> String {
        self.strip_patterns
            .iter()
            .fold(query.to_string(), |text, re| re.replace_all(&text, "").into_owned())
    }

    fn keep(&self, word: &str) -> bool {
        !self.stop_words.contains(word)
            && word.len() > 2
            && !word.chars().all(|c| c.is_ascii_digit())
    }
}

impl Default for TermsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FacetExtractor for TermsExtractor {
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        "terms"
    }

    fn extract(&self, query: &str) -> Result<Option<Vec<String>>, CompileError> {
        let cleaned = self.strip(query);
        let terms: Vec<String> = self
            .word_pattern
            .find_iter(&cleaned)
            .map(|m| m.as_str())
            .filter(|word| self.keep(word))
            .map(str::to_string)
            .collect();

        Ok((!terms.is_empty()).then_some(terms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(query: &str) -> Vec<String> {
        TermsExtractor::new().extract(query).unwrap().unwrap_or_default()
    }

    #[test]
    fn test_leftover_words_in_order() {
        assert_eq!(
            terms("search for database connection errors in last 30 minutes"),
            vec!["database", "connection"]
        );
    }

    #[test]
    fn test_service_and_time_phrases_removed() {
        assert_eq!(terms("find timeout errors in payment-service last 15 minutes"), vec!["timeout"]);
        assert!(terms("i want to get details of errors in last 5 minutes for checkout-service").is_empty());
    }

    #[test]
    fn test_short_and_stop_words_dropped() {
        assert!(terms("show me the logs").is_empty());
        assert_eq!(terms("go to db refused"), vec!["refused"]);
    }

    #[test]
    fn test_duplicates_kept() {
        assert_eq!(terms("timeout then timeout"), vec!["timeout", "then", "timeout"]);
    }

    #[test]
    fn test_words_glued_to_digits_skipped() {
        // \b[a-zA-Z]+\b needs a boundary on both sides
        assert_eq!(terms("oom2 killed"), vec!["killed"]);
    }
}
