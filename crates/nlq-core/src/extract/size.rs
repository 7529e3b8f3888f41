// Result size extractor

use super::{parse_number, FacetExtractor};
use crate::compile_patterns;
use crate::error::CompileError;
use regex::Regex;

const SIZE_PATTERNS: &[&str] = &[
    r"show\s+([0-9]+)\s+results?",
    r"limit\s+([0-9]+)",
    r"top\s+([0-9]+)",
    r"first\s+([0-9]+)",
];

pub struct SizeExtractor {
    patterns: Vec<Regex>,
}

impl SizeExtractor {
    pub fn new() -> Self {
        Self {
            patterns: compile_patterns(SIZE_PATTERNS),
        }
    }
}

impl Default for SizeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FacetExtractor for SizeExtractor {
    type Output = u64;

    fn name(&self) -> &'static str {
        "size"
    }

    fn extract(&self, query: &str) -> Result<Option<u64>, CompileError> {
        for pattern in &self.patterns {
            if let Some(digits) = pattern.captures(query).and_then(|caps| caps.get(1)) {
                let size: u64 = parse_number(self.name(), digits.as_str())?;
                // zero keeps the default
                return Ok((size > 0).then_some(size));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(query: &str) -> Option<u64> {
        SizeExtractor::new().extract(query).unwrap()
    }

    #[test]
    fn test_surface_forms() {
        assert_eq!(size("show 20 results"), Some(20));
        assert_eq!(size("show 1 result"), Some(1));
        assert_eq!(size("errors limit 5"), Some(5));
        assert_eq!(size("show top 100 errors"), Some(100));
        assert_eq!(size("first 10 warnings"), Some(10));
    }

    #[test]
    fn test_pattern_order() {
        // limit is tried before top
        assert_eq!(size("top 3 errors limit 7"), Some(7));
    }

    #[test]
    fn test_zero_and_missing() {
        assert_eq!(size("top 0 errors"), None);
        assert_eq!(size("show 20 logs"), None);
        assert_eq!(size("errors in last 5 minutes"), None);
    }

    #[test]
    fn test_sizes_past_u32() {
        assert_eq!(size("top 5000000000 errors"), Some(5_000_000_000));
        assert_eq!(size("limit 18446744073709551615"), Some(u64::MAX));
    }

    #[test]
    fn test_overflow_is_fault() {
        let result = SizeExtractor::new().extract("top 18446744073709551616 errors");
        assert!(matches!(result, Err(CompileError::NumberOutOfRange { facet: "size", .. })));
    }
}
