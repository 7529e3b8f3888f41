// Service name extractor
// four surface forms, tried in order, first match wins

use super::FacetExtractor;
use crate::compile_patterns;
use crate::error::CompileError;
use regex::Regex;

// the three "<name> service" forms, also stripped before term extraction
pub(crate) const SERVICE_PHRASE_PATTERNS: &[&str] = &[
    r"for\s+[a-zA-Z0-9\-_]+[-\s]*service",
    r"in\s+[a-zA-Z0-9\-_]+[-\s]*service",
    r"[a-zA-Z0-9\-_]+[-\s]*service",
];

const SERVICE_PATTERNS: &[&str] = &[
    r"for\s+([a-zA-Z0-9\-_]+)[-\s]*service",
    r"in\s+([a-zA-Z0-9\-_]+)[-\s]*service",
    r"([a-zA-Z0-9\-_]+)[-\s]*service",
    r"service\s+([a-zA-Z0-9\-_]+)",
];

pub struct ServiceExtractor {
    patterns: Vec<Regex>,
}

impl ServiceExtractor {
    pub fn new() -> Self {
        Self {
            patterns: compile_patterns(SERVICE_PATTERNS),
        }
    }
}

impl Default for ServiceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FacetExtractor for ServiceExtractor {
    type Output = String;

    fn name(&self) -> &'static str {
        "service"
    }

    fn extract(&self, query: &str) -> Result<Option<String>, CompileError> {
        for pattern in &self.patterns {
            if let Some(name) = pattern.captures(query).and_then(|caps| caps.get(1)) {
                let name = name.as_str();
                // "checkout-service" captures as "checkout-", put the suffix back
                if name.ends_with('-') {
                    return Ok(Some(format!("{}service", name)));
                }
                return Ok(Some(name.to_string()));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(query: &str) -> Option<String> {
        ServiceExtractor::new().extract(query).unwrap()
    }

    #[test]
    fn test_hyphenated_name_rebuilt() {
        assert_eq!(
            service("errors in last 5 minutes for checkout-service"),
            Some("checkout-service".to_string())
        );
        assert_eq!(service("logs of auth-service"), Some("auth-service".to_string()));
    }

    #[test]
    fn test_spaced_name() {
        assert_eq!(service("errors in hydra service"), Some("hydra".to_string()));
        assert_eq!(service("payment service logs"), Some("payment".to_string()));
    }

    #[test]
    fn test_service_prefix_form() {
        assert_eq!(service("service billing errors"), Some("billing".to_string()));
    }

    #[test]
    fn test_bare_form_takes_preceding_word() {
        // any word in front of "service" is taken as the name
        assert_eq!(service("logs for service billing"), Some("for".to_string()));
    }

    #[test]
    fn test_for_beats_bare_form() {
        // the bare form would match "logs service" style text further left
        assert_eq!(
            service("web service logs for cart service"),
            Some("cart".to_string())
        );
    }

    #[test]
    fn test_no_service() {
        assert_eq!(service("errors in last hour"), None);
        assert_eq!(service("logs from api-gateway"), None);
    }
}
