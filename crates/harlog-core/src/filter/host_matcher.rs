use glob::Pattern;

/// Host pattern for selecting HAR entries
#[derive(Debug, Clone)]
pub enum HostPattern {
    /// Exact hostname match (case-insensitive)
    Exact(String),
    /// Glob pattern match (e.g., *.example.com)
    Glob(Pattern),
}

impl HostPattern {
    /// Parse a host pattern string.
    ///
    /// A pattern containing '*' or '?' is treated as a glob; anything else
    /// is an exact, case-insensitive hostname.
    pub fn parse(pattern: &str) -> crate::Result<Self> {
        let lower = pattern.to_lowercase();
        if lower.contains('*') || lower.contains('?') {
            let glob = Pattern::new(&lower).map_err(|e| {
                crate::Error::InvalidPattern(format!("Invalid glob pattern '{}': {}", pattern, e))
            })?;
            Ok(HostPattern::Glob(glob))
        } else {
            Ok(HostPattern::Exact(lower))
        }
    }

    /// Check if a hostname matches this pattern (case-insensitive).
    pub fn matches(&self, hostname: &str) -> bool {
        let hostname = hostname.to_lowercase();
        match self {
            HostPattern::Exact(exact) => hostname == *exact,
            HostPattern::Glob(glob) => glob.matches(&hostname),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_case_insensitive() {
        let pattern = HostPattern::parse("API.Example.Com").unwrap();
        assert!(pattern.matches("api.example.com"));
        assert!(pattern.matches("API.EXAMPLE.COM"));
        assert!(!pattern.matches("cdn.example.com"));
    }

    #[test]
    fn test_glob_subdomain_wildcard() {
        let pattern = HostPattern::parse("*.example.com").unwrap();
        assert!(pattern.matches("api.example.com"));
        assert!(pattern.matches("cdn.example.com"));
        assert!(!pattern.matches("example.com"));
        assert!(!pattern.matches("api.other.com"));
    }

    #[test]
    fn test_glob_question_mark() {
        let pattern = HostPattern::parse("api?.example.com").unwrap();
        assert!(pattern.matches("api1.example.com"));
        assert!(!pattern.matches("api.example.com"));
        assert!(!pattern.matches("api12.example.com"));
    }

    #[test]
    fn test_invalid_glob_rejected() {
        assert!(HostPattern::parse("[invalid.example.com").is_err());
    }
}
