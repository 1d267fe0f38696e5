/// Explicit registry of scheme plugins

use tracing::{debug, warn};

use super::Scheme;

/// Collection of available partition schemes
///
/// Populated once during initialization and read-only afterwards. Lookup
/// order is not part of the contract.
#[derive(Default)]
pub struct SchemeRegistry {
    schemes: Vec<Box<dyn Scheme>>,
}

impl SchemeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            schemes: Vec::new(),
        }
    }

    /// Create a registry from a list of schemes
    ///
    /// Schemes whose name duplicates an earlier entry are dropped.
    pub fn with_schemes<I>(schemes: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Scheme>>,
    {
        let mut registry = Self::new();
        for scheme in schemes {
            registry.register(scheme);
        }
        registry
    }

    /// Add a scheme
    ///
    /// Returns `false` and discards the scheme if one with the same name
    /// (ignoring case) is already registered.
    pub fn register(&mut self, scheme: Box<dyn Scheme>) -> bool {
        if self.find(scheme.name()).is_some() {
            warn!("Ignoring duplicate scheme {}", scheme.name());
            return false;
        }
        debug!("Registered scheme {}", scheme.name());
        self.schemes.push(scheme);
        true
    }

    /// Find a scheme by case-insensitive name
    pub fn find(&self, name: &str) -> Option<&dyn Scheme> {
        self.schemes
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .map(|s| s.as_ref())
    }

    /// Iterate over all registered schemes
    pub fn iter(&self) -> impl Iterator<Item = &dyn Scheme> {
        self.schemes.iter().map(|s| s.as_ref())
    }

    /// Names of all registered schemes
    pub fn names(&self) -> Vec<&str> {
        self.schemes.iter().map(|s| s.name()).collect()
    }

    /// Number of registered schemes
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Is the registry empty?
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::mock::MockScheme;

    fn registry() -> SchemeRegistry {
        SchemeRegistry::with_schemes([
            Box::new(MockScheme::mbr()) as Box<dyn Scheme>,
            Box::new(MockScheme::new("gpt")) as Box<dyn Scheme>,
        ])
    }

    #[test]
    fn test_find_case_insensitive() {
        let registry = registry();
        assert_eq!(registry.find("MBR").map(|s| s.name()), Some("mbr"));
        assert_eq!(registry.find("Gpt").map(|s| s.name()), Some("gpt"));
        assert!(registry.find("zzz").is_none());
        assert_eq!(registry.find("gpt").unwrap().description(), "");
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = registry();
        assert!(!registry.register(Box::new(MockScheme::new("GPT"))));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_names() {
        let registry = registry();
        let mut names = registry.names();
        names.sort();
        assert_eq!(names, vec!["gpt", "mbr"]);
        assert!(!registry.is_empty());
        assert!(SchemeRegistry::new().is_empty());
    }
}
