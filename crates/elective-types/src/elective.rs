use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Elective {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub credits: u32,
    #[serde(default)]
    pub lecturer: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("elective slug must not be empty (title: {0:?})")]
    EmptySlug(String),
    #[error("duplicate elective slug {0:?}")]
    DuplicateSlug(String),
}

/// Ordered set of electives, unique by slug.
#[derive(Clone, Debug, Default)]
pub struct ElectiveCatalog {
    electives: Vec<Elective>,
}

impl ElectiveCatalog {
    pub fn new(electives: Vec<Elective>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for elective in &electives {
            if elective.slug.trim().is_empty() {
                return Err(CatalogError::EmptySlug(elective.title.clone()));
            }
            // Slugs are path segments, so they double as route params.
            if !seen.insert(elective.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(elective.slug.clone()));
            }
        }

        Ok(Self { electives })
    }

    pub fn all(&self) -> &[Elective] {
        &self.electives
    }

    pub fn find(&self, slug: &str) -> Option<&Elective> {
        self.electives.iter().find(|e| e.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.electives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.electives.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elective(slug: &str, title: &str) -> Elective {
        Elective {
            slug: slug.into(),
            title: title.into(),
            summary: String::new(),
            credits: 5,
            lecturer: None,
        }
    }

    #[test]
    fn test_catalog_keeps_order_and_finds_by_slug() {
        let catalog = ElectiveCatalog::new(vec![
            elective("compilers", "Compiler Construction"),
            elective("cryptography", "Applied Cryptography"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all()[0].slug, "compilers");
        assert_eq!(
            catalog.find("cryptography").map(|e| e.title.as_str()),
            Some("Applied Cryptography")
        );
        assert!(catalog.find("databases").is_none());
    }

    #[test]
    fn test_catalog_rejects_duplicate_slug() {
        let result = ElectiveCatalog::new(vec![
            elective("compilers", "Compiler Construction"),
            elective("compilers", "Compilers II"),
        ]);

        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateSlug("compilers".into())
        );
    }

    #[test]
    fn test_catalog_rejects_blank_slug() {
        let result = ElectiveCatalog::new(vec![elective("  ", "Nameless")]);
        assert_eq!(result.unwrap_err(), CatalogError::EmptySlug("Nameless".into()));
    }

    #[test]
    fn test_elective_optional_fields_default() {
        let parsed: Elective =
            serde_json::from_str(r#"{"slug":"ethics","title":"Computing Ethics"}"#).unwrap();

        assert_eq!(parsed.credits, 0);
        assert!(parsed.summary.is_empty());
        assert!(parsed.lecturer.is_none());
    }
}
