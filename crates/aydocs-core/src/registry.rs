//! Page-scoped section registry.

use std::collections::HashSet;

use crate::{
    error::NavError,
    section::{ExternalLink, SectionDescriptor},
};

/// The ordered, validated list of sections on one page.
///
/// Order is sidebar order; the first section is the default active one.
/// A registry is never empty and never holds two sections with the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
    external_links: Vec<ExternalLink>,
}

impl SectionRegistry {
    /// Build a registry, rejecting empty lists, blank ids, and duplicate ids.
    pub fn new(sections: Vec<SectionDescriptor>) -> Result<Self, NavError> {
        if sections.is_empty() {
            return Err(NavError::EmptyRegistry);
        }

        let mut seen = HashSet::with_capacity(sections.len());
        for (position, section) in sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(NavError::EmptySectionId(position));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(NavError::DuplicateSection(section.id.clone()));
            }
        }

        Ok(Self {
            sections,
            external_links: Vec::new(),
        })
    }

    /// Attach links to other pages, shown below the sections.
    pub fn with_external_links(mut self, links: Vec<ExternalLink>) -> Self {
        self.external_links = links;
        self
    }

    /// The default and fallback active section.
    pub fn first(&self) -> &SectionDescriptor {
        // `new` guarantees at least one section.
        &self.sections[0]
    }

    /// The last section in sidebar order.
    pub fn last(&self) -> &SectionDescriptor {
        &self.sections[self.sections.len() - 1]
    }

    /// Look up a section by id.
    pub fn get(&self, id: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Whether `id` names a section of this page.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Sidebar position of a section.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Sections in sidebar order.
    pub fn iter(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.sections.iter()
    }

    /// Sections as a slice.
    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    /// Links to other pages.
    pub fn external_links(&self) -> &[ExternalLink] {
        &self.external_links
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Never true for a registry built by [`SectionRegistry::new`].
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'a> IntoIterator for &'a SectionRegistry {
    type Item = &'a SectionDescriptor;
    type IntoIter = std::slice::Iter<'a, SectionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionIcon;

    fn sections(ids: &[&str]) -> Vec<SectionDescriptor> {
        ids.iter()
            .map(|id| SectionDescriptor::new(*id, id.to_uppercase(), SectionIcon::Code))
            .collect()
    }

    #[test]
    fn test_registry_preserves_order() {
        let registry = SectionRegistry::new(sections(&["core", "math", "string"])).unwrap();
        let ids: Vec<_> = registry.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["core", "math", "string"]);
        assert_eq!(registry.first().id, "core");
        assert_eq!(registry.last().id, "string");
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_registry_lookup() {
        let registry = SectionRegistry::new(sections(&["core", "math"])).unwrap();
        assert!(registry.contains("math"));
        assert!(!registry.contains("nonexistent"));
        assert_eq!(registry.position("math"), Some(1));
        assert_eq!(registry.get("core").map(|s| s.label.as_str()), Some("CORE"));
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let result = SectionRegistry::new(sections(&["core", "math", "core"]));
        assert_eq!(result, Err(NavError::DuplicateSection("core".to_string())));
    }

    #[test]
    fn test_registry_rejects_empty() {
        assert_eq!(SectionRegistry::new(Vec::new()), Err(NavError::EmptyRegistry));
    }

    #[test]
    fn test_registry_rejects_blank_id() {
        let result = SectionRegistry::new(sections(&["core", " "]));
        assert_eq!(result, Err(NavError::EmptySectionId(1)));
    }

    #[test]
    fn test_registry_external_links() {
        let registry = SectionRegistry::new(sections(&["core"]))
            .unwrap()
            .with_external_links(vec![ExternalLink::new("Back to Docs", "/docs")]);
        assert_eq!(registry.external_links().len(), 1);
        assert!(!registry.contains("/docs"));
    }
}
