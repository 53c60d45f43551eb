//! Section registries for each documentation page.

use crate::{
    error::NavError,
    registry::SectionRegistry,
    section::{ExternalLink, SectionDescriptor, SectionIcon},
};

/// Route of the general documentation page.
pub const DOCS_PATH: &str = "/docs";

/// Route of the built-in function reference.
pub const BUILTINS_PATH: &str = "/docs/builtins";

/// Sections of the documentation page.
pub fn docs_sections() -> Result<SectionRegistry, NavError> {
    SectionRegistry::new(vec![
        SectionDescriptor::new("introduction", "Introduction", SectionIcon::FileText),
        SectionDescriptor::new("installation", "Installation", SectionIcon::Download),
        SectionDescriptor::new("compiler", "Using the Compiler", SectionIcon::Terminal),
        SectionDescriptor::new("variables", "Variables & Data Types", SectionIcon::Code),
    ])
    .map(|registry| {
        registry.with_external_links(vec![ExternalLink::new("Built-in Functions", BUILTINS_PATH)])
    })
}

/// Sections of the built-in function reference.
pub fn builtins_sections() -> Result<SectionRegistry, NavError> {
    SectionRegistry::new(vec![
        SectionDescriptor::new("core", "Core Functions", SectionIcon::Zap),
        SectionDescriptor::new("math", "Math Functions", SectionIcon::Calculator),
        SectionDescriptor::new("string", "String Functions", SectionIcon::Type),
        SectionDescriptor::new("array", "Array Functions", SectionIcon::List),
        SectionDescriptor::new("http", "HTTP Functions", SectionIcon::Globe),
        SectionDescriptor::new("datetime", "Date/Time Functions", SectionIcon::Clock),
        SectionDescriptor::new("files", "File System", SectionIcon::Database),
        SectionDescriptor::new("timers", "Timer Functions", SectionIcon::Terminal),
    ])
    .map(|registry| registry.with_external_links(vec![ExternalLink::new("Back to Docs", DOCS_PATH)]))
}

/// Every page with a section sidebar, keyed by route.
pub fn pages() -> Vec<(&'static str, Result<SectionRegistry, NavError>)> {
    vec![(DOCS_PATH, docs_sections()), (BUILTINS_PATH, builtins_sections())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_page_registries_are_valid() {
        for (path, registry) in pages() {
            assert!(registry.is_ok(), "{path}: {registry:?}");
        }
    }

    #[test]
    fn test_docs_sections() {
        let registry = docs_sections().unwrap();
        assert_eq!(registry.first().id, "introduction");
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.external_links()[0].href, BUILTINS_PATH);
    }

    #[test]
    fn test_builtins_sections() {
        let registry = builtins_sections().unwrap();
        assert_eq!(registry.first().id, "core");
        assert_eq!(registry.last().id, "timers");
        assert_eq!(registry.len(), 8);
        assert_eq!(registry.external_links()[0].href, DOCS_PATH);
    }
}
