//! Section descriptors and sidebar links.

use serde::{Deserialize, Serialize};

/// Display token for a sidebar entry.
///
/// The controller never looks inside it; the UI maps each variant to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionIcon {
    FileText,
    Download,
    Terminal,
    Code,
    Zap,
    Calculator,
    Type,
    List,
    Globe,
    Clock,
    Database,
}

impl SectionIcon {
    /// Stable kebab-case name, used for CSS class names.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FileText => "file-text",
            Self::Download => "download",
            Self::Terminal => "terminal",
            Self::Code => "code",
            Self::Zap => "zap",
            Self::Calculator => "calculator",
            Self::Type => "type",
            Self::List => "list",
            Self::Globe => "globe",
            Self::Clock => "clock",
            Self::Database => "database",
        }
    }
}

/// A navigable, anchorable block of page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    /// Anchor id, unique within a page.
    pub id: String,

    /// Sidebar label.
    pub label: String,

    /// Sidebar icon.
    pub icon: SectionIcon,
}

impl SectionDescriptor {
    /// Create a new section descriptor.
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: SectionIcon) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon,
        }
    }
}

/// A sidebar link to another page. Never scroll-tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    /// Display label.
    pub label: String,

    /// Link URL.
    pub href: String,
}

impl ExternalLink {
    /// Create a new external link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_descriptor_creation() {
        let section = SectionDescriptor::new("math", "Math Functions", SectionIcon::Calculator);
        assert_eq!(section.id, "math");
        assert_eq!(section.label, "Math Functions");
        assert_eq!(section.icon, SectionIcon::Calculator);
    }

    #[test]
    fn test_icon_serialization() {
        let json = serde_json::to_string(&SectionIcon::FileText).unwrap();
        assert_eq!(json, "\"file-text\"");
        assert_eq!(SectionIcon::FileText.name(), "file-text");
    }

    #[test]
    fn test_external_link_creation() {
        let link = ExternalLink::new("Back to Docs", "/docs");
        assert_eq!(link.label, "Back to Docs");
        assert_eq!(link.href, "/docs");
    }
}
