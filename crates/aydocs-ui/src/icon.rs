//! Section icons.

use aydocs_core::SectionIcon;
use leptos::prelude::*;

/// Glyph drawn for an icon token.
pub fn glyph(icon: SectionIcon) -> &'static str {
    match icon {
        SectionIcon::FileText => "📄",
        SectionIcon::Download => "⬇",
        SectionIcon::Terminal => "⌨",
        SectionIcon::Code => "⟨⟩",
        SectionIcon::Zap => "⚡",
        SectionIcon::Calculator => "±",
        SectionIcon::Type => "T",
        SectionIcon::List => "☰",
        SectionIcon::Globe => "🌐",
        SectionIcon::Clock => "⏱",
        SectionIcon::Database => "🗄",
    }
}

/// Decorative icon; hidden from assistive technology.
#[component]
pub fn Icon(icon: SectionIcon) -> impl IntoView {
    let class = format!("aydocs-icon aydocs-icon-{}", icon.name());
    view! {
      <span class=class aria-hidden="true">
        {glyph(icon)}
      </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_a_glyph() {
        for icon in [
            SectionIcon::FileText,
            SectionIcon::Download,
            SectionIcon::Terminal,
            SectionIcon::Code,
            SectionIcon::Zap,
            SectionIcon::Calculator,
            SectionIcon::Type,
            SectionIcon::List,
            SectionIcon::Globe,
            SectionIcon::Clock,
            SectionIcon::Database,
        ] {
            assert!(!glyph(icon).is_empty(), "{icon:?}");
        }
    }
}
