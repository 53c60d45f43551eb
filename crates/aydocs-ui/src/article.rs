//! Content building blocks for docs pages.

use leptos::prelude::*;

use crate::{icon::Icon, navigation::use_navigation};

/// Tone of a [`Callout`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CalloutTone {
    #[default]
    Info,
    Note,
    Warning,
}

impl CalloutTone {
    fn class(&self) -> &'static str {
        match self {
            Self::Info => "aydocs-callout aydocs-callout-info",
            Self::Note => "aydocs-callout aydocs-callout-note",
            Self::Warning => "aydocs-callout aydocs-callout-warning",
        }
    }
}

/// Anchored content section.
///
/// Label and icon come from the page's registry, so the anchor id is the
/// same string the sidebar jumps to.
#[component]
pub fn DocSection(
    /// Section id declared in the page registry.
    #[prop(into)]
    id: String,
    /// Section body.
    children: Children,
) -> impl IntoView {
    let descriptor = use_navigation().and_then(|nav| nav.section(&id));
    if descriptor.is_none() {
        tracing::warn!(section = %id, "section is not declared in the page registry");
    }

    let heading = descriptor.map(|section| {
        view! {
          <h2 class="aydocs-section-title">
            <Icon icon=section.icon />
            {section.label}
          </h2>
        }
    });

    view! {
      <section id=id class="aydocs-section">
        {heading}
        {children()}
      </section>
    }
}

/// Prose wrapper for styled text content.
#[component]
pub fn Prose(
    /// Children content.
    children: Children,
) -> impl IntoView {
    view! { <div class="aydocs-prose">{children()}</div> }
}

/// Preformatted AY code sample.
#[component]
pub fn CodeBlock(
    /// Source text.
    #[prop(into)]
    code: String,
    /// Caption above the block.
    #[prop(optional, into)]
    title: Option<String>,
) -> impl IntoView {
    view! {
      <figure class="aydocs-code">
        {title.map(|t| view! { <figcaption class="aydocs-code-title">{t}</figcaption> })}
        <pre>
          <code>{code}</code>
        </pre>
      </figure>
    }
}

/// Highlighted aside.
#[component]
pub fn Callout(
    /// Visual tone.
    #[prop(optional)]
    tone: CalloutTone,
    /// Heading.
    #[prop(optional, into)]
    title: Option<String>,
    /// Body.
    children: Children,
) -> impl IntoView {
    view! {
      <aside class=tone.class()>
        {title.map(|t| view! { <h4 class="aydocs-callout-title">{t}</h4> })}
        {children()}
      </aside>
    }
}

/// A built-in function card: signature, description, and example.
#[component]
pub fn ApiEntry(
    /// Call signature, e.g. `round(num, precision?)`.
    signature: &'static str,
    /// One-line description.
    description: &'static str,
    /// Example usage.
    #[prop(default = None)]
    example: Option<&'static str>,
) -> impl IntoView {
    view! {
      <div class="aydocs-api-entry">
        <h4 class="aydocs-api-signature">{signature}</h4>
        <p class="aydocs-api-description">{description}</p>
        {example
          .map(|code| {
            view! {
              <pre class="aydocs-api-example">
                <code>{code}</code>
              </pre>
            }
          })}
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callout_classes() {
        assert_eq!(CalloutTone::default(), CalloutTone::Info);
        assert!(CalloutTone::Warning.class().ends_with("aydocs-callout-warning"));
        assert!(CalloutTone::Note.class().starts_with("aydocs-callout "));
    }
}
