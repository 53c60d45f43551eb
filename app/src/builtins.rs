use aydocs_core::catalog::{self, BUILTINS_PATH, DOCS_PATH};
use aydocs_ui::{ApiEntry, Callout, DocSection, DocsFooter, DocsLayout, use_navigation};
use leptos::{either::Either, prelude::*};

use crate::{
    PageUnavailable,
    reference::{self, BuiltinGroup, ReferenceSection},
    use_settings,
};

/// `/docs/builtins`: the standard library reference.
#[component]
pub fn BuiltinsPage() -> impl IntoView {
    let settings = use_settings();

    match catalog::builtins_sections() {
        Ok(registry) => Either::Left(view! {
          <DocsLayout
            registry=registry
            config=settings.navigation
            title="AY Built-ins"
            subtitle="Standard Library"
          >
            <header class="aydocs-page-header">
              <h1>"Built-in Functions"</h1>
              <p>
                "AY comes with a rich standard library of built-in functions for common programming tasks."
              </p>
            </header>

            <ReferenceSections />

            <DocsFooter back_href=DOCS_PATH back_label="Back to Documentation" />
          </DocsLayout>
        }),
        Err(error) => Either::Right(view! { <PageUnavailable path=BUILTINS_PATH error=error /> }),
    }
}

/// Reference content for every section of the enclosing page, in registry
/// order so anchors and sidebar agree.
fn page_reference() -> Vec<&'static ReferenceSection> {
    let Some(nav) = use_navigation() else {
        tracing::warn!("reference sections rendered outside a docs layout");
        return Vec::new();
    };

    nav.sections()
        .iter()
        .filter_map(|section| {
            let content = reference::section(&section.id);
            if content.is_none() {
                tracing::warn!(section = %section.id, "no reference content for section");
            }
            content
        })
        .collect()
}

/// Must render inside [`DocsLayout`]: sections read the page registry from context.
#[component]
fn ReferenceSections() -> impl IntoView {
    page_reference()
        .into_iter()
        .map(|content| view! { <ReferenceBlock content=content /> })
        .collect_view()
}

#[component]
fn ReferenceBlock(content: &'static ReferenceSection) -> impl IntoView {
    view! {
      <DocSection id=content.id>
        {content.groups.iter().map(|group| view! { <Group group=group /> }).collect_view()}
        {content.note.map(|note| view! { <Callout title="Note:">
          <p>{note}</p>
        </Callout> })}
      </DocSection>
    }
}

#[component]
fn Group(group: &'static BuiltinGroup) -> impl IntoView {
    let entries = group
        .functions
        .iter()
        .map(|function| {
            view! {
              <ApiEntry
                signature=function.signature
                description=function.description
                example=function.example
              />
            }
        })
        .collect_view();

    view! {
      <div class="aydocs-api-group">
        {group.title.map(|title| view! { <h3>{title}</h3> })}
        <div class="aydocs-api-grid">{entries}</div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use aydocs_core::{NavigationConfig, NavigationController};
    use aydocs_ui::NavContext;

    use super::*;

    #[test]
    fn test_page_reference_follows_layout_registry() {
        let owner = Owner::new();
        owner.with(|| {
            assert!(page_reference().is_empty());

            let registry = catalog::builtins_sections().unwrap();
            let expected: Vec<_> = registry.iter().map(|s| s.id.clone()).collect();
            provide_context(NavContext::from_controller(NavigationController::new(
                registry,
                NavigationConfig::default(),
            )));

            let ids: Vec<_> = page_reference().iter().map(|s| s.id).collect();
            assert_eq!(ids, expected);

            // Every rendered anchor has a heading in the registry.
            let nav = use_navigation().unwrap();
            assert!(ids.iter().all(|id| nav.section(id).is_some()));
        });
    }
}
