//! Section sidebar, mobile overlay, and the layout that wires them to the browser.

use aydocs_core::{
    ExternalLink, NavigationConfig, NavigationController, SectionDescriptor, SectionRegistry,
};
use leptos::{ev, prelude::*};

use crate::{
    dom::{self, DomScrollHost},
    icon::Icon,
};

/// Handle to one page's navigation controller.
///
/// Cheap to copy; provided as context by [`DocsLayout`] so content
/// components can jump to sections.
#[derive(Debug, Clone, Copy)]
pub struct NavContext {
    controller: RwSignal<NavigationController>,
}

impl NavContext {
    /// Create the controller for a page, honoring the current URL fragment.
    pub fn new(registry: SectionRegistry, config: NavigationConfig) -> Self {
        let hash = dom::location_hash();
        Self::from_controller(NavigationController::with_fragment(
            registry,
            config,
            hash.as_deref(),
        ))
    }

    /// Wrap an existing controller.
    pub fn from_controller(controller: NavigationController) -> Self {
        Self {
            controller: RwSignal::new(controller),
        }
    }

    /// Jump to a section; unknown ids are ignored.
    pub fn activate(&self, id: &str) {
        self.controller.update(|c| {
            c.activate(id, &mut DomScrollHost);
        });
    }

    /// Jump to the first section.
    pub fn activate_first(&self) {
        let first = self
            .controller
            .with_untracked(|c| c.registry().first().id.clone());
        self.activate(&first);
    }

    pub fn toggle_overlay(&self) {
        self.controller.update(NavigationController::toggle_overlay);
    }

    pub fn close_overlay(&self) {
        self.controller.maybe_update(|c| {
            let was_open = c.state().overlay_open();
            c.close_overlay();
            was_open
        });
    }

    /// Whether the overlay is open. Tracked.
    pub fn overlay_open(&self) -> bool {
        self.controller.with(|c| c.state().overlay_open())
    }

    /// Whether `id` is the highlighted section. Tracked.
    pub fn is_active(&self, id: &str) -> bool {
        self.controller.with(|c| c.is_active(id))
    }

    /// Id of the highlighted section. Tracked.
    pub fn active_section_id(&self) -> String {
        self.controller
            .with(|c| c.state().active_section_id().to_string())
    }

    /// Descriptor for `id`, if the page declares it.
    pub fn section(&self, id: &str) -> Option<SectionDescriptor> {
        self.controller
            .with_untracked(|c| c.registry().get(id).cloned())
    }

    /// Sections of the page, in registry order.
    pub fn sections(&self) -> Vec<SectionDescriptor> {
        self.controller
            .with_untracked(|c| c.registry().sections().to_vec())
    }

    fn external_links(&self) -> Vec<ExternalLink> {
        self.controller
            .with_untracked(|c| c.registry().external_links().to_vec())
    }

    fn on_mount(&self) {
        self.controller.maybe_update(|c| {
            c.on_resize(dom::viewport_width());
            if c.restore_deep_link(&mut DomScrollHost) {
                return false;
            }
            c.sync_with_host(&DomScrollHost, dom::now_ms())
        });
    }

    fn on_resize(&self) {
        self.controller.maybe_update(|c| {
            let was_open = c.state().overlay_open();
            c.on_resize(dom::viewport_width());
            was_open != c.state().overlay_open()
        });
    }

    fn on_scroll(&self) {
        self.controller
            .maybe_update(|c| c.sync_with_host(&DomScrollHost, dom::now_ms()));
    }
}

/// Navigation context of the enclosing [`DocsLayout`], if any.
pub fn use_navigation() -> Option<NavContext> {
    use_context::<NavContext>()
}

/// Label announced for the menu button.
pub fn menu_label(open: bool) -> &'static str {
    if open { "Close menu" } else { "Open menu" }
}

/// Page shell with a section sidebar.
///
/// Owns the page's [`NavContext`] for as long as it is mounted and listens
/// to window resize, scroll, and Escape.
#[component]
pub fn DocsLayout(
    /// Sections of this page.
    registry: SectionRegistry,
    /// Controller tuning.
    #[prop(optional)]
    config: NavigationConfig,
    /// Sidebar heading.
    #[prop(into)]
    title: String,
    /// Line under the sidebar heading.
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Page content.
    children: Children,
) -> impl IntoView {
    let nav = NavContext::new(registry, config);
    provide_context(nav);

    let resize = window_event_listener(ev::resize, move |_| nav.on_resize());
    let scroll = window_event_listener(ev::scroll, move |_| nav.on_scroll());
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            nav.close_overlay();
        }
    });
    on_cleanup(move || {
        resize.remove();
        scroll.remove();
        keydown.remove();
    });

    // Runs once the sections are in the DOM.
    Effect::new(move |_| nav.on_mount());

    view! {
      <div class="aydocs-page">
        <MenuButton nav=nav />
        <Backdrop nav=nav />
        <div class="aydocs-shell">
          <Sidebar nav=nav title=title subtitle=subtitle />
          <main class="aydocs-content" data-active-section=move || nav.active_section_id()>
            <div class="aydocs-content-inner">{children()}</div>
          </main>
        </div>
      </div>
    }
}

/// Hamburger button; hidden on wide layouts by the stylesheet.
#[component]
pub fn MenuButton(nav: NavContext) -> impl IntoView {
    view! {
      <div class="aydocs-menu-button-wrap">
        <button
          type="button"
          class="aydocs-menu-button"
          aria-label=move || menu_label(nav.overlay_open())
          aria-expanded=move || nav.overlay_open().to_string()
          on:click=move |_| nav.toggle_overlay()
        >
          {move || if nav.overlay_open() { "✕" } else { "☰" }}
        </button>
      </div>
    }
}

/// Click-outside target behind the open overlay.
#[component]
pub fn Backdrop(nav: NavContext) -> impl IntoView {
    view! {
      <Show when=move || nav.overlay_open()>
        <div class="aydocs-backdrop" on:click=move |_| nav.close_overlay()></div>
      </Show>
    }
}

/// Section sidebar.
#[component]
pub fn Sidebar(
    nav: NavContext,
    /// Sidebar heading.
    title: String,
    /// Line under the heading.
    #[prop(default = None)]
    subtitle: Option<String>,
) -> impl IntoView {
    let sections = nav.sections();
    let links = nav.external_links();
    let has_links = !links.is_empty();

    view! {
      <aside
        class="aydocs-sidebar"
        class:open=move || nav.overlay_open()
        aria-label="Section navigation"
      >
        <div class="aydocs-sidebar-header">
          <img src="/ayscript.jpg" alt="AY Logo" class="aydocs-logo" />
          <div>
            <h2 class="aydocs-sidebar-title">{title}</h2>
            {subtitle.map(|s| view! { <p class="aydocs-sidebar-subtitle">{s}</p> })}
          </div>
        </div>

        <nav class="aydocs-sidebar-nav">
          <For
            each=move || sections.clone()
            key=|section| section.id.clone()
            children=move |section| {
              view! { <SidebarEntry nav=nav section=section /> }
            }
          />

        </nav>

        <Show when=move || has_links>
          <div class="aydocs-sidebar-links">
            <For
              each={
                let links = links.clone();
                move || links.clone()
              }
              key=|link| link.href.clone()
              children=|link| {
                view! {
                  <a href=link.href class="aydocs-sidebar-link">
                    <span aria-hidden="true">"→ "</span>
                    {link.label}
                  </a>
                }
              }
            />

          </div>
        </Show>
      </aside>
    }
}

/// One sidebar button.
#[component]
fn SidebarEntry(nav: NavContext, section: SectionDescriptor) -> impl IntoView {
    let id = section.id.clone();
    let is_active = Memo::new(move |_| nav.is_active(&id));
    let click_id = section.id.clone();

    view! {
      <button
        type="button"
        class="aydocs-nav-entry"
        class:active=move || is_active.get()
        aria-current=move || is_active.get().then_some("location")
        on:click=move |_| nav.activate(&click_id)
      >
        <Icon icon=section.icon />
        <span class="aydocs-nav-label">{section.label}</span>
      </button>
    }
}

/// Button that jumps back to the page's first section.
#[component]
pub fn BackToTop() -> impl IntoView {
    let nav = use_navigation();

    view! {
      <button
        type="button"
        class="aydocs-back-to-top"
        on:click=move |_| {
          if let Some(nav) = nav {
            nav.activate_first();
          }
        }
      >
        "Back to Top"
        <span aria-hidden="true">" →"</span>
      </button>
    }
}

/// Footer row of a docs page: optional link to another page, then Back to Top.
#[component]
pub fn DocsFooter(
    /// Link target on the left.
    #[prop(optional, into)]
    back_href: Option<String>,
    /// Link text on the left.
    #[prop(optional, into)]
    back_label: Option<String>,
) -> impl IntoView {
    let back = back_href.map(|href| {
        let label = back_label.unwrap_or_else(|| href.clone());
        view! {
          <a href=href class="aydocs-footer-link">
            <span aria-hidden="true">"← "</span>
            {label}
          </a>
        }
    });

    view! {
      <div class="aydocs-footer">
        <div>{back}</div>
        <BackToTop />
      </div>
    }
}
