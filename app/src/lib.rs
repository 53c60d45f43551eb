//! Routes and pages of the AY docs site.

use aydocs_core::{Config, NavError, NavigationConfig};
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

mod builtins;
mod docs;
mod landing;
pub mod reference;

pub use builtins::BuiltinsPage;
pub use docs::DocsPage;
pub use landing::LandingPage;

/// `aydocs.toml`, embedded at build time; the browser has no file system.
const SITE_CONFIG: &str = include_str!("../../aydocs.toml");

/// Settings every page reads from context.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSettings {
    pub title: String,
    pub description: Option<String>,
    pub navigation: NavigationConfig,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "AY Language".to_string(),
            description: None,
            navigation: NavigationConfig::default(),
        }
    }
}

impl SiteSettings {
    /// Settings from TOML text, or the defaults if it does not validate.
    pub fn from_toml(content: &str) -> Self {
        match Config::from_toml_str(content) {
            Ok(config) => Self {
                title: config.site.title,
                description: config.site.description,
                navigation: config.navigation,
            },
            Err(err) => {
                tracing::error!(error = %err, "invalid site configuration, using defaults");
                Self::default()
            }
        }
    }
}

/// Site settings from context, or the defaults outside [`App`].
pub fn use_settings() -> SiteSettings {
    use_context::<SiteSettings>().unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let settings = SiteSettings::from_toml(SITE_CONFIG);
    let title = settings.title.clone();
    let description = settings.description.clone().unwrap_or_default();
    provide_context(settings);

    view! {
      <Title text=title />
      <Meta name="description" content=description />

      <Router>
        <Routes fallback=|| view! { <p class="aydocs-not-found">"Page not found."</p> }>
          <Route path=path!("/") view=LandingPage />
          <Route path=path!("/docs") view=DocsPage />
          <Route path=path!("/docs/builtins") view=BuiltinsPage />
        </Routes>
      </Router>
    }
}

/// Shown instead of a docs page whose section registry is invalid.
#[component]
fn PageUnavailable(path: &'static str, error: NavError) -> impl IntoView {
    tracing::error!(%path, %error, "page registry rejected");

    view! {
      <div class="aydocs-unavailable" role="alert">
        <h1>"This page is unavailable"</h1>
        <p>{format!("The section list for {path} is invalid: {error}")}</p>
        <a href="/">"Back to home"</a>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = Config::from_toml_str(SITE_CONFIG).unwrap();
        assert_eq!(config.navigation.breakpoint_px, 1024);
        assert!(config.navigation.scroll_spy);
    }

    #[test]
    fn test_settings_fall_back_on_invalid_config() {
        let settings = SiteSettings::from_toml("[site]\ntitle = \"\"\nbase_url = \"x\"\n");
        assert_eq!(settings, SiteSettings::default());
    }

    #[test]
    fn test_settings_from_embedded_config() {
        let settings = SiteSettings::from_toml(SITE_CONFIG);
        assert_eq!(settings.title, "AY Language");
        assert!(settings.description.is_some());
    }
}
