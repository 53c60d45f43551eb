//! AY Docs Core Library
//!
//! Section registry, navigation controller, and configuration for the AY
//! language documentation site.
//!
//! The crate has no browser dependencies: the DOM is reached through the
//! [`ScrollHost`] trait, which the UI crate implements with `web-sys` and the
//! tests implement with an in-memory page.
//!
//! # Example
//!
//! ```
//! use aydocs_core::{
//!     NavigationConfig, NavigationController, SectionDescriptor, SectionIcon, SectionRegistry,
//!     scroll::NullScrollHost,
//! };
//!
//! let registry = SectionRegistry::new(vec![
//!     SectionDescriptor::new("core", "Core Functions", SectionIcon::Zap),
//!     SectionDescriptor::new("math", "Math Functions", SectionIcon::Calculator),
//! ])
//! .unwrap();
//!
//! let mut nav = NavigationController::new(registry, NavigationConfig::default());
//! nav.activate("math", &mut NullScrollHost);
//! assert_eq!(nav.state().active_section_id(), "math");
//! ```

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod fragment;
pub mod registry;
pub mod scroll;
pub mod section;
pub mod viewport;

pub use config::{Config, NavigationConfig, ServerConfig, SiteConfig};
pub use controller::{NavigationController, NavigationState};
pub use error::{CoreError, NavError, Result};
pub use feedback::{CopyFeedback, CopyStatus};
pub use fragment::parse_fragment;
pub use registry::SectionRegistry;
pub use scroll::{ScrollBehavior, ScrollHost, ScrollSnapshot};
pub use section::{ExternalLink, SectionDescriptor, SectionIcon};
pub use viewport::ViewportClass;
