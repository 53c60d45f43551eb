//! AY Docs UI Components
//!
//! Leptos components for the AY documentation site.
//!
//! # Components
//!
//! ## Navigation
//! - [`DocsLayout`] - Page shell owning the section controller
//! - [`Sidebar`] - Section list with the active entry highlighted
//! - [`MenuButton`] / [`Backdrop`] - Mobile overlay toggle and dismiss target
//! - [`BackToTop`] / [`DocsFooter`] - Jump back to the first section
//!
//! ## Article
//! - [`DocSection`] - Anchored section whose heading comes from the registry
//! - [`Prose`], [`CodeBlock`], [`Callout`], [`ApiEntry`]
//!
//! ## Misc
//! - [`CopyButton`] - Copy text with transient feedback
//!
//! # Example
//!
//! ```ignore
//! use aydocs_core::{SectionDescriptor, SectionIcon, SectionRegistry};
//! use aydocs_ui::{DocSection, DocsLayout};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Page() -> impl IntoView {
//!     let registry = SectionRegistry::new(vec![SectionDescriptor::new(
//!         "introduction",
//!         "Introduction",
//!         SectionIcon::FileText,
//!     )])
//!     .unwrap();
//!
//!     view! {
//!         <DocsLayout registry=registry title="AY Docs">
//!             <DocSection id="introduction">"Hello"</DocSection>
//!         </DocsLayout>
//!     }
//! }
//! ```

pub mod article;
pub mod copy;
pub mod dom;
pub mod icon;
pub mod navigation;

pub use article::{ApiEntry, Callout, CalloutTone, CodeBlock, DocSection, Prose};
pub use copy::CopyButton;
pub use dom::DomScrollHost;
pub use icon::Icon;
pub use navigation::{
    BackToTop, Backdrop, DocsFooter, DocsLayout, MenuButton, NavContext, Sidebar, use_navigation,
};
