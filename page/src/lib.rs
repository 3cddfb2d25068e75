//! # page-leptos
//!
//! Leptos renderer for the torkiq.ai landing page.
//!
//! The page is data: an ordered list of section descriptors
//! ([`types::PageModel`]). Rendering is a pure function of that list, and the
//! same components serve two targets:
//!
//! - **Static** (`ssr` feature, default) - [`render_page`] produces a complete
//!   HTML document string
//! - **Browser** (`csr` feature) - mount [`components::LandingPage`] into the
//!   document body
//!
//! After either render, [`smoke::SmokeChecker`] runs once against the result
//! through a [`smoke::DomProbe`] and reports what it finds without ever
//! failing the render.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_leptos::{content::default_page, render_page, styles::StyleAssets};
//!
//! let model = default_page(2025);
//! let html = render_page(&model, &StyleAssets::default());
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("id=\"pricing\""));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Content model
//! - [`content`] - The shipped page copy
//! - [`components`] - Leptos components, one per section kind
//! - [`styles`] - Class lists, accent token, base CSS
//! - [`smoke`] - Post-render checks, probe and sink traits
//!
//! ---
//!
//! Developed by The Everpower Labs Team (c)2025

// the hero section's nested view type exceeds the default limit
#![recursion_limit = "256"]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod smoke;
pub mod styles;
pub mod types;

#[cfg(feature = "ssr")]
use components::PageDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;
#[cfg(feature = "ssr")]
use styles::StyleAssets;
#[cfg(feature = "ssr")]
use types::PageModel;

/// Render the complete HTML document for a model.
///
/// Deterministic: the same model and assets always produce the same string.
///
/// # Example
///
/// ```rust
/// use page_leptos::{render_page, styles::StyleAssets, types::PageModel};
///
/// let html = render_page(&PageModel::default(), &StyleAssets::default());
/// assert!(html.contains("<html"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(model: &PageModel, assets: &StyleAssets) -> String {
    let doc = view! {
        <PageDocument model=model.clone() assets=assets.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{default_page, ids};
    use crate::types::{
        CallToAction, LeadCaptureContent, NavContent, SectionContent, SectionDescriptor,
        SectionKind,
    };
    use pretty_assertions::assert_eq;

    fn render_default() -> String {
        render_page(&default_page(2025), &StyleAssets::default())
    }

    #[test]
    fn renders_empty_model() {
        let html = render_page(&PageModel::default(), &StyleAssets::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<body>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_default(), render_default());
    }

    #[test]
    fn sections_render_in_model_order() {
        let html = render_default();
        let positions: Vec<usize> = [
            "data-section=\"nav\"",
            "data-section=\"hero\"",
            "data-section=\"problem\"",
            "data-section=\"features\"",
            "data-section=\"how-it-works\"",
            "data-section=\"social-proof\"",
            "data-section=\"pricing\"",
            "data-section=\"lead-capture\"",
            "data-section=\"footer\"",
        ]
        .iter()
        .map(|marker| html.find(marker).unwrap_or_else(|| panic!("{marker} missing")))
        .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn reordering_the_model_reorders_the_page() {
        let mut model = default_page(2025);
        model.sections.reverse();
        let html = render_page(&model, &StyleAssets::default());

        let footer = html.find("data-section=\"footer\"").expect("footer");
        let nav = html.find("data-section=\"nav\"").expect("nav");
        assert!(footer < nav);
    }

    #[test]
    fn declared_ids_become_element_ids() {
        let html = render_default();
        for id in [
            ids::FEATURES,
            ids::HOW,
            ids::PRICING,
            ids::ABOUT,
            ids::GET_STARTED,
            ids::DEMO,
        ] {
            let attr = format!("id=\"{id}\"");
            assert_eq!(html.matches(&attr).count(), 1, "{attr}");
        }
    }

    #[test]
    fn section_without_id_renders_without_id_attribute() {
        let mut model = default_page(2025);
        if let Some(section) = model.section_mut(SectionKind::Features) {
            section.id = None;
        }
        let html = render_page(&model, &StyleAssets::default());

        assert!(!html.contains("id=\"features\""));
        // content still there
        assert!(html.contains("Your AI agent factory"));
        assert!(html.contains("data-section=\"features\""));
    }

    #[test]
    fn primary_cta_is_marked_once_and_uses_accent() {
        let html = render_default();
        assert_eq!(html.matches("data-testid=\"cta-demo\"").count(), 1);
        assert_eq!(html.matches("data-testid=\"btn-waitlist\"").count(), 1);
        assert!(html.contains(crate::styles::ACCENT_TOKEN));
    }

    #[test]
    fn pricing_tiers_are_marked() {
        let html = render_default();
        for tier in ["Starter", "Professional", "Firm"] {
            assert!(html.contains(&format!("data-tier=\"{tier}\"")), "{tier}");
            // tier name is also the card heading
            assert!(html.contains(&format!(">{tier}</p>")), "{tier} heading");
        }
        assert_eq!(html.matches("data-tier=").count(), 3);
        assert!(html.contains("ring-2 ring-teal-600"));
    }

    #[test]
    fn waitlist_form_is_unwired_email_input() {
        let html = render_default();
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("required"));
        assert!(html.contains("placeholder=\"you@firm.com\""));
        assert!(!html.contains("action="));
        assert!(!html.contains("method="));
    }

    #[test]
    fn copyright_uses_model_year() {
        let html = render_page(&default_page(2031), &StyleAssets::default());
        assert!(html.contains("© 2031"));
    }

    #[test]
    fn stylesheet_script_is_optional() {
        let with = render_default();
        assert!(with.contains(crate::styles::DEFAULT_STYLESHEET_SCRIPT));

        let without = render_page(
            &default_page(2025),
            &StyleAssets {
                stylesheet_script: String::new(),
            },
        );
        assert!(!without.contains("<script"));
    }

    #[test]
    fn synthetic_model_renders_only_what_it_declares() {
        let model = PageModel {
            title: "Synthetic".into(),
            description: String::new(),
            sections: vec![
                SectionDescriptor::new(SectionContent::Nav(NavContent {
                    cta: CallToAction::new("Go", "#form").marked("cta-demo"),
                    ..NavContent::default()
                })),
                SectionDescriptor::with_id(
                    "form",
                    SectionContent::LeadCapture(LeadCaptureContent {
                        submit_label: "Join".into(),
                        submit_test_id: "btn-waitlist".into(),
                        ..LeadCaptureContent::default()
                    }),
                ),
            ],
        };
        let html = render_page(&model, &StyleAssets::default());

        assert!(html.contains("<title>Synthetic</title>"));
        assert!(html.contains("id=\"form\""));
        assert!(!html.contains("data-section=\"pricing\""));
        assert!(!html.contains("data-section=\"hero\""));
    }
}
