//! # torkiq
//!
//! **Static builder for the torkiq.ai landing page.** Renders the page model
//! through `page-leptos` into a complete HTML document, writes it to disk and
//! smoke-checks the written markup once.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use page_leptos::smoke::SilentSink;
//! use torkiq::{config::TorkiqConfig, site::Site};
//!
//! let site = Site::from_config(&TorkiqConfig::default(), None);
//! let html = site.render();
//! let report = site.check(&html, &SilentSink);
//!
//! assert!(report.passed());
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! torkiq render                   # write dist/index.html, then smoke-check it
//! torkiq render --stdout          # print the document instead
//! torkiq check dist/index.html    # smoke-check an existing file
//! torkiq model > page.json        # dump the content model
//! torkiq render --model page.json # render an edited model
//! ```
//!
//! ---
//!
//! Developed by The Everpower Labs Team (c)2025

// ============================================================================
// Core Modules
// ============================================================================

/// Command-line surface (clap derive) and command dispatch.
pub mod cli;

/// Optional `.torkiq/config.toml` loading.
pub mod config;

/// Typed errors for file and model handling.
pub mod error;

/// `DomProbe` over raw HTML markup (lol_html).
pub mod probe;

/// Render, write and check pipeline.
pub mod site;

pub use error::{Error, Result};
