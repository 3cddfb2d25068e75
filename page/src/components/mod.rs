//! Leptos UI components for the landing page.
//!
//! One component per section kind, plus the document shell and a few shared
//! pieces. Every component takes owned payloads from [`crate::types`] and
//! holds no signals, so the same tree renders on the server (SSR) and in the
//! browser (CSR).
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (static target only)
//! └── LandingPage (mounted directly by the browser target)
//!     └── SectionView (per descriptor, in model order)
//!         ├── Nav          ── CtaButton (primary CTA marker)
//!         ├── Hero         ── Badge, CtaButton, ProductMockup
//!         ├── Problem
//!         ├── Features     ── FeatureRow, AgentCardView
//!         ├── HowItWorks
//!         ├── SocialProof
//!         ├── Pricing      ── TierCard ── CtaButton
//!         ├── LeadCapture  (waitlist submit marker)
//!         └── Footer
//! ```

mod cta;
mod document;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod icons;
mod lead_capture;
mod nav;
mod pricing;
mod problem;
mod section;
mod social_proof;

pub use cta::{Badge, CtaButton};
pub use document::{LandingPage, PageDocument};
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use icons::{Icon, icon_path};
pub use lead_capture::LeadCapture;
pub use nav::Nav;
pub use pricing::Pricing;
pub use problem::Problem;
pub use section::SectionView;
pub use social_proof::SocialProof;
