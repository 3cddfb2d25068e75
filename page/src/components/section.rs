//! Descriptor → component dispatch.

use leptos::prelude::*;

use super::{Features, Footer, Hero, HowItWorks, LeadCapture, Nav, Pricing, Problem, SocialProof};
use crate::types::{SectionContent, SectionDescriptor};

/// Renders one descriptor with the component for its kind.
///
/// The descriptor's `id` is passed through unchanged; a section without one
/// renders without an `id` attribute.
#[component]
pub fn SectionView(section: SectionDescriptor) -> impl IntoView {
    let SectionDescriptor { id, content } = section;

    match content {
        SectionContent::Nav(content) => view! { <Nav id=id content=content /> }.into_any(),
        SectionContent::Hero(content) => view! { <Hero id=id content=content /> }.into_any(),
        SectionContent::Problem(content) => {
            view! { <Problem id=id content=content /> }.into_any()
        }
        SectionContent::Features(content) => {
            view! { <Features id=id content=content /> }.into_any()
        }
        SectionContent::HowItWorks(content) => {
            view! { <HowItWorks id=id content=content /> }.into_any()
        }
        SectionContent::SocialProof(content) => {
            view! { <SocialProof id=id content=content /> }.into_any()
        }
        SectionContent::Pricing(content) => {
            view! { <Pricing id=id content=content /> }.into_any()
        }
        SectionContent::LeadCapture(content) => {
            view! { <LeadCapture id=id content=content /> }.into_any()
        }
        SectionContent::Footer(content) => view! { <Footer id=id content=content /> }.into_any(),
    }
}
