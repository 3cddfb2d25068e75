//! Content model for the landing page.
//!
//! A page is an ordered list of [`SectionDescriptor`]s. The renderer walks the
//! list front to back and emits one fragment per descriptor, so the list alone
//! decides what the page looks like. These types are:
//!
//! - **Serializable** - dump the default page with serde, edit it, feed it back
//! - **Clone-friendly** - components take owned payloads
//! - **Plain values** - no identity beyond position, nothing mutates after construction
//!
//! # Example
//!
//! ```rust
//! use page_leptos::types::{PageModel, SectionContent, SectionDescriptor, StepItem, HowItWorksContent};
//!
//! let model = PageModel {
//!     title: "Synthetic".into(),
//!     description: String::new(),
//!     sections: vec![SectionDescriptor::with_id(
//!         "how",
//!         SectionContent::HowItWorks(HowItWorksContent {
//!             heading: "How it works".into(),
//!             steps: vec![StepItem {
//!                 step: 1,
//!                 title: "Connect".into(),
//!                 description: "Securely connect Xero.".into(),
//!             }],
//!         }),
//!     )],
//! };
//! assert_eq!(model.section_ids(), vec!["how"]);
//! ```

use serde::{Deserialize, Serialize};

/// The whole page: document metadata plus the ordered sections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageModel {
    /// Document `<title>`
    pub title: String,
    /// `<meta name="description">` content
    #[serde(default)]
    pub description: String,
    /// Sections in render order
    pub sections: Vec<SectionDescriptor>,
}

impl PageModel {
    /// Identifiers declared by the sections, in order.
    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().filter_map(|s| s.id.as_deref()).collect()
    }

    /// First section of the given kind.
    pub fn section(&self, kind: SectionKind) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|s| s.kind() == kind)
    }

    /// Mutable access to the first section of the given kind.
    ///
    /// Only used while assembling a model (tests, synthetic variants); a
    /// rendered model is never touched again.
    pub fn section_mut(&mut self, kind: SectionKind) -> Option<&mut SectionDescriptor> {
        self.sections.iter_mut().find(|s| s.kind() == kind)
    }
}

/// One page region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    /// Stable element identifier, used for anchor navigation and smoke lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Kind-specific payload; its tag is the section kind
    #[serde(flatten)]
    pub content: SectionContent,
}

impl SectionDescriptor {
    /// Section without an element identifier.
    pub fn new(content: SectionContent) -> Self {
        Self { id: None, content }
    }

    /// Section rendered with `id="<id>"`.
    pub fn with_id(id: impl Into<String>, content: SectionContent) -> Self {
        Self {
            id: Some(id.into()),
            content,
        }
    }

    /// Discriminant of the payload.
    pub fn kind(&self) -> SectionKind {
        match &self.content {
            SectionContent::Nav(_) => SectionKind::Nav,
            SectionContent::Hero(_) => SectionKind::Hero,
            SectionContent::Problem(_) => SectionKind::Problem,
            SectionContent::Features(_) => SectionKind::Features,
            SectionContent::HowItWorks(_) => SectionKind::HowItWorks,
            SectionContent::SocialProof(_) => SectionKind::SocialProof,
            SectionContent::Pricing(_) => SectionKind::Pricing,
            SectionContent::LeadCapture(_) => SectionKind::LeadCapture,
            SectionContent::Footer(_) => SectionKind::Footer,
        }
    }
}

/// Section kinds, in the order they appear on the default page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    /// Sticky header: brand, anchor links, primary CTA
    Nav,
    /// Headline, badges, CTAs, product mockup
    Hero,
    /// Pain points
    Problem,
    /// Feature list + agent cards
    Features,
    /// Numbered steps
    HowItWorks,
    /// Company pitch + testimonial
    SocialProof,
    /// Pricing tiers
    Pricing,
    /// Waitlist email form
    LeadCapture,
    /// Footer
    Footer,
}

impl SectionKind {
    /// Value used for the `data-section` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Nav => "nav",
            SectionKind::Hero => "hero",
            SectionKind::Problem => "problem",
            SectionKind::Features => "features",
            SectionKind::HowItWorks => "how-it-works",
            SectionKind::SocialProof => "social-proof",
            SectionKind::Pricing => "pricing",
            SectionKind::LeadCapture => "lead-capture",
            SectionKind::Footer => "footer",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific section payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SectionContent {
    /// Header
    Nav(NavContent),
    /// Hero
    Hero(HeroContent),
    /// Problem statement
    Problem(ProblemContent),
    /// Features
    Features(FeaturesContent),
    /// How it works
    HowItWorks(HowItWorksContent),
    /// Social proof
    SocialProof(SocialProofContent),
    /// Pricing
    Pricing(PricingContent),
    /// Lead capture form
    LeadCapture(LeadCaptureContent),
    /// Footer
    Footer(FooterContent),
}

/// Icons available to content items (Lucide outlines).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    /// Lightning bolt
    Zap,
    /// Speedometer
    Gauge,
    /// Shield
    Shield,
    /// Plug with bolt
    PlugZap,
    /// Factory
    Factory,
    /// Calendar with tick
    CalendarCheck,
    /// Robot head
    Bot,
    /// Bar chart
    BarChart,
    /// Tick
    Check,
    /// Right arrow
    ArrowRight,
    /// Envelope
    Mail,
}

/// Product name + strapline shown in the header and footer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    /// Product name
    pub name: String,
    /// Strapline under the name
    pub tagline: String,
}

/// Text link.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    /// Link text
    pub label: String,
    /// Target (`#anchor` for in-page links)
    pub href: String,
}

/// Call-to-action button rendered as an anchor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    /// Button text
    pub label: String,
    /// Target anchor
    pub href: String,
    /// Marker rendered as `data-testid`, looked up by the smoke checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl CallToAction {
    /// CTA without a test marker.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            test_id: None,
        }
    }

    /// Attach a `data-testid` marker.
    pub fn marked(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }
}

/// Header payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavContent {
    /// Brand block
    pub brand: Brand,
    /// In-page anchor links
    pub links: Vec<NavLink>,
    /// Primary call to action
    pub cta: CallToAction,
}

/// Headline figure in the hero mockup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Figure, e.g. `97%`
    pub value: String,
    /// Caption under the figure
    pub label: String,
}

/// Illustrative product panel next to the hero copy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Mockup {
    /// Element identifier of the panel (target of the "Watch demo" link)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Agent run card title
    pub run_title: String,
    /// Status badge on the run card
    pub run_status: String,
    /// Ticked lines on the run card
    pub run_items: Vec<String>,
    /// Report card title
    pub report_title: String,
    /// Report card figures
    pub metrics: Vec<Metric>,
    /// Disclaimer under the panel
    pub caption: String,
}

/// Hero payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    /// Pills above the headline
    pub badges: Vec<String>,
    /// First headline line
    pub headline: String,
    /// Second headline line (rendered as its own block)
    pub headline_accent: String,
    /// Paragraph under the headline
    pub lede: String,
    /// Filled CTA
    pub primary: CallToAction,
    /// Outlined CTA
    pub secondary: CallToAction,
    /// Small print under the CTAs
    pub fine_print: String,
    /// Product panel
    pub mockup: Mockup,
}

/// Icon + title + description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    /// Leading icon
    pub icon: IconKind,
    /// Short title
    pub title: String,
    /// One-sentence description
    pub description: String,
}

/// Problem statement payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemContent {
    /// Heading
    pub heading: String,
    /// Paragraph under the heading
    pub body: String,
    /// Pain points
    pub items: Vec<FeatureItem>,
}

/// Named agent with bullet points.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentCard {
    /// Agent name
    pub title: String,
    /// Capabilities
    pub bullets: Vec<String>,
}

/// Features payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturesContent {
    /// Heading
    pub heading: String,
    /// Paragraph under the heading
    pub body: String,
    /// Feature list
    pub items: Vec<FeatureItem>,
    /// Heading of the agent card panel
    pub cards_heading: String,
    /// Agent cards
    pub cards: Vec<AgentCard>,
}

/// Numbered step.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepItem {
    /// Step number shown in the circle
    pub step: u8,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
}

/// How-it-works payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HowItWorksContent {
    /// Heading
    pub heading: String,
    /// Steps in order
    pub steps: Vec<StepItem>,
}

/// Quote with attribution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Card title
    pub label: String,
    /// Quote text
    pub quote: String,
    /// Who said it
    pub attribution: String,
}

/// Social proof payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialProofContent {
    /// Heading
    pub heading: String,
    /// Company pitch
    pub body: String,
    /// Ticked assurances
    pub assurances: Vec<String>,
    /// Customer quote card
    pub spotlight: Testimonial,
}

/// One pricing plan.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    /// Plan name, also rendered as `data-tier`
    pub name: String,
    /// Price label (`$99/mo`, `Let’s talk`)
    pub price: String,
    /// Who the plan is for
    pub tagline: String,
    /// Included features
    pub features: Vec<String>,
    /// Draw the emphasis ring
    #[serde(default)]
    pub highlighted: bool,
    /// Plan CTA
    pub cta: CallToAction,
}

/// Pricing payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingContent {
    /// Heading
    pub heading: String,
    /// Line under the heading
    pub subheading: String,
    /// Plans in display order
    pub tiers: Vec<PricingTier>,
}

/// Lead capture payload.
///
/// The form is presentational: it has no action and nothing listens for
/// submission. Browser-native `type="email"` + `required` validation is all
/// that happens on submit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadCaptureContent {
    /// Heading
    pub heading: String,
    /// Paragraph under the heading
    pub body: String,
    /// Email input placeholder
    pub placeholder: String,
    /// Submit button text
    pub submit_label: String,
    /// Marker rendered as the submit button's `data-testid`
    pub submit_test_id: String,
    /// Privacy note under the form
    pub disclaimer: String,
}

/// Footer payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterContent {
    /// Brand column
    pub brand: Brand,
    /// Product blurb under the brand
    pub blurb: String,
    /// Heading of the company column
    pub about_heading: String,
    /// Company description
    pub about_body: String,
    /// Legal links
    pub legal_links: Vec<NavLink>,
    /// Year printed in the copyright line
    pub copyright_year: i32,
    /// Text after the year in the copyright line
    pub copyright_holder: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tag_is_kebab_case() {
        let section = SectionDescriptor::with_id(
            "how",
            SectionContent::HowItWorks(HowItWorksContent::default()),
        );
        let json = serde_json::to_value(&section).expect("serialize");
        assert_eq!(json["kind"], "how-it-works");
        assert_eq!(json["id"], "how");
    }

    #[test]
    fn missing_id_is_omitted_and_defaults_to_none() {
        let section = SectionDescriptor::new(SectionContent::Problem(ProblemContent::default()));
        let json = serde_json::to_string(&section).expect("serialize");
        assert!(!json.contains("\"id\""));

        let back: SectionDescriptor = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.id, None);
        assert_eq!(back.kind(), SectionKind::Problem);
    }

    #[test]
    fn kind_display_matches_serde_tag() {
        for kind in [
            SectionKind::Nav,
            SectionKind::SocialProof,
            SectionKind::LeadCapture,
        ] {
            let json = serde_json::to_string(&kind).expect("serialize");
            assert_eq!(json.trim_matches('"'), kind.to_string());
        }
    }

    #[test]
    fn cta_marker_builder() {
        let cta = CallToAction::new("Book a demo", "#get-started").marked("cta-demo");
        assert_eq!(cta.test_id.as_deref(), Some("cta-demo"));
    }
}
