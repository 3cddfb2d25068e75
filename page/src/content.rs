//! The torkiq.ai page content.
//!
//! Everything here is literal copy. [`default_page`] builds the model once at
//! startup; the only input is the copyright year so that rendering itself
//! never reads a clock.

use crate::types::*;

/// `data-testid` of the header "Book a demo" button.
pub const PRIMARY_CTA_TEST_ID: &str = "cta-demo";

/// `data-testid` of the waitlist submit button.
pub const WAITLIST_TEST_ID: &str = "btn-waitlist";

/// Section identifiers used as in-page anchors.
pub mod ids {
    /// Features section
    pub const FEATURES: &str = "features";
    /// How-it-works section
    pub const HOW: &str = "how";
    /// Pricing section
    pub const PRICING: &str = "pricing";
    /// Footer
    pub const ABOUT: &str = "about";
    /// Lead capture section
    pub const GET_STARTED: &str = "get-started";
    /// Hero mockup panel
    pub const DEMO: &str = "demo";
}

const COMPANY_PITCH: &str = "Everpower Labs is a Singapore based technology company specialising in Web3 and AI solutions.";

fn s(value: &str) -> String {
    value.to_string()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn item(icon: IconKind, title: &str, description: &str) -> FeatureItem {
    FeatureItem {
        icon,
        title: s(title),
        description: s(description),
    }
}

fn anchor(id: &str) -> String {
    format!("#{id}")
}

fn brand() -> Brand {
    Brand {
        name: s("torkiq.ai"),
        tagline: s("An Everpower Labs innovation"),
    }
}

/// The landing page as shipped.
pub fn default_page(copyright_year: i32) -> PageModel {
    PageModel {
        title: s("torkiq.ai — AI Agents for Accountants"),
        description: s(
            "Autonomous AI agents that automate bookkeeping, reconciliations, reporting and compliance. Built for Xero.",
        ),
        sections: vec![
            SectionDescriptor::new(SectionContent::Nav(nav())),
            SectionDescriptor::new(SectionContent::Hero(hero())),
            SectionDescriptor::new(SectionContent::Problem(problem())),
            SectionDescriptor::with_id(ids::FEATURES, SectionContent::Features(features())),
            SectionDescriptor::with_id(ids::HOW, SectionContent::HowItWorks(how_it_works())),
            SectionDescriptor::new(SectionContent::SocialProof(social_proof())),
            SectionDescriptor::with_id(ids::PRICING, SectionContent::Pricing(pricing())),
            SectionDescriptor::with_id(
                ids::GET_STARTED,
                SectionContent::LeadCapture(lead_capture()),
            ),
            SectionDescriptor::with_id(ids::ABOUT, SectionContent::Footer(footer(copyright_year))),
        ],
    }
}

fn nav() -> NavContent {
    let link = |label: &str, id: &str| NavLink {
        label: s(label),
        href: anchor(id),
    };
    NavContent {
        brand: brand(),
        links: vec![
            link("Features", ids::FEATURES),
            link("How it works", ids::HOW),
            link("Pricing", ids::PRICING),
            link("About", ids::ABOUT),
        ],
        cta: CallToAction::new("Book a demo", anchor(ids::GET_STARTED)).marked(PRIMARY_CTA_TEST_ID),
    }
}

fn hero() -> HeroContent {
    HeroContent {
        badges: strings(&[
            "Built for Xero",
            "QuickBooks integration — coming soon",
            "Made by Everpower Labs",
        ]),
        headline: s("AI Agents for Accountants."),
        headline_accent: s("Built for Xero."),
        lede: s(
            "Supercharge your practice with autonomous agents that automate bookkeeping, reconciliations, reporting and compliance—so your team can focus on client advisory.",
        ),
        primary: CallToAction::new("Get early access", anchor(ids::GET_STARTED)),
        secondary: CallToAction::new("Watch demo", anchor(ids::DEMO)),
        fine_print: s("Plug & play with Xero in minutes. No long setup. Cancel anytime."),
        mockup: Mockup {
            id: Some(s(ids::DEMO)),
            run_title: s("Agent Run — Reconciler"),
            run_status: s("✓ Completed"),
            run_items: strings(&[
                "524 transactions matched",
                "37 exceptions flagged for review",
                "GST coding reviewed",
                "Variance report generated",
            ]),
            report_title: s("Auto report — Monthly Pack"),
            metrics: vec![
                Metric {
                    value: s("+$48k"),
                    label: s("Cash flow"),
                },
                Metric {
                    value: s("97%"),
                    label: s("Auto categorised"),
                },
                Metric {
                    value: s("1.8h"),
                    label: s("Time saved/job"),
                },
            ],
            caption: s("Illustrative UI mockup — not actual product screens."),
        },
    }
}

fn problem() -> ProblemContent {
    ProblemContent {
        heading: s("The grind is killing margins"),
        body: s(
            "Even with cloud accounting, practitioners lose hours on reconciliations, coding receipts, compliance checks, and month end packs. torkiq.ai automates the busywork so you can focus on advisory and growth.",
        ),
        items: vec![
            item(
                IconKind::Zap,
                "Repetitive tasks",
                "Bulk coding, chasing documents, exception handling.",
            ),
            item(
                IconKind::Gauge,
                "Slow month end",
                "Manual reports, cash flow prep, variance analysis.",
            ),
            item(
                IconKind::Shield,
                "Compliance risk",
                "Audit readiness and GST/BAS checks are tedious.",
            ),
        ],
    }
}

fn features() -> FeaturesContent {
    let card = |title: &str, bullets: &[&str]| AgentCard {
        title: s(title),
        bullets: strings(bullets),
    };
    FeaturesContent {
        heading: s("Your AI agent factory"),
        body: s(
            "Deploy purpose built agents trained for accounting workflows. Start with our ready made agents or request bespoke agents tailored to your practice.",
        ),
        items: vec![
            item(
                IconKind::PlugZap,
                "Seamless Xero integration",
                "Connect in minutes with secure OAuth. QuickBooks support coming soon.",
            ),
            item(
                IconKind::Factory,
                "Multi agent library",
                "Reconciler, Categoriser, Compliance Checker, Report Builder, Cashflow Forecaster and more.",
            ),
            item(
                IconKind::CalendarCheck,
                "Always on automations",
                "Agents run on schedules or triggers, with human in the loop for exceptions.",
            ),
            item(
                IconKind::Shield,
                "Security & compliance",
                "Data encrypted at rest and in transit. Role based access. Audit trails.",
            ),
        ],
        cards_heading: s("Popular agents"),
        cards: vec![
            card(
                "Bank Reconciler",
                &["Auto match & explain", "Exception queue", "Confidence scoring"],
            ),
            card(
                "Categoriser",
                &["Invoice/receipt OCR", "Supplier rules", "GST validation"],
            ),
            card(
                "Compliance Checker",
                &["BAS/GST checks", "Audit trails", "Policy alerts"],
            ),
            card(
                "Report Builder",
                &["Monthly packs", "KPIs & trends", "Cash flow forecasts"],
            ),
        ],
    }
}

fn how_it_works() -> HowItWorksContent {
    let step = |step: u8, title: &str, description: &str| StepItem {
        step,
        title: s(title),
        description: s(description),
    };
    HowItWorksContent {
        heading: s("How it works"),
        steps: vec![
            step(1, "Connect", "Securely connect Xero (QuickBooks coming soon)."),
            step(2, "Select agents", "Pick from our library or request bespoke agents."),
            step(3, "Automate", "Run on schedules and triggers with review queues."),
            step(4, "Scale", "Add agents as your practice grows."),
        ],
    }
}

fn social_proof() -> SocialProofContent {
    SocialProofContent {
        heading: s("Built by Everpower Labs"),
        body: format!(
            "{COMPANY_PITCH} From decentralised platforms to intelligent agent systems, we build secure, scalable products used across APAC."
        ),
        assurances: strings(&[
            "Enterprise grade security and encryption",
            "Role based access and audit trails",
            "Human in the loop controls",
            "Regional data residency options",
        ]),
        spotlight: Testimonial {
            label: s("Customer spotlight"),
            quote: s(
                "“With torkiq.ai, we cut reconciliation time by 70% and redirected staff to advisory work. Setup took under an hour.”",
            ),
            attribution: s("— Beta user, Sydney"),
        },
    }
}

fn pricing() -> PricingContent {
    let tier = |name: &str, price: &str, tagline: &str, features: &[&str], highlighted: bool| {
        PricingTier {
            name: s(name),
            price: s(price),
            tagline: s(tagline),
            features: strings(features),
            highlighted,
            cta: CallToAction::new("Start free trial", anchor(ids::GET_STARTED)),
        }
    };
    PricingContent {
        heading: s("Simple pricing"),
        subheading: s("Fair, transparent plans for firms of every size. Cancel anytime."),
        tiers: vec![
            tier(
                "Starter",
                "$99/mo",
                "Solo accountants & testers",
                &["1 user", "Up to 2 agents", "Email support"],
                false,
            ),
            tier(
                "Professional",
                "$299/mo",
                "Growing practices",
                &["Up to 5 users", "Up to 5 agents", "Priority support"],
                true,
            ),
            tier(
                "Firm",
                "Let’s talk",
                "Larger firms & bespoke",
                &["Unlimited users", "Custom agents", "SLA & onboarding"],
                false,
            ),
        ],
    }
}

fn lead_capture() -> LeadCaptureContent {
    LeadCaptureContent {
        heading: s("Get early access"),
        body: s("Join the waitlist and be the first to try our Xero ready AI agents."),
        placeholder: s("you@firm.com"),
        submit_label: s("Join waitlist"),
        submit_test_id: s(WAITLIST_TEST_ID),
        disclaimer: s("We’ll never share your email. Unsubscribe anytime."),
    }
}

fn footer(copyright_year: i32) -> FooterContent {
    let legal = |label: &str| NavLink {
        label: s(label),
        href: s("#"),
    };
    FooterContent {
        brand: brand(),
        blurb: s(
            "The AI agent factory for accounting practitioners. Built for Xero. QuickBooks coming soon.",
        ),
        about_heading: s("About Everpower Labs"),
        about_body: format!(
            "{COMPANY_PITCH} From decentralised platforms to intelligent agent systems, Everpower Labs builds secure, scalable products that help businesses automate and grow with confidence."
        ),
        legal_links: vec![
            legal("Privacy Policy"),
            legal("Terms of Use"),
            legal("Security"),
        ],
        copyright_year,
        copyright_holder: s("torkiq.ai — An Everpower Labs innovation. All rights reserved."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique() {
        let model = default_page(2025);
        let declared = model.section_ids();
        let unique: HashSet<_> = declared.iter().collect();
        assert_eq!(declared.len(), unique.len());
        for id in [ids::FEATURES, ids::HOW, ids::PRICING, ids::ABOUT, ids::GET_STARTED] {
            assert!(declared.contains(&id), "missing section id {id}");
        }
    }

    #[test]
    fn nav_links_point_at_declared_sections() {
        let model = default_page(2025);
        let declared = model.section_ids();
        let Some(SectionContent::Nav(nav)) = model.section(SectionKind::Nav).map(|s| &s.content)
        else {
            panic!("default page has no nav");
        };
        for link in &nav.links {
            let target = link.href.trim_start_matches('#');
            assert!(declared.contains(&target), "{} has no target", link.href);
        }
    }

    #[test]
    fn exactly_one_primary_cta_marker() {
        let json = serde_json::to_string(&default_page(2025)).expect("serialize");
        assert_eq!(json.matches(PRIMARY_CTA_TEST_ID).count(), 1);
        assert_eq!(json.matches(WAITLIST_TEST_ID).count(), 1);
    }

    #[test]
    fn pricing_has_three_tiers_with_professional_highlighted() {
        let model = default_page(2025);
        let Some(SectionContent::Pricing(pricing)) =
            model.section(SectionKind::Pricing).map(|s| &s.content)
        else {
            panic!("default page has no pricing");
        };
        let names: Vec<_> = pricing.tiers.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Starter", "Professional", "Firm"]);
        let highlighted: Vec<_> = pricing
            .tiers
            .iter()
            .filter(|t| t.highlighted)
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(highlighted, ["Professional"]);
    }

    #[test]
    fn copyright_year_is_taken_from_the_caller() {
        let model = default_page(1999);
        let Some(SectionContent::Footer(footer)) =
            model.section(SectionKind::Footer).map(|s| &s.content)
        else {
            panic!("default page has no footer");
        };
        assert_eq!(footer.copyright_year, 1999);
    }

    #[test]
    fn model_survives_json() {
        let model = default_page(2025);
        let json = serde_json::to_string_pretty(&model).expect("serialize");
        let back: PageModel = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, model);
    }
}
