//! Post-render smoke checks.
//!
//! After the page is committed, a handful of elements must exist: the primary
//! call to action, the waitlist submit button and the anchored sections. The
//! checker looks them up through a [`DomProbe`], records one [`CheckResult`]
//! per expectation and hands each result to a [`DiagnosticSink`].
//!
//! Checks are fail-open. A missing element or a probe error is recorded as a
//! failure and reported; it never reaches the caller as an error and never
//! stops the page from being served or mounted.
//!
//! ```rust
//! use page_leptos::smoke::{DomProbe, ElementInfo, ProbeError, SmokeChecker, SilentSink};
//!
//! struct EmptyDom;
//!
//! impl DomProbe for EmptyDom {
//!     fn select(&self, _selector: &str) -> Result<Vec<ElementInfo>, ProbeError> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! let report = SmokeChecker::default().run(&EmptyDom, &SilentSink);
//! assert!(!report.passed());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{PRIMARY_CTA_TEST_ID, WAITLIST_TEST_ID, ids};
use crate::styles::ACCENT_TOKEN;

/// Element lookup failure.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The selector could not be parsed by the probe
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector {
        /// Selector as given
        selector: String,
        /// Parser message
        reason: String,
    },
    /// The underlying document could not be read
    #[error("document unavailable: {0}")]
    Document(String),
}

/// What the checker needs to know about a matched element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementInfo {
    /// Lower-case tag name
    pub tag: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
}

impl ElementInfo {
    /// Value of an attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether the `class` attribute contains `token` as a whole class.
    pub fn has_class(&self, token: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == token))
    }
}

/// Read-only view of a rendered document.
///
/// Implementations exist for rendered markup (static target) and for the
/// live browser document. Selectors are CSS; probes must support at least
/// attribute selectors and the descendant combinator.
pub trait DomProbe {
    /// All elements matching `selector`, in document order.
    fn select(&self, selector: &str) -> Result<Vec<ElementInfo>, ProbeError>;
}

/// Selector matching an element by `id`.
///
/// Written as an attribute selector so duplicated ids are all counted.
pub fn id_selector(id: &str) -> String {
    format!("[id=\"{id}\"]")
}

/// Selector matching an element by `data-testid`.
pub fn test_id_selector(test_id: &str) -> String {
    format!("[data-testid=\"{test_id}\"]")
}

/// Named checks, in the order they run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckName {
    /// Exactly one primary CTA marker
    PrimaryCta,
    /// The primary CTA carries the accent token
    PrimaryCtaAccent,
    /// Exactly one waitlist submit marker
    WaitlistButton,
    /// Each key section id present exactly once
    Sections,
    /// Remaining in-page navigation targets resolve
    AnchorTargets,
}

impl CheckName {
    /// Kebab-case name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            CheckName::PrimaryCta => "primary-cta",
            CheckName::PrimaryCtaAccent => "primary-cta-accent",
            CheckName::WaitlistButton => "waitlist-button",
            CheckName::Sections => "sections",
            CheckName::AnchorTargets => "anchor-targets",
        }
    }

    /// Human description of the expectation.
    pub fn describe(self) -> &'static str {
        match self {
            CheckName::PrimaryCta => "CTA demo button should render",
            CheckName::PrimaryCtaAccent => "Primary CTA should use the accent theme",
            CheckName::WaitlistButton => "Waitlist button should render",
            CheckName::Sections => {
                "All key sections should be present (features/how/pricing/about)"
            }
            CheckName::AnchorTargets => "In-page navigation targets should resolve",
        }
    }
}

impl std::fmt::Display for CheckName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum Outcome {
    /// Expectation met
    Pass,
    /// Expectation not met (or the lookup failed)
    Fail(String),
    /// Not evaluated because a precondition failed
    Skipped(String),
}

/// One recorded check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Which check
    pub name: CheckName,
    /// What happened
    pub outcome: Outcome,
}

impl CheckResult {
    /// Whether the check failed (skips do not count as failures).
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Fail(_))
    }
}

/// All results of one run, in check order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokeReport {
    /// Results in the order the checks ran
    pub checks: Vec<CheckResult>,
}

impl SmokeReport {
    /// No check failed.
    pub fn passed(&self) -> bool {
        !self.checks.iter().any(CheckResult::is_failure)
    }

    /// Failed checks only.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| c.is_failure())
    }

    /// Outcome of a named check.
    pub fn outcome(&self, name: CheckName) -> Option<&Outcome> {
        self.checks
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.outcome)
    }

    /// One-line summary, e.g. `5 checks: 4 passed, 1 failed, 0 skipped`.
    pub fn summary(&self) -> String {
        let failed = self.failures().count();
        let skipped = self
            .checks
            .iter()
            .filter(|c| matches!(c.outcome, Outcome::Skipped(_)))
            .count();
        let passed = self.checks.len() - failed - skipped;
        format!(
            "{} checks: {passed} passed, {failed} failed, {skipped} skipped",
            self.checks.len()
        )
    }
}

/// Where check results are reported.
pub trait DiagnosticSink {
    /// Called once per check, in check order.
    fn record(&self, result: &CheckResult);
}

/// Reports through `tracing`: passes at debug, skips at info, failures at warn.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, result: &CheckResult) {
        match &result.outcome {
            Outcome::Pass => tracing::debug!(check = %result.name, "smoke check passed"),
            Outcome::Skipped(reason) => {
                tracing::info!(check = %result.name, %reason, "smoke check skipped")
            }
            Outcome::Fail(reason) => tracing::warn!(
                check = %result.name,
                expectation = result.name.describe(),
                %reason,
                "smoke check failed"
            ),
        }
    }
}

/// Discards results (callers that only want the report).
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn record(&self, _result: &CheckResult) {}
}

/// What the checks look for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeExpectations {
    /// `data-testid` of the primary CTA
    pub primary_cta: String,
    /// Class token the primary CTA must carry
    pub accent_token: String,
    /// `data-testid` of the waitlist submit button
    pub waitlist_button: String,
    /// Section ids that must each appear exactly once
    pub section_ids: Vec<String>,
    /// Other anchor targets that must resolve
    pub anchor_ids: Vec<String>,
}

impl Default for SmokeExpectations {
    fn default() -> Self {
        Self {
            primary_cta: PRIMARY_CTA_TEST_ID.to_string(),
            accent_token: ACCENT_TOKEN.to_string(),
            waitlist_button: WAITLIST_TEST_ID.to_string(),
            section_ids: [ids::FEATURES, ids::HOW, ids::PRICING, ids::ABOUT]
                .map(String::from)
                .to_vec(),
            anchor_ids: [ids::GET_STARTED, ids::DEMO].map(String::from).to_vec(),
        }
    }
}

/// Runs the checks against a probe.
#[derive(Clone, Debug, Default)]
pub struct SmokeChecker {
    expectations: SmokeExpectations,
}

impl SmokeChecker {
    /// Checker with custom expectations.
    pub fn new(expectations: SmokeExpectations) -> Self {
        Self { expectations }
    }

    /// Run every check once, reporting each result to `sink`.
    ///
    /// Never fails: probe errors are recorded as failed checks.
    pub fn run(&self, probe: &dyn DomProbe, sink: &dyn DiagnosticSink) -> SmokeReport {
        let exp = &self.expectations;
        let mut report = SmokeReport::default();
        let mut record = |name: CheckName, outcome: Outcome| {
            let result = CheckResult { name, outcome };
            sink.record(&result);
            report.checks.push(result);
        };

        let cta = probe.select(&test_id_selector(&exp.primary_cta));
        record(CheckName::PrimaryCta, exactly_one(&cta, &exp.primary_cta));
        record(
            CheckName::PrimaryCtaAccent,
            accent_outcome(&cta, &exp.accent_token),
        );

        let waitlist = probe.select(&test_id_selector(&exp.waitlist_button));
        record(
            CheckName::WaitlistButton,
            exactly_one(&waitlist, &exp.waitlist_button),
        );

        record(
            CheckName::Sections,
            ids_outcome(probe, &exp.section_ids, true),
        );
        record(
            CheckName::AnchorTargets,
            ids_outcome(probe, &exp.anchor_ids, false),
        );

        report
    }
}

fn exactly_one(found: &Result<Vec<ElementInfo>, ProbeError>, what: &str) -> Outcome {
    match found {
        Ok(elements) if elements.len() == 1 => Outcome::Pass,
        Ok(elements) if elements.is_empty() => Outcome::Fail(format!("`{what}` not found")),
        Ok(elements) => Outcome::Fail(format!(
            "`{what}` found {} times, expected once",
            elements.len()
        )),
        Err(err) => Outcome::Fail(err.to_string()),
    }
}

fn accent_outcome(cta: &Result<Vec<ElementInfo>, ProbeError>, token: &str) -> Outcome {
    match cta {
        Ok(elements) => match elements.first() {
            Some(el) if el.has_class(token) => Outcome::Pass,
            Some(el) => Outcome::Fail(format!(
                "class `{}` lacks `{token}`",
                el.attr("class").unwrap_or_default()
            )),
            None => Outcome::Skipped("primary CTA absent".to_string()),
        },
        Err(_) => Outcome::Skipped("primary CTA lookup failed".to_string()),
    }
}

/// Every id present; with `unique`, present exactly once.
fn ids_outcome(probe: &dyn DomProbe, ids: &[String], unique: bool) -> Outcome {
    let mut problems = Vec::new();
    for id in ids {
        match probe.select(&id_selector(id)) {
            Ok(found) if found.is_empty() => problems.push(format!("#{id} missing")),
            Ok(found) if unique && found.len() > 1 => {
                problems.push(format!("#{id} found {} times", found.len()))
            }
            Ok(_) => {}
            Err(err) => problems.push(format!("#{id}: {err}")),
        }
    }

    if problems.is_empty() {
        Outcome::Pass
    } else {
        Outcome::Fail(problems.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Selector → canned elements.
    #[derive(Default)]
    struct FakeDom {
        matches: HashMap<String, Vec<ElementInfo>>,
        broken: bool,
    }

    impl FakeDom {
        fn with(mut self, selector: String, count: usize, class: &str) -> Self {
            let el = ElementInfo {
                tag: "a".into(),
                attributes: vec![("class".into(), class.into())],
            };
            self.matches.insert(selector, vec![el; count]);
            self
        }

        fn healthy() -> Self {
            let mut dom = FakeDom::default()
                .with(test_id_selector("cta-demo"), 1, "btn bg-violet-700")
                .with(test_id_selector("btn-waitlist"), 1, "btn");
            for id in ["features", "how", "pricing", "about", "get-started", "demo"] {
                dom = dom.with(id_selector(id), 1, "");
            }
            dom
        }
    }

    impl DomProbe for FakeDom {
        fn select(&self, selector: &str) -> Result<Vec<ElementInfo>, ProbeError> {
            if self.broken {
                return Err(ProbeError::Document("detached".into()));
            }
            Ok(self.matches.get(selector).cloned().unwrap_or_default())
        }
    }

    #[derive(Default)]
    struct RecordingSink(RefCell<Vec<CheckName>>);

    impl DiagnosticSink for RecordingSink {
        fn record(&self, result: &CheckResult) {
            self.0.borrow_mut().push(result.name);
        }
    }

    #[test]
    fn healthy_dom_passes_every_check() {
        let report = SmokeChecker::default().run(&FakeDom::healthy(), &SilentSink);
        assert!(report.passed(), "{report:?}");
        assert_eq!(report.checks.len(), 5);
        assert_eq!(report.summary(), "5 checks: 5 passed, 0 failed, 0 skipped");
    }

    #[test]
    fn sink_sees_every_check_in_order() {
        let sink = RecordingSink::default();
        SmokeChecker::default().run(&FakeDom::healthy(), &sink);
        assert_eq!(
            *sink.0.borrow(),
            vec![
                CheckName::PrimaryCta,
                CheckName::PrimaryCtaAccent,
                CheckName::WaitlistButton,
                CheckName::Sections,
                CheckName::AnchorTargets,
            ]
        );
    }

    #[test]
    fn missing_section_fails_only_the_sections_check() {
        let mut dom = FakeDom::healthy();
        dom.matches.remove(&id_selector("features"));

        let report = SmokeChecker::default().run(&dom, &SilentSink);
        let failed: Vec<_> = report.failures().map(|c| c.name).collect();
        assert_eq!(failed, vec![CheckName::Sections]);
        assert_eq!(
            report.outcome(CheckName::Sections),
            Some(&Outcome::Fail("#features missing".into()))
        );
    }

    #[test]
    fn duplicated_section_id_fails() {
        let dom = FakeDom::healthy().with(id_selector("pricing"), 2, "");
        let report = SmokeChecker::default().run(&dom, &SilentSink);
        assert_eq!(
            report.outcome(CheckName::Sections),
            Some(&Outcome::Fail("#pricing found 2 times".into()))
        );
    }

    #[test]
    fn accent_mismatch_is_reported() {
        let dom = FakeDom::healthy().with(test_id_selector("cta-demo"), 1, "btn bg-teal-700");
        let report = SmokeChecker::default().run(&dom, &SilentSink);
        assert!(matches!(
            report.outcome(CheckName::PrimaryCtaAccent),
            Some(Outcome::Fail(reason)) if reason.contains("bg-violet-700")
        ));
    }

    #[test]
    fn accent_token_must_match_a_whole_class() {
        let dom = FakeDom::healthy().with(test_id_selector("cta-demo"), 1, "hover:bg-violet-700");
        let report = SmokeChecker::default().run(&dom, &SilentSink);
        assert!(report.outcome(CheckName::PrimaryCtaAccent) != Some(&Outcome::Pass));
    }

    #[test]
    fn absent_cta_skips_accent_check() {
        let mut dom = FakeDom::healthy();
        dom.matches.remove(&test_id_selector("cta-demo"));

        let report = SmokeChecker::default().run(&dom, &SilentSink);
        assert!(report.outcome(CheckName::PrimaryCta).is_some_and(|o| o != &Outcome::Pass));
        assert!(matches!(
            report.outcome(CheckName::PrimaryCtaAccent),
            Some(Outcome::Skipped(_))
        ));
    }

    #[test]
    fn probe_errors_become_failures_not_panics() {
        let dom = FakeDom {
            broken: true,
            ..FakeDom::default()
        };
        let report = SmokeChecker::default().run(&dom, &SilentSink);
        assert_eq!(report.checks.len(), 5);
        assert_eq!(report.failures().count(), 4);
        assert!(matches!(
            report.outcome(CheckName::PrimaryCtaAccent),
            Some(Outcome::Skipped(_))
        ));
    }

    #[test]
    fn custom_expectations_are_used() {
        let checker = SmokeChecker::new(SmokeExpectations {
            accent_token: "bg-teal-700".into(),
            ..SmokeExpectations::default()
        });
        let dom = FakeDom::healthy().with(test_id_selector("cta-demo"), 1, "bg-teal-700");
        assert!(checker.run(&dom, &SilentSink).passed());
    }

    #[test]
    fn report_serializes_with_status_tags() {
        let report = SmokeReport {
            checks: vec![CheckResult {
                name: CheckName::Sections,
                outcome: Outcome::Fail("#about missing".into()),
            }],
        };
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["checks"][0]["name"], "sections");
        assert_eq!(json["checks"][0]["outcome"]["status"], "fail");
        assert_eq!(json["checks"][0]["outcome"]["reason"], "#about missing");
    }
}
