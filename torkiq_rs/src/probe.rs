//! [`DomProbe`] over HTML markup.
//!
//! Each lookup streams the markup through `lol_html` with a single
//! selector-driven element handler that records what matched. Nothing is
//! rewritten; the output of the rewriter is discarded.

use std::cell::RefCell;
use std::rc::Rc;

use lol_html::{RewriteStrSettings, Selector, element, rewrite_str};
use page_leptos::smoke::{DomProbe, ElementInfo, ProbeError};

/// Probe backed by a rendered HTML document.
#[derive(Clone, Debug)]
pub struct HtmlProbe {
    html: String,
}

impl HtmlProbe {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl DomProbe for HtmlProbe {
    fn select(&self, selector: &str) -> Result<Vec<ElementInfo>, ProbeError> {
        // element! unwraps the parse, so reject bad selectors first
        if let Err(err) = selector.parse::<Selector>() {
            return Err(ProbeError::InvalidSelector {
                selector: selector.to_string(),
                reason: err.to_string(),
            });
        }

        let found = Rc::new(RefCell::new(Vec::new()));

        rewrite_str(
            &self.html,
            RewriteStrSettings {
                element_content_handlers: vec![element!(selector, {
                    let found = Rc::clone(&found);
                    move |el| {
                        let attributes = el
                            .attributes()
                            .iter()
                            .map(|attr| (attr.name(), attr.value()))
                            .collect();
                        found.borrow_mut().push(ElementInfo {
                            tag: el.tag_name(),
                            attributes,
                        });
                        Ok(())
                    }
                })],
                ..RewriteStrSettings::default()
            },
        )
        .map_err(|err| ProbeError::Document(err.to_string()))?;

        Ok(found.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKUP: &str = r##"<!DOCTYPE html>
<html><body>
  <header><a href="#get-started" class="btn bg-violet-700" data-testid="cta-demo">Book</a></header>
  <section id="pricing">
    <div data-tier="Starter"></div>
    <div data-tier="Professional" class="ring-2"></div>
  </section>
  <div data-tier="Outside"></div>
</body></html>"##;

    #[test]
    fn selects_by_test_id() {
        let probe = HtmlProbe::new(MARKUP);
        let hits = probe.select(r#"[data-testid="cta-demo"]"#).expect("select");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].tag, "a");
        assert_eq!(hits[0].attr("href"), Some("#get-started"));
        assert!(hits[0].has_class("bg-violet-700"));
    }

    #[test]
    fn descendant_selector_is_scoped() {
        let probe = HtmlProbe::new(MARKUP);
        let tiers = probe.select(r#"[id="pricing"] [data-tier]"#).expect("select");

        let names: Vec<_> = tiers.iter().filter_map(|t| t.attr("data-tier")).collect();
        assert_eq!(names, ["Starter", "Professional"]);
    }

    #[test]
    fn missing_element_is_empty_not_error() {
        let probe = HtmlProbe::new(MARKUP);
        assert!(probe.select(r#"[id="features"]"#).expect("select").is_empty());
    }

    #[test]
    fn invalid_selector_is_reported() {
        let probe = HtmlProbe::new(MARKUP);
        let err = probe.select("[[nope").expect_err("invalid");
        assert!(matches!(err, ProbeError::InvalidSelector { .. }));
    }
}
