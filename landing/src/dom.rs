//! Browser-side plumbing: head setup, live-DOM probe, console diagnostics.

use page_leptos::smoke::{CheckResult, DiagnosticSink, DomProbe, ElementInfo, Outcome, ProbeError};
use page_leptos::styles::{BASE_CSS, StyleAssets};
use page_leptos::types::PageModel;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlHeadElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Title, base CSS and the utility stylesheet script. Mirrors what the
/// static build puts in `<head>`. Failures are logged, the page still mounts.
pub fn install_head(document: &Document, model: &PageModel, assets: &StyleAssets) {
    document.set_title(&model.title);

    let Some(head) = document.head() else {
        web_sys::console::warn_1(&JsValue::from_str("[head] document has no <head>"));
        return;
    };

    if let Err(err) = append_style(document, &head) {
        warn_js("base CSS not installed", &err);
    }

    if assets.has_stylesheet() {
        if let Err(err) = append_script(document, &head, &assets.stylesheet_script) {
            warn_js("stylesheet script not installed", &err);
        }
    }
}

fn append_style(document: &Document, head: &HtmlHeadElement) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(BASE_CSS));
    head.append_child(&style)?;
    Ok(())
}

fn append_script(document: &Document, head: &HtmlHeadElement, src: &str) -> Result<(), JsValue> {
    let script = document.create_element("script")?;
    script.set_attribute("src", src)?;
    head.append_child(&script)?;
    Ok(())
}

fn warn_js(context: &str, err: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(&format!("[head] {context}:")), err);
}

/// [`DomProbe`] over the live document.
pub struct DocumentProbe {
    document: Document,
}

impl DocumentProbe {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl DomProbe for DocumentProbe {
    fn select(&self, selector: &str) -> Result<Vec<ElementInfo>, ProbeError> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|err| ProbeError::InvalidSelector {
                selector: selector.to_string(),
                reason: format!("{err:?}"),
            })?;

        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|el| element_info(&el))
            .collect())
    }
}

fn element_info(el: &Element) -> ElementInfo {
    let attributes = el
        .get_attribute_names()
        .iter()
        .filter_map(|name| {
            let name = name.as_string()?;
            let value = el.get_attribute(&name)?;
            Some((name, value))
        })
        .collect();

    ElementInfo {
        tag: el.tag_name().to_lowercase(),
        attributes,
    }
}

/// Reports to the browser console. Failures go through `console.assert` so
/// they show up as assertion errors without throwing.
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn record(&self, result: &CheckResult) {
        let message = match &result.outcome {
            Outcome::Pass => return,
            Outcome::Skipped(reason) => {
                web_sys::console::info_1(&JsValue::from_str(&format!(
                    "[smoke] {} skipped: {reason}",
                    result.name
                )));
                return;
            }
            Outcome::Fail(reason) => format!("{} ({reason})", result.name.describe()),
        };
        web_sys::console::assert_with_condition_and_data_1(false, &JsValue::from_str(&message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_leptos::styles::DEFAULT_STYLESHEET_SCRIPT;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn head_gets_title_style_and_script() {
        let document = document().expect("document");
        let model = PageModel {
            title: "Head setup".into(),
            ..PageModel::default()
        };

        install_head(&document, &model, &StyleAssets::default());

        assert_eq!(document.title(), "Head setup");
        let style = document
            .query_selector("head style")
            .expect("query")
            .expect("style installed");
        assert!(style.text_content().unwrap_or_default().contains("scroll-behavior"));
        let script = format!(r#"head script[src="{DEFAULT_STYLESHEET_SCRIPT}"]"#);
        assert!(document.query_selector(&script).expect("query").is_some());
    }

    #[wasm_bindgen_test]
    fn document_probe_reads_live_attributes() {
        let document = document().expect("document");
        let body = document.body().expect("body");
        let link = document.create_element("a").expect("create");
        link.set_attribute("data-testid", "cta-live").expect("attr");
        link.set_attribute("class", "btn bg-violet-700").expect("attr");
        body.append_child(&link).expect("append");

        let probe = DocumentProbe::new(document);
        let found = probe.select(r#"[data-testid="cta-live"]"#).expect("select");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].tag, "a");
        assert!(found[0].has_class("bg-violet-700"));
    }

    #[wasm_bindgen_test]
    fn invalid_selector_is_reported() {
        let probe = DocumentProbe::new(document().expect("document"));
        let err = probe.select("[[nope").expect_err("invalid");
        assert!(matches!(err, ProbeError::InvalidSelector { .. }));
    }
}
