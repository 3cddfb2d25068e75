//! Render, write, check.
//!
//! [`Site`] holds everything resolved at startup (model, style assets, check
//! expectations). From there the static build is three steps that each run
//! once: render the document, write it, smoke-check the written markup.

use std::path::{Path, PathBuf};

use page_leptos::content::default_page;
use page_leptos::render_page;
use page_leptos::smoke::{DiagnosticSink, SmokeChecker, SmokeReport};
use page_leptos::styles::StyleAssets;
use page_leptos::types::PageModel;
use tracing::{debug, info, warn};

use crate::config::TorkiqConfig;
use crate::error::{Error, Result};
use crate::probe::HtmlProbe;

/// A resolved page ready to render.
#[derive(Clone, Debug)]
pub struct Site {
    model: PageModel,
    assets: StyleAssets,
    checker: SmokeChecker,
}

/// What a build produced.
#[derive(Debug)]
pub struct BuildOutput {
    pub path: PathBuf,
    pub bytes: usize,
    /// `None` when checks were skipped
    pub report: Option<SmokeReport>,
}

impl Site {
    pub fn new(model: PageModel, assets: StyleAssets, checker: SmokeChecker) -> Self {
        Self {
            model,
            assets,
            checker,
        }
    }

    /// Site from config. Without an explicit model the shipped page is used,
    /// stamped with the configured (or current) copyright year.
    pub fn from_config(config: &TorkiqConfig, model: Option<PageModel>) -> Self {
        let model = model.unwrap_or_else(|| default_page(config.copyright_year()));
        Self::new(
            model,
            config.style_assets(),
            SmokeChecker::new(config.smoke.clone()),
        )
    }

    pub fn model(&self) -> &PageModel {
        &self.model
    }

    pub fn render(&self) -> String {
        debug!(sections = self.model.sections.len(), "rendering page");
        render_page(&self.model, &self.assets)
    }

    /// Smoke-check markup. Never fails; see [`SmokeChecker::run`].
    pub fn check(&self, html: &str, sink: &dyn DiagnosticSink) -> SmokeReport {
        check_html(&self.checker, html, sink)
    }

    /// Render to `out`, then check the written document once unless
    /// `skip_check` is set. Check failures are reported, not returned.
    pub fn build(
        &self,
        out: &Path,
        skip_check: bool,
        sink: &dyn DiagnosticSink,
    ) -> Result<BuildOutput> {
        let html = self.render();
        write_document(out, &html)?;
        info!(path = %out.display(), bytes = html.len(), "page written");

        let report = (!skip_check).then(|| {
            let report = self.check(&html, sink);
            log_summary(&report);
            report
        });

        Ok(BuildOutput {
            path: out.to_path_buf(),
            bytes: html.len(),
            report,
        })
    }
}

/// Run `checker` against raw markup.
pub fn check_html(checker: &SmokeChecker, html: &str, sink: &dyn DiagnosticSink) -> SmokeReport {
    checker.run(&HtmlProbe::new(html), sink)
}

pub fn log_summary(report: &SmokeReport) {
    if report.passed() {
        info!("smoke checks: {}", report.summary());
    } else {
        warn!("smoke checks: {}", report.summary());
    }
}

/// Read a page model from a JSON file.
pub fn load_model(path: &Path) -> Result<PageModel> {
    let raw = read_file(path)?;
    serde_json::from_str(&raw).map_err(|source| Error::Model {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the document, creating parent directories as needed.
pub fn write_document(path: &Path, html: &str) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, html).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_leptos::smoke::{CheckName, Outcome, SilentSink};
    use tempfile::TempDir;

    fn pinned() -> TorkiqConfig {
        let mut config = TorkiqConfig::default();
        config.page.copyright_year = Some(2025);
        config
    }

    #[test]
    fn default_site_passes_its_checks() {
        let site = Site::from_config(&pinned(), None);
        let report = site.check(&site.render(), &SilentSink);
        assert!(report.passed(), "{}", report.summary());
    }

    #[test]
    fn build_writes_nested_output() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("deep").join("dist").join("index.html");

        let site = Site::from_config(&pinned(), None);
        let built = site.build(&out, false, &SilentSink).expect("build");

        let written = std::fs::read_to_string(&out).expect("read back");
        assert_eq!(written.len(), built.bytes);
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("© 2025"));
        assert!(built.report.expect("checked").passed());
    }

    #[test]
    fn skip_check_leaves_no_report() {
        let temp = TempDir::new().expect("temp dir");
        let site = Site::from_config(&pinned(), None);
        let built = site
            .build(&temp.path().join("index.html"), true, &SilentSink)
            .expect("build");
        assert!(built.report.is_none());
    }

    #[test]
    fn failing_checks_do_not_fail_the_build() {
        let temp = TempDir::new().expect("temp dir");
        let mut config = pinned();
        config.smoke.accent_token = "bg-nonexistent".into();

        let site = Site::from_config(&config, None);
        let built = site
            .build(&temp.path().join("index.html"), false, &SilentSink)
            .expect("build still succeeds");

        let report = built.report.expect("checked");
        assert!(matches!(
            report.outcome(CheckName::PrimaryCtaAccent),
            Some(Outcome::Fail(_))
        ));
    }

    #[test]
    fn load_model_reports_bad_json() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("page.json");
        std::fs::write(&path, "{ not json").expect("write");

        assert!(matches!(load_model(&path), Err(Error::Model { .. })));
        assert!(matches!(
            load_model(&temp.path().join("absent.json")),
            Err(Error::Read { .. })
        ));
    }

    #[test]
    fn model_round_trips_through_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("page.json");
        let model = default_page(2025);
        std::fs::write(&path, serde_json::to_string(&model).expect("json")).expect("write");

        assert_eq!(load_model(&path).expect("load"), model);
    }
}
