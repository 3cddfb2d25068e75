//! Command-line surface.
//!
//! Three subcommands: `render` (static build), `check` (smoke-check an
//! existing document) and `model` (dump the content model as JSON). Page
//! check failures never change the exit status unless `check --strict` asks
//! for it; only tool errors (unreadable input, unwritable output) do.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use page_leptos::smoke::{Outcome, SmokeChecker, SmokeReport, TracingSink};
use tracing::debug;

use crate::config::TorkiqConfig;
use crate::site::{self, Site};

#[derive(Parser, Debug)]
#[command(name = "torkiq")]
#[command(about = "Build and smoke-check the torkiq.ai landing page")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Config file (default: .torkiq/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page to HTML, then smoke-check it
    Render(RenderArgs),
    /// Smoke-check an existing HTML document
    Check(CheckArgs),
    /// Print the default content model as JSON
    Model(ModelArgs),
}

#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Output file (default from config: dist/index.html)
    #[arg(long, short, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Render a JSON page model instead of the built-in page
    #[arg(long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,

    /// Do not run the post-render smoke checks
    #[arg(long)]
    pub skip_check: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// HTML document to check
    pub file: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero when any check fails
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Default)]
pub struct ModelArgs {
    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl Cli {
    /// Config from `--config`, else `.torkiq/config.toml` under the cwd.
    pub fn load_config(&self) -> TorkiqConfig {
        match &self.config {
            Some(path) => TorkiqConfig::load_from_path(path),
            None => TorkiqConfig::load(Path::new(".")),
        }
    }
}

/// Dispatch a parsed command line.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let config = cli.load_config();
    debug!(?config, "config resolved");

    match &cli.command {
        Command::Render(args) => render(&config, args),
        Command::Check(args) => check(&config, args),
        Command::Model(args) => model(&config, args),
    }
}

fn render(config: &TorkiqConfig, args: &RenderArgs) -> Result<ExitCode> {
    let model = args
        .model
        .as_deref()
        .map(site::load_model)
        .transpose()
        .context("Failed to load page model")?;
    let site = Site::from_config(config, model);

    if args.stdout {
        let html = site.render();
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(html.as_bytes())
            .context("Failed to write document to stdout")?;
        if !args.skip_check {
            site::log_summary(&site.check(&html, &TracingSink));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let out = args.out.as_deref().unwrap_or(&config.output.path);
    let built = site
        .build(out, args.skip_check, &TracingSink)
        .with_context(|| format!("Failed to build page into {}", out.display()))?;

    println!("Page written to: {}", built.path.display());
    println!("HTML size: {} bytes", built.bytes);
    if let Some(report) = &built.report {
        println!("Smoke checks: {}", report.summary());
    }
    Ok(ExitCode::SUCCESS)
}

fn check(config: &TorkiqConfig, args: &CheckArgs) -> Result<ExitCode> {
    let html = site::read_file(&args.file).context("Failed to load document")?;
    let checker = SmokeChecker::new(config.smoke.clone());
    let report = site::check_html(&checker, &html, &TracingSink);

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{json}");
    } else {
        print!("{}", format_report(&report));
    }

    if args.strict && !report.passed() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn model(config: &TorkiqConfig, args: &ModelArgs) -> Result<ExitCode> {
    let site = Site::from_config(config, None);
    let json = if args.compact {
        serde_json::to_string(site.model())
    } else {
        serde_json::to_string_pretty(site.model())
    }
    .context("Failed to encode page model")?;
    println!("{json}");
    Ok(ExitCode::SUCCESS)
}

/// Human-readable report, one line per check plus a summary.
pub fn format_report(report: &SmokeReport) -> String {
    let mut out = String::new();
    for check in &report.checks {
        let line = match &check.outcome {
            Outcome::Pass => format!("  [pass] {}\n", check.name),
            Outcome::Fail(reason) => format!("  [FAIL] {}: {reason}\n", check.name),
            Outcome::Skipped(reason) => format!("  [skip] {}: {reason}\n", check.name),
        };
        out.push_str(&line);
    }
    out.push_str(&report.summary());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_leptos::smoke::{CheckName, CheckResult};

    #[test]
    fn parses_render_flags() {
        let cli = Cli::try_parse_from([
            "torkiq",
            "--log-level",
            "debug",
            "render",
            "--out",
            "site/index.html",
            "--skip-check",
        ])
        .expect("parse");

        assert_eq!(cli.log_level, "debug");
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.out, Some(PathBuf::from("site/index.html")));
        assert!(args.skip_check);
        assert!(!args.stdout);
    }

    #[test]
    fn stdout_conflicts_with_out() {
        let parsed = Cli::try_parse_from(["torkiq", "render", "--stdout", "--out", "x.html"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["torkiq", "check", "index.html", "--config", "c.toml"])
            .expect("parse");
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }

    #[test]
    fn report_lines_mark_each_outcome() {
        let report = SmokeReport {
            checks: vec![
                CheckResult {
                    name: CheckName::PrimaryCta,
                    outcome: Outcome::Pass,
                },
                CheckResult {
                    name: CheckName::Sections,
                    outcome: Outcome::Fail("#features missing".into()),
                },
                CheckResult {
                    name: CheckName::PrimaryCtaAccent,
                    outcome: Outcome::Skipped("no primary CTA".into()),
                },
            ],
        };

        let text = format_report(&report);
        assert!(text.contains("[pass] primary-cta"));
        assert!(text.contains("[FAIL] sections: #features missing"));
        assert!(text.contains("[skip] primary-cta-accent"));
        assert!(text.ends_with("3 checks: 1 passed, 1 failed, 1 skipped\n"));
    }
}
