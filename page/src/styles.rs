//! Styling for the landing page.
//!
//! Components use utility classes (Tailwind vocabulary). The utility
//! stylesheet itself is loaded from [`StyleAssets`]; this module only holds
//! the class lists shared between components and a small base stylesheet
//! inlined into the document head.
//!
//! # Accent token
//!
//! Primary buttons carry [`ACCENT_TOKEN`] in their class list. The smoke
//! checks look for it on the header call to action, so changing the accent
//! means changing both this constant and the check expectation.

/// Background class marking the brand accent color.
pub const ACCENT_TOKEN: &str = "bg-violet-700";

/// Default location of the utility-class stylesheet script.
pub const DEFAULT_STYLESHEET_SCRIPT: &str = "https://cdn.tailwindcss.com";

/// Inline CSS that must work even without the utility stylesheet.
pub const BASE_CSS: &str = r#"
html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    -webkit-font-smoothing: antialiased;
}

section[id], footer[id], #demo {
    scroll-margin-top: 5rem;
}

input[type="email"]:invalid:not(:placeholder-shown) {
    border-color: #dc2626;
}
"#;

/// Page wrapper (gradient background).
pub const PAGE_ROOT: &str = "min-h-screen bg-gradient-to-b from-emerald-50 via-white to-teal-50 text-slate-900 dark:from-slate-950 dark:via-slate-950 dark:to-slate-900";

/// Primary call to action (anchor styled as a button).
pub const CTA_PRIMARY: &str = "inline-flex items-center gap-2 rounded-2xl px-5 py-3 font-semibold shadow-md transition hover:shadow-lg bg-violet-700 text-white hover:bg-violet-800 dark:bg-violet-600 dark:text-white";

/// Outlined secondary call to action.
pub const CTA_SECONDARY: &str = "inline-flex items-center gap-2 rounded-2xl border px-5 py-3 font-semibold text-teal-700 border-teal-200 hover:bg-teal-50 dark:text-teal-300 dark:border-teal-800 dark:hover:bg-slate-900";

/// Pill badge.
pub const BADGE: &str = "inline-flex items-center rounded-full border px-3 py-1 text-xs font-medium text-muted-foreground bg-white/70 dark:bg-black/20 backdrop-blur-sm";

/// Centered max-width container.
pub const CONTAINER: &str = "mx-auto max-w-7xl px-6";

/// Section heading (h2).
pub const SECTION_TITLE: &str = "text-3xl font-extrabold tracking-tight md:text-4xl";

/// Muted paragraph text.
pub const MUTED: &str = "text-slate-600 dark:text-slate-300";

/// Bordered white band used by alternating sections.
pub const BAND: &str = "border-y bg-white py-16 dark:border-slate-800 dark:bg-slate-950";

/// Rounded bordered card.
pub const CARD: &str = "rounded-2xl border p-6 shadow-sm dark:border-slate-800";

/// Ticked list item.
pub const CHECK_ITEM: &str = "flex items-start gap-2";

/// Small tick icon next to list items.
pub const CHECK_ICON: &str = "mt-0.5 h-4 w-4";

/// Pricing tier card; the highlighted tier appends [`TIER_HIGHLIGHT`].
pub const TIER_CARD: &str = "rounded-3xl border p-6 shadow-sm dark:border-slate-800";

/// Emphasis ring for the highlighted tier.
pub const TIER_HIGHLIGHT: &str = "ring-2 ring-teal-600";

/// Waitlist email input.
pub const EMAIL_INPUT: &str = "w-full rounded-2xl border px-10 py-3 outline-none ring-indigo-500/30 focus:ring-4 dark:border-slate-800 dark:bg-slate-900";

/// Waitlist submit button.
pub const SUBMIT_BUTTON: &str = "w-full rounded-2xl bg-teal-700 px-5 py-3 font-semibold text-white shadow-md transition hover:shadow-lg dark:bg-teal-600 dark:text-white sm:w-auto";

/// Fine print.
pub const FINE_PRINT: &str = "text-xs text-slate-500";

/// External stylesheet locations for the rendered document.
///
/// ```rust
/// use page_leptos::styles::StyleAssets;
///
/// // Offline output: rely on BASE_CSS only
/// let assets = StyleAssets { stylesheet_script: String::new() };
/// assert!(!assets.has_stylesheet());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleAssets {
    /// `<script src>` of the utility stylesheet; empty to omit it
    pub stylesheet_script: String,
}

impl StyleAssets {
    /// Whether a stylesheet script tag is emitted.
    pub fn has_stylesheet(&self) -> bool {
        !self.stylesheet_script.is_empty()
    }
}

impl Default for StyleAssets {
    fn default() -> Self {
        Self {
            stylesheet_script: DEFAULT_STYLESHEET_SCRIPT.to_string(),
        }
    }
}

/// Class list of a pricing tier card.
pub fn tier_class(highlighted: bool) -> String {
    if highlighted {
        format!("{TIER_CARD} {TIER_HIGHLIGHT}")
    } else {
        TIER_CARD.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_cta_carries_accent_token() {
        assert!(CTA_PRIMARY.split_whitespace().any(|c| c == ACCENT_TOKEN));
    }

    #[test]
    fn highlighted_tier_adds_ring() {
        assert!(tier_class(true).ends_with(TIER_HIGHLIGHT));
        assert_eq!(tier_class(false), TIER_CARD);
    }
}
