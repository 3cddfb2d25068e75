//! Inline SVG icons (Lucide outlines, 24px grid).
//!
//! Icons are stroke-drawn: one `d` string per icon, subpaths joined with
//! `M` moves so a single `<path>` covers multi-part glyphs.

use leptos::prelude::*;

use crate::types::IconKind;

/// Renders an icon by kind.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::Check class="h-4 w-4" /> }
/// ```
#[component]
pub fn Icon(
    /// Which glyph
    kind: IconKind,
    /// CSS classes (size is set through classes)
    #[prop(default = "h-5 w-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            <path d=icon_path(kind)></path>
        </svg>
    }
}

/// Path data for an icon kind.
pub fn icon_path(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Zap => ICON_ZAP,
        IconKind::Gauge => ICON_GAUGE,
        IconKind::Shield => ICON_SHIELD,
        IconKind::PlugZap => ICON_PLUG_ZAP,
        IconKind::Factory => ICON_FACTORY,
        IconKind::CalendarCheck => ICON_CALENDAR_CHECK,
        IconKind::Bot => ICON_BOT,
        IconKind::BarChart => ICON_BAR_CHART,
        IconKind::Check => ICON_CHECK,
        IconKind::ArrowRight => ICON_ARROW_RIGHT,
        IconKind::Mail => ICON_MAIL,
    }
}

// =============================================================================
// Lucide icons - https://lucide.dev/
// =============================================================================

const ICON_ZAP: &str = "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z";

const ICON_GAUGE: &str = "M12 14l4-4M3.34 19a10 10 0 1 1 17.32 0";

const ICON_SHIELD: &str = "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z";

const ICON_PLUG_ZAP: &str = "M6.3 20.3a2.4 2.4 0 0 0 3.4 0L12 18l-6-6-2.3 2.3a2.4 2.4 0 0 0 0 3.4ZM2 22l3-3M7.5 13.5 10 11M10.5 16.5 13 14M18 3l-4 4h6l-4 4";

const ICON_FACTORY: &str = "M2 20a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V8l-7 5V8l-7 5V4a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2ZM17 18h1M12 18h1M7 18h1";

const ICON_CALENDAR_CHECK: &str = "M8 2v4M16 2v4M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2ZM3 10h18M9 16l2 2 4-4";

const ICON_BOT: &str = "M12 8V4H8M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2ZM2 14h2M20 14h2M15 13v2M9 13v2";

const ICON_BAR_CHART: &str = "M3 3v18h18M18 17V9M13 17V5M8 17v-3";

const ICON_CHECK: &str = "M20 6 9 17l-5-5";

const ICON_ARROW_RIGHT: &str = "M5 12h14M12 5l7 7-7 7";

const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2ZM22 7l-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7";
