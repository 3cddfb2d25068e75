// torkiq.ai landing page, browser build

mod dom;

use leptos::prelude::*;
use page_leptos::components::LandingPage;
use page_leptos::content::default_page;
use page_leptos::smoke::SmokeChecker;
use page_leptos::styles::StyleAssets;

fn main() {
    console_error_panic_hook::set_once();

    let year = js_sys::Date::new_0().get_full_year() as i32;
    let model = default_page(year);

    let Some(document) = dom::document() else {
        return;
    };
    dom::install_head(&document, &model, &StyleAssets::default());

    let sections = model.sections;
    leptos::mount::mount_to_body(move || view! { <LandingPage sections=sections /> });

    // mounting is synchronous, so the tree is committed here
    let report = SmokeChecker::default().run(&dom::DocumentProbe::new(document), &dom::ConsoleSink);
    web_sys::console::log_1(&format!("[smoke] {}", report.summary()).into());
}
