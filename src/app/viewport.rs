use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::nav::Viewport;

/// The live browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn section_top(&self, id: &str) -> Option<f64> {
        let el = document()
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(f64::from(el.offset_top()))
    }

    fn smooth_scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}
