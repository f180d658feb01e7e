use std::f64::consts::TAU;

use leptos::{html, prelude::*};
use leptos_use::{use_window_size, UseWindowSizeReturn};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::starfield::{constellation_edges, seed_for, star_field};

const LINK_DISTANCE: f64 = 90.0;

#[derive(Error, Debug, Clone)]
enum CanvasError {
    #[error("canvas has no size yet")]
    Empty,
    #[error("2d context unavailable")]
    NoContext,
    #[error("couldn't draw star")]
    Draw,
}

/// Decorative star field behind a section. Draws nothing if the canvas can't be used.
#[component]
pub fn GalaxyCanvas(
    id: &'static str,
    #[prop(optional)] with_constellations: bool,
) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let UseWindowSizeReturn { width, height } = use_window_size();

    Effect::new(move |_| {
        // redraw on resize
        width.track();
        height.track();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if let Err(err) = draw(&canvas, seed_for(id), with_constellations) {
            log::warn!("galaxy background '{id}' not drawn: {err}");
        }
    });

    view! {
        <canvas
            id=id
            node_ref=canvas_ref
            class="absolute inset-0 w-full h-full pointer-events-none"
            aria-hidden="true"
        ></canvas>
    }
}

fn draw(
    canvas: &HtmlCanvasElement,
    seed: u64,
    with_constellations: bool,
) -> Result<(), CanvasError> {
    let (w, h) = (canvas.client_width(), canvas.client_height());
    if w <= 0 || h <= 0 {
        return Err(CanvasError::Empty);
    }
    canvas.set_width(w.unsigned_abs());
    canvas.set_height(h.unsigned_abs());
    let (w, h) = (f64::from(w), f64::from(h));

    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(CanvasError::NoContext)?;
    ctx.clear_rect(0.0, 0.0, w, h);

    let stars = star_field(seed, w, h);
    if with_constellations {
        ctx.set_stroke_style_str("rgba(255, 255, 255, 0.12)");
        ctx.set_line_width(0.6);
        for (a, b) in constellation_edges(&stars, LINK_DISTANCE) {
            ctx.begin_path();
            ctx.move_to(stars[a].x, stars[a].y);
            ctx.line_to(stars[b].x, stars[b].y);
            ctx.stroke();
        }
    }

    ctx.set_fill_style_str("#ffffff");
    for star in &stars {
        ctx.set_global_alpha(star.alpha);
        ctx.begin_path();
        ctx.arc(star.x, star.y, star.radius, 0.0, TAU)
            .map_err(|_| CanvasError::Draw)?;
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
    Ok(())
}
