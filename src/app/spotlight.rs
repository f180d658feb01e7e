use leptos::{ev, prelude::*};

use crate::spotlight::spotlight_background;

#[component]
pub fn MouseSpotlight() -> impl IntoView {
    let pointer = RwSignal::new(None::<(f64, f64)>);

    // effects only run in the browser, so the server never registers this
    Effect::new(move |_| {
        let handle = window_event_listener(ev::mousemove, move |ev| {
            pointer.set(Some((f64::from(ev.client_x()), f64::from(ev.client_y()))));
        });
        on_cleanup(move || handle.remove());
    });

    view! {
        <div
            aria-hidden="true"
            class="pointer-events-none fixed inset-0 z-30 transition duration-300"
            style:background=move || spotlight_background(pointer.get())
        />
    }
}
