//! Floating back-to-top affordance.

use leptos::prelude::*;

use crate::util::scroll;

/// Scroll offset past which the button becomes visible.
pub const SHOW_THRESHOLD_PX: f64 = 100.0;

/// Button that fades in once the page is scrolled and smooth-scrolls back to
/// the top on click.
///
/// Stateless beyond the last computed visibility: it is a pure function of
/// the scroll offset, recomputed on every scroll event and once on mount to
/// cover the initial load position.
#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let recompute = move || visible.set(scroll::scroll_offset() > SHOW_THRESHOLD_PX);
        recompute();
        let handle = window_event_listener(leptos::ev::scroll, move |_| recompute());
        on_cleanup(move || handle.remove());
    }

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        scroll::scroll_to_top_smooth();
    };

    view! {
        <a
            href="#"
            class="back-to-top"
            class=("back-to-top--visible", move || visible.get())
            aria-label="Back to top"
            on:click=on_click
        >
            "\u{2191}"
        </a>
    }
}
