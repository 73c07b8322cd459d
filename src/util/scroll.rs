//! Window scrolling glue: offset reads, jumps, and the scroll-lock
//! coordinator that preserves scroll position across a modal's lifecycle.
//!
//! The lock protocol on close is deliberately ordered: smooth scrolling is
//! forced off before the jump (no visible scroll flash), the offset is
//! re-applied after the `--scroll-top` property is removed (the removal can
//! shift layout), and smooth scrolling comes back only after a short settle
//! delay so the second jump cannot itself animate. Requires a browser
//! environment; on the server every operation is inert.

use leptos::prelude::*;

use crate::state::scroll_lock::ScrollLock;

/// CSS custom property carrying the frozen offset (as `-<offset>px`) so
/// fixed-position overlay styling can compensate while the page cannot scroll.
pub const SCROLL_TOP_PROPERTY: &str = "--scroll-top";

/// How long to wait after restoring the offset before smooth scrolling is
/// re-enabled; long enough for the browser to finish layout from the jumps.
pub const RESTORE_SETTLE_MS: u64 = 10;

/// Current vertical scroll offset of the window, in pixels.
pub fn scroll_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Instant jump to a vertical offset. Whether this animates is governed by
/// the document's `scroll-behavior`, hence [`force_instant_scrolling`].
pub fn jump_to(offset: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, offset);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = offset;
    }
}

/// Animated scroll back to the top of the page.
pub fn scroll_to_top_smooth() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

#[cfg(feature = "hydrate")]
fn document_style() -> Option<web_sys::CssStyleDeclaration> {
    use wasm_bindgen::JsCast;

    let root = web_sys::window()?.document()?.document_element()?;
    let root: web_sys::HtmlElement = root.dyn_into().ok()?;
    Some(root.style())
}

/// Expose the captured offset to styling via [`SCROLL_TOP_PROPERTY`].
pub fn set_offset_property(offset: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(style) = document_style() {
            let _ = style.set_property(SCROLL_TOP_PROPERTY, &format!("-{offset}px"));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = offset;
    }
}

/// Remove the exposed offset property once restoration has begun.
pub fn remove_offset_property() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(style) = document_style() {
            let _ = style.remove_property(SCROLL_TOP_PROPERTY);
        }
    }
}

/// Override the document's `scroll-behavior` with `auto` so subsequent jumps
/// cannot animate.
pub fn force_instant_scrolling() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(style) = document_style() {
            let _ = style.set_property("scroll-behavior", "auto");
        }
    }
}

/// Drop the override, handing `scroll-behavior` back to the stylesheet.
pub fn restore_scroll_behavior() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(style) = document_style() {
            let _ = style.remove_property("scroll-behavior");
        }
    }
}

/// Drives the [`ScrollLock`] machine against the DOM.
///
/// Provided once as context; modal components report their lifecycle through
/// the `modal_opened` / `modal_closed` signal pair and nothing else.
#[derive(Clone, Copy)]
pub struct ScrollLockCoordinator {
    lock: RwSignal<ScrollLock>,
}

impl ScrollLockCoordinator {
    pub fn new() -> Self {
        Self {
            lock: RwSignal::new(ScrollLock::new()),
        }
    }

    /// Whether a capture is currently live.
    pub fn is_locked(&self) -> bool {
        self.lock.get_untracked().is_locked()
    }

    /// A modal just opened: capture the scroll offset and expose it to
    /// styling. A second open overwrites the prior capture.
    pub fn modal_opened(&self) {
        #[cfg(feature = "hydrate")]
        {
            let offset = scroll_offset();
            self.lock.try_update(|lock| lock.lock(offset));
            set_offset_property(offset);
        }
    }

    /// A modal just closed: put the page back where it was, without any
    /// observable animated scroll. No-op when no capture is live.
    pub fn modal_closed(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some((offset, token)) = self.lock.try_update(|lock| lock.begin_unlock()).flatten()
            else {
                return;
            };

            force_instant_scrolling();
            jump_to(offset);
            remove_offset_property();
            // Removing the property can shift layout; assert the offset again.
            jump_to(offset);

            let lock = self.lock;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(RESTORE_SETTLE_MS))
                    .await;
                // Only the restoration this timer belongs to may re-enable
                // smooth scrolling; a re-lock in the meantime wins.
                if lock.try_update(|lock| lock.finish_unlock(token)) == Some(true) {
                    restore_scroll_behavior();
                }
            });
        }
    }
}

impl Default for ScrollLockCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
