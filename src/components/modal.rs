//! Reusable modal dialog tied into the scroll lock.

use leptos::prelude::*;

use crate::util::scroll::ScrollLockCoordinator;

/// Backdrop-and-dialog modal.
///
/// Mounting fires the coordinator's modal-opened signal (freezing the scroll
/// position behind the overlay) and unmounting fires modal-closed, which
/// restores it. Render inside a `<Show>` so the lifecycle tracks visibility.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let scroll_lock = expect_context::<ScrollLockCoordinator>();
    scroll_lock.modal_opened();
    on_cleanup(move || scroll_lock.modal_closed());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" role="dialog" aria-modal="true" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "\u{d7}"
                    </button>
                </header>
                <div class="dialog__body">{children()}</div>
            </div>
        </div>
    }
}
