//! Transient alerts shown above the contact form.

use leptos::prelude::*;

use crate::state::submission::ContactFormState;

/// Renders the currently visible alerts with a dismiss button on each.
///
/// Dismissing funnels through [`ContactFormState::dismiss_alert`], the same
/// path the success auto-expiry takes, so both are idempotent together.
#[component]
pub fn AlertStack() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();

    view! {
        <div class="alert-stack">
            {move || {
                form.with(|state| state.alerts.alerts().to_vec())
                    .into_iter()
                    .map(|alert| {
                        let id = alert.id;
                        let class =
                            format!("alert-stack__item alert-stack__item--{}", alert.kind.as_str());
                        view! {
                            <div class=class role="alert">
                                <span class="alert-stack__message">{alert.message.clone()}</span>
                                <button
                                    class="alert-stack__close"
                                    aria-label="Close"
                                    on:click=move |_| {
                                        form.update(|state| state.dismiss_alert(id));
                                    }
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
