//! The contact form: four server-validated fields and a submit flow.
//!
//! All protocol decisions live in [`ContactFormState`]; this component only
//! binds inputs to `edit`, renders per-field errors, and drives the one
//! asynchronous step between `begin_submit` and `finish_submit`.

use leptos::prelude::*;

use crate::components::alert_stack::AlertStack;
use crate::state::fields::Field;
use crate::state::submission::ContactFormState;

/// Contact form panel: alerts, the four inputs, and the submit button.
#[component]
pub fn ContactForm() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(form);
    };

    let busy = move || form.with(ContactFormState::busy);

    view! {
        <form class="contact-form" on:submit=on_submit>
            <AlertStack/>

            <div class="contact-form__row">
                <FieldInput field=Field::Name input_type="text" placeholder="Your Name" maxlength=100/>
                <FieldInput field=Field::Email input_type="email" placeholder="Your Email" maxlength=254/>
            </div>
            <FieldInput field=Field::Subject input_type="text" placeholder="Subject" maxlength=200/>
            <MessageInput/>

            <div class="contact-form__actions">
                <button type="submit" class="btn btn--primary contact-form__submit" disabled=busy>
                    <span>{move || if busy() { "Sending..." } else { "Send Message" }}</span>
                    <Show when=busy>
                        <span class="contact-form__spinner" aria-hidden="true"></span>
                    </Show>
                </button>
            </div>
        </form>
    }
}

/// One single-line input bound to a form field, with its error line.
#[component]
fn FieldInput(
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
    maxlength: u32,
) -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();
    let invalid = move || form.with(|state| state.errors.has(field));

    view! {
        <div class="contact-form__group">
            <input
                class="contact-form__input"
                class=("contact-form__input--invalid", invalid)
                type=input_type
                name=field.as_str()
                placeholder=placeholder
                maxlength=maxlength.to_string()
                prop:value=move || form.with(|state| state.fields.get(field).to_owned())
                on:input=move |ev| {
                    form.update(|state| state.edit(field, event_target_value(&ev)));
                }
            />
            <div class="contact-form__feedback">
                {move || form.with(|state| state.errors.message(field))}
            </div>
        </div>
    }
}

/// The multi-line message input, bound like [`FieldInput`].
#[component]
fn MessageInput() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();
    let field = Field::Message;
    let invalid = move || form.with(|state| state.errors.has(field));

    view! {
        <div class="contact-form__group">
            <textarea
                class="contact-form__input contact-form__input--textarea"
                class=("contact-form__input--invalid", invalid)
                name=field.as_str()
                placeholder="Message"
                rows="5"
                prop:value=move || form.with(|state| state.fields.get(field).to_owned())
                on:input=move |ev| {
                    form.update(|state| state.edit(field, event_target_value(&ev)));
                }
            ></textarea>
            <div class="contact-form__feedback">
                {move || form.with(|state| state.errors.message(field))}
            </div>
        </div>
    }
}

/// Runs one submission attempt to its terminal outcome.
///
/// `begin_submit` is the re-entrancy guard: while an attempt is in flight it
/// returns `None` and no second request starts. The completion uses
/// `try_update` so a response landing after the component was torn down is a
/// no-op rather than a panic.
fn submit(form: RwSignal<ContactFormState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::alerts::SUCCESS_DISMISS_MS;

        let Some(request) = form.try_update(ContactFormState::begin_submit).flatten() else {
            return;
        };

        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::send_contact(&request).await;
            let scheduled = form
                .try_update(|state| state.finish_submit(outcome))
                .flatten();

            // Success alerts auto-dismiss; dismiss_alert no-ops if the alert
            // was replaced or closed by hand in the meantime.
            if let Some(id) = scheduled {
                gloo_timers::future::sleep(std::time::Duration::from_millis(SUCCESS_DISMISS_MS))
                    .await;
                let _ = form.try_update(|state| state.dismiss_alert(id));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
    }
}
