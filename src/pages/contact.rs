//! Contact page: the email-us form plus a contact-details modal.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::modal::Modal;
use crate::net::types::{EmailAddress, PhoneAddress};

/// Contact page — intro copy, the form, and a button opening the published
/// contact details in a modal (which exercises the scroll lock).
#[component]
pub fn ContactPage() -> impl IntoView {
    let show_details = RwSignal::new(false);
    let on_close = Callback::new(move |()| show_details.set(false));

    view! {
        <div class="contact-page">
            <header class="contact-page__header">
                <h1>"Contact Us"</h1>
                <p>"Questions about an order or our products? Send us a message and we will get back to you."</p>
                <button class="btn contact-page__details" on:click=move |_| show_details.set(true)>
                    "Our contact details"
                </button>
            </header>

            <ContactForm/>

            <Show when=move || show_details.get()>
                <ContactDetailsDialog on_close=on_close/>
            </Show>
        </div>
    }
}

/// Modal listing the published email addresses and phone numbers.
#[component]
fn ContactDetailsDialog(on_close: Callback<()>) -> impl IntoView {
    let emails = LocalResource::new(|| crate::net::api::fetch_email_addresses());
    let phones = LocalResource::new(|| crate::net::api::fetch_phone_addresses());

    view! {
        <Modal title="Contact details" on_close=on_close>
            <div class="contact-details">
                <h3>"Email"</h3>
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || emails.get().map(|list| email_lines(list.unwrap_or_default()))}
                </Suspense>

                <h3>"Phone"</h3>
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || phones.get().map(|list| phone_lines(list.unwrap_or_default()))}
                </Suspense>
            </div>
        </Modal>
    }
}

fn email_lines(list: Vec<EmailAddress>) -> AnyView {
    if list.is_empty() {
        return view! { <p class="contact-details__empty">"Not available right now."</p> }
            .into_any();
    }
    list.into_iter()
        .map(|address| {
            let mailto = format!("mailto:{}", address.email);
            view! {
                <p class="contact-details__line">
                    <a href=mailto>{address.email.clone()}</a>
                    {address
                        .is_primary
                        .then(|| view! { <span class="contact-details__badge">"primary"</span> })}
                </p>
            }
        })
        .collect::<Vec<_>>()
        .into_any()
}

fn phone_lines(list: Vec<PhoneAddress>) -> AnyView {
    if list.is_empty() {
        return view! { <p class="contact-details__empty">"Not available right now."</p> }
            .into_any();
    }
    list.into_iter()
        .map(|phone| {
            let tel = format!("tel:{}", phone.number);
            let shown = phone.display().to_owned();
            view! {
                <p class="contact-details__line">
                    <a href=tel>{shown}</a>
                    {phone
                        .is_primary
                        .then(|| view! { <span class="contact-details__badge">"primary"</span> })}
                </p>
            }
        })
        .collect::<Vec<_>>()
        .into_any()
}
