//! Contact page: message form posting to the external form service.
//!
//! The page keeps no validation rules of its own. Whatever the service
//! reports comes back through `ContactForm::finish` and is shown next to the
//! matching input.

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::page_shell::PageShell;
use crate::content::company::CONTACT;
use crate::content::{services, shapes};
use crate::net::api::submit_contact;
use crate::state::contact::{ContactForm, Field, SubmissionStatus};

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let succeeded = move || form.with(|f| f.status == SubmissionStatus::Succeeded);

    view! {
        <PageShell>
            <Hero
                title="Contact"
                highlight="Us"
                body="Tell us about your project and we will get back to you within one business day."
                shapes=&shapes::CONTACT
            />

            <section class="section contact">
                <div class="contact__form">
                    <Show when=succeeded fallback=move || view! { <ContactFormFields form=form/> }>
                        <div class="contact__success">
                            <h2>"Thank you!"</h2>
                            <p>"Your message has been sent. We will be in touch soon."</p>
                            <button class="btn btn--secondary" on:click=move |_| form.update(ContactForm::reset)>
                                "Send another message"
                            </button>
                        </div>
                    </Show>
                </div>

                <aside class="contact__info">
                    <h3>{CONTACT.legal_name}</h3>
                    <p>{CONTACT.location}</p>
                    <p>{CONTACT.phone}</p>
                    <p>
                        <a href=format!("mailto:{}", CONTACT.email)>{CONTACT.email}</a>
                    </p>
                </aside>
            </section>
        </PageShell>
    }
}

#[component]
fn ContactFormFields(form: RwSignal<ContactForm>) -> impl IntoView {
    let submitting = move || form.with(ContactForm::is_submitting);
    let general_errors = move || {
        form.with(|f| f.errors.general().into_iter().map(str::to_owned).collect::<Vec<_>>())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(record) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = submit_contact(&record).await;
            form.update(|f| f.finish(outcome));
        });
    };

    view! {
        <form class="form" on:submit=on_submit novalidate=true>
            <TextField form=form field=Field::Name label="Name"/>
            <TextField form=form field=Field::Email label="Email" input_type="email"/>
            <TextField form=form field=Field::Company label="Company (optional)"/>

            <label class="form__field">
                <span class="form__label">"Service (optional)"</span>
                <select
                    class="form__input"
                    prop:value=move || form.with(|f| f.draft.service.clone())
                    on:change=move |ev| form.update(|f| f.set(Field::Service, event_target_value(&ev)))
                    disabled=submitting
                >
                    <option value="">"Select a service"</option>
                    {services::SERVICES
                        .iter()
                        .map(|service| view! { <option value=service.title>{service.title}</option> })
                        .collect_view()}
                </select>
                <FieldMessages form=form field=Field::Service/>
            </label>

            <label class="form__field">
                <span class="form__label">"Message"</span>
                <textarea
                    class="form__input form__input--multiline"
                    rows="6"
                    prop:value=move || form.with(|f| f.draft.message.clone())
                    on:input=move |ev| form.update(|f| f.set(Field::Message, event_target_value(&ev)))
                    disabled=submitting
                ></textarea>
                <FieldMessages form=form field=Field::Message/>
            </label>

            <div class="form__general" role="alert">
                {move || {
                    general_errors()
                        .into_iter()
                        .map(|message| view! { <p class="form__error">{message}</p> })
                        .collect_view()
                }}
            </div>

            <button type="submit" class="btn btn--primary" disabled=submitting>
                {move || if submitting() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}

#[component]
fn TextField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="form__field">
            <span class="form__label">{label}</span>
            <input
                class="form__input"
                type=input_type.unwrap_or("text")
                name=field.key()
                prop:value=move || form.with(|f| f.draft.get(field).to_owned())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                disabled=move || form.with(ContactForm::is_submitting)
            />
            <FieldMessages form=form field=field/>
        </label>
    }
}

/// Messages the form service returned for one field.
#[component]
fn FieldMessages(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let messages = move || form.with(|f| f.errors.for_field(field).to_vec());
    view! {
        {move || {
            messages()
                .into_iter()
                .map(|message| view! { <p class="form__error">{message}</p> })
                .collect_view()
        }}
    }
}
