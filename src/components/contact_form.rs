//! Contact form backed by a not-yet-wired mail collaborator.

use leptos::prelude::*;

use crate::net::remote::{RemoteAction, RemoteState};
use crate::state::toast::{Toast, ToastState};

/// Contact form. The mail service is a stub collaborator: submission only
/// simulates latency, always succeeds, and clears the fields.
#[component]
pub fn ContactForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let action: RemoteAction<(), ()> = RemoteAction::new(|()| async move {
        // Stand-in for the mail-sending collaborator.
        #[cfg(feature = "csr")]
        {
            gloo_timers::future::sleep(std::time::Duration::from_millis(1000)).await;
        }
        Ok(())
    });
    action.on_fulfilled(move |()| {
        toasts.update(|t| {
            t.push(Toast::success(
                "Message sent successfully!",
                "We'll get back to you within 24 hours.",
            ));
        });
        name.set(String::new());
        email.set(String::new());
        subject.set(String::new());
        message.set(String::new());
    });

    let state = action.state();
    let pending = move || state.with(RemoteState::is_pending);

    let on_submit = {
        let action = action.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let complete = [name, email, subject, message]
                .iter()
                .all(|f| !f.get().trim().is_empty());
            if !complete {
                return;
            }
            action.dispatch(());
        }
    };

    view! {
        <div class="contact-form">
            <div class="card">
                <div class="card__header">
                    <h2>"Get in Touch"</h2>
                    <p class="card__description">
                        "Have questions or feedback? We'd love to hear from you!"
                    </p>
                </div>
                <form class="contact-form__form" on:submit=on_submit>
                    <div class="contact-form__grid">
                        <label class="field">
                            "Full Name"
                            <input
                                class="field__input"
                                type="text"
                                placeholder="Your full name"
                                required
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            "Email Address"
                            <input
                                class="field__input"
                                type="email"
                                placeholder="your.email@example.com"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="field">
                        "Subject"
                        <input
                            class="field__input"
                            type="text"
                            placeholder="What is your message about?"
                            required
                            prop:value=move || subject.get()
                            on:input=move |ev| subject.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "Message"
                        <textarea
                            class="field__input contact-form__message"
                            placeholder="Your message here..."
                            rows=5
                            required
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button class="btn btn--primary btn--full" type="submit" disabled=pending>
                        {move || if pending() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>

            <div class="card contact-form__info">
                <div class="card__header">
                    <h2>"Contact Information"</h2>
                    <p class="card__description">"Reach out to us through any of these channels"</p>
                </div>
                <div class="contact-form__channel">
                    <h3>"Web"</h3>
                    <p>"www.bighaat.com"</p>
                    <p>"farmer.gov.in"</p>
                    <p>"www.tnagrisnet.tn.gov.in"</p>
                </div>
                <div class="contact-form__channel">
                    <h3>"Phone"</h3>
                    <p>"Toll free 1551 or 1800-180-1551"</p>
                </div>
                <div class="contact-form__channel">
                    <h3>"Address"</h3>
                    <p>"1, Wallaja Road, PWD Estate, Chepauk, Chennai, Tamil Nadu 600005."</p>
                </div>
            </div>
        </div>
    }
}
