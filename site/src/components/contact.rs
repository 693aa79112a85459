//! Contact section: the message form and its result toast.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `ContactFlow` signal and one `SubmissionDriver`. The driver is
//! torn down with the component so a pending dismissal timer never fires
//! against a disposed signal.

use leptos::prelude::*;

use crate::components::floating_shapes::FloatingShapes;
use crate::config::SiteConfig;
use crate::content::Section;
use crate::net::relay::EmailJsRelay;
use crate::net::submit::SubmissionDriver;
use crate::state::contact::{ContactFlow, ToastKind};
use crate::util::timer::BrowserScheduler;

type ContactDriver = SubmissionDriver<RwSignal<ContactFlow>, EmailJsRelay, BrowserScheduler>;

#[component]
pub fn Contact() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let flow = RwSignal::new(ContactFlow::default());
    let driver: StoredValue<ContactDriver, LocalStorage> = StoredValue::new_local(
        SubmissionDriver::new(flow, EmailJsRelay::new(config.relay), BrowserScheduler)
            .with_dismiss_after(config.dismiss_after),
    );
    on_cleanup(move || driver.with_value(ContactDriver::teardown));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = flow.get_untracked();
        if !current.can_submit() {
            return;
        }
        let pending = driver.with_value(|d| d.submit(current.form));
        leptos::task::spawn_local(async move {
            let _ = pending.await;
        });
    };

    let sending = move || flow.with(ContactFlow::is_sending);
    let toast = move || flow.with(|f| f.toast().cloned());

    view! {
        <section id=Section::Contact.id() class="section section--textured" aria-labelledby="contact-heading">
            <FloatingShapes/>

            <header class="section__header">
                <h2 id="contact-heading" class="section__title">
                    <span class="section__title-chip">
                        "Get In " <span class="section__title-accent">"Touch"</span>
                    </span>
                </h2>
            </header>

            {move || {
                toast()
                    .map(|t| {
                        let (modifier, icon) = match t.kind {
                            ToastKind::Success => ("toast--success", "✔"),
                            ToastKind::Error => ("toast--error", "✖"),
                        };
                        view! {
                            <div class=format!("toast {modifier}") role="status">
                                <span class="toast__icon">{icon}</span>
                                {t.message}
                            </div>
                        }
                    })
            }}

            <div class="glass-card contact-card">
                <form class="contact-form" on:submit=on_submit>
                    <div class="contact-form__field">
                        <label class="contact-form__label" for="contact-name">"Your Name"</label>
                        <input
                            id="contact-name"
                            class="contact-form__input"
                            type="text"
                            name="user_name"
                            placeholder="Enter your name"
                            required
                            prop:value=move || flow.with(|f| f.form.name.clone())
                            on:input=move |ev| flow.update(|f| f.form.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="contact-form__field">
                        <label class="contact-form__label" for="contact-email">"Your Email"</label>
                        <input
                            id="contact-email"
                            class="contact-form__input"
                            type="email"
                            name="user_email"
                            placeholder="Enter your email"
                            required
                            prop:value=move || flow.with(|f| f.form.email.clone())
                            on:input=move |ev| flow.update(|f| f.form.email = event_target_value(&ev))
                        />
                    </div>
                    <div class="contact-form__field">
                        <label class="contact-form__label" for="contact-message">"Message"</label>
                        <textarea
                            id="contact-message"
                            class="contact-form__input"
                            name="message"
                            rows="4"
                            placeholder="Write your message here..."
                            required
                            prop:value=move || flow.with(|f| f.form.message.clone())
                            on:input=move |ev| flow.update(|f| f.form.message = event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button class="btn btn--primary contact-form__submit" type="submit" disabled=sending>
                        {move || if sending() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
