use leptos::{ev::SubmitEvent, prelude::*, web_sys};

use super::reveal::{Reveal, RevealFrom};
use crate::contact::{ContactField, ContactForm, SENT_MESSAGE};
use crate::content::Contact;
use crate::reveal::stagger_delay_ms;

const INPUT_CLASS: &str = "w-full p-3 rounded-lg bg-panel border border-cyan-400/20 focus:border-cyan-400 focus:outline-none";

fn social_icon(name: &str) -> &'static str {
    match name {
        "GitHub" => "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z",
        _ => "M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z",
    }
}

#[component]
pub fn ContactSection(contact: Contact) -> impl IntoView {
    let Contact {
        email,
        phone,
        address,
        socials,
    } = contact;
    let lines = [("📧", email), ("📱", phone), ("📍", address)];

    view! {
        <section id="contact" class="py-20 px-6 bg-navy/50">
            <div class="max-w-7xl mx-auto">
                <Reveal from=RevealFrom::Fade>
                    <h2 class="text-4xl font-bold mb-12 text-center">
                        "Contact " <span class="text-cyan-400">"Me"</span>
                    </h2>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
                    <Reveal from=RevealFrom::Left class="relative">
                        <h3 class="text-2xl font-bold mb-4">"Let's Work Together"</h3>
                        <p class="text-gray-400 mb-6">
                            "Feel free to reach out for collaborations or just a friendly hello"
                        </p>
                        <div class="space-y-4">
                            {lines
                                .into_iter()
                                .enumerate()
                                .map(|(i, (icon, text))| {
                                    view! {
                                        <Reveal from=RevealFrom::Left delay_ms=stagger_delay_ms(100, 100, i)>
                                            <p class="group flex items-center text-cyan-400 hover:translate-x-1 transition-transform">
                                                <span class="mr-2 bg-panel p-2 rounded-full transition-transform group-hover:rotate-[20deg]">
                                                    {icon}
                                                </span>
                                                {text}
                                            </p>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex space-x-4 mt-6">
                            {socials
                                .into_iter()
                                .map(|social| {
                                    let path = social_icon(&social.name);
                                    view! {
                                        <a
                                            href=social.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.name
                                            class="text-cyan-400 hover:text-cyan-300 p-2 bg-panel rounded-full hover:scale-110 hover:rotate-12 active:scale-90 transition-all"
                                        >
                                            <svg
                                                class="w-6 h-6"
                                                fill="currentColor"
                                                viewBox="0 0 24 24"
                                                xmlns="http://www.w3.org/2000/svg"
                                            >
                                                <path d=path />
                                            </svg>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="absolute -bottom-10 -left-10 w-40 h-40 rounded-full bg-cyan-400/5 z-0 animate-orbit"></div>
                    </Reveal>
                    <Reveal from=RevealFrom::Right>
                        <ContactFormView />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Writes an input's value into the form under the input's `name` attribute.
fn write_field(form: RwSignal<ContactForm>, ev: &web_sys::Event) {
    let name = event_target::<web_sys::HtmlInputElement>(ev).name();
    let value = event_target_value(ev);
    form.update(|f| {
        if let Err(e) = f.set_named(&name, value) {
            log::warn!("{e}");
        }
    });
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            f.submit();
        });
        if let Err(e) = window().alert_with_message(SENT_MESSAGE) {
            log::warn!("couldn't show alert: {e:?}");
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-6 relative">
            {[ContactField::Name, ContactField::Email, ContactField::Subject]
                .into_iter()
                .enumerate()
                .map(|(i, field)| {
                    let kind = if field == ContactField::Email { "email" } else { "text" };
                    view! {
                        <Reveal delay_ms=stagger_delay_ms(100, 100, i)>
                            <input
                                type=kind
                                name=field.name()
                                placeholder=field.placeholder()
                                prop:value=move || form.with(|f| f.get(field).to_string())
                                on:input=move |ev| write_field(form, &ev)
                                class=INPUT_CLASS
                            />
                        </Reveal>
                    }
                })
                .collect_view()}
            <Reveal delay_ms=stagger_delay_ms(100, 100, 3)>
                <textarea
                    name=ContactField::Message.name()
                    placeholder=ContactField::Message.placeholder()
                    prop:value=move || form.with(|f| f.get(ContactField::Message).to_string())
                    on:input=move |ev| write_field(form, &ev)
                    rows="4"
                    class=INPUT_CLASS
                ></textarea>
            </Reveal>
            <Reveal delay_ms=500>
                <button
                    type="submit"
                    class="w-full bg-cyan-400 text-navy py-3 rounded-lg font-semibold hover:bg-cyan-500 hover:scale-[1.02] hover:shadow-glow active:scale-[0.98] transition-all"
                >
                    "Submit"
                </button>
            </Reveal>
            <div class="absolute -bottom-10 -right-10 w-40 h-40 rounded-full bg-cyan-400/5 z-0 animate-orbit-reverse"></div>
        </form>
    }
}
