use std::ops::ControlFlow;

use leptos::prelude::*;

use super::interval::{IntervalCancel, IntervalScheduler};
use crate::content::Profile;
use crate::timer::ScopedTimer;
use crate::typewriter::{Typewriter, TypewriterConfig};

#[component]
fn TypedGreeting(greetings: Vec<String>) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let typewriter = StoredValue::new_local(Typewriter::new(
        greetings.as_slice(),
        TypewriterConfig::default(),
    ));
    let timer = StoredValue::new_local(None::<ScopedTimer<IntervalCancel>>);

    // start typing once hydrated
    Effect::watch(
        || (),
        move |_, _, _| {
            let Some(period) = typewriter.try_with_value(|tw| tw.tick_period()) else {
                return;
            };
            let tick = Box::new(move || {
                let changed = typewriter
                    .try_update_value(|tw| tw.advance(period).then(|| tw.text()))
                    .flatten();
                if let Some(t) = changed {
                    set_text.set(t);
                }
                ControlFlow::Continue(())
            });
            match ScopedTimer::start(&IntervalScheduler, period, tick) {
                Ok(started) => timer.set_value(Some(started)),
                Err(e) => log::warn!("typing effect disabled: {e}"),
            }
        },
        true,
    );

    on_cleanup(move || {
        timer.try_update_value(|t| {
            if let Some(t) = t.as_mut() {
                t.cancel();
            }
        });
    });

    view! {
        <span>{text}</span>
        <span class="typed-cursor">"|"</span>
    }
}

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let Profile {
        name,
        greetings,
        bio,
        photo,
        ..
    } = profile;

    view! {
        <section id="home" class="min-h-screen flex items-center px-6 pt-20 relative">
            <div class="max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-12 items-center">
                <div class="animate-fade-in-up">
                    <h1 class="text-5xl font-bold mb-4 animate-slide-in-left min-h-[3.5rem]">
                        <TypedGreeting greetings />
                    </h1>
                    <p id="about" class="text-gray-400 mb-8 animate-fade-in [animation-delay:500ms]">
                        {bio}
                    </p>
                    <a
                        href="#contact"
                        class="bg-cyan-400 text-navy px-6 py-3 rounded-lg font-semibold hover:bg-cyan-500 hover:scale-105 hover:shadow-glow active:scale-95 transition-all inline-block"
                    >
                        "Get In Touch"
                    </a>
                </div>
                <div class="relative animate-pop-in">
                    <div class="w-80 h-80 mx-auto rounded-full bg-gradient-to-r from-cyan-400 to-purple-500 p-1 animate-glow">
                        <div class="w-full h-full rounded-full overflow-hidden">
                            <img src=photo alt=name class="w-full h-full object-cover" />
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2 flex flex-col items-center animate-bob">
                <p class="text-gray-400 mb-2">"Scroll Down"</p>
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    class="h-6 w-6 text-cyan-400"
                    fill="none"
                    viewBox="0 0 24 24"
                    stroke="currentColor"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M19 14l-7 7m0 0l-7-7m7 7V3"
                    />
                </svg>
            </div>
        </section>
    }
}
