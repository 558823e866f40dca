use chrono::{Datelike, Utc};
use leptos::prelude::*;

use super::reveal::{Reveal, RevealFrom};

#[component]
pub fn Footer(name: String) -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="py-8 px-6 bg-navy/80 border-t border-cyan-400/10">
            <div class="max-w-7xl mx-auto text-center">
                <Reveal from=RevealFrom::Fade>
                    <p class="text-gray-400">{format!("© {year} {name}. All rights reserved.")}</p>
                </Reveal>
                <Reveal from=RevealFrom::Fade delay_ms=200>
                    <p class="text-gray-500 text-sm mt-2">
                        "Made with " <span class="text-red-500">"❤"</span> " and Rust"
                    </p>
                </Reveal>
            </div>
        </footer>
    }
}
