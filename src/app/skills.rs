use leptos::prelude::*;

use super::reveal::{Reveal, RevealFrom};
use crate::content::Skill;
use crate::reveal::stagger_delay_ms;

#[component]
pub fn SkillsSection(skills: Vec<Skill>) -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-6 bg-navy/50">
            <div class="max-w-7xl mx-auto">
                <Reveal from=RevealFrom::Fade>
                    <h2 class="text-4xl font-bold mb-12 text-center">
                        "My " <span class="text-cyan-400">"Skills"</span>
                    </h2>
                </Reveal>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    {skills
                        .into_iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <Reveal delay_ms=stagger_delay_ms(0, 100, i)>
                                    <div class="group flex flex-col items-center p-6 bg-panel rounded-lg hover:bg-panel-light hover:scale-105 hover:shadow-card transition-all">
                                        <div class="text-cyan-400 mb-4 transition-transform duration-500 group-hover:rotate-[360deg]">
                                            <img src=skill.icon alt=skill.name.clone() class="w-16 h-16" />
                                        </div>
                                        <h3 class="text-lg font-semibold">{skill.name}</h3>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
