use leptos::prelude::*;

use super::reveal::{Reveal, RevealFrom};
use crate::content::Project;
use crate::reveal::stagger_delay_ms;

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    let selected = RwSignal::new(None::<Project>);

    view! {
        <section id="projects" class="py-20 px-6">
            <div class="max-w-7xl mx-auto">
                <Reveal from=RevealFrom::Fade>
                    <h2 class="text-4xl font-bold mb-12 text-center">
                        "Latest " <span class="text-cyan-400">"Projects"</span>
                    </h2>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal from=RevealFrom::Left delay_ms=stagger_delay_ms(0, 100, i)>
                                    <ProjectCard project selected />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
        {move || {
            selected
                .get()
                .map(|project| {
                    view! { <ProjectModal project on_close=move || selected.set(None) /> }
                })
        }}
    }
}

#[component]
fn ProjectCard(project: Project, selected: RwSignal<Option<Project>>) -> impl IntoView {
    let title = project.card_title().to_string();
    let image = project.image.clone();
    let summary = project.summary.clone();

    view! {
        <div class="bg-panel rounded-lg overflow-hidden hover:scale-105 hover:-translate-y-1 hover:shadow-card transition-all duration-300">
            <img src=image alt=title.clone() class="w-full h-48 object-cover" />
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2">{title}</h3>
                <p class="text-gray-400 mb-4">{summary}</p>
                <button
                    class="text-cyan-400 hover:text-cyan-300 hover:translate-x-1 transition-all"
                    on:click=move |_| selected.set(Some(project.clone()))
                >
                    "Learn More →"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ProjectModal(project: Project, on_close: impl Fn() + Clone + Send + Sync + 'static) -> impl IntoView {
    let close_button = on_close.clone();
    let Project {
        title,
        timeline,
        technologies,
        details,
        ..
    } = project;

    view! {
        <div
            class="fixed inset-0 bg-black/70 flex items-center justify-center z-50 p-4 animate-fade-in"
            on:click=move |_| on_close()
        >
            <div
                class="bg-panel rounded-lg max-w-2xl w-full max-h-[90vh] overflow-y-auto animate-pop-in"
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="p-6">
                    <div class="flex justify-between items-start mb-4">
                        <h3 class="text-2xl font-bold text-cyan-400">{title}</h3>
                        <button
                            class="text-gray-400 hover:text-white"
                            aria-label="Close"
                            on:click=move |_| close_button()
                        >
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                class="h-6 w-6"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M6 18L18 6M6 6l12 12"
                                />
                            </svg>
                        </button>
                    </div>

                    <div class="mb-4">
                        <p class="text-gray-300 mb-2">{timeline}</p>
                        <div class="flex flex-wrap gap-2 mb-4">
                            {technologies
                                .into_iter()
                                .enumerate()
                                .map(|(i, tech)| {
                                    view! {
                                        <span
                                            class="bg-panel-light px-2 py-1 rounded text-sm hover:scale-105 hover:bg-panel-hover transition-all animate-fade-in-up"
                                            style=format!("animation-delay: {}ms", stagger_delay_ms(0, 100, i))
                                        >
                                            {tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="space-y-4">
                        {details
                            .into_iter()
                            .enumerate()
                            .map(|(i, detail)| {
                                view! {
                                    <div
                                        class="animate-slide-in-left"
                                        style=format!("animation-delay: {}ms", stagger_delay_ms(300, 100, i))
                                    >
                                        <h4 class="text-lg font-semibold mb-1">{detail.title}</h4>
                                        <p class="text-gray-400">{detail.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
