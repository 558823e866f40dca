use leptos::prelude::*;
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

use crate::decor::floating_shapes;
use crate::scroll::{page_progress, scroll_to_top_visible};
use crate::theme::Theme;

const NAV_ITEMS: [&str; 5] = ["Home", "About", "Skills", "Projects", "Contact"];
const SHAPE_COUNT: usize = 8;

#[component]
pub fn FloatingShapes() -> impl IntoView {
    view! {
        <div class="fixed inset-0 pointer-events-none overflow-hidden z-0">
            {floating_shapes(SHAPE_COUNT)
                .into_iter()
                .map(|shape| {
                    let class = if shape.drifts_right {
                        "absolute rounded-full opacity-10 animate-float-right"
                    } else {
                        "absolute rounded-full opacity-10 animate-float-left"
                    };
                    view! { <div class=class style=shape.style()></div> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let (progress, set_progress) = signal(0.0);

    // document height is only known in the browser
    Effect::new(move |_| {
        let y = scroll_y.get();
        let viewport = height.get();
        let document_height = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(viewport);
        set_progress.set(page_progress(y, document_height, viewport));
    });

    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-cyan-400 z-50 origin-left"
            style:transform=move || format!("scaleX({})", progress.get())
        ></div>
    }
}

#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let visible = Signal::derive(move || scroll_to_top_visible(scroll_y.get()));

    view! {
        <Show when=move || visible.get()>
            <button
                on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
                aria-label="Scroll to top"
                class="fixed bottom-8 right-8 bg-cyan-400 text-navy w-12 h-12 rounded-full flex items-center justify-center shadow-lg z-50 animate-pop-in hover:scale-110 active:scale-90 transition-transform"
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
                        d="M5 10l7-7m0 0l7 7m-7-7v18"
                    />
                </svg>
            </button>
        </Show>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (theme, set_theme) = signal(Theme::default());

    // logs once on mount and again on every toggle
    Effect::new(move |_| log::info!("{}", theme.get().change_message()));

    view! {
        <button
            on:click=move |_| set_theme.update(|t| *t = t.toggle())
            aria-label="Toggle theme"
            class="fixed top-24 right-8 bg-panel w-10 h-10 rounded-full flex items-center justify-center shadow-lg z-50 hover:scale-110 active:scale-90 transition-transform"
        >
            <div class=move || {
                if theme.get().is_dark() {
                    "transition-transform duration-500 rotate-0"
                } else {
                    "transition-transform duration-500 rotate-[360deg]"
                }
            }>
                {move || {
                    if theme.get().is_dark() {
                        view! {
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                class="h-5 w-5 text-yellow-300"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z"
                                />
                            </svg>
                        }
                            .into_any()
                    } else {
                        view! {
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                class="h-5 w-5 text-cyan-400"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z"
                                />
                            </svg>
                        }
                            .into_any()
                    }
                }}
            </div>
        </button>
    }
}

#[component]
pub fn NavBar(brand: String) -> impl IntoView {
    view! {
        <nav class="fixed w-full bg-navy/90 backdrop-blur-sm z-50 px-6 py-4 animate-drop-in">
            <div class="max-w-7xl mx-auto flex justify-between items-center">
                <h1 class="text-2xl font-bold text-cyan-400 hover:scale-105 active:scale-95 transition-transform">
                    {brand}
                </h1>
                <div class="space-x-6">
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            view! {
                                <a
                                    href=format!("#{}", item.to_lowercase())
                                    class="group relative inline-block hover:text-cyan-400 hover:scale-110 transition-all animate-fade-in-down"
                                    style=format!("animation-delay: {}ms", i * 100)
                                >
                                    {*item}
                                    <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-cyan-400 transition-all duration-200 group-hover:w-full"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
