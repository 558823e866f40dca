use leptos::{html, prelude::*};
use leptos_use::{
    use_element_bounding, use_window_size, UseElementBoundingReturn, UseWindowSizeReturn,
};

use super::interval::IntervalScheduler;
use crate::counter::{display_value, AnimatorConfig, CounterDriver, CounterSpec, StatIcon};
use crate::scroll::{ElementRect, ScrollTracker};

fn icon_path(icon: StatIcon) -> &'static str {
    match icon {
        StatIcon::Clock => "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z",
        StatIcon::Clipboard => "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2",
        StatIcon::Code => "M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4",
        StatIcon::ThumbsUp => "M14 10h4.764a2 2 0 011.789 2.894l-3.5 7A2 2 0 0115.263 21h-4.017c-.163 0-.326-.02-.485-.06L7 20m7-10V5a2 2 0 00-2-2h-.095c-.5 0-.905.405-.905.905 0 .714-.211 1.412-.608 2.006L7 11v9m7-10h-2M7 20H5a2 2 0 01-2-2v-6a2 2 0 012-2h2.5",
    }
}

/// Progress of the element behind `target` through the viewport band, `None` until mounted.
fn use_scroll_progress(target: NodeRef<html::Div>, tracker: ScrollTracker) -> Signal<Option<f64>> {
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(target);
    let UseWindowSizeReturn {
        height: viewport_height,
        ..
    } = use_window_size();
    Signal::derive(move || {
        target.get()?;
        let rect = ElementRect {
            top: top.get(),
            height: height.get(),
        };
        tracker.progress(Some(rect), viewport_height.get())
    })
}

#[component]
pub fn StatsSection(stats: Vec<CounterSpec>) -> impl IntoView {
    view! {
        <section class="py-16 px-6 bg-navy/30">
            <div class="max-w-7xl mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    {stats.into_iter().map(|spec| view! { <AnimatedCounter spec /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AnimatedCounter(spec: CounterSpec) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let (count, set_count) = signal(0u32);
    let progress = use_scroll_progress(node_ref, ScrollTracker::default());

    let driver = StoredValue::new_local(CounterDriver::new(
        spec.target,
        &AnimatorConfig::default(),
        IntervalScheduler,
        move |value| set_count.set(value),
    ));

    Effect::new(move |_| {
        let Some(p) = progress.get() else {
            return;
        };
        driver.try_update_value(|d| {
            if let Err(e) = d.observe(p) {
                log::warn!("counter shows its final value without animating: {e}");
            }
        });
    });

    on_cleanup(move || {
        driver.try_update_value(|d| d.teardown());
    });

    view! {
        <div
            node_ref=node_ref
            class="bg-panel p-6 rounded-lg text-center transition-transform duration-300 hover:scale-105"
        >
            <div class="text-cyan-400 text-3xl mb-2 flex justify-center">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    class="h-8 w-8"
                    fill="none"
                    viewBox="0 0 24 24"
                    stroke="currentColor"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d=icon_path(spec.icon)
                    />
                </svg>
            </div>
            <div class="text-4xl font-bold mb-2">{move || display_value(count.get())}</div>
            <div class="text-gray-400">{spec.label}</div>
        </div>
    }
}
