use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::reveal::RevealLatch;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
    Fade,
}

impl RevealFrom {
    fn hidden_class(self) -> &'static str {
        match self {
            RevealFrom::Below => "opacity-0 translate-y-5",
            RevealFrom::Left => "opacity-0 -translate-x-5",
            RevealFrom::Right => "opacity-0 translate-x-5",
            RevealFrom::Fade => "opacity-0",
        }
    }
}

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    #[prop(optional)] from: RevealFrom,
    #[prop(optional)] delay_ms: u32,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node_ref);
    let revealed = Memo::new(move |prev: Option<&bool>| {
        RevealLatch::resume(prev.copied().unwrap_or(false)).observe(visible.get())
    });

    view! {
        <div
            node_ref=node_ref
            class=move || {
                let state = if revealed.get() {
                    "opacity-100 translate-x-0 translate-y-0"
                } else {
                    from.hidden_class()
                };
                format!("transform transition-all duration-500 ease-out {state} {class}")
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
