//! Viewport-triggered, one-shot section reveal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a block of markup and fades/slides it in the first time it enters
//! the viewport. The latch lives in `state::reveal`; the browser side uses an
//! `IntersectionObserver` that disconnects after the first reveal. Server
//! renders emit the hidden classes and the client takes over after hydration.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::prelude::*;

use crate::state::reveal::RevealState;

/// Direction the content travels from while it fades in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
    Scale,
}

const BASE_CLASS: &str = "transition-all duration-500 ease-out";
const SHOWN_CLASS: &str = "opacity-100 translate-x-0 translate-y-0 scale-100";

/// Transition classes for a reveal direction and latch state.
#[must_use]
pub fn reveal_class(from: RevealFrom, revealed: bool) -> String {
    let state = if revealed {
        SHOWN_CLASS
    } else {
        match from {
            RevealFrom::Below => "opacity-0 translate-y-5",
            RevealFrom::Left => "opacity-0 -translate-x-5",
            RevealFrom::Right => "opacity-0 translate-x-5",
            RevealFrom::Scale => "opacity-0 scale-50",
        }
    };
    format!("{BASE_CLASS} {state}")
}

/// Transition delay for the `index`-th sibling in a staggered list.
#[must_use]
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(step_ms))
}

#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] from: RevealFrom,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let reveal = RwSignal::new(RevealState::default());
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    observe_once(node_ref, reveal);

    let classes = move || format!("{} {class}", reveal_class(from, reveal.get().revealed));
    let style = format!("transition-delay: {delay_ms}ms");

    view! {
        <div node_ref=node_ref class=classes style=style>
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn observe_once(node_ref: NodeRef<leptos::html::Div>, reveal: RwSignal<RevealState>) {
    use wasm_bindgen::{JsCast, closure::Closure};

    Effect::new(move || {
        let Some(el) = node_ref.get() else {
            return;
        };
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<web_sys::IntersectionObserverEntry>()
                        .is_intersecting()
                });
                let first = reveal
                    .try_update(|r| r.observe(intersecting))
                    .unwrap_or(true);
                if first {
                    observer.disconnect();
                }
            },
        );
        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin("0px 0px -50px 0px");
        match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer.observe(&el),
            // No observer support: show content immediately.
            Err(_) => reveal.update(|r| {
                r.observe(true);
            }),
        }
        callback.forget();
    });
}
