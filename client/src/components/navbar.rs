//! Fixed top navigation with a mobile overlay menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns its own `NavState` signal. A window scroll listener drives the
//! compact style; the overlay suspends page scrolling through
//! `util::scroll_lock` for as long as it is open.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::content::{NAV_ITEMS, NavItem, OWNER};
use crate::state::nav::NavState;
use crate::util::{anchor, scroll_lock};

/// Navbar container classes for the current scroll density.
#[must_use]
pub fn nav_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed w-full z-50 transition-all duration-300 bg-primary/95 backdrop-blur-sm shadow-lg py-3"
    } else {
        "fixed w-full z-50 transition-all duration-300 bg-primary/70 py-5"
    }
}

#[must_use]
pub fn menu_button_label(menu_open: bool) -> &'static str {
    if menu_open { "Close menu" } else { "Open menu" }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            nav.maybe_update(|n| n.on_scroll(offset));
        });
        on_cleanup(move || handle.remove());
    }

    Effect::new(move || scroll_lock::apply(nav.get().scroll_locked()));
    on_cleanup(|| scroll_lock::apply(false));

    let close = Callback::new(move |()| nav.update(NavState::close_menu));
    let noop = Callback::new(|()| {});
    let home = NAV_ITEMS[0];

    view! {
        <nav class=move || nav_class(nav.get().scrolled)>
            <div class="container mx-auto px-4 flex justify-between items-center">
                <NavLink item=home class="text-2xl font-bold text-secondary cursor-pointer" on_select=noop>
                    {OWNER}
                </NavLink>

                <div class="hidden md:flex items-center space-x-8">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            view! {
                                <NavLink item=item class="nav-link cursor-pointer" on_select=noop>
                                    {item.label}
                                </NavLink>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="md:hidden">
                    <button
                        class="text-secondary text-2xl focus:outline-none"
                        aria-label=move || menu_button_label(nav.get().menu_open)
                        aria-expanded=move || nav.get().menu_open.to_string()
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        {move || if nav.get().menu_open { "✕" } else { "☰" }}
                    </button>
                </div>

                <Show when=move || nav.get().menu_open>
                    // Clicking outside the panel closes it.
                    <div class="fixed inset-0 bg-primary/60 md:hidden" on:click=move |_| close.run(())></div>
                    <div class="fixed top-0 right-0 h-screen w-2/3 bg-tertiary p-8 md:hidden">
                        <button
                            class="absolute top-6 right-6 text-secondary text-2xl"
                            aria-label="Close menu"
                            on:click=move |_| close.run(())
                        >
                            "✕"
                        </button>
                        <div class="flex flex-col space-y-8 mt-16">
                            {NAV_ITEMS
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <NavLink item=item class="nav-link text-xl" on_select=close>
                                            {item.label}
                                        </NavLink>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

/// Anchor link that smooth-scrolls to its section instead of jumping.
#[component]
fn NavLink(item: NavItem, class: &'static str, on_select: Callback<()>, children: Children) -> impl IntoView {
    let section_id = item.section_id;
    view! {
        <a
            href=anchor::section_href(section_id)
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                anchor::scroll_to_section(section_id);
                on_select.run(());
            }
        >
            {children()}
        </a>
    }
}
