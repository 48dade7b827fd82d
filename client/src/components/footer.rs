//! Page footer with credit and copyright year.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{OWNER, copyright_line};
use crate::util::clock;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = copyright_line(clock::current_year());

    view! {
        <footer class="bg-primary py-8">
            <div class="container mx-auto px-4">
                <Reveal class="text-center">
                    <p class="text-textSecondary">
                        "Designed & Built by " <span class="text-secondary">{OWNER}</span>
                    </p>
                    <p class="text-textSecondary mt-2">{copyright}</p>
                </Reveal>
            </div>
        </footer>
    }
}
