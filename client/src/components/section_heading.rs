//! Shared section title block.

use leptos::prelude::*;

use crate::components::reveal::Reveal;

#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-8 sm:mb-12">
            <h2 class="heading">{title}</h2>
            <p class="subheading max-w-2xl mx-auto">{subtitle}</p>
        </Reveal>
    }
}
