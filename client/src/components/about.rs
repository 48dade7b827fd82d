//! About section: bio, experience cards and technology list.

use leptos::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom, stagger_delay};
use crate::components::section_heading::SectionHeading;
use crate::content::{ABOUT_PARAGRAPHS, EXPERIENCES, OWNER, PROFILE_IMAGE, TECHNOLOGIES};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section-padding relative overflow-hidden">
            <div class="absolute inset-0 bg-tertiary">
                <div class="absolute w-96 h-96 bg-secondary/5 rounded-full blur-3xl -top-48 -left-48"></div>
                <div class="absolute w-96 h-96 bg-secondary/10 rounded-full blur-3xl bottom-0 right-0"></div>
            </div>

            <div class="container mx-auto relative z-10">
                <SectionHeading title="About Me" subtitle="Passionate about creating meaningful digital experiences"/>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16 items-center">
                    <Reveal from=RevealFrom::Left class="relative group">
                        <div class="relative w-full max-w-md mx-auto">
                            <div class="absolute inset-0 border-2 border-secondary/30 rounded-xl animate-spin-slow"></div>
                            <div class="relative rounded-xl overflow-hidden shadow-2xl transform group-hover:scale-[1.02] transition-transform duration-500">
                                <img src=PROFILE_IMAGE alt=OWNER class="w-full h-auto object-cover"/>
                                <div class="absolute inset-0 bg-gradient-to-t from-primary/80 via-primary/20 to-transparent opacity-60"></div>
                            </div>
                        </div>
                    </Reveal>

                    <Reveal from=RevealFrom::Right>
                        <div class="space-y-4 text-textSecondary">
                            {ABOUT_PARAGRAPHS
                                .into_iter()
                                .map(|paragraph| view! { <p class="leading-relaxed">{paragraph}</p> })
                                .collect_view()}
                        </div>

                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 mt-8">
                            {EXPERIENCES
                                .into_iter()
                                .enumerate()
                                .map(|(i, exp)| {
                                    view! {
                                        <Reveal delay_ms=stagger_delay(i, 100) class="bg-primary/50 p-6 rounded-xl border border-secondary/10 hover:border-secondary/30">
                                            <div class="flex items-center space-x-3 mb-3">
                                                <span class="text-2xl text-secondary font-mono">{exp.glyph}</span>
                                                <h3 class="text-lg font-semibold text-textPrimary">{exp.title}</h3>
                                            </div>
                                            <p class="text-textSecondary text-sm">{exp.description}</p>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="mt-8">
                            <h3 class="text-xl font-semibold text-textPrimary mb-4">
                                "Technologies I've been working with:"
                            </h3>
                            <div class="grid grid-cols-2 md:grid-cols-3 gap-3">
                                {TECHNOLOGIES
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, tech)| {
                                        view! {
                                            <Reveal from=RevealFrom::Left delay_ms=stagger_delay(i, 100) class="flex items-center space-x-2">
                                                <span class="text-secondary">"▹"</span>
                                                <span class="text-textSecondary hover:text-secondary transition-colors duration-300">
                                                    {tech}
                                                </span>
                                            </Reveal>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
