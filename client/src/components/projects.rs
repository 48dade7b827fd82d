//! Featured projects section.

use leptos::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom, stagger_delay};
use crate::components::section_heading::SectionHeading;
use crate::content::{PROJECTS, Project};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section-padding relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-tertiary via-primary to-tertiary">
                <div class="absolute w-[500px] h-[500px] bg-secondary/5 rounded-full blur-3xl animate-pulse -top-64 -right-64"></div>
                <div class="absolute w-[400px] h-[400px] bg-secondary/10 rounded-full blur-2xl animate-pulse bottom-0 -left-32"></div>
            </div>

            <div class="container mx-auto relative z-10">
                <SectionHeading title="Featured Projects" subtitle="Some Things I've Built"/>
                <div class="grid gap-16">
                    {PROJECTS
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectCard project=project index=i/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    view! {
        <Reveal delay_ms=stagger_delay(index, 200) class="group">
            <div class="grid md:grid-cols-2 gap-8 items-center bg-primary/50 backdrop-blur-sm rounded-2xl p-8 border border-secondary/10">
                <div class="relative aspect-video rounded-xl overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-full object-cover transform group-hover:scale-105 transition-transform duration-500"
                    />
                    <div class="absolute inset-0 bg-gradient-to-br from-secondary/20 to-primary group-hover:opacity-80 transition-opacity duration-300"></div>
                    <div class="absolute inset-0 flex items-center justify-center gap-6 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                        <a
                            href=project.repository
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-3 bg-primary/80 rounded-full text-secondary hover:bg-secondary hover:text-primary transition-all duration-300"
                            title="Source code"
                        >
                            "GitHub"
                        </a>
                    </div>
                </div>

                <div class="space-y-6">
                    <h3 class="text-2xl font-bold text-textPrimary group-hover:text-secondary transition-colors duration-300">
                        {project.title}
                    </h3>
                    <p class="text-textSecondary">{project.description}</p>

                    <div class="space-y-2">
                        <h4 class="text-lg font-semibold text-textPrimary">"Key Features:"</h4>
                        <ul class="grid grid-cols-1 sm:grid-cols-2 gap-2">
                            {project
                                .features
                                .iter()
                                .map(|feature| {
                                    view! {
                                        <li class="flex items-center gap-2 text-textSecondary text-sm">
                                            <span class="text-secondary">"▹"</span>
                                            {*feature}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="flex flex-wrap gap-4">
                        {project
                            .technologies
                            .iter()
                            .enumerate()
                            .map(|(i, tech)| {
                                view! {
                                    <Reveal
                                        from=RevealFrom::Scale
                                        delay_ms=stagger_delay(i, 100)
                                        class="flex items-center gap-2 bg-tertiary/50 px-3 py-1.5 rounded-full border border-secondary/10"
                                    >
                                        <span class="text-textSecondary text-sm">{*tech}</span>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Reveal>
    }
}
