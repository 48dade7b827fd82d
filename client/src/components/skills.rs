//! Skills section: proficiency cards, tools and a drifting name backdrop.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use leptos::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom, stagger_delay};
use crate::components::section_heading::SectionHeading;
use crate::content::{FLOATING_SKILLS, SKILL_CATEGORIES, Skill, TOOLS, floating_lane};

/// Nominal backdrop height used to spread the floating badges.
const BACKDROP_HEIGHT: f64 = 1000.0;

/// Inline style for a floating badge: lane offset plus a staggered start.
#[must_use]
pub fn floating_style(index: usize) -> String {
    let top = floating_lane(index, BACKDROP_HEIGHT);
    let delay_s = index * 2;
    format!("top: {top}px; left: -100px; animation-delay: {delay_s}s")
}

/// Inline width of a proficiency bar.
#[must_use]
pub fn level_width(level: u8) -> String {
    format!("width: {}%", level.min(100))
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="section-padding relative overflow-hidden bg-gradient-to-b from-primary via-tertiary to-primary">
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute w-[500px] h-[500px] bg-secondary/5 rounded-full blur-[100px] top-0 -right-64"></div>
                <div class="absolute w-[400px] h-[400px] bg-secondary/10 rounded-full blur-[80px] bottom-0 -left-32"></div>
            </div>

            <div class="absolute inset-0 overflow-hidden pointer-events-none opacity-30" aria-hidden="true">
                {FLOATING_SKILLS
                    .into_iter()
                    .enumerate()
                    .map(|(i, name)| {
                        view! {
                            <div class="absolute flex items-center gap-2 animate-drift" style=floating_style(i)>
                                <span class="text-textSecondary text-sm font-medium">{name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="container mx-auto relative z-10">
                <SectionHeading
                    title="Skills & Expertise"
                    subtitle="A comprehensive showcase of my technical proficiency and years of hands-on experience in modern web development"
                />

                <div class="grid gap-16 relative z-10">
                    {SKILL_CATEGORIES
                        .into_iter()
                        .enumerate()
                        .map(|(ci, category)| {
                            view! {
                                <Reveal delay_ms=stagger_delay(ci, 200)>
                                    <div class="inline-flex items-center gap-3 bg-tertiary/30 backdrop-blur-sm px-6 py-3 rounded-full border border-secondary/20 mb-8">
                                        <h3 class="text-xl font-bold text-textPrimary">{category.title}</h3>
                                    </div>
                                    <div class="grid md:grid-cols-2 gap-6">
                                        {category
                                            .skills
                                            .iter()
                                            .enumerate()
                                            .map(|(i, skill)| view! { <SkillCard skill=*skill index=i/> })
                                            .collect_view()}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}

                    <Reveal delay_ms=500>
                        <div class="inline-flex items-center gap-3 bg-tertiary/30 backdrop-blur-sm px-6 py-3 rounded-full border border-secondary/20 mb-8">
                            <h3 class="text-xl font-bold text-textPrimary">"Development Tools"</h3>
                        </div>
                        <div class="flex flex-wrap gap-6">
                            {TOOLS
                                .into_iter()
                                .enumerate()
                                .map(|(i, tool)| {
                                    view! {
                                        <Reveal from=RevealFrom::Scale delay_ms=stagger_delay(i, 100)>
                                            <div class="flex items-center gap-3 bg-tertiary/30 px-5 py-3 rounded-xl border border-secondary/10 hover:border-secondary/30 transition-all duration-300">
                                                <span class="text-textPrimary font-medium">{tool.name}</span>
                                                <span class="text-sm text-textSecondary">{tool.description}</span>
                                            </div>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: Skill, index: usize) -> impl IntoView {
    view! {
        <Reveal from=RevealFrom::Left delay_ms=stagger_delay(index, 100)>
            <div class="bg-tertiary/30 backdrop-blur-sm rounded-xl p-6 border border-secondary/10 hover:border-secondary/30 transition-all duration-300">
                <div class="flex items-center justify-between mb-4">
                    <div>
                        <h4 class="text-textPrimary font-semibold">{skill.name}</h4>
                        <p class="text-sm text-textSecondary">{skill.years}</p>
                    </div>
                    <span class="text-secondary font-mono text-sm bg-secondary/5 px-3 py-1 rounded-full">
                        {format!("{}%", skill.level)}
                    </span>
                </div>
                <div class="h-2 bg-tertiary/50 rounded-full overflow-hidden">
                    <div
                        class="h-full bg-gradient-to-r from-secondary/50 to-secondary rounded-full transition-all duration-1000"
                        style=level_width(skill.level)
                    ></div>
                </div>
            </div>
        </Reveal>
    }
}
