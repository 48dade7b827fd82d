//! Landing section with the typed headline.

use leptos::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom};
use crate::content::{HERO_GREETING, HERO_SUMMARY, OWNER, PROFILE_IMAGE};
use crate::util::anchor;

#[component]
pub fn Hero() -> impl IntoView {
    let typed = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let mut typewriter = crate::state::typewriter::Typewriter::new(crate::content::HERO_PHRASES);
        loop {
            let delay = typewriter.tick();
            // Signal disposed once the section unmounts.
            if typed.try_set(typewriter.text()).is_some() {
                break;
            }
            gloo_timers::future::TimeoutFuture::new(delay).await;
        }
    });

    let jump = |section_id: &'static str| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            anchor::scroll_to_section(section_id);
        }
    };

    view! {
        <section
            id="home"
            class="section-padding min-h-screen flex items-center relative overflow-hidden bg-gradient-to-b from-primary to-tertiary"
        >
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute w-[500px] h-[500px] bg-secondary/5 rounded-full blur-3xl -top-48 -right-48 animate-pulse"></div>
                <div class="absolute w-[300px] h-[300px] bg-secondary/10 rounded-full blur-2xl bottom-0 -left-20 animate-pulse"></div>
            </div>

            <div class="container mx-auto relative z-10">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div class="max-w-3xl">
                        <Reveal>
                            <p class="text-secondary font-mono mb-4 text-lg">{HERO_GREETING}</p>
                        </Reveal>
                        <Reveal delay_ms=100>
                            <h1 class="heading">{format!("{OWNER}.")}</h1>
                        </Reveal>
                        <Reveal delay_ms=200>
                            <h2 class="subheading min-h-[2.5rem]">
                                <span class="bg-gradient-to-r from-secondary to-blue-400 bg-clip-text text-transparent">
                                    {move || typed.get()}
                                </span>
                                <span class="typewriter-caret text-secondary">"|"</span>
                            </h2>
                        </Reveal>
                        <Reveal delay_ms=300 class="mt-6">
                            <p class="text-textSecondary text-lg mb-8 max-w-xl">{HERO_SUMMARY}</p>
                        </Reveal>
                        <Reveal delay_ms=400 class="flex space-x-4">
                            <a href="#projects" class="btn-primary" on:click=jump("projects")>
                                "Check out my work!"
                            </a>
                            <a href="#contact" class="btn-primary bg-secondary/10" on:click=jump("contact")>
                                "Get in touch"
                            </a>
                        </Reveal>
                    </div>

                    <Reveal from=RevealFrom::Scale class="relative group hidden lg:block">
                        <div class="relative w-full max-w-md mx-auto aspect-square">
                            <div class="absolute inset-0 bg-secondary/20 rounded-2xl transform rotate-6 group-hover:rotate-12 transition-transform duration-300"></div>
                            <div class="absolute inset-0 bg-tertiary rounded-2xl transform -rotate-6 group-hover:-rotate-12 transition-transform duration-300"></div>
                            <div class="relative bg-gradient-to-br from-secondary/20 to-primary rounded-2xl overflow-hidden shadow-xl">
                                <img
                                    src=PROFILE_IMAGE
                                    alt=OWNER
                                    class="w-full h-full object-cover object-center transform group-hover:scale-105 transition-transform duration-300"
                                />
                                <div class="absolute inset-0 bg-gradient-to-t from-primary/80 to-transparent opacity-60 group-hover:opacity-40 transition-opacity duration-300"></div>
                            </div>
                            <div class="absolute -top-4 -right-4 w-20 h-20 bg-secondary/20 rounded-full blur-md animate-float"></div>
                            <div class="absolute -bottom-4 -left-4 w-16 h-16 bg-secondary/30 rounded-full blur-md animate-float-reverse"></div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
