//! The single portfolio page: every section stacked in scroll order.

use leptos::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, navbar::Navbar, projects::Projects,
    skills::Skills,
};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <Navbar/>
            <main class="flex-grow">
                <div class="space-y-16 sm:space-y-20 lg:space-y-24">
                    <Hero/>
                    <About/>
                    <Skills/>
                    <Projects/>
                    <Contact/>
                </div>
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-6 bg-primary">
            <h1 class="heading">"Page not found."</h1>
            <a href="/" class="btn-primary">"Back home"</a>
        </div>
    }
}
