//! Root application component with routing and document metadata.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::OWNER;
use crate::pages::portfolio::{NotFoundPage, PortfolioPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-primary text-textPrimary font-secondary">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Maps the root path to the portfolio page; anything else renders a
/// not-found view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=format!("{OWNER} | Portfolio")/>
        <Meta name="description" content=format!("{OWNER}, MERN stack developer: projects, skills and contact.")/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}
