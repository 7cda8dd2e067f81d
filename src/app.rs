mod cards;
mod homepage;
mod navbar;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::catalog::catalog;
use homepage::HomePage;

const FAVICON: &str = "/favicon.svg";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let owner_name = catalog()
        .map(|c| c.profile.full_name())
        .unwrap_or_default();

    view! {
        <Title text=owner_name />
        <Meta name="description" content="Engineering design consultation and project portfolio" />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
