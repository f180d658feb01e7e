mod cards;
mod contact_modal;
mod galaxy;
mod homepage;
mod icons;
mod navbar;
mod spotlight;
mod viewport;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{person_json_ld, SITE_DESCRIPTION, SITE_TITLE};
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Open+Sans:wght@300;400;600;700&family=Poppins:wght@500;700&display=swap"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/tayfly-portfolio.css" />
                <script type="application/ld+json" inner_html=person_json_ld()></script>
                <MetaTags />
            </head>
            <body class="font-open-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
