use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Html, Link, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::{About, Contact, Footer, Header, Hero, Projects, Skills};
use crate::content::{asset_path, BASE_PATH};
use crate::i18n::provide_i18n;
use crate::preferences::Preferences;

pub use crate::preferences::ColorMode;

/// Current colour mode, shared with every component that reads or flips it.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: ReadSignal<ColorMode>,
    pub set_mode: WriteSignal<ColorMode>,
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Preferences for the first render.
///
/// The server reads the request's cookies and `Accept-Language`; the client
/// adopts whatever the server rendered onto `<html>`.
fn initial_preferences() -> Preferences {
    #[cfg(feature = "ssr")]
    {
        use axum::http::{header, request::Parts};

        use_context::<Parts>()
            .map(|parts| {
                let value = |name: header::HeaderName| {
                    parts.headers.get(name).and_then(|v| v.to_str().ok())
                };
                Preferences::from_headers(value(header::COOKIE), value(header::ACCEPT_LANGUAGE))
            })
            .unwrap_or_default()
    }

    #[cfg(all(feature = "hydrate", not(feature = "ssr")))]
    {
        crate::browser::rendered_preferences()
    }

    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        Preferences::default()
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let preferences = initial_preferences();
    let i18n = provide_i18n(preferences.language);
    let (mode, set_mode) = signal(preferences.theme);
    provide_context(ThemeContext { mode, set_mode });

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Link rel="icon" type_="image/svg+xml" href=asset_path(BASE_PATH, "favicon.svg")/>

        <Html
            {..}
            lang=move || i18n.language().code()
            data-theme=move || mode.get().to_string()
        />
        <Title text=move || format!("{} | {}", i18n.t("hero.name"), i18n.t("hero.title"))/>
        <Meta name="description" content=move || i18n.t("hero.subtitle")/>

        <Router>
            <Header/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <About/>
        <Skills/>
        <Projects/>
        <Contact/>
    }
}
