mod about;
mod background;
mod contact;
mod experience;
mod hero;
mod nav;
mod projects;
mod reveal;
mod skills;

use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;

use crate::config::SiteConfig;
use crate::page::{MenuState, ProjectModal, ThemePreference};
use crate::scroll_spy::{ScrollSpy, Section, SectionBounds};

use about::About;
use background::Background;
use contact::Contact;
use experience::Experience;
use hero::Hero;
use nav::NavBar;
use projects::{ProjectDetail, Projects};
use reveal::RevealTracker;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                // without WASM nothing would ever reveal the animated blocks
                <noscript>
                    <style>".reveal { opacity: 1 !important; transform: none !important; }"</style>
                </noscript>
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
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
        <Title formatter=|title| format!("Muhammad Ikmal - {title}") />
        <Meta
            name="description"
            content="Software Engineer building fintech microservices and cross-platform apps."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Page-wide state shared with every section through context.
#[derive(Clone, Copy)]
pub struct PortfolioState {
    pub nav: RwSignal<ScrollSpy>,
    pub theme: RwSignal<ThemePreference>,
    pub menu: RwSignal<MenuState>,
    pub modal: RwSignal<ProjectModal>,
}

impl PortfolioState {
    fn new(config: &SiteConfig) -> Self {
        let spy = config.scroll_spy().unwrap_or_else(|err| {
            log::error!("invalid navigation config: {err}");
            ScrollSpy::default()
        });
        Self {
            nav: RwSignal::new(spy),
            theme: RwSignal::new(ThemePreference::default()),
            menu: RwSignal::new(MenuState::default()),
            modal: RwSignal::new(ProjectModal::default()),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.with(|t| t.is_dark())
    }

    /// Theme-dependent class list, tracked.
    pub fn pick(&self, dark: &'static str, light: &'static str) -> &'static str {
        self.theme.with(|t| t.pick(dark, light))
    }
}

fn measure_section(section: Section) -> Option<SectionBounds> {
    let element = document()
        .get_element_by_id(section.id())?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    Some(SectionBounds::new(
        element.offset_top() as f64,
        element.offset_height() as f64,
    ))
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let config = SiteConfig::default();
    let state = PortfolioState::new(&config);
    provide_context(state);
    provide_context(RevealTracker::new());
    provide_context(config);

    // scroll spy, layout is read fresh on every event
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or_default();
        state
            .nav
            .maybe_update(|spy| spy.on_scroll(scroll_y, measure_section));
    });

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        state.modal.maybe_update(|modal| modal.handle_key(&ev.key()));
    });

    // mirror the theme onto the document root, including the initial value
    Effect::new(move |_| {
        let dark = state.is_dark();
        if let Some(root) = document().document_element() {
            if let Err(err) = root
                .class_list()
                .toggle_with_force(ThemePreference::ROOT_CLASS, dark)
            {
                log::warn!("failed to set theme class: {err:?}");
            }
        }
    });

    view! {
        <Title text="Portfolio" />
        <div class=move || {
            format!(
                "relative min-h-screen overflow-hidden transition-colors duration-500 {}",
                state.pick("bg-slate-950 text-slate-100", "bg-gray-50 text-gray-900"),
            )
        }>
            <Background />
            <NavBar />
            <Hero />
            <About />
            <Skills />
            <Projects />
            <ProjectDetail />
            <Experience />
            <Contact />
            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let name = &crate::content::CATALOG.profile.full_name;
    view! {
        <footer class=move || {
            format!(
                "py-12 border-t text-center {}",
                state
                    .pick(
                        "border-slate-800 bg-slate-950 text-slate-500",
                        "border-gray-200 bg-white text-gray-500",
                    ),
            )
        }>
            <p class="text-sm">"Let's Connect!"</p>
            <p class="text-xs mt-2 opacity-70">
                {format!("© {} {name}. Built with Rust & Leptos.", env!("BUILD_YEAR"))}
            </p>
        </footer>
    }
}
