use leptos::prelude::*;

use super::PortfolioState;
use crate::content::CATALOG;
use crate::scroll_spy::Section;

#[component]
pub fn NavBar() -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let profile = &CATALOG.profile;
    let initial = profile.first_name.chars().next().unwrap_or('M').to_string();

    view! {
        <nav class=move || {
            format!(
                "fixed w-full z-50 transition-all duration-300 backdrop-blur-md border-b {}",
                state.pick("bg-slate-950/80 border-slate-800", "bg-white/80 border-gray-200"),
            )
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16 items-center">
                    <div
                        class="flex-shrink-0 flex items-center gap-2 cursor-pointer"
                        on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
                    >
                        <div class="w-8 h-8 rounded-lg bg-gradient-to-br from-amber-400 to-orange-500 flex items-center justify-center">
                            <span class="font-bold text-white text-xl">{initial}</span>
                        </div>
                        <span class="text-xl font-bold tracking-tight">
                            {profile.first_name.clone()}
                            <span class="text-amber-500">" " {profile.last_name.clone()}</span>
                        </span>
                    </div>

                    <div class="hidden md:flex items-center space-x-1">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavLink section mobile=false /> })
                            .collect_view()}
                        <div class="w-px h-6 bg-slate-700/50 mx-4"></div>
                        <ThemeToggle />
                    </div>

                    <div class="md:hidden flex items-center gap-4">
                        <ThemeToggle />
                        <button
                            aria-label="Toggle menu"
                            on:click=move |_| state.menu.update(|m| m.toggle())
                            class=move || {
                                format!("p-2 rounded-md {}", state.pick("text-slate-300", "text-gray-600"))
                            }
                        >
                            <MenuIcon />
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || state.menu.with(|m| m.is_open())>
                <div class=move || {
                    format!(
                        "md:hidden absolute w-full px-4 pt-2 pb-6 border-b shadow-xl {}",
                        state.pick("bg-slate-900 border-slate-800", "bg-white border-gray-200"),
                    )
                }>
                    <div class="flex flex-col space-y-2 mt-4">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavLink section mobile=true /> })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLink(section: Section, mobile: bool) -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let class = move || {
        let active = state.nav.with(|spy| spy.active() == section);
        let base = if mobile {
            "block px-4 py-3 rounded-lg text-base font-medium"
        } else {
            "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300"
        };
        let tone = match (active, mobile) {
            (true, _) => "bg-amber-500/10 text-amber-500",
            (false, false) => state.pick(
                "text-slate-400 hover:text-slate-100 hover:bg-white/5",
                "text-gray-600 hover:text-gray-900 hover:bg-black/5",
            ),
            (false, true) => state.pick(
                "text-slate-300 hover:bg-slate-800",
                "text-gray-600 hover:bg-gray-50",
            ),
        };
        format!("{base} {tone}")
    };
    view! {
        <a
            href=section.href()
            class=class
            on:click=move |_| {
                if mobile {
                    state.menu.update(|m| m.close());
                }
            }
        >
            {section.label()}
        </a>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    view! {
        <button
            aria-label="Toggle theme"
            on:click=move |_| {
                let dark = state.theme.try_update(|t| t.toggle());
                log::debug!("dark mode: {dark:?}");
            }
            class=move || {
                format!(
                    "p-2 rounded-full transition-all duration-300 {}",
                    state
                        .pick(
                            "bg-slate-800 text-amber-400 hover:bg-slate-700",
                            "bg-gray-100 text-slate-700 hover:bg-gray-200",
                        ),
                )
            }
        >
            <i class=move || if state.is_dark() { "icon-sun" } else { "icon-moon" } />
        </button>
    }
}

#[component]
fn MenuIcon() -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let open = move || state.menu.with(|m| m.is_open());
    view! {
        <div class="space-y-1.5">
            <span class=move || {
                format!(
                    "block w-6 h-0.5 bg-current transform transition-transform {}",
                    if open() { "rotate-45 translate-y-2" } else { "" },
                )
            }></span>
            <span class=move || {
                format!(
                    "block w-6 h-0.5 bg-current transition-opacity {}",
                    if open() { "opacity-0" } else { "" },
                )
            }></span>
            <span class=move || {
                format!(
                    "block w-6 h-0.5 bg-current transform transition-transform {}",
                    if open() { "-rotate-45 -translate-y-2" } else { "" },
                )
            }></span>
        </div>
    }
}
