use leptos::prelude::*;

use super::reveal::Reveal;
use super::PortfolioState;
use crate::content::CATALOG;
use crate::scroll_spy::Section;

#[component]
pub fn Hero() -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let profile = &CATALOG.profile;

    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center justify-center pt-16 relative z-10"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col items-center text-center">
                <Reveal>
                    <div class=move || {
                        format!(
                            "inline-flex items-center gap-2 px-3 py-1 rounded-full text-sm font-medium mb-6 {}",
                            state
                                .pick(
                                    "bg-amber-500/10 text-amber-400 border border-amber-500/20",
                                    "bg-blue-50 text-blue-600 border border-blue-100",
                                ),
                        )
                    }>
                        <span class="relative flex h-2 w-2">
                            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-amber-400 opacity-75"></span>
                            <span class="relative inline-flex rounded-full h-2 w-2 bg-amber-500"></span>
                        </span>
                        "Open to Opportunities"
                    </div>
                </Reveal>

                <Reveal delay=100>
                    <h1 class="text-5xl md:text-7xl lg:text-8xl font-bold mb-8 tracking-tight">
                        {profile.headline.clone()}
                        <br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-amber-400 via-orange-500 to-red-500 animate-gradient-x">
                            {profile.focus.clone()}
                        </span>
                    </h1>
                </Reveal>

                <Reveal delay=200>
                    <p class=move || {
                        format!(
                            "text-lg md:text-2xl mb-10 max-w-2xl mx-auto leading-relaxed {}",
                            state.pick("text-slate-400", "text-gray-600"),
                        )
                    }>
                        "I'm "
                        <span class="text-amber-500 font-semibold">{profile.full_name.clone()}</span>
                        ", "
                        {profile.summary.clone()}
                    </p>
                </Reveal>

                <Reveal delay=300>
                    <div class="flex flex-col sm:flex-row gap-4 items-center">
                        <a
                            href=Section::Projects.href()
                            class="group relative px-8 py-4 rounded-full bg-amber-500 text-slate-900 font-bold overflow-hidden transition-all hover:scale-105"
                        >
                            <div class="absolute inset-0 w-full h-full bg-gradient-to-r from-transparent via-white/30 to-transparent -translate-x-full group-hover:animate-shimmer"></div>
                            <span class="relative flex items-center gap-2">
                                "View Projects"
                                <i class="icon-chevron-down group-hover:translate-y-1 transition-transform" />
                            </span>
                        </a>
                        <a
                            href=Section::Contact.href()
                            class=move || {
                                format!(
                                    "px-8 py-4 rounded-full border font-medium transition-all hover:scale-105 {}",
                                    state
                                        .pick(
                                            "border-slate-700 hover:bg-slate-800 text-slate-300",
                                            "border-gray-300 hover:bg-white text-gray-700 hover:shadow-lg",
                                        ),
                                )
                            }
                        >
                            "Contact Me"
                        </a>
                    </div>
                </Reveal>

                <Reveal delay=400>
                    <div class=move || {
                        format!("mt-16 flex gap-8 {}", state.pick("text-slate-500", "text-gray-400"))
                    }>
                        {profile
                            .links
                            .iter()
                            .map(|link| {
                                let (target, rel) = if link.is_external() {
                                    (Some("_blank"), Some("noopener noreferrer"))
                                } else {
                                    (None, None)
                                };
                                view! {
                                    <a
                                        href=link.href.clone()
                                        target=target
                                        rel=rel
                                        aria-label=link.label.clone()
                                        class="hover:text-amber-500 transition-colors transform hover:scale-110 text-3xl"
                                    >
                                        <i class=link.icon.class() />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
