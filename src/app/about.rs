use leptos::prelude::*;

use super::reveal::Reveal;
use super::PortfolioState;
use crate::content::CATALOG;
use crate::scroll_spy::Section;

#[component]
pub fn About() -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let profile = &CATALOG.profile;
    let muted = move || state.pick("text-slate-400", "text-gray-600");

    view! {
        <section
            id=Section::About.id()
            class=move || {
                format!("py-24 relative z-10 {}", state.pick("bg-slate-900/50", "bg-white/50"))
            }
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal>
                    <div class="grid md:grid-cols-2 gap-16 items-center">
                        <div class="relative order-2 md:order-1">
                            <div class=move || {
                                format!(
                                    "absolute -inset-4 rounded-3xl opacity-30 blur-2xl bg-gradient-to-r {}",
                                    state.pick("from-amber-500 to-purple-600", "from-blue-400 to-cyan-300"),
                                )
                            }></div>
                            <div class=move || {
                                format!(
                                    "relative p-8 rounded-3xl border backdrop-blur-sm overflow-hidden {}",
                                    state.pick("bg-slate-900/90 border-slate-800", "bg-white/90 border-gray-200"),
                                )
                            }>
                                <div class="absolute top-0 right-0 p-4 opacity-20 text-9xl">
                                    <i class="icon-code" />
                                </div>
                                <h3 class="text-2xl font-bold mb-4">"Professional Objective"</h3>
                                {profile
                                    .objective
                                    .iter()
                                    .map(|p| {
                                        view! {
                                            <p class=move || {
                                                format!("mb-6 leading-relaxed {}", muted())
                                            }>{p.clone()}</p>
                                        }
                                    })
                                    .collect_view()}
                                <div class="mt-8 grid grid-cols-2 gap-4">
                                    {profile
                                        .stats
                                        .iter()
                                        .map(|stat| {
                                            view! {
                                                <div class="text-center p-4 rounded-xl bg-slate-500/5">
                                                    <div class="text-3xl font-bold text-amber-500">
                                                        {stat.value.clone()}
                                                    </div>
                                                    <div class="text-xs uppercase tracking-wider opacity-70 mt-1">
                                                        {stat.label.clone()}
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>

                        <div class="order-1 md:order-2">
                            <h2 class="text-4xl md:text-5xl font-bold mb-6">
                                "About " <span class="text-amber-500">"Me"</span>
                            </h2>
                            <p class=move || format!("text-lg mb-8 {}", muted())>
                                {profile.about.clone()}
                            </p>
                            <div class="space-y-4">
                                {CATALOG
                                    .highlights
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <div class=move || {
                                                format!(
                                                    "flex items-center gap-4 p-4 rounded-xl transition-all hover:translate-x-2 {}",
                                                    state.pick("hover:bg-white/5", "hover:bg-black/5"),
                                                )
                                            }>
                                                <div class=move || {
                                                    format!(
                                                        "p-3 rounded-lg {}",
                                                        state.pick("bg-slate-800", "bg-gray-100"),
                                                    )
                                                }>
                                                    <i class=format!(
                                                        "{} {}",
                                                        item.icon.class(),
                                                        item.accent,
                                                    ) />
                                                </div>
                                                <div>
                                                    <h4 class="font-bold">{item.title.clone()}</h4>
                                                    <p class=move || {
                                                        format!(
                                                            "text-sm {}",
                                                            state.pick("text-slate-400", "text-gray-500"),
                                                        )
                                                    }>{item.description.clone()}</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
