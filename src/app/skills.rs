use leptos::prelude::*;

use super::reveal::Reveal;
use super::PortfolioState;
use crate::content::CATALOG;
use crate::scroll_spy::Section;

#[component]
pub fn Skills() -> impl IntoView {
    let state = expect_context::<PortfolioState>();

    view! {
        <section id=Section::Skills.id() class="py-24 overflow-hidden">
            <div class="text-center mb-16">
                <Reveal>
                    <h2 class="text-4xl font-bold mb-4">
                        "Tech " <span class="text-amber-500">"Arsenal"</span>
                    </h2>
                    <p class=move || {
                        format!("max-w-2xl mx-auto {}", state.pick("text-slate-400", "text-gray-600"))
                    }>"The tools and technologies I use to bring ideas to life."</p>
                </Reveal>
            </div>

            <div class="relative w-full">
                <div class="absolute left-0 top-0 bottom-0 w-32 bg-gradient-to-r from-slate-950 to-transparent z-10 hidden md:block"></div>
                <div class="absolute right-0 top-0 bottom-0 w-32 bg-gradient-to-l from-slate-950 to-transparent z-10 hidden md:block"></div>
                <div class="flex gap-4 animate-scroll whitespace-nowrap py-4">
                    {CATALOG
                        .skill_marquee()
                        .map(|skill| {
                            view! {
                                <div class=move || {
                                    format!(
                                        "inline-flex items-center gap-2 px-6 py-3 rounded-full border text-lg font-medium transition-all hover:scale-105 hover:border-amber-500 cursor-default {}",
                                        state
                                            .pick(
                                                "bg-slate-900/50 border-slate-800 text-slate-300",
                                                "bg-white border-gray-200 text-gray-700 shadow-sm",
                                            ),
                                    )
                                }>{skill}</div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="max-w-7xl mx-auto px-4 mt-16">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {CATALOG
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(idx, group)| {
                            view! {
                                <Reveal delay={idx as u32 * 100}>
                                    <div class=move || {
                                        format!(
                                            "p-6 rounded-2xl h-full {}",
                                            state
                                                .pick(
                                                    "bg-slate-900 border border-slate-800",
                                                    "bg-white border border-gray-100 shadow-lg",
                                                ),
                                        )
                                    }>
                                        <h3 class="text-amber-500 font-bold mb-4">
                                            {group.category.clone()}
                                        </h3>
                                        <div class="flex flex-wrap gap-2">
                                            {group
                                                .items
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <span class=move || {
                                                            format!(
                                                                "text-xs px-2 py-1 rounded-md {}",
                                                                state.pick("bg-slate-800", "bg-gray-100"),
                                                            )
                                                        }>{skill.clone()}</span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
