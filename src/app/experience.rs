use leptos::prelude::*;

use super::reveal::Reveal;
use super::PortfolioState;
use crate::content::CATALOG;
use crate::scroll_spy::Section;

#[component]
pub fn Experience() -> impl IntoView {
    let state = expect_context::<PortfolioState>();

    view! {
        <section id=Section::Experience.id() class="py-24">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal>
                    <h2 class="text-4xl font-bold mb-16 text-center">
                        "Career " <span class="text-amber-500">"Timeline"</span>
                    </h2>
                </Reveal>

                <div class="relative space-y-12">
                    <div class=move || {
                        format!(
                            "absolute left-[28px] md:left-1/2 top-0 bottom-0 w-0.5 -ml-px {}",
                            state.pick("bg-slate-800", "bg-gray-200"),
                        )
                    }></div>

                    {CATALOG
                        .experience
                        .iter()
                        .enumerate()
                        .map(|(index, job)| {
                            // timeline cards alternate sides on wide screens
                            let even = index % 2 == 0;
                            view! {
                                <Reveal delay={index as u32 * 100}>
                                    <div class=format!(
                                        "relative flex items-center gap-8 {}",
                                        if even { "md:flex-row-reverse" } else { "" },
                                    )>
                                        <div class="hidden md:block w-1/2" />
                                        <div class=move || {
                                            format!(
                                                "absolute left-[16px] md:left-1/2 -translate-x-1/2 w-6 h-6 rounded-full border-4 z-10 border-amber-500 {}",
                                                state.pick("bg-slate-950", "bg-white"),
                                            )
                                        }></div>
                                        <div class=format!(
                                            "flex-1 ml-16 md:ml-0 {}",
                                            if even { "md:text-left" } else { "md:text-right" },
                                        )>
                                            <div class=move || {
                                                format!(
                                                    "p-6 rounded-2xl border transition-all hover:-translate-y-1 hover:shadow-xl {}",
                                                    state
                                                        .pick(
                                                            "bg-slate-900 border-slate-800",
                                                            "bg-white border-gray-100 shadow-lg",
                                                        ),
                                                )
                                            }>
                                                <span class="text-amber-500 font-bold text-sm tracking-wider uppercase mb-2 block">
                                                    {job.period.clone()}
                                                </span>
                                                <h3 class="text-xl font-bold mb-1">{job.role.clone()}</h3>
                                                <h4 class=move || {
                                                    format!(
                                                        "text-base mb-4 font-medium {}",
                                                        state.pick("text-slate-300", "text-gray-600"),
                                                    )
                                                }>{job.company.clone()}</h4>
                                                <p class=move || {
                                                    format!(
                                                        "text-sm leading-relaxed {}",
                                                        state.pick("text-slate-400", "text-gray-500"),
                                                    )
                                                }>{job.description.clone()}</p>
                                            </div>
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
