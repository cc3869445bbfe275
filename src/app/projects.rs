use leptos::prelude::*;

use super::reveal::Reveal;
use super::PortfolioState;
use crate::content::{ProjectRecord, CATALOG};
use crate::page::ModalClick;
use crate::scroll_spy::Section;

const CARD_TAG_LIMIT: usize = 3;

#[component]
pub fn Projects() -> impl IntoView {
    let state = expect_context::<PortfolioState>();

    view! {
        <section
            id=Section::Projects.id()
            class=move || format!("py-24 relative z-10 {}", state.pick("bg-slate-900/30", "bg-gray-50"))
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-end mb-12 gap-4">
                    <Reveal>
                        <div>
                            <h2 class="text-4xl md:text-5xl font-bold mb-4">
                                "Featured " <span class="text-amber-500">"Work"</span>
                            </h2>
                            <p class=move || state.pick("text-slate-400", "text-gray-600")>
                                "Highlights from my portfolio. Click on a project to view details."
                            </p>
                        </div>
                    </Reveal>
                </div>

                <div class="grid md:grid-cols-3 gap-6">
                    {CATALOG
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal delay={i as u32 * 100}>
                                    <ProjectCard project featured={i == 0} />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectRecord, featured: bool) -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let (tags, more) = project.tag_preview(CARD_TAG_LIMIT);
    let chip = move || {
        format!(
            "text-xs px-3 py-1 rounded-full backdrop-blur-md {}",
            state.pick("bg-white/10", "bg-black/5"),
        )
    };

    view! {
        <div
            on:click=move |_| state.modal.update(|m| m.select(project))
            class=move || {
                format!(
                    "group relative h-full rounded-3xl overflow-hidden p-8 flex flex-col justify-between transition-all duration-300 hover:shadow-2xl hover:scale-[1.02] cursor-pointer {} {}",
                    if featured { "md:col-span-2" } else { "md:col-span-1" },
                    state.pick("bg-slate-900 border border-slate-800", "bg-white shadow-lg"),
                )
            }
        >
            <div class=format!(
                "absolute inset-0 bg-gradient-to-br opacity-10 group-hover:opacity-20 transition-opacity duration-500 {}",
                project.color,
            )></div>
            <div class="absolute -right-10 -bottom-10 opacity-10 transform group-hover:scale-110 transition-transform duration-700 rotate-12 text-9xl">
                <i class=project.icon.class() />
            </div>

            <div class="relative z-10">
                <div class=format!(
                    "w-12 h-12 rounded-xl flex items-center justify-center mb-6 bg-gradient-to-br text-white shadow-lg {}",
                    project.color,
                )>
                    <i class=project.icon.class() />
                </div>
                <h3 class="text-2xl font-bold mb-2 group-hover:text-amber-500 transition-colors">
                    {project.title.clone()}
                </h3>
                <p class=move || format!("line-clamp-3 {}", state.pick("text-slate-400", "text-gray-600"))>
                    {project.description.clone()}
                </p>
            </div>

            <div class="relative z-10 flex flex-wrap gap-2 mt-6">
                {tags
                    .iter()
                    .map(|tag| view! { <span class=chip>{tag.clone()}</span> })
                    .collect_view()}
                {(more > 0).then(|| view! { <span class=chip>{format!("+{more}")}</span> })}
            </div>

            <div class="absolute top-4 right-4 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                <div class=move || {
                    format!(
                        "p-2 rounded-full {}",
                        state.pick("bg-white/10 text-white", "bg-black/5 text-black"),
                    )
                }>
                    <i class="icon-external-link" />
                </div>
            </div>
        </div>
    }
}

/// Detail modal for the selected project.
#[component]
pub fn ProjectDetail() -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let click = move |target: ModalClick| state.modal.update(|m| m.handle_click(target));

    move || {
        state.modal.with(|m| m.selected()).map(|project| {
            view! {
                <div
                    class="fixed inset-0 z-[60] flex items-center justify-center p-4 bg-black/60 backdrop-blur-sm transition-all duration-300"
                    on:click=move |_| click(ModalClick::Backdrop)
                >
                    <div
                        class=move || {
                            format!(
                                "relative w-full max-w-2xl max-h-[90vh] overflow-y-auto rounded-3xl shadow-2xl transform transition-all scale-100 animate-in fade-in zoom-in-95 duration-200 {}",
                                state.pick("bg-slate-900 border border-slate-700", "bg-white"),
                            )
                        }
                        on:click=move |ev| {
                            ev.stop_propagation();
                            click(ModalClick::Surface);
                        }
                    >
                        <button
                            aria-label="Close"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                click(ModalClick::CloseButton);
                            }
                            class=move || {
                                format!(
                                    "absolute top-4 right-4 p-2 rounded-full transition-colors z-20 {}",
                                    state
                                        .pick(
                                            "hover:bg-slate-800 text-slate-400 hover:text-white",
                                            "hover:bg-gray-100 text-gray-500 hover:text-gray-900",
                                        ),
                                )
                            }
                        >
                            <i class="icon-x" />
                        </button>
                        <ProjectDetailBody project />
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn ProjectDetailBody(project: &'static ProjectRecord) -> impl IntoView {
    let state = expect_context::<PortfolioState>();

    view! {
        <div class="p-8 pt-12 md:pt-8">
            <div class="flex items-center gap-4 mb-6">
                <div class=format!(
                    "w-14 h-14 rounded-2xl flex items-center justify-center bg-gradient-to-br text-white shadow-lg {}",
                    project.color,
                )>
                    <i class=project.icon.class() />
                </div>
                <h2 class="text-2xl md:text-3xl font-bold pr-8">{project.title.clone()}</h2>
            </div>

            <div class="flex flex-wrap gap-2 mb-6">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class=move || {
                                format!(
                                    "text-sm px-3 py-1 rounded-full font-medium {}",
                                    state
                                        .pick(
                                            "bg-amber-500/10 text-amber-500 border border-amber-500/20",
                                            "bg-blue-50 text-blue-600 border border-blue-100",
                                        ),
                                )
                            }>{tag.clone()}</span>
                        }
                    })
                    .collect_view()}
            </div>

            <div class=move || {
                format!("prose max-w-none mb-8 {}", state.pick("text-slate-300", "text-gray-600"))
            }>
                <p class="text-lg leading-relaxed">{project.description.clone()}</p>
            </div>

            <div class="flex gap-4 pt-6 border-t border-slate-200 dark:border-slate-800">
                <ProjectLink
                    href=project.code_link()
                    label="View Code"
                    icon="icon-github"
                    tone=code_link_tone(state)
                />
                <ProjectLink
                    href=project.demo_link()
                    label="Live Demo"
                    icon="icon-external-link"
                    tone="bg-amber-500 text-white shadow-lg shadow-amber-500/25"
                />
            </div>
        </div>
    }
}

fn code_link_tone(state: PortfolioState) -> Signal<&'static str> {
    Signal::derive(move || state.pick("bg-slate-800 text-white", "bg-gray-100 text-gray-900"))
}

/// Action button that degrades to a disabled control when the project has no link.
#[component]
fn ProjectLink(
    href: Option<&'static str>,
    label: &'static str,
    icon: &'static str,
    #[prop(into)] tone: Signal<&'static str>,
) -> impl IntoView {
    let base = "flex-1 py-3 rounded-xl font-bold flex items-center justify-center gap-2 transition-all";
    match href {
        Some(href) => view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class=move || format!("{base} {} hover:-translate-y-0.5", tone.get())
            >
                <i class=icon />
                {label}
            </a>
        }
        .into_any(),
        None => view! {
            <button disabled class=move || format!("{base} {} opacity-50 cursor-not-allowed", tone.get())>
                <i class=icon />
                {label}
            </button>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn with_state<T>(f: impl FnOnce(PortfolioState) -> T) -> T {
        let owner = Owner::new();
        owner.with(|| {
            let state = PortfolioState::new(&SiteConfig::default());
            provide_context(state);
            f(state)
        })
    }

    #[test]
    fn test_code_link_tone_follows_theme() {
        with_state(|state| {
            let tone = code_link_tone(state);
            assert_eq!(tone.get_untracked(), "bg-slate-800 text-white");
            state.theme.update(|t| {
                t.toggle();
            });
            assert_eq!(tone.get_untracked(), "bg-gray-100 text-gray-900");
        });
    }

    #[test]
    fn test_detail_shows_selected_project_without_media() {
        let project = &CATALOG.projects[1];
        let html = with_state(|state| {
            state.modal.update(|m| m.select(project));
            view! { <ProjectDetail /> }.to_html()
        });
        assert!(html.contains(&project.title));
        assert!(html.contains("aria-label=\"Close\""));
        assert!(html.contains("View Code"));
        assert!(!html.contains("<img"));
    }
}
