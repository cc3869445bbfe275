use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::reveal::Reveal;
use super::PortfolioState;
use crate::config::SiteConfig;
use crate::contact::{
    dispatch, ContactEffect, ContactEvent, ContactField, HttpRelay, SubmissionStatus,
    SubmissionTicket,
};
use crate::content::CATALOG;
use crate::scroll_spy::Section;

#[component]
pub fn Contact() -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let config = expect_context::<SiteConfig>();
    let machine = RwSignal::new(config.contact_machine());
    let relay = StoredValue::new(HttpRelay::new(config.relay_endpoint.clone()));

    let UseTimeoutFnReturn {
        start: start_reset,
        stop: stop_reset,
        ..
    } = use_timeout_fn(
        move |ticket: SubmissionTicket| {
            machine.try_update(|m| m.step(ContactEvent::ResetElapsed(ticket)));
        },
        config.success_reset_ms(),
    );

    // Delivery outcomes only ever schedule or cancel the reset timer. The page may
    // be gone by the time a response lands, in which case the update is dropped.
    let (schedule, cancel) = (start_reset.clone(), stop_reset.clone());
    let settle = move |event: ContactEvent| {
        let Some(effects) = machine.try_update(|m| m.step(event)) else {
            log::debug!("contact form disposed, dropping event");
            return;
        };
        for effect in effects {
            match effect {
                ContactEffect::ScheduleReset { ticket, .. } => schedule(ticket),
                ContactEffect::CancelReset => cancel(),
                ContactEffect::Dispatch { ticket, .. } => {
                    log::warn!("unexpected dispatch for {ticket:?} while settling");
                }
            }
        }
    };

    let submit = move || {
        let effects = machine.try_update(|m| m.step(ContactEvent::Submit)).unwrap_or_default();
        for effect in effects {
            match effect {
                ContactEffect::Dispatch { ticket, form } => {
                    log::debug!("dispatching contact submission {ticket:?}");
                    let relay = relay.get_value();
                    let settle = settle.clone();
                    spawn_local(async move {
                        settle(dispatch(&relay, &form).await);
                    });
                }
                ContactEffect::CancelReset => stop_reset(),
                ContactEffect::ScheduleReset { ticket, .. } => start_reset(ticket),
            }
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    let status = move || machine.with(|m| m.status());
    let field_class = move |rounded: &'static str| {
        format!(
            "w-full px-6 py-4 {rounded} outline-none border focus:ring-2 focus:ring-amber-500 transition-all {}",
            state
                .pick(
                    "bg-slate-900 border-slate-800 text-white placeholder-slate-500",
                    "bg-gray-50 border-gray-200 placeholder-gray-400",
                ),
        )
    };

    view! {
        <section
            id=Section::Contact.id()
            class=move || format!("py-24 relative z-10 {}", state.pick("bg-slate-900/50", "bg-gray-50"))
        >
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal>
                    <div class=move || {
                        format!(
                            "rounded-[3rem] p-8 md:p-16 text-center border overflow-hidden relative {}",
                            state.pick("bg-slate-950 border-slate-800", "bg-white border-white shadow-2xl"),
                        )
                    }>
                        <div class="absolute top-0 left-0 w-64 h-64 bg-amber-500/10 rounded-full blur-3xl -translate-x-1/2 -translate-y-1/2"></div>
                        <div class="absolute bottom-0 right-0 w-64 h-64 bg-purple-500/10 rounded-full blur-3xl translate-x-1/2 translate-y-1/2"></div>

                        <div class="relative z-10">
                            <h2 class="text-4xl md:text-5xl font-bold mb-6">
                                "Let's Build Something "
                                <br />
                                <span class="text-amber-500">"Amazing"</span>
                            </h2>
                            <p class=move || {
                                format!(
                                    "text-lg mb-10 max-w-xl mx-auto {}",
                                    state.pick("text-slate-400", "text-gray-600"),
                                )
                            }>
                                "Whether you have a question, a project proposition, or just want to say hi, I'll try my best to get back to you!"
                            </p>

                            <div class="flex flex-wrap justify-center gap-4 mb-10">
                                {CATALOG
                                    .profile
                                    .links
                                    .iter()
                                    .map(|link| {
                                        let external = link.is_external();
                                        view! {
                                            <a
                                                href=link.href.clone()
                                                target=external.then_some("_blank")
                                                rel=external.then_some("noopener noreferrer")
                                                class=move || {
                                                    format!(
                                                        "flex items-center gap-2 px-5 py-3 rounded-full font-medium transition-all transform hover:-translate-y-1 {}",
                                                        state
                                                            .pick(
                                                                "bg-slate-800 hover:bg-slate-700 text-white",
                                                                "bg-gray-100 hover:bg-gray-200 text-gray-900",
                                                            ),
                                                    )
                                                }
                                            >
                                                <i class=link.icon.class() />
                                                <span>{link.label.clone()}</span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <form class="max-w-md mx-auto space-y-4 text-left" on:submit=on_submit>
                                <div>
                                    <input
                                        type="text"
                                        name="name"
                                        placeholder="Your Name"
                                        prop:value=move || machine.with(|m| m.form().name.clone())
                                        on:input=move |ev| {
                                            machine.update(|m| m.edit(ContactField::Name, event_target_value(&ev)))
                                        }
                                        class=move || field_class("rounded-full")
                                    />
                                </div>
                                <div>
                                    <input
                                        type="email"
                                        name="email"
                                        placeholder="Enter your email"
                                        prop:value=move || machine.with(|m| m.form().email.clone())
                                        on:input=move |ev| {
                                            machine.update(|m| m.edit(ContactField::Email, event_target_value(&ev)))
                                        }
                                        class=move || field_class("rounded-full")
                                    />
                                </div>
                                <div>
                                    <textarea
                                        rows="4"
                                        name="message"
                                        placeholder="Your message"
                                        prop:value=move || machine.with(|m| m.form().message.clone())
                                        on:input=move |ev| {
                                            machine
                                                .update(|m| {
                                                    m.edit(ContactField::Message, event_target_value(&ev))
                                                })
                                        }
                                        class=move || field_class("rounded-3xl")
                                    ></textarea>
                                </div>
                                <button
                                    type="submit"
                                    disabled=move || status().is_submit_disabled()
                                    class=move || {
                                        format!(
                                            "w-full py-4 rounded-full bg-gradient-to-r from-amber-500 to-orange-600 text-white font-bold transition-all transform hover:scale-[1.02] flex items-center justify-center gap-2 {}",
                                            if status().is_submit_disabled() {
                                                "opacity-70 cursor-not-allowed"
                                            } else {
                                                ""
                                            },
                                        )
                                    }
                                >
                                    <Show when=move || status() == SubmissionStatus::Sending>
                                        <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                                    </Show>
                                    {move || status().button_label()}
                                </button>
                                <StatusMessage status=Signal::derive(status) />
                            </form>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn StatusMessage(status: Signal<SubmissionStatus>) -> impl IntoView {
    move || {
        let status = status.get();
        status.message().map(|text| {
            let class = if status == SubmissionStatus::Success {
                "text-emerald-500 text-center text-sm mt-4 animate-in fade-in slide-in-from-top-2"
            } else {
                "text-red-500 text-center text-sm mt-4"
            };
            view! { <p class=class>{text}</p> }
        })
    }
}
