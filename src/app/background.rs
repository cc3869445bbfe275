use std::convert::Infallible;

use leptos::prelude::*;
use leptos_use::{use_mouse_with_options, UseMouseCoordType, UseMouseOptions, UseMouseReturn};

use super::PortfolioState;
use crate::page::PointerGlow;

/// Fixed backdrop: a glow that follows the pointer plus three drifting blobs.
#[component]
pub fn Background() -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let UseMouseReturn { x, y, .. } = use_mouse_with_options(
        UseMouseOptions::default().coord_type(UseMouseCoordType::<Infallible>::Client),
    );
    let glow = Memo::new(move |_| {
        let mut glow = PointerGlow::default();
        glow.track(x.get(), y.get());
        glow
    });

    let glow_style = move || {
        let (left, top) = glow.get().origin();
        let gradient = state.pick(
            "radial-gradient(circle, rgba(251, 191, 36, 0.3) 0%, rgba(0,0,0,0) 70%)",
            "radial-gradient(circle, rgba(59, 130, 246, 0.2) 0%, rgba(255,255,255,0) 70%)",
        );
        format!("background: {gradient}; left: {left}px; top: {top}px;")
    };

    view! {
        <div class="fixed inset-0 z-0 pointer-events-none">
            <div
                class="absolute w-[500px] h-[500px] rounded-full blur-[100px] opacity-20 transition-all duration-200"
                style=glow_style
            />
            <div class=move || {
                format!(
                    "absolute top-[-10%] right-[-10%] w-[600px] h-[600px] rounded-full blur-[120px] opacity-20 animate-blob {}",
                    state.pick("bg-indigo-600", "bg-blue-300"),
                )
            }></div>
            <div
                class=move || {
                    format!(
                        "absolute bottom-[-10%] left-[-10%] w-[500px] h-[500px] rounded-full blur-[100px] opacity-20 animate-blob {}",
                        state.pick("bg-amber-500", "bg-yellow-200"),
                    )
                }
                style="animation-delay: 4s"
            ></div>
            <div
                class=move || {
                    format!(
                        "absolute top-[40%] left-[30%] w-[400px] h-[400px] rounded-full blur-[100px] opacity-10 animate-blob {}",
                        state.pick("bg-purple-500", "bg-pink-200"),
                    )
                }
                style="animation-delay: 8s"
            ></div>
        </div>
    }
}
