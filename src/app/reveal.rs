use leptos::{html, prelude::*};
use leptos_use::{
    js, use_intersection_observer_with_options, use_supported, UseIntersectionObserverOptions,
};

use crate::config::SiteConfig;
use crate::reveal::{ObserverSupport, RevealArena, Watch};

/// Shared arena backing every [`Reveal`] on the page.
#[derive(Clone, Copy)]
pub struct RevealTracker(RwSignal<RevealArena>);

impl RevealTracker {
    pub fn new() -> Self {
        Self(RwSignal::new(RevealArena::new()))
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(#[prop(optional)] delay: u32, children: Children) -> impl IntoView {
    let RevealTracker(arena) = expect_context::<RevealTracker>();
    let threshold = use_context::<SiteConfig>()
        .map(|c| c.reveal_threshold)
        .unwrap_or(crate::reveal::DEFAULT_REVEAL_THRESHOLD);
    let target = NodeRef::<html::Div>::new();
    let key = arena.write().register(ObserverSupport::Available);

    // always false while rendering on the server, where effects never run
    let is_supported = use_supported(|| js!("IntersectionObserver" in &window()));

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            for entry in entries {
                let watch = arena
                    .try_update(|a| a.observe(key, entry.is_intersecting()))
                    .unwrap_or(Watch::Disconnect);
                if watch == Watch::Disconnect {
                    observer.unobserve(&entry.target());
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    Effect::new(move |_| {
        if !is_supported.get() {
            arena.update(|a| a.degrade(key));
        }
    });

    on_cleanup(move || {
        arena.try_update(|a| a.release(key));
    });

    let visible = Memo::new(move |_| arena.with(|a| a.is_visible(key)));

    view! {
        <div
            node_ref=target
            class=move || {
                if visible.get() {
                    "reveal transition-all duration-1000 transform opacity-100 translate-y-0"
                } else {
                    "reveal transition-all duration-1000 transform opacity-0 translate-y-10"
                }
            }
            style=format!("transition-delay: {delay}ms")
        >
            {children()}
        </div>
    }
}
