use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::content::{LINE_URL, TEL_URL};
use crate::state::sticky_bar_visible;

/// Floating booking bar. Hidden while the hero's own CTAs are still on
/// screen, shown once the about section has scrolled into view.
#[function_component(StickyCta)]
pub fn sticky_cta() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let viewport_height = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    let section_top = document
                        .query_selector("#about")
                        .ok()
                        .flatten()
                        .map(|section| section.get_bounding_client_rect().top());

                    let next = match section_top {
                        Some(top) => sticky_bar_visible(top, viewport_height),
                        None => false,
                    };
                    visible.set(next);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <div class={classes!("sticky-cta", (*visible).then(|| "visible"))}>
            <div class="sticky-cta-inner">
                <a href={LINE_URL} class="sticky-button sticky-line">{"LINEで即予約"}</a>
                <a href={TEL_URL} class="sticky-button sticky-tel">{"電話で相談"}</a>
            </div>
            <style>
                {r#"
                .sticky-cta {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    z-index: 130;
                    padding: 1rem;
                    display: flex;
                    justify-content: center;
                    pointer-events: none;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.4s ease, transform 0.4s ease;
                }

                .sticky-cta.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .sticky-cta-inner {
                    background: rgba(0, 0, 0, 0.9);
                    backdrop-filter: blur(24px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 0.75rem;
                    border-radius: 999px;
                    box-shadow: 0 10px 40px rgba(0, 0, 0, 0.8);
                    display: flex;
                    gap: 0.75rem;
                }

                .sticky-cta.visible .sticky-cta-inner {
                    pointer-events: auto;
                }

                .sticky-button {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 1.75rem;
                    border-radius: 999px;
                    font-weight: bold;
                    font-size: 0.9rem;
                    text-decoration: none;
                    transition: transform 0.3s ease;
                }

                .sticky-button:hover {
                    transform: translateY(-2px);
                }

                .sticky-line {
                    background: #06C755;
                    color: #fff;
                }

                .sticky-tel {
                    background: #fff;
                    color: #000;
                }

                @media (min-width: 768px) {
                    .sticky-cta {
                        padding: 1.5rem;
                    }

                    .sticky-button {
                        padding: 1rem 2.5rem;
                        font-size: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
