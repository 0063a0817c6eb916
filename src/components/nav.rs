use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{LINE_URL, NAV_ITEMS, TEL_URL};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub drawer_open: bool,
    pub on_toggle: Callback<MouseEvent>,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let toggle_menu = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(e);
        })
    };

    let close_menu = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            on_close.emit(e);
        })
    };

    let drawer_class = if props.drawer_open {
        "nav-drawer drawer-open"
    } else {
        "nav-drawer"
    };

    html! {
        <>
            <header class="top-nav">
                <div class="nav-content">
                    <span class="nav-logo">{"gold"}</span>
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle Menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>

            // Full-screen backdrop so tapping anywhere outside the drawer closes it.
            <div
                class={classes!("drawer-backdrop", props.drawer_open.then(|| "visible"))}
                onclick={close_menu.clone()}
            />

            <div class={drawer_class}>
                <div class="drawer-close-row">
                    <button class="drawer-close" onclick={close_menu.clone()} aria-label="Close Menu">
                        {"✕"}
                    </button>
                </div>
                <nav class="drawer-links">
                    {
                        NAV_ITEMS.iter().map(|item| {
                            html! {
                                <a
                                    key={item.anchor}
                                    href={item.anchor}
                                    class="drawer-link"
                                    onclick={close_menu.clone()}
                                >
                                    { item.label }
                                </a>
                            }
                        }).collect::<Html>()
                    }
                </nav>
                <div class="drawer-cta">
                    <p class="drawer-tagline">{"PREMIUM MATCHING SERVICE"}</p>
                    <a href={LINE_URL} class="cta-button cta-line">{"LINEで今すぐ予約"}</a>
                    <a href={TEL_URL} class="cta-button cta-tel">{"電話で相談する"}</a>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }

                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-family: Georgia, serif;
                    font-size: 1.5rem;
                    font-weight: bold;
                    letter-spacing: 0.2em;
                    color: #eab308;
                }

                .burger-menu {
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                }

                .burger-menu span {
                    display: block;
                    width: 28px;
                    height: 2px;
                    background: #fff;
                    transition: background 0.3s ease;
                }

                .burger-menu:hover span {
                    background: #eab308;
                }

                .drawer-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                    z-index: 115;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.5s ease;
                }

                .drawer-backdrop.visible {
                    opacity: 1;
                    pointer-events: auto;
                }

                .nav-drawer {
                    position: fixed;
                    right: 0;
                    top: 0;
                    height: 100%;
                    width: 85%;
                    max-width: 360px;
                    background: #222222;
                    z-index: 120;
                    box-shadow: -20px 0 50px rgba(0, 0, 0, 0.5);
                    transform: translateX(100%);
                    transition: transform 0.5s ease-in-out;
                    display: flex;
                    flex-direction: column;
                    padding: 1.5rem 2rem 2rem;
                }

                .nav-drawer.drawer-open {
                    transform: translateX(0);
                }

                .drawer-close-row {
                    display: flex;
                    justify-content: flex-end;
                    margin-bottom: 3rem;
                }

                .drawer-close {
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 2rem;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .drawer-close:hover {
                    color: #eab308;
                }

                .drawer-links {
                    display: flex;
                    flex-direction: column;
                    padding: 0 0.5rem;
                }

                .drawer-link {
                    color: #f3f4f6;
                    text-decoration: none;
                    font-size: 1.15rem;
                    font-weight: 500;
                    padding: 1rem 0;
                    border-bottom: 1px solid #4b5563;
                    transition: color 0.3s ease;
                }

                .drawer-link:hover {
                    color: #eab308;
                }

                .drawer-cta {
                    margin-top: auto;
                    padding-bottom: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .drawer-tagline {
                    font-size: 0.7rem;
                    letter-spacing: 0.2em;
                    color: #6b7280;
                    text-align: center;
                    margin-bottom: 0.5rem;
                }

                .cta-button {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem;
                    border-radius: 12px;
                    font-weight: bold;
                    text-decoration: none;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.3);
                    transition: transform 0.3s ease;
                }

                .cta-button:hover {
                    transform: translateY(-2px);
                }

                .cta-line {
                    background: #06C755;
                    color: #fff;
                }

                .cta-tel {
                    background: #fff;
                    color: #000;
                }
                "#}
            </style>
        </>
    }
}
