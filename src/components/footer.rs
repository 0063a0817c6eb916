use yew::prelude::*;
use web_sys::MouseEvent;

use crate::state::View;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<View>,
}

const FOOTER_LINKS: &[(&str, View)] = &[
    ("利用規約", View::Terms),
    ("プライバシーポリシー", View::Privacy),
    ("特商法に基づく表記", View::Legal),
    ("会社概要", View::Company),
];

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-logo">{"gold"}</div>
                <div class="footer-links">
                    {
                        FOOTER_LINKS.iter().map(|&(label, target)| {
                            let onclick = {
                                let on_navigate = props.on_navigate.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    on_navigate.emit(target);
                                })
                            };
                            html! {
                                <a key={label} href="#" class="footer-link" {onclick}>
                                    { label }
                                </a>
                            }
                        }).collect::<Html>()
                    }
                </div>
                <div class="footer-copyright">
                    {"© 2024 gold Premium Matching Service. All rights reserved."}
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #000;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    padding: 4rem 1.5rem 12rem;
                    position: relative;
                    z-index: 10;
                }

                .footer-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 3rem;
                }

                .footer-logo {
                    font-family: Georgia, serif;
                    font-size: 1.75rem;
                    font-weight: bold;
                    color: #eab308;
                }

                .footer-links {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem 2rem;
                }

                .footer-link {
                    color: #6b7280;
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer-link:hover {
                    color: #fff;
                }

                .footer-copyright {
                    color: #4b5563;
                    font-size: 0.75rem;
                    text-align: center;
                }

                @media (min-width: 768px) {
                    .footer-inner {
                        flex-direction: row;
                        justify-content: space-between;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
