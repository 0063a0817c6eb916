use yew::prelude::*;
use log::{info, Level};
use web_sys::window;

mod content;
mod state;
mod components {
    pub mod footer;
    pub mod nav;
    pub mod sticky_cta;
}
mod pages {
    pub mod home;
    pub mod legal;
}

use components::footer::Footer;
use components::nav::Nav;
use components::sticky_cta::StickyCta;
use pages::home::Home;
use pages::legal::{CommercialDisclosure, CompanyProfile, PrivacyPolicy, TermsOfService};
use state::{AppState, View};

fn switch(view: View, on_navigate: &Callback<View>) -> Html {
    match view {
        View::Home => {
            html! { <Home /> }
        }
        View::Terms => {
            html! { <TermsOfService on_navigate={on_navigate.clone()} /> }
        }
        View::Privacy => {
            html! { <PrivacyPolicy on_navigate={on_navigate.clone()} /> }
        }
        View::Legal => {
            html! { <CommercialDisclosure on_navigate={on_navigate.clone()} /> }
        }
        View::Company => {
            html! { <CompanyProfile on_navigate={on_navigate.clone()} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let app_state = use_state(AppState::default);

    let on_navigate = {
        let app_state = app_state.clone();
        Callback::from(move |target: View| {
            info!("Rendering {:?} view", target);
            let mut next = *app_state;
            next.navigate(target);
            app_state.set(next);
            // Every transition lands at the top of the new view, no animation.
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    let on_toggle_drawer = {
        let app_state = app_state.clone();
        Callback::from(move |_| {
            let mut next = *app_state;
            next.toggle_drawer();
            app_state.set(next);
        })
    };

    let on_close_drawer = {
        let app_state = app_state.clone();
        Callback::from(move |_| {
            let mut next = *app_state;
            next.close_drawer();
            app_state.set(next);
        })
    };

    html! {
        <div class="site">
            <Nav
                drawer_open={app_state.drawer_open}
                on_toggle={on_toggle_drawer}
                on_close={on_close_drawer}
            />
            { switch(app_state.view, &on_navigate) }
            <Footer on_navigate={on_navigate.clone()} />
            {
                if app_state.view == View::Home {
                    html! { <StickyCta /> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                * {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }

                body {
                    background: #0a0a0a;
                    color: #f3f4f6;
                    font-family: 'Hiragino Kaku Gothic ProN', 'Noto Sans JP', sans-serif;
                }

                ::selection {
                    background: #eab308;
                    color: #000;
                }

                .site {
                    min-height: 100vh;
                }
                "#}
            </style>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
