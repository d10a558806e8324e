use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod hooks;
mod motion;
mod components {
    pub mod button;
    pub mod card;
    pub mod cta;
    pub mod features;
    pub mod hero;
    pub mod icons;
    pub mod layout;
    pub mod pricing;
    pub mod progress_bar;
    pub mod reveal;
    pub mod story_panel;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            // Single-page site, unknown paths land on the same page
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
