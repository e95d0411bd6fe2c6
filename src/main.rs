use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod noise;
mod storage;
mod submit;
mod wave;

mod components {
    pub mod chat_widget;
    pub mod notification;
    pub mod tab_section;
    pub mod wavy_background;
}

mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};

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
            info!("Rendering NotFound page");
            html! { <NotFound /> }
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
    console_log::init_with_level(Level::Info).expect("error initializing log");

    // A production build without relay form ids must die here, before
    // anything renders.
    config::validate_at_startup();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
