use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod observers {
    pub mod guard;
    pub mod reveal;
    pub mod scroll;
}
mod components {
    pub mod anim_section;
    pub mod icon;
    pub mod social_row;
}
mod sections {
    pub mod about;
    pub mod community;
    pub mod description;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod marquee;
    pub mod support;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);


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
        },
        // Single-page site: unknown paths get the landing page too.
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        },
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
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting VolleyHub");
    yew::Renderer::<App>::new().render();
}
