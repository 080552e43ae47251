use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod registration {
    pub mod controller;
    pub mod errors;
    pub mod fields;
    pub mod mobile;
    pub mod state;
    pub mod transport;
    pub mod utm;
}
mod components {
    pub mod cards;
    pub mod registration_form;
}
mod pages {
    pub mod landing;
    pub mod thank_you;
}

use pages::{
    landing::Landing,
    thank_you::ThankYou,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/thankyou")]
    ThankYou,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::ThankYou => {
            info!("Rendering Thank You page");
            html! { <ThankYou /> }
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
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
