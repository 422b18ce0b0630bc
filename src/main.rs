use log::info;
use yew::prelude::*;

mod analytics;
mod config;
mod content;
mod controller;

mod marquee {
    pub mod component;
    pub mod frame;
    pub mod state;
}
mod quiz {
    pub mod flow;
    pub mod modal;
    pub mod transmit;
}
mod components {
    pub mod cta;
    pub mod nav;
    pub mod section;
}
mod pages {
    pub mod faq;
    pub mod hero;
    pub mod landing;
    pub mod pricing;
    pub mod showcase;
}

use analytics::Analytics;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    // One sink for the app's lifetime so context consumers don't re-render on identity changes.
    let analytics = use_state(Analytics::facebook_pixel);

    html! {
        <ContextProvider<Analytics> context={(*analytics).clone()}>
            <Landing />
        </ContextProvider<Analytics>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting TraffAgent landing");
    yew::Renderer::<App>::new().render();
}
