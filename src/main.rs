use yew::prelude::*;
use log::{info, Level};

mod config;
mod components {
    pub mod card_shuffler;
    pub mod global_styles;
    pub mod magnetic_button;
    pub mod noise_overlay;
    pub mod regimen_card;
    pub mod split_text;
    pub mod typewriter;
}
mod pages {
    pub mod landing;
}

use components::global_styles::GlobalStyles;
use components::noise_overlay::NoiseOverlay;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <div class="app-shell">
            <GlobalStyles />
            <NoiseOverlay />
            <Landing />
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
