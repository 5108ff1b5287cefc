#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

use common::{config::AppConfig, handoff::DetailsQuery};

mod style;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod animals;
use animals::AnimalGallery;

mod details;
use details::ImageDetails;

mod not_found;
use not_found::PageNotFound;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the details route carries the whole upload result in its query string,
// so it can be bookmarked or reloaded without any server-side state
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/animals/:animal")]
        AnimalGallery { animal: String },
        #[route("/upload?:..query")]
        ImageDetails { query: DetailsQuery },
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppConfig::from_build_env);

    rsx! {
        style { "{style::APP_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
