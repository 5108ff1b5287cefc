use dioxus::prelude::*;

use api::ImageApi;
use common::{StatusMessage, config::AppConfig, probe::Connectivity, upload::UploadFlow};

use crate::components::status::StatusBanner;

mod connectivity;
use connectivity::ConnectivityBadge;

mod picker;
use picker::AnimalPicker;

mod result;
use result::ResultSummary;

mod uploader;
use uploader::Uploader;

const CAPTION_MODEL: &str = "Salesforce/blip-image-captioning-base";

//
// ROUTE TARGET
//
#[component]
pub fn Home() -> Element {
    let config = use_context::<AppConfig>();

    // all of the upload state belongs to this page and is handed down to the
    // children as signals, so navigating away drops the last result
    let mut connectivity = use_signal(Connectivity::default);
    let mut status = use_signal::<Option<StatusMessage>>(|| None);
    let flow = use_signal(UploadFlow::new);

    // one probe per mount; the result is advisory and nothing waits on it
    use_future(move || {
        let api = config.image_api();
        async move {
            let (state, banner) = Connectivity::from_probe(api.status().await);
            connectivity.set(state);

            // if the user already picked a file, their status wins
            if status.peek().is_none() {
                status.set(Some(banner));
            }
        }
    });

    rsx! {
        section { class: "home",
            header { class: "home-header",
                h1 { "Animal Gallery Demo" }
                p { class: "subtitle", "Choose an animal or upload an image." }
            }

            AnimalPicker {}

            div { class: "divider",
                hr {}
                span { "OR" }
                hr {}
            }

            p { class: "model-note",
                "NOTE: This feature uses "
                a {
                    href: "https://huggingface.co/{CAPTION_MODEL}",
                    target: "_blank",
                    rel: "noreferrer",
                    code { "{CAPTION_MODEL}" }
                }
                " for captioning. Accuracy might not be 100%."
            }

            ConnectivityBadge { connectivity: connectivity() }
            Uploader { flow, status }
            StatusBanner { message: status() }
            ResultSummary { flow, status }
        }
    }
}
