use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_console::error as console_error;

use common::{
    StatusMessage, config::AppConfig, format::group_thousands, handoff::DetailsQuery,
    upload::UploadFlow,
};

use crate::Route;

#[derive(Clone, PartialEq, Props)]
pub struct ResultSummaryProps {
    flow: Signal<UploadFlow>,
    status: Signal<Option<StatusMessage>>,
}

#[component]
pub fn ResultSummary(props: ResultSummaryProps) -> Element {
    let mut flow = props.flow;
    let mut status = props.status;
    let config = use_context::<AppConfig>();
    let navigator = navigator();

    // remembers which image failed to load, so a later upload gets its own try
    let mut broken_image = use_signal::<Option<String>>(|| None);

    let Some(result) = flow.read().result().cloned() else {
        return rsx! {};
    };

    let metadata = &result.metadata;
    let size = match metadata.file_size {
        Some(bytes) => format!("{} bytes", group_thousands(bytes)),
        None => String::from("Unknown"),
    };
    let dimensions = match metadata.dimensions() {
        Some(size) => format!("{}x{}", size.width, size.height),
        None => String::from("Unknown"),
    };
    let format = metadata.format().unwrap_or("Unknown").to_owned();

    let image_id = result.image_id.clone();
    let image_src = config.image_link(&result.image_id);
    let image_hidden = broken_image.read().as_deref() == Some(result.image_id.as_str());

    let details = Route::ImageDetails {
        query: DetailsQuery::from(&result),
    };

    rsx! {
        div { class: "result-card",
            h3 { "Upload Successful!" }
            div { class: "result-fields",
                p {
                    strong { "Image ID: " }
                    "{result.image_id}"
                }
                p {
                    strong { "Description: " }
                    "{result.description}"
                }
                p {
                    strong { "File Size: " }
                    "{size}"
                }
                p {
                    strong { "Dimensions: " }
                    "{dimensions}"
                }
                p {
                    strong { "Format: " }
                    "{format}"
                }
            }

            if !image_hidden {
                img {
                    class: "result-image",
                    src: "{image_src}",
                    alt: "Uploaded image",
                    onerror: move |_| {
                        console_error!(format!("Image load failed: {image_id}"));
                        broken_image.set(Some(image_id.clone()));
                    },
                }
            }

            div { class: "result-actions",
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| {
                        navigator.push(details.clone());
                    },
                    "View Details"
                }
                button {
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| {
                        if flow.write().clear() {
                            status.set(None);
                        }
                    },
                    "Clear"
                }
            }
        }
    }
}
