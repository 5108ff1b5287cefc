use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_console::error as console_error;

use common::{
    config::AppConfig,
    handoff::{DetailsQuery, DetailsState, UploadDetails},
};

use crate::Route;

#[derive(Clone, PartialEq, Props)]
struct DetailsErrorProps {
    title: String,
    detail: String,
}

// replaces the old "loading forever" screen when the url can't be used
#[component]
fn DetailsError(props: DetailsErrorProps) -> Element {
    rsx! {
        section { class: "details-error",
            h1 { "{props.title}" }
            p { "{props.detail}" }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back to upload" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ImagePreviewProps {
    src: String,
    alt: String,
}

#[component]
fn ImagePreview(props: ImagePreviewProps) -> Element {
    let mut failed = use_signal(|| false);
    let src = props.src;
    let failed_src = src.clone();

    rsx! {
        div { class: "preview-frame",
            if failed() {
                div { class: "preview-missing",
                    p { "Image preview not available" }
                    p { class: "hint", "File uploaded successfully" }
                }
            } else {
                img {
                    src: "{src}",
                    alt: "{props.alt}",
                    onerror: move |_| {
                        console_error!(format!("Image load failed: {failed_src}"));
                        failed.set(true);
                    },
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ExifPanelProps {
    count: usize,
    preview: Vec<(String, String)>,
}

#[component]
fn ExifPanel(props: ExifPanelProps) -> Element {
    if props.count == 0 {
        return rsx! {};
    }

    rsx! {
        div { class: "panel",
            h3 { "EXIF Data" }
            p { "{props.count} EXIF entries found" }
            details {
                summary { "View Details" }
                ul { class: "exif-list",
                    for (tag, value) in props.preview.iter() {
                        li { key: "{tag}",
                            span { class: "fact-label", "{tag}:" }
                            " {value}"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct DetailsSidebarProps {
    details: UploadDetails,
}

#[component]
fn DetailsSidebar(props: DetailsSidebarProps) -> Element {
    let details = props.details;

    rsx! {
        aside { class: "fact-sheet",
            h1 { "Uploaded Image" }

            div { class: "panel",
                h3 { "Metadata" }
                ul {
                    li {
                        span { class: "fact-label", "Name:" }
                        " {details.name}"
                    }
                    li {
                        span { class: "fact-label", "Type:" }
                        " {details.format}"
                    }
                    li {
                        span { class: "fact-label", "Size:" }
                        " {details.size}"
                    }
                    li {
                        span { class: "fact-label", "Dimensions:" }
                        " {details.dimensions}"
                    }
                    li {
                        span { class: "fact-label", "Upload Time:" }
                        " {details.upload_time}"
                    }
                }
            }

            div { class: "panel",
                h3 { "AI Description" }
                p { "{details.description}" }
            }

            ExifPanel { count: details.exif_count, preview: details.exif_preview.clone() }
        }
    }
}

//
// ROUTE TARGET
//
#[component]
pub fn ImageDetails(query: DetailsQuery) -> Element {
    let config = use_context::<AppConfig>();

    let details = match query.load() {
        DetailsState::Ready(details) => details,
        DetailsState::Missing => {
            return rsx! {
                DetailsError {
                    title: "No upload data",
                    detail: "This page needs the details of an upload. Upload an image from the home page first.",
                }
            };
        }
        DetailsState::Malformed(err) => {
            console_error!(format!("Failed to parse image metadata: {err}"));
            return rsx! {
                DetailsError {
                    title: "Failed to load image data",
                    detail: "The image metadata in this link could not be read: {err}",
                }
            };
        }
    };

    // with no id there is nothing to fetch, go straight to the placeholder
    let preview = if details.image_id.is_empty() {
        None
    } else {
        Some(config.image_link(&details.image_id))
    };

    rsx! {
        section { class: "details-page",
            div { class: "details-preview",
                match preview {
                    Some(src) => rsx! {
                        ImagePreview { key: "{src}", src, alt: details.name.clone() }
                    },
                    None => rsx! {
                        div { class: "preview-frame",
                            div { class: "preview-missing",
                                p { "Image preview not available" }
                            }
                        }
                    },
                }
            }
            DetailsSidebar { details }
        }
    }
}
