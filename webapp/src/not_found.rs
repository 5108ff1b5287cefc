use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[derive(Clone, PartialEq, Props)]
pub struct NotFoundNoticeProps {
    path: String,
}

#[component]
pub fn NotFoundNotice(props: NotFoundNoticeProps) -> Element {
    rsx! {
        section { class: "not-found",
            h1 { "404" }
            p { "This page could not be found: {props.path}" }
            Link { class: "btn btn-primary", to: Route::Home {}, "Go home" }
        }
    }
}

//
// ROUTE TARGET
//
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        NotFoundNotice { path: format!("/{}", segments.join("/")) }
    }
}
