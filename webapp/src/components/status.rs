use dioxus::prelude::*;

use common::StatusMessage;

#[derive(Clone, PartialEq, Props)]
pub struct StatusBannerProps {
    message: Option<StatusMessage>,
}

#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    let Some(message) = props.message else {
        return rsx! {};
    };

    rsx! {
        div {
            class: if message.is_error { "status-banner status-error" } else { "status-banner status-ok" },
            role: "status",
            p { "{message.text}" }
        }
    }
}
