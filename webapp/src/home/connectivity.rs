use dioxus::prelude::*;

use common::probe::Connectivity;

#[derive(Clone, PartialEq, Props)]
pub struct ConnectivityBadgeProps {
    connectivity: Connectivity,
}

#[component]
pub fn ConnectivityBadge(props: ConnectivityBadgeProps) -> Element {
    let connectivity = props.connectivity;

    let class = match connectivity.is_connected() {
        None => "badge badge-pending",
        Some(true) => "badge badge-ok",
        Some(false) => "badge badge-error",
    };

    rsx! {
        div { class: "connectivity",
            span { class, "{connectivity.label()}" }
        }
    }
}
