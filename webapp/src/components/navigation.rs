use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::animals::AnimalKey;

use crate::Route;

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path == target { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Home {}, "Animal Gallery Demo" }
                }

                nav { class: "nav-links",
                    NavBarButton { name: "Home".to_owned(), target: Route::Home {} }
                    for key in AnimalKey::ALL {
                        NavBarButton {
                            key: "{key}",
                            name: key.info().title.to_owned(),
                            target: Route::AnimalGallery {
                                animal: key.to_string(),
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        main { class: "page-content container", Outlet::<Route> {} }
    }
}
