use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::animals::AnimalKey;

use crate::Route;

#[derive(Clone, PartialEq, Props)]
struct AnimalCardProps {
    animal: AnimalKey,
}

#[component]
fn AnimalCard(props: AnimalCardProps) -> Element {
    let animal = props.animal;
    let title = animal.info().title;
    let initial = title.chars().next().unwrap_or('?');

    rsx! {
        Link {
            class: "animal-card",
            to: Route::AnimalGallery {
                animal: animal.to_string(),
            },
            div {
                h3 { "{title}" }
                p { "Tap to know more" }
            }
            span { class: "animal-badge", "{initial}" }
        }
    }
}

#[component]
pub fn AnimalPicker() -> Element {
    rsx! {
        div { class: "animal-picker",
            for animal in AnimalKey::ALL {
                AnimalCard { key: "{animal}", animal }
            }
        }
    }
}
