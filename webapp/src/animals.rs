use dioxus::prelude::*;

use common::animals::{self, AnimalInfo, BentoItem};

use crate::not_found::NotFoundNotice;

#[derive(Clone, PartialEq, Props)]
struct BentoTileProps {
    photo: &'static BentoItem,
    eager: bool,
}

#[component]
fn BentoTile(props: BentoTileProps) -> Element {
    let photo = props.photo;

    rsx! {
        div { class: "bento-tile", style: "{photo.grid_style()}",
            img {
                src: photo.src,
                alt: photo.alt,
                width: "{photo.width}",
                height: "{photo.height}",
                loading: if props.eager { "eager" } else { "lazy" },
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FactSheetProps {
    info: &'static AnimalInfo,
}

#[component]
fn FactSheet(props: FactSheetProps) -> Element {
    let info = props.info;

    rsx! {
        aside { class: "fact-sheet",
            h1 { "{info.title}" }
            p { class: "fact-description", "{info.description}" }
            div { class: "panel",
                h3 { "Scientific info" }
                ul {
                    for fact in info.facts.iter() {
                        li { key: "{fact.label}",
                            span { class: "fact-label", "{fact.label}:" }
                            " {fact.value}"
                        }
                    }
                }
            }
        }
    }
}

//
// ROUTE TARGET
//
#[component]
pub fn AnimalGallery(animal: String) -> Element {
    let Some(info) = animals::lookup(&animal) else {
        tracing::debug!({ animal = %animal }, "no catalog entry");
        return rsx! {
            NotFoundNotice { path: format!("/animals/{animal}") }
        };
    };

    rsx! {
        section { class: "animal-page",
            div { class: "bento-grid",
                // only the first couple of tiles are above the fold
                for (idx, photo) in info.photos.iter().enumerate() {
                    BentoTile { key: "{idx}", photo, eager: idx < 2 }
                }
            }
            FactSheet { info }
        }
    }
}
