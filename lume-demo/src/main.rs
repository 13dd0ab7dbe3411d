//! lume demo - fixture gallery page for the lightbox widget
//!
//! A minimal web app that renders a thumbnail strip with fixture artwork and
//! attaches the lume-ui gallery to it once the container is mounted. The
//! last thumbnail points at a URL that does not exist, to show the fallback
//! substitution.

use dioxus::prelude::*;
use lume_ui::{Gallery, GalleryConfig, GalleryOverrides};
use tracing::error;

const MAIN_CSS: Asset = asset!("/assets/main.css");

const CLOSE_ICON: Asset = asset!("/assets/lume/close.svg");
const NEXT_ICON: Asset = asset!("/assets/lume/next.svg");
const BACK_ICON: Asset = asset!("/assets/lume/back.svg");
const MISSING_ICON: Asset = asset!("/assets/lume/missing.svg");

const DUNES: Asset = asset!("/assets/photos/dunes.svg");
const HEADLANDS: Asset = asset!("/assets/photos/headlands.svg");
const TIDEPOOL: Asset = asset!("/assets/photos/tidepool.svg");
const CONSERVATORY: Asset = asset!("/assets/photos/conservatory.svg");
const VIADUCT: Asset = asset!("/assets/photos/viaduct.svg");
const SALT_FLATS: Asset = asset!("/assets/photos/salt-flats.svg");

struct DemoPhoto {
    title: &'static str,
    thumb: Asset,
    full_url: String,
}

fn demo_photos() -> Vec<DemoPhoto> {
    vec![
        DemoPhoto {
            title: "Dunes at dusk",
            thumb: DUNES,
            full_url: DUNES.to_string(),
        },
        DemoPhoto {
            title: "Headlands",
            thumb: HEADLANDS,
            full_url: HEADLANDS.to_string(),
        },
        DemoPhoto {
            title: "Tidepool",
            thumb: TIDEPOOL,
            full_url: TIDEPOOL.to_string(),
        },
        DemoPhoto {
            title: "Conservatory",
            thumb: CONSERVATORY,
            full_url: CONSERVATORY.to_string(),
        },
        DemoPhoto {
            title: "Viaduct",
            thumb: VIADUCT,
            full_url: VIADUCT.to_string(),
        },
        DemoPhoto {
            // Full-size URL is intentionally dead so the fallback shows.
            title: "Salt flats (broken original)",
            thumb: SALT_FLATS,
            full_url: "/assets/photos/salt-flats-original.svg".to_string(),
        },
    ]
}

fn gallery_config() -> GalleryConfig {
    GalleryConfig::default().merged(GalleryOverrides {
        container_selector: Some(".demo-gallery".to_string()),
        close_src: Some(CLOSE_ICON.to_string()),
        next_src: Some(NEXT_ICON.to_string()),
        back_src: Some(BACK_ICON.to_string()),
        fallback_src: Some(MISSING_ICON.to_string()),
        ..GalleryOverrides::default()
    })
}

/// Main demo app component
#[component]
fn App() -> Element {
    // Keeps the attached gallery alive for the lifetime of the page;
    // dropping it would detach the container listener.
    let mut gallery = use_signal(|| None::<Gallery>);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "page",
            header { class: "page__header",
                h1 { "lume" }
                p { "Click a thumbnail to open it. Arrows navigate, Escape or the screen closes." }
            }
            div {
                class: "demo-gallery",
                onmounted: move |_| {
                    match Gallery::attach(gallery_config()) {
                        Ok(attached) => gallery.set(Some(attached)),
                        Err(e) => error!("failed to attach gallery: {}", e),
                    }
                },
                for photo in demo_photos() {
                    img {
                        class: "demo-gallery__thumb",
                        src: photo.thumb,
                        alt: photo.title,
                        title: photo.title,
                        "data-full-image-url": photo.full_url,
                    }
                }
            }
        }
    }
}

fn main() {
    dioxus::launch(App);
}
