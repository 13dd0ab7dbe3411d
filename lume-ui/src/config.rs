//! Gallery configuration
//!
//! All options are plain strings: the container selector, the CSS classes
//! put on the overlay elements, and the asset paths the control images load
//! from. `GalleryConfig::default()` documents the stock values; callers
//! override a subset via `GalleryOverrides` or by deserializing a partial
//! JSON document (unspecified keys keep their defaults either way).

use serde::{Deserialize, Serialize};

/// Full option set for a [`Gallery`](crate::Gallery).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Selector for the element holding the thumbnail `<img>`s.
    pub container_selector: String,
    /// Class for the overlay wrapper element.
    pub wrapper_class: String,
    /// Class for the opened image element.
    pub image_class: String,
    /// Class for the screen element behind the opened image.
    pub screen_class: String,
    /// Class for the close control.
    pub close_class: String,
    /// Class for the next-image control.
    pub next_class: String,
    /// Class for the previous-image control.
    pub back_class: String,
    /// Source of the close control image.
    pub close_src: String,
    /// Source of the next-image control image.
    pub next_src: String,
    /// Source of the previous-image control image.
    pub back_src: String,
    /// Source substituted when the opened image fails to load.
    pub fallback_src: String,
    /// Attribute on a thumbnail holding the URL of its full-size version.
    pub full_image_attr: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            container_selector: ".gallery".to_string(),
            wrapper_class: "lume-overlay".to_string(),
            image_class: "lume-overlay__image".to_string(),
            screen_class: "lume-overlay__screen".to_string(),
            close_class: "lume-overlay__close".to_string(),
            next_class: "lume-overlay__next".to_string(),
            back_class: "lume-overlay__back".to_string(),
            close_src: "/assets/lume/close.svg".to_string(),
            next_src: "/assets/lume/next.svg".to_string(),
            back_src: "/assets/lume/back.svg".to_string(),
            fallback_src: "/assets/lume/missing.svg".to_string(),
            full_image_attr: "data-full-image-url".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Shallow-merge `overrides` into this config. Fields left `None` keep
    /// their current value.
    pub fn merged(mut self, overrides: GalleryOverrides) -> Self {
        let GalleryOverrides {
            container_selector,
            wrapper_class,
            image_class,
            screen_class,
            close_class,
            next_class,
            back_class,
            close_src,
            next_src,
            back_src,
            fallback_src,
            full_image_attr,
        } = overrides;

        if let Some(v) = container_selector {
            self.container_selector = v;
        }
        if let Some(v) = wrapper_class {
            self.wrapper_class = v;
        }
        if let Some(v) = image_class {
            self.image_class = v;
        }
        if let Some(v) = screen_class {
            self.screen_class = v;
        }
        if let Some(v) = close_class {
            self.close_class = v;
        }
        if let Some(v) = next_class {
            self.next_class = v;
        }
        if let Some(v) = back_class {
            self.back_class = v;
        }
        if let Some(v) = close_src {
            self.close_src = v;
        }
        if let Some(v) = next_src {
            self.next_src = v;
        }
        if let Some(v) = back_src {
            self.back_src = v;
        }
        if let Some(v) = fallback_src {
            self.fallback_src = v;
        }
        if let Some(v) = full_image_attr {
            self.full_image_attr = v;
        }
        self
    }
}

/// Partial form of [`GalleryConfig`]: every field optional, `None` meaning
/// "keep the default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryOverrides {
    pub container_selector: Option<String>,
    pub wrapper_class: Option<String>,
    pub image_class: Option<String>,
    pub screen_class: Option<String>,
    pub close_class: Option<String>,
    pub next_class: Option<String>,
    pub back_class: Option<String>,
    pub close_src: Option<String>,
    pub next_src: Option<String>,
    pub back_src: Option<String>,
    pub fallback_src: Option<String>,
    pub full_image_attr: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_keep_every_default() {
        let merged = GalleryConfig::default().merged(GalleryOverrides::default());
        assert_eq!(merged, GalleryConfig::default());
    }

    #[test]
    fn partial_overrides_change_only_named_fields() {
        let merged = GalleryConfig::default().merged(GalleryOverrides {
            container_selector: Some(".photos".to_string()),
            fallback_src: Some("/img/404.png".to_string()),
            ..GalleryOverrides::default()
        });

        assert_eq!(merged.container_selector, ".photos");
        assert_eq!(merged.fallback_src, "/img/404.png");

        let defaults = GalleryConfig::default();
        assert_eq!(merged.wrapper_class, defaults.wrapper_class);
        assert_eq!(merged.image_class, defaults.image_class);
        assert_eq!(merged.close_src, defaults.close_src);
        assert_eq!(merged.full_image_attr, defaults.full_image_attr);
    }

    #[test]
    fn merge_is_idempotent_for_identical_overrides() {
        let overrides = GalleryOverrides {
            wrapper_class: Some("viewer".to_string()),
            ..GalleryOverrides::default()
        };
        let once = GalleryConfig::default().merged(overrides.clone());
        let twice = once.clone().merged(overrides);
        assert_eq!(once, twice);
    }

    #[test]
    fn partial_json_fills_unspecified_options_with_defaults() {
        let config: GalleryConfig = serde_json::from_str(
            r#"{"container_selector": ".pictureContainer", "close_src": "img/close.png"}"#,
        )
        .expect("parse partial config");

        assert_eq!(config.container_selector, ".pictureContainer");
        assert_eq!(config.close_src, "img/close.png");
        assert_eq!(config.wrapper_class, GalleryConfig::default().wrapper_class);
        assert_eq!(config.next_src, GalleryConfig::default().next_src);
    }

    #[test]
    fn partial_json_overrides_deserialize_with_none_for_missing_keys() {
        let overrides: GalleryOverrides =
            serde_json::from_str(r#"{"back_src": "img/back.png"}"#).expect("parse overrides");

        assert_eq!(overrides.back_src.as_deref(), Some("img/back.png"));
        assert_eq!(overrides.next_src, None);
        assert_eq!(overrides.container_selector, None);
    }
}
