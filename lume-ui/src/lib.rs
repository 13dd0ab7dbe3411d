//! lume-ui - image lightbox widget for the browser
//!
//! Attaches to a container of thumbnail `<img>` elements and shows the
//! full-size version of a clicked thumbnail in a full-screen overlay, with
//! circular previous/next navigation and a close control. The overlay is
//! built lazily on first open and torn down on close.

pub mod config;
pub mod dom;
pub mod error;
pub mod gallery;

pub use config::{GalleryConfig, GalleryOverrides};
pub use error::GalleryError;
pub use gallery::Gallery;
