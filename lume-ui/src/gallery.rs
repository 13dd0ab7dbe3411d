//! Lightbox controller
//!
//! A [`Gallery`] wires a click listener onto the configured thumbnail
//! container. Clicking a thumbnail `<img>` opens its full-size URL (taken
//! from the configured data attribute) in a full-screen overlay appended to
//! `<body>`. The overlay is built on first open and removed on close;
//! previous/next controls walk the thumbnail's siblings, wrapping around at
//! either end of the container.
//!
//! Event closures capture a shared handle to the controller state instead of
//! a hidden global, and every listener is an RAII [`EventListener`], so
//! dropping the `Gallery` (or closing the overlay) detaches what it wired.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement};

use crate::config::GalleryConfig;
use crate::dom::EventListener;
use crate::error::GalleryError;

/// An attached lightbox instance.
///
/// Holds the container click listener for as long as it lives; dropping it
/// closes any open overlay and detaches from the container.
pub struct Gallery {
    state: Rc<RefCell<State>>,
    _container_click: EventListener,
}

/// Controller state shared with the event closures.
struct State {
    config: GalleryConfig,
    document: Document,
    /// Thumbnail whose full-size version is currently shown. Only
    /// meaningful while `overlay` is `Some`.
    current: Option<HtmlImageElement>,
    overlay: Option<Overlay>,
}

/// The overlay subtree plus the listeners wired to its controls. Dropping
/// it detaches the listeners; `close` also removes the subtree itself.
struct Overlay {
    wrapper: Element,
    image: HtmlImageElement,
    _listeners: Vec<EventListener>,
}

#[derive(Clone, Copy)]
enum NavDirection {
    Back,
    Next,
}

impl Gallery {
    /// Attach a gallery to the container matched by
    /// `config.container_selector`.
    pub fn attach(config: GalleryConfig) -> Result<Self, GalleryError> {
        let window = web_sys::window().ok_or(GalleryError::NoWindow)?;
        let document = window.document().ok_or(GalleryError::NoDocument)?;
        let container = document
            .query_selector(&config.container_selector)
            .map_err(GalleryError::from_js)?
            .ok_or_else(|| GalleryError::ContainerNotFound(config.container_selector.clone()))?;

        debug!("gallery attached to {}", config.container_selector);

        let state = Rc::new(RefCell::new(State {
            config,
            document,
            current: None,
            overlay: None,
        }));

        let container_listener = EventListener::new(container.into(), "click", {
            let state = Rc::clone(&state);
            move |event| container_click(&state, event)
        });

        Ok(Self {
            state,
            _container_click: container_listener,
        })
    }

    /// Whether the overlay is currently in the document.
    pub fn is_open(&self) -> bool {
        self.state.borrow().overlay.is_some()
    }

    /// Source of the image currently shown in the overlay, if open.
    pub fn current_src(&self) -> Option<String> {
        self.state
            .borrow()
            .overlay
            .as_ref()
            .and_then(|overlay| overlay.image.get_attribute("src"))
    }

    /// Remove the overlay from the document. A later thumbnail click
    /// rebuilds it from scratch.
    pub fn close(&self) {
        close(&self.state);
    }
}

impl Drop for Gallery {
    fn drop(&mut self) {
        close(&self.state);
    }
}

/// Container click handler: ignore anything that is not a thumbnail image.
fn container_click(state: &Rc<RefCell<State>>, event: web_sys::Event) {
    let Some(target) = event.target() else {
        return;
    };
    let Ok(thumbnail) = target.dyn_into::<HtmlImageElement>() else {
        return;
    };
    open_thumbnail(state, thumbnail);
}

/// Record `thumbnail` as current and open its full-size URL.
fn open_thumbnail(state: &Rc<RefCell<State>>, thumbnail: HtmlImageElement) {
    let attr = state.borrow().config.full_image_attr.clone();
    let Some(url) = thumbnail.get_attribute(&attr) else {
        warn!("thumbnail has no {} attribute, ignoring", attr);
        return;
    };

    state.borrow_mut().current = Some(thumbnail);
    if let Err(e) = open_image(state, &url) {
        warn!("failed to open image: {}", e);
    }
}

/// Ensure the overlay exists, then point its image element at `url`.
fn open_image(state: &Rc<RefCell<State>>, url: &str) -> Result<(), GalleryError> {
    if state.borrow().overlay.is_none() {
        let overlay = build_overlay(state)?;
        state.borrow_mut().overlay = Some(overlay);
    }

    if let Some(overlay) = state.borrow().overlay.as_ref() {
        overlay.image.set_src(url);
        debug!("opened {}", url);
    }
    Ok(())
}

/// Build the overlay subtree and append it to `<body>`.
///
/// Child order: back control, next control, screen, close control, image.
fn build_overlay(state: &Rc<RefCell<State>>) -> Result<Overlay, GalleryError> {
    let (document, config) = {
        let s = state.borrow();
        (s.document.clone(), s.config.clone())
    };

    let wrapper = document
        .create_element("div")
        .map_err(GalleryError::from_js)?;
    wrapper.set_class_name(&config.wrapper_class);

    let mut listeners = Vec::new();

    let back: HtmlImageElement = document
        .create_element("img")
        .map_err(GalleryError::from_js)?
        .unchecked_into();
    back.set_class_name(&config.back_class);
    back.set_src(&config.back_src);
    wrapper
        .append_child(&back)
        .map_err(GalleryError::from_js)?;
    listeners.push(EventListener::new(back.into(), "click", {
        let state = Rc::clone(state);
        move |_| navigate(&state, NavDirection::Back)
    }));

    let next: HtmlImageElement = document
        .create_element("img")
        .map_err(GalleryError::from_js)?
        .unchecked_into();
    next.set_class_name(&config.next_class);
    next.set_src(&config.next_src);
    wrapper
        .append_child(&next)
        .map_err(GalleryError::from_js)?;
    listeners.push(EventListener::new(next.into(), "click", {
        let state = Rc::clone(state);
        move |_| navigate(&state, NavDirection::Next)
    }));

    let screen = document
        .create_element("div")
        .map_err(GalleryError::from_js)?;
    screen.set_class_name(&config.screen_class);
    wrapper
        .append_child(&screen)
        .map_err(GalleryError::from_js)?;
    listeners.push(EventListener::new(screen.into(), "click", {
        let state = Rc::clone(state);
        move |_| close(&state)
    }));

    let close_btn: HtmlImageElement = document
        .create_element("img")
        .map_err(GalleryError::from_js)?
        .unchecked_into();
    close_btn.set_class_name(&config.close_class);
    close_btn.set_src(&config.close_src);
    wrapper
        .append_child(&close_btn)
        .map_err(GalleryError::from_js)?;
    listeners.push(EventListener::new(close_btn.into(), "click", {
        let state = Rc::clone(state);
        move |_| close(&state)
    }));

    let image: HtmlImageElement = document
        .create_element("img")
        .map_err(GalleryError::from_js)?
        .unchecked_into();
    image.set_class_name(&config.image_class);
    listeners.push(EventListener::new(image.clone().into(), "error", {
        let image = image.clone();
        let fallback = config.fallback_src.clone();
        move |_| {
            // One shot: a failing fallback is not retried.
            if image.get_attribute("src").as_deref() == Some(fallback.as_str()) {
                return;
            }
            warn!("image failed to load, substituting {}", fallback);
            image.set_src(&fallback);
        }
    }));
    wrapper
        .append_child(&image)
        .map_err(GalleryError::from_js)?;

    // Escape closes while the overlay is up; the listener goes away with it.
    listeners.push(EventListener::new(document.clone().into(), "keydown", {
        let state = Rc::clone(state);
        move |event| {
            let escape = event
                .dyn_ref::<web_sys::KeyboardEvent>()
                .is_some_and(|e| e.key() == "Escape");
            if escape {
                close(&state);
            }
        }
    }));

    document
        .body()
        .ok_or_else(|| GalleryError::Dom("document has no body".to_string()))?
        .append_child(&wrapper)
        .map_err(GalleryError::from_js)?;

    debug!("overlay built");

    Ok(Overlay {
        wrapper,
        image,
        _listeners: listeners,
    })
}

/// Open the sibling thumbnail in `direction`, wrapping around at either end
/// of the container.
fn navigate(state: &Rc<RefCell<State>>, direction: NavDirection) {
    let sibling = {
        let s = state.borrow();
        let Some(current) = s.current.as_ref() else {
            return;
        };
        let adjacent = match direction {
            NavDirection::Back => current.previous_element_sibling(),
            NavDirection::Next => current.next_element_sibling(),
        };
        adjacent.or_else(|| {
            let parent = current.parent_element()?;
            match direction {
                NavDirection::Back => parent.last_element_child(),
                NavDirection::Next => parent.first_element_child(),
            }
        })
    };

    let Some(sibling) = sibling else {
        return;
    };
    match sibling.dyn_into::<HtmlImageElement>() {
        Ok(thumbnail) => open_thumbnail(state, thumbnail),
        Err(element) => warn!("gallery sibling <{}> is not an image", element.tag_name()),
    }
}

/// Remove the overlay subtree and drop its listeners.
fn close(state: &Rc<RefCell<State>>) {
    let overlay = {
        let mut s = state.borrow_mut();
        s.current = None;
        s.overlay.take()
    };

    // Dropped outside the borrow: listener teardown may run closures' Drop
    // while a control's own click handler is still on the stack.
    if let Some(overlay) = overlay {
        overlay.wrapper.remove();
        debug!("overlay closed");
    }
}
