//! Hooks that tie the reveal controller, the message rotation and a few
//! window listeners to the component lifecycle.

use std::time::Duration;

use log::{debug, error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlLinkElement};
use yew::prelude::*;

use crate::cycle::{CycleError, MessageCycle, Rotation};
use crate::platform::{DomVisibility, IntervalTicker};
use crate::reveal::{RevealController, Threshold, VisibilityEvent};

/// `true` once the element behind `node_ref` has been on screen by at least
/// `threshold` (a fraction of its area). Never goes back to `false`.
#[hook]
pub fn use_reveal(node_ref: NodeRef, threshold: f64) -> bool {
    let revealed = use_state(|| false);

    {
        let already_revealed = *revealed;
        let setter = revealed.setter();
        use_effect_with_deps(
            move |(node_ref, threshold)| {
                let destructor: Box<dyn FnOnce()> = if already_revealed {
                    Box::new(|| ())
                } else {
                    let threshold = Threshold::new(*threshold).unwrap_or_else(|err| {
                        warn!("{}, using the default", err);
                        Threshold::default()
                    });
                    let controller = RevealController::new(DomVisibility, threshold).on_reveal({
                        let setter = setter.clone();
                        move || setter.set(true)
                    });

                    let element = node_ref.cast::<Element>();
                    if element.is_none() {
                        warn!("reveal target is not mounted yet");
                    }
                    if let Err(err) = controller.observe(element.as_ref()) {
                        // Without an observer the section would stay invisible forever.
                        error!("{}", err);
                        controller.handle_event(VisibilityEvent::fully_visible());
                    }

                    Box::new(move || controller.disconnect())
                };
                destructor
            },
            (node_ref, threshold),
        );
    }

    *revealed
}

/// Current position and entry of `messages`, moving to the next one every
/// `interval`. The rotation owns the cursor; ticks only schedule a re-render.
#[hook]
pub fn use_message_cycle<T>(messages: Vec<T>, interval: Duration) -> Result<(usize, T), CycleError>
where
    T: Clone + PartialEq + 'static,
{
    let rotation = use_mut_ref(|| {
        MessageCycle::new(messages.clone()).map(|cycle| Rotation::new(cycle, IntervalTicker))
    });
    let rerender = use_force_update();
    let mounted = use_mut_ref(|| false);

    {
        let rotation = rotation.clone();
        use_effect_with_deps(
            move |(messages, interval)| {
                let first_run = !std::mem::replace(&mut *mounted.borrow_mut(), true);
                if !first_run {
                    *rotation.borrow_mut() = MessageCycle::new(messages.clone())
                        .map(|cycle| Rotation::new(cycle, IntervalTicker));
                    rerender.force_update();
                }

                if let Ok(active) = rotation.borrow_mut().as_mut() {
                    let rerender = rerender.clone();
                    if let Err(err) = active.start(*interval, move |_| rerender.force_update()) {
                        error!("message rotation disabled: {}", err);
                    }
                }

                move || {
                    if let Ok(active) = rotation.borrow_mut().as_mut() {
                        active.stop();
                    }
                }
            },
            (messages, interval),
        );
    }

    let current = match &*rotation.borrow() {
        Ok(active) => Ok((active.current_index(), active.with_current(T::clone))),
        Err(err) => Err(*err),
    };
    current
}

/// Whether the window is scrolled further down than `offset` px.
#[hook]
pub fn use_scrolled_past(offset: f64) -> bool {
    let scrolled = use_state(|| false);

    {
        let setter = scrolled.setter();
        use_effect_with_deps(
            move |offset| {
                let offset = *offset;
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let update = move || {
                        if let Some(win) = web_sys::window() {
                            if let Ok(scroll_y) = win.scroll_y() {
                                setter.set(scroll_y > offset);
                            }
                        }
                    };
                    update();
                    let callback = Closure::<dyn Fn()>::new(update);
                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!("could not listen for scroll events: {:?}", err);
                    }
                    Box::new(move || {
                        if let Err(err) = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("could not remove scroll listener: {:?}", err);
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            offset,
        );
    }

    *scrolled
}

/// Adds the font stylesheets to `<head>` and turns on smooth anchor scrolling.
#[hook]
pub fn use_document_setup(stylesheets: &'static [&'static str]) {
    use_effect_with_deps(
        move |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(head) = document.head() {
                    for href in stylesheets {
                        let selector = format!("link[href=\"{}\"]", href);
                        if let Ok(Some(_)) = document.query_selector(&selector) {
                            continue;
                        }
                        let link = document
                            .create_element("link")
                            .ok()
                            .and_then(|el| el.dyn_into::<HtmlLinkElement>().ok());
                        if let Some(link) = link {
                            link.set_rel("stylesheet");
                            link.set_href(href);
                            match head.append_child(&link) {
                                Ok(_) => debug!("loaded stylesheet {}", href),
                                Err(err) => warn!("could not add stylesheet {}: {:?}", href, err),
                            }
                        }
                    }
                }
                if let Some(root) = document.document_element() {
                    if let Err(err) = root.class_list().add_1("scroll-smooth") {
                        warn!("could not enable smooth scrolling: {:?}", err);
                    }
                }
            }
            || ()
        },
        (),
    );
}
