use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{window, Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::motion::{page_progress, Keyframes, ScrollOffset, Spring, SpringConfig};

const FRAME_MS: u32 = 16;

/// Progress of `target` through `offset`, re-measured on every scroll and resize.
#[hook]
pub fn use_scroll_progress(target: NodeRef, offset: ScrollOffset) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    let measure = {
        let progress = progress.clone();
        Rc::new(move || {
            if let Some(value) = measure_element(&target, offset) {
                progress.set(value);
            }
        })
    };

    {
        let measure = measure.clone();
        use_event_with_window("scroll", move |_: Event| measure());
    }
    {
        let measure = measure.clone();
        use_event_with_window("resize", move |_: Event| measure());
    }

    // Initial measurement once the node is mounted
    use_effect_with_deps(
        move |_| {
            measure();
            || ()
        },
        (),
    );

    *progress
}

/// Fraction of the whole document that has been scrolled.
#[hook]
pub fn use_page_progress() -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    let measure = {
        let progress = progress.clone();
        Rc::new(move || {
            if let Some(value) = measure_page() {
                progress.set(value);
            }
        })
    };

    {
        let measure = measure.clone();
        use_event_with_window("scroll", move |_: Event| measure());
    }
    {
        let measure = measure.clone();
        use_event_with_window("resize", move |_: Event| measure());
    }

    use_effect_with_deps(
        move |_| {
            measure();
            || ()
        },
        (),
    );

    *progress
}

/// Smooths `target` through a spring, one timeout per frame until it settles.
#[hook]
pub fn use_spring(target: f64, config: SpringConfig) -> f64 {
    let spring = use_mut_ref(|| Spring::new(config, target));
    let position = use_state_eq(|| target);

    {
        let position = position.clone();
        use_effect_with_deps(
            move |&(target, _)| {
                let settled = spring.borrow().is_settled(target);
                if settled {
                    // Moves smaller than the rest threshold never schedule a frame
                    let resting = {
                        let mut spring = spring.borrow_mut();
                        spring.snap_to(target);
                        spring.position()
                    };
                    position.set(resting);
                }
                let pending = (!settled).then(|| {
                    Timeout::new(FRAME_MS, move || {
                        let next = spring.borrow_mut().step(target, f64::from(FRAME_MS) / 1000.0);
                        position.set(next);
                    })
                });
                move || drop(pending)
            },
            (target, *position),
        );
    }

    *position
}

/// Flips to `true` the first time `amount` of `target` is visible, then stays there.
#[hook]
pub fn use_reveal_once(target: NodeRef, amount: f64) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let observation = observe_once(&target, amount, revealed);
                move || {
                    if let Some((observer, _callback)) = observation {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    *revealed
}

/// Logs any malformed table once on mount. Tables are constants, so this only
/// ever fires after a bad edit.
#[hook]
pub fn use_checked_keyframes(tables: &'static [(&'static str, Keyframes)]) {
    use_effect_with_deps(
        move |_| {
            if cfg!(debug_assertions) {
                for (name, table) in tables {
                    if let Err(err) = table.validate() {
                        error!("keyframes {name}: {err}");
                    }
                }
            }
            || ()
        },
        (),
    );
}

fn measure_element(target: &NodeRef, offset: ScrollOffset) -> Option<f64> {
    let element = target.cast::<Element>()?;
    let viewport_height = window()?.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(offset.progress(rect.top(), rect.height(), viewport_height))
}

fn measure_page() -> Option<f64> {
    let window = window()?;
    let root = window.document()?.document_element()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(page_progress(scroll_y, f64::from(root.scroll_height()), viewport_height))
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    target: &NodeRef,
    amount: f64,
    revealed: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, EntriesCallback)> {
    let Some(element) = target.cast::<Element>() else {
        warn!("reveal target is not mounted");
        return None;
    };

    let on_entries = {
        let revealed = revealed.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    entry.is_intersecting() && entry.intersection_ratio() >= amount
                });
                if visible {
                    revealed.set(true);
                    observer.disconnect();
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(amount));

    match IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            debug!("observing reveal target at threshold {amount}");
            Some((observer, on_entries))
        }
        Err(err) => {
            // Without an observer the content would stay hidden forever
            warn!("IntersectionObserver unavailable, revealing immediately: {err:?}");
            revealed.set(true);
            None
        }
    }
}
