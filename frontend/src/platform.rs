//! Browser implementations of the visibility and timer services.

use std::time::Duration;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::cycle::{TickCallback, Ticker};
use crate::reveal::{RevealError, Threshold, VisibilityCallback, VisibilityEvent, VisibilitySource};

/// `IntersectionObserver`-backed visibility source, one observer per region.
#[derive(Default)]
pub struct DomVisibility;

pub struct DomSubscription {
    observer: IntersectionObserver,
    target: Element,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilitySource for DomVisibility {
    type Region = Element;
    type Subscription = DomSubscription;

    fn subscribe(
        &mut self,
        region: &Element,
        threshold: Threshold,
        callback: VisibilityCallback,
    ) -> Result<DomSubscription, RevealError> {
        let closure = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    callback(VisibilityEvent {
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.value()));

        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
                .map_err(describe)?;
        observer.observe(region);

        Ok(DomSubscription {
            observer,
            target: region.clone(),
            _callback: closure,
        })
    }

    fn unsubscribe(&mut self, subscription: DomSubscription) {
        subscription.observer.unobserve(&subscription.target);
        subscription.observer.disconnect();
    }
}

fn describe(err: JsValue) -> RevealError {
    RevealError::Subscribe(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// `setInterval` delay for `interval`: whole milliseconds, at least 1.
fn interval_millis(interval: Duration) -> u32 {
    u32::try_from(interval.as_millis()).unwrap_or(u32::MAX).max(1)
}

/// `setInterval` through gloo. Cancelling drops the interval, which clears it.
#[derive(Default)]
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    type Handle = Interval;

    fn schedule(&mut self, interval: Duration, on_tick: TickCallback) -> Interval {
        Interval::new(interval_millis(interval), move || on_tick())
    }

    fn cancel(&mut self, handle: Interval) {
        drop(handle);
    }
}
