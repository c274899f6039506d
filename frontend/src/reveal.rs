//! One-shot "reveal on scroll" controller.
//!
//! A region starts [`RevealState::Hidden`] and moves to
//! [`RevealState::Revealed`] the first time a visibility event reports it on
//! screen by at least the configured [`Threshold`]. The controller then drops
//! its subscription, so a revealed region never hears from the platform again.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RevealError {
    #[error("visibility threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),
    #[error("could not subscribe to visibility changes: {0}")]
    Subscribe(String),
}

/// Fraction of a region's area that has to be inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(fraction: f64) -> Result<Self, RevealError> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(Self(fraction))
        } else {
            Err(RevealError::InvalidThreshold(fraction))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(config::REVEAL_THRESHOLD)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEvent {
    pub intersecting: bool,
    /// Visible fraction of the region, `0.0..=1.0`.
    pub ratio: f64,
}

/// Browsers round `intersectionRatio` from subpixel layout, so the callback
/// for a crossing can report a ratio a hair under the configured threshold.
const RATIO_TOLERANCE: f64 = 0.005;

impl VisibilityEvent {
    pub fn fully_visible() -> Self {
        Self { intersecting: true, ratio: 1.0 }
    }

    #[cfg(test)]
    pub fn visible(ratio: f64) -> Self {
        Self { intersecting: true, ratio }
    }

    #[cfg(test)]
    pub fn hidden() -> Self {
        Self { intersecting: false, ratio: 0.0 }
    }

    pub fn meets(&self, threshold: Threshold) -> bool {
        self.intersecting && self.ratio + RATIO_TOLERANCE >= threshold.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

pub type VisibilityCallback = Rc<dyn Fn(VisibilityEvent)>;

/// Source of viewport intersection notifications.
///
/// Callbacks are delivered on the same thread that subscribed, never from
/// inside `subscribe` itself.
pub trait VisibilitySource {
    type Region;
    type Subscription;

    fn subscribe(
        &mut self,
        region: &Self::Region,
        threshold: Threshold,
        callback: VisibilityCallback,
    ) -> Result<Self::Subscription, RevealError>;

    fn unsubscribe(&mut self, subscription: Self::Subscription);
}

struct Inner<S: VisibilitySource> {
    source: S,
    threshold: Threshold,
    state: RevealState,
    subscription: Option<S::Subscription>,
    on_reveal: Option<Box<dyn FnOnce()>>,
}

impl<S: VisibilitySource> Inner<S> {
    fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.source.unsubscribe(subscription);
            debug!("visibility subscription released");
        }
    }
}

pub struct RevealController<S: VisibilitySource> {
    inner: Rc<RefCell<Inner<S>>>,
}

impl<S: VisibilitySource> RevealController<S> {
    pub fn new(source: S, threshold: Threshold) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                source,
                threshold,
                state: RevealState::Hidden,
                subscription: None,
                on_reveal: None,
            })),
        }
    }

    /// Runs `f` once, right after the Hidden -> Revealed transition.
    pub fn on_reveal(self, f: impl FnOnce() + 'static) -> Self {
        self.inner.borrow_mut().on_reveal = Some(Box::new(f));
        self
    }

    #[cfg(test)]
    pub fn state(&self) -> RevealState {
        self.inner.borrow().state
    }

    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.state() == RevealState::Revealed
    }

    #[cfg(test)]
    pub fn is_observing(&self) -> bool {
        self.inner.borrow().subscription.is_some()
    }

    /// Feeds one event through the state machine. Returns `true` only for the
    /// event that caused the transition.
    pub fn handle_event(&self, event: VisibilityEvent) -> bool {
        transition(&self.inner, event)
    }

    /// Stops watching. Safe to call any number of times.
    pub fn disconnect(&self) {
        self.inner.borrow_mut().release();
    }
}

impl<S: VisibilitySource + 'static> RevealController<S> {
    /// Starts watching `region`. A missing region (not mounted yet) is a
    /// no-op, as is observing a region that is already revealed or watched.
    pub fn observe(&self, region: Option<&S::Region>) -> Result<(), RevealError> {
        let Some(region) = region else {
            debug!("region not mounted, deferring visibility subscription");
            return Ok(());
        };

        let mut inner = self.inner.borrow_mut();
        if inner.state == RevealState::Revealed || inner.subscription.is_some() {
            return Ok(());
        }

        let weak: Weak<RefCell<Inner<S>>> = Rc::downgrade(&self.inner);
        let callback: VisibilityCallback = Rc::new(move |event| {
            if let Some(inner) = weak.upgrade() {
                transition(&inner, event);
            }
        });

        let threshold = inner.threshold;
        let subscription = inner.source.subscribe(region, threshold, callback)?;
        inner.subscription = Some(subscription);
        debug!("watching region at threshold {}", threshold.value());
        Ok(())
    }
}

impl<S: VisibilitySource> Drop for RevealController<S> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.release();
        }
    }
}

fn transition<S: VisibilitySource>(inner: &Rc<RefCell<Inner<S>>>, event: VisibilityEvent) -> bool {
    let on_reveal = {
        let mut inner = inner.borrow_mut();
        if inner.state == RevealState::Revealed || !event.meets(inner.threshold) {
            return false;
        }
        inner.state = RevealState::Revealed;
        inner.release();
        inner.on_reveal.take()
    };

    debug!("region revealed at ratio {:.2}", event.ratio);
    if let Some(on_reveal) = on_reveal {
        on_reveal();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeVisibility;
    use std::cell::Cell;

    fn controller(fake: &FakeVisibility) -> RevealController<FakeVisibility> {
        RevealController::new(fake.clone(), Threshold::default())
    }

    #[test]
    fn threshold_rejects_out_of_range_fractions() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert_eq!(Threshold::new(1.5), Err(RevealError::InvalidThreshold(1.5)));
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
    }

    #[test]
    fn default_threshold_is_ten_percent() {
        assert_eq!(Threshold::default().value(), 0.1);
    }

    #[test]
    fn event_must_intersect_and_reach_threshold() {
        let threshold = Threshold::new(0.25).unwrap();
        assert!(VisibilityEvent::visible(0.25).meets(threshold));
        assert!(!VisibilityEvent::visible(0.2).meets(threshold));
        assert!(!VisibilityEvent { intersecting: false, ratio: 0.9 }.meets(threshold));
    }

    #[test]
    fn ratio_rounded_just_under_threshold_still_counts() {
        let threshold = Threshold::default();
        assert!(VisibilityEvent::visible(0.0999).meets(threshold));
        assert!(VisibilityEvent::visible(0.096).meets(threshold));
        assert!(!VisibilityEvent::visible(0.09).meets(threshold));
    }

    #[test]
    fn zero_threshold_reveals_on_any_intersection() {
        let threshold = Threshold::new(0.0).unwrap();
        assert!(VisibilityEvent::visible(0.0).meets(threshold));
        assert!(!VisibilityEvent::hidden().meets(threshold));
    }

    #[test]
    fn crossing_reported_under_threshold_reveals() {
        let fake = FakeVisibility::default();
        let reveal = controller(&fake);
        reveal.observe(Some(&8)).unwrap();

        fake.fire(8, VisibilityEvent::visible(0.098));

        assert!(reveal.is_revealed());
        assert!(!fake.is_watching(8));
    }

    #[test]
    fn forcing_a_full_reveal_after_failed_subscribe() {
        let fake = FakeVisibility::failing();
        let reveal = controller(&fake);
        assert!(reveal.observe(Some(&9)).is_err());

        assert!(reveal.handle_event(VisibilityEvent::fully_visible()));
        assert!(reveal.is_revealed());
        assert_eq!(fake.unsubscribe_calls(), 0);
    }

    #[test]
    fn missing_region_defers_without_subscribing() {
        let fake = FakeVisibility::default();
        let reveal = controller(&fake);

        reveal.observe(None).unwrap();

        assert_eq!(fake.subscribe_calls(), 0);
        assert!(!reveal.is_observing());
        assert_eq!(reveal.state(), RevealState::Hidden);
    }

    #[test]
    fn first_qualifying_event_reveals_and_unsubscribes() {
        let fake = FakeVisibility::default();
        let reveal = controller(&fake);
        reveal.observe(Some(&1)).unwrap();
        assert!(fake.is_watching(1));

        fake.fire(1, VisibilityEvent::visible(0.05));
        assert!(!reveal.is_revealed());
        assert!(fake.is_watching(1));

        fake.fire(1, VisibilityEvent::visible(0.3));
        assert!(reveal.is_revealed());
        assert!(!fake.is_watching(1));
        assert_eq!(fake.unsubscribe_calls(), 1);
    }

    #[test]
    fn revealed_state_is_terminal() {
        let fake = FakeVisibility::default();
        let reveal = controller(&fake);
        reveal.observe(Some(&7)).unwrap();

        fake.fire(7, VisibilityEvent::visible(1.0));
        assert!(!reveal.handle_event(VisibilityEvent::hidden()));
        assert!(!reveal.handle_event(VisibilityEvent::visible(1.0)));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn no_subscription_activity_after_reveal() {
        let fake = FakeVisibility::default();
        let reveal = controller(&fake);
        reveal.observe(Some(&3)).unwrap();
        fake.fire(3, VisibilityEvent::visible(0.5));

        reveal.observe(Some(&3)).unwrap();
        reveal.disconnect();
        drop(reveal);

        assert_eq!(fake.subscribe_calls(), 1);
        assert_eq!(fake.unsubscribe_calls(), 1);
    }

    #[test]
    fn on_reveal_runs_exactly_once() {
        let fake = FakeVisibility::default();
        let count = Rc::new(Cell::new(0));
        let reveal = controller(&fake).on_reveal({
            let count = count.clone();
            move || count.set(count.get() + 1)
        });
        reveal.observe(Some(&2)).unwrap();

        fake.fire(2, VisibilityEvent::visible(0.8));
        reveal.handle_event(VisibilityEvent::visible(0.9));

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn never_visible_region_still_unsubscribes_on_teardown() {
        let fake = FakeVisibility::default();
        let reveal = controller(&fake);
        reveal.observe(Some(&4)).unwrap();
        fake.fire(4, VisibilityEvent::hidden());

        drop(reveal);

        assert!(!fake.is_watching(4));
        assert_eq!(fake.unsubscribe_calls(), 1);
    }

    #[test]
    fn disconnect_is_idempotent() {
        let fake = FakeVisibility::default();
        let reveal = controller(&fake);
        reveal.observe(Some(&5)).unwrap();

        reveal.disconnect();
        reveal.disconnect();

        assert_eq!(fake.unsubscribe_calls(), 1);
        assert!(!reveal.is_revealed());
    }

    #[test]
    fn observing_twice_keeps_one_subscription() {
        let fake = FakeVisibility::default();
        let reveal = controller(&fake);
        reveal.observe(Some(&6)).unwrap();
        reveal.observe(Some(&6)).unwrap();
        assert_eq!(fake.subscribe_calls(), 1);
    }

    #[test]
    fn regions_are_independent() {
        let fake = FakeVisibility::default();
        let first = controller(&fake);
        let second = controller(&fake);
        first.observe(Some(&10)).unwrap();
        second.observe(Some(&11)).unwrap();

        fake.fire(10, VisibilityEvent::visible(1.0));

        assert!(first.is_revealed());
        assert!(!second.is_revealed());
        assert!(fake.is_watching(11));
    }

    #[test]
    fn subscribe_failure_is_reported() {
        let fake = FakeVisibility::failing();
        let reveal = controller(&fake);
        assert!(matches!(reveal.observe(Some(&1)), Err(RevealError::Subscribe(_))));
        assert!(!reveal.is_observing());
    }
}
