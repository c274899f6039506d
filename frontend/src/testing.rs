//! In-memory stand-ins for the browser services, driven synchronously by tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::cycle::{TickCallback, Ticker};
use crate::reveal::{RevealError, Threshold, VisibilityCallback, VisibilityEvent, VisibilitySource};

#[derive(Default)]
struct Registry {
    watched: Vec<(u64, u32, VisibilityCallback)>,
    next_id: u64,
    subscribes: usize,
    unsubscribes: usize,
}

/// Visibility source whose events are fired by hand. Regions are plain ids.
#[derive(Clone, Default)]
pub struct FakeVisibility {
    registry: Rc<RefCell<Registry>>,
    fail: bool,
}

impl FakeVisibility {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    /// Delivers `event` to every live subscription on `region`.
    pub fn fire(&self, region: u32, event: VisibilityEvent) {
        let callbacks: Vec<VisibilityCallback> = self
            .registry
            .borrow()
            .watched
            .iter()
            .filter(|(_, watched, _)| *watched == region)
            .map(|(_, _, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback(event);
        }
    }

    pub fn is_watching(&self, region: u32) -> bool {
        self.registry.borrow().watched.iter().any(|(_, watched, _)| *watched == region)
    }

    pub fn subscribe_calls(&self) -> usize {
        self.registry.borrow().subscribes
    }

    pub fn unsubscribe_calls(&self) -> usize {
        self.registry.borrow().unsubscribes
    }
}

impl VisibilitySource for FakeVisibility {
    type Region = u32;
    type Subscription = u64;

    fn subscribe(
        &mut self,
        region: &u32,
        _threshold: Threshold,
        callback: VisibilityCallback,
    ) -> Result<u64, RevealError> {
        if self.fail {
            return Err(RevealError::Subscribe("observer unavailable".into()));
        }
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribes += 1;
        registry.watched.push((id, *region, callback));
        Ok(id)
    }

    fn unsubscribe(&mut self, subscription: u64) {
        let mut registry = self.registry.borrow_mut();
        registry.unsubscribes += 1;
        registry.watched.retain(|(id, _, _)| *id != subscription);
    }
}

struct Timer {
    id: u64,
    interval: Duration,
    next_due: Duration,
    callback: TickCallback,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    timers: Vec<Timer>,
    next_id: u64,
    cancelled: usize,
}

/// Periodic timer on a fake clock. Time only moves through [`ManualTicker::advance`].
#[derive(Clone, Default)]
pub struct ManualTicker {
    clock: Rc<RefCell<Clock>>,
}

impl ManualTicker {
    /// Moves the clock forward, firing every tick that falls due in order.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;
        loop {
            let due = {
                let mut clock = self.clock.borrow_mut();
                let fired = clock
                    .timers
                    .iter_mut()
                    .filter(|timer| timer.next_due <= target)
                    .min_by_key(|timer| timer.next_due)
                    .map(|timer| {
                        let at = timer.next_due;
                        timer.next_due += timer.interval;
                        (at, timer.callback.clone())
                    });
                fired.map(|(at, callback)| {
                    clock.now = at;
                    callback
                })
            };
            match due {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }

    pub fn active_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    pub fn cancelled(&self) -> usize {
        self.clock.borrow().cancelled
    }
}

impl Ticker for ManualTicker {
    type Handle = u64;

    fn schedule(&mut self, interval: Duration, on_tick: TickCallback) -> u64 {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let next_due = clock.now + interval;
        clock.timers.push(Timer { id, interval, next_due, callback: on_tick });
        id
    }

    fn cancel(&mut self, handle: u64) {
        let mut clock = self.clock.borrow_mut();
        clock.cancelled += 1;
        clock.timers.retain(|timer| timer.id != handle);
    }
}
