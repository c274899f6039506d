use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::debug;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CycleError {
    #[error("a message cycle needs at least one message")]
    Empty,
    #[error("rotation interval must be at least 1 ms, got {0:?}")]
    IntervalTooShort(Duration),
}

/// Fixed, non-empty list of messages with a wrapping cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageCycle<T> {
    messages: Vec<T>,
    index: usize,
}

impl<T> MessageCycle<T> {
    pub fn new(messages: Vec<T>) -> Result<Self, CycleError> {
        if messages.is_empty() {
            return Err(CycleError::Empty);
        }
        Ok(Self { messages, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn current(&self) -> &T {
        &self.messages[self.index]
    }

    /// Steps to the next message, wrapping after the last one.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.messages.len();
        self.index
    }
}

pub type TickCallback = Rc<dyn Fn()>;

/// Periodic timer service.
pub trait Ticker {
    type Handle;

    fn schedule(&mut self, interval: Duration, on_tick: TickCallback) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Shortest interval a rotation accepts. Browser timers count whole
/// milliseconds, so anything shorter would fire back to back.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// A [`MessageCycle`] advanced by a timer. The timer lives at most as long as
/// the rotation: dropping it cancels the schedule.
pub struct Rotation<T, K: Ticker> {
    cycle: Rc<RefCell<MessageCycle<T>>>,
    ticker: K,
    handle: Option<K::Handle>,
}

impl<T: 'static, K: Ticker> Rotation<T, K> {
    /// Wraps `cycle` without scheduling anything yet.
    pub fn new(cycle: MessageCycle<T>, ticker: K) -> Self {
        Self {
            cycle: Rc::new(RefCell::new(cycle)),
            ticker,
            handle: None,
        }
    }

    /// Schedules a tick every `interval`, replacing any running schedule.
    /// `on_advance` receives the new index after each step.
    pub fn start(
        &mut self,
        interval: Duration,
        on_advance: impl Fn(usize) + 'static,
    ) -> Result<(), CycleError> {
        if interval < MIN_INTERVAL {
            return Err(CycleError::IntervalTooShort(interval));
        }
        self.stop();

        let on_tick: TickCallback = Rc::new({
            let cycle = Rc::clone(&self.cycle);
            move || {
                let index = cycle.borrow_mut().advance();
                debug!("message cycle advanced to {}", index);
                on_advance(index);
            }
        });
        self.handle = Some(self.ticker.schedule(interval, on_tick));
        debug!(
            "rotating {} messages every {} ms",
            self.cycle.borrow().len(),
            interval.as_millis()
        );
        Ok(())
    }

    pub fn current_index(&self) -> usize {
        self.cycle.borrow().index()
    }

    pub fn with_current<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(self.cycle.borrow().current())
    }
}

impl<T, K: Ticker> Rotation<T, K> {
    /// Cancels the timer. Later calls do nothing.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.ticker.cancel(handle);
            debug!("message rotation stopped");
        }
    }
}

impl<T, K: Ticker> Drop for Rotation<T, K> {
    fn drop(&mut self) {
        self.stop();
    }
}
