//! Trailing-edge debounce.
//!
//! Each [`Debounced`] owns one timer slot. A call cancels whatever is pending
//! in that slot and schedules a fresh timer, so only the last call inside the
//! quiet window runs, with that call's arguments.

use leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Something that can run a callback later and cancel it again.
pub trait TimerHost {
    type Handle;

    /// Returns `None` when the timer could not be scheduled.
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// `window.setTimeout` through `leptos_dom`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl TimerHost for BrowserTimers {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
        match set_timeout_with_handle(callback, Duration::from_millis(delay_ms.into())) {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!("setTimeout failed: {e:?}");
                None
            }
        }
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

struct Slot<A, H: TimerHost> {
    host: H,
    wait_ms: u32,
    func: Box<dyn Fn(A)>,
    pending: RefCell<Option<H::Handle>>,
}

pub struct Debounced<A, H: TimerHost = BrowserTimers> {
    slot: Rc<Slot<A, H>>,
}

impl<A, H: TimerHost> Clone for Debounced<A, H> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<A: 'static, H: TimerHost + 'static> Debounced<A, H> {
    pub fn new(host: H, wait_ms: u32, func: impl Fn(A) + 'static) -> Self {
        Self {
            slot: Rc::new(Slot {
                host,
                wait_ms,
                func: Box::new(func),
                pending: RefCell::new(None),
            }),
        }
    }

    pub fn call(&self, args: A) {
        self.cancel();

        let slot = Rc::clone(&self.slot);
        let handle = self.slot.host.schedule(
            self.slot.wait_ms,
            Box::new(move || {
                slot.pending.borrow_mut().take();
                (slot.func)(args);
            }),
        );
        *self.slot.pending.borrow_mut() = handle;
    }

    /// Drops the pending invocation, if any.
    pub fn cancel(&self) {
        let pending = self.slot.pending.borrow_mut().take();
        if let Some(handle) = pending {
            self.slot.host.cancel(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot.pending.borrow().is_some()
    }
}
