use labgate_common::{Error, Result};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use std::rc::Rc;
use std::time::Duration;

/// A scheduled callback that can still be called off
pub trait PendingTimeout {
    fn cancel(self: Box<Self>);
}

/// Source of one-shot timeouts
pub trait TimeoutScheduler {
    fn set_timeout(&self, cb: Box<dyn FnOnce()>, delay: Duration) -> Result<Box<dyn PendingTimeout>>;
}

/// `window.setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimeouts;

impl TimeoutScheduler for BrowserTimeouts {
    fn set_timeout(&self, cb: Box<dyn FnOnce()>, delay: Duration) -> Result<Box<dyn PendingTimeout>> {
        let handle = set_timeout_with_handle(cb, delay).map_err(|err| Error::Timer(format!("{:?}", err)))?;
        Ok(Box::new(handle))
    }
}

impl PendingTimeout for TimeoutHandle {
    fn cancel(self: Box<Self>) {
        self.clear();
    }
}

/// One-shot timeout owned by a view. At most one callback is pending;
/// scheduling again replaces it.
#[derive(Clone, Copy)]
pub struct ResetTimer {
    scheduler: StoredValue<Rc<dyn TimeoutScheduler>>,
    pending: StoredValue<Option<Box<dyn PendingTimeout>>>,
}

impl ResetTimer {
    pub fn new() -> Self {
        Self::with_scheduler(BrowserTimeouts)
    }

    pub fn with_scheduler(scheduler: impl TimeoutScheduler + 'static) -> Self {
        let scheduler: Rc<dyn TimeoutScheduler> = Rc::new(scheduler);
        Self {
            scheduler: store_value(scheduler),
            pending: store_value(None),
        }
    }

    /// Run `cb` after `delay`, replacing any callback still pending
    pub fn schedule(&self, delay: Duration, cb: impl FnOnce() + 'static) -> Result<()> {
        self.cancel();

        let pending = self.pending;
        let fire = move || {
            pending.try_update_value(|slot| *slot = None);
            cb();
        };

        let scheduler = self
            .scheduler
            .try_with_value(Rc::clone)
            .ok_or_else(|| Error::Timer("timer disposed".to_string()))?;
        let timeout = scheduler.set_timeout(Box::new(fire), delay)?;
        self.pending.try_update_value(|slot| *slot = Some(timeout));
        Ok(())
    }

    /// Clear the pending timeout. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        match self.pending.try_update_value(Option::take).flatten() {
            Some(timeout) => {
                timeout.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.try_with_value(Option::is_some).unwrap_or(false)
    }
}

impl Default for ResetTimer {
    fn default() -> Self {
        Self::new()
    }
}
