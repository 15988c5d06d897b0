use std::cell::Cell;
use std::rc::Rc;

/// Subscription slot on the context-wide pointer stream.
///
/// Only one drag session may follow the pointer outside the panel at a time. A session
/// holds the [`ListenerGuard`]; the slot is free again once the guard is dropped.
#[derive(Debug, Clone, Default)]
pub struct ViewportListeners {
    subscribed: Rc<Cell<bool>>,
}

impl ViewportListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Option<ListenerGuard> {
        if self.subscribed.replace(true) {
            return None;
        }
        tracing::trace!("viewport pointer listeners attached");
        Some(ListenerGuard {
            subscribed: self.subscribed.clone(),
        })
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed.get()
    }
}

#[derive(Debug)]
pub struct ListenerGuard {
    subscribed: Rc<Cell<bool>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.subscribed.set(false);
        tracing::trace!("viewport pointer listeners detached");
    }
}
