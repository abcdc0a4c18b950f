//! Frame-change notification feed.
//!
//! The host tool steps through logged frames and tells interested parties
//! when the current frame changes. Everything here runs on the UI event
//! loop, so the registry is a plain single-threaded listener list.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

/// A frame-change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataEvent {
    /// Index of the frame now current.
    pub frame_index: usize,
}

/// Receives frame-change notifications from the [`DataFeed`].
pub trait DataListener {
    fn frame_changed(&mut self, event: &DataEvent);
}

/// Listener registry for data updates, owned by the host application.
#[derive(Default)]
pub struct DataFeed {
    listeners: Vec<Rc<RefCell<dyn DataListener>>>,
}

impl DataFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for the lifetime of the feed.
    pub fn add_listener(&mut self, listener: Rc<RefCell<dyn DataListener>>) {
        self.listeners.push(listener);
    }

    /// Delivers `event` to every registered listener, in registration order.
    pub fn dispatch(&self, event: DataEvent) {
        trace!(frame = event.frame_index, listeners = self.listeners.len(), "dispatching data event");
        for listener in &self.listeners {
            listener.borrow_mut().frame_changed(&event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
