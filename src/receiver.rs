//! In-process log receivers.
//!
//! Receivers are notified once per accepted, non-filtered log call with the
//! raw message text, independent of the console and file sinks.

use std::sync::Arc;

/// Capability to receive accepted log messages.
///
/// The message arrives without severity or time prefixes.
pub trait Receive: Send + Sync {
    fn receive(&self, message: &str);
}

/// Ordered set of registered receivers.
///
/// Registration order is notification order. Duplicates are allowed; the same
/// handle registered twice is notified twice.
#[derive(Default)]
pub struct ReceiverRegistry {
    receivers: Vec<Arc<dyn Receive>>,
}

impl ReceiverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a receiver; no uniqueness check is made.
    pub fn add(&mut self, receiver: Arc<dyn Receive>) {
        self.receivers.push(receiver);
    }

    /// Remove the first registration matching `receiver` by identity.
    ///
    /// Removing a handle that was never added is a no-op.
    pub fn remove(&mut self, receiver: &Arc<dyn Receive>) {
        if let Some(pos) = self
            .receivers
            .iter()
            .position(|registered| Arc::ptr_eq(registered, receiver))
        {
            self.receivers.remove(pos);
        }
    }

    pub fn clear(&mut self) {
        self.receivers.clear();
    }

    pub fn len(&self) -> usize {
        self.receivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receivers.is_empty()
    }

    /// Notify every receiver synchronously, in registration order, on the
    /// caller's thread.
    ///
    /// There is no error isolation: a panicking receiver aborts the remaining
    /// notifications for this message.
    pub fn notify_all(&self, message: &str) {
        for receiver in &self.receivers {
            receiver.receive(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<String>>,
    }

    impl Receive for Recorder {
        fn receive(&self, message: &str) {
            self.seen.lock().unwrap().push(message.to_string());
        }
    }

    impl Recorder {
        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[test]
    fn test_notify_all_in_registration_order() {
        let mut registry = ReceiverRegistry::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        struct Tagged {
            tag: &'static str,
            order: Arc<Mutex<Vec<&'static str>>>,
        }
        impl Receive for Tagged {
            fn receive(&self, _message: &str) {
                self.order.lock().unwrap().push(self.tag);
            }
        }

        registry.add(Arc::new(Tagged {
            tag: "first",
            order: Arc::clone(&order),
        }));
        registry.add(Arc::new(Tagged {
            tag: "second",
            order: Arc::clone(&order),
        }));

        registry.notify_all("hello");
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_duplicate_registration_is_notified_twice() {
        let mut registry = ReceiverRegistry::new();
        let recorder = Arc::new(Recorder::default());

        registry.add(recorder.clone());
        registry.add(recorder.clone());
        registry.notify_all("hello");

        assert_eq!(recorder.seen(), vec!["hello", "hello"]);
    }

    #[test]
    fn test_remove_drops_first_occurrence_only() {
        let mut registry = ReceiverRegistry::new();
        let recorder = Arc::new(Recorder::default());

        registry.add(recorder.clone());
        registry.add(recorder.clone());

        let handle: Arc<dyn Receive> = recorder.clone();
        registry.remove(&handle);
        assert_eq!(registry.len(), 1);

        registry.notify_all("once");
        assert_eq!(recorder.seen(), vec!["once"]);
    }

    #[test]
    fn test_remove_absent_handle_is_a_no_op() {
        let mut registry = ReceiverRegistry::new();
        let registered = Arc::new(Recorder::default());
        let stranger: Arc<dyn Receive> = Arc::new(Recorder::default());

        registry.add(registered);
        registry.remove(&stranger);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_clear_then_notify_reaches_nobody() {
        let mut registry = ReceiverRegistry::new();
        let recorder = Arc::new(Recorder::default());

        registry.add(recorder.clone());
        registry.clear();
        assert!(registry.is_empty());

        registry.notify_all("lost");
        assert!(recorder.seen().is_empty());
    }
}
