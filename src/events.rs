//! Synchronous event fan-out.

/// Registered callbacks for one event class.
///
/// Callbacks run synchronously, in registration order, on every
/// [`emit`](Self::emit). Nothing is throttled or coalesced.
pub struct Dispatcher<T> {
    handlers: Vec<Box<dyn FnMut(&T)>>,
}

impl<T> Default for Dispatcher<T> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<T> Dispatcher<T> {
    /// Empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback.
    pub fn subscribe(&mut self, handler: impl FnMut(&T) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Deliver `event` to every callback.
    pub fn emit(&mut self, event: &T) {
        for handler in &mut self.handlers {
            handler(event);
        }
    }

    /// Number of registered callbacks.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no callback is registered.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
