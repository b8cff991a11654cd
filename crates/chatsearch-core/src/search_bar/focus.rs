//! Deferred focus scheduling.
//!
//! Focus changes are never applied while the parent is still rendering.
//! They are posted to a queue that the event loop drains on its next turn,
//! after every state update of the current turn has been applied.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// What to do with the input when the queue is drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    Focus,
    Blur,
}

impl FocusRequest {
    /// The request matching the parent's focus intent.
    pub fn from_intent(is_focussed: bool, keep_focussed: bool) -> Self {
        if is_focussed || keep_focussed {
            FocusRequest::Focus
        } else {
            FocusRequest::Blur
        }
    }
}

/// Capability handed to the parent to focus the bar from outside the
/// normal props flow, e.g. a global shortcut.
///
/// Requests go through the same deferred queue as prop-driven focus changes.
/// Once the bar is dropped they are discarded.
#[derive(Debug, Clone)]
pub struct FocusHandle {
    tx: UnboundedSender<FocusRequest>,
}

impl FocusHandle {
    pub fn focus(&self) {
        let _ = self.tx.send(FocusRequest::Focus);
    }

    pub fn blur(&self) {
        let _ = self.tx.send(FocusRequest::Blur);
    }
}

/// FIFO of pending focus requests.
pub(crate) struct FocusQueue {
    tx: UnboundedSender<FocusRequest>,
    rx: UnboundedReceiver<FocusRequest>,
}

impl FocusQueue {
    pub(crate) fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    pub(crate) fn schedule(&self, request: FocusRequest) {
        let _ = self.tx.send(request);
    }

    pub(crate) fn handle(&self) -> FocusHandle {
        FocusHandle {
            tx: self.tx.clone(),
        }
    }

    pub(crate) fn next(&mut self) -> Option<FocusRequest> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_intent() {
        assert_eq!(FocusRequest::from_intent(true, false), FocusRequest::Focus);
        assert_eq!(FocusRequest::from_intent(false, true), FocusRequest::Focus);
        assert_eq!(FocusRequest::from_intent(true, true), FocusRequest::Focus);
        assert_eq!(FocusRequest::from_intent(false, false), FocusRequest::Blur);
    }

    #[test]
    fn test_queue_is_fifo_across_handles() {
        let mut queue = FocusQueue::new();
        let handle = queue.handle();

        queue.schedule(FocusRequest::Blur);
        handle.focus();

        assert_eq!(queue.next(), Some(FocusRequest::Blur));
        assert_eq!(queue.next(), Some(FocusRequest::Focus));
        assert_eq!(queue.next(), None);
    }

    #[test]
    fn test_handle_outliving_queue_is_harmless() {
        let queue = FocusQueue::new();
        let handle = queue.handle();
        drop(queue);

        handle.focus();
        handle.blur();
    }
}
