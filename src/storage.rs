//! Last-chat-message persistence.
//!
//! A single localStorage key remembers what the visitor typed so the
//! "submitted" chat view can echo it back. Purely optimistic display data:
//! the store may be empty or unavailable, in which case the chat falls
//! back to a placeholder. The trait keeps the capability injectable so the
//! fallback logic is testable without a browser.

const LAST_MESSAGE_KEY: &str = "last_message";

pub const MESSAGE_PLACEHOLDER: &str = "Your message";

pub trait MessageStore {
    fn load(&self) -> Option<String>;
    fn save(&self, message: &str);
}

/// localStorage-backed store. Missing storage degrades to a no-op.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct BrowserStore;

impl MessageStore for BrowserStore {
    fn load(&self) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(LAST_MESSAGE_KEY)
            .ok()
            .flatten()
    }

    fn save(&self, message: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() {
            let _ = storage.set_item(LAST_MESSAGE_KEY, message);
        }
    }
}

/// What the submitted chat view echoes back to the visitor.
pub fn echoed_message(store: &impl MessageStore) -> String {
    store
        .load()
        .unwrap_or_else(|| MESSAGE_PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        last: RefCell<Option<String>>,
    }

    impl MessageStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.last.borrow().clone()
        }

        fn save(&self, message: &str) {
            *self.last.borrow_mut() = Some(message.to_string());
        }
    }

    #[test]
    fn empty_store_falls_back_to_placeholder() {
        let store = MemoryStore::default();
        assert_eq!(echoed_message(&store), MESSAGE_PLACEHOLDER);
    }

    #[test]
    fn last_write_wins() {
        let store = MemoryStore::default();
        store.save("first draft");
        store.save("final question");
        assert_eq!(echoed_message(&store), "final question");
    }
}
