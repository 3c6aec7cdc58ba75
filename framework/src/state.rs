//! Shared application state
//!
//! A router owns one [`State`]: a type-keyed map of values shared by every
//! request. Handlers resolve entries with `Request::state::<T>()`.
//!
//! # Example
//!
//! ```rust,ignore
//! let router = routes::register().state(Inventory::default());
//!
//! pub async fn index(req: Request) -> Response {
//!     let inventory = req.state::<Inventory>()?;
//!     // ...
//! }
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Type-keyed store of shared values
#[derive(Clone, Default)]
pub struct State {
    entries: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value`, replacing any previous value of the same type
    pub fn insert<T: Send + Sync + 'static>(&mut self, value: T) {
        self.entries.insert(TypeId::of::<T>(), Arc::new(value));
    }

    /// Resolve a shared handle to the value of type `T`
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.entries
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|entry| entry.downcast::<T>().ok())
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(u32);

    #[test]
    fn values_are_resolved_by_type() {
        let mut state = State::new();
        state.insert(Counter(3));
        state.insert("box office".to_string());

        assert_eq!(state.get::<Counter>().map(|c| c.0), Some(3));
        assert_eq!(state.get::<String>().as_deref().map(String::as_str), Some("box office"));
        assert!(state.get::<u64>().is_none());
    }

    #[test]
    fn inserting_twice_replaces() {
        let mut state = State::new();
        state.insert(Counter(1));
        state.insert(Counter(2));
        assert_eq!(state.get::<Counter>().map(|c| c.0), Some(2));
    }
}
