//! Shared handler state

use crate::store::Store;

/// State shared across handlers
#[derive(Debug, Clone)]
pub struct ApiState {
    pub store: Store,
}

impl ApiState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}
