use crate::shared::core::primitives::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out `<prefix>-0001`, `<prefix>-0002`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}-{n:04}", self.prefix)
    }
}
