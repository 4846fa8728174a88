// Primitives the core needs from its environment.
//
// Purpose
// - Abstract the wall clock and the id source so the store stays deterministic under test.
//
// Responsibilities
// - Define the Clock and IdGenerator ports.
// - Provide the production implementations backed by chrono and uuid.

use chrono::Utc;
use uuid::Uuid;

/// Source of timestamps, in Unix epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Source of record identifiers. Every call must return a value never handed out before.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Time-ordered UUIDs, the same scheme used for stream ids elsewhere in the service.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}
