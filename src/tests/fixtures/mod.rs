// Deterministic test doubles and builders shared by the unit tests.

pub mod clock;
pub mod commands;
pub mod ids;
