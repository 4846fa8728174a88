// Composition root for the task store service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in memory store and share it with the HTTP handlers.
// - Map store results onto the JSON envelope.

pub mod envelope;
pub mod http;
pub mod state;
