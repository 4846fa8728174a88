use crate::modules::tasks::core::ports::TaskStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<dyn TaskStore>,
}

impl AppState {
    pub fn new(tasks: Arc<dyn TaskStore>) -> Self {
        Self { tasks }
    }
}
