// In memory implementation of the TaskStore port.
//
// Purpose
// - Own the map of tasks for a single process. Nothing survives a restart.
//
// Responsibilities
// - Assign ids, versions and timestamps through the injected Clock and IdGenerator.
// - Serialize every mutation behind one write lock, eviction included.
// - Serve reads from a snapshot taken under the read lock.
// - Run the eviction policy before inserting into a store at or above its soft capacity.

use crate::config::StoreConfig;
use crate::modules::tasks::core::eviction::EvictionPolicy;
use crate::modules::tasks::core::ports::{TaskStore, TaskStoreError};
use crate::modules::tasks::core::stats::TaskStats;
use crate::modules::tasks::core::task::Task;
use crate::modules::tasks::use_cases::create_task::command::CreateTask;
use crate::modules::tasks::use_cases::create_task::decide::decide_create;
use crate::modules::tasks::use_cases::update_task::command::{ExpectedVersion, UpdateTask};
use crate::modules::tasks::use_cases::update_task::decide::{UpdateRejected, decide_update};
use crate::shared::core::primitives::{Clock, IdGenerator, SystemClock, UuidV7Generator};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

struct StoredTask {
    task: Task,
    // Sequence number of the insert. Orders tasks created in the same millisecond.
    inserted: u64,
    // Sequence number of the last mutation. Orders eviction candidates with equal updated_at.
    touched: u64,
}

#[derive(Default)]
struct StoreState {
    tasks: HashMap<String, StoredTask>,
    sequence: u64,
}

pub struct InMemoryTaskStore {
    state: RwLock<StoreState>,
    capacity: usize,
    eviction: EvictionPolicy,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl InMemoryTaskStore {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_sources(config, Arc::new(SystemClock), Arc::new(UuidV7Generator))
    }

    pub fn with_sources(
        config: StoreConfig,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            capacity: config.capacity.get(),
            eviction: EvictionPolicy::new(config.eviction_batch_size),
            clock,
            ids,
        }
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.tasks.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn evict_completed(&self, state: &mut StoreState) {
        let victims = self
            .eviction
            .select(state.tasks.values().map(|s| (&s.task, s.touched)));
        if victims.is_empty() {
            debug!(
                size = state.tasks.len(),
                capacity = self.capacity,
                "no completed tasks to evict"
            );
            return;
        }
        for id in &victims {
            state.tasks.remove(id);
        }

        info!(
            evicted = victims.len(),
            remaining = state.tasks.len(),
            "evicted completed tasks"
        );
        if state.tasks.len() >= self.capacity {
            warn!(
                size = state.tasks.len(),
                capacity = self.capacity,
                "store remains at or above capacity; too few completed tasks to evict"
            );
        }
    }
}

#[async_trait::async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, command: CreateTask) -> Result<Task, TaskStoreError> {
        let mut guard = self.state.write().await;
        let task = decide_create(command, self.ids.next_id(), self.clock.now_millis())?;

        if guard.tasks.len() >= self.capacity {
            self.evict_completed(&mut guard);
        }

        let state = &mut *guard;
        state.sequence += 1;
        state.tasks.insert(
            task.id.clone(),
            StoredTask {
                task: task.clone(),
                inserted: state.sequence,
                touched: state.sequence,
            },
        );
        debug!(task_id = %task.id, size = state.tasks.len(), "task created");
        Ok(task)
    }

    async fn get_by_id(&self, id: &str) -> Option<Task> {
        self.state.read().await.tasks.get(id).map(|s| s.task.clone())
    }

    async fn get_all(&self) -> Vec<Task> {
        let guard = self.state.read().await;
        let mut stored: Vec<&StoredTask> = guard.tasks.values().collect();
        stored.sort_by(|a, b| {
            b.task
                .created_at
                .cmp(&a.task.created_at)
                .then(b.inserted.cmp(&a.inserted))
        });
        stored.into_iter().map(|s| s.task.clone()).collect()
    }

    async fn update(
        &self,
        id: &str,
        command: UpdateTask,
        expected_version: ExpectedVersion,
    ) -> Result<Task, TaskStoreError> {
        let mut guard = self.state.write().await;
        let now = self.clock.now_millis();
        let state = &mut *guard;
        let stored = state
            .tasks
            .get_mut(id)
            .ok_or_else(|| TaskStoreError::NotFound { id: id.to_string() })?;

        let next = match decide_update(&stored.task, &command, expected_version, now) {
            Ok(next) => next,
            Err(rejected) => {
                if let UpdateRejected::VersionMismatch { expected, actual } = &rejected {
                    debug!(task_id = %id, expected, actual, "update rejected: version conflict");
                }
                return Err(rejected.into());
            }
        };

        state.sequence += 1;
        stored.task = next.clone();
        stored.touched = state.sequence;
        debug!(task_id = %id, version = next.version, "task updated");
        Ok(next)
    }

    async fn delete(&self, id: &str) -> bool {
        let removed = self.state.write().await.tasks.remove(id).is_some();
        debug!(task_id = %id, removed, "task delete");
        removed
    }

    async fn stats(&self) -> TaskStats {
        TaskStats::tally(self.state.read().await.tasks.values().map(|s| &s.task))
    }
}
