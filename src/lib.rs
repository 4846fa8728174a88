// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod config;

pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod tasks {
        pub mod core {
            pub mod eviction;
            pub mod ports;
            pub mod stats;
            pub mod task;
        }
        pub mod use_cases {
            pub mod create_task {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_task {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_task {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_tasks {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_task {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod task_stats {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod task_store_in_memory;
            }
        }
    }
}

pub mod shell;

pub use config::{ConfigError, ShellConfig, StoreConfig};
pub use modules::tasks::adapters::outbound::task_store_in_memory::InMemoryTaskStore;
pub use modules::tasks::core::ports::{TaskStore, TaskStoreError};
pub use modules::tasks::core::stats::TaskStats;
pub use modules::tasks::core::task::{Task, ValidationError};
pub use modules::tasks::use_cases::create_task::command::CreateTask;
pub use modules::tasks::use_cases::update_task::command::{ExpectedVersion, UpdateTask};
