//! In-memory to-do list built on the reducer architecture.
//!
//! The list supports four operations: add a task, toggle it between done
//! and not done, remove it, and count completed versus total tasks. Blank
//! text and unknown ids are silently ignored; nothing in the list can fail.
//!
//! - [`types`]: `Task`, `TaskId`, `TaskListState` and `TaskListAction`
//! - [`reducer`]: `TaskListReducer`, which applies actions to the state
//! - [`theme`] and [`view`]: swappable colour palettes and terminal rendering
//! - [`command`] and [`shell`]: line-oriented input bound to store actions
//! - [`config`]: environment-based configuration
//!
//! # Quick Start
//!
//! ```no_run
//! use tasklist::{new_store, TaskId, TaskListAction};
//! use tasklist_runtime::StoreConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = new_store(StoreConfig::default());
//!
//! store.send(TaskListAction::Add { text: "Buy milk".to_string() }).await?;
//! store.send(TaskListAction::Toggle { id: TaskId::new(1) }).await?;
//!
//! let summary = store.state(|s| s.summary()).await;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod config;
pub mod reducer;
pub mod shell;
pub mod theme;
pub mod types;
pub mod view;

pub use command::{Command, CommandError};
pub use config::{Config, ConfigError};
pub use reducer::{TaskListEnvironment, TaskListReducer};
pub use shell::{new_store, Shell, ShellError, TaskListStore};
pub use theme::{Palette, ThemeName};
pub use types::{Summary, Task, TaskId, TaskListAction, TaskListState};
