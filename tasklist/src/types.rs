//! Domain types for the task list.
//!
//! A task list is an ordered collection of tasks that can be added, toggled
//! between done and not done, and removed. [`TaskListState`] owns the list,
//! the identifier counter and the text the user is still typing, and is the
//! only place those can change.

use serde::{Deserialize, Serialize};

/// Unique identifier for a task
///
/// Identifiers are handed out by [`TaskListState`] starting at 1 and are
/// never reused, even after the task they named is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// The first identifier a fresh list hands out
    pub const FIRST: Self = Self(1);

    /// Creates a `TaskId` from a raw value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// `None` once the id space is used up
    const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A single task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// What needs doing; never empty after trimming
    pub text: String,
    /// Whether the task is done
    pub completed: bool,
}

impl Task {
    /// Creates a task that is not yet done
    #[must_use]
    pub const fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Completed versus total task counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of tasks marked done
    pub completed: usize,
    /// Number of tasks in the list
    pub total: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {} tasks completed", self.completed, self.total)
    }
}

/// State of the task list
///
/// Fields are private so that the identifier invariants hold: ids in
/// `tasks` are pairwise distinct and always below `next_id`, and no task has
/// blank text. Every mutation that cannot apply is a silent no-op.
///
/// The state serializes for inspection but cannot be deserialized: the only
/// way to build one is [`TaskListState::new`] followed by mutations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TaskListState {
    tasks: Vec<Task>,
    next_id: TaskId,
    pending_text: String,
}

impl TaskListState {
    /// Creates an empty task list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
            pending_text: String::new(),
        }
    }

    /// Tasks in insertion order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The identifier the next added task will receive
    #[must_use]
    pub const fn next_id(&self) -> TaskId {
        self.next_id
    }

    /// Text typed but not yet submitted
    #[must_use]
    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    /// Returns a task by ID
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Returns `true` if the list has no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Replaces the not-yet-submitted input text, verbatim
    pub fn set_pending_text(&mut self, text: impl Into<String>) {
        self.pending_text = text.into();
    }

    /// Appends a task with the trimmed `raw_text`
    ///
    /// Blank text is ignored and `None` is returned, as is any add once the
    /// id space is exhausted. On success the pending input is cleared and the
    /// new task's id is returned.
    pub fn add(&mut self, raw_text: &str) -> Option<TaskId> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id;
        let Some(next_id) = id.next() else {
            tracing::warn!(%id, "Task ids exhausted, ignoring add");
            return None;
        };
        self.tasks.push(Task::new(id, text.to_owned()));
        self.next_id = next_id;
        self.pending_text.clear();
        Some(id)
    }

    /// Flips the completion flag of the task with `id`
    ///
    /// Returns `false` if no such task exists.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            },
            None => false,
        }
    }

    /// Removes the task with `id`, keeping the others in order
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Counts completed and total tasks
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            completed: self.tasks.iter().filter(|task| task.completed).count(),
            total: self.tasks.len(),
        }
    }
}

impl Default for TaskListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a user can do to the task list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskListAction {
    /// The input box now holds `text`
    InputChanged {
        /// Full input contents
        text: String,
    },

    /// Add whatever is in the input box (Enter key or Add button)
    Submit,

    /// Add a task with the given text
    Add {
        /// Raw text, trimmed before use
        text: String,
    },

    /// Flip a task between done and not done
    Toggle {
        /// Task to toggle
        id: TaskId,
    },

    /// Delete a task
    Remove {
        /// Task to delete
        id: TaskId,
    },
}
