//! Reducer logic for the task list.
//!
//! Every action either changes the list or is dropped silently. Nothing here
//! can fail: blank text and unknown ids are ordinary inputs that do nothing.

use crate::types::{TaskListAction, TaskListState};
use tasklist_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Environment dependencies for the task list reducer
///
/// The task list is self-contained, so there is nothing to inject.
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskListEnvironment;

impl TaskListEnvironment {
    /// Creates a new `TaskListEnvironment`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Reducer for the task list
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskListReducer;

impl TaskListReducer {
    /// Creates a new `TaskListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TaskListReducer {
    type State = TaskListState;
    type Action = TaskListAction;
    type Environment = TaskListEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TaskListAction::InputChanged { text } => {
                state.set_pending_text(text);
                SmallVec::new()
            },

            // The buffer is only cleared by a successful add, so submitting
            // blank input leaves it as typed.
            TaskListAction::Submit => smallvec![Effect::send(TaskListAction::Add {
                text: state.pending_text().to_owned(),
            })],

            TaskListAction::Add { text } => {
                match state.add(&text) {
                    Some(id) => tracing::debug!(%id, "Task added"),
                    None => tracing::debug!("Ignoring blank task text"),
                }
                SmallVec::new()
            },

            TaskListAction::Toggle { id } => {
                if state.toggle(id) {
                    tracing::debug!(%id, "Task toggled");
                } else {
                    tracing::debug!(%id, "Toggle ignored, no such task");
                }
                SmallVec::new()
            },

            TaskListAction::Remove { id } => {
                if state.remove(id).is_some() {
                    tracing::debug!(%id, "Task removed");
                } else {
                    tracing::debug!(%id, "Remove ignored, no such task");
                }
                SmallVec::new()
            },
        }
    }
}
