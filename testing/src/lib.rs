//! # Task List Testing
//!
//! Testing utilities and helpers for the task list reducer architecture.
//!
//! This crate provides:
//! - [`ReducerTest`]: a Given-When-Then harness for a single reducer step
//! - [`assertions`]: helpers for checking returned effects
//! - [`replay`]: folding a sequence of actions through a reducer
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(TaskListReducer::new())
//!     .with_env(TaskListEnvironment::new())
//!     .given_state(TaskListState::new())
//!     .when_action(TaskListAction::Add { text: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.tasks().len(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```


pub use reducer_test::{assertions, ReducerTest};

use tasklist_core::reducer::Reducer;

/// Reduces every action in `actions` against `state`, in order
///
/// Actions fed back through `Effect::Send` are reduced immediately after the
/// action that produced them, the same way the runtime Store processes them.
/// Returns the final state.
pub fn replay<R, I>(reducer: &R, env: &R::Environment, mut state: R::State, actions: I) -> R::State
where
    R: Reducer,
    I: IntoIterator<Item = R::Action>,
{
    for action in actions {
        let mut pending = std::collections::VecDeque::from([action]);
        while let Some(action) = pending.pop_front() {
            for effect in reducer.reduce(&mut state, action, env) {
                pending.extend(effect.into_actions());
            }
        }
    }
    state
}
