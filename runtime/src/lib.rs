//! # Task List Runtime
//!
//! The Store runtime that coordinates reducer execution and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: Owns the state and runs the reducer
//! - **Feedback loop**: `Effect::Send` actions are reduced before `send` returns
//!
//! Every call to [`Store::send`] runs to completion while holding the state's
//! write lock, so actions are processed strictly one after another.
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tasklist_core::reducer::Reducer;
use tokio::sync::RwLock;

pub use error::StoreError;
pub use store::Store;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// Returned when `send()` is called after `shutdown()`.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// A chain of `Effect::Send` feedback actions grew past the configured depth
        ///
        /// State changes made before the limit was hit are kept.
        #[error("Feedback chain exceeded maximum depth of {0}")]
        FeedbackLimitExceeded(usize),
    }
}

/// Store configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of nested `Effect::Send` hops for a single `send()`
    pub max_feedback_depth: usize,
}

impl StoreConfig {
    /// Default maximum feedback depth
    pub const DEFAULT_MAX_FEEDBACK_DEPTH: usize = 32;

    /// Creates a configuration with the given maximum feedback depth
    #[must_use]
    pub const fn new(max_feedback_depth: usize) -> Self {
        Self { max_feedback_depth }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FEEDBACK_DEPTH)
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{Arc, AtomicBool, Ordering, Reducer, RwLock, StoreConfig, StoreError, VecDeque};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, written only inside `send`)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        config: StoreConfig,
        shutdown: Arc<AtomicBool>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: std::fmt::Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with an explicit configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                config,
                shutdown: Arc::new(AtomicBool::new(false)),
            }
        }

        /// Returns the store's configuration
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Reduces every action fed back through `Effect::Send`, in order
        /// 4. Releases the lock
        ///
        /// # Errors
        ///
        /// - [`StoreError::ShutdownInProgress`] if `shutdown()` was called.
        /// - [`StoreError::FeedbackLimitExceeded`] if feedback actions nest
        ///   deeper than [`StoreConfig::max_feedback_depth`].
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            if self.shutdown.load(Ordering::SeqCst) {
                tracing::warn!("Rejecting action, store is shutting down");
                return Err(StoreError::ShutdownInProgress);
            }

            let mut state = self.state.write().await;
            let mut queue = VecDeque::from([(action, 0_usize)]);

            while let Some((action, depth)) = queue.pop_front() {
                if depth > self.config.max_feedback_depth {
                    tracing::error!(depth, "Feedback chain too deep, aborting send");
                    return Err(StoreError::FeedbackLimitExceeded(
                        self.config.max_feedback_depth,
                    ));
                }

                tracing::trace!(?action, depth, "Reducing action");
                let effects = self.reducer.reduce(&mut *state, action, &self.environment);
                metrics::counter!("store.actions.processed").increment(1);

                for effect in effects {
                    for feedback in effect.into_actions() {
                        metrics::counter!("store.effects.feedback").increment(1);
                        queue.push_back((feedback, depth + 1));
                    }
                }
            }

            Ok(())
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.tasks().len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Stop accepting new actions
        ///
        /// Actions already being reduced finish normally.
        pub fn shutdown(&self) {
            if !self.shutdown.swap(true, Ordering::SeqCst) {
                tracing::info!("Store shutdown initiated");
                metrics::counter!("store.shutdown.initiated").increment(1);
            }
        }

        /// Returns `true` once `shutdown()` has been called
        #[must_use]
        pub fn is_shutdown(&self) -> bool {
            self.shutdown.load(Ordering::SeqCst)
        }
    }
}
