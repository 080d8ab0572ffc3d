//! Interactive line-oriented shell.
//!
//! Reads one command per line, dispatches it to the store and redraws the
//! list. Each line is fully processed before the next one is read.

use crate::command::Command;
use crate::reducer::{TaskListEnvironment, TaskListReducer};
use crate::theme::Palette;
use crate::types::{TaskListAction, TaskListState};
use crate::view;
use tasklist_runtime::{Store, StoreConfig, StoreError};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Store running the task list reducer
pub type TaskListStore =
    Store<TaskListState, TaskListAction, TaskListEnvironment, TaskListReducer>;

/// Creates an empty task list store
#[must_use]
pub fn new_store(config: StoreConfig) -> TaskListStore {
    Store::with_config(
        TaskListState::new(),
        TaskListReducer::new(),
        TaskListEnvironment::new(),
        config,
    )
}

/// Errors that end a shell session
#[derive(Error, Debug)]
pub enum ShellError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store refused an action
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The interactive shell
pub struct Shell {
    store: TaskListStore,
    palette: Palette,
}

impl Shell {
    /// Creates a shell drawing `store` with `palette`
    #[must_use]
    pub const fn new(store: TaskListStore, palette: Palette) -> Self {
        Self { store, palette }
    }

    /// The store this shell drives
    #[must_use]
    pub const fn store(&self) -> &TaskListStore {
        &self.store
    }

    /// Sends every action of `command` to the store, in order
    ///
    /// # Errors
    ///
    /// Returns the first [`StoreError`] the store reports.
    pub async fn dispatch(&self, command: Command) -> Result<(), StoreError> {
        for action in command.into_actions() {
            self.store.send(action).await?;
        }
        Ok(())
    }

    async fn render(&self) -> String {
        let palette = self.palette;
        self.store
            .state(|state| view::render(state, &palette))
            .await
    }

    /// Runs the read-dispatch-draw loop until `:quit` or end of input
    ///
    /// The store is shut down when the loop ends.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Io`] if reading or writing fails and
    /// [`ShellError::Store`] if the store rejects an action.
    pub async fn run<R, W>(&self, input: R, output: &mut W) -> Result<(), ShellError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        output.write_all(self.render().await.as_bytes()).await?;
        output.write_all(view::help(&self.palette).as_bytes()).await?;

        let mut lines = input.lines();
        loop {
            let prompt = self
                .store
                .state(|state| view::prompt(state, &self.palette))
                .await;
            output.write_all(prompt.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                tracing::debug!("End of input");
                output.write_all(b"\n").await?;
                break;
            };

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => {
                    output.write_all(view::help(&self.palette).as_bytes()).await?;
                },
                Ok(command) => {
                    self.dispatch(command).await?;
                    output.write_all(self.render().await.as_bytes()).await?;
                },
                Err(err) => {
                    tracing::debug!(%err, "Rejected input line");
                    output.write_all(format!("  {err}\n").as_bytes()).await?;
                },
            }
        }

        output.flush().await?;
        self.store.shutdown();
        Ok(())
    }
}
