//! Terminal rendering of the task list.

use crate::theme::Palette;
use crate::types::{Task, TaskListState};
use colored::{Color, Colorize};

/// Heading shown above the list
pub const HEADING: &str = "My To-Do List";

/// Shown in place of the list when it has no tasks
pub const EMPTY_MESSAGE: &str = "No tasks yet. Add one above!";

/// Hint shown where the input box would be
pub const PLACEHOLDER: &str = "Add a new task...";

fn paint(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => text.color(color).to_string(),
        None => text.to_string(),
    }
}

fn render_task(out: &mut String, task: &Task, palette: &Palette) {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let text = if task.completed {
        let painted = match palette.completed {
            Some(color) => task.text.color(color),
            None => task.text.normal(),
        };
        if palette.strike_completed {
            painted.strikethrough().to_string()
        } else {
            painted.to_string()
        }
    } else {
        paint(&task.text, palette.text)
    };

    out.push_str(&format!(
        "  {} {} {}\n",
        paint(checkbox, palette.accent),
        paint(&format!("{:>3}.", task.id), palette.accent),
        text
    ));
}

/// Renders the whole list: heading, tasks (or the empty message) and, when
/// there is at least one task, the completion summary
#[must_use]
pub fn render(state: &TaskListState, palette: &Palette) -> String {
    let mut out = String::new();
    let heading = match palette.heading {
        Some(color) => HEADING.color(color).bold().to_string(),
        None => HEADING.to_string(),
    };
    out.push_str(&heading);
    out.push_str("\n\n");

    if state.is_empty() {
        out.push_str(&format!("  {}\n", paint(EMPTY_MESSAGE, palette.muted)));
        return out;
    }

    for task in state.tasks() {
        render_task(&mut out, task, palette);
    }

    out.push('\n');
    out.push_str(&format!("  {}\n", paint(&state.summary().to_string(), palette.muted)));
    out
}

/// The input prompt, prefixed with whatever is still pending in the buffer
#[must_use]
pub fn prompt(state: &TaskListState, palette: &Palette) -> String {
    format!("{}{}", paint("> ", palette.accent), state.pending_text())
}

/// Usage text for the interactive shell
#[must_use]
pub fn help(palette: &Palette) -> String {
    let lines = [
        format!("{PLACEHOLDER} type text and press Enter"),
        ":add <text>    add text, even text starting with ':' (:a, or ::text)".to_string(),
        ":type <text>   fill the input; an empty line then adds it".to_string(),
        ":toggle <id>   mark a task done or not done (:t)".to_string(),
        ":remove <id>   delete a task (:rm, :delete)".to_string(),
        ":help          show this help".to_string(),
        ":quit          leave (:q)".to_string(),
    ];
    let mut out = String::new();
    for line in lines {
        out.push_str(&format!("  {}\n", paint(&line, palette.muted)));
    }
    out
}
