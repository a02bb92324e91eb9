//! Plain-text rendering of the session view.
//!
//! The renderer only reads a [`SessionView`]; it never touches the state.
//! Output is a block of lines:
//!
//! ```text
//! [browsing] happy
//!  ID   WORD                 RELEVANCE
//!  #1   glad                      0.90
//!  #2   joyful                    0.70
//! definition (happy): Feeling or showing pleasure.
//! ```

use crate::app::{Mode, SessionView};
use crate::domain::History;
use std::fmt::Write as _;

/// Width of the WORD column.
const WORD_WIDTH: usize = 20;

/// Renders the view as human-readable lines.
#[must_use]
pub fn render(view: &SessionView) -> String {
    let mut out = String::new();

    match view.mode {
        Mode::Editing => {
            let _ = writeln!(out, "[editing] {}_", view.query);
            if !view.suggestions.is_empty() {
                let _ = writeln!(out, "suggestions: {}", view.suggestions.join(", "));
            }
        }
        Mode::Browsing => {
            let _ = write!(out, "[browsing] {}", view.label);
            if view.searching {
                out.push_str(" (searching...)");
            }
            out.push('\n');
        }
    }

    if !view.bubbles.is_empty() {
        let _ = writeln!(out, " {:<4} {:<WORD_WIDTH$} {:>9}", "ID", "WORD", "RELEVANCE");
        for bubble in &view.bubbles {
            let marker = if bubble.scaled { '*' } else { ' ' };
            let _ = writeln!(
                out,
                "{marker}{:<4} {:<WORD_WIDTH$} {:>9.2}",
                bubble.id.to_string(),
                truncate(&bubble.word, WORD_WIDTH),
                bubble.relevance
            );
        }
    }

    if view.loading_definition {
        out.push_str("definition: loading...\n");
    }
    if let Some(overlay) = &view.overlay {
        let _ = writeln!(out, "definition ({}): {}", overlay.word, overlay.text);
    }
    if let Some(notice) = &view.notice {
        let _ = writeln!(out, "{notice}");
    }

    out
}

/// Renders the history as a numbered list with relative timestamps.
#[must_use]
pub fn render_history(history: &History) -> String {
    if history.is_empty() {
        return "no searches yet\n".to_string();
    }
    history
        .entries()
        .iter()
        .enumerate()
        .fold(String::new(), |mut out, (i, entry)| {
            let _ = writeln!(out, "{i:>3}  {:<WORD_WIDTH$} {}", entry.word, entry.time_ago());
            out
        })
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
