//! Draws the picker screen: listing on top, then a separator, the query
//! line, another separator and the status line in the bottom rows.

use std::io;

use unicode_width::UnicodeWidthChar;

use crate::core::session::Session;
use crate::terminal::Terminal;

/// Rows reserved below the listing: a spare row, both separators, the query
/// line, the status line and the bottom margin.
const CHROME_ROWS: usize = 7;

pub fn render(terminal: &mut Terminal, session: &Session) -> io::Result<()> {
    let size = terminal.size();
    let width = size.width as usize;
    let height = size.height as usize;

    terminal.clear_all()?;

    if height < CHROME_ROWS {
        // Degenerate terminal; show only the query line.
        terminal.queue_move_cursor(0, 0)?;
        terminal.queue_print(&truncate_to_width(&query_row_text(session), width))?;
        return terminal.flush();
    }

    let capacity = (height - CHROME_ROWS).max(1);
    let total = session.rows().len() + 1;
    let cursor = session.cursor();
    // Keep the cursor row inside the window.
    let offset = (cursor + 1).saturating_sub(capacity);

    for (screen_row, index) in (offset..total.min(offset + capacity)).enumerate() {
        terminal.queue_move_cursor(0, screen_row as u16)?;
        let text = if index == 0 {
            query_row_text(session)
        } else {
            session.rows()[index - 1].name.clone()
        };
        let line = truncate_to_width(&text, width);
        if index == cursor {
            terminal.queue_print_reversed(&line)?;
        } else {
            terminal.queue_print(&line)?;
        }
    }

    let sep1_y = (height - 5) as u16;
    let input_y = (height - 4) as u16;
    let sep2_y = (height - 3) as u16;
    let status_y = (height - 2) as u16;

    terminal.queue_move_cursor(0, sep1_y)?;
    terminal.queue_print(&"-".repeat(width))?;

    terminal.queue_move_cursor(0, input_y)?;
    terminal.queue_print(&truncate_to_width(session.query(), width))?;

    terminal.queue_move_cursor(0, sep2_y)?;
    terminal.queue_print(&"=".repeat(width))?;

    terminal.queue_move_cursor(0, status_y)?;
    terminal.queue_print(&truncate_to_width(session.status(), width))?;

    terminal.flush()
}

fn query_row_text(session: &Session) -> String {
    if session.query().is_empty() {
        "<new>".to_string()
    } else {
        format!("<new> {}", session.query())
    }
}

/// Cuts `text` down to at most `max` display columns.
fn truncate_to_width(text: &str, max: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
