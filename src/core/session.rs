//! Interactive selection rounds over the candidate set.
//!
//! The session owns the query buffer and the visible listing, re-ranks on
//! every edit, and turns confirm/delete/cancel signals into round outcomes.
//! It never draws and never touches the filesystem; the caller renders the
//! exposed state and runs the confirmed action, then reports back through
//! [`Session::notify`].

use tracing::{debug, info};

use crate::core::candidates::{CandidateSet, ItemHandle};
use crate::core::rank::{self, ScorerSpec};
use crate::core::score::{CaseMode, ScoreScratch};
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Create,
    Delete,
}

/// Whether the confirmed name was picked from the listing or typed fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrigin {
    Existing,
    New,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub name: String,
    pub action: ActionKind,
    pub origin: NameOrigin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Confirmed(Confirmation),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Query empty; the full, unranked listing is visible.
    Idle,
    /// Query non-empty; the ranked listing is visible.
    Typing,
}

/// One visible row of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub name: String,
    pub handle: ItemHandle,
}

pub struct Session {
    candidates: CandidateSet,
    query: String,
    rows: Vec<ListRow>,
    /// 0 selects the query pseudo-row; `1..=rows.len()` selects a candidate.
    cursor: usize,
    status: String,
    scorer: ScorerSpec,
    case: CaseMode,
    scratch: ScoreScratch,
}

impl Session {
    pub fn new(candidates: CandidateSet, scorer: ScorerSpec, case: CaseMode) -> Self {
        let mut session = Self {
            candidates,
            query: String::new(),
            rows: Vec::new(),
            cursor: 0,
            status: String::new(),
            scorer,
            case,
            scratch: ScoreScratch::new(),
        };
        session.refresh();
        session
    }

    pub fn state(&self) -> SessionState {
        if self.query.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Typing
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    /// Cursor over the listing; 0 is the query pseudo-row.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn into_candidates(self) -> CandidateSet {
        self.candidates
    }

    /// Feeds one key into the round. Returns the round's outcome once the
    /// key ends it, `None` while the round continues.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<RoundOutcome> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(RoundOutcome::Cancelled),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => return Some(RoundOutcome::Cancelled),
            KeyCode::Enter => return self.confirm(ActionKind::Create),
            KeyCode::Delete => return self.confirm(ActionKind::Delete),

            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => self.cursor = (self.cursor + 1).min(self.rows.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.rows.len(),

            KeyCode::Backspace => {
                if self.query.pop().is_some() {
                    self.refresh();
                }
            }
            KeyCode::Char(c) if is_query_char(c) => {
                // Query input is case-folded, like the comparisons.
                self.query.extend(c.to_lowercase());
                self.refresh();
            }
            _ => {}
        }
        None
    }

    /// Reconciles an executed action: success mutates the candidate set,
    /// failure leaves it untouched. Either way the status line is updated
    /// and the next round starts from the idle state.
    pub fn notify(&mut self, confirmation: &Confirmation, success: bool) {
        let (verb, past) = match confirmation.action {
            ActionKind::Create => ("create", "created"),
            ActionKind::Delete => ("delete", "deleted"),
        };

        if success {
            match confirmation.action {
                ActionKind::Create => self.candidates.add(confirmation.name.clone()),
                ActionKind::Delete => self.candidates.remove(&confirmation.name),
            }
            self.status = format!("Successfully {past} directory \"{}\"", confirmation.name);
            info!(name = %confirmation.name, action = verb, "action succeeded");
        } else {
            self.status = format!("Failed to {verb} directory \"{}\"", confirmation.name);
            info!(name = %confirmation.name, action = verb, "action failed");
        }

        self.query.clear();
        self.refresh();
    }

    fn confirm(&mut self, action: ActionKind) -> Option<RoundOutcome> {
        let confirmation = if self.cursor == 0 {
            if self.query.is_empty() {
                return None;
            }
            Confirmation {
                name: self.query.clone(),
                action,
                origin: NameOrigin::New,
            }
        } else {
            let row = &self.rows[self.cursor - 1];
            Confirmation {
                name: row.name.clone(),
                action,
                origin: NameOrigin::Existing,
            }
        };
        debug!(name = %confirmation.name, "round confirmed");
        Some(RoundOutcome::Confirmed(confirmation))
    }

    /// Rebuilds the visible listing from the current query and resets the
    /// cursor. An empty query bypasses ranking entirely and shows the set
    /// in encounter order.
    fn refresh(&mut self) {
        self.rows = if self.query.is_empty() {
            self.candidates
                .iter()
                .map(|(name, handle)| ListRow {
                    name: name.to_string(),
                    handle,
                })
                .collect()
        } else {
            rank::rank(
                &self.query,
                &self.candidates,
                &self.scorer,
                self.case,
                &mut self.scratch,
            )
            .into_iter()
            .map(|entry| ListRow {
                name: entry.name,
                handle: entry.handle,
            })
            .collect()
        };
        self.cursor = 0;
    }
}

fn is_query_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == ' '
}
