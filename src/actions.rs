//! The side-effecting half of a confirmed round.

use tracing::warn;

use crate::core::session::ActionKind;

/// Runs the real effect behind a confirmation and reports bare success.
/// The session never learns why an action failed, only that it did; the
/// detail goes to the log.
pub trait ActionExecutor {
    fn execute(&mut self, name: &str, action: ActionKind) -> bool;
}

/// Production executor: creates a directory or removes one recursively,
/// relative to the working directory.
#[derive(Debug, Default)]
pub struct DirectoryExecutor;

impl ActionExecutor for DirectoryExecutor {
    fn execute(&mut self, name: &str, action: ActionKind) -> bool {
        let result = match action {
            ActionKind::Create => std::fs::create_dir(name),
            ActionKind::Delete => std::fs::remove_dir_all(name),
        };
        match result {
            Ok(()) => true,
            Err(err) => {
                warn!(name, ?action, %err, "directory action failed");
                false
            }
        }
    }
}
