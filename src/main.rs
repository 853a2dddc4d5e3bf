use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use dirpick::actions::{ActionExecutor, DirectoryExecutor};
use dirpick::candidates::CandidateSet;
use dirpick::cli::Cli;
use dirpick::config::ScoringConfig;
use dirpick::core::session::{RoundOutcome, Session};
use dirpick::score::CaseMode;
use dirpick::terminal::Terminal;
use dirpick::terminal_event::TerminalEvent;
use dirpick::ui::view;
use dirpick::{Result, manifest};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| std::env::var_os("DIRPICK_LOG").map(PathBuf::from));
    dirpick::logging::init(log_file.as_deref())?;

    let mut scoring = match &cli.config {
        Some(path) => ScoringConfig::load(path)?,
        None => ScoringConfig::default(),
    };
    if let Some(algorithm) = cli.algorithm {
        scoring.algorithm = algorithm;
    }
    if cli.case_sensitive {
        scoring.case = CaseMode::Sensitive;
    }

    let manifest_path = match cli.manifest {
        Some(path) => path,
        None => manifest::locate()?,
    };
    let names = manifest::load(&manifest_path)?;
    info!(path = %manifest_path.display(), count = names.len(), "session starting");

    let mut session = Session::new(
        CandidateSet::from_names(names),
        scoring.scorer_spec(),
        scoring.case_mode(),
    );
    let mut executor = DirectoryExecutor;

    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;
    terminal.set_line_wrap(false)?;
    terminal.hide_cursor()?;

    let result = event_loop(&mut terminal, &mut session, &mut executor);

    terminal.show_cursor()?;
    terminal.set_line_wrap(true)?;
    terminal.exit_raw_mode()?;
    result?;

    let set = session.into_candidates();
    manifest::store(&manifest_path, set.sorted_names())?;
    Ok(())
}

fn event_loop(
    terminal: &mut Terminal,
    session: &mut Session,
    executor: &mut DirectoryExecutor,
) -> Result<()> {
    loop {
        view::render(terminal, session)?;

        match terminal.read_event()? {
            TerminalEvent::Key(key) => {
                let Some(outcome) = session.handle_key(key) else {
                    continue;
                };
                match outcome {
                    RoundOutcome::Cancelled => break,
                    RoundOutcome::Confirmed(confirmation) => {
                        let success = executor.execute(&confirmation.name, confirmation.action);
                        session.notify(&confirmation, success);
                    }
                }
            }
            TerminalEvent::Resize { .. } => {}
        }
    }
    Ok(())
}
