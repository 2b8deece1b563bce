use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use zform::export::{export_as, ExportFormat};
use zform::kernel::services::adapters::{ensure_export_dir, write_export, JsonFileStorage};
use zform::kernel::services::ports::DocumentStorage;
use zform::tui::{App, TerminalSession};

mod logging;

const USAGE: &str = "usage: zform [export <html|json|react|vue> [--out DIR]]";

enum Command {
    Tui,
    Export {
        format: ExportFormat,
        out: Option<PathBuf>,
    },
    Help,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    match args.first().map(String::as_str) {
        None => Ok(Command::Tui),
        Some("-h" | "--help" | "help") => Ok(Command::Help),
        Some("export") => {
            let format = args
                .get(1)
                .ok_or_else(|| "missing export format".to_string())?
                .parse::<ExportFormat>()
                .map_err(|e| e.to_string())?;
            let out = match args.get(2).map(String::as_str) {
                None => None,
                Some("--out" | "-o") => Some(PathBuf::from(
                    args.get(3).ok_or_else(|| "--out needs a directory".to_string())?,
                )),
                Some(other) => return Err(format!("unexpected argument: {other}")),
            };
            Ok(Command::Export { format, out })
        }
        Some(other) => Err(format!("unknown command: {other}")),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("{msg}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let logging = logging::init();

    let result = match command {
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Command::Export { format, out } => run_export(format, out),
        Command::Tui => run_tui(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "zform exited with error");
            eprintln!("zform: {err}");
            if let Some(guard) = &logging {
                eprintln!("logs: {}", guard.log_dir().display());
            }
            ExitCode::FAILURE
        }
    }
}

fn run_export(format: ExportFormat, out: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let storage = JsonFileStorage::default_location()?;
    let document = storage.load()?.ok_or("no saved form to export")?;
    let contents = export_as(&document, format)?;
    let dir = match out {
        Some(dir) => dir,
        None => ensure_export_dir()?,
    };
    let path = write_export(&dir, &format.file_name(&document.title), &contents)?;
    println!("{}", path.display());
    Ok(())
}

fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    let storage = JsonFileStorage::default_location()?;
    let export_dir = ensure_export_dir().unwrap_or_else(|_| std::env::temp_dir());
    let mut app = App::new(storage, export_dir);

    let session = TerminalSession::start()?;
    let (signal_tx, signal_rx) = std::sync::mpsc::channel();
    #[cfg(unix)]
    zform::tui::terminal::watch_exit_signals(session.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    app.run(&mut terminal, &signal_rx)?;
    drop(session);
    tracing::info!(fields = app.state().document().len(), "zform exited");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/cli_args.rs"]
mod tests;
