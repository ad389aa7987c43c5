//! main.rs
//! Entry point for arbor

use arbor::app::AppState;
use arbor::config::Config;
use arbor::core::terminal;
use arbor::utils::cli::{CliAction, handle_args};
use arbor::utils::logging;

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        tracing::error!(%info, "panic");
        eprintln!("\n[arbor] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    if handle_args() == CliAction::Exit {
        return Ok(());
    }

    let log_path = logging::log_path();
    if let Err(e) = logging::init_global(&log_path) {
        eprintln!("[arbor] Logging disabled ({}): {}", log_path.display(), e);
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "arbor starting");

    let config = Config::load();
    let mut app = AppState::new(&config)?;
    terminal::run_terminal(&mut app)
}
