// sortty: Terminal Sorting Visualizer

use std::io::{self, BufRead, Write};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::config::Cli;
use sortty::error::VisualizerError;
use sortty::logging;
use sortty::narrator::{Banner, Console, MenuChoice};
use sortty::session::Session;
use sortty::ui::App;

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), cli.log_level)?;

    let mut console = Console::stdio();
    if !cli.skip_intro {
        console.show_introduction()?;
    }

    loop {
        match console.show_controls()? {
            MenuChoice::Start => run_visualizer(&mut console)?,
            MenuChoice::Quit => {
                console.announce(Banner::ExitingProgram)?;
                break;
            }
        }
    }

    tracing::info!("exiting");
    Ok(())
}

/// Run one visualizer session. Terminal failures end the session and are
/// reported on the console; only console failures are returned.
fn run_visualizer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<(), VisualizerError> {
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            tracing::error!(error = %e, "terminal setup failed");
            console.report(&format!("\n{}", e))?;
            return Ok(());
        }
    };

    let mut app = App::new(Session::new());
    let res = app.run(&mut terminal);

    if let Err(e) = restore_terminal(&mut terminal) {
        tracing::warn!(error = %e, "failed to restore terminal");
    }

    for banner in &app.transcript {
        console.announce(*banner)?;
    }

    if let Err(e) = res {
        tracing::error!(error = %e, "visualizer session failed");
        console.report(&format!("\nError: {}", e))?;
    }
    Ok(())
}

fn setup_terminal() -> Result<CrosstermTerminal, VisualizerError> {
    enable_raw_mode().map_err(VisualizerError::TerminalInit)?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(VisualizerError::TerminalInit(e));
    }
    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        VisualizerError::TerminalInit(e)
    })
}

fn restore_terminal(terminal: &mut CrosstermTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
