//! Session controller: key event loop and command dispatch

use crate::engine::Algorithm;
use crate::error::{Result, VisualizerError};
use crate::narrator::Banner;
use crate::session::{Session, SortState};
use crate::ui::panes::draw_view;
use crate::ui::renderer::{RenderOptions, TerminalRenderer};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

/// How long the idle loop waits for input before redrawing
const IDLE_POLL: Duration = Duration::from_millis(16);

/// Something the user asked the visualizer to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Regenerate,
    Sort(Algorithm),
    Quit,
}

impl Command {
    /// Map a key press to a command: `0` new list, `1`-`6` algorithms,
    /// `q` or Ctrl-C quit. Everything else is ignored.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
            KeyCode::Char('0') => Some(Command::Regenerate),
            KeyCode::Char(c) => Algorithm::from_key(c).map(Command::Sort),
            _ => None,
        }
    }
}

/// The main application state
pub struct App {
    /// Working data and sorting state
    pub session: Session,

    /// Latest banner, shown in the status bar
    pub status_message: String,

    /// Every banner raised during this visualizer session, in order
    pub transcript: Vec<Banner>,

    /// Whether the app should quit
    pub should_quit: bool,

    pub render_options: RenderOptions,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            status_message: String::from("Ready! Press 1-6 to sort, 0 for a new list"),
            transcript: Vec::new(),
            should_quit: false,
            render_options: RenderOptions::INTERACTIVE,
        }
    }

    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Run the event loop until a quit command arrives
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        tracing::info!("visualizer session started");
        while !self.should_quit {
            if event::poll(IDLE_POLL).map_err(VisualizerError::Input)? {
                // drain everything queued, including keys pressed during the last run
                loop {
                    if let Event::Key(key) = event::read().map_err(VisualizerError::Input)? {
                        if key.kind == KeyEventKind::Press {
                            if let Some(command) = Command::from_key(key) {
                                self.handle_command(command, terminal)?;
                            }
                        }
                    }
                    if self.should_quit {
                        break;
                    }
                    if !event::poll(Duration::ZERO).map_err(VisualizerError::Input)? {
                        break;
                    }
                }
            }
            self.draw_idle(terminal)?;
        }
        tracing::info!(banners = self.transcript.len(), "visualizer session ended");
        Ok(())
    }

    /// Draw a frame with no highlights
    pub fn draw_idle<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let frame = self.session.idle_frame();
        let state = self.session.state();
        terminal
            .draw(|f| draw_view(f, &frame, state, &self.status_message, &|| {}))
            .map_err(VisualizerError::Render)?;
        Ok(())
    }

    /// Carry out one command. Sorting runs to completion before this returns.
    pub fn handle_command<B: Backend>(
        &mut self,
        command: Command,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        match command {
            Command::Quit => {
                self.session.clear_complete();
                self.should_quit = true;
                self.announce(Banner::ExitingVisualizer);
            }
            Command::Regenerate => {
                self.session.regenerate();
                self.announce(Banner::NewList);
            }
            Command::Sort(algorithm) => {
                self.announce(Banner::Started(algorithm));
                let mut renderer = TerminalRenderer::new(
                    terminal,
                    SortState::Running(algorithm),
                    self.status_message.clone(),
                    self.render_options,
                );
                self.session.run(algorithm, &mut renderer);
                let frames = renderer.finish().map_err(VisualizerError::Render)?;
                tracing::debug!(%algorithm, frames, "run rendered");
                self.announce(Banner::Completed(algorithm));
            }
        }
        Ok(())
    }

    fn announce(&mut self, banner: Banner) {
        tracing::debug!(%banner, "banner");
        self.status_message = banner.to_string();
        self.transcript.push(banner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Command::from_key(key('0')), Some(Command::Regenerate));
        assert_eq!(
            Command::from_key(key('1')),
            Some(Command::Sort(Algorithm::Selection))
        );
        assert_eq!(
            Command::from_key(key('4')),
            Some(Command::Sort(Algorithm::Merge))
        );
        assert_eq!(
            Command::from_key(key('6')),
            Some(Command::Sort(Algorithm::Heap))
        );
        assert_eq!(Command::from_key(key('q')), Some(Command::Quit));
        assert_eq!(
            Command::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(Command::from_key(key('7')), None);
        assert_eq!(Command::from_key(key('c')), None);
        assert_eq!(
            Command::from_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_sort_command_runs_to_completion() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = App::new(Session::new()).with_render_options(RenderOptions::HEADLESS);

        app.handle_command(Command::Sort(Algorithm::Quick), &mut terminal)
            .unwrap();

        assert_eq!(app.session.state(), SortState::Sorted(Algorithm::Quick));
        assert!(app.session.working().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(
            app.transcript,
            vec![
                Banner::Started(Algorithm::Quick),
                Banner::Completed(Algorithm::Quick)
            ]
        );
        assert_eq!(app.status_message, "QUICK SORT COMPLETE.");
    }

    #[test]
    fn test_regenerate_and_quit() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = App::new(Session::new()).with_render_options(RenderOptions::HEADLESS);

        app.handle_command(Command::Sort(Algorithm::Insertion), &mut terminal)
            .unwrap();
        app.handle_command(Command::Regenerate, &mut terminal)
            .unwrap();
        assert_eq!(app.session.state(), SortState::Unsorted);

        app.handle_command(Command::Sort(Algorithm::Bubble), &mut terminal)
            .unwrap();
        app.handle_command(Command::Quit, &mut terminal).unwrap();
        assert!(app.should_quit);
        assert!(!app.session.is_complete());
        assert_eq!(app.transcript.last(), Some(&Banner::ExitingVisualizer));
    }

    #[test]
    fn test_idle_frame_draws() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let app = App::new(Session::new());
        app.draw_idle(&mut terminal).unwrap();
        let buffer = terminal.backend().buffer();
        let title: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 0)].symbol())
            .collect();
        assert!(title.contains("Sorting Visualizer"));
    }
}
