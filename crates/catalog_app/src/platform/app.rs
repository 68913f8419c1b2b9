use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;

use catalog_core::{update, AppState, Msg};
use catalog_logging::{catalog_info, catalog_warn};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::config::{self, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging::{self, LOG_FILENAME};
use super::ui::keys::{self, KeyAction};
use super::ui::render;

/// How long to wait for input before polling the engine again.
const INPUT_POLL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(Path::new(LOG_FILENAME));

    let config = config::load_or_default(Path::new(CONFIG_FILENAME));
    catalog_info!(
        "Starting catalog browser against {} ({} rows per view)",
        config.base_url,
        config.rows_per_view
    );
    let runner = EffectRunner::new(config.fetch_settings())?;

    let mut session = TerminalSession::enter()?;
    let state = AppState::with_rows_per_view(config.rows_per_view);
    let result = event_loop(&mut session, &runner, state);
    drop(session);

    if let Err(err) = &result {
        catalog_warn!("Catalog browser stopped with error: {}", err);
    }
    catalog_info!("Catalog browser exiting");
    result
}

fn event_loop(
    session: &mut TerminalSession,
    runner: &EffectRunner,
    state: AppState,
) -> anyhow::Result<()> {
    let mut state = dispatch(state, Msg::Started, runner);
    let mut view = state.view();
    let mut redraw = true;

    loop {
        if state.consume_dirty() {
            view = state.view();
            redraw = true;
        }
        if redraw {
            session
                .terminal
                .draw(|frame| render::render(frame, &view))?;
            redraw = false;
        }

        let mut inbox = runner.drain_events();
        if event::poll(INPUT_POLL)? {
            match event::read()? {
                Event::Key(key) => match keys::map_key(key, &view) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Dispatch(msg) => inbox.push(msg),
                    KeyAction::Ignore => {}
                },
                Event::Resize(..) => redraw = true,
                _ => {}
            }
        }

        for msg in inbox {
            state = dispatch(state, msg, runner);
        }
    }
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

/// Raw-mode alternate screen that is restored on drop, including on error paths.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = crossterm::execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen);
                Err(err.into())
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
