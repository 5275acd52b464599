mod app;
mod components;
mod theme;
mod tui_event;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use receiptgen_runtime::{FormStateStore, SubmissionController};
use receiptgen_types::HostIdentity;
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

pub use app::{Action, AppState};
pub use tui_event::TuiEvent;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Interactive single-screen form.
///
/// Submissions run on the Tokio runtime behind `runtime`; their results and
/// host close requests come back through the [`TuiEvent`] channel.
pub struct TuiApp {
    tx: Sender<TuiEvent>,
    rx: Receiver<TuiEvent>,
    controller: Arc<SubmissionController>,
    identity: HostIdentity,
    runtime: tokio::runtime::Handle,
}

impl TuiApp {
    pub fn channel() -> (Sender<TuiEvent>, Receiver<TuiEvent>) {
        mpsc::channel()
    }

    pub fn new(
        (tx, rx): (Sender<TuiEvent>, Receiver<TuiEvent>),
        controller: Arc<SubmissionController>,
        identity: HostIdentity,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        Self {
            tx,
            rx,
            controller,
            identity,
            runtime,
        }
    }

    pub fn run(self, store: FormStateStore) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let mut state = AppState::new(store, self.identity.theme_background.clone());
        let outcome = self.event_loop(&mut terminal, &mut state);

        self.controller.shutdown();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        outcome
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        state: &mut AppState,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, state))?;

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match state.handle_key(key) {
                    Some(Action::Quit) => return Ok(()),
                    Some(Action::Submit(snapshot)) => self.spawn_submit(snapshot),
                    None => {}
                }
            }

            while let Ok(tui_event) = self.rx.try_recv() {
                match tui_event {
                    TuiEvent::Submitted(result) => state.apply_result(result),
                    TuiEvent::CloseRequested => {
                        tracing::info!("closing form at host request");
                        return Ok(());
                    }
                }
            }
        }
    }

    fn spawn_submit(&self, snapshot: receiptgen_types::ReceiptRequest) {
        let controller = self.controller.clone();
        let identity = self.identity.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = controller.submit(&snapshot, &identity).await;
            let _ = tx.send(TuiEvent::Submitted(result));
        });
    }
}
