use crate::core::constants::VERSION;
use crate::core::prelude::*;
use crate::input::{
    event::{AppEvent, EventHandler},
    keyboard::{KeyAction, KeyboardManager},
};
use crate::output::{ConsoleLog, ConsoleOutput, ScrollState};
use crate::ui::terminal::TerminalManager;

use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::Stdout;

pub type TerminalBackend = Terminal<CrosstermBackend<Stdout>>;

pub const INPUT_CLOSED_MESSAGE: &str = "[stdin closed]";

/// Everything the render loop owns: the entries and where the view is.
pub struct ConsoleState {
    log: ConsoleLog,
    scroll: ScrollState,
    keyboard: KeyboardManager,
    config: Config,
}

impl ConsoleState {
    pub fn new(config: &Config) -> Self {
        Self {
            log: ConsoleLog::new(config.max_entries),
            scroll: ScrollState::new(),
            keyboard: KeyboardManager::new(),
            config: config.clone(),
        }
    }

    /// Applies one event. Returns `true` when the loop should stop.
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Input(key) => return self.handle_action(self.keyboard.get_action(&key)),
            AppEvent::Line(line) => {
                self.log.push(line);
            }
            AppEvent::InputClosed => {
                log::info!("Input closed after {} entries", self.log.len());
                self.log.push(INPUT_CLOSED_MESSAGE);
            }
            AppEvent::Resize(width, height) => {
                log::debug!("Resize to {}x{}", width, height);
            }
            AppEvent::Tick => {}
        }
        false
    }

    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::ScrollUp => self.scroll.scroll_up(1),
            KeyAction::ScrollDown => self.scroll.scroll_down(1),
            KeyAction::PageUp => self.scroll.page_up(),
            KeyAction::PageDown => self.scroll.page_down(),
            KeyAction::ToTop => self.scroll.scroll_to_top(),
            KeyAction::ToBottom => self.scroll.scroll_to_bottom(),
            KeyAction::Clear => {
                self.log.clear();
                self.scroll.scroll_to_bottom();
            }
            KeyAction::Quit => return true,
            KeyAction::NoAction => {}
        }
        false
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let widget = ConsoleOutput::new(self.log.entries()).style(self.config.panel.clone());
        frame.render_stateful_widget(widget, frame.size(), &mut self.scroll);
    }

    pub fn log(&self) -> &ConsoleLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut ConsoleLog {
        &mut self.log
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Redraw {
    Now,
    /// Piped lines can arrive faster than frames; draw them on the next tick.
    Deferred,
    Flush,
}

fn redraw_for(event: &AppEvent) -> Redraw {
    match event {
        AppEvent::Line(_) => Redraw::Deferred,
        AppEvent::Tick => Redraw::Flush,
        AppEvent::Input(_) | AppEvent::Resize(..) | AppEvent::InputClosed => Redraw::Now,
    }
}

pub struct ScreenManager {
    terminal: TerminalBackend,
    terminal_mgr: TerminalManager,
    events: EventHandler,
    state: ConsoleState,
}

impl ScreenManager {
    pub fn new(config: &Config) -> Result<Self> {
        let mut terminal_mgr = TerminalManager::new();
        terminal_mgr.setup()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        let mut state = ConsoleState::new(config);
        state
            .log_mut()
            .push(format!("console-output v{} started", VERSION));

        Ok(Self {
            terminal,
            terminal_mgr,
            events: EventHandler::new(config.poll_rate),
            state,
        })
    }

    /// Feeds every line read from `reader` into the console.
    pub fn attach_lines<R>(&mut self, reader: R)
    where
        R: tokio::io::AsyncRead + Unpin + Send + 'static,
    {
        self.events.spawn_line_source(reader);
    }

    pub async fn run(&mut self) -> Result<()> {
        log::info!("Entering main loop");
        let result = self.event_loop().await;
        self.events.shutdown().await;
        self.terminal_mgr.cleanup()?;
        log::info!("Main loop finished with {} entries", self.state.log().len());
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        self.render()?;
        let mut dirty = false;
        while let Some(event) = self.events.next().await {
            let redraw = redraw_for(&event);
            if self.state.handle_event(event) {
                return Ok(());
            }
            match redraw {
                Redraw::Now => {
                    self.render()?;
                    dirty = false;
                }
                Redraw::Deferred => dirty = true,
                Redraw::Flush if dirty => {
                    self.render()?;
                    dirty = false;
                }
                Redraw::Flush => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let state = &mut self.state;
        self.terminal.draw(|frame| state.render(frame))?;
        Ok(())
    }
}
