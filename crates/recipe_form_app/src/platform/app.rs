use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use recipe_form_core::{update, Effect, FormState, Msg};
use recipe_form_engine::EngineHandle;
use recipe_logging::{recipe_debug, recipe_info, recipe_warn};

use super::config::{read_config, AppConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging;
use super::ui::command::UiCommand;
use super::ui::console::ConsoleSurface;
use super::ui::constants::*;
use super::ui::event::{parse_command, UiEvent, HELP_TEXT};
use super::ui::{layout, render};

const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let (config, config_error) = match read_config(&config_path) {
        Ok(loaded) => (loaded.unwrap_or_default(), None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    logging::initialize(config.log_destination);
    match config_error {
        Some(err) => recipe_warn!("Using default configuration: {}", err),
        None => recipe_info!("Configuration loaded from {:?}", config_path),
    }

    let engine =
        EngineHandle::start(config.submit_settings()).context("starting submission engine")?;
    let state = FormState::new(config.companies.clone());
    let stdout = io::stdout();
    let mut controller = FormController::new(
        state,
        EffectRunner::new(engine),
        ConsoleSurface::new(stdout.lock()),
    );

    // Background reader so engine completions are handled while waiting for input.
    let (line_tx, line_rx) = mpsc::channel::<io::Result<String>>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    controller.start()?;
    controller.run(&line_rx)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Owns the form state, its view and the effect runner for the app's lifetime.
struct FormController<W: Write> {
    state: FormState,
    effects: EffectRunner,
    surface: ConsoleSurface<W>,
}

impl<W: Write> FormController<W> {
    fn new(state: FormState, effects: EffectRunner, surface: ConsoleSurface<W>) -> Self {
        Self {
            state,
            effects,
            surface,
        }
    }

    fn start(&mut self) -> io::Result<()> {
        let view = self.state.view();
        self.surface.apply_all(layout::initial_commands(&view));
        self.surface.write_line(HELP_TEXT)?;
        self.render()
    }

    fn run(&mut self, lines: &mpsc::Receiver<io::Result<String>>) -> anyhow::Result<()> {
        let mut input_closed = false;
        loop {
            if input_closed {
                // Let an outstanding submission finish before exiting.
                if self.state.in_flight().is_none() {
                    break;
                }
                thread::sleep(POLL_INTERVAL);
            } else {
                match lines.recv_timeout(POLL_INTERVAL) {
                    Ok(line) => {
                        let line = line.context("reading console input")?;
                        if self.handle_line(&line)? == Flow::Quit {
                            break;
                        }
                    }
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => input_closed = true,
                }
            }
            self.poll_engine()?;
        }
        recipe_info!("Form controller stopped");
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        if self.surface.alert_pending() {
            self.surface.acknowledge_alert();
            self.surface.invalidate();
            self.surface.present()?;
            return Ok(Flow::Continue);
        }

        match parse_command(line) {
            Ok(Some(event)) => self.handle_event(event),
            Ok(None) => Ok(Flow::Continue),
            Err(err) => {
                self.surface.write_line(&err.to_string())?;
                Ok(Flow::Continue)
            }
        }
    }

    fn handle_event(&mut self, event: UiEvent) -> io::Result<Flow> {
        let msg = match event {
            UiEvent::OptionSelected { control_id, index } if control_id == DROPDOWN_COMPANY => {
                Msg::CompanySelected(index)
            }
            UiEvent::InputTextChanged { control_id, text } if control_id == INPUT_INGREDIENTS => {
                Msg::IngredientsChanged(text)
            }
            UiEvent::ButtonClicked { control_id } if control_id == BUTTON_SUBMIT => {
                Msg::SubmitClicked
            }
            UiEvent::RedrawRequested => {
                self.surface.invalidate();
                self.surface.present()?;
                return Ok(Flow::Continue);
            }
            UiEvent::HelpRequested => {
                self.surface.write_line(HELP_TEXT)?;
                return Ok(Flow::Continue);
            }
            UiEvent::CloseRequested => return Ok(Flow::Quit),
            UiEvent::OptionSelected { control_id, .. }
            | UiEvent::InputTextChanged { control_id, .. }
            | UiEvent::ButtonClicked { control_id } => {
                recipe_debug!("No handler for control {}", control_id.name());
                return Ok(Flow::Continue);
            }
        };
        self.dispatch_msg(msg)?;
        Ok(Flow::Continue)
    }

    fn poll_engine(&mut self) -> io::Result<()> {
        for msg in self.effects.drain_messages() {
            self.dispatch_msg(msg)?;
        }
        Ok(())
    }

    fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        for effect in effects {
            match effect {
                Effect::ShowAlert { message } => {
                    self.surface.apply(UiCommand::ShowAlert { message });
                }
                Effect::SendSubmission {
                    submission_id,
                    submission,
                } => self.effects.send_submission(submission_id, submission),
            }
        }

        if self.state.consume_dirty() {
            self.render()?;
        } else {
            self.surface.present()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let view = self.state.view();
        self.surface.apply_all(render::render(&view));
        self.surface.present()
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.surface.into_inner()
    }
}
