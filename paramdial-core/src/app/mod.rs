//! Application loop
//!
//! [`AppState`] owns all mutable panel state: the registry, the selection,
//! the presenter, the input policy and the software label. The firmware
//! calls [`AppState::tick`] every loop period. One tick runs, in order:
//!
//! 1. at most one serial command,
//! 2. at most one encoder adjustment (or the Rapid-mode expiry check),
//! 3. at most one button selection.
//!
//! Each step repaints at most once. Capability failures are logged and
//! dropped; a tick never aborts half way.

mod dispatch;

use heapless::String;
use paramdial_display::{DisplayMode, Presenter};
use paramdial_hal::{Clock, LineRx, LineTx, RxError};
use paramdial_protocol::{errors, Response};

use crate::board::Board;
use crate::config::{UiConfig, MAX_LABEL_LEN};
use crate::input::InputController;
use crate::registry::{Parameter, ParameterRegistry};
use crate::selection::Selection;

/// Everything the panel remembers between ticks
#[derive(Debug, Clone)]
pub struct AppState {
    registry: ParameterRegistry,
    selection: Selection,
    presenter: Presenter,
    input: InputController,
    label: String<MAX_LABEL_LEN>,
}

impl AppState {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            registry: ParameterRegistry::new(),
            selection: Selection::new(),
            presenter: Presenter::new(),
            input: InputController::new(config),
            label: config.default_label.clone(),
        }
    }

    pub fn registry(&self) -> &ParameterRegistry {
        &self.registry
    }

    /// Index the knob currently adjusts
    pub fn selected(&self) -> Option<usize> {
        self.selection.index()
    }

    /// Software label shown on the bottom row
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Paint mode chosen by the input policy
    pub fn display_mode(&self) -> DisplayMode {
        self.input.mode()
    }

    /// Show the boot splash
    pub fn start<P: Board>(&mut self, board: &mut P) {
        if let Err(e) = self.presenter.render_splash(board.display()) {
            warn!("splash failed: {}", e);
        }
    }

    /// Run one pass of the application loop
    pub fn tick<P: Board>(&mut self, board: &mut P) {
        self.poll_serial(board);
        self.poll_encoder(board);
        self.poll_button(board);
    }

    fn poll_serial<P: Board>(&mut self, board: &mut P) {
        match board.serial().poll_line() {
            Ok(Some(line)) => self.handle_line(board, &line),
            Ok(None) => {}
            Err(RxError::Overrun) => reply(board, Response::Error(errors::LINE_TOO_LONG)),
            Err(RxError::Encoding) => reply(board, Response::Error(errors::INVALID_ENCODING)),
            Err(RxError::Transport) => warn!("serial receive failed"),
        }
    }

    fn poll_encoder<P: Board>(&mut self, board: &mut P) {
        let delta = self.input.poll_encoder(board.encoder());
        if delta == 0 {
            if self.input.expire(board.clock().now_ms()) {
                self.repaint_selected(board);
            }
            return;
        }

        let Some(index) = self.selection.index() else {
            return;
        };
        let param = self.registry.get_by_index(index);
        let value = param.clamp(param.current().saturating_add(delta));
        if value == param.current() {
            return;
        }

        self.registry.update_by_index(index, value);
        reply(
            board,
            Response::Updated {
                name: param.name(),
                value: Some(value),
            },
        );

        match self.input.commit(board.clock().now_ms()) {
            DisplayMode::Rapid => self.render_rapid(board, value),
            DisplayMode::Full => {
                let param = self.registry.get_by_index(index);
                self.render_full(board, &param);
            }
        }
    }

    fn poll_button<P: Board>(&mut self, board: &mut P) {
        if !self.input.poll_button(board) {
            return;
        }
        let Some(index) = self.selection.advance(self.registry.len()) else {
            return;
        };
        debug!("selected parameter {}", index);

        self.input.force_full();
        let param = self.registry.get_by_index(index);
        reply(
            board,
            Response::Selected {
                index,
                name: param.name(),
                current: param.current(),
            },
        );
        self.render_full(board, &param);
    }

    /// Repaint the selected parameter in the current input mode
    fn repaint_selected<P: Board>(&mut self, board: &mut P) {
        let Some(index) = self.selection.index() else {
            return;
        };
        let param = self.registry.get_by_index(index);
        match self.input.mode() {
            DisplayMode::Rapid => self.render_rapid(board, param.current()),
            DisplayMode::Full => self.render_full(board, &param),
        }
    }

    fn render_full<P: Board>(&mut self, board: &mut P, param: &Parameter) {
        let result = self.presenter.render_full(
            board.display(),
            param.name(),
            param.current(),
            param.min(),
            param.max(),
            &self.label,
        );
        if let Err(e) = result {
            warn!("display update failed: {}", e);
        }
    }

    fn render_rapid<P: Board>(&mut self, board: &mut P, value: i32) {
        if let Err(e) = self.presenter.render_rapid(board.display(), value) {
            warn!("display update failed: {}", e);
        }
    }
}

/// Send one response line to the host
fn reply<P: Board>(board: &mut P, response: Response<'_>) {
    if board.serial().write_line(&response.to_line()).is_err() {
        warn!("serial write failed");
    }
}
