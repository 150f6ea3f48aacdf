//! Host command execution

use paramdial_hal::{AdcError, AnalogInputs, DigitalInputs, GpioError};
use paramdial_protocol::{errors, Command, Response};

use super::{reply, AppState};
use crate::board::Board;
use crate::registry::truncate;

impl AppState {
    /// Parse and execute one request line
    ///
    /// Blank lines are ignored. Every other line gets at least one reply.
    pub fn handle_line<P: Board>(&mut self, board: &mut P, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        match Command::parse(line) {
            Ok(command) => {
                debug!("command: {}", command);
                self.execute(board, command);
            }
            Err(e) => {
                debug!("rejected: {}", e);
                reply(board, Response::Error(e.message()));
            }
        }
    }

    fn execute<P: Board>(&mut self, board: &mut P, command: Command<'_>) {
        match command {
            Command::AddParam {
                name,
                min,
                max,
                current,
            } => self.add_param(board, name, min, max, current),
            Command::GetCurrent { name } => {
                let value = self.registry.current(name);
                reply(board, Response::Current { name, value });
            }
            Command::UpdateCurrent { name, value } => self.update_current(board, name, value),
            Command::ListParams => {
                for (index, param) in self.registry.snapshot() {
                    reply(
                        board,
                        Response::Listed {
                            index,
                            name: param.name(),
                            min: param.min(),
                            max: param.max(),
                            current: param.current(),
                        },
                    );
                }
            }
            Command::SetSoftware { name } => self.set_software(board, name),
            Command::ReadDigital { pin } => {
                let sample = u8::try_from(pin)
                    .map_err(|_| GpioError::InvalidPin)
                    .and_then(|pin| board.pins().read_digital(pin));
                match sample {
                    Ok(high) => reply(board, Response::Digital { pin, high }),
                    Err(e) => {
                        debug!("digital read of {} refused: {}", pin, e);
                        reply(board, Response::Error(errors::INVALID_DIGITAL_PIN));
                    }
                }
            }
            Command::ReadAnalog { index } => {
                let sample = u8::try_from(index)
                    .map_err(|_| AdcError::InvalidChannel)
                    .and_then(|channel| board.analog().read_analog(channel));
                match sample {
                    Ok(raw) => reply(board, Response::Analog { index, raw }),
                    Err(AdcError::InvalidChannel) => {
                        reply(board, Response::Error(errors::INVALID_ANALOG_CHANNEL))
                    }
                    Err(AdcError::Conversion) => {
                        warn!("analog conversion failed on channel {}", index);
                        reply(board, Response::Error(errors::ANALOG_READ_FAILED));
                    }
                }
            }
        }
    }

    fn add_param<P: Board>(
        &mut self,
        board: &mut P,
        name: &str,
        min: i32,
        max: i32,
        current: i32,
    ) {
        let first = self.registry.is_empty();
        let slot = self.registry.add(name, min, max, current);
        let param = self.registry.get_by_index(slot);

        if first {
            self.selection.select_first();
            self.input.force_full();
            if let Err(e) = self.presenter.reset(board.display()) {
                warn!("display clear failed: {}", e);
            }
            self.render_full(board, &param);
        }

        reply(board, Response::Added { name: param.name() });
    }

    fn update_current<P: Board>(&mut self, board: &mut P, name: &str, value: i32) {
        let stored = self.registry.update_by_name(name, value);
        reply(board, Response::Updated { name, value: stored });

        if stored.is_some() {
            if let Some(param) = self.registry.get(name) {
                self.render_full(board, &param);
            }
        }
    }

    fn set_software<P: Board>(&mut self, board: &mut P, name: &str) {
        self.label = truncate(name);
        reply(board, Response::Software { name: &self.label });

        if self.selection.index().is_some() {
            self.repaint_selected(board);
        } else if let Err(e) = self
            .presenter
            .render_label_only(board.display(), &self.label)
        {
            warn!("display update failed: {}", e);
        }
    }
}
