//! Rotary encoder abstractions
//!
//! [`RotaryEncoder`] is what the input controller polls each tick.
//! [`QuadratureDecoder`] is the pin-level decoder board code feeds with raw
//! A/B samples; it lives here so it can be tested on the host.

/// Relative rotary encoder
///
/// The count accumulates detents since the last [`reset_delta`] call.
///
/// [`reset_delta`]: RotaryEncoder::reset_delta
pub trait RotaryEncoder {
    /// Sample the encoder pins and update the count
    fn tick(&mut self);

    /// Detents turned since the last reset (positive = clockwise)
    fn delta(&self) -> i32;

    /// Zero the count
    fn reset_delta(&mut self);
}

/// One decoded detent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    Cw,
    Ccw,
}

impl Step {
    /// Signed count contribution
    pub fn delta(self) -> i32 {
        match self {
            Step::Cw => 1,
            Step::Ccw => -1,
        }
    }
}

/// Decoder state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    CwStep1,
    CwStep2,
    CcwStep1,
    CcwStep2,
}

/// Quadrature decoder with bounce rejection
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    state: State,
    last_a: bool,
    last_b: bool,
}

impl QuadratureDecoder {
    /// Create a decoder seeded with the current pin levels
    pub fn new(a: bool, b: bool) -> Self {
        Self {
            state: State::Idle,
            last_a: a,
            last_b: b,
        }
    }

    /// Feed one sample of both phases
    ///
    /// Returns a step when a full detent cycle completes.
    /// Should be called frequently (every 1-5ms).
    pub fn update(&mut self, a: bool, b: bool) -> Option<Step> {
        if a == self.last_a && b == self.last_b {
            return None;
        }

        let step = self.decode(a, b);

        self.last_a = a;
        self.last_b = b;

        step
    }

    /// Decode encoder state using state machine
    ///
    /// Quadrature encoding:
    /// CW:  A leads B (A changes first when rotating clockwise)
    /// CCW: B leads A (B changes first when rotating counter-clockwise)
    ///
    /// CW:  Idle (1,1) -> CwStep1 (0,1) -> CwStep2 (0,0) -> Cw -> Idle
    /// CCW: Idle (1,1) -> CcwStep1 (1,0) -> CcwStep2 (0,0) -> Ccw -> Idle
    fn decode(&mut self, a: bool, b: bool) -> Option<Step> {
        match self.state {
            State::Idle => {
                if !a && b {
                    self.state = State::CwStep1;
                } else if a && !b {
                    self.state = State::CcwStep1;
                }
                None
            }
            State::CwStep1 => {
                if !a && !b {
                    self.state = State::CwStep2;
                } else if a && b {
                    // Bounce
                    self.state = State::Idle;
                }
                None
            }
            State::CwStep2 => {
                if a || b {
                    self.state = State::Idle;
                    return Some(Step::Cw);
                }
                None
            }
            State::CcwStep1 => {
                if !a && !b {
                    self.state = State::CcwStep2;
                } else if a && b {
                    // Bounce
                    self.state = State::Idle;
                }
                None
            }
            State::CcwStep2 => {
                if a || b {
                    self.state = State::Idle;
                    return Some(Step::Ccw);
                }
                None
            }
        }
    }
}
