use foundation::math::Vec2;

/// Movement keys held down during a tick.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct HeldKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Modifier that scales movement speed down while held.
    pub slow: bool,
}

/// One tick's worth of polled input, produced by the windowing collaborator.
///
/// `mode_toggle` is edge-triggered: the poller sets it only on the tick where
/// the toggle key transitions to pressed, never while it is held.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InputSample {
    /// Pointer motion since the previous tick (pixels).
    pub pointer_delta: Vec2,
    /// Scroll wheel motion since the previous tick.
    pub scroll: f64,
    /// Fired on the tick the pause/free-look toggle is pressed.
    pub mode_toggle: bool,
    pub held: HeldKeys,
}

impl Default for InputSample {
    fn default() -> Self {
        Self {
            pointer_delta: Vec2::zero(),
            scroll: 0.0,
            mode_toggle: false,
            held: HeldKeys::default(),
        }
    }
}

impl InputSample {
    /// A tick with no input at all.
    pub fn idle() -> Self {
        Self::default()
    }
}
