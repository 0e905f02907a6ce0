use foundation::time::Time;

/// Per-tick frame metadata.
///
/// The update loop runs on elapsed wall time handed in by the caller, so the
/// timebase accumulates variable deltas. It is intentionally small and pure
/// so a run can be replayed tick-for-tick in tests.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Elapsed time since the previous frame (seconds).
    pub dt_s: f64,
    /// Accumulated time at the start of the frame (seconds).
    pub time: Time,
}

impl Frame {
    pub fn first(dt_s: f64) -> Self {
        Self {
            index: 0,
            dt_s,
            time: Time(0.0),
        }
    }

    /// The following frame, after `dt_s` more seconds have elapsed.
    pub fn advance(self, dt_s: f64) -> Self {
        Self {
            index: self.index + 1,
            dt_s,
            time: Time(self.time.0 + self.dt_s),
        }
    }

    /// The following frame at an unchanged delta.
    pub fn next(self) -> Self {
        self.advance(self.dt_s)
    }
}
