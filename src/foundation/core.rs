pub use kurbo::{Point, Size, Vec2};

/// Identifier of one render-surface instantiation.
///
/// Allocated monotonically by the surface lifecycle; a frame or resize event
/// carrying an id other than the active one belongs to a torn-down slide and
/// is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

/// Handle for a one-shot timer requested from the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Handle for a platform-side visual transition whose completion is reported
/// back as an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionToken(pub u64);

/// Direction of a step transition, derived from cursor movement (never
/// stored).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The cursor moved to a higher step index.
    Forward,
    /// The cursor moved to a lower step index.
    Backward,
}

impl Direction {
    /// `true` for [`Direction::Forward`].
    pub fn is_forward(self) -> bool {
        matches!(self, Direction::Forward)
    }
}

/// Geometry of the active render surface as sized by the platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceInfo {
    /// Content-box size in logical pixels.
    pub size: Size,
    /// Device pixel density of the hosting display.
    pub pixel_density: f64,
}

/// Per-frame timing passed to `draw` hooks.
///
/// `elapsed_secs` counts from surface creation, so revisiting a slide restarts
/// its clock along with its state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStamp {
    /// Number of frames delivered to this surface before the current one.
    pub index: u64,
    /// Seconds since the surface was created.
    pub elapsed_secs: f64,
    /// Seconds since the previous frame (zero outside the draw phase).
    pub dt_secs: f64,
}
