use crate::foundation::core::{Size, SurfaceId, TimerId, TransitionToken};

/// Keys the engine reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Advance; also dismisses the intro overlay.
    ArrowRight,
    /// Retreat.
    ArrowLeft,
    /// Advance; also dismisses the intro overlay.
    Space,
    /// Dismisses the intro overlay only.
    Enter,
}

/// User-originated input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Next button.
    Next,
    /// Previous button.
    Prev,
    /// Click on the dot indicator of slide `0..deck_len`.
    Dot(usize),
    /// Narration toggle button.
    ToggleNarration,
    /// Click anywhere on the intro overlay.
    OverlayClick,
    /// Keyboard input.
    Key(Key),
}

/// One inbound event for [`crate::DeckEngine::handle`].
///
/// The engine runs single-threaded and event-driven; these are its only
/// suspension points. Stale surface ids, unknown timers and unknown
/// transition tokens are dropped silently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// User input.
    Input(Input),
    /// The speech capability's voice set changed.
    VoicesChanged,
    /// One display refresh for surface `surface`.
    Frame {
        /// Surface the frame belongs to.
        surface: SurfaceId,
        /// Seconds since the previous frame.
        dt_secs: f64,
    },
    /// The animation container was resized.
    ContainerResized {
        /// Surface the resize belongs to.
        surface: SurfaceId,
        /// New content-box size.
        size: Size,
    },
    /// A timer armed via the platform expired.
    Timer(TimerId),
    /// A platform-side visual transition completed.
    TransitionEnded(TransitionToken),
}
