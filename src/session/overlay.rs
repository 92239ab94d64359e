use crate::foundation::core::TransitionToken;

/// Intro overlay lifecycle.
///
/// Dismissal starts the fade *and* the deck in the same event, so the first
/// animation frame is already live when the overlay visually clears; the
/// platform's transition-end notification then removes the overlay element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayState {
    /// Overlay visible, deck not started.
    Shown,
    /// Fade-out running; the deck is already live underneath.
    Dismissing {
        /// Token identifying the fade transition.
        token: TransitionToken,
    },
    /// No overlay (never configured, or fade completed).
    Removed,
}

impl OverlayState {
    /// `true` while the overlay still owns dismissal input.
    pub fn is_shown(self) -> bool {
        matches!(self, OverlayState::Shown)
    }

    /// Move to [`OverlayState::Removed`] if `token` matches the running
    /// fade. Returns whether the overlay should be dropped from the display.
    pub(crate) fn finish_if(&mut self, token: TransitionToken) -> bool {
        if let OverlayState::Dismissing { token: current } = *self
            && current == token
        {
            *self = OverlayState::Removed;
            return true;
        }
        false
    }
}
