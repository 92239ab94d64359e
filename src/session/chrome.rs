/// Static chrome description handed to the platform at mount time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChromeSpec {
    /// Number of dot indicators to build (one per deck entry).
    pub slide_count: usize,
    /// Whether the narration toggle should be offered at all.
    pub narration_available: bool,
}

/// View-model of the chrome after a navigation transition.
///
/// The navigation state machine stays pure; this is the thin description a
/// presentation adapter applies to the display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChromeView {
    /// Slide position label, `"2 / 5"`.
    pub slide_label: String,
    /// Step counter within the slide, `"1 / 3"`.
    pub step_counter: String,
    /// Index of the highlighted dot.
    pub active_dot: usize,
    /// Previous button disabled, exactly at (first slide, first step).
    pub prev_disabled: bool,
    /// Next button disabled, exactly at (last slide, last step).
    pub next_disabled: bool,
    /// Current state of the narration toggle.
    pub narration_enabled: bool,
}
