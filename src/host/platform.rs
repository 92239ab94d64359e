use std::time::Duration;

use crate::foundation::core::{Size, SurfaceId, SurfaceInfo, TimerId, TransitionToken};
use crate::foundation::error::LecternResult;
use crate::session::chrome::{ChromeSpec, ChromeView};
use crate::session::config::IntroConfig;

/// Presentation and scheduling capability.
///
/// The engine is a pure coordinator; everything the viewer sees or that has
/// to wait for the environment goes through this trait: the fixed chrome, the
/// scrollable step pane, the intro overlay, the per-slide render surface and
/// one-shot timers. Implementations mutate their display synchronously and
/// feed asynchronous completions back as [`crate::Event`]s.
pub trait Platform {
    /// Opaque drawing handle passed to slide hooks.
    type Painter;

    /// Build the fixed chrome (panes, counters, nav buttons, one dot per
    /// slide). Failing here is a configuration error and aborts `init`.
    fn mount_chrome(&mut self, spec: &ChromeSpec) -> LecternResult<()>;

    /// Apply a chrome view-model after a navigation transition.
    fn apply_chrome(&mut self, view: &ChromeView);

    /// Show the active slide's title.
    fn set_slide_title(&mut self, title: &str);

    /// Empty the step pane (slide entry).
    fn clear_steps(&mut self);

    /// Append the text block for step `index` to the step pane.
    fn append_step(&mut self, index: usize, markup: &str);

    /// Remove every block whose step index exceeds `index`.
    fn remove_steps_after(&mut self, index: usize);

    /// Start the enter transition of step `index`'s block. The engine calls
    /// this one display refresh after the append so the transition is
    /// observable rather than instantaneous.
    fn begin_step_transition(&mut self, index: usize);

    /// Smooth-scroll step `index`'s block into view.
    fn scroll_step_into_view(&mut self, index: usize);

    /// Show the full-bleed intro overlay.
    fn show_overlay(&mut self, intro: &IntroConfig);

    /// Start the overlay fade-out; completion comes back as
    /// [`crate::Event::TransitionEnded`] with the returned token.
    fn begin_overlay_fade(&mut self) -> TransitionToken;

    /// Drop the overlay from the display once its fade has completed.
    fn remove_overlay(&mut self);

    /// Create the render surface for a new slide, sized to the container's
    /// current content box and the display's pixel density.
    fn create_surface(&mut self, id: SurfaceId) -> LecternResult<SurfaceInfo>;

    /// Resize the backing surface of `id` and report the new geometry.
    fn resize_surface(&mut self, id: SurfaceId, size: Size) -> SurfaceInfo;

    /// Release surface `id` and stop delivering frame events for it.
    fn destroy_surface(&mut self, id: SurfaceId);

    /// Drawing handle of surface `id`, if it is still alive.
    fn painter(&mut self, id: SurfaceId) -> Option<&mut Self::Painter>;

    /// Arm a one-shot timer; expiry comes back as [`crate::Event::Timer`].
    /// Delays are presentation pacing, not correctness-critical deadlines.
    fn set_timeout(&mut self, delay: Duration) -> TimerId;
}
