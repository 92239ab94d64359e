use std::fmt;

use crate::foundation::core::{Direction, FrameStamp, SurfaceInfo};
use crate::foundation::error::{LecternError, LecternResult};
use crate::surface::state::StateBag;

/// Context handed to slide and step hooks.
///
/// `C` is the platform's opaque painter: the drawing handle owned by the
/// environment (a canvas wrapper, a test double, ...). Lectern never
/// interprets it; it only threads it through to authored hooks together with
/// the surface geometry and frame timing.
pub struct SurfaceCtx<'a, C> {
    /// Drawing handle for the active surface.
    pub painter: &'a mut C,
    /// Geometry of the active surface.
    pub info: SurfaceInfo,
    /// Timing of the frame being drawn (defaults outside the draw phase).
    pub frame: FrameStamp,
}

/// Slide lifecycle hook (`setup`, `draw`, `resize`).
///
/// Hooks are authored content; they report failures as [`anyhow::Error`] and
/// the engine wraps them into [`LecternError::Content`] without catching them.
pub type SlideHook<C> =
    Box<dyn FnMut(&mut SurfaceCtx<'_, C>, &mut StateBag) -> anyhow::Result<()>>;

/// Step `enter` hook, invoked exactly once per visit direction-change.
pub type EnterHook<C> =
    Box<dyn FnMut(&mut SurfaceCtx<'_, C>, &mut StateBag, Direction) -> anyhow::Result<()>>;

/// One incrementally revealed unit of explanatory text within a slide.
pub struct Step<C> {
    /// Display markup for the step's text block. Narration strips the tags.
    pub markup: String,
    /// Optional visual-state mutation paired with the reveal.
    pub enter: Option<EnterHook<C>>,
}

impl<C> Step<C> {
    /// A plain text step with no `enter` hook.
    pub fn text(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            enter: None,
        }
    }
}

impl<C> fmt::Debug for Step<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("markup", &self.markup)
            .field("has_enter", &self.enter.is_some())
            .finish()
    }
}

/// One topic unit: a title, ordered steps, and animation lifecycle hooks.
///
/// Immutable once registered; the per-visit mutable state lives in the
/// [`StateBag`] created fresh on every slide entry, never here.
pub struct Slide<C> {
    /// Title shown in the text pane while the slide is active.
    pub title: String,
    /// Ordered steps revealed one by one.
    pub steps: Vec<Step<C>>,
    /// Invoked once when the slide's surface is created.
    pub setup: Option<SlideHook<C>>,
    /// Invoked once per display refresh while the slide is active.
    pub draw: Option<SlideHook<C>>,
    /// Invoked after the backing surface is resized.
    pub resize: Option<SlideHook<C>>,
}

impl<C> fmt::Debug for Slide<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slide")
            .field("title", &self.title)
            .field("steps", &self.steps.len())
            .field("has_setup", &self.setup.is_some())
            .field("has_draw", &self.draw.is_some())
            .field("has_resize", &self.resize.is_some())
            .finish()
    }
}

/// The full ordered set of slides in a lesson.
///
/// Append-only during registration; frozen (and validated) when handed to
/// [`crate::DeckEngine::init`]. Slide order is registration order.
pub struct Deck<C> {
    slides: Vec<Slide<C>>,
}

impl<C> Default for Deck<C> {
    fn default() -> Self {
        Self { slides: Vec::new() }
    }
}

impl<C> Deck<C> {
    /// An empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slide. Must happen before the deck is handed to the engine.
    pub fn register(&mut self, slide: Slide<C>) {
        self.slides.push(slide);
    }

    /// Number of registered slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// `true` when no slide has been registered.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The slide at `index`, if in range.
    pub fn slide(&self, index: usize) -> Option<&Slide<C>> {
        self.slides.get(index)
    }

    pub(crate) fn slide_mut(&mut self, index: usize) -> Option<&mut Slide<C>> {
        self.slides.get_mut(index)
    }

    /// Number of steps of the slide at `index` (zero when out of range).
    pub fn step_count(&self, index: usize) -> usize {
        self.slides.get(index).map_or(0, |s| s.steps.len())
    }

    pub(crate) fn step_counts(&self) -> Vec<usize> {
        self.slides.iter().map(|s| s.steps.len()).collect()
    }

    /// Check the invariants the engine relies on: a non-empty deck in which
    /// every slide has at least one step.
    pub fn validate(&self) -> LecternResult<()> {
        if self.slides.is_empty() {
            return Err(LecternError::validation("deck has no slides"));
        }
        for (i, slide) in self.slides.iter().enumerate() {
            if slide.steps.is_empty() {
                return Err(LecternError::validation(format!(
                    "slide {i} ('{}') has no steps",
                    slide.title
                )));
            }
        }
        Ok(())
    }
}

impl<C> fmt::Debug for Deck<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck").field("slides", &self.slides).finish()
    }
}
