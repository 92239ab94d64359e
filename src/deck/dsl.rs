use crate::deck::model::{Slide, Step, SurfaceCtx};
use crate::foundation::core::Direction;
use crate::surface::state::StateBag;

/// Builder for [`Slide`] definitions.
///
/// ```
/// use lectern::SlideBuilder;
///
/// let slide = SlideBuilder::<()>::new("a signal")
///     .step("A <strong>pure tone</strong> oscillates at one frequency.")
///     .step("At any instant the signal has an <em>amplitude</em>.")
///     .draw(|_ctx, _state| Ok(()))
///     .build();
/// assert_eq!(slide.steps.len(), 2);
/// ```
pub struct SlideBuilder<C> {
    title: String,
    steps: Vec<Step<C>>,
    setup: Option<crate::deck::model::SlideHook<C>>,
    draw: Option<crate::deck::model::SlideHook<C>>,
    resize: Option<crate::deck::model::SlideHook<C>>,
}

impl<C> SlideBuilder<C> {
    /// Start a slide with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            steps: Vec::new(),
            setup: None,
            draw: None,
            resize: None,
        }
    }

    /// Append a text-only step.
    pub fn step(mut self, markup: impl Into<String>) -> Self {
        self.steps.push(Step::text(markup));
        self
    }

    /// Append a step whose reveal also mutates the visual state.
    pub fn step_with_enter<F>(mut self, markup: impl Into<String>, hook: F) -> Self
    where
        F: FnMut(&mut SurfaceCtx<'_, C>, &mut StateBag, Direction) -> anyhow::Result<()> + 'static,
    {
        self.steps.push(Step {
            markup: markup.into(),
            enter: Some(Box::new(hook)),
        });
        self
    }

    /// Set the hook invoked once when the slide's surface is created.
    pub fn setup<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut SurfaceCtx<'_, C>, &mut StateBag) -> anyhow::Result<()> + 'static,
    {
        self.setup = Some(Box::new(hook));
        self
    }

    /// Set the hook invoked once per display refresh.
    pub fn draw<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut SurfaceCtx<'_, C>, &mut StateBag) -> anyhow::Result<()> + 'static,
    {
        self.draw = Some(Box::new(hook));
        self
    }

    /// Set the hook invoked after the backing surface is resized.
    pub fn resize<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut SurfaceCtx<'_, C>, &mut StateBag) -> anyhow::Result<()> + 'static,
    {
        self.resize = Some(Box::new(hook));
        self
    }

    /// Finish the slide definition.
    pub fn build(self) -> Slide<C> {
        Slide {
            title: self.title,
            steps: self.steps,
            setup: self.setup,
            draw: self.draw,
            resize: self.resize,
        }
    }
}
