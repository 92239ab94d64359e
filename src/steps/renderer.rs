use std::time::Duration;

use crate::deck::model::Slide;
use crate::foundation::core::{Direction, TimerId};
use crate::foundation::error::LecternResult;
use crate::host::platform::Platform;
use crate::host::speech::SpeechEngine;
use crate::narrate::narrator::Narrator;
use crate::steps::text::strip_markup;
use crate::surface::lifecycle::SurfaceLifecycle;

/// Pacing work left over from a forward reveal, finished by the session:
/// the enter transition is applied on the next frame event and the scroll
/// happens when the timer fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealOutcome {
    /// Step whose enter transition starts on the next display refresh.
    pub pending_transition: Option<usize>,
    /// Timer armed for the scroll-into-view of the revealed step.
    pub scroll_timer: Option<TimerId>,
}

/// Manages the step-text pane: appends on forward reveals, prunes on
/// backward ones, and hands revealed text to the narrator.
#[derive(Clone, Copy, Debug, Default)]
pub struct StepRenderer {
    shown: usize,
}

impl StepRenderer {
    /// A renderer for an empty step pane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all blocks; the caller has already cleared the pane.
    pub fn reset(&mut self) {
        self.shown = 0;
    }

    /// Number of blocks currently in the pane.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Forward reveal of step `index`.
    ///
    /// Side-effect order is part of the contract: append the block, schedule
    /// its enter transition, run the step's `enter` hook, dispatch narration,
    /// arm the scroll timer. The hook may depend on the block already
    /// existing, and narration must reflect exactly the revealed text.
    pub fn reveal_forward<P, S>(
        &mut self,
        platform: &mut P,
        lifecycle: &mut SurfaceLifecycle,
        narrator: &mut Narrator<S>,
        slide_index: usize,
        slide: &mut Slide<P::Painter>,
        index: usize,
        scroll_delay: Duration,
    ) -> LecternResult<RevealOutcome>
    where
        P: Platform,
        S: SpeechEngine,
    {
        let Some(step) = slide.steps.get_mut(index) else {
            return Ok(RevealOutcome::default());
        };

        platform.append_step(index, &step.markup);
        let mut outcome = RevealOutcome {
            pending_transition: Some(index),
            scroll_timer: None,
        };
        lifecycle.run_step_enter(platform, slide_index, step, Direction::Forward)?;
        narrator.speak(&strip_markup(&step.markup));
        outcome.scroll_timer = Some(platform.set_timeout(scroll_delay));

        self.shown = index + 1;
        Ok(outcome)
    }

    /// Backward reveal: prune every block past `index` and run the target's
    /// `enter` hook with [`Direction::Backward`]. Mute, and non-destructive
    /// to earlier blocks.
    pub fn rewind_to<P: Platform>(
        &mut self,
        platform: &mut P,
        lifecycle: &mut SurfaceLifecycle,
        slide_index: usize,
        slide: &mut Slide<P::Painter>,
        index: usize,
    ) -> LecternResult<()> {
        platform.remove_steps_after(index);
        if let Some(step) = slide.steps.get_mut(index) {
            lifecycle.run_step_enter(platform, slide_index, step, Direction::Backward)?;
        }
        self.shown = index + 1;
        Ok(())
    }

    /// Populate the pane up to step `last` on a backward slide entry.
    ///
    /// Blocks appear instantly (their text was already read on the way
    /// forward) and nothing is narrated; only the landing step's `enter`
    /// hook runs, backward.
    pub fn populate_backward<P: Platform>(
        &mut self,
        platform: &mut P,
        lifecycle: &mut SurfaceLifecycle,
        slide_index: usize,
        slide: &mut Slide<P::Painter>,
        last: usize,
    ) -> LecternResult<()> {
        for (i, step) in slide.steps.iter().take(last + 1).enumerate() {
            platform.append_step(i, &step.markup);
            platform.begin_step_transition(i);
        }
        if let Some(step) = slide.steps.get_mut(last) {
            lifecycle.run_step_enter(platform, slide_index, step, Direction::Backward)?;
        }
        self.shown = last + 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/steps/renderer.rs"]
mod tests;
