use std::collections::HashMap;

use tracing::debug;

use crate::deck::model::Deck;
use crate::foundation::core::{Size, SurfaceId, TimerId, TransitionToken};
use crate::foundation::error::LecternResult;
use crate::host::platform::Platform;
use crate::host::speech::SpeechEngine;
use crate::narrate::narrator::Narrator;
use crate::nav::machine::{Cursor, Navigator, SlideEntry, Transition};
use crate::session::chrome::{ChromeSpec, ChromeView};
use crate::session::config::EngineConfig;
use crate::session::events::{Event, Input, Key};
use crate::session::overlay::OverlayState;
use crate::steps::renderer::StepRenderer;
use crate::surface::lifecycle::SurfaceLifecycle;

/// The deck engine: one instance per loaded lesson.
///
/// Owns the deck, the navigation state machine and every subsystem, and is
/// the single writer of all of them. It consumes [`Event`]s one at a time and
/// turns pure [`Transition`] values into platform side effects, so every
/// observable behavior is reachable from [`DeckEngine::handle`].
pub struct DeckEngine<P: Platform, S> {
    platform: P,
    deck: Deck<P::Painter>,
    config: EngineConfig,
    nav: Navigator,
    narrator: Narrator<S>,
    lifecycle: SurfaceLifecycle,
    steps: StepRenderer,
    overlay: OverlayState,
    /// Step whose enter transition is applied on the next frame event, so the
    /// platform paints the appended block once before animating it.
    pending_step_transition: Option<usize>,
    /// Armed scroll timers, keyed by timer id, valued by step index.
    scroll_timers: HashMap<TimerId, usize>,
}

impl<P, S> DeckEngine<P, S>
where
    P: Platform,
    S: SpeechEngine,
{
    /// Validate `deck`, mount the chrome, and either show the intro overlay
    /// or start the deck immediately when no intro is configured.
    pub fn init(
        platform: P,
        deck: Deck<P::Painter>,
        config: EngineConfig,
        speech: Option<S>,
    ) -> LecternResult<Self> {
        deck.validate()?;

        let nav = Navigator::new(deck.step_counts());
        let narrator = Narrator::new(speech, config.voice.clone());

        let mut engine = Self {
            platform,
            deck,
            config,
            nav,
            narrator,
            lifecycle: SurfaceLifecycle::new(),
            steps: StepRenderer::new(),
            overlay: OverlayState::Removed,
            pending_step_transition: None,
            scroll_timers: HashMap::new(),
        };

        engine.platform.mount_chrome(&ChromeSpec {
            slide_count: engine.nav.slide_count(),
            narration_available: engine.narrator.available(),
        })?;

        match engine.config.intro.clone() {
            Some(intro) => {
                engine.platform.show_overlay(&intro);
                engine.overlay = OverlayState::Shown;
            }
            None => engine.start_deck()?,
        }
        Ok(engine)
    }

    /// Current navigation position.
    pub fn cursor(&self) -> Cursor {
        self.nav.cursor()
    }

    /// `true` while the intro overlay still owns dismissal input.
    pub fn overlay_shown(&self) -> bool {
        self.overlay.is_shown()
    }

    /// Current state of the narration toggle.
    pub fn narration_enabled(&self) -> bool {
        self.narrator.enabled()
    }

    /// Shared access to the platform adapter.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Mutable access to the platform adapter.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Consume one inbound event.
    ///
    /// Stale surface ids, unknown timers and foreign transition tokens are
    /// dropped silently; the only errors that surface are configuration
    /// problems and failed content hooks.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn handle(&mut self, event: Event) -> LecternResult<()> {
        match event {
            Event::Input(input) => self.handle_input(input),
            Event::VoicesChanged => {
                self.narrator.on_voices_changed();
                Ok(())
            }
            Event::Frame { surface, dt_secs } => self.on_frame(surface, dt_secs),
            Event::ContainerResized { surface, size } => self.on_resize(surface, size),
            Event::Timer(id) => {
                if let Some(step) = self.scroll_timers.remove(&id) {
                    self.platform.scroll_step_into_view(step);
                }
                Ok(())
            }
            Event::TransitionEnded(token) => {
                self.on_transition_ended(token);
                Ok(())
            }
        }
    }

    fn handle_input(&mut self, input: Input) -> LecternResult<()> {
        // While the overlay is up it owns input: a fixed set of gestures
        // dismisses it, everything else is ignored.
        if self.overlay.is_shown() {
            match input {
                Input::OverlayClick
                | Input::Key(Key::ArrowRight | Key::Space | Key::Enter) => {
                    return self.dismiss_overlay();
                }
                _ => return Ok(()),
            }
        }

        match input {
            Input::Next | Input::Key(Key::ArrowRight | Key::Space) => {
                let t = self.nav.advance();
                self.apply(t)
            }
            Input::Prev | Input::Key(Key::ArrowLeft) => {
                let t = self.nav.retreat();
                self.apply(t)
            }
            Input::Dot(target) => {
                let t = self.nav.go_to_slide(target);
                self.apply(t)
            }
            Input::ToggleNarration => {
                let enabled = self.narrator.toggle();
                debug!(enabled, "narration toggled");
                self.sync_chrome();
                Ok(())
            }
            // Enter only dismisses the overlay; clicks on a removed overlay
            // are leftover events from the fade.
            Input::Key(Key::Enter) | Input::OverlayClick => Ok(()),
        }
    }

    /// Start the fade-out and the deck in the same event, so the first slide
    /// is already animating behind the dissolving overlay.
    fn dismiss_overlay(&mut self) -> LecternResult<()> {
        let token = self.platform.begin_overlay_fade();
        self.overlay = OverlayState::Dismissing { token };
        self.start_deck()
    }

    fn on_transition_ended(&mut self, token: TransitionToken) {
        if self.overlay.finish_if(token) {
            self.platform.remove_overlay();
        }
    }

    fn start_deck(&mut self) -> LecternResult<()> {
        let t = self.nav.start();
        self.apply(t)
    }

    fn apply(&mut self, transition: Transition) -> LecternResult<()> {
        match transition {
            Transition::None => return Ok(()),
            Transition::Step { slide, from, to } => {
                debug!(slide, from, to, "step transition");
                if to > from {
                    self.reveal_step(slide, to)?;
                } else {
                    let Some(s) = self.deck.slide_mut(slide) else {
                        return Ok(());
                    };
                    self.steps
                        .rewind_to(&mut self.platform, &mut self.lifecycle, slide, s, to)?;
                }
            }
            Transition::Slide { from, to, entry } => {
                debug!(?from, to, ?entry, "slide transition");
                self.enter_slide(to, entry)?;
            }
        }
        self.sync_chrome();
        Ok(())
    }

    /// Tear down the exiting slide and bring the target up, landing on step 0
    /// (forward, narrated) or on the last step with every earlier block
    /// already in place (backward, mute).
    fn enter_slide(&mut self, index: usize, entry: SlideEntry) -> LecternResult<()> {
        // Pacing state belongs to the exiting slide.
        self.pending_step_transition = None;
        self.scroll_timers.clear();

        let Some(slide) = self.deck.slide_mut(index) else {
            return Ok(());
        };
        self.lifecycle.enter_slide(&mut self.platform, index, slide)?;
        self.platform.set_slide_title(&slide.title);
        self.platform.clear_steps();
        self.steps.reset();

        match entry {
            SlideEntry::AtStart => self.reveal_step(index, 0),
            SlideEntry::AtEnd => {
                let Some(slide) = self.deck.slide_mut(index) else {
                    return Ok(());
                };
                let last = slide.steps.len().saturating_sub(1);
                self.steps.populate_backward(
                    &mut self.platform,
                    &mut self.lifecycle,
                    index,
                    slide,
                    last,
                )
            }
        }
    }

    fn reveal_step(&mut self, slide_index: usize, step_index: usize) -> LecternResult<()> {
        let scroll_delay = self.config.scroll_delay();
        let Some(slide) = self.deck.slide_mut(slide_index) else {
            return Ok(());
        };
        let outcome = self.steps.reveal_forward(
            &mut self.platform,
            &mut self.lifecycle,
            &mut self.narrator,
            slide_index,
            slide,
            step_index,
            scroll_delay,
        )?;
        if outcome.pending_transition.is_some() {
            self.pending_step_transition = outcome.pending_transition;
        }
        if let Some(timer) = outcome.scroll_timer {
            self.scroll_timers.insert(timer, step_index);
        }
        Ok(())
    }

    fn on_frame(&mut self, surface: SurfaceId, dt_secs: f64) -> LecternResult<()> {
        if !self.lifecycle.is_current(surface) {
            debug!(surface = surface.0, "dropping frame for stale surface");
            return Ok(());
        }
        // The appended block has been painted once by now; animating it on
        // this refresh makes the enter transition observable.
        if let Some(step) = self.pending_step_transition.take() {
            self.platform.begin_step_transition(step);
        }
        let Some(slide_index) = self.lifecycle.active_slide() else {
            return Ok(());
        };
        let Some(slide) = self.deck.slide_mut(slide_index) else {
            return Ok(());
        };
        self.lifecycle
            .frame(&mut self.platform, slide, surface, dt_secs)?;
        Ok(())
    }

    fn on_resize(&mut self, surface: SurfaceId, size: Size) -> LecternResult<()> {
        let Some(slide_index) = self.lifecycle.active_slide() else {
            return Ok(());
        };
        let Some(slide) = self.deck.slide_mut(slide_index) else {
            return Ok(());
        };
        self.lifecycle
            .resize(&mut self.platform, slide, surface, size)?;
        Ok(())
    }

    fn sync_chrome(&mut self) {
        let Cursor::At { slide, step } = self.nav.cursor() else {
            return;
        };
        let view = ChromeView {
            slide_label: format!("{} / {}", slide + 1, self.nav.slide_count()),
            step_counter: format!("{} / {}", step + 1, self.nav.step_count(slide)),
            active_dot: slide,
            prev_disabled: self.nav.at_origin(),
            next_disabled: self.nav.at_terminal(),
            narration_enabled: self.narrator.enabled(),
        };
        self.platform.apply_chrome(&view);
    }
}

impl<P: Platform, S> std::fmt::Debug for DeckEngine<P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckEngine")
            .field("cursor", &self.nav.cursor())
            .field("overlay", &self.overlay)
            .field("steps_shown", &self.steps.shown())
            .field("narrator", &self.narrator)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/engine.rs"]
mod tests;
