//! Lectern is a headless engine for animated, narrated slide decks.
//!
//! A lesson is a [`Deck`] of slides; each slide pairs incrementally revealed
//! text steps with an animated visualization driven by `setup`/`draw`/`resize`
//! hooks. The engine owns the navigation state machine, the per-slide render
//! surface lifecycle, the step pane and the narration subsystem, and it talks
//! to the outside world exclusively through two capability traits:
//! [`Platform`] (display, overlay, surfaces, timers) and [`SpeechEngine`]
//! (narration). Drive it by feeding [`Event`]s to [`DeckEngine::handle`].
//!
//! ```no_run
//! use lectern::{Deck, DeckEngine, EngineConfig, NoSpeech, SlideBuilder};
//! # fn run(platform: impl lectern::Platform<Painter = ()>) -> lectern::LecternResult<()> {
//! let mut deck = Deck::new();
//! deck.register(
//!     SlideBuilder::new("What is a wave?")
//!         .step("A wave is a <em>disturbance</em> that moves.")
//!         .step("Its height over time traces a curve.")
//!         .build(),
//! );
//! let mut engine = DeckEngine::init(platform, deck, EngineConfig::default(), None::<NoSpeech>)?;
//! engine.handle(lectern::Event::Input(lectern::Input::Next))?;
//! # Ok(()) }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod deck;
mod foundation;
mod host;
mod narrate;
mod nav;
mod session;
mod steps;
mod surface;

pub use deck::dsl::SlideBuilder;
pub use deck::model::{Deck, EnterHook, Slide, SlideHook, Step, SurfaceCtx};
pub use foundation::core::{
    Direction, FrameStamp, Point, Size, SurfaceId, SurfaceInfo, TimerId, TransitionToken, Vec2,
};
pub use foundation::error::{LecternError, LecternResult};
pub use host::platform::Platform;
pub use host::speech::{NoSpeech, SpeechEngine, Voice};
pub use narrate::narrator::Narrator;
pub use narrate::voice::{VoicePolicy, choose_voice};
pub use nav::machine::{Cursor, Navigator, SlideEntry, Transition};
pub use session::chrome::{ChromeSpec, ChromeView};
pub use session::config::{EngineConfig, IntroConfig};
pub use session::engine::DeckEngine;
pub use session::events::{Event, Input, Key};
pub use session::overlay::OverlayState;
pub use steps::renderer::{RevealOutcome, StepRenderer};
pub use steps::text::strip_markup;
pub use surface::lifecycle::SurfaceLifecycle;
pub use surface::state::StateBag;
