use tracing::{debug, warn};

use crate::host::speech::{SpeechEngine, Voice};
use crate::narrate::voice::{VoicePolicy, choose_voice};

/// Voice-resolution state. Resolution is asynchronous: on first load the
/// platform may report no voices, so the narrator parks at most one pending
/// utterance until a voices-changed event lets the policy run.
#[derive(Clone, Debug, PartialEq, Eq)]
enum VoiceState {
    Unresolved { pending: Option<String> },
    Resolved(Voice),
}

/// The narration subsystem.
///
/// Holds the selected voice (resolved once, cached for the session), a
/// single-slot pending utterance (latest write wins) and the user-facing
/// enabled flag. At most one utterance is ever in flight: a new `speak`
/// pre-empts the previous one rather than queuing behind it.
pub struct Narrator<S> {
    engine: Option<S>,
    policy: VoicePolicy,
    state: VoiceState,
    enabled: bool,
    degraded: bool,
}

impl<S: SpeechEngine> Narrator<S> {
    /// Wrap a speech capability (`None` when the environment has none) and
    /// attempt an initial voice resolution.
    pub fn new(engine: Option<S>, policy: VoicePolicy) -> Self {
        let mut narrator = Self {
            engine,
            policy,
            state: VoiceState::Unresolved { pending: None },
            enabled: true,
            degraded: false,
        };
        narrator.try_resolve();
        narrator
    }

    /// `true` while the speech capability is present and has not failed.
    pub fn available(&self) -> bool {
        self.engine.is_some() && !self.degraded
    }

    /// Current user-facing toggle state.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Set the narration toggle. Turning it off cancels the in-flight
    /// utterance and drops any pending one; turning it back on does not
    /// replay missed narration.
    pub fn set_enabled(&mut self, on: bool) {
        self.enabled = on;
        if !on {
            if let VoiceState::Unresolved { pending } = &mut self.state {
                *pending = None;
            }
            if let Some(engine) = self.engine.as_mut() {
                engine.cancel();
            }
        }
    }

    /// Flip the narration toggle, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.enabled);
        self.enabled
    }

    /// Narrate `text`.
    ///
    /// Disabled or unavailable: no-op. Voice not yet resolved: `text` becomes
    /// the single pending value, overwriting any earlier one — only the most
    /// recent request is honored once voices become ready. Resolved: cancel
    /// the in-flight utterance and speak immediately.
    pub fn speak(&mut self, text: &str) {
        if !self.enabled || !self.available() {
            return;
        }
        match &mut self.state {
            VoiceState::Unresolved { pending } => {
                *pending = Some(text.to_owned());
            }
            VoiceState::Resolved(voice) => {
                let voice = voice.clone();
                self.dispatch(&voice, text);
            }
        }
    }

    /// React to the platform's voices-changed notification. The selection
    /// policy is applied exactly once; once resolved, later notifications are
    /// ignored.
    pub fn on_voices_changed(&mut self) {
        if matches!(self.state, VoiceState::Resolved(_)) {
            return;
        }
        self.try_resolve();
    }

    fn try_resolve(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        let voices = engine.voices();
        let Some(voice) = choose_voice(&voices, &self.policy).cloned() else {
            return;
        };
        debug!(voice = %voice.name, lang = %voice.lang, "narration voice resolved");

        let pending = match std::mem::replace(&mut self.state, VoiceState::Resolved(voice.clone()))
        {
            VoiceState::Unresolved { pending } => pending,
            VoiceState::Resolved(_) => None,
        };
        if let Some(text) = pending
            && self.enabled
        {
            self.dispatch(&voice, &text);
        }
    }

    fn dispatch(&mut self, voice: &Voice, text: &str) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        engine.cancel();
        if let Err(err) = engine.speak(text, voice) {
            warn!(%err, "speech backend failed; continuing visual-only");
            self.degraded = true;
        }
    }
}

impl<S> std::fmt::Debug for Narrator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Narrator")
            .field("has_engine", &self.engine.is_some())
            .field("resolved", &matches!(self.state, VoiceState::Resolved(_)))
            .field("enabled", &self.enabled)
            .field("degraded", &self.degraded)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/narrate/narrator.rs"]
mod tests;
