/// One synthesizer voice as reported by the speech capability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Voice {
    /// Human-readable voice name.
    pub name: String,
    /// BCP 47 language tag (e.g. `en-US`).
    pub lang: String,
}

/// Text-to-speech capability.
///
/// The voice set is platform-dependent and may be empty on first load; the
/// narrator re-queries it when the session receives a voices-changed event.
/// A failing or absent backend degrades playback to visual-only and never
/// blocks navigation.
pub trait SpeechEngine {
    /// The currently available voices (possibly empty).
    fn voices(&mut self) -> Vec<Voice>;

    /// Start speaking `text` with `voice`. Any prior utterance has already
    /// been cancelled by the narrator.
    fn speak(&mut self, text: &str, voice: &Voice) -> anyhow::Result<()>;

    /// Cancel the in-flight utterance, if any.
    fn cancel(&mut self);
}

/// Null speech capability: reports no voices, narration stays unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSpeech;

impl SpeechEngine for NoSpeech {
    fn voices(&mut self) -> Vec<Voice> {
        Vec::new()
    }

    fn speak(&mut self, _text: &str, _voice: &Voice) -> anyhow::Result<()> {
        Ok(())
    }

    fn cancel(&mut self) {}
}
