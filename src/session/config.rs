use std::time::Duration;

use crate::foundation::error::{LecternError, LecternResult};
use crate::narrate::voice::VoicePolicy;

fn default_scroll_delay_ms() -> u64 {
    200
}

/// Intro overlay copy shown before slide 0 starts.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IntroConfig {
    /// Headline of the overlay.
    pub title: String,
    /// Secondary line under the headline.
    #[serde(default, alias = "sub")]
    pub subtitle: Option<String>,
}

/// Engine configuration.
///
/// A pure data model, deserializable from the JSON shape lessons pass at
/// boot. Every field has a default; `EngineConfig::default()` is a deck with
/// no intro overlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EngineConfig {
    /// Show an intro overlay before the deck starts.
    #[serde(default)]
    pub intro: Option<IntroConfig>,
    /// Narration voice preference.
    #[serde(default)]
    pub voice: VoicePolicy,
    /// Delay between a forward reveal and its scroll-into-view, long enough
    /// for the enter transition to visually start.
    #[serde(default = "default_scroll_delay_ms")]
    pub scroll_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            intro: None,
            voice: VoicePolicy::default(),
            scroll_delay_ms: default_scroll_delay_ms(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from its JSON form.
    pub fn from_json(json: &str) -> LecternResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| LecternError::config(format!("invalid engine config: {e}")))
    }

    /// The scroll pacing delay as a [`Duration`].
    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }
}
