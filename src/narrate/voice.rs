use crate::host::speech::Voice;

/// Preference order for picking the narration voice.
///
/// Matching is case-insensitive: a name substring match wins, then a language
/// prefix match, then the first available voice. The chosen voice is cached
/// for the session.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VoicePolicy {
    /// Preferred language tag prefix (e.g. `en`).
    #[serde(default)]
    pub preferred_lang: Option<String>,
    /// Preferred substring of the voice name.
    #[serde(default)]
    pub preferred_name: Option<String>,
}

/// Apply `policy` to the available `voices`.
pub fn choose_voice<'a>(voices: &'a [Voice], policy: &VoicePolicy) -> Option<&'a Voice> {
    if let Some(name) = &policy.preferred_name {
        let needle = name.to_lowercase();
        if let Some(v) = voices.iter().find(|v| v.name.to_lowercase().contains(&needle)) {
            return Some(v);
        }
    }
    if let Some(lang) = &policy.preferred_lang {
        let needle = lang.to_lowercase();
        if let Some(v) = voices
            .iter()
            .find(|v| v.lang.to_lowercase().starts_with(&needle))
        {
            return Some(v);
        }
    }
    voices.first()
}
