use super::*;

#[path = "../support/mock.rs"]
mod mock;

use mock::{MockSpeech, voice};

fn policy() -> VoicePolicy {
    VoicePolicy::default()
}

#[test]
fn no_engine_means_unavailable_and_silent() {
    let mut narrator = Narrator::<MockSpeech>::new(None, policy());
    assert!(!narrator.available());
    narrator.speak("nothing happens");
    narrator.on_voices_changed();
}

#[test]
fn resolves_immediately_when_voices_are_already_loaded() {
    let speech = MockSpeech::new(&[voice("Samantha", "en-US")]);
    let spoken = speech.spoken.clone();
    let mut narrator = Narrator::new(Some(speech), policy());
    narrator.speak("hello");
    assert_eq!(
        spoken.borrow().as_slice(),
        &[("hello".to_owned(), "Samantha".to_owned())]
    );
}

#[test]
fn pending_utterance_is_latest_write_wins() {
    let speech = MockSpeech::new(&[]);
    let spoken = speech.spoken.clone();
    let voices = speech.voices.clone();
    let mut narrator = Narrator::new(Some(speech), policy());

    narrator.speak("first step text");
    narrator.speak("second step text");
    assert!(spoken.borrow().is_empty());

    voices.borrow_mut().push(voice("Samantha", "en-US"));
    narrator.on_voices_changed();
    assert_eq!(
        spoken.borrow().as_slice(),
        &[("second step text".to_owned(), "Samantha".to_owned())]
    );
}

#[test]
fn voice_selection_happens_exactly_once() {
    let speech = MockSpeech::new(&[voice("Samantha", "en-US")]);
    let spoken = speech.spoken.clone();
    let voices = speech.voices.clone();
    let mut narrator = Narrator::new(
        Some(speech),
        VoicePolicy {
            preferred_lang: None,
            preferred_name: Some("Daniel".into()),
        },
    );

    // Preferred voice absent at resolution time: policy falls through.
    narrator.speak("a");
    assert_eq!(spoken.borrow()[0].1, "Samantha");

    // A later voices-changed must not re-run the policy mid-lesson.
    voices.borrow_mut().insert(0, voice("Daniel", "en-GB"));
    narrator.on_voices_changed();
    narrator.speak("b");
    assert_eq!(spoken.borrow()[1].1, "Samantha");
}

#[test]
fn disabling_drops_the_pending_utterance_and_cancels() {
    let speech = MockSpeech::new(&[]);
    let spoken = speech.spoken.clone();
    let voices = speech.voices.clone();
    let cancels = speech.cancels.clone();
    let mut narrator = Narrator::new(Some(speech), policy());

    narrator.speak("about to be muted");
    assert!(!narrator.toggle());
    assert!(*cancels.borrow() >= 1);

    voices.borrow_mut().push(voice("Samantha", "en-US"));
    narrator.on_voices_changed();
    assert!(spoken.borrow().is_empty());

    // Re-enabling does not replay missed narration.
    assert!(narrator.toggle());
    assert!(spoken.borrow().is_empty());
    narrator.speak("fresh text");
    assert_eq!(spoken.borrow().len(), 1);
}

#[test]
fn speak_pre_empts_the_in_flight_utterance() {
    let speech = MockSpeech::new(&[voice("Samantha", "en-US")]);
    let cancels = speech.cancels.clone();
    let mut narrator = Narrator::new(Some(speech), policy());
    narrator.speak("a");
    narrator.speak("b");
    // Each dispatch cancels whatever was playing first.
    assert_eq!(*cancels.borrow(), 2);
}

#[test]
fn backend_failure_degrades_to_visual_only() {
    let mut speech = MockSpeech::new(&[voice("Samantha", "en-US")]);
    speech.fail = true;
    let spoken = speech.spoken.clone();
    let mut narrator = Narrator::new(Some(speech), policy());

    assert!(narrator.available());
    narrator.speak("this one fails");
    assert!(!narrator.available());

    // Still enabled from the user's point of view, but silent from now on.
    assert!(narrator.enabled());
    narrator.speak("never dispatched");
    assert!(spoken.borrow().is_empty());
}
