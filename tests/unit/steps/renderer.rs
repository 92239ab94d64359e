use super::*;

#[path = "../support/mock.rs"]
mod mock;

use mock::{MockPlatform, MockSpeech, Painter, voice};

use crate::deck::dsl::SlideBuilder;
use crate::narrate::voice::VoicePolicy;

fn slide() -> Slide<Painter> {
    SlideBuilder::<Painter>::new("waves")
        .step_with_enter("A wave is a <em>disturbance</em>", |ctx, _, dir| {
            ctx.painter.log.push(format!("enter 0 {dir:?}"));
            Ok(())
        })
        .step_with_enter("Its height traces a curve", |ctx, _, dir| {
            ctx.painter.log.push(format!("enter 1 {dir:?}"));
            Ok(())
        })
        .step("No hook on this one")
        .build()
}

fn narrator_with_log() -> (Narrator<MockSpeech>, std::rc::Rc<std::cell::RefCell<Vec<(String, String)>>>) {
    let speech = MockSpeech::new(&[voice("Samantha", "en-US")]);
    let spoken = speech.spoken.clone();
    (Narrator::new(Some(speech), VoicePolicy::default()), spoken)
}

#[test]
fn forward_reveal_appends_runs_hook_narrates_and_arms_pacing() {
    let mut platform = MockPlatform::new();
    let mut lifecycle = SurfaceLifecycle::new();
    let mut slide = slide();
    let (mut narrator, spoken) = narrator_with_log();
    let id = lifecycle.enter_slide(&mut platform, 0, &mut slide).unwrap();
    platform.take_ops();

    let mut renderer = StepRenderer::new();
    let outcome = renderer
        .reveal_forward(
            &mut platform,
            &mut lifecycle,
            &mut narrator,
            0,
            &mut slide,
            0,
            Duration::from_millis(200),
        )
        .unwrap();

    assert_eq!(
        platform.ops,
        vec![
            "append 0 A wave is a <em>disturbance</em>".to_owned(),
            "timer 0 200ms".to_owned(),
        ]
    );
    assert_eq!(platform.painter_log(id), &["enter 0 Forward".to_owned()]);
    // Narration reads the stripped text, not the markup.
    assert_eq!(spoken.borrow()[0].0, "A wave is a disturbance");
    assert_eq!(outcome.pending_transition, Some(0));
    assert_eq!(outcome.scroll_timer, Some(TimerId(0)));
    assert_eq!(renderer.shown(), 1);
}

#[test]
fn rewind_prunes_silently_and_enters_backward() {
    let mut platform = MockPlatform::new();
    let mut lifecycle = SurfaceLifecycle::new();
    let mut slide = slide();
    let (mut narrator, spoken) = narrator_with_log();
    let id = lifecycle.enter_slide(&mut platform, 0, &mut slide).unwrap();

    let mut renderer = StepRenderer::new();
    for i in 0..2 {
        renderer
            .reveal_forward(
                &mut platform,
                &mut lifecycle,
                &mut narrator,
                0,
                &mut slide,
                i,
                Duration::from_millis(200),
            )
            .unwrap();
    }
    assert_eq!(spoken.borrow().len(), 2);
    platform.take_ops();

    renderer
        .rewind_to(&mut platform, &mut lifecycle, 0, &mut slide, 0)
        .unwrap();

    assert_eq!(platform.ops, vec!["remove_after 0".to_owned()]);
    assert_eq!(platform.painter_log(id).last().unwrap(), "enter 0 Backward");
    assert_eq!(spoken.borrow().len(), 2, "rewind must be mute");
    assert_eq!(renderer.shown(), 1);
}

#[test]
fn backward_population_shows_blocks_instantly_without_pacing() {
    let mut platform = MockPlatform::new();
    let mut lifecycle = SurfaceLifecycle::new();
    let mut slide = slide();
    let id = lifecycle.enter_slide(&mut platform, 0, &mut slide).unwrap();
    platform.take_ops();

    let mut renderer = StepRenderer::new();
    renderer
        .populate_backward(&mut platform, &mut lifecycle, 0, &mut slide, 1)
        .unwrap();

    assert_eq!(
        platform.ops,
        vec![
            "append 0 A wave is a <em>disturbance</em>".to_owned(),
            "step_transition 0".to_owned(),
            "append 1 Its height traces a curve".to_owned(),
            "step_transition 1".to_owned(),
        ]
    );
    // Only the landing step's hook runs, backward.
    assert_eq!(platform.painter_log(id), &["enter 1 Backward".to_owned()]);
    assert!(!platform.ops.iter().any(|op| op.starts_with("timer")));
    assert_eq!(renderer.shown(), 2);
}

#[test]
fn out_of_range_reveal_is_a_no_op() {
    let mut platform = MockPlatform::new();
    let mut lifecycle = SurfaceLifecycle::new();
    let mut slide = slide();
    let (mut narrator, _) = narrator_with_log();

    let mut renderer = StepRenderer::new();
    let outcome = renderer
        .reveal_forward(
            &mut platform,
            &mut lifecycle,
            &mut narrator,
            0,
            &mut slide,
            9,
            Duration::from_millis(200),
        )
        .unwrap();
    assert_eq!(outcome, RevealOutcome::default());
    assert!(platform.ops.is_empty());
}
