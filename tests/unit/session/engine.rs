use super::*;

#[path = "../support/mock.rs"]
mod mock;

use mock::{MockPlatform, MockSpeech, Painter, voice};

use crate::deck::dsl::SlideBuilder;
use crate::foundation::error::LecternError;
use crate::session::config::IntroConfig;

fn demo_deck() -> Deck<Painter> {
    let mut deck = Deck::new();
    deck.register(
        SlideBuilder::<Painter>::new("What is a wave?")
            .step("A wave moves")
            .step("It has a <b>frequency</b>")
            .setup(|ctx, _| {
                ctx.painter.log.push("setup".into());
                Ok(())
            })
            .draw(|ctx, _| {
                ctx.painter.log.push(format!("draw {}", ctx.frame.index));
                Ok(())
            })
            .resize(|ctx, _| {
                ctx.painter.log.push("resize".into());
                Ok(())
            })
            .build(),
    );
    deck.register(SlideBuilder::new("Adding waves").step("Sum of sines").build());
    deck
}

fn engine_no_intro() -> DeckEngine<MockPlatform, MockSpeech> {
    let speech = MockSpeech::new(&[voice("Samantha", "en-US")]);
    DeckEngine::init(
        MockPlatform::new(),
        demo_deck(),
        EngineConfig::default(),
        Some(speech),
    )
    .unwrap()
}

fn engine_with_intro() -> DeckEngine<MockPlatform, MockSpeech> {
    let config = EngineConfig {
        intro: Some(IntroConfig {
            title: "Fourier Transform".into(),
            subtitle: Some("an animated lesson".into()),
        }),
        ..EngineConfig::default()
    };
    let speech = MockSpeech::new(&[voice("Samantha", "en-US")]);
    DeckEngine::init(MockPlatform::new(), demo_deck(), config, Some(speech)).unwrap()
}

#[test]
fn init_without_intro_mounts_chrome_and_starts_the_deck() {
    let engine = engine_no_intro();
    assert_eq!(engine.cursor(), Cursor::At { slide: 0, step: 0 });
    assert_eq!(
        engine.platform().ops,
        vec![
            "mount_chrome slides=2 narration=true".to_owned(),
            "create_surface 0".to_owned(),
            "title What is a wave?".to_owned(),
            "clear_steps".to_owned(),
            "append 0 A wave moves".to_owned(),
            "timer 0 200ms".to_owned(),
            "apply_chrome".to_owned(),
        ]
    );
    let view = engine.platform().views.last().unwrap();
    assert_eq!(view.slide_label, "1 / 2");
    assert_eq!(view.step_counter, "1 / 2");
    assert_eq!(view.active_dot, 0);
    assert!(view.prev_disabled);
    assert!(!view.next_disabled);
}

#[test]
fn init_rejects_a_stepless_slide() {
    let mut deck: Deck<Painter> = Deck::new();
    deck.register(SlideBuilder::new("empty").build());
    let err = DeckEngine::init(
        MockPlatform::new(),
        deck,
        EngineConfig::default(),
        None::<MockSpeech>,
    )
    .unwrap_err();
    assert!(matches!(err, LecternError::Validation(_)));
}

#[test]
fn init_fails_fast_when_the_chrome_cannot_mount() {
    let mut platform = MockPlatform::new();
    platform.fail_mount = true;
    let err = DeckEngine::init(
        platform,
        demo_deck(),
        EngineConfig::default(),
        None::<MockSpeech>,
    )
    .unwrap_err();
    assert!(matches!(err, LecternError::Config(_)));
}

#[test]
fn intro_overlay_gates_navigation_until_dismissed() {
    let mut engine = engine_with_intro();
    assert!(engine.overlay_shown());
    assert_eq!(engine.cursor(), Cursor::NotStarted);
    assert!(engine.platform().ops.contains(&"show_overlay Fourier Transform".to_owned()));
    assert!(!engine.platform().ops.iter().any(|op| op.starts_with("create_surface")));

    engine.handle(Event::Input(Input::Next)).unwrap();
    engine.handle(Event::Input(Input::Dot(1))).unwrap();
    assert_eq!(engine.cursor(), Cursor::NotStarted);

    engine.handle(Event::Input(Input::OverlayClick)).unwrap();
    assert!(!engine.overlay_shown());
    assert_eq!(engine.cursor(), Cursor::At { slide: 0, step: 0 });
    assert!(engine.platform().ops.contains(&"overlay_fade 0".to_owned()));
    assert!(engine.platform().ops.contains(&"create_surface 0".to_owned()));

    // Foreign token: some other transition finished, not the fade.
    engine
        .handle(Event::TransitionEnded(TransitionToken(5)))
        .unwrap();
    assert!(!engine.platform().ops.contains(&"remove_overlay".to_owned()));

    engine
        .handle(Event::TransitionEnded(TransitionToken(0)))
        .unwrap();
    assert!(engine.platform().ops.contains(&"remove_overlay".to_owned()));

    // The fade is done; its token is spent.
    let removals = engine.platform().ops.iter().filter(|op| *op == "remove_overlay").count();
    engine
        .handle(Event::TransitionEnded(TransitionToken(0)))
        .unwrap();
    assert_eq!(
        engine.platform().ops.iter().filter(|op| *op == "remove_overlay").count(),
        removals
    );
}

#[test]
fn enter_dismisses_the_overlay_but_never_navigates() {
    let mut engine = engine_with_intro();
    engine.handle(Event::Input(Input::Key(Key::Enter))).unwrap();
    assert_eq!(engine.cursor(), Cursor::At { slide: 0, step: 0 });

    engine.handle(Event::Input(Input::Key(Key::Enter))).unwrap();
    assert_eq!(engine.cursor(), Cursor::At { slide: 0, step: 0 });

    engine.handle(Event::Input(Input::Key(Key::Space))).unwrap();
    assert_eq!(engine.cursor(), Cursor::At { slide: 0, step: 1 });
    engine.handle(Event::Input(Input::Key(Key::ArrowLeft))).unwrap();
    assert_eq!(engine.cursor(), Cursor::At { slide: 0, step: 0 });
}

#[test]
fn advancing_past_the_last_step_rotates_the_surface() {
    let mut engine = engine_no_intro();
    engine.handle(Event::Input(Input::Next)).unwrap();
    assert_eq!(engine.cursor(), Cursor::At { slide: 0, step: 1 });
    assert!(engine.platform().ops.contains(&"append 1 It has a <b>frequency</b>".to_owned()));

    engine.platform_mut().take_ops();
    engine.handle(Event::Input(Input::Next)).unwrap();
    assert_eq!(engine.cursor(), Cursor::At { slide: 1, step: 0 });
    assert_eq!(
        engine.platform().ops,
        vec![
            "destroy_surface 0".to_owned(),
            "create_surface 1".to_owned(),
            "title Adding waves".to_owned(),
            "clear_steps".to_owned(),
            "append 0 Sum of sines".to_owned(),
            "timer 2 200ms".to_owned(),
            "apply_chrome".to_owned(),
        ]
    );

    // Terminal position: a further Next changes nothing.
    engine.platform_mut().take_ops();
    engine.handle(Event::Input(Input::Next)).unwrap();
    assert_eq!(engine.cursor(), Cursor::At { slide: 1, step: 0 });
    assert!(engine.platform().ops.is_empty());
}

#[test]
fn retreating_across_a_slide_boundary_lands_on_the_last_step() {
    let mut engine = engine_no_intro();
    engine.handle(Event::Input(Input::Next)).unwrap();
    engine.handle(Event::Input(Input::Next)).unwrap();
    engine.platform_mut().take_ops();

    engine.handle(Event::Input(Input::Prev)).unwrap();
    assert_eq!(engine.cursor(), Cursor::At { slide: 0, step: 1 });
    let ops = &engine.platform().ops;
    assert!(ops.contains(&"append 0 A wave moves".to_owned()));
    assert!(ops.contains(&"append 1 It has a <b>frequency</b>".to_owned()));
    assert!(ops.contains(&"step_transition 1".to_owned()));
    assert!(!ops.iter().any(|op| op.starts_with("timer")), "backward entry is unpaced");
}

#[test]
fn frames_apply_the_pending_step_transition_before_drawing() {
    let mut engine = engine_no_intro();
    engine.platform_mut().take_ops();

    let surface = SurfaceId(0);
    engine
        .handle(Event::Frame {
            surface,
            dt_secs: 0.016,
        })
        .unwrap();
    assert_eq!(engine.platform().ops, vec!["step_transition 0".to_owned()]);
    assert_eq!(
        engine.platform().painter_log(surface),
        &["setup".to_owned(), "draw 0".to_owned()]
    );

    // The transition is one-shot; later frames only draw.
    engine
        .handle(Event::Frame {
            surface,
            dt_secs: 0.016,
        })
        .unwrap();
    assert_eq!(engine.platform().ops, vec!["step_transition 0".to_owned()]);
    assert_eq!(engine.platform().painter_log(surface).last().unwrap(), "draw 1");
}

#[test]
fn frames_for_a_torn_down_surface_are_dropped() {
    let mut engine = engine_no_intro();
    engine.handle(Event::Input(Input::Dot(1))).unwrap();

    engine
        .handle(Event::Frame {
            surface: SurfaceId(0),
            dt_secs: 0.016,
        })
        .unwrap();
    assert_eq!(engine.platform().painter_log(SurfaceId(0)), &["setup".to_owned()]);
}

#[test]
fn scroll_timers_fire_once_and_die_with_their_slide() {
    let mut engine = engine_no_intro();
    engine.platform_mut().take_ops();

    engine.handle(Event::Timer(TimerId(0))).unwrap();
    assert_eq!(engine.platform().ops, vec!["scroll 0".to_owned()]);

    // Spent and unknown timers are ignored.
    engine.handle(Event::Timer(TimerId(0))).unwrap();
    engine.handle(Event::Timer(TimerId(9))).unwrap();
    assert_eq!(engine.platform().ops, vec!["scroll 0".to_owned()]);

    // A timer armed before a slide change must not scroll the new pane.
    engine.handle(Event::Input(Input::Next)).unwrap();
    engine.handle(Event::Input(Input::Dot(1))).unwrap();
    engine.platform_mut().take_ops();
    engine.handle(Event::Timer(TimerId(1))).unwrap();
    assert!(engine.platform().ops.is_empty());
}

#[test]
fn container_resizes_reach_the_resize_hook() {
    let mut engine = engine_no_intro();
    let surface = SurfaceId(0);
    engine
        .handle(Event::ContainerResized {
            surface,
            size: Size::new(800.0, 450.0),
        })
        .unwrap();
    assert!(engine.platform().ops.contains(&"resize_surface 0 800x450".to_owned()));
    assert_eq!(engine.platform().painter_log(surface).last().unwrap(), "resize");

    // Stale surface: dropped.
    engine.platform_mut().take_ops();
    engine
        .handle(Event::ContainerResized {
            surface: SurfaceId(4),
            size: Size::new(100.0, 100.0),
        })
        .unwrap();
    assert!(engine.platform().ops.is_empty());
}

#[test]
fn narration_toggle_updates_the_chrome_and_mutes_reveals() {
    let mut engine = engine_no_intro();
    assert!(engine.narration_enabled());

    engine.handle(Event::Input(Input::ToggleNarration)).unwrap();
    assert!(!engine.narration_enabled());
    assert!(!engine.platform().views.last().unwrap().narration_enabled);

    engine.handle(Event::Input(Input::Next)).unwrap();
    assert_eq!(engine.cursor(), Cursor::At { slide: 0, step: 1 });
}

#[test]
fn a_failing_draw_hook_surfaces_as_a_content_error() {
    let mut deck: Deck<Painter> = Deck::new();
    deck.register(
        SlideBuilder::new("broken")
            .step("only step")
            .draw(|_, _| anyhow::bail!("NaN in oscilloscope buffer"))
            .build(),
    );
    let mut engine = DeckEngine::init(
        MockPlatform::new(),
        deck,
        EngineConfig::default(),
        None::<MockSpeech>,
    )
    .unwrap();

    let err = engine
        .handle(Event::Frame {
            surface: SurfaceId(0),
            dt_secs: 0.016,
        })
        .unwrap_err();
    match err {
        LecternError::Content { slide, hook, .. } => {
            assert_eq!(slide, 0);
            assert_eq!(hook, "draw");
        }
        other => panic!("expected content error, got {other}"),
    }
}
