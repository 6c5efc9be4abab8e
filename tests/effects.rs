use folio_fx::config::MotionConfig;
use folio_fx::effects::hero::HeroParallax;
use folio_fx::effects::image::ImageParallax;
use folio_fx::effects::pointer::{magnetic_offset, CursorFollower};
use folio_fx::effects::stack::{stack_progress, StackTransform};
use folio_fx::EffectState;

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[test]
fn stack_identity_at_zero_progress() {
    let t = StackTransform::from_progress(0.0);
    assert_eq!(t, StackTransform::IDENTITY);
    assert_eq!(t.transform_css(), "scale(1)");
    assert_eq!(t.filter_css(), "brightness(1)");
    assert_eq!(t.opacity_css(), "1");
}

#[test]
fn stack_fully_covered_card() {
    let t = StackTransform::from_progress(1.0);
    assert!(approx_eq(t.scale, 0.9, 1e-12));
    assert!(approx_eq(t.brightness, 0.4, 1e-12));
    assert!(approx_eq(t.opacity, 0.5, 1e-12));
}

#[test]
fn stack_progress_tracks_next_card() {
    assert_eq!(stack_progress(800.0, 60.0, 1000.0), 0.0);
    assert_eq!(stack_progress(800.0, 60.0, 60.0), 1.0);
    assert!(approx_eq(stack_progress(800.0, 60.0, 430.0), 0.5, 1e-12));
}

#[test]
fn hero_scale_never_drops_below_one() {
    let hero = HeroParallax::new(&MotionConfig::default());
    assert!(approx_eq(hero.sample(0.0, 900.0).unwrap().scale, 1.1, 1e-12));
    assert!(approx_eq(hero.sample(100.0, 900.0).unwrap().scale, 1.05, 1e-12));
    assert_eq!(hero.sample(400.0, 900.0).unwrap().scale, 1.0);
    assert!(hero.sample(900.0, 900.0).is_none());
}

#[test]
fn hero_fade_and_drift_are_opt_in() {
    let plain = HeroParallax::new(&MotionConfig::default());
    let t = plain.sample(450.0, 900.0).unwrap();
    assert_eq!(t.opacity, 1.0);
    assert_eq!(t.translate_y, 0.0);

    let config = MotionConfig {
        hero_fade: 1.0,
        hero_drift: 0.5,
        ..MotionConfig::default()
    };
    let t = HeroParallax::new(&config).sample(450.0, 900.0).unwrap();
    assert!(approx_eq(t.opacity, 0.5, 1e-12));
    assert!(approx_eq(t.translate_y, 225.0, 1e-12));
}

#[test]
fn centred_image_does_not_shift() {
    let parallax = ImageParallax { speed: 0.15, zoom: 1.1 };
    let y = parallax.translate_y(300.0, 200.0, 800.0);
    assert_eq!(y, 0.0);
    assert_eq!(parallax.transform_css(y), "translate3d(0, 0px, 0) scale(1.1)");
}

#[test]
fn image_below_centre_shifts_down() {
    let parallax = ImageParallax { speed: 0.15, zoom: 1.1 };
    assert!(approx_eq(parallax.translate_y(500.0, 200.0, 800.0), 30.0, 1e-12));
    assert!(approx_eq(parallax.translate_y(100.0, 200.0, 800.0), -30.0, 1e-12));
}

#[test]
fn effect_state_clamps_into_limit() {
    let mut state = EffectState::new(0.1);
    state.set_limit(500.0);
    state.set_target(900.0);
    assert_eq!(state.target, 500.0);
    state.set_target(-20.0);
    assert_eq!(state.target, 0.0);

    state.set_target(400.0);
    state.current = 400.0;
    state.set_limit(250.0);
    assert_eq!(state.target, 250.0);
    assert_eq!(state.current, 250.0);

    state.set_limit(-10.0);
    assert_eq!(state.limit, 0.0);
}

#[test]
fn eased_step_moves_a_tenth() {
    let mut state = EffectState::new(0.1);
    state.set_limit(1000.0);
    state.set_target(100.0);
    let diff = state.step(0.1);
    assert_eq!(diff, 100.0);
    assert!(approx_eq(state.current, 10.0, 1e-12));
}

#[test]
fn eased_step_converges_monotonically_then_stops() {
    let mut state = EffectState::new(0.1);
    state.set_limit(1000.0);
    state.set_target(100.0);

    let mut prev = state.current;
    for _ in 0..200 {
        state.step(0.1);
        assert!(state.current >= prev);
        assert!(state.current <= 100.0);
        prev = state.current;
    }
    assert!((100.0 - state.current).abs() <= 0.1);

    let settled = state.current;
    for _ in 0..10 {
        state.step(0.1);
    }
    assert_eq!(state.current, settled);
}

#[test]
fn cursor_outline_trails_pointer() {
    let mut cursor = CursorFollower::new(0.15);
    assert_eq!(
        cursor.pointer_moved(100.0, 40.0),
        "translate(100px, 40px) translate(-50%, -50%)"
    );
    cursor.step();
    let (x, y) = cursor.outline();
    assert!(approx_eq(x, 15.0, 1e-12));
    assert!(approx_eq(y, 6.0, 1e-12));
    for _ in 0..200 {
        cursor.step();
    }
    let (x, y) = cursor.outline();
    assert!(approx_eq(x, 100.0, 1e-6) && approx_eq(y, 40.0, 1e-6));
}

#[test]
fn magnetic_button_pulls_towards_pointer() {
    let rect = (100.0, 50.0, 200.0, 40.0);
    assert_eq!(magnetic_offset((200.0, 70.0), rect, 0.2), (0.0, 0.0));
    let (x, y) = magnetic_offset((300.0, 90.0), rect, 0.2);
    assert!(approx_eq(x, 20.0, 1e-12));
    assert!(approx_eq(y, 4.0, 1e-12));
}
