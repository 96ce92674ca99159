//! End-to-end sessions driven through the headless runner with a fixed seed.

use catch_engine::input::{commands, keys};
use catch_engine::{EntityId, GameEvent, InputEvent, SoundEvent};
use catch_game::ball::{Ball, BallKind};
use catch_game::session::Phase;
use catch_game::{events, sounds, CatchGame};
use catch_web::GameRunner;
use glam::Vec2;

const FRAME_MS: f64 = 16.0;

/// Runner with the spawner effectively disabled, so only scripted balls fall.
fn quiet_runner(extra: &str) -> GameRunner<CatchGame> {
    let mut runner = GameRunner::with_seed(CatchGame::new(), 1234);
    runner.init();
    let json = format!(r#"{{ "spawn_interval_ms": 1e9 {} }}"#, extra);
    runner.load_config(&json).unwrap();
    runner
}

fn start(runner: &mut GameRunner<CatchGame>) {
    runner.push_input(InputEvent::command(commands::START));
    runner.tick(FRAME_MS);
    assert_eq!(runner.game().session().phase(), Phase::Running);
}

/// Tick 16 ms frames for `ms`, collecting every event and sound along the way.
fn run_for(runner: &mut GameRunner<CatchGame>, ms: f64) -> (Vec<GameEvent>, Vec<SoundEvent>) {
    let mut events = Vec::new();
    let mut sounds = Vec::new();
    let mut elapsed = 0.0;
    while elapsed < ms {
        runner.tick(FRAME_MS);
        events.extend_from_slice(runner.events());
        sounds.extend_from_slice(runner.sounds());
        elapsed += FRAME_MS;
    }
    (events, sounds)
}

fn drop_over_catcher(runner: &mut GameRunner<CatchGame>, id: u32, kind: BallKind, tier_roll: f32) {
    let x = runner.game().catcher().center_x();
    let top = runner.game().catcher().top;
    runner
        .game_mut()
        .drop_ball(Ball::new(EntityId(10_000 + id), kind, tier_roll, Vec2::new(x, top - 12.0), 2.0));
}

fn now(runner: &GameRunner<CatchGame>) -> f64 {
    runner.context().now_ms()
}

#[test]
fn good_catch_from_zero_scores_five() {
    let mut runner = quiet_runner("");
    start(&mut runner);
    drop_over_catcher(&mut runner, 1, BallKind::Good, 0.6);
    runner.tick(FRAME_MS);
    assert_eq!(runner.game().session().score(), 5);
    assert!(runner.sounds().contains(&sounds::CATCH_GOOD));
    let changed = runner.events().iter().find(|e| e.kind == events::SCORE_CHANGED).unwrap();
    assert_eq!((changed.a, changed.b), (5.0, 5.0));
}

#[test]
fn bonus_doubles_good_catches_until_it_lapses() {
    let mut runner = quiet_runner("");
    start(&mut runner);
    drop_over_catcher(&mut runner, 1, BallKind::Bonus, 0.0);
    runner.tick(FRAME_MS);
    assert_eq!(runner.game().session().score(), 5);

    drop_over_catcher(&mut runner, 2, BallKind::Good, 0.6);
    runner.tick(FRAME_MS);
    assert_eq!(runner.game().session().score(), 15);

    run_for(&mut runner, 3100.0);
    assert!(!runner.game().session().power.is_bonus(now(&runner)));
    drop_over_catcher(&mut runner, 3, BallKind::Good, 0.6);
    runner.tick(FRAME_MS);
    assert_eq!(runner.game().session().score(), 20);
}

#[test]
fn score_never_drops_below_zero() {
    let mut runner = quiet_runner("");
    start(&mut runner);
    drop_over_catcher(&mut runner, 1, BallKind::Good, 0.0);
    runner.tick(FRAME_MS);
    assert_eq!(runner.game().session().score(), 2);

    drop_over_catcher(&mut runner, 2, BallKind::Bad, 0.9);
    runner.tick(FRAME_MS);
    assert_eq!(runner.game().session().score(), 0);
    let changed = runner.events().iter().find(|e| e.kind == events::SCORE_CHANGED).unwrap();
    assert_eq!(changed.b, -2.0);
}

#[test]
fn shrink_and_expand_never_overlap() {
    let mut runner = quiet_runner("");
    start(&mut runner);
    drop_over_catcher(&mut runner, 1, BallKind::Shrink, 0.0);
    runner.tick(FRAME_MS);
    run_for(&mut runner, 500.0);
    assert!(runner.game().catcher().width < 60.0);

    drop_over_catcher(&mut runner, 2, BallKind::Expand, 0.0);
    runner.tick(FRAME_MS);
    let power = &runner.game().session().power;
    assert_eq!(power.shrink_until(), None);
    assert!(power.is_expanded(now(&runner)));

    run_for(&mut runner, 1000.0);
    assert!((runner.game().catcher().width - 130.0).abs() < 1.0);
    run_for(&mut runner, 4500.0);
    assert!((runner.game().catcher().width - 80.0).abs() < 1.0);
}

#[test]
fn freeze_holds_the_countdown_for_its_duration() {
    let mut runner = quiet_runner("");
    start(&mut runner);
    run_for(&mut runner, 1500.0);
    assert_eq!(runner.game().session().time_left(), 29);

    drop_over_catcher(&mut runner, 1, BallKind::Freeze, 0.0);
    runner.tick(FRAME_MS);
    let frozen_until = runner.game().session().power.frozen_until().unwrap();
    assert_eq!(frozen_until, now(&runner) + 3000.0);

    while now(&runner) + FRAME_MS < frozen_until {
        runner.tick(FRAME_MS);
        assert_eq!(runner.game().session().time_left(), 29);
    }
    run_for(&mut runner, 1100.0);
    assert_eq!(runner.game().session().time_left(), 28);
}

#[test]
fn balls_keep_spawning_and_falling_while_frozen() {
    let mut runner = GameRunner::with_seed(CatchGame::new(), 4321);
    runner.init();
    start(&mut runner);
    run_for(&mut runner, 1300.0);

    drop_over_catcher(&mut runner, 1, BallKind::Freeze, 0.0);
    runner.tick(FRAME_MS);
    assert!(runner.game().session().power.is_frozen(now(&runner)));

    let time_left = runner.game().session().time_left();
    let before: Vec<(EntityId, f32)> = runner.game().balls().iter().map(|b| (b.id, b.pos.y)).collect();
    let newest_before = before.iter().map(|(id, _)| *id).max();

    run_for(&mut runner, 1500.0);
    assert_eq!(runner.game().session().time_left(), time_left);

    let after: Vec<(EntityId, f32)> = runner.game().balls().iter().map(|b| (b.id, b.pos.y)).collect();
    let newest_after = after.iter().map(|(id, _)| *id).max();
    assert!(newest_after > newest_before, "no ball spawned during the freeze");
    for (id, y) in &after {
        if let Some((_, y_before)) = before.iter().find(|(old, _)| old == id) {
            assert!(y > y_before, "ball {:?} stopped falling", id);
        }
    }
}

#[test]
fn missed_balls_have_no_effect() {
    let mut runner = quiet_runner("");
    start(&mut runner);
    runner
        .game_mut()
        .drop_ball(Ball::new(EntityId(10_001), BallKind::Bad, 0.9, Vec2::new(30.0, 590.0), 3.0));
    let (events, sounds) = run_for(&mut runner, 200.0);
    assert!(runner.game().balls().is_empty());
    assert_eq!(runner.game().session().score(), 0);
    assert!(events.iter().all(|e| e.kind != events::SCORE_CHANGED));
    assert!(sounds.is_empty());
    assert!(runner.context().effects.particles.is_empty());
}

#[test]
fn timeout_ends_once_and_reports_score() {
    let mut runner = quiet_runner(r#", "session_seconds": 3"#);
    start(&mut runner);
    drop_over_catcher(&mut runner, 1, BallKind::Good, 0.9);
    runner.tick(FRAME_MS);

    let (events, sounds) = run_for(&mut runner, 3200.0);
    let session = runner.game().session();
    assert_eq!(session.phase(), Phase::Ended);
    assert_eq!(session.time_left(), 0);
    assert!(!session.spawner_armed());
    assert!(runner.game().balls().is_empty());
    assert_eq!(events.iter().filter(|e| e.kind == events::SESSION_ENDED).count(), 1);
    assert_eq!(sounds.iter().filter(|s| **s == sounds::WIN_JINGLE).count(), 1);
    assert_eq!(runner.take_score_reports(), vec![10]);

    // Nothing more is reported while the end screen is up
    run_for(&mut runner, 2000.0);
    assert!(runner.take_score_reports().is_empty());
    assert!(runner.draw_list().texts().any(|t| t == "Final score: 10"));
}

#[test]
fn play_again_resets_the_session() {
    let mut runner = quiet_runner(r#", "session_seconds": 2"#);
    start(&mut runner);
    drop_over_catcher(&mut runner, 1, BallKind::Good, 0.6);
    run_for(&mut runner, 2200.0);
    assert_eq!(runner.game().session().phase(), Phase::Ended);

    runner.push_input(InputEvent::KeyDown { key_code: keys::ENTER });
    runner.tick(FRAME_MS);
    let session = runner.game().session();
    assert!(session.is_running());
    assert_eq!(session.score(), 0);
    assert_eq!(session.time_left(), 2);
    assert_eq!(session.best_score(), 5);
    assert!(runner.context().effects.float_texts.is_empty());
}

#[test]
fn start_while_running_and_end_while_idle_are_ignored() {
    let mut runner = quiet_runner("");
    runner.push_input(InputEvent::command(commands::END));
    runner.tick(FRAME_MS);
    assert_eq!(runner.game().session().phase(), Phase::Idle);
    assert!(runner.take_score_reports().is_empty());

    start(&mut runner);
    drop_over_catcher(&mut runner, 1, BallKind::Good, 0.6);
    runner.tick(FRAME_MS);
    runner.push_input(InputEvent::command(commands::START));
    runner.tick(FRAME_MS);
    assert_eq!(runner.game().session().score(), 5);
}

#[test]
fn float_texts_expire_after_their_lifetime() {
    let mut runner = quiet_runner("");
    start(&mut runner);
    drop_over_catcher(&mut runner, 1, BallKind::Good, 0.6);
    runner.tick(FRAME_MS);
    assert_eq!(runner.context().effects.float_texts.len(), 1);
    run_for(&mut runner, 1100.0);
    assert_eq!(runner.context().effects.float_texts.len(), 1);
    run_for(&mut runner, 200.0);
    assert!(runner.context().effects.float_texts.is_empty());
}

#[test]
fn long_frames_are_clamped_for_motion_only() {
    let mut runner = quiet_runner("");
    start(&mut runner);
    runner
        .game_mut()
        .drop_ball(Ball::new(EntityId(10_001), BallKind::Good, 0.0, Vec2::new(30.0, 100.0), 4.0));
    runner.tick(1000.0);
    let ball = runner.game().balls().iter().next().unwrap();
    // At most 50 ms of motion
    assert!(ball.pos.y - 100.0 < 4.0 * 1.5 * 50.0 / 16.0 + 0.01);
    // but the countdown follows wall-clock time
    assert_eq!(runner.game().session().time_left(), 29);
}

#[test]
fn countdown_catches_up_after_a_hidden_tab() {
    let mut runner = quiet_runner("");
    start(&mut runner);
    runner.tick(10_000.0);
    assert_eq!(runner.game().session().time_left(), 20);
    run_for(&mut runner, 160.0);
    assert_eq!(runner.game().session().time_left(), 20);
    assert_eq!(runner.game().session().phase(), Phase::Running);
}

#[test]
fn gap_past_the_end_finishes_the_session_once() {
    let mut runner = quiet_runner("");
    start(&mut runner);
    runner.tick(45_000.0);
    assert_eq!(runner.game().session().phase(), Phase::Ended);
    assert_eq!(runner.game().session().time_left(), 0);
    assert_eq!(runner.events().iter().filter(|e| e.kind == events::SESSION_ENDED).count(), 1);
    assert_eq!(runner.take_score_reports(), vec![0]);
}

#[test]
fn pointer_and_keys_share_one_target() {
    let mut runner = quiet_runner("");
    start(&mut runner);
    runner.push_input(InputEvent::PointerMove { x: 100.0, y: 300.0 });
    runner.tick(FRAME_MS);
    assert_eq!(runner.game().catcher().target_x, 60.0);

    runner.push_input(InputEvent::KeyDown { key_code: keys::ARROW_RIGHT });
    runner.tick(FRAME_MS);
    assert_eq!(runner.game().catcher().target_x, 68.0);

    runner.push_input(InputEvent::KeyDown { key_code: keys::ARROW_LEFT });
    runner.tick(FRAME_MS);
    assert_eq!(runner.game().catcher().target_x, 68.0);

    runner.push_input(InputEvent::KeyUp { key_code: keys::ARROW_RIGHT });
    runner.push_input(InputEvent::KeyUp { key_code: keys::ARROW_LEFT });
    run_for(&mut runner, 1000.0);
    assert!((runner.game().catcher().x - 68.0).abs() < 0.5);
}

#[test]
fn full_session_with_a_chasing_player() {
    let mut runner = GameRunner::with_seed(CatchGame::new(), 99);
    runner.init();
    start(&mut runner);

    let mut ended = 0;
    for _ in 0..(90_000.0 / FRAME_MS) as usize {
        // Follow the lowest ball
        let target = runner
            .game()
            .balls()
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|b| b.pos.x);
        if let Some(x) = target {
            runner.push_input(InputEvent::PointerMove { x, y: 500.0 });
        }
        runner.tick(FRAME_MS);

        let ids: Vec<EntityId> = runner.game().balls().iter().map(|b| b.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "live balls must stay in id order");

        for event in runner.events() {
            if event.kind == events::SCORE_CHANGED {
                assert!(event.a >= 0.0);
            }
            if event.kind == events::SESSION_ENDED {
                ended += 1;
            }
        }
        if runner.game().session().phase() == Phase::Ended {
            break;
        }
    }

    assert_eq!(ended, 1);
    assert_eq!(runner.game().session().phase(), Phase::Ended);
    assert!(runner.game().session().catches() > 0);
    let reports = runner.take_score_reports();
    assert_eq!(reports, vec![runner.game().session().score()]);
}
