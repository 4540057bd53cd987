use super::super::{Feedback, GameController, GameRange, Phase};

fn controller(target: i64) -> GameController<impl FnMut(i64, i64) -> i64> {
    GameController::with_sampler(GameRange::new(1, 10).unwrap(), move |_: i64, _: i64| target)
}

#[test]
fn example_game() {
    let mut game = controller(7);
    assert_eq!(game.view().phase, Phase::NotStarted);

    let view = game.start();
    assert_eq!((view.phase, view.attempts), (Phase::Playing, 0));

    let view = game.submit_guess("3");
    assert_eq!((view.phase, view.attempts), (Phase::Playing, 1));

    let view = game.submit_guess("7");
    assert_eq!((view.phase, view.attempts), (Phase::Won, 1));

    let view = game.reset();
    assert_eq!((view.phase, view.attempts), (Phase::NotStarted, 0));
}

#[test]
fn paused_guess_is_ignored() {
    let mut game = controller(7);
    game.start();
    game.pause();
    let view = game.submit_guess("7");
    assert_eq!(view.phase, Phase::Paused);
    assert_eq!(view.attempts, 0);
    assert_eq!(view.feedback, Feedback::None);

    let view = game.resume();
    assert_eq!(view.phase, Phase::Playing);
    assert_eq!(game.submit_guess("7").phase, Phase::Won);
}

#[test]
fn invalid_guess_counts() {
    let mut game = controller(7);
    game.start();
    let view = game.submit_guess("abc");
    assert_eq!(view.attempts, 1);
    assert_eq!(view.feedback, Feedback::Invalid);
    assert_eq!(view.current_guess.as_deref(), Some("abc"));
}

#[test]
fn target_survives_pause() {
    let mut draws = vec![4, 9].into_iter();
    let mut game = GameController::with_sampler(GameRange::default(), move |_: i64, _: i64| {
        draws.next().unwrap()
    });
    game.start();
    assert_eq!(game.session().target, Some(4));
    game.pause();
    game.resume();
    assert_eq!(game.session().target, Some(4));

    // Only a new start draws again (clamped into 1..=5)
    game.start();
    assert_eq!(game.session().target, Some(5));
}

#[test]
fn default_controller() {
    let mut game = GameController::default();
    assert_eq!(game.range(), GameRange::default());
    game.start();
    assert_eq!(game.phase(), Phase::Playing);
    let target = game.session().target.unwrap();
    assert!(GameRange::default().contains(target));
    assert_eq!(game.submit_guess(&target.to_string()).phase, Phase::Won);
}
