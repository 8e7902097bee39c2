use super::super::{Game, GameEvent, GamePhase, Sentence, Settings};
use crate::input::KeyEvent;

fn greek_queue() -> Vec<Sentence> {
    vec![
        Sentence::new("ο σκυλος θελει να παει _____.", "βολτάρες"),
        Sentence::new("η _____ άνοιξε", "πόρτα"),
    ]
}

fn started_game(sentences: Vec<Sentence>) -> Game {
    let mut game = Game::new(&Settings::default());
    game.load_queue(sentences);
    game.start_game().unwrap();
    game
}

fn type_answer(game: &mut Game, answer: &[&str]) {
    for (index, grapheme) in answer.iter().enumerate() {
        game.press(index, &KeyEvent::typed(grapheme)).unwrap();
    }
}

#[test]
fn greek_scenario() {
    let mut game = started_game(greek_queue());

    // The last sentence is played first and stays queued
    let round = game.round().unwrap();
    assert_eq!(round.slots.len(), 5);
    assert_eq!(round.left, "η ");
    assert_eq!(round.right, " άνοιξε");
    assert_eq!(game.queue().len(), 2);
    assert_eq!(game.phase(), GamePhase::Playing);

    type_answer(&mut game, &["π", "ό", "ρ", "τ", "α"]);
    let round = game.round().unwrap();
    assert_eq!(round.sentence.answer, "βολτάρες");
    assert_eq!(round.slots.len(), 8);
    assert_eq!(round.left, "ο σκυλος θελει να παει ");
    assert_eq!(round.right, ".");
    assert!(game.queue().is_empty());
    assert_eq!(game.state.rounds_won, 1);

    game.skip().unwrap();
    assert_eq!(game.phase(), GamePhase::Ended);
    assert!(game.round().is_none());
    assert_eq!(game.take_events().last(), Some(&GameEvent::GameEnded));
}

#[test]
fn typing_in_any_order() {
    let mut game = started_game(greek_queue());
    game.take_events();

    for (index, grapheme) in [(4, "α"), (0, "π"), (2, "ρ"), (1, "ό"), (3, "τ")] {
        game.press(index, &KeyEvent::typed(grapheme)).unwrap();
    }

    let events = game.take_events();
    assert_eq!(events.iter().filter(|e| **e == GameEvent::RoundWon).count(), 1);
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::RoundStarted(_)))
            .count(),
        1
    );
    assert!(!events.contains(&GameEvent::RoundLost));
    assert_eq!(game.state.round_number, 2);
}

#[test]
fn wrong_characters_hold_the_round() {
    let mut game = started_game(greek_queue());
    type_answer(&mut game, &["π", "ο", "ρ", "τ", "α"]);

    // "ο" without the accent doesn't count
    let round = game.round().unwrap();
    assert_eq!(round.sentence.answer, "πόρτα");
    assert_eq!(round.incorrect_slots(), vec![1]);
    assert!(round.slots[1].show_invalid());

    game.press(1, &KeyEvent::typed("ό")).unwrap();
    assert_eq!(game.round().unwrap().sentence.answer, "βολτάρες");
}

#[test]
fn focus_follows_typing() {
    let mut game = started_game(greek_queue());
    assert_eq!(game.focus(), 0);

    game.press_focused(&KeyEvent::typed("π")).unwrap();
    assert_eq!(game.focus(), 1);
    game.press_focused(&KeyEvent::typed("x")).unwrap();
    assert_eq!(game.focus(), 2);

    // Back to the wrong one, clear it, retype it
    game.press_focused(&KeyEvent::left()).unwrap();
    assert_eq!(game.focus(), 1);
    game.press_focused(&KeyEvent::delete()).unwrap();
    assert_eq!(game.focus(), 1);
    assert!(game.round().unwrap().slots[1].is_empty());
    game.press_focused(&KeyEvent::typed("ό")).unwrap();
    assert_eq!(game.focus(), 2);

    // Delete on an empty slot moves back
    game.press_focused(&KeyEvent::delete()).unwrap();
    assert_eq!(game.focus(), 1);
}

#[test]
fn focus_stays_at_the_edges() {
    let mut game = started_game(greek_queue());
    game.take_events();

    // Delete on the empty first slot is a no-op
    game.press(0, &KeyEvent::delete()).unwrap();
    game.press(0, &KeyEvent::left()).unwrap();
    assert_eq!(game.focus(), 0);
    assert!(game.take_events().is_empty());

    // Typing into the last slot has nowhere to go
    game.press(4, &KeyEvent::typed("α")).unwrap();
    game.press(4, &KeyEvent::right()).unwrap();
    assert_eq!(game.focus(), 0);
    assert!(game.take_events().is_empty());
}

#[test]
fn out_of_range_slots_are_ignored() {
    let mut game = started_game(greek_queue());
    game.press(17, &KeyEvent::typed("π")).unwrap();
    assert_eq!(game.round().unwrap().incorrect_slots().len(), 5);
}

#[test]
fn new_round_resets_focus() {
    let mut game = started_game(greek_queue());
    game.take_events();

    type_answer(&mut game, &["π", "ό", "ρ", "τ", "α"]);
    let events = game.take_events();
    let won = events.iter().position(|e| *e == GameEvent::RoundWon).unwrap();
    assert_eq!(
        &events[won..],
        &[
            GameEvent::RoundWon,
            GameEvent::RoundStarted(2),
            GameEvent::Focus(0)
        ]
    );
    assert_eq!(game.focus(), 0);
}

#[test]
fn restarting_a_round() {
    let mut game = started_game(greek_queue());
    game.press(0, &KeyEvent::typed("π")).unwrap();
    game.press(1, &KeyEvent::typed("x")).unwrap();
    game.request_help();
    game.take_events();

    game.start_round(&Sentence::new("η _____ άνοιξε", "πόρτα")).unwrap();
    let round = game.round().unwrap();
    assert_eq!(round.incorrect_slots(), vec![0, 1, 2, 3, 4]);
    assert!(round.slots.iter().all(|s| s.is_empty() && !s.has_help()));
    assert_eq!(game.state.helps_used, 0);
    assert_eq!(game.focus(), 0);
    assert_eq!(
        game.take_events(),
        vec![GameEvent::RoundStarted(2), GameEvent::Focus(0)]
    );
}

#[test]
fn anti_repeat_is_best_effort() {
    // The same sentence three times in a row
    let sentence = Sentence::new("a _ c", "b");
    let mut game = started_game(vec![sentence.clone(), sentence.clone(), sentence]);

    // One repeat is skipped, the next one gets played anyway
    game.skip().unwrap();
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.queue().len(), 1);

    game.skip().unwrap();
    assert_eq!(game.phase(), GamePhase::Ended);
}

#[test]
fn empty_queue() {
    let mut game = Game::new(&Settings::default());
    game.start_game().unwrap();
    assert_eq!(game.phase(), GamePhase::Ended);

    // Everything is a no-op once the game is over
    game.skip().unwrap();
    game.request_help();
    game.press(0, &KeyEvent::typed("a")).unwrap();
    assert_eq!(game.take_events(), vec![GameEvent::GameEnded]);
}

#[test]
fn malformed_sentences_fail_the_round() {
    let mut game = started_game(vec![
        Sentence::new("no blank", "x"),
        Sentence::new("_", "a"),
    ]);

    assert!(game.press(0, &KeyEvent::typed("a")).is_err());
    // The won round doesn't linger once nothing playable is left
    assert_eq!(game.state.rounds_won, 1);
    assert_eq!(game.phase(), GamePhase::Ended);
    assert!(game.round().is_none());
    assert_eq!(game.take_events().last(), Some(&GameEvent::GameEnded));

    let mut game = Game::new(&Settings::default());
    assert!(game
        .start_round(&Sentence::new("two _ blanks _", "x"))
        .is_err());
    assert_eq!(game.phase(), GamePhase::NotStarted);
    assert!(game.round().is_none());
}

#[test]
fn keys_before_starting_are_ignored() {
    let mut game = Game::new(&Settings::default());
    game.load_queue(greek_queue());
    game.press(0, &KeyEvent::typed("π")).unwrap();
    game.request_help();
    assert_eq!(game.phase(), GamePhase::NotStarted);
    assert!(game.take_events().is_empty());
}
