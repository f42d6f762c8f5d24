//! Game integration tests.

use std::collections::HashSet;

use pokrs::{
    Card, DECK_SIZE, Deck, FiveCardGame, GameError, GameOptions, GameState, Hand, HandCategory,
};

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(card).collect()
}

/// A game whose deck yields `draws` in order.
fn stacked_game(draws: &str, players: &[&str]) -> FiveCardGame {
    let deck = Deck::from_draws(&cards(draws), 0);
    let mut game = FiveCardGame::with_deck(GameOptions::default(), deck);
    for name in players {
        game.add_player(*name).unwrap();
    }
    game
}

fn hand_of(game: &FiveCardGame, name: &str) -> Hand {
    game.player(name).unwrap().hand().clone()
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_hand_size(7)
        .with_drop_empty_games(false);

    assert_eq!(options.hand_size, 7);
    assert!(!options.drop_empty_games);

    let defaults = GameOptions::default();
    assert_eq!(defaults.hand_size, 5);
    assert!(defaults.drop_empty_games);
}

#[test]
fn deal_without_players_fails() {
    let mut game = FiveCardGame::new(GameOptions::default(), 1);
    assert_eq!(game.deal().unwrap_err(), GameError::NoPlayers);
    assert_eq!(game.determine_winners().unwrap_err(), GameError::NoPlayers);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
}

#[test]
fn roster_errors() {
    let mut game = FiveCardGame::new(GameOptions::default(), 1);

    game.add_player("justin").unwrap();
    assert_eq!(
        game.add_player("justin").unwrap_err(),
        GameError::DuplicatePlayer
    );
    game.add_player("leah").unwrap();

    assert!(game.remove_player("sam").is_none());
    assert_eq!(game.remove_player("leah").unwrap().name(), "leah");
    assert_eq!(game.player_count(), 1);

    assert_eq!(
        game.submit_hand("leah", Hand::new()).unwrap_err(),
        GameError::PlayerNotFound
    );
}

#[test]
fn deal_one_player_five_cards() {
    let mut game = FiveCardGame::new(GameOptions::default(), 2);
    game.add_player("justin").unwrap();

    let players = game.deal().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].hand().len(), 5);
    assert_eq!(game.state(), GameState::Dealt);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 5);
    assert_eq!(game.drawn_cards().len(), 5);
}

#[test]
fn deal_is_round_robin() {
    let mut game = stacked_game("2h 3h 4h 5h 6h 7h 8h 9h Th Jh", &["justin", "leah"]);
    game.deal().unwrap();

    assert_eq!(hand_of(&game, "justin").cards(), cards("2h 4h 6h 8h Th"));
    assert_eq!(hand_of(&game, "leah").cards(), cards("3h 5h 7h 9h Jh"));
    assert_eq!(game.drawn_cards(), cards("2h 3h 4h 5h 6h 7h 8h 9h Th Jh"));
}

#[test]
fn deal_replaces_previous_hands() {
    let mut game = FiveCardGame::new(GameOptions::default(), 3);
    game.add_player("justin").unwrap();

    game.deal().unwrap();
    let first = hand_of(&game, "justin");
    game.deal().unwrap();
    let second = hand_of(&game, "justin");

    assert_eq!(second.len(), 5);
    assert!(!second.cards().iter().any(|c| first.contains(c)));
    assert_eq!(game.drawn_cards().len(), 10);
}

#[test]
fn eleven_players_run_the_deck_dry() {
    // No seating cap: the eleventh player is seated and the deal comes up short.
    let mut game = FiveCardGame::new(GameOptions::default(), 4);
    for i in 0..11 {
        game.add_player(format!("player{i}")).unwrap();
    }
    assert_eq!(game.player_count(), 11);

    let players = game.deal().unwrap();
    let dealt: usize = players.iter().map(|p| p.hand().len()).sum();
    assert_eq!(dealt, DECK_SIZE);
    assert_eq!(players[0].hand().len(), 5);
    assert_eq!(players[7].hand().len(), 5);
    assert_eq!(players[8].hand().len(), 4);
    assert_eq!(players[10].hand().len(), 4);
    assert_eq!(game.cards_remaining(), 0);

    game.validate_hands();
    assert!(game.players()[0].has_valid_hand());
    assert!(!game.players()[10].has_valid_hand());
}

#[test]
fn two_players_both_valid() {
    let mut game = FiveCardGame::new(GameOptions::default(), 5);
    game.add_player("justin").unwrap();
    game.add_player("leah").unwrap();

    game.deal().unwrap();
    game.validate_hands();

    assert_eq!(game.state(), GameState::Validated);
    assert!(game.players().iter().all(|p| p.has_valid_hand()));
}

#[test]
fn shared_card_invalidates_both_players() {
    let mut game = FiveCardGame::new(GameOptions::default(), 6);
    game.add_player("justin").unwrap();
    game.add_player("leah").unwrap();
    game.deal().unwrap();
    game.validate_hands();

    let stolen = hand_of(&game, "leah").cards()[0];
    let mut tampered = hand_of(&game, "justin");
    tampered.add_card(stolen);
    game.submit_hand("justin", tampered).unwrap();

    game.validate_hands();
    assert!(!game.player("justin").unwrap().has_valid_hand());
    assert!(!game.player("leah").unwrap().has_valid_hand());
}

#[test]
fn extra_card_invalidates_hand() {
    let mut game = stacked_game("2h 3h 4h 5h 6h", &["justin"]);
    game.deal().unwrap();

    let mut hand = hand_of(&game, "justin");
    hand.add_card(card("Ac"));
    game.submit_hand("justin", hand).unwrap();

    game.validate_hands();
    let justin = game.player("justin").unwrap();
    assert_eq!(justin.hand().len(), 6);
    assert!(!justin.has_valid_hand());
}

#[test]
fn duplicate_card_invalidates_hand() {
    let mut game = FiveCardGame::new(GameOptions::default(), 7);
    game.add_player("justin").unwrap();
    game.deal().unwrap();

    let mut hand = hand_of(&game, "justin");
    hand.add_card(hand.cards()[0]);
    game.submit_hand("justin", hand).unwrap();

    game.validate_hands();
    assert!(!game.player("justin").unwrap().has_valid_hand());
}

#[test]
fn undealt_card_invalidates_hand() {
    let mut game = stacked_game("2h 3h 4h 5h 6h", &["justin"]);
    game.deal().unwrap();

    // Five distinct cards, but the ace was never drawn.
    game.submit_hand("justin", "2h 3h 4h 5h Ac".parse().unwrap())
        .unwrap();

    game.validate_hands();
    assert!(!game.player("justin").unwrap().has_valid_hand());
}

#[test]
fn removed_player_leaves_one_winner() {
    let mut game = FiveCardGame::new(GameOptions::default(), 8);
    game.add_player("justin").unwrap();
    game.add_player("leah").unwrap();
    game.deal().unwrap();

    let leah = game.remove_player("leah").unwrap();
    assert_eq!(leah.hand().len(), 5);

    game.validate_hands();
    let result = game.determine_winners().unwrap();
    assert_eq!(result.players.len(), 1);
    assert!(result.players[0].is_winner());
    assert!(result.players[0].has_valid_hand());
    assert!(result.players[0].hand_rank().is_some());
}

#[test]
fn best_hand_wins_and_is_listed_first() {
    // justin: 2c 4d 6h 8s Tc (high card), leah: Ah Ad Ac Ks Kd (full house)
    let mut game = stacked_game(
        "2c Ah 4d Ad 6h Ac 8s Ks Tc Kd",
        &["justin", "leah"],
    );
    game.deal().unwrap();
    game.validate_hands();
    let result = game.determine_winners().unwrap();

    assert_eq!(game.state(), GameState::WinnersDetermined);
    assert_eq!(result.winner_count(), 1);
    assert_eq!(result.players[0].name(), "leah");
    assert_eq!(result.players[0].hand_rank(), Some(HandCategory::FullHouse));
    assert_eq!(
        result.winning_value.map(|v| v.category),
        Some(HandCategory::FullHouse)
    );

    assert_eq!(result.players[1].name(), "justin");
    assert!(!result.players[1].is_winner());
    assert_eq!(result.players[1].hand_rank(), Some(HandCategory::HighCard));
}

#[test]
fn equal_hands_tie() {
    // Same ranks in different suits.
    let mut game = stacked_game(
        "Ac Ad Kh Ks 9s 9h 5d 5c 3c 3s",
        &["justin", "leah"],
    );
    game.deal().unwrap();
    game.validate_hands();
    let result = game.determine_winners().unwrap();

    assert!(result.is_tie());
    assert!(result.players.iter().all(|p| p.is_winner()));
    assert_eq!(result.players[0].name(), "justin");
}

#[test]
fn invalid_hands_are_listed_after_winners() {
    let mut game = stacked_game(
        "2c Ah 4d Ad 6h Ac 8s Ks Tc Kd 7c 7d 7h 7s Qc",
        &["cheat", "justin", "leah"],
    );
    game.deal().unwrap();

    // The cheat swaps the eight for an ace that was never dealt.
    game.submit_hand("cheat", "2c Ad As Kd 7h".parse().unwrap())
        .unwrap();
    game.validate_hands();
    let result = game.determine_winners().unwrap();

    let names: Vec<&str> = result.players.iter().map(|p| p.name()).collect();
    // justin holds a pair of sevens, leah only ace high.
    assert_eq!(names, vec!["justin", "cheat", "leah"]);
    assert_eq!(result.winner_count(), 1);
    assert_eq!(result.players[0].hand_rank(), Some(HandCategory::OnePair));
    assert!(result.players[2].has_valid_hand());

    let cheat = result.players.iter().find(|p| p.name() == "cheat").unwrap();
    assert!(!cheat.has_valid_hand());
    assert!(!cheat.is_winner());
    assert_eq!(cheat.hand_rank(), None);
}

#[test]
fn no_valid_hands_means_no_winners() {
    let mut game = FiveCardGame::new(GameOptions::default(), 9);
    game.add_player("justin").unwrap();
    game.deal().unwrap();
    game.validate_hands();
    assert_eq!(game.determine_winners().unwrap().winner_count(), 1);

    game.submit_hand("justin", Hand::new()).unwrap();
    game.validate_hands();
    let result = game.determine_winners().unwrap();

    assert_eq!(result.winner_count(), 0);
    assert_eq!(result.winning_value, None);
    assert_eq!(result.players.len(), 1);
    // Flags from the previous showdown are gone.
    assert!(!result.players[0].is_winner());
    assert_eq!(result.players[0].hand_rank(), None);
}

#[test]
fn winners_require_validation() {
    let mut game = FiveCardGame::new(GameOptions::default(), 10);
    game.add_player("justin").unwrap();
    game.deal().unwrap();

    let result = game.determine_winners().unwrap();
    assert_eq!(result.winner_count(), 0);
}

#[test]
fn reset_starts_a_fresh_round() {
    let mut game = FiveCardGame::new(GameOptions::default(), 11);
    game.add_player("justin").unwrap();
    game.add_player("leah").unwrap();
    game.deal().unwrap();
    game.validate_hands();
    game.determine_winners().unwrap();

    let old_hand = hand_of(&game, "justin");
    game.reset();

    assert_eq!(game.state(), GameState::Idle);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert!(game.drawn_cards().is_empty());
    // Hands survive a reset, results do not.
    assert_eq!(hand_of(&game, "justin"), old_hand);
    assert!(game.players().iter().all(|p| !p.has_valid_hand() && !p.is_winner()));

    // The old hand is no longer backed by the ledger.
    game.validate_hands();
    assert!(!game.player("justin").unwrap().has_valid_hand());

    game.deal().unwrap();
    let ledger: HashSet<Card> = game.drawn_cards().iter().copied().collect();
    assert_eq!(ledger.len(), 10);
    for player in game.players() {
        assert!(player.hand().cards().iter().all(|c| ledger.contains(c)));
    }
    game.validate_hands();
    assert!(game.players().iter().all(|p| p.has_valid_hand()));
}

#[test]
fn same_seed_deals_the_same_hands() {
    let deal = |seed| {
        let mut game = FiveCardGame::new(GameOptions::default(), seed);
        game.add_player("justin").unwrap();
        game.deal().unwrap();
        hand_of(&game, "justin")
    };
    assert_eq!(deal(12), deal(12));
}
