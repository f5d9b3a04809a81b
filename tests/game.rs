//! Game integration tests.

use bjhold::{
    ActionError, Card, HandStatus, MAX_RANK, MIN_RANK, MenuError, MenuOption, OptionsError, Phase,
    Resolution, RoundOutcome, Session, Stats, TableOptions,
};

fn session() -> Session {
    Session::new(TableOptions::default(), 1).unwrap()
}

fn deal(session: &mut Session, ranks: &[u8]) {
    for &rank in ranks {
        session.take_card(Card::new(rank)).unwrap();
    }
}

#[test]
fn card_values_and_names() {
    assert_eq!(Card::new(1).value(), 1);
    for rank in 2..=10 {
        assert_eq!(Card::new(rank).value(), rank);
    }
    for rank in 11..=13 {
        assert_eq!(Card::new(rank).value(), 10);
    }
    assert_eq!(Card::new(0).value(), 0);
    assert_eq!(Card::new(14).value(), 0);

    assert_eq!(Card::new(1).to_string(), "Ace");
    assert_eq!(Card::new(11).to_string(), "Jack");
    assert_eq!(Card::new(12).to_string(), "Queen");
    assert_eq!(Card::new(13).to_string(), "King");
    assert_eq!(Card::new(7).to_string(), "7");
}

#[test]
fn hand_below_target_waits_for_decision() {
    let mut session = session();
    assert_eq!(session.phase(), Phase::Drawing);

    let first = session.take_card(Card::new(10)).unwrap();
    assert_eq!(first.total, 10);
    let second = session.take_card(Card::new(11)).unwrap();
    assert_eq!(second.total, 20);
    assert_eq!(second.status, HandStatus::Active);

    assert_eq!(session.phase(), Phase::Deciding);
    assert_eq!(session.hand().total(), 20);
    assert_eq!(session.hand().len(), 2);
    assert_eq!(session.stats().games, 1);
}

#[test]
fn exact_target_is_blackjack() {
    let mut session = session();
    deal(&mut session, &[10, 5]);
    assert_eq!(session.hand().total(), 15);

    let draw = session.take_card(Card::new(6)).unwrap();
    assert_eq!(draw.total, 21);
    assert_eq!(draw.status, HandStatus::Blackjack);

    let stats = session.stats();
    assert_eq!(stats.player_wins, 1);
    assert_eq!(stats.games, 2);
    assert!(session.hand().is_empty());
    assert_eq!(session.hand().total(), 0);
    assert_eq!(session.phase(), Phase::Drawing);
}

#[test]
fn bust_does_not_count_as_dealer_win() {
    let mut session = session();
    deal(&mut session, &[10, 8]);

    let draw = session.take_card(Card::new(13)).unwrap();
    assert_eq!(draw.total, 28);
    assert_eq!(draw.status, HandStatus::Bust);

    let stats = session.stats();
    assert_eq!(stats.games, 2);
    assert_eq!(stats.busts, 1);
    assert_eq!(stats.player_wins, 0);
    assert_eq!(stats.dealer_wins, 0);
    assert_eq!(session.hand().total(), 0);
}

#[test]
fn dealer_bust_pays_player() {
    let mut session = session();
    deal(&mut session, &[10, 8]);

    let showdown = session.hold_against(22).unwrap();
    assert_eq!(showdown.resolution, Resolution::DealerBust);
    assert_eq!(showdown.player_total, 18);
    assert_eq!(showdown.dealer_total, 22);
    assert_eq!(RoundOutcome::from(showdown.resolution), RoundOutcome::Won);

    assert_eq!(session.stats().player_wins, 1);
    assert_eq!(session.stats().games, 2);
    assert_eq!(session.hand().total(), 0);
}

#[test]
fn equal_totals_tie() {
    let mut session = session();
    deal(&mut session, &[10, 9]);

    let showdown = session.hold_against(19).unwrap();
    assert_eq!(showdown.resolution, Resolution::Tie);
    assert_eq!(RoundOutcome::from(showdown.resolution), RoundOutcome::Tied);
    assert_eq!(session.stats().ties, 1);
    assert_eq!(session.stats().games, 2);
}

#[test]
fn higher_total_wins_the_hold() {
    let mut session = session();
    deal(&mut session, &[10, 8]);
    let showdown = session.hold_against(20).unwrap();
    assert_eq!(showdown.resolution, Resolution::DealerWins);
    assert_eq!(RoundOutcome::from(showdown.resolution), RoundOutcome::Lost);

    deal(&mut session, &[12, 10]);
    let showdown = session.hold_against(17).unwrap();
    assert_eq!(showdown.resolution, Resolution::PlayerWins);
    assert!(showdown.resolution.is_player_win());

    // A dealer exactly on the target is not a bust.
    deal(&mut session, &[9, 9]);
    let showdown = session.hold_against(21).unwrap();
    assert_eq!(showdown.resolution, Resolution::DealerWins);

    let stats = session.stats();
    assert_eq!(stats.player_wins, 1);
    assert_eq!(stats.dealer_wins, 2);
    assert_eq!(stats.games, 4);
}

#[test]
fn action_errors() {
    let mut session = session();
    assert_eq!(session.hold().unwrap_err(), ActionError::InvalidState);
    assert_eq!(session.hold_against(20).unwrap_err(), ActionError::InvalidState);

    deal(&mut session, &[5]);
    session.exit();
    assert!(session.is_terminated());
    assert_eq!(session.draw_card().unwrap_err(), ActionError::InvalidState);
    assert_eq!(
        session.take_card(Card::new(2)).unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(session.hold().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn random_draws_keep_running_total() {
    let mut session = Session::new(TableOptions::default(), 7).unwrap();
    let mut expected: u32 = 0;
    let mut rounds_closed = 0;

    for _ in 0..2_000 {
        let draw = session.draw_card().unwrap();
        assert!((MIN_RANK..=MAX_RANK).contains(&draw.card.rank));

        expected += u32::from(draw.card.value());
        assert_eq!(draw.total, expected);

        match draw.status {
            HandStatus::Active => {
                assert!(expected < 21);
                assert_eq!(session.hand().total(), expected);
            }
            HandStatus::Blackjack => {
                assert_eq!(expected, 21);
                expected = 0;
                rounds_closed += 1;
                assert_eq!(session.hand().total(), 0);
            }
            HandStatus::Bust => {
                assert!(expected > 21);
                expected = 0;
                rounds_closed += 1;
                assert_eq!(session.hand().total(), 0);
            }
        }
    }

    let stats = session.stats();
    assert_eq!(stats.games, rounds_closed + 1);
    assert_eq!(stats.player_wins + stats.busts, rounds_closed);
    assert_eq!(stats.dealer_wins, 0);
}

#[test]
fn dealer_total_stays_in_range() {
    let mut session = Session::new(TableOptions::default(), 99).unwrap();

    for round in 0..500 {
        session.take_card(Card::new(2)).unwrap();
        let showdown = session.hold().unwrap();
        assert!((16..=26).contains(&showdown.dealer_total));
        assert_eq!(session.stats().games, round + 2);
    }

    let stats = session.stats();
    assert_eq!(stats.player_wins + stats.dealer_wins + stats.ties, 500);
}

#[test]
fn same_seed_replays_the_same_cards() {
    let mut first = Session::new(TableOptions::default(), 1234).unwrap();
    let mut second = Session::new(TableOptions::default(), 1234).unwrap();

    for _ in 0..50 {
        assert_eq!(first.draw_card().unwrap(), second.draw_card().unwrap());
    }
}

#[test]
fn win_percentage_is_rounded_to_one_decimal() {
    let stats = Stats {
        games: 3,
        player_wins: 1,
        ..Stats::new()
    };
    assert!((stats.win_percentage() - 33.333).abs() < 0.001);
    assert!((stats.rounded_win_percentage() - 33.3).abs() < 1e-9);
    assert!(stats.to_string().ends_with("Percentage of Player wins: 33.3%"));

    let fresh = Stats::default();
    assert_eq!(fresh.games, 1);
    assert!(fresh.to_string().contains("Percentage of Player wins: 0.0%"));
    assert!(fresh.to_string().contains("Total # of games played is: 1"));

    let stats = Stats {
        games: 8,
        player_wins: 7,
        ..Stats::new()
    };
    assert!(stats.to_string().ends_with("87.5%"));
}

#[test]
fn win_percentage_stays_within_bounds() {
    let mut session = Session::new(TableOptions::default(), 3).unwrap();

    for _ in 0..300 {
        let draw = session.draw_card().unwrap();
        if draw.status == HandStatus::Active && draw.total >= 17 {
            session.hold().unwrap();
        }

        let stats = session.stats();
        let percentage = stats.win_percentage();
        assert!((0.0..=100.0).contains(&percentage));
        let expected = 100.0 * f64::from(stats.player_wins) / f64::from(stats.games);
        assert!((percentage - expected).abs() < 1e-9);
    }
}

#[test]
fn menu_option_parsing() {
    assert_eq!("1".parse::<MenuOption>(), Ok(MenuOption::Draw));
    assert_eq!(" 2 ".parse::<MenuOption>(), Ok(MenuOption::Hold));
    assert_eq!("3\n".parse::<MenuOption>(), Ok(MenuOption::Stats));
    assert_eq!("4".parse::<MenuOption>(), Ok(MenuOption::Exit));

    assert_eq!("0".parse::<MenuOption>(), Err(MenuError::OutOfRange(0)));
    assert_eq!("5".parse::<MenuOption>(), Err(MenuError::OutOfRange(5)));
    assert_eq!("-1".parse::<MenuOption>(), Err(MenuError::OutOfRange(-1)));
    assert_eq!("abc".parse::<MenuOption>(), Err(MenuError::NotANumber));
    assert_eq!("".parse::<MenuOption>(), Err(MenuError::NotANumber));
    assert_eq!("2.5".parse::<MenuOption>(), Err(MenuError::NotANumber));

    assert_eq!(MenuOption::Hold.to_string(), "2. Hold hand");
}

#[test]
fn options_validation() {
    let options = TableOptions::default();
    assert_eq!(options.target, 21);
    assert_eq!((options.dealer_min, options.dealer_max), (16, 26));
    assert_eq!(options.validate(), Ok(()));

    assert_eq!(
        TableOptions::default().with_target(0).validate(),
        Err(OptionsError::ZeroTarget)
    );

    let reversed = TableOptions::default().with_dealer_range(20, 10);
    assert_eq!(
        reversed.validate(),
        Err(OptionsError::EmptyDealerRange { min: 20, max: 10 })
    );
    assert_eq!(
        Session::new(reversed, 1).unwrap_err(),
        OptionsError::EmptyDealerRange { min: 20, max: 10 }
    );
}

#[test]
fn custom_target_and_dealer_range() {
    let options = TableOptions::default()
        .with_target(15)
        .with_dealer_range(20, 20);
    let mut session = Session::new(options, 5).unwrap();

    deal(&mut session, &[10]);
    let draw = session.take_card(Card::new(5)).unwrap();
    assert_eq!(draw.status, HandStatus::Blackjack);

    // Dealer above the target busts.
    deal(&mut session, &[9]);
    let showdown = session.hold().unwrap();
    assert_eq!(showdown.dealer_total, 20);
    assert_eq!(showdown.resolution, Resolution::DealerBust);
    assert_eq!(session.stats().player_wins, 2);
}
