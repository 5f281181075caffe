//! Round state machine tests.
//!
//! Drives a single player through rounds with scripted dice.

use std::cell::RefCell;
use std::rc::Rc;

use rust_yahtzee::core::{PlayerId, RulesConfig};
use rust_yahtzee::dice::{DiceSelection, ScriptedDice};
use rust_yahtzee::events::{ChangeReason, EventBus, EventKind};
use rust_yahtzee::round::{
    Decision, DecisionError, DecisionOffer, DecisionTicket, Player, RoundContext, RoundState,
    RoundStep,
};
use rust_yahtzee::rules::{CategoryName, RulesEngine};

struct Table {
    rules: RulesEngine,
    dice: ScriptedDice,
    bus: EventBus,
}

impl Table {
    fn new(faces: &[u8]) -> Self {
        Self::with_rules(RulesConfig::default(), faces)
    }

    fn with_rules(config: RulesConfig, faces: &[u8]) -> Self {
        Self {
            rules: RulesEngine::new(config),
            dice: ScriptedDice::new(faces.iter().copied()).unwrap(),
            bus: EventBus::new(),
        }
    }

    fn ctx(&mut self) -> RoundContext<'_> {
        RoundContext {
            rules: &self.rules,
            dice: &mut self.dice,
            bus: &mut self.bus,
        }
    }

    fn player(&self) -> Player {
        Player::new(PlayerId::new(0), "ada", &self.rules)
    }

    /// Start a round and take the first throw.
    fn roll_first(&mut self, player: &mut Player) -> DecisionOffer {
        let offer = offer_of(player.new_round(&mut self.ctx()));
        offer_of(
            player
                .resolve(offer.ticket, Decision::SelectDice(DiceSelection::all()), &mut self.ctx())
                .unwrap(),
        )
    }
}

fn offer_of(step: RoundStep) -> DecisionOffer {
    match step {
        RoundStep::Awaiting(offer) => offer,
        other => panic!("expected an offer, got {:?}", other),
    }
}

#[test]
fn test_yahtzee_commit_scores_fifty() {
    let mut table = Table::new(&[1]);
    let mut player = table.player();

    let offer = table.roll_first(&mut player);
    assert_eq!(player.hand().values(), Some([1, 1, 1, 1, 1]));
    assert!(offer.categories_to_add.contains(&CategoryName::Yahtzee));

    player
        .resolve(offer.ticket, Decision::SelectCategoryToAdd(CategoryName::Yahtzee), &mut table.ctx())
        .unwrap();

    assert_eq!(player.score_board().total(), 50);
    assert!(player.score_board().has_category(CategoryName::Yahtzee));
}

#[test]
fn test_rethrow_keeps_unselected_dice() {
    let mut table = Table::new(&[1, 2, 3, 4, 5, 6, 6]);
    let mut player = table.player();

    let offer = table.roll_first(&mut player);
    assert_eq!(player.hand().values(), Some([1, 2, 3, 4, 5]));
    assert!(offer.categories_to_add.contains(&CategoryName::LargeStraight));

    let selection = DiceSelection::new([0, 1]).unwrap();
    let offer = offer_of(
        player
            .resolve(offer.ticket, Decision::SelectDice(selection), &mut table.ctx())
            .unwrap(),
    );

    assert_eq!(player.hand().values(), Some([6, 6, 3, 4, 5]));
    assert_eq!(player.throws(), 2);
    assert_eq!(player.remaining_throws(), 1);
    assert!(offer.select_dice);
    assert!(offer.categories_to_add.contains(&CategoryName::SmallStraight));
    assert!(!offer.categories_to_add.contains(&CategoryName::LargeStraight));
}

#[test]
fn test_menu_excludes_committed_next_round() {
    let mut table = Table::new(&[4]);
    let mut player = table.player();

    let offer = table.roll_first(&mut player);
    player
        .resolve(offer.ticket, Decision::SelectCategoryToAdd(CategoryName::Fours), &mut table.ctx())
        .unwrap();

    let offer = table.roll_first(&mut player);
    assert!(!offer.categories_to_add.contains(&CategoryName::Fours));
    assert!(!offer.categories_to_cancel.contains(&CategoryName::Fours));
    assert_eq!(
        player.resolve(offer.ticket, Decision::SelectCategoryToAdd(CategoryName::Fours), &mut table.ctx()),
        Err(DecisionError::CategoryAlreadyUsed(CategoryName::Fours))
    );
}

#[test]
fn test_thirteen_rounds_complete_board() {
    let mut table = Table::new(&[1, 2, 3, 4, 6]);
    let mut player = table.player();

    for (round, &name) in CategoryName::ALL.iter().enumerate() {
        assert!(!player.is_done());
        let offer = table.roll_first(&mut player);

        let decision = if offer.categories_to_add.contains(&name) {
            Decision::SelectCategoryToAdd(name)
        } else {
            Decision::SelectCategoryToCancel(name)
        };
        let step = player.resolve(offer.ticket, decision, &mut table.ctx()).unwrap();

        match step {
            RoundStep::Finished(summary) => {
                assert_eq!(summary.category, name);
                assert_eq!(summary.done, round + 1 == CategoryName::COUNT);
            }
            other => panic!("expected the round to finish, got {:?}", other),
        }
    }

    assert!(player.is_done());
    assert_eq!(player.state(), RoundState::Done);
    assert_eq!(player.score_board().len(), CategoryName::COUNT);
    // 1+2+3+4+6 for ones..sixes and chance, 30 for the small straight
    assert_eq!(player.score_board().total(), 16 + 30 + 16);

    // A done player's round is skipped.
    assert_eq!(player.new_round(&mut table.ctx()), RoundStep::Skipped);
    assert!(player.pending_offer().is_none());
}

#[test]
fn test_custom_throw_limit() {
    let mut table = Table::with_rules(RulesConfig::default().with_max_throws(1), &[2]);
    let mut player = table.player();

    let offer = table.roll_first(&mut player);
    assert!(!offer.select_dice);
    assert!(!player.can_throw());
    assert_eq!(
        player.resolve(offer.ticket, Decision::SelectDice(DiceSelection::all()), &mut table.ctx()),
        Err(DecisionError::ThrowLimitReached { max: 1 })
    );
}

#[test]
fn test_round_notifications_in_order() {
    let mut table = Table::new(&[5]);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    table.bus.on(EventKind::StateChanged, move |n| {
        sink.borrow_mut().push(n.reason);
    });

    let mut player = table.player();
    let offer = table.roll_first(&mut player);
    player
        .resolve(offer.ticket, Decision::SelectCategoryToAdd(CategoryName::Fives), &mut table.ctx())
        .unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            ChangeReason::RoundStarted,
            ChangeReason::AwaitingDecision,
            ChangeReason::DiceRolled,
            ChangeReason::AwaitingDecision,
            ChangeReason::RoundEnded,
        ]
    );
}

#[test]
fn test_commit_emits_round_ended() {
    let mut table = Table::new(&[5]);
    let mut player = table.player();
    let offer = table.roll_first(&mut player);
    let emitted = table.bus.emitted_count();

    let step = player
        .resolve(offer.ticket, Decision::SelectCategoryToAdd(CategoryName::Yahtzee), &mut table.ctx())
        .unwrap();

    assert!(matches!(step, RoundStep::Finished(_)));
    assert_eq!(table.bus.emitted_count(), emitted + 1);
}

#[test]
fn test_rejected_decision_emits_nothing() {
    let mut table = Table::new(&[5]);
    let mut player = table.player();
    let offer = table.roll_first(&mut player);
    let emitted = table.bus.emitted_count();
    let stale = DecisionTicket(offer.ticket.0 - 1);

    assert_eq!(
        player.resolve(offer.ticket, Decision::SelectCategoryToAdd(CategoryName::Ones), &mut table.ctx()),
        Err(DecisionError::CategoryNotOffered(CategoryName::Ones))
    );
    assert_eq!(
        player.resolve(stale, Decision::SelectCategoryToCancel(CategoryName::Chance), &mut table.ctx()),
        Err(DecisionError::StaleTicket {
            expected: offer.ticket,
            got: stale
        })
    );

    assert_eq!(table.bus.emitted_count(), emitted);
    assert_eq!(player.pending_offer(), Some(&offer));
}
