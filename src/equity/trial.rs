use crate::cards::card::Card;
use crate::cards::category::Category;
use crate::cards::flop::Flop;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::strength::Strength;

/// The unseen cards dealt during one trial: the opponent's hole pair,
/// the turn, and the river.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    opponent: Hole,
    turn: Card,
    river: Card,
}

impl Deal {
    pub fn opponent(&self) -> Hole {
        self.opponent
    }
    pub fn turn(&self) -> Card {
        self.turn
    }
    pub fn river(&self) -> Card {
        self.river
    }
}

impl From<(Hole, Card, Card)> for Deal {
    fn from((opponent, turn, river): (Hole, Card, Card)) -> Self {
        Self {
            opponent,
            turn,
            river,
        }
    }
}

/// everything a Deal put on the table, as one Hand
impl From<Deal> for Hand {
    fn from(deal: Deal) -> Self {
        Hand::add(
            Hand::from(deal.opponent),
            Hand::add(Hand::from(deal.turn), Hand::from(deal.river)),
        )
    }
}

impl crate::Arbitrary for Deal {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let mut deck = crate::cards::deck::Deck::new();
        Self::from((deck.hole(rng), deck.draw(rng), deck.draw(rng)))
    }
}

/// How one trial ended for the hero.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

/// One fully resolved runout.
///
/// Records what was dealt and both evaluated seven-card hands, so a trial
/// can be replayed or inspected after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    deal: Deal,
    hero: Strength,
    villain: Strength,
    outcome: Outcome,
}

impl Trial {
    /// Resolves the showdown for a fixed runout.
    ///
    /// Both seven-card hands share the five community cards. The outcome
    /// comes from comparing Strengths, so categories decide first and
    /// kickers break ties.
    pub fn play(hero: Hole, flop: Flop, deal: Deal) -> Self {
        let board = Hand::add(
            Hand::from(flop),
            Hand::add(Hand::from(deal.turn), Hand::from(deal.river)),
        );
        let ours = Strength::from(Hand::add(Hand::from(hero), board));
        let theirs = Strength::from(Hand::add(Hand::from(deal.opponent), board));
        let outcome = match ours.cmp(&theirs) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Tie,
        };
        Self {
            deal,
            hero: ours,
            villain: theirs,
            outcome,
        }
    }

    pub fn deal(&self) -> Deal {
        self.deal
    }
    pub fn hero(&self) -> Strength {
        self.hero
    }
    pub fn villain(&self) -> Strength {
        self.villain
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    /// which of the nine categories the hero's hand landed in
    pub fn category(&self) -> Category {
        Category::from(self.hero.ranking())
    }
}
