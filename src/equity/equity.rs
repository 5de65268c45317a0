use super::tally::Tally;
use super::trial::Trial;
use crate::Probability;
use crate::cards::category::Category;
use crate::error::InvalidInput;

/// Folds resolved trials into rates.
///
/// Errors when given nothing to count, since rates over zero trials are
/// undefined.
pub fn aggregate(trials: impl IntoIterator<Item = Trial>) -> Result<Equity, InvalidInput> {
    let mut tally = Tally::default();
    for trial in trials {
        tally.absorb(&trial);
    }
    Equity::try_from(tally)
}

/// The hero's estimated showdown equity.
///
/// All rates are relative frequencies over completed trials: win, tie,
/// and loss sum to one, as does the distribution over the hero's nine
/// hand categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Equity {
    win: Probability,
    tie: Probability,
    loss: Probability,
    distribution: [Probability; Category::N],
    trials: usize,
    partial: bool,
}

impl Equity {
    pub fn win(&self) -> Probability {
        self.win
    }
    pub fn tie(&self) -> Probability {
        self.tie
    }
    pub fn loss(&self) -> Probability {
        self.loss
    }
    /// how often the hero's best hand landed in this category
    pub fn frequency(&self, category: Category) -> Probability {
        self.distribution[category.index()]
    }
    pub fn distribution(&self) -> [(Category, Probability); Category::N] {
        Category::all().map(|category| (category, self.frequency(category)))
    }
    /// completed trials behind these rates
    pub fn trials(&self) -> usize {
        self.trials
    }
    /// true when a cancelled run stopped short of its requested trials
    pub fn is_partial(&self) -> bool {
        self.partial
    }
    pub(crate) fn interrupted(mut self) -> Self {
        self.partial = true;
        self
    }
}

impl TryFrom<Tally> for Equity {
    type Error = InvalidInput;
    fn try_from(tally: Tally) -> Result<Self, Self::Error> {
        match tally.total() {
            0 => Err(InvalidInput::NoTrials),
            n => Ok(Self {
                win: tally.wins() as Probability / n as Probability,
                tie: tally.ties() as Probability / n as Probability,
                loss: tally.losses() as Probability / n as Probability,
                distribution: tally.categories().map(|c| c as Probability / n as Probability),
                trials: n,
                partial: false,
            }),
        }
    }
}

impl std::fmt::Display for Equity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<16}{:>8.2}%", "win", self.win * 100.)?;
        writeln!(f, "{:<16}{:>8.2}%", "tie", self.tie * 100.)?;
        writeln!(f, "{:<16}{:>8.2}%", "loss", self.loss * 100.)?;
        for (category, rate) in self.distribution() {
            writeln!(f, "{:<16}{:>8.2}%", category.to_string(), rate * 100.)?;
        }
        match self.partial {
            true => writeln!(f, "partial result from {} completed trials", self.trials),
            false => Ok(()),
        }
    }
}

/// the categories field keys frequencies by display label, ordered
/// weakest to strongest via the Category Ord
impl serde::Serialize for Equity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Equity", 6)?;
        s.serialize_field("win", &self.win)?;
        s.serialize_field("tie", &self.tie)?;
        s.serialize_field("loss", &self.loss)?;
        s.serialize_field("trials", &self.trials)?;
        s.serialize_field("partial", &self.partial)?;
        s.serialize_field(
            "categories",
            &std::collections::BTreeMap::from_iter(self.distribution()),
        )?;
        s.end()
    }
}
