use super::equity::Equity;
use super::sampler::Sampler;
use super::tally::Tally;
use super::trial::Trial;
use crate::DEFAULT_ITERATIONS;
use crate::cards::card::Card;
use crate::cards::flop::Flop;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::error::InvalidInput;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// trials resolved per worker batch. each batch reseeds from the master
/// seed and its own index, so a run replays exactly for a fixed seed no
/// matter how many threads rayon schedules.
const BATCH: usize = 1024;

/// A configured Monte Carlo run for one hero hole and one flop.
///
/// Construction validates the cards; everything else has a default. The
/// trial count, master seed, and a cooperative cancellation flag can be
/// chained on before calling [`Simulation::run`].
pub struct Simulation {
    hero: Hole,
    flop: Flop,
    iterations: usize,
    seed: Option<u64>,
    cancel: Option<Arc<AtomicBool>>,
}

impl Simulation {
    /// Rejects a hole and flop that share a card.
    pub fn new(hero: Hole, flop: Flop) -> Result<Self, InvalidInput> {
        match u64::from(Hand::from(hero)) & u64::from(Hand::from(flop)) {
            0 => Ok(Self {
                hero,
                flop,
                iterations: DEFAULT_ITERATIONS,
                seed: None,
                cancel: None,
            }),
            bit => Err(InvalidInput::DuplicateCard(Card::from(bit))),
        }
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    /// store(true) on the flag stops workers between trials. whatever
    /// completed by then is still aggregated, marked partial.
    pub fn cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Samples runouts in parallel and aggregates them into an [`Equity`].
    ///
    /// Fails up front on a zero trial count, and after the fact when a
    /// cancellation arrived before any trial completed.
    pub fn run(&self) -> Result<Equity, InvalidInput> {
        use rayon::prelude::*;
        if self.iterations == 0 {
            return Err(InvalidInput::NoTrials);
        }
        let master = self.seed.unwrap_or_else(rand::random);
        let sampler = Sampler::from((self.hero, self.flop));
        log::info!(
            "simulating {} runouts of {} on {}",
            self.iterations,
            self.hero,
            self.flop
        );
        let tally = (0..self.iterations.div_ceil(BATCH))
            .into_par_iter()
            .map(|batch| self.simulate(batch, master, &sampler))
            .reduce(Tally::default, Tally::merge);
        let equity = Equity::try_from(tally)?;
        log::debug!(
            "win {:.4} tie {:.4} loss {:.4} over {} trials",
            equity.win(),
            equity.tie(),
            equity.loss(),
            equity.trials()
        );
        match tally.total() < self.iterations {
            true => {
                log::warn!(
                    "interrupted after {} of {} trials",
                    tally.total(),
                    self.iterations
                );
                Ok(equity.interrupted())
            }
            false => Ok(equity),
        }
    }

    /// one worker's share: up to BATCH trials on its own reseeded rng.
    fn simulate(&self, batch: usize, master: u64, sampler: &Sampler) -> Tally {
        let ref mut rng = SmallRng::seed_from_u64(master.wrapping_add(batch as u64));
        let lo = batch * BATCH;
        let hi = self.iterations.min(lo + BATCH);
        let mut tally = Tally::default();
        for _ in lo..hi {
            if self.interrupted() {
                break;
            }
            tally.absorb(&Trial::play(self.hero, self.flop, sampler.deal(rng)));
        }
        tally
    }

    fn interrupted(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Probability;

    fn simulation(hero: &str, flop: &str) -> Simulation {
        Simulation::new(
            Hole::try_from(hero).unwrap(),
            Flop::try_from(flop).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_a_card_in_both_hole_and_flop() {
        let hero = Hole::try_from("AsKs").unwrap();
        let flop = Flop::try_from("AsJd2d").unwrap();
        assert_eq!(
            Simulation::new(hero, flop).err(),
            Some(InvalidInput::DuplicateCard(Card::try_from("As").unwrap()))
        );
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(
            simulation("AsKs", "QsJs2d").iterations(0).run().err(),
            Some(InvalidInput::NoTrials)
        );
    }

    #[test]
    fn completes_every_requested_trial() {
        let equity = simulation("AsKs", "QsJs2d")
            .iterations(2_000)
            .seed(42)
            .run()
            .unwrap();
        assert_eq!(equity.trials(), 2_000);
        assert!(!equity.is_partial());
    }

    #[test]
    fn replays_exactly_under_a_fixed_seed() {
        let one = simulation("AsKs", "QsJs2d").iterations(10_000).seed(7).run();
        let two = simulation("AsKs", "QsJs2d").iterations(10_000).seed(7).run();
        assert_eq!(one.unwrap(), two.unwrap());
    }

    #[test]
    fn different_seeds_sample_different_runouts() {
        let one = simulation("AsKs", "QsJs2d").iterations(10_000).seed(1).run();
        let two = simulation("AsKs", "QsJs2d").iterations(10_000).seed(2).run();
        assert_ne!(one.unwrap(), two.unwrap());
    }

    #[test]
    fn rates_always_sum_to_one() {
        let equity = simulation("7h2c", "Ad8s3d")
            .iterations(5_000)
            .seed(11)
            .run()
            .unwrap();
        let outcomes = equity.win() + equity.tie() + equity.loss();
        let categories = equity
            .distribution()
            .iter()
            .map(|(_, rate)| rate)
            .sum::<Probability>();
        assert!((outcomes - 1.).abs() < 1e-4);
        assert!((categories - 1.).abs() < 1e-4);
    }

    /// flopped quad aces lose to nothing and chop almost never.
    #[test]
    fn flopped_quads_dominate() {
        let equity = simulation("AsAh", "AdAcKh")
            .iterations(10_000)
            .seed(5)
            .run()
            .unwrap();
        assert!(equity.win() > 0.95);
        assert!(equity.frequency(crate::cards::category::Category::FourOAK) > 0.95);
    }

    #[test]
    fn cancellation_before_any_trial_leaves_nothing_to_count() {
        let flag = Arc::new(AtomicBool::new(true));
        let result = simulation("AsKs", "QsJs2d").cancel(flag).run();
        assert_eq!(result.err(), Some(InvalidInput::NoTrials));
    }

    #[test]
    fn cancellation_mid_run_yields_a_partial_result() {
        let flag = Arc::new(AtomicBool::new(false));
        let handle = {
            let flag = Arc::clone(&flag);
            std::thread::spawn(move || {
                std::thread::sleep(std::time::Duration::from_millis(200));
                flag.store(true, Ordering::Relaxed);
            })
        };
        let equity = simulation("AsKs", "QsJs2d")
            .iterations(50_000_000)
            .seed(9)
            .cancel(flag)
            .run()
            .unwrap();
        handle.join().unwrap();
        assert!(equity.is_partial());
        assert!(equity.trials() > 0);
        assert!(equity.trials() < 50_000_000);
    }
}
