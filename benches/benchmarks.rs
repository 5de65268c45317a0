criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_river_hand,
        playing_single_trial,
        running_whole_simulation,
}

fn evaluating_river_hand(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Hand", |b| {
        let ref mut rng = rand::rng();
        let mut deck = Deck::new();
        let hand = Hand::from((0..7).map(|_| deck.draw(rng)).collect::<Vec<_>>());
        b.iter(|| Strength::from(Evaluator::from(hand)))
    });
}

fn playing_single_trial(c: &mut criterion::Criterion) {
    c.bench_function("play a single Trial", |b| {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let hero = Hole::try_from("AsKs").unwrap();
        let flop = Flop::try_from("QsJs2d").unwrap();
        let sampler = Sampler::from((hero, flop));
        b.iter(|| Trial::play(hero, flop, sampler.deal(rng)))
    });
}

fn running_whole_simulation(c: &mut criterion::Criterion) {
    c.bench_function("run a 10,000-trial Simulation", |b| {
        let hero = Hole::try_from("AsKs").unwrap();
        let flop = Flop::try_from("QsJs2d").unwrap();
        let simulation = Simulation::new(hero, flop).unwrap().seed(0);
        b.iter(|| simulation.run().unwrap())
    });
}

use holdem_equity::cards::deck::Deck;
use holdem_equity::cards::evaluator::Evaluator;
use holdem_equity::cards::flop::Flop;
use holdem_equity::cards::hand::Hand;
use holdem_equity::cards::hole::Hole;
use holdem_equity::cards::strength::Strength;
use holdem_equity::equity::sampler::Sampler;
use holdem_equity::equity::trial::Trial;
use rand::SeedableRng;
use rand::rngs::SmallRng;
