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
        evaluating_five_card_ranking,
        evaluating_five_card_strength,
        comparing_kickers,
        dealing_round,
        playing_robot_opening,
}

fn evaluating_five_card_ranking(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let hand = Deck::shuffled(rng).deal(HAND_SIZE).unwrap();
    c.bench_function("classify a 5-card Hand", |b| {
        b.iter(|| Evaluator::try_from(hand).unwrap().find_ranking())
    });
}

fn evaluating_five_card_strength(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(1);
    let hand = Deck::shuffled(rng).deal(HAND_SIZE).unwrap();
    c.bench_function("evaluate a 5-card Strength", |b| {
        b.iter(|| Strength::try_from(hand).unwrap())
    });
}

fn comparing_kickers(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(2);
    let mut deck = Deck::shuffled(rng);
    let a = Kickers::try_from(deck.deal(HAND_SIZE).unwrap()).unwrap();
    let b = Kickers::try_from(deck.deal(HAND_SIZE).unwrap()).unwrap();
    c.bench_function("compare two Kickers", |bench| bench.iter(|| a.diff(&b)));
}

fn dealing_round(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(3);
    c.bench_function("shuffle and deal a Round", |b| {
        b.iter(|| Round::<Dealt>::deal(rng).unwrap())
    });
}

fn playing_robot_opening(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(4);
    c.bench_function("deal and open a Round with the Robot first", |b| {
        b.iter(|| {
            Round::<Dealt>::deal(rng)
                .unwrap()
                .open(true, &Robot, rng)
                .unwrap()
        })
    });
}

use fivecard::HAND_SIZE;
use fivecard::cards::Deck;
use fivecard::cards::Evaluator;
use fivecard::cards::Kickers;
use fivecard::cards::Strength;
use fivecard::gameplay::Dealt;
use fivecard::gameplay::Round;
use fivecard::players::Robot;
use rand::SeedableRng;
use rand::rngs::SmallRng;
