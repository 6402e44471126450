use gate_nn::data::logic::GATE_NAMES;
use gate_nn::{logic_gate_table, train_cycle, ParkMiller, TrainConfig, Trainer};

#[test]
fn reference_run_learns_all_six_gates() {
    let samples = logic_gate_table();
    let mut rng = ParkMiller::new();
    let mut trainer = Trainer::create(2, 2, 6, || rng.next_f64());

    // 4000 iterations at lr 1.0, cycling the truth table.
    train_cycle(&mut trainer, &samples, &TrainConfig::default()).unwrap();

    for sample in &samples {
        let prediction = trainer.network().predict(&sample.input).unwrap();
        for (gate, (&p, &t)) in prediction.iter().zip(&sample.target).enumerate() {
            // Two hidden units make XOR/XNOR the hard pair.
            let tolerance = if gate < 2 { 0.3 } else { 0.1 };
            assert!(
                (p - t).abs() < tolerance,
                "{} on {:?}: predicted {p}, expected {t}",
                GATE_NAMES[gate],
                sample.input
            );
        }
    }
}

#[test]
fn reference_run_matches_known_output() {
    let samples = logic_gate_table();
    let mut rng = ParkMiller::new();
    let mut trainer = Trainer::create(2, 2, 6, || rng.next_f64());
    for i in 0..4000 {
        let s = &samples[i % samples.len()];
        trainer.train(&s.input, &s.target, 1.0).unwrap();
    }

    let expected = [
        [0.038, 0.962, 0.038, 0.001, 0.963, 0.999],
        [0.961, 0.039, 0.970, 0.026, 0.029, 0.974],
        [0.961, 0.039, 0.970, 0.026, 0.030, 0.974],
        [0.049, 0.952, 0.994, 0.956, 0.006, 0.044],
    ];
    for (sample, row) in samples.iter().zip(expected.iter()) {
        let prediction = trainer.network().predict(&sample.input).unwrap();
        for (p, e) in prediction.iter().zip(row.iter()) {
            assert!((p - e).abs() < 1e-3, "{p} vs {e}");
        }
    }
}
