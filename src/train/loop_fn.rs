use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, instrument};

use crate::data::data_item::{argmax, DataItem};
use crate::loss::mse::MseLoss;
use crate::network::error::NetworkError;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::Trainer;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Runs `config.iterations` online steps, taking samples in order and
/// wrapping around at the end of the set. Returns the mean per-sample MSE
/// over the whole set after the last step.
#[instrument(level = "debug", skip_all, fields(iterations = config.iterations, learning_rate = config.learning_rate))]
pub fn train_cycle(
    trainer: &mut Trainer,
    samples: &[DataItem],
    config: &TrainConfig,
) -> Result<f64, NetworkError> {
    require_samples(samples)?;

    for i in 0..config.iterations {
        let sample = &samples[i % samples.len()];
        trainer.train(&sample.input, &sample.target, config.learning_rate)?;

        if config.log_every > 0 && (i + 1) % config.log_every == 0 {
            let loss = mean_loss(trainer.network(), samples)?;
            debug!(iteration = i + 1, loss, "progress");
        }
    }

    let loss = mean_loss(trainer.network(), samples)?;
    info!(iterations = config.iterations, loss, "training finished");
    Ok(loss)
}

/// Runs `config.epochs` passes over `samples`, visiting them in a fresh
/// random order each pass, and scores the whole set after every pass.
#[instrument(level = "debug", skip_all, fields(epochs = config.epochs, samples = samples.len()))]
pub fn train_epochs<R>(
    trainer: &mut Trainer,
    samples: &[DataItem],
    config: &TrainConfig,
    rng: &mut R,
) -> Result<Vec<EpochStats>, NetworkError>
where
    R: Rng + ?Sized,
{
    require_samples(samples)?;

    let mut order: Vec<usize> = (0..samples.len()).collect();
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        order.shuffle(rng);
        for &i in &order {
            let sample = &samples[i];
            trainer.train(&sample.input, &sample.target, config.learning_rate)?;
        }

        let stats = score(trainer.network(), samples, epoch, config.epochs)?;
        info!(
            epoch,
            total_epochs = config.epochs,
            correct = stats.correct,
            total = stats.total,
            accuracy = stats.accuracy,
            average_confidence = stats.average_confidence,
            "epoch finished"
        );
        history.push(stats);
    }

    Ok(history)
}

/// Mean per-sample MSE of `network` over `samples`.
pub fn mean_loss(network: &Network, samples: &[DataItem]) -> Result<f64, NetworkError> {
    require_samples(samples)?;
    let mut total = 0.0;
    for sample in samples {
        let output = network.predict(&sample.input)?;
        total += MseLoss::loss(&output, &sample.target);
    }
    Ok(total / samples.len() as f64)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn require_samples(samples: &[DataItem]) -> Result<(), NetworkError> {
    if samples.is_empty() {
        return Err(NetworkError::InvalidInput { what: "samples", expected: 1, actual: 0 });
    }
    Ok(())
}

/// Argmax accuracy and mean winning confidence over the full set.
fn score(
    network: &Network,
    samples: &[DataItem],
    epoch: usize,
    total_epochs: usize,
) -> Result<EpochStats, NetworkError> {
    let mut correct = 0;
    let mut confidence = 0.0;
    for sample in samples {
        let output = network.predict(&sample.input)?;
        let (predicted, value) = argmax(&output);
        if predicted == sample.label() {
            correct += 1;
        }
        confidence += value;
    }

    let total = samples.len();
    Ok(EpochStats {
        epoch,
        total_epochs,
        correct,
        total,
        accuracy: correct as f64 / total as f64,
        average_confidence: confidence / total as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::{mean_loss, train_cycle, train_epochs};
    use crate::data::data_item::DataItem;
    use crate::data::logic::logic_gate_table;
    use crate::network::error::NetworkError;
    use crate::random::park_miller::ParkMiller;
    use crate::train::train_config::TrainConfig;
    use crate::train::trainer::Trainer;

    fn reference_trainer() -> Trainer {
        let mut rng = ParkMiller::new();
        Trainer::create(2, 2, 6, || rng.next_f64())
    }

    #[test]
    fn cycle_matches_manual_loop() {
        let samples = logic_gate_table();
        let config = TrainConfig { iterations: 37, ..TrainConfig::default() };

        let mut looped = reference_trainer();
        train_cycle(&mut looped, &samples, &config).unwrap();

        let mut manual = reference_trainer();
        for i in 0..37 {
            let s = &samples[i % samples.len()];
            manual.train(&s.input, &s.target, 1.0).unwrap();
        }

        assert_eq!(looped.network(), manual.network());
    }

    #[test]
    fn cycle_lowers_loss() {
        let samples = logic_gate_table();
        let mut trainer = reference_trainer();
        let before = mean_loss(trainer.network(), &samples).unwrap();
        let after = train_cycle(&mut trainer, &samples, &TrainConfig::default()).unwrap();
        assert!(after < before / 10.0, "{after} vs {before}");
    }

    #[test]
    fn empty_sample_set_is_rejected() {
        let mut trainer = reference_trainer();
        let err = train_cycle(&mut trainer, &[], &TrainConfig::default()).unwrap_err();
        assert_eq!(err, NetworkError::InvalidInput { what: "samples", expected: 1, actual: 0 });
    }

    #[test]
    fn epochs_report_every_pass() {
        // Two separable one-hot classes.
        let samples = vec![
            DataItem::new(vec![1.0, 0.0], vec![1.0, 0.0]),
            DataItem::new(vec![0.0, 1.0], vec![0.0, 1.0]),
        ];
        let mut init = ParkMiller::with_seed(7);
        let mut trainer = Trainer::create(2, 3, 2, || init.next_f64());
        let config = TrainConfig { epochs: 200, learning_rate: 0.5, ..TrainConfig::default() };

        let history = train_epochs(&mut trainer, &samples, &config, &mut ParkMiller::with_seed(11)).unwrap();

        assert_eq!(history.len(), 200);
        assert_eq!(history[0].epoch, 1);
        let last = history.last().unwrap();
        assert_eq!(last.total_epochs, 200);
        assert_eq!(last.total, 2);
        assert_eq!(last.correct, 2);
        assert_eq!(last.accuracy, 1.0);
        assert!(last.average_confidence > 0.5 && last.average_confidence < 1.0);
    }
}
