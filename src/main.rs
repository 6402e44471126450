use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use gate_nn::data::logic::GATE_NAMES;
use gate_nn::data::semeion;
use gate_nn::report::{write_digit, write_parameters, write_predictions};
use gate_nn::{logic_gate_table, logging, train_cycle, train_epochs, TrainConfig, Trainer};

/// Trains a single-hidden-layer sigmoid network with online backpropagation.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON training config; missing fields take their defaults.
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log per-iteration progress.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Learn XOR, XNOR, OR, AND, NOR and NAND with one 2-input network.
    Logical {
        #[arg(long)]
        iterations: Option<usize>,
        #[arg(long)]
        learning_rate: Option<f64>,
    },
    /// Learn the Semeion handwritten digits (256 pixels, 10 classes).
    Semeion {
        file: String,
        #[arg(long)]
        hidden: Option<usize>,
        #[arg(long)]
        epochs: Option<usize>,
        #[arg(long)]
        learning_rate: Option<f64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("failed to install logger: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => TrainConfig::load_json(path)?,
        None => TrainConfig::default(),
    };

    match cli.command {
        Command::Logical { iterations, learning_rate } => {
            if let Some(n) = iterations { config.iterations = n; }
            if let Some(lr) = learning_rate { config.learning_rate = lr; }
            logical(&config)
        }
        Command::Semeion { file, hidden, epochs, learning_rate } => {
            if let Some(h) = hidden { config.hidden_count = h; }
            if let Some(n) = epochs { config.epochs = n; }
            if let Some(lr) = learning_rate { config.learning_rate = lr; }
            digits(&file, &config)
        }
    }
}

fn logical(config: &TrainConfig) -> Result<(), Box<dyn std::error::Error>> {
    let samples = logic_gate_table();
    let topology = config.topology(2, GATE_NAMES.len())?;
    let mut rng = config.rng.build();
    let mut trainer = Trainer::create(
        topology.input_count,
        topology.hidden_count,
        topology.output_count,
        || rng.next_f64(),
    );

    train_cycle(&mut trainer, &samples, config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Result after {} iterations", config.iterations)?;
    write_predictions(&mut out, trainer.network(), &samples)?;
    write_parameters(&mut out, trainer.network())?;
    Ok(())
}

fn digits(path: &str, config: &TrainConfig) -> Result<(), Box<dyn std::error::Error>> {
    let topology = config.topology(semeion::PIXELS, semeion::CLASSES)?;
    let samples = semeion::load(path)?;
    info!(samples = samples.len(), path, "loaded semeion data");

    let mut rng = config.rng.build();
    let mut trainer = Trainer::create(
        topology.input_count,
        topology.hidden_count,
        topology.output_count,
        || rng.next_f64(),
    );

    let history = train_epochs(&mut trainer, &samples, config, &mut rng)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for stats in &history {
        writeln!(
            out,
            "accuracy: {:.3}% ({}/{}), avg confidence: {:.3}%",
            stats.accuracy * 100.0,
            stats.correct,
            stats.total,
            stats.average_confidence * 100.0
        )?;
    }

    if let Some(item) = samples.get(10) {
        let prediction = trainer.network().predict(&item.input)?;
        write_digit(&mut out, item, &prediction)?;
    }
    Ok(())
}
