//! Console tables over the network's read accessors.

use std::io::Write;

use crate::data::data_item::{argmax, DataItem};
use crate::data::logic::GATE_NAMES;
use crate::data::semeion::SIDE;
use crate::math::index::idx;
use crate::network::network::Network;

/// One row per sample: `a,b = xor  xnor or and nor  nand`.
pub fn write_predictions<W: Write>(out: &mut W, network: &Network, samples: &[DataItem]) -> std::io::Result<()> {
    writeln!(
        out,
        "        {}   {}    {}   {}   {}   {}",
        GATE_NAMES[0], GATE_NAMES[1], GATE_NAMES[2], GATE_NAMES[3], GATE_NAMES[4], GATE_NAMES[5]
    )?;
    for sample in samples {
        let p = network.predict(&sample.input).map_err(invalid_input)?;
        let inputs: Vec<String> = sample.input.iter().map(|x| format!("{:.0}", x)).collect();
        let cells: Vec<String> = p.iter().map(|y| format!("{:.3}", y)).collect();
        if cells.len() == GATE_NAMES.len() {
            writeln!(
                out,
                "{} = {}  {} {} {} {}  {}",
                inputs.join(","), cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
            )?;
        } else {
            writeln!(out, "{} = {}", inputs.join(","), cells.join(" "))?;
        }
    }
    Ok(())
}

/// Dumps all four parameter arrays as fixed-width tables.
pub fn write_parameters<W: Write>(out: &mut W, network: &Network) -> std::io::Result<()> {
    writeln!(out, "weights hidden:")?;
    write_matrix(out, network.weights_hidden(), network.input_count(), network.hidden_count())?;
    writeln!(out, "biases hidden:")?;
    write_matrix(out, network.biases_hidden(), 1, network.hidden_count())?;
    writeln!(out, "weights output:")?;
    write_matrix(out, network.weights_output(), network.hidden_count(), network.output_count())?;
    writeln!(out, "biases output:")?;
    write_matrix(out, network.biases_output(), 1, network.output_count())?;
    Ok(())
}

/// Draws a Semeion glyph and the per-class confidences, flagging the best.
pub fn write_digit<W: Write>(out: &mut W, item: &DataItem, prediction: &[f64]) -> std::io::Result<()> {
    for row in item.input.chunks(SIDE) {
        let line: String = row.iter().map(|&px| if px >= 0.5 { '*' } else { ' ' }).collect();
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "Prediction (output from network for the above input):")?;
    let (best, _) = argmax(prediction);
    for (digit, confidence) in prediction.iter().enumerate() {
        let pct = format!("{:.3}%", confidence * 100.0);
        if digit == best {
            writeln!(out, "{}: {:>8} <-- best prediction", digit, pct)?;
        } else {
            writeln!(out, "{}: {:>8}", digit, pct)?;
        }
    }
    Ok(())
}

fn write_matrix<W: Write>(out: &mut W, values: &[f64], rows: usize, cols: usize) -> std::io::Result<()> {
    for r in 0..rows {
        for c in 0..cols {
            write!(out, " {:9.6}", values[idx(r, c, cols)])?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn invalid_input(e: crate::network::error::NetworkError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
}
