use crate::phy::Signal;
use crate::utils::consts::TRACE_HALF_BIT_WIDTH;
use std::fmt::Write;

pub fn print_banner() {
    println!("linecode-rs");
}

fn is_high(sample: f64) -> bool {
    sample > 0.0
}

/// Level at the start and at the end of every bit block.
fn half_bit_levels(
    signal: &Signal,
    samples_per_bit: usize,
) -> Vec<(bool, bool)> {
    if samples_per_bit == 0 {
        return Vec::new();
    }
    signal
        .samples
        .chunks(samples_per_bit)
        .map(|block| {
            let first = block.first().copied().unwrap_or_default();
            let last = block.last().copied().unwrap_or_default();
            (is_high(first), is_high(last))
        })
        .collect()
}

/// Per-bit table: one row for the input bits, one row per signal.
/// A block that changes level inside the bit shows both halves, e.g. `10`.
pub fn render_levels(
    bits: &[u8],
    signals: &[Signal],
    samples_per_bit: usize,
) -> String {
    let label_width = signals
        .iter()
        .map(|s| s.kind.name().len())
        .max()
        .unwrap_or(0)
        .max("bits".len());

    let mut out = String::new();
    let _ = write!(out, "{:<label_width$} |", "bits");
    for bit in bits {
        let _ = write!(out, " {:>2}", bit);
    }
    out.push('\n');

    for signal in signals {
        let _ = write!(out, "{:<label_width$} |", signal.kind.name());
        for (first, last) in half_bit_levels(signal, samples_per_bit) {
            let cell = if first == last {
                format!("{}", first as u8)
            } else {
                format!("{}{}", first as u8, last as u8)
            };
            let _ = write!(out, " {:>2}", cell);
        }
        out.push('\n');
    }
    out
}

/// One-line step trace, one column group per half bit.
pub fn render_trace(signal: &Signal, samples_per_bit: usize) -> String {
    let mut out = String::new();
    for (first, last) in half_bit_levels(signal, samples_per_bit) {
        for high in [first, last] {
            let glyph = if high { '‾' } else { '_' };
            for _ in 0..TRACE_HALF_BIT_WIDTH {
                out.push(glyph);
            }
        }
    }
    out
}
