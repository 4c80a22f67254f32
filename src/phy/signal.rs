use super::bits::validate_bits;
use super::line_coding::{LineCode, LineCodingKind, Polarity};
use super::sampling::SamplingConfig;
use crate::error::Result;
use serde::Serialize;

/// A sampled waveform paired with its time axis.
///
/// `time` and `samples` always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    pub kind: LineCodingKind,
    pub time: Vec<f64>,
    pub samples: Vec<f64>,
}

impl Signal {
    pub(crate) fn new(
        kind: LineCodingKind,
        time: Vec<f64>,
        samples: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(time.len(), samples.len());
        Self {
            kind,
            time,
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// First sample of every bit block
    pub fn bit_levels(&self, samples_per_bit: usize) -> Vec<f64> {
        if samples_per_bit == 0 {
            return Vec::new();
        }
        self.samples
            .iter()
            .step_by(samples_per_bit)
            .copied()
            .collect()
    }

    /// Sample indices where the level differs from the previous sample
    pub fn transitions(&self) -> Vec<usize> {
        self.samples
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[0] != pair[1])
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Iterate over `(t, amplitude)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time
            .iter()
            .copied()
            .zip(self.samples.iter().copied())
    }
}

fn encode_with(
    kind: LineCodingKind,
    bits: &[u8],
    bit_duration: f64,
) -> Result<Signal> {
    let config = SamplingConfig::with_bit_duration(bit_duration)?;
    kind.create(config, Polarity::Unipolar)
        .encode(bits)
}

/// Time axis and unencoded source signal, 100 samples per bit.
pub fn generate_signal(bits: &[u8], bit_duration: f64) -> Result<Signal> {
    encode_with(LineCodingKind::Source, bits, bit_duration)
}

pub fn nrz_l(bits: &[u8], bit_duration: f64) -> Result<Signal> {
    encode_with(LineCodingKind::NrzL, bits, bit_duration)
}

pub fn nrz_i(bits: &[u8], bit_duration: f64) -> Result<Signal> {
    encode_with(LineCodingKind::NrzI, bits, bit_duration)
}

pub fn manchester(bits: &[u8], bit_duration: f64) -> Result<Signal> {
    encode_with(LineCodingKind::Manchester, bits, bit_duration)
}

/// Encode one sequence with the given schemes.
///
/// Input is validated once up front: every signal is returned or none.
pub fn encode_all(
    bits: &[u8],
    kinds: &[LineCodingKind],
    config: &SamplingConfig,
    polarity: Polarity,
) -> Result<Vec<Signal>> {
    config.validate()?;
    validate_bits(bits)?;
    config.total_samples(bits.len())?;

    kinds
        .iter()
        .map(|kind| {
            kind.create(*config, polarity)
                .encode(bits)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, InvalidInput};

    #[test]
    fn test_reference_lengths() {
        let bits = [1, 0, 1, 1, 0, 0, 1, 1];
        for signal in [
            generate_signal(&bits, 1.0).unwrap(),
            nrz_l(&bits, 1.0).unwrap(),
            nrz_i(&bits, 1.0).unwrap(),
            manchester(&bits, 1.0).unwrap(),
        ] {
            assert_eq!(signal.len(), 800);
            assert_eq!(signal.time.len(), 800);
        }
    }

    #[test]
    fn test_bit_levels_and_transitions() {
        let config = SamplingConfig::new(1.0, 4).unwrap();
        let signals = encode_all(
            &[1, 0, 1, 1],
            &[LineCodingKind::NrzI],
            &config,
            Polarity::Unipolar,
        )
        .unwrap();
        let signal = &signals[0];

        assert_eq!(signal.bit_levels(4), vec![1.0, 1.0, 0.0, 1.0]);
        assert_eq!(signal.transitions(), vec![8, 12]);
    }

    #[test]
    fn test_encode_all_fails_without_partial_output() {
        let config = SamplingConfig::default();
        let result = encode_all(
            &[1, 0, 7],
            &LineCodingKind::ALL,
            &config,
            Polarity::Unipolar,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_all_rejects_sample_count_overflow() {
        let config = SamplingConfig::new(1.0, usize::MAX / 2 + 1).unwrap();
        let result = encode_all(
            &[1, 1],
            &LineCodingKind::ALL,
            &config,
            Polarity::Unipolar,
        );
        assert!(matches!(
            result,
            Err(Error::InvalidInput(InvalidInput::TooManySamples { .. }))
        ));
    }

    #[test]
    fn test_points_pair_time_with_samples() {
        let signal = nrz_l(&[1], 2.0).unwrap();
        let points: Vec<_> = signal.points().take(2).collect();
        assert_eq!(points, vec![(0.0, 1.0), (0.02, 1.0)]);
    }
}
