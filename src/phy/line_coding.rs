// Line coding schemes for baseband transmission
//
// NRZ-L:      1 -> high, 0 -> low for the whole bit
// NRZ-I:      level toggles on every 1, holds on every 0
// Manchester: 1 -> high then low, 0 -> low then high, floor midpoint split

use super::bits::validate_bits;
use super::sampling::{SamplingConfig, replicate, time_axis};
use super::signal::Signal;
use crate::error::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Amplitude mapping of the two signal levels.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    /// low = 0.0, high = 1.0
    #[default]
    Unipolar,
    /// low = -1.0, high = 1.0
    Bipolar,
}

impl Polarity {
    pub fn high(self) -> f64 {
        1.0
    }

    pub fn low(self) -> f64 {
        match self {
            Polarity::Unipolar => 0.0,
            Polarity::Bipolar => -1.0,
        }
    }

    /// Amplitude of a binary level (0 -> low, 1 -> high)
    pub fn level(self, bit: u8) -> f64 {
        if bit == 1 { self.high() } else { self.low() }
    }
}

pub trait LineCode {
    fn kind(&self) -> LineCodingKind;

    fn config(&self) -> &SamplingConfig;

    fn polarity(&self) -> Polarity;

    /// Waveform for an already validated bit sequence whose sample count
    /// passed `SamplingConfig::total_samples`.
    fn encode_levels(&self, bits: &[u8]) -> Vec<f64>;

    /// Validate the input, then pair the time axis with the encoded waveform.
    fn encode(&self, bits: &[u8]) -> Result<Signal> {
        self.config().validate()?;
        validate_bits(bits)?;
        self.config().total_samples(bits.len())?;

        let samples = self.encode_levels(bits);
        let time = time_axis(bits.len(), self.config());

        debug!(
            "Encoded {} bits with {}: {} samples",
            bits.len(),
            self.kind().name(),
            samples.len()
        );

        Ok(Signal::new(self.kind(), time, samples))
    }

    fn samples_for_bits(&self, num_bits: usize) -> usize {
        self.config().samples_for_bits(num_bits)
    }
}

/// The unencoded source signal: every bit value replicated per sample.
pub struct SourceEncoder {
    config: SamplingConfig,
    polarity: Polarity,
}

impl SourceEncoder {
    pub fn new(config: SamplingConfig) -> Self {
        Self {
            config,
            polarity: Polarity::default(),
        }
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl LineCode for SourceEncoder {
    fn kind(&self) -> LineCodingKind {
        LineCodingKind::Source
    }

    fn config(&self) -> &SamplingConfig {
        &self.config
    }

    fn polarity(&self) -> Polarity {
        self.polarity
    }

    fn encode_levels(&self, bits: &[u8]) -> Vec<f64> {
        let raw = replicate(bits, &self.config);
        match self.polarity {
            Polarity::Unipolar => raw,
            Polarity::Bipolar => raw
                .into_iter()
                .map(|v| self.polarity.level(v as u8))
                .collect(),
        }
    }
}

// NRZ-L: stateless, each bit block sits at the bit's own level
pub struct NrzLEncoder {
    config: SamplingConfig,
    polarity: Polarity,
}

impl NrzLEncoder {
    pub fn new(config: SamplingConfig) -> Self {
        Self {
            config,
            polarity: Polarity::default(),
        }
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl LineCode for NrzLEncoder {
    fn kind(&self) -> LineCodingKind {
        LineCodingKind::NrzL
    }

    fn config(&self) -> &SamplingConfig {
        &self.config
    }

    fn polarity(&self) -> Polarity {
        self.polarity
    }

    fn encode_levels(&self, bits: &[u8]) -> Vec<f64> {
        let spb = self.config.samples_per_bit;
        let mut samples =
            Vec::with_capacity(self.samples_for_bits(bits.len()));
        for &bit in bits {
            samples.extend(std::iter::repeat_n(self.polarity.level(bit), spb));
        }
        samples
    }
}

/// Two-state machine behind NRZ-I: a 1 flips the level, a 0 holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NrzIState {
    level: u8,
}

impl NrzIState {
    /// Starts at level 0
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(self) -> u8 {
        self.level
    }

    pub fn step(self, bit: u8) -> Self {
        if bit == 1 {
            Self {
                level: 1 - self.level,
            }
        } else {
            self
        }
    }
}

/// Per-bit NRZ-I levels, i.e. the state after consuming each bit.
pub fn nrz_i_levels(bits: &[u8]) -> Vec<u8> {
    bits.iter()
        .scan(NrzIState::new(), |state, &bit| {
            *state = state.step(bit);
            Some(state.level())
        })
        .collect()
}

pub struct NrzIEncoder {
    config: SamplingConfig,
    polarity: Polarity,
}

impl NrzIEncoder {
    pub fn new(config: SamplingConfig) -> Self {
        Self {
            config,
            polarity: Polarity::default(),
        }
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl LineCode for NrzIEncoder {
    fn kind(&self) -> LineCodingKind {
        LineCodingKind::NrzI
    }

    fn config(&self) -> &SamplingConfig {
        &self.config
    }

    fn polarity(&self) -> Polarity {
        self.polarity
    }

    fn encode_levels(&self, bits: &[u8]) -> Vec<f64> {
        let spb = self.config.samples_per_bit;
        let mut samples =
            Vec::with_capacity(self.samples_for_bits(bits.len()));
        for level in nrz_i_levels(bits) {
            samples
                .extend(std::iter::repeat_n(self.polarity.level(level), spb));
        }
        samples
    }
}

/// Split point of a Manchester bit block, `floor((start + end) / 2)`.
///
/// With an odd block length the second half is one sample longer.
pub fn manchester_midpoint(start: usize, end: usize) -> usize {
    start + (end - start) / 2
}

// Manchester: 1 -> [high, low], 0 -> [low, high]
pub struct ManchesterEncoder {
    config: SamplingConfig,
    polarity: Polarity,
}

impl ManchesterEncoder {
    pub fn new(config: SamplingConfig) -> Self {
        Self {
            config,
            polarity: Polarity::default(),
        }
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl LineCode for ManchesterEncoder {
    fn kind(&self) -> LineCodingKind {
        LineCodingKind::Manchester
    }

    fn config(&self) -> &SamplingConfig {
        &self.config
    }

    fn polarity(&self) -> Polarity {
        self.polarity
    }

    fn encode_levels(&self, bits: &[u8]) -> Vec<f64> {
        let spb = self.config.samples_per_bit;
        let (high, low) = (self.polarity.high(), self.polarity.low());
        let mut samples = vec![low; self.samples_for_bits(bits.len())];

        for (i, &bit) in bits.iter().enumerate() {
            let start = i * spb;
            let end = start + spb;
            let mid = manchester_midpoint(start, end);

            let (first, second) =
                if bit == 1 { (high, low) } else { (low, high) };
            samples[start..mid].fill(first);
            samples[mid..end].fill(second);
        }

        samples
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum LineCodingKind {
    /// Unencoded source signal
    #[value(alias = "raw")]
    Source,
    #[value(alias = "nrzl")]
    NrzL,
    #[value(alias = "nrzi")]
    NrzI,
    Manchester,
}

impl LineCodingKind {
    pub const ALL: [LineCodingKind; 4] = [
        LineCodingKind::Source,
        LineCodingKind::NrzL,
        LineCodingKind::NrzI,
        LineCodingKind::Manchester,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LineCodingKind::Source => "Source",
            LineCodingKind::NrzL => "NRZ-L",
            LineCodingKind::NrzI => "NRZ-I",
            LineCodingKind::Manchester => "Manchester",
        }
    }

    /// Short identifier used for file names
    pub fn slug(&self) -> &'static str {
        match self {
            LineCodingKind::Source => "source",
            LineCodingKind::NrzL => "nrz-l",
            LineCodingKind::NrzI => "nrz-i",
            LineCodingKind::Manchester => "manchester",
        }
    }

    pub fn create(
        &self,
        config: SamplingConfig,
        polarity: Polarity,
    ) -> Box<dyn LineCode> {
        match self {
            LineCodingKind::Source => {
                Box::new(SourceEncoder::new(config).with_polarity(polarity))
            }
            LineCodingKind::NrzL => {
                Box::new(NrzLEncoder::new(config).with_polarity(polarity))
            }
            LineCodingKind::NrzI => {
                Box::new(NrzIEncoder::new(config).with_polarity(polarity))
            }
            LineCodingKind::Manchester => Box::new(
                ManchesterEncoder::new(config).with_polarity(polarity),
            ),
        }
    }
}

impl fmt::Display for LineCodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, InvalidInput};

    fn config(samples_per_bit: usize) -> SamplingConfig {
        SamplingConfig::new(1.0, samples_per_bit).unwrap()
    }

    #[test]
    fn test_nrz_i_state_machine() {
        let state = NrzIState::new();
        assert_eq!(state.level(), 0);
        assert_eq!(state.step(0).level(), 0);
        assert_eq!(state.step(1).level(), 1);
        assert_eq!(state.step(1).step(1).level(), 0);
        assert_eq!(state.step(1).step(0).level(), 1);
    }

    #[test]
    fn test_nrz_i_levels_reference_sequence() {
        let levels = nrz_i_levels(&[1, 0, 1, 1, 0, 0, 1, 1]);
        assert_eq!(levels, vec![1, 1, 0, 1, 1, 1, 0, 1]);
    }

    #[test]
    fn test_nrz_i_all_zeros_stays_low() {
        assert_eq!(nrz_i_levels(&[0, 0, 0]), vec![0, 0, 0]);
    }

    #[test]
    fn test_nrz_l_encoding() {
        let encoder = NrzLEncoder::new(config(2));
        let signal = encoder.encode(&[1, 0, 1]).unwrap();
        assert_eq!(signal.samples, vec![1.0, 1.0, 0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_nrz_i_encoding() {
        let encoder = NrzIEncoder::new(config(2));
        let signal = encoder.encode(&[0, 1, 0, 1]).unwrap();
        assert_eq!(
            signal.samples,
            vec![0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_manchester_encoding() {
        let encoder = ManchesterEncoder::new(config(4));
        let signal = encoder.encode(&[1, 0]).unwrap();
        assert_eq!(
            signal.samples,
            vec![1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0]
        );
    }

    #[test]
    fn test_manchester_odd_block_floor_split() {
        let encoder = ManchesterEncoder::new(config(5));
        let signal = encoder.encode(&[1, 0]).unwrap();
        // midpoint = start + 5 / 2, so the first half gets 2 samples
        assert_eq!(
            signal.samples,
            vec![1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]
        );
        assert_eq!(manchester_midpoint(5, 10), 7);
    }

    #[test]
    fn test_manchester_single_sample_per_bit() {
        // mid == start: the first half is empty
        let encoder = ManchesterEncoder::new(config(1));
        let signal = encoder.encode(&[1, 0, 1]).unwrap();
        assert_eq!(signal.samples, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_bipolar_levels() {
        let encoder =
            ManchesterEncoder::new(config(2)).with_polarity(Polarity::Bipolar);
        let signal = encoder.encode(&[0, 1]).unwrap();
        assert_eq!(signal.samples, vec![-1.0, 1.0, 1.0, -1.0]);

        let source =
            SourceEncoder::new(config(1)).with_polarity(Polarity::Bipolar);
        assert_eq!(source.encode(&[1, 0]).unwrap().samples, vec![1.0, -1.0]);
    }

    #[test]
    fn test_encode_rejects_invalid_input() {
        let encoder = NrzIEncoder::new(config(4));
        assert!(matches!(
            encoder.encode(&[]),
            Err(Error::InvalidInput(InvalidInput::EmptySequence))
        ));
        assert!(matches!(
            encoder.encode(&[1, 3]),
            Err(Error::InvalidInput(InvalidInput::NonBinary {
                index: 1,
                value: 3
            }))
        ));

        let broken = ManchesterEncoder::new(SamplingConfig {
            bit_duration: 1.0,
            samples_per_bit: 0,
        });
        assert!(matches!(
            broken.encode(&[1]),
            Err(Error::InvalidInput(InvalidInput::InvalidSamplesPerBit(0)))
        ));
    }

    #[test]
    fn test_encode_rejects_sample_count_overflow() {
        let wide = SamplingConfig::new(1.0, usize::MAX / 2 + 1).unwrap();
        for kind in LineCodingKind::ALL {
            let encoder = kind.create(wide, Polarity::Unipolar);
            assert!(matches!(
                encoder.encode(&[1, 1]),
                Err(Error::InvalidInput(InvalidInput::TooManySamples { .. }))
            ));
        }

        let long = SamplingConfig::new(f64::MAX, 1).unwrap();
        assert!(matches!(
            NrzLEncoder::new(long).encode(&[1, 0, 1, 0]),
            Err(Error::InvalidInput(InvalidInput::TimeAxisOverflow { bits: 4 }))
        ));
    }

    #[test]
    fn test_manchester_midpoint_matches_floor_of_sum() {
        for (start, end) in [(0, 4), (5, 10), (3, 4), (100, 200), (7, 7)] {
            assert_eq!(manchester_midpoint(start, end), (start + end) / 2);
        }
        assert_eq!(
            manchester_midpoint(usize::MAX - 3, usize::MAX),
            usize::MAX - 2
        );
    }

    #[test]
    fn test_kind_factory() {
        for kind in LineCodingKind::ALL {
            let encoder = kind.create(config(3), Polarity::Bipolar);
            assert_eq!(encoder.kind(), kind);
            assert_eq!(encoder.polarity(), Polarity::Bipolar);
            assert_eq!(encoder.samples_for_bits(4), 12);
        }
    }

    #[test]
    fn test_kind_value_names() {
        let parse =
            |name: &str| <LineCodingKind as ValueEnum>::from_str(name, true);
        assert_eq!(parse("nrz-l"), Ok(LineCodingKind::NrzL));
        assert_eq!(parse("NRZI"), Ok(LineCodingKind::NrzI));
        assert_eq!(parse("raw"), Ok(LineCodingKind::Source));
        assert_eq!(parse("manchester"), Ok(LineCodingKind::Manchester));
        assert!(parse("ami").is_err());
    }
}
