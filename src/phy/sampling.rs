use crate::error::{InvalidInput, Result};
use crate::utils::consts::{DEFAULT_BIT_DURATION, SAMPLES_PER_BIT};
use serde::{Deserialize, Serialize};

/// How a bit sequence is discretized in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub bit_duration: f64,      // seconds per bit
    pub samples_per_bit: usize, // oversampling factor
}

impl SamplingConfig {
    pub fn new(bit_duration: f64, samples_per_bit: usize) -> Result<Self> {
        let config = Self {
            bit_duration,
            samples_per_bit,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reference sampling: 100 samples per bit.
    pub fn with_bit_duration(bit_duration: f64) -> Result<Self> {
        Self::new(bit_duration, SAMPLES_PER_BIT)
    }

    pub fn validate(&self) -> std::result::Result<(), InvalidInput> {
        if !self.bit_duration.is_finite() || self.bit_duration <= 0.0 {
            return Err(InvalidInput::InvalidBitDuration(self.bit_duration));
        }
        if self.samples_per_bit == 0 {
            return Err(InvalidInput::InvalidSamplesPerBit(
                self.samples_per_bit,
            ));
        }
        // a zero or subnormal step collapses neighbouring sample times
        let step = self.step();
        if !step.is_normal() {
            return Err(InvalidInput::InvalidStep(step));
        }
        Ok(())
    }

    /// Checked `num_bits * samples_per_bit`.
    ///
    /// Also rejects sequences whose last sample time is not finite.
    pub fn total_samples(
        &self,
        num_bits: usize,
    ) -> std::result::Result<usize, InvalidInput> {
        let total = num_bits
            .checked_mul(self.samples_per_bit)
            .ok_or(InvalidInput::TooManySamples {
                bits: num_bits,
                samples_per_bit: self.samples_per_bit,
            })?;
        let last = total.saturating_sub(1) as f64 * self.step();
        if !last.is_finite() {
            return Err(InvalidInput::TimeAxisOverflow { bits: num_bits });
        }
        Ok(total)
    }

    /// Time between two consecutive samples
    pub fn step(&self) -> f64 {
        self.bit_duration / self.samples_per_bit as f64
    }

    /// Only valid once `total_samples` accepted `num_bits`.
    pub fn samples_for_bits(&self, num_bits: usize) -> usize {
        num_bits * self.samples_per_bit
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            bit_duration: DEFAULT_BIT_DURATION,
            samples_per_bit: SAMPLES_PER_BIT,
        }
    }
}

/// `t_k = k * step` for every sample of `num_bits` bits.
///
/// Computed from the index rather than by accumulation, so the axis length is
/// always exactly `num_bits * samples_per_bit` regardless of rounding.
pub fn time_axis(num_bits: usize, config: &SamplingConfig) -> Vec<f64> {
    let step = config.step();
    (0..config.samples_for_bits(num_bits))
        .map(|k| k as f64 * step)
        .collect()
}

/// Every bit value repeated `samples_per_bit` times, in order.
pub fn replicate(bits: &[u8], config: &SamplingConfig) -> Vec<f64> {
    let mut samples = Vec::with_capacity(config.samples_for_bits(bits.len()));
    for &bit in bits {
        samples
            .extend(std::iter::repeat_n(bit as f64, config.samples_per_bit));
    }
    samples
}
