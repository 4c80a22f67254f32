// Physical layer: discretized line-coded waveforms from bit sequences

pub mod bits;
pub mod line_coding;
pub mod sampling;
pub mod signal;

pub use line_coding::{
    LineCode, LineCodingKind, ManchesterEncoder, NrzIEncoder, NrzIState,
    NrzLEncoder, Polarity, SourceEncoder,
};
pub use sampling::SamplingConfig;
pub use signal::{Signal, encode_all, generate_signal, manchester, nrz_i, nrz_l};
