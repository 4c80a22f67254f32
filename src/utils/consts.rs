use crate::phy::LineCodingKind;

/// 每比特采样数（参考实现固定为 100）
pub const SAMPLES_PER_BIT: usize = 100;

/// 默认比特时长（秒）
pub const DEFAULT_BIT_DURATION: f64 = 1.0;

/// 日志级别（可被 RUST_LOG 覆盖）
pub const LOG_LEVEL: &str = "info";

/// 示例比特序列
pub const EXAMPLE_SEQUENCE: [u8; 8] = [1, 0, 1, 1, 0, 0, 1, 1];

/// Seed used for `--random` when none is given
pub const DEFAULT_RANDOM_SEED: u64 = 42;

// ============================================================================
// Export Parameters
// ============================================================================

/// Sample rate written into exported WAV headers (Hz)
pub const WAV_SAMPLE_RATE: u32 = 48000;

/// Output amplitude scale for WAV export, leaves headroom below full scale
pub const WAV_GAIN: f32 = 0.8;

/// Width of one half-bit column in the terminal trace
pub const TRACE_HALF_BIT_WIDTH: usize = 3;

/// Schemes shown when none are requested on the command line
pub const DEFAULT_SCHEMES: [LineCodingKind; 3] = [
    LineCodingKind::NrzL,
    LineCodingKind::NrzI,
    LineCodingKind::Manchester,
];
