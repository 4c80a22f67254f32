use crate::error::Result;
use crate::phy::Signal;
use crate::utils::consts::WAV_GAIN;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Two whitespace-separated columns: `time sample`
pub fn write_trace_txt(signal: &Signal, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = BufWriter::new(File::create(path)?);
    for (t, sample) in signal.points() {
        writeln!(file, "{:.6} {:.4}", t, sample)?;
    }
    file.flush()?;
    Ok(())
}

/// 16-bit mono WAV of the waveform samples; time information is dropped.
pub fn write_to_wav(
    signal: &Signal,
    sample_rate: u32,
    filename: &Path,
) -> Result<()> {
    if let Some(parent) = filename.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(filename, spec)?;
    let amplitude = i16::MAX as f32 * WAV_GAIN;
    for &sample in &signal.samples {
        writer.write_sample((sample as f32 * amplitude) as i16)?;
    }
    writer.finalize()?;
    Ok(())
}
