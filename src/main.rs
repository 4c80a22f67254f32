use clap::Parser;
use linecode_rs::Result;
use linecode_rs::phy::bits::{
    bytes_to_bits, parse_bit_string, parse_hex, random_bits,
};
use linecode_rs::phy::{LineCodingKind, Polarity, SamplingConfig, encode_all};
use linecode_rs::ui::{print_banner, render_levels, render_trace};
use linecode_rs::utils::consts::*;
use linecode_rs::utils::dump::EncodedTrace;
use linecode_rs::utils::io::{write_to_wav, write_trace_txt};
use linecode_rs::utils::logging::{init_logging, init_logging_with};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Encode a bit sequence as NRZ-L, NRZ-I and Manchester waveforms
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 比特串，例如 "10110011"（默认使用示例序列）
    #[arg(short, long, conflicts_with_all = ["hex", "random"])]
    bits: Option<String>,

    /// Hex bytes, expanded MSB first
    #[arg(long, conflicts_with = "random")]
    hex: Option<String>,

    /// Generate this many pseudo-random bits
    #[arg(long)]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = DEFAULT_RANDOM_SEED)]
    seed: u64,

    /// 比特时长（秒）
    #[arg(
        short = 'd',
        long,
        default_value_t = DEFAULT_BIT_DURATION,
        allow_negative_numbers = true
    )]
    bit_duration: f64,

    /// 每比特采样数
    #[arg(short = 'n', long, default_value_t = SAMPLES_PER_BIT)]
    samples_per_bit: usize,

    /// Line coding scheme, repeatable (default: nrz-l, nrz-i, manchester)
    #[arg(short, long, value_enum)]
    scheme: Vec<LineCodingKind>,

    /// Map levels to -1/+1 instead of 0/1
    #[arg(long)]
    bipolar: bool,

    /// Write all traces to a JSON file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write one `time sample` text file per scheme into this directory
    #[arg(long)]
    txt: Option<PathBuf>,

    /// Write one WAV file per scheme into this directory
    #[arg(long)]
    wav: Option<PathBuf>,

    /// WAV sample rate (Hz)
    #[arg(long, default_value_t = WAV_SAMPLE_RATE)]
    wav_rate: u32,

    /// Only log warnings and errors, skip the terminal rendering
    #[arg(short, long)]
    quiet: bool,
}

fn input_bits(cli: &Cli) -> Result<Vec<u8>> {
    if let Some(text) = &cli.bits {
        return Ok(parse_bit_string(text)?);
    }
    if let Some(hex) = &cli.hex {
        return Ok(bytes_to_bits(&parse_hex(hex)?));
    }
    if let Some(len) = cli.random {
        info!("Generating {} random bits (seed={})", len, cli.seed);
        return Ok(random_bits(len, cli.seed));
    }
    Ok(EXAMPLE_SEQUENCE.to_vec())
}

fn run(cli: &Cli) -> Result<()> {
    let bits = input_bits(cli)?;
    let config = SamplingConfig::new(cli.bit_duration, cli.samples_per_bit)?;
    let polarity = if cli.bipolar {
        Polarity::Bipolar
    } else {
        Polarity::Unipolar
    };
    let kinds = if cli.scheme.is_empty() {
        DEFAULT_SCHEMES.to_vec()
    } else {
        cli.scheme.clone()
    };

    info!(
        "Encoding {} bits: bit_duration={}s, samples_per_bit={}, polarity={:?}",
        bits.len(),
        config.bit_duration,
        config.samples_per_bit,
        polarity
    );

    let signals = encode_all(&bits, &kinds, &config, polarity)?;

    for signal in &signals {
        info!(
            "  - {}: {} samples, {} transitions",
            signal.kind.name(),
            signal.len(),
            signal.transitions().len()
        );
    }

    if !cli.quiet {
        println!();
        print!("{}", render_levels(&bits, &signals, config.samples_per_bit));
        println!();
        for signal in &signals {
            println!(
                "{:<10} {}",
                signal.kind.name(),
                render_trace(signal, config.samples_per_bit)
            );
        }
        println!();
    }

    if let Some(path) = &cli.json {
        EncodedTrace::new(&bits, config, polarity, &signals).write_json(path)?;
        info!("Wrote JSON trace to {}", path.display());
    }

    if let Some(dir) = &cli.txt {
        for signal in &signals {
            let path = dir.join(format!("{}.txt", signal.kind.slug()));
            write_trace_txt(signal, &path)?;
            info!("Wrote {}", path.display());
        }
    }

    if let Some(dir) = &cli.wav {
        for signal in &signals {
            let path = dir.join(format!("{}.wav", signal.kind.slug()));
            write_to_wav(signal, cli.wav_rate, &path)?;
            info!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.quiet {
        init_logging_with("warn");
    } else {
        init_logging();
        print_banner();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
