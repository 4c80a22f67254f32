use crate::error::Result;
use crate::phy::{LineCodingKind, Polarity, SamplingConfig, Signal};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One encoded waveform as handed to a plotting tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub scheme: LineCodingKind,
    pub time: Vec<f64>,
    pub samples: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedTrace {
    pub sampling: SamplingConfig,
    pub polarity: Polarity,
    pub bits: Vec<u8>,
    pub signals: Vec<TraceEntry>,
}

impl EncodedTrace {
    pub fn new(
        bits: &[u8],
        sampling: SamplingConfig,
        polarity: Polarity,
        signals: &[Signal],
    ) -> Self {
        Self {
            sampling,
            polarity,
            bits: bits.to_vec(),
            signals: signals
                .iter()
                .map(|signal| TraceEntry {
                    scheme: signal.kind,
                    time: signal.time.clone(),
                    samples: signal.samples.clone(),
                })
                .collect(),
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_json(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}
