use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::config::DealerConfig;
use crate::hand::{Category, Hand};

/// One evaluated hand, serialized as a single JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvalRecord {
    /// Unique identifier for this evaluation (format: YYYYMMDD-NNNNNN)
    pub eval_id: String,
    /// Deck seed the source cards were dealt from, if known
    pub seed: Option<u64>,
    /// Source cards, hole cards first
    pub source: Vec<Card>,
    pub category: Category,
    /// Cards of the winning combination
    pub cards: Vec<Card>,
    pub rating: u32,
    /// Timestamp of the evaluation (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl EvalRecord {
    pub fn new(eval_id: String, seed: Option<u64>, source: &[Card], hand: &Hand) -> Self {
        Self {
            eval_id,
            seed,
            source: source.to_vec(),
            category: hand.category,
            cards: hand.cards.clone(),
            rating: hand.rating,
            ts: None,
        }
    }
}

pub fn format_eval_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct EvalLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl EvalLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Opens the configured log file, if one is configured.
    pub fn from_config(config: &DealerConfig) -> std::io::Result<Option<Self>> {
        config.log_path.as_ref().map(Self::create).transpose()
    }

    /// Logger that only hands out ids; writes are discarded.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_eval_id(&self.date, self.seq)
    }

    /// Builds a record for `hand` under a fresh id and writes it.
    pub fn log_hand(
        &mut self,
        seed: Option<u64>,
        source: &[Card],
        hand: &Hand,
    ) -> std::io::Result<String> {
        let id = self.next_id();
        self.write(&EvalRecord::new(id.clone(), seed, source, hand))?;
        Ok(id)
    }

    pub fn write(&mut self, record: &EvalRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        tracing::trace!(eval_id = %rec.eval_id, "evaluation record written");
        Ok(())
    }
}
