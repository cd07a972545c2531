use crate::dice::{Dice, RerollMask};
use crate::error::YzResult;
use crate::scorer::{Category, ScoreLine};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRecord {
    pub turn: usize,
    /// Hand after each throw, first roll included.
    pub rolls: Vec<Dice>,
    /// Masks chosen between throws. A trailing empty mask means the turn
    /// stopped early.
    pub rerolls: Vec<RerollMask>,
    pub choice: Category,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub seed: Option<u64>,
    pub turns: Vec<TurnRecord>,
    pub upper_total: u32,
    pub bonus: u32,
    pub total: u32,
    pub scorecard: Vec<ScoreLine>,
}

/// Appends one JSON document per game to `<dir>/<timestamp>_gr.jsonl`.
pub struct RecordWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

impl RecordWriter {
    pub fn create<P: AsRef<Path>>(dir: P) -> YzResult<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let path = dir.join(format!("{}_gr.jsonl", stamp));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            out: BufWriter::new(file),
        })
    }

    pub fn write(&mut self, record: &GameRecord) -> YzResult<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    pub fn finish(mut self) -> YzResult<PathBuf> {
        self.out.flush()?;
        Ok(self.path)
    }
}

#[derive(Debug, Serialize)]
struct TotalRow {
    game: usize,
    seed: Option<u64>,
    upper: u32,
    bonus: u32,
    total: u32,
}

/// Writes one CSV row of totals per game.
pub fn write_totals_csv<P: AsRef<Path>>(path: P, records: &[GameRecord]) -> YzResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for (i, r) in records.iter().enumerate() {
        wtr.serialize(TotalRow {
            game: i + 1,
            seed: r.seed,
            upper: r.upper_total,
            bonus: r.bonus,
            total: r.total,
        })?;
    }
    wtr.flush()?;
    Ok(())
}
