//! Best-score persistence
//!
//! One small text file per variant holding the decimal score, nothing else.
//! A missing, unreadable, or malformed record reads as 0; writes go through
//! a sibling temp file and a rename so a reader never observes a partial
//! record. Persistence failures are never fatal to the simulation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Variant;

/// File-backed store of one best score per variant.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    dir: PathBuf,
}

impl HighScoreStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, variant: Variant) -> PathBuf {
        self.dir.join(format!("{}_highscore.txt", variant.slug()))
    }

    /// Read the stored best score, treating any failure as "no record".
    pub fn load(&self, variant: Variant) -> u32 {
        let path = self.path(variant);
        match fs::read_to_string(&path) {
            Ok(text) => match text.trim().parse::<u32>() {
                Ok(score) => score,
                Err(_) => {
                    log::warn!("malformed high score record {}, using 0", path.display());
                    0
                }
            },
            Err(_) => 0,
        }
    }

    /// Overwrite the record atomically: write a temp sibling, then rename.
    pub fn save(&self, variant: Variant, value: u32) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path(variant);
        let tmp = path.with_extension("txt.tmp");
        fs::write(&tmp, value.to_string())?;
        fs::rename(&tmp, &path)
    }
}
