// src/config/options.rs
use std::path::PathBuf;

use super::consts::DEFAULT_CATALOG;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    Rotate,
    Scrape,
    Verify,
    Probe,
}

#[derive(Clone, Debug)]
pub struct Params {
    pub task: TaskKind,
    pub catalog: PathBuf,            // data file read whole, rewritten whole
    pub pools_file: Option<PathBuf>, // overrides the built-in image pools
    pub audit: Option<PathBuf>,      // overrides the default mapping filename
    pub pause_ms: Option<u64>,       // overrides the per-task politeness pause
    pub dry_run: bool,               // resolve + report, skip the final write
}

impl Params {
    pub fn new(task: TaskKind) -> Self {
        Self {
            task,
            catalog: PathBuf::from(DEFAULT_CATALOG),
            pools_file: None,
            audit: None,
            pause_ms: None,
            dry_run: false,
        }
    }
}
