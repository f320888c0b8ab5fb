use super::stats::Stats;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// Where session statistics live between runs.
pub trait Store {
    /// Missing records load as [`Stats::default`].
    fn load(&self) -> anyhow::Result<Stats>;
    fn save(&mut self, stats: &Stats) -> anyhow::Result<()>;
}

/// Keeps the last saved record in memory. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct Memory(Option<Stats>);

impl Memory {
    pub fn saved(&self) -> Option<Stats> {
        self.0
    }
}

impl From<Stats> for Memory {
    fn from(stats: Stats) -> Self {
        Self(Some(stats))
    }
}

impl Store for Memory {
    fn load(&self) -> anyhow::Result<Stats> {
        Ok(self.0.unwrap_or_default())
    }
    fn save(&mut self, stats: &Stats) -> anyhow::Result<()> {
        self.0 = Some(*stats);
        Ok(())
    }
}

/// One JSON file per session key.
#[derive(Debug, Clone)]
pub struct Disk {
    path: PathBuf,
}

impl Disk {
    /// Session keys become file names, so only `[A-Za-z0-9_-]` is accepted.
    pub fn new(dir: impl AsRef<Path>, session: &str) -> anyhow::Result<Self> {
        anyhow::ensure!(
            !session.is_empty()
                && session
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            "invalid session key: {:?}",
            session
        );
        Ok(Self {
            path: dir.as_ref().join(format!("{}.json", session)),
        })
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for Disk {
    fn load(&self) -> anyhow::Result<Stats> {
        if !self.path.exists() {
            log::debug!("[store] no record at {}, starting fresh", self.path.display());
            return Ok(Stats::default());
        }
        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        let stats = serde_json::from_str(&json)
            .with_context(|| format!("parse {}", self.path.display()))?;
        log::debug!("[store] loaded {}", self.path.display());
        Ok(stats)
    }
    /// Writes a sibling temp file and renames it over the record.
    fn save(&mut self, stats: &Stats) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, serde_json::to_string_pretty(stats)?)
            .with_context(|| format!("write {}", temp.display()))?;
        std::fs::rename(&temp, &self.path)
            .with_context(|| format!("rename onto {}", self.path.display()))?;
        log::debug!("[store] saved {}", self.path.display());
        Ok(())
    }
}
