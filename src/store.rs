use anyhow::{Context, Result};
use directories_next::BaseDirs;
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(test)]
mod tests;

const APP_DIRECTORY: &str = "adaptive-quiz";
const WEIGHTS_FILE: &str = "quiz_scores.json";

/// Keeps one weight per question index across sessions.
pub trait WeightStore {
    /// `None` when nothing was saved yet. Entries that could not be read back
    /// as numbers come out as NaN.
    fn load(&self) -> Result<Option<Vec<f64>>>;

    fn save(&self, weights: &[f64]) -> Result<()>;
}

fn get_data_dir() -> Result<PathBuf> {
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    dir.push(APP_DIRECTORY);
    Ok(dir)
}

/// Weights stored as a JSON array of numbers.
#[derive(Clone, Debug)]
pub struct FileWeightStore {
    path: PathBuf,
}

impl FileWeightStore {
    pub fn new(path: PathBuf) -> Self {
        FileWeightStore { path }
    }

    pub fn in_data_dir() -> Result<Self> {
        let mut path = get_data_dir()?;
        path.push(WEIGHTS_FILE);
        Ok(FileWeightStore::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WeightStore for FileWeightStore {
    fn load(&self) -> Result<Option<Vec<f64>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read weights from {:?}", self.path))?;
        let weights: Vec<Option<f64>> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse weights in {:?}", self.path))?;
        Ok(Some(
            weights
                .into_iter()
                .map(|weight| weight.unwrap_or(f64::NAN))
                .collect(),
        ))
    }

    fn save(&self, weights: &[f64]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let contents = serde_json::to_string(weights).context("Failed to serialize weights")?;

        let mut staging_path = self.path.clone().into_os_string();
        staging_path.push(".tmp");
        let staging_path = PathBuf::from(staging_path);
        fs::write(&staging_path, contents)
            .with_context(|| format!("Failed to write weights to {:?}", staging_path))?;
        fs::rename(&staging_path, &self.path)
            .with_context(|| format!("Failed to replace weights file {:?}", self.path))?;
        Ok(())
    }
}

/// Weights that only live as long as the process. Clones share storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryWeightStore {
    weights: Arc<RwLock<Option<Vec<f64>>>>,
}

impl MemoryWeightStore {
    pub fn new() -> Self {
        Default::default()
    }

    #[cfg(test)]
    pub fn with_weights(weights: Vec<f64>) -> Self {
        MemoryWeightStore {
            weights: Arc::new(RwLock::new(Some(weights))),
        }
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Option<Vec<f64>> {
        self.weights.read().clone()
    }
}

impl WeightStore for MemoryWeightStore {
    fn load(&self) -> Result<Option<Vec<f64>>> {
        Ok(self.weights.read().clone())
    }

    fn save(&self, weights: &[f64]) -> Result<()> {
        *self.weights.write() = Some(weights.to_vec());
        Ok(())
    }
}
