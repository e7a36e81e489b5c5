use anyhow::{anyhow, Context, Error, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::quiz::weight::{Adjustment, DEFAULT_WEIGHT};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Preset {
    Gentle,
    Steep,
}

impl Preset {
    pub fn adjustment(self) -> Adjustment {
        match self {
            Preset::Gentle => Adjustment::gentle(),
            Preset::Steep => Adjustment::steep(),
        }
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_ref() {
            "gentle" => Ok(Preset::Gentle),
            "steep" => Ok(Preset::Steep),
            other => Err(anyhow!(
                "Unknown preset {:?}, expected gentle or steep",
                other
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub adjustment: Adjustment,
    pub default_weight: f64,
    pub seed: Option<u64>,
    pub weights_path: Option<PathBuf>,
    pub citations_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            adjustment: Adjustment::default(),
            default_weight: DEFAULT_WEIGHT,
            seed: None,
            weights_path: None,
            citations_path: None,
        }
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse::<T>()
        .with_context(|| format!("Invalid value for {}: {:?}", key, value))
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    /// Starts from the defaults and applies every `QUIZ_*` variable that
    /// `lookup` knows about.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(preset) = lookup("QUIZ_PRESET") {
            settings.adjustment = preset.parse::<Preset>()?.adjustment();
        }
        if let Some(step) = lookup("QUIZ_STEP") {
            settings.adjustment.step = parse_value("QUIZ_STEP", &step)?;
        }
        if let Some(min) = lookup("QUIZ_MIN_WEIGHT") {
            settings.adjustment.min = parse_value("QUIZ_MIN_WEIGHT", &min)?;
        }
        if let Some(max) = lookup("QUIZ_MAX_WEIGHT") {
            settings.adjustment.max = parse_value("QUIZ_MAX_WEIGHT", &max)?;
        }
        if let Some(weight) = lookup("QUIZ_DEFAULT_WEIGHT") {
            settings.default_weight = parse_value("QUIZ_DEFAULT_WEIGHT", &weight)?;
        }
        if let Some(seed) = lookup("QUIZ_SEED") {
            settings.seed = Some(parse_value("QUIZ_SEED", &seed)?);
        }
        if let Some(path) = lookup("QUIZ_WEIGHTS") {
            settings.weights_path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("QUIZ_CITATIONS") {
            settings.citations_path = Some(PathBuf::from(path));
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.adjustment.validate()?;
        if !self.adjustment.contains(self.default_weight) {
            return Err(anyhow!(
                "Default weight {} is outside of [{}, {}]",
                self.default_weight,
                self.adjustment.min,
                self.adjustment.max
            ));
        }
        Ok(())
    }
}
