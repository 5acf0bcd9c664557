use super::error::{StateError, StateResult};
use super::model::{ActiveSubscription, StateFile};
use directories::ProjectDirs;
use std::{fs, path::PathBuf};

const STATE_FILE: &str = "active.toml";

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new() -> StateResult<Self> {
        ProjectDirs::from("com", "azsub", "azsub")
            .map(|dirs| Self::at(dirs.config_dir().join(STATE_FILE)))
            .ok_or(StateError::MissingConfigDir)
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> StateResult<Option<ActiveSubscription>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(None);
        }

        let state: StateFile = toml::from_str(&contents)?;
        Ok(state.active)
    }

    pub fn save(&self, active: ActiveSubscription) -> StateResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let state = StateFile {
            active: Some(active),
        };
        fs::write(&self.path, toml::to_string_pretty(&state)?)?;

        Ok(())
    }
}
