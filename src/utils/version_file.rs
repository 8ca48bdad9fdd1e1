use {
    crate::error::StepError,
    log::debug,
    std::{
        fs, io,
        path::{Path, PathBuf},
    },
};

pub const DEFAULT_VERSION_FILE: &str = "VERSION";

/// Where the last recorded version lives.
///
/// `load` yields `Ok(None)` when nothing has been recorded yet; callers fall
/// back to a default in that case.
pub trait VersionStore {
    fn load(&self) -> Result<Option<String>, StepError>;
    fn save(&mut self, version: &str) -> Result<(), StepError>;
}

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION_FILE)
    }
}

impl VersionStore for FileStore {
    fn load(&self) -> Result<Option<String>, StepError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                debug!("read {} bytes from {}", content.len(), self.path.display());
                Ok(Some(content))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist", self.path.display());
                Ok(None)
            }
            Err(source) => Err(StepError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&mut self, version: &str) -> Result<(), StepError> {
        debug!("writing {}", self.path.display());
        fs::write(&self.path, version).map_err(|source| StepError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory store, handy for exercising the stepper without a filesystem.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    content: Option<String>,
    saves: usize,
}

impl MemoryStore {
    pub fn new(content: Option<&str>) -> Self {
        Self {
            content: content.map(str::to_string),
            saves: 0,
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl VersionStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StepError> {
        Ok(self.content.clone())
    }

    fn save(&mut self, version: &str) -> Result<(), StepError> {
        self.content = Some(version.to_string());
        self.saves = self.saves.saturating_add(1);
        Ok(())
    }
}
