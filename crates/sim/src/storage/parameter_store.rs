use crate::simulation::ParameterSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for parameter file operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Cannot open constants file {path} for writing: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the parameters returned by `ParameterStore::load` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterOrigin {
    /// Parsed from an existing file
    Stored,
    /// No file existed; defaults were used and, if `written`, saved
    CreatedDefaults { written: bool },
    /// A file existed but could not be read or parsed; defaults were used
    MalformedDefaults,
}

/// Result of loading the parameter file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadedParameters {
    pub params: ParameterSet,
    pub origin: ParameterOrigin,
}

/// Flat-file persistence for a `ParameterSet`.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    path: PathBuf,
}

impl ParameterStore {
    /// Create a store backed by the file at `path`. Nothing is touched until
    /// `load` or `save` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load parameters, falling back to defaults.
    ///
    /// A missing file is created with the defaults. A file that exists but
    /// does not hold five parseable values yields defaults and is left
    /// untouched. Neither case is an error.
    pub fn load(&self) -> LoadedParameters {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return self.create_with_defaults();
            }
            Err(e) => {
                log::warn!("Failed to read {}: {e}", self.path.display());
                return LoadedParameters {
                    params: ParameterSet::default(),
                    origin: ParameterOrigin::MalformedDefaults,
                };
            }
        };

        match parse_parameters(&contents) {
            Some(params) => {
                log::info!("Loaded parameters from {}", self.path.display());
                LoadedParameters {
                    params,
                    origin: ParameterOrigin::Stored,
                }
            }
            None => {
                log::warn!(
                    "Malformed parameter file {}, using defaults",
                    self.path.display()
                );
                LoadedParameters {
                    params: ParameterSet::default(),
                    origin: ParameterOrigin::MalformedDefaults,
                }
            }
        }
    }

    /// Write `params` to the backing file, replacing its contents.
    pub fn save(&self, params: &ParameterSet) -> Result<(), StoreError> {
        fs::write(&self.path, format_parameters(params)).map_err(|source| {
            StoreError::StorageUnavailable {
                path: self.path.clone(),
                source,
            }
        })?;
        log::info!("Saved parameters to {}", self.path.display());
        Ok(())
    }

    fn create_with_defaults(&self) -> LoadedParameters {
        let params = ParameterSet::default();
        let written = match self.save(&params) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{e}");
                false
            }
        };
        LoadedParameters {
            params,
            origin: ParameterOrigin::CreatedDefaults { written },
        }
    }
}

/// Parse the first five whitespace-separated decimals, in persisted order.
/// Anything after the fifth value is ignored.
fn parse_parameters(contents: &str) -> Option<ParameterSet> {
    let mut tokens = contents.split_whitespace();
    let mut values = [0.0; 5];
    for slot in values.iter_mut() {
        *slot = tokens.next()?.parse().ok()?;
    }
    Some(ParameterSet::from_values(values))
}

fn format_parameters(params: &ParameterSet) -> String {
    params
        .values()
        .iter()
        .map(|v| format!("{v:.4}\n"))
        .collect()
}
