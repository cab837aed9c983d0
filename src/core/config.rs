//! Run configuration
//!
//! Layers, lowest precedence first: built-in defaults, an optional JSON config
//! file, then command-line flags.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::file_reader::DecodePolicy;
use crate::core::model::AssetError;
use crate::core::paths::normalize_extension;

/// Default folder to scan
pub const DEFAULT_ROOT: &str = "./";

/// Default output file
pub const DEFAULT_OUTPUT: &str = "combined_assets.txt";

/// Default extension set
pub const DEFAULT_EXTENSIONS: &[&str] = &[".tsx", ".css", ".ts"];

/// Case-insensitive set of file-name suffixes, stored lowercased
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    suffixes: Vec<String>,
}

impl ExtensionSet {
    /// Build a set from raw suffixes, normalizing each one
    pub fn new<I, S>(raw: I) -> Result<Self, AssetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes = Vec::new();
        for ext in raw {
            let ext = ext.as_ref();
            let normalized = normalize_extension(ext)
                .ok_or_else(|| AssetError::InvalidExtension(ext.to_string()))?;
            if !suffixes.contains(&normalized) {
                suffixes.push(normalized);
            }
        }

        if suffixes.is_empty() {
            return Err(AssetError::EmptyExtensionSet);
        }

        Ok(Self { suffixes })
    }

    /// Whether a lowercased file name ends with one of the suffixes
    pub fn matches(&self, lower_name: &str) -> bool {
        self.suffixes.iter().any(|s| lower_name.ends_with(s.as_str()))
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[String] {
        &self.suffixes
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffixes.join(", "))
    }
}

/// Fully resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineConfig {
    /// Directory the scan starts from
    pub root: PathBuf,

    /// Destination file, truncated on every run
    pub output: PathBuf,

    /// Descend into subdirectories
    pub recursive: bool,

    /// Inclusion filter
    pub extensions: ExtensionSet,

    /// How invalid UTF-8 in sources is handled
    pub decode: DecodePolicy,
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            recursive: true,
            extensions: ExtensionSet::default(),
            decode: DecodePolicy::default(),
        }
    }
}

/// On-disk config file; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decode: Option<DecodePolicy>,
}

impl ConfigFile {
    /// Read and parse a JSON config file
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let content = fs::read_to_string(path).map_err(|e| AssetError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| AssetError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Overrides taken from the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub no_recursive: bool,
    pub extensions: Vec<String>,
    pub decode: Option<DecodePolicy>,
}

impl CombineConfig {
    /// Apply a config file on top of this configuration
    pub fn merge_file(mut self, file: ConfigFile) -> Result<Self, AssetError> {
        if let Some(root) = file.root {
            self.root = root;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        if let Some(recursive) = file.recursive {
            self.recursive = recursive;
        }
        if let Some(extensions) = file.extensions {
            self.extensions = ExtensionSet::new(extensions)?;
        }
        if let Some(decode) = file.decode {
            self.decode = decode;
        }
        Ok(self)
    }

    /// Apply command-line overrides on top of this configuration
    pub fn merge_overrides(mut self, overrides: Overrides) -> Result<Self, AssetError> {
        if let Some(root) = overrides.root {
            self.root = root;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if overrides.no_recursive {
            self.recursive = false;
        }
        if !overrides.extensions.is_empty() {
            self.extensions = ExtensionSet::new(&overrides.extensions)?;
        }
        if let Some(decode) = overrides.decode {
            self.decode = decode;
        }
        Ok(self)
    }

    /// Resolve defaults, an optional config file and overrides
    pub fn resolve(config_file: Option<&Path>, overrides: Overrides) -> Result<Self, AssetError> {
        let mut config = Self::default();
        if let Some(path) = config_file {
            config = config.merge_file(ConfigFile::load(path)?)?;
        }
        config.merge_overrides(overrides)
    }
}
