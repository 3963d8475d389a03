use std::{
    env, io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::OutputFormat;

static CONFIG_FILENAME: &str = "imagemap.toml";

/// Configuration for imagemap, contained in an imagemap.toml file.
///
/// Every field has a default, so the file is optional. Values given on the
/// command line take precedence over values from this file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// The image listing to read sizes from.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Where the packed layout should be written.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub format: OutputFormat,

    /// Pixels added to each image's width and height before packing, which
    /// leaves a seam between neighboring images.
    #[serde(default = "default_border")]
    pub border: u32,

    /// Whether to try packing every image rotated by 90 degrees.
    #[serde(default = "default_true")]
    pub transpose: bool,

    /// Whether to try merging rows of the shortest images together.
    #[serde(default = "default_true")]
    pub collapse: bool,

    /// The path that this config came from, if any. Paths from this config are
    /// relative to the folder containing this file.
    #[serde(skip)]
    pub file_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            format: OutputFormat::default(),
            border: default_border(),
            transpose: true,
            collapse: true,
            file_path: None,
        }
    }
}

impl Config {
    /// Loads the config named on the command line, or the one in the current
    /// directory if there is one.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match explicit_path {
            Some(path) => Self::read_from_folder_or_file(path)?,
            None => {
                let current_dir = env::current_dir()?;

                match Self::read_from_folder(&current_dir) {
                    Ok(config) => config,
                    Err(err) if err.is_not_found() => Self::default(),
                    Err(err) => return Err(err),
                }
            }
        };

        match &config.file_path {
            Some(path) => log::debug!("Using config from {}", path.display()),
            None => log::debug!("No {} found, using defaults", CONFIG_FILENAME),
        }

        Ok(config)
    }

    pub fn read_from_folder_or_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let meta = fs::metadata(path)?;

        if meta.is_file() {
            Self::read_from_file(path)
        } else {
            Self::read_from_folder(path)
        }
    }

    pub fn read_from_folder<P: AsRef<Path>>(folder_path: P) -> Result<Self, ConfigError> {
        let folder_path = folder_path.as_ref();
        let file_path = &folder_path.join(CONFIG_FILENAME);

        Self::read_from_file(file_path)
    }

    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read(path)?;

        let mut config: Self = toml::from_slice(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_owned(),
            source,
        })?;

        log::trace!("Read config from {}", path.display());

        let folder = path.parent().unwrap_or_else(|| Path::new(""));
        config.input = folder.join(&config.input);
        config.output = folder.join(&config.output);
        config.file_path = Some(path.to_owned());

        Ok(config)
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("input.txt")
}

fn default_output() -> PathBuf {
    PathBuf::from("images/imagemap.html")
}

fn default_border() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{source} in {}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ConfigError {
    /// Tells whether this ConfigError originated because of a path not
    /// existing.
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigError::Io { source } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
