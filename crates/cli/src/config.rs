//! Shell configuration via `zdsearch.toml`
//!
//! Every setting has a default, so the file is optional. Data paths given
//! on the command line replace the configured ones for that object type.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use zdsearch_executor::ObjectType;
use zdsearch_index::{Tokenizer, TokenizerConfig};

/// Config file looked for in the working directory.
pub const CONFIG_FILE_NAME: &str = "zdsearch.toml";

/// Directory the default data paths live in.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Fields whose values are identifiers rather than prose.
pub const DEFAULT_LITERAL_FIELDS: &[&str] = &["_id", "url", "external_id", "email", "domain_names"];

/// Where each object type's JSON files are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Organization files
    pub organizations: Vec<PathBuf>,
    /// Ticket files
    pub tickets: Vec<PathBuf>,
    /// User files
    pub users: Vec<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        let dir = Path::new(DEFAULT_DATA_DIR);
        Self {
            organizations: vec![dir.join("organizations.json")],
            tickets: vec![dir.join("tickets.json")],
            users: vec![dir.join("users.json")],
        }
    }
}

impl DataConfig {
    /// Files for one object type
    pub fn paths(&self, object_type: ObjectType) -> &[PathBuf] {
        match object_type {
            ObjectType::Organization => &self.organizations,
            ObjectType::Ticket => &self.tickets,
            ObjectType::User => &self.users,
        }
    }

    /// Replace the files for one object type
    pub fn set_paths(&mut self, object_type: ObjectType, paths: Vec<PathBuf>) {
        match object_type {
            ObjectType::Organization => self.organizations = paths,
            ObjectType::Ticket => self.tickets = paths,
            ObjectType::User => self.users = paths,
        }
    }
}

/// Shell configuration loaded from `zdsearch.toml`.
///
/// # Example
///
/// ```toml
/// [data]
/// organizations = ["data/organizations.json"]
///
/// [tokenizer]
/// literal_fields = ["_id", "url"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Data file locations
    pub data: DataConfig,
    /// Tokenizer settings used to build and query the index
    pub tokenizer: TokenizerConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            tokenizer: TokenizerConfig {
                literal_fields: DEFAULT_LITERAL_FIELDS.iter().map(|f| f.to_string()).collect(),
                ..TokenizerConfig::default()
            },
        }
    }
}

impl CliConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# zdsearch configuration
#
# JSON files to load, one list per object type. Each file holds a JSON array
# of objects. Paths are relative to the working directory.
[data]
organizations = ["data/organizations.json"]
tickets = ["data/tickets.json"]
users = ["data/users.json"]

[tokenizer]
# Regex matching the separators between words. Text fields are split on it
# and lowercased; the default keeps letters, digits and apostrophes.
separator_pattern = "[^\\p{L}\\p{N}']+"

# Fields indexed verbatim: no splitting, no lowercasing. Searches on these
# fields must match the whole value exactly.
literal_fields = ["_id", "url", "external_id", "email", "domain_names"]
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// tokenizer settings are invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        config
            .tokenizer()
            .with_context(|| format!("invalid tokenizer settings in '{}'", path.display()))?;
        Ok(config)
    }

    /// Load the explicit config file, else `zdsearch.toml` in `dir` if it
    /// exists, else the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(target: "zdsearch::cli", path = %candidate.display(), "using config file");
            Self::from_file(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Build the tokenizer these settings describe.
    pub fn tokenizer(&self) -> Result<Tokenizer> {
        Ok(Tokenizer::new(&self.tokenizer)?)
    }
}
