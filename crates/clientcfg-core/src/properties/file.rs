//! File-based property source (YAML or JSON)
//!
//! Supports user-level (~/.config/clientcfg/http-client.yaml) and
//! workspace-level (.config/clientcfg/http-client.yaml) files.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use super::duration::DurationValue;
use super::memory::ClientProperties;
use super::traits::{PropertiesError, PropertiesResult};
use crate::types::SslProperties;

const FILE_NAME: &str = "http-client.yaml";

/// Properties file level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertiesLevel {
    /// User-level file (~/.config/clientcfg/http-client.yaml)
    User,
    /// Workspace-level file (.config/clientcfg/http-client.yaml in workspace root)
    Workspace,
}

impl PropertiesLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertiesLevel::User => "user",
            PropertiesLevel::Workspace => "workspace",
        }
    }
}

/// Property source loaded from a file
///
/// The file is read once; the source is an immutable snapshot of it.
/// A missing file yields a source that defines nothing.
///
/// # Example
///
/// ```no_run
/// use clientcfg_core::properties::FileProperties;
///
/// let user = FileProperties::user().unwrap();
/// let workspace = FileProperties::workspace("/path/to/workspace").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileProperties {
    path: PathBuf,
    level: PropertiesLevel,
    name: String,
    exists: bool,
    properties: ClientProperties,
}

impl FileProperties {
    /// Load properties from `path`
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    pub fn load(path: impl Into<PathBuf>, level: PropertiesLevel) -> PropertiesResult<Self> {
        let path = path.into();
        let name = format!("file:{}:{}", level.as_str(), path.display());

        if !path.exists() {
            tracing::debug!(path = %path.display(), "properties file not found, using empty layer");
            return Ok(Self {
                path,
                level,
                name,
                exists: false,
                properties: ClientProperties::default(),
            });
        }

        let content = fs::read_to_string(&path)?;
        let properties = parse(&path, &content)?;
        tracing::debug!(path = %path.display(), level = level.as_str(), "loaded properties file");

        Ok(Self {
            path,
            level,
            name,
            exists: true,
            properties,
        })
    }

    /// Load the user-level file (~/.config/clientcfg/http-client.yaml)
    pub fn user() -> PropertiesResult<Self> {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::load(config_dir.join("clientcfg").join(FILE_NAME), PropertiesLevel::User)
    }

    /// Load the workspace-level file (.config/clientcfg/http-client.yaml)
    pub fn workspace(workspace_root: impl AsRef<Path>) -> PropertiesResult<Self> {
        let path = workspace_root.as_ref().join(".config").join("clientcfg").join(FILE_NAME);
        Self::load(path, PropertiesLevel::Workspace)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> PropertiesLevel {
        self.level
    }

    /// Whether the file existed when loaded
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// The parsed snapshot
    pub fn properties(&self) -> &ClientProperties {
        &self.properties
    }

    /// Export the snapshot as pretty JSON
    pub fn export_json(&self) -> PropertiesResult<String> {
        Ok(serde_json::to_string_pretty(&self.properties)?)
    }
}

/// File document as written, before values are checked
///
/// Scalars are kept as text so a bad value can be reported with its key.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawProperties {
    #[serde(default)]
    redirects: Option<String>,
    #[serde(default)]
    connect_timeout: Option<DurationValue>,
    #[serde(default)]
    read_timeout: Option<DurationValue>,
    #[serde(default)]
    ssl: Option<SslProperties>,
    #[serde(default)]
    transport: Option<String>,
}

impl RawProperties {
    fn into_properties(self) -> PropertiesResult<ClientProperties> {
        Ok(ClientProperties {
            name: None,
            redirects: self.redirects.map(|raw| variant("redirects", raw)).transpose()?,
            connect_timeout: self
                .connect_timeout
                .map(|raw| duration("connect-timeout", raw))
                .transpose()?,
            read_timeout: self.read_timeout.map(|raw| duration("read-timeout", raw)).transpose()?,
            ssl: self.ssl,
            transport: self.transport.map(|raw| variant("transport", raw)).transpose()?,
        })
    }
}

fn variant<T>(key: &str, raw: String) -> PropertiesResult<T>
where
    T: FromStr,
    T::Err: ToString,
{
    raw.parse().map_err(|e| PropertiesError::invalid_value(key, raw, e))
}

fn duration(key: &str, raw: DurationValue) -> PropertiesResult<Duration> {
    raw.parse()
        .map_err(|reason| PropertiesError::invalid_value(key, raw.raw(), reason))
}

fn parse(path: &Path, content: &str) -> PropertiesResult<ClientProperties> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let raw: RawProperties = if is_json {
        serde_json::from_str(content)?
    } else if content.trim().is_empty() {
        RawProperties::default()
    } else {
        serde_yaml::from_str(content)?
    };
    raw.into_properties()
}

snapshot_properties!(FileProperties);
