use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::classifier::TypeLabel;
use crate::errors::{Result, UploaderError};
use crate::storage::gcs::GcsConfig;
use crate::storage::s3::S3Config;

/// Logical upload target. Resolved once while loading configuration; files
/// are never re-dispatched by string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    S3,
    Gcs,
}

impl Destination {
    /// Recognized destination strings are "s3" and "gcs"; anything else is
    /// unroutable (the file gets skipped, not rejected).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "s3" => Some(Destination::S3),
            "gcs" => Some(Destination::Gcs),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::S3 => "s3",
            Destination::Gcs => "gcs",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable label-to-destination mapping. Lookups are pure; a label without
/// an entry means the file is skipped.
#[derive(Debug, Clone, Default)]
pub struct RoutingTable {
    routes: HashMap<String, Destination>,
}

impl RoutingTable {
    /// Build from raw config entries, dropping destinations that are not
    /// recognized. Dropped entries behave exactly like absent ones.
    pub fn new(raw: &HashMap<String, String>) -> Self {
        let mut routes = HashMap::with_capacity(raw.len());
        for (label, dest) in raw {
            match Destination::parse(dest) {
                Some(destination) => {
                    routes.insert(label.to_ascii_lowercase(), destination);
                }
                None => {
                    tracing::warn!(label = %label, destination = %dest, "unrecognized destination, route dropped");
                }
            }
        }
        Self { routes }
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Destination)>,
        S: Into<String>,
    {
        Self {
            routes: pairs
                .into_iter()
                .map(|(label, dest)| (label.into().to_ascii_lowercase(), dest))
                .collect(),
        }
    }

    pub fn route(&self, label: &TypeLabel) -> Option<Destination> {
        self.routes.get(label.as_str()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Destination)> {
        self.routes.iter().map(|(label, dest)| (label.as_str(), *dest))
    }
}

/// On-disk configuration: routing entries plus the backend sections the
/// routes refer to.
#[derive(Debug, Deserialize)]
pub struct UploaderConfig {
    #[serde(default)]
    pub routes: HashMap<String, String>,

    #[serde(default)]
    pub s3: Option<S3Config>,

    #[serde(default)]
    pub gcs: Option<GcsConfig>,
}

impl UploaderConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(&path).map_err(UploaderError::Io)?;

        let config: UploaderConfig =
            serde_json::from_str(&data).map_err(|e| UploaderError::Json {
                path: path.as_ref().to_path_buf(),
                source: e,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// A route pointing at a backend with no configuration section is a load
    /// error; it could never be satisfied at upload time.
    fn validate(&self) -> Result<()> {
        let table = self.routing_table();
        for (label, dest) in table.iter() {
            let configured = match dest {
                Destination::S3 => self.s3.is_some(),
                Destination::Gcs => self.gcs.is_some(),
            };
            if !configured {
                return Err(UploaderError::Config(format!(
                    "route '{label}' targets '{dest}' but no [{dest}] section is configured"
                )));
            }
        }
        Ok(())
    }

    pub fn routing_table(&self) -> RoutingTable {
        RoutingTable::new(&self.routes)
    }
}
