use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document is a search hit that can be found in the highlighting map
pub trait Document {
    /// Identifier as returned by the service, usually `group:artifact:version`
    fn id(&self) -> &str;
}

/// Artifact is one hit from the default core: a group/artifact pair and
/// its most recent release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    #[serde(rename = "g")]
    pub group_id: String,
    #[serde(rename = "a")]
    pub artifact_id: String,
    #[serde(rename = "latestVersion", default)]
    pub latest_version: String,
    #[serde(rename = "repositoryId", default)]
    pub repository_id: String,
    #[serde(rename = "p", default)]
    pub packaging: String,
    /// Last update, milliseconds since the Unix epoch
    #[serde(default)]
    pub timestamp: i64,
    #[serde(rename = "versionCount", default)]
    pub version_count: i64,
    /// Free-text tokens indexed for the artifact
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    /// Available extension/classifier suffixes, e.g. `-sources.jar`
    #[serde(rename = "ec", default, skip_serializing_if = "Vec::is_empty")]
    pub extension_classifiers: Vec<String>,
}

/// Version is one hit from the `gav` core: a single released version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub id: String,
    #[serde(rename = "g")]
    pub group_id: String,
    #[serde(rename = "a")]
    pub artifact_id: String,
    #[serde(rename = "v")]
    pub version: String,
    #[serde(rename = "p", default)]
    pub packaging: String,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(rename = "ec", default, skip_serializing_if = "Vec::is_empty")]
    pub extension_classifiers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Artifact {
    /// `group:artifact:latestVersion`
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.latest_version)
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

impl Version {
    /// `group:artifact:version`
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

impl Document for Artifact {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Document for Version {
    fn id(&self) -> &str {
        &self.id
    }
}
