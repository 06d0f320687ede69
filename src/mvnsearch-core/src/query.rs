use serde::{Deserialize, Serialize};

/// Query used when no field contributes a clause
pub const MATCH_ALL: &str = "*:*";

/// Operator joining the clauses of a rendered query
const CONJUNCTION: &str = " AND ";

/// Query is a single search predicate over Maven coordinates.
///
/// Field values are inserted into the query language verbatim. Values
/// containing grammar metacharacters (spaces, quotes, parentheses) must be
/// escaped or quoted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,

    // Class and checksum search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// Raw clause appended after the field clauses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced: Option<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw query passed through as the only clause
    pub fn advanced(raw: impl Into<String>) -> Self {
        Self {
            advanced: Some(raw.into()),
            ..Self::default()
        }
    }

    /// Query matching a single `group:artifact[:version]` coordinate
    pub fn coordinate(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self::new().with_group_id(group_id).with_artifact_id(artifact_id)
    }

    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn with_artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_packaging(mut self, packaging: impl Into<String>) -> Self {
        self.packaging = Some(packaging.into());
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_full_class_name(mut self, full_class_name: impl Into<String>) -> Self {
        self.full_class_name = Some(full_class_name.into());
        self
    }

    pub fn with_sha1(mut self, sha1: impl Into<String>) -> Self {
        self.sha1 = Some(sha1.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn with_advanced(mut self, raw: impl Into<String>) -> Self {
        self.advanced = Some(raw.into());
        self
    }

    /// True when no field would contribute a clause
    pub fn is_empty(&self) -> bool {
        self.clauses().next().is_none()
    }

    /// Render the predicate in the service's query language.
    ///
    /// Empty fields are skipped; a query with no clauses renders as `*:*`.
    pub fn render(&self) -> String {
        let clauses: Vec<String> = self.clauses().collect();
        if clauses.is_empty() {
            MATCH_ALL.to_string()
        } else {
            clauses.join(CONJUNCTION)
        }
    }

    fn clauses(&self) -> impl Iterator<Item = String> + '_ {
        let fields = [
            ("g", &self.group_id),
            ("a", &self.artifact_id),
            ("v", &self.version),
            ("p", &self.packaging),
            ("l", &self.classifier),
            ("c", &self.class_name),
            ("fc", &self.full_class_name),
            ("1", &self.sha1),
            ("tags", &self.tags),
        ];

        fields
            .into_iter()
            .filter_map(|(key, value)| non_empty(value).map(|v| format!("{}:{}", key, v)))
            .chain(non_empty(&self.advanced).map(str::to_string))
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Build a `d:` clause matching artifacts that depend on the given coordinate.
///
/// | group | artifact | result            |
/// |-------|----------|-------------------|
/// | set   | set      | `d:<g>:<a>`       |
/// | set   | empty    | `d:<g>`           |
/// | empty | set      | `d:*:<a>`         |
/// | empty | empty    | `""` (no clause)  |
pub fn dependency_query(group_id: &str, artifact_id: &str) -> String {
    match (group_id.is_empty(), artifact_id.is_empty()) {
        (false, false) => format!("d:{}:{}", group_id, artifact_id),
        (false, true) => format!("d:{}", group_id),
        (true, false) => format!("d:*:{}", artifact_id),
        (true, true) => String::new(),
    }
}

/// Build an `l:` clause. An empty license yields the bare prefix `l:`.
pub fn license_query(license: &str) -> String {
    format!("l:{}", license)
}
