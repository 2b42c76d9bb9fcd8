use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::entry::IndexEntry;

/// Index format version, bumped on incompatible layout changes
pub const INDEX_FORMAT_VERSION: u32 = 1;

/// Aggregate artifact written once per run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDocument {
    pub version: u32,
    #[serde(serialize_with = "serialize_generated_at")]
    pub generated_at: DateTime<Utc>,
    pub projects: Vec<IndexEntry>,
}

impl IndexDocument {
    /// Assemble a document stamped with the current time
    pub fn new(projects: Vec<IndexEntry>) -> Self {
        Self::with_timestamp(projects, Utc::now())
    }

    pub fn with_timestamp(projects: Vec<IndexEntry>, generated_at: DateTime<Utc>) -> Self {
        Self { version: INDEX_FORMAT_VERSION, generated_at, projects }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2026-10-19T08:15:30.123Z`
fn serialize_generated_at<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_at_millisecond_format() {
        let ts = DateTime::parse_from_rfc3339("2026-10-19T08:15:30.123456Z")
            .unwrap()
            .with_timezone(&Utc);
        let doc = IndexDocument::with_timestamp(Vec::new(), ts);

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["generated_at"], "2026-10-19T08:15:30.123Z");
        assert_eq!(json["version"], 1);
        assert_eq!(json["projects"], serde_json::json!([]));
    }

    #[test]
    fn test_generated_at_reads_back() {
        let ts = DateTime::parse_from_rfc3339("2026-01-02T03:04:05.006Z")
            .unwrap()
            .with_timezone(&Utc);
        let doc = IndexDocument::with_timestamp(Vec::new(), ts);

        let text = serde_json::to_string(&doc).unwrap();
        let parsed: IndexDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.generated_at, ts);
        assert!(parsed.is_empty());
    }
}
