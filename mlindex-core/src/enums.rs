//! Enum types for catalog documents

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CORE ENUMS
// ============================================================================

/// Type discriminator for indexed catalog documents.
///
/// Each variant corresponds to one backend index; `as_str` yields the
/// path segment used when addressing that index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// A dataset
    Data,
    /// A machine-learning task defined on a dataset
    Task,
    /// A reusable pipeline or algorithm implementation
    Flow,
    /// A single experiment run
    Run,
    /// A curated collection of datasets/tasks/runs
    Study,
    /// An evaluation measure
    Measure,
    /// A task type (e.g. classification, regression)
    TaskType,
    /// A user profile
    User,
}

impl DocumentType {
    /// Path segment for this document type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Data => "data",
            DocumentType::Task => "task",
            DocumentType::Flow => "flow",
            DocumentType::Run => "run",
            DocumentType::Study => "study",
            DocumentType::Measure => "measure",
            DocumentType::TaskType => "task_type",
            DocumentType::User => "user",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data" => Ok(DocumentType::Data),
            "task" => Ok(DocumentType::Task),
            "flow" => Ok(DocumentType::Flow),
            "run" => Ok(DocumentType::Run),
            "study" => Ok(DocumentType::Study),
            "measure" => Ok(DocumentType::Measure),
            "task_type" => Ok(DocumentType::TaskType),
            "user" => Ok(DocumentType::User),
            other => Err(format!("Unknown document type: {}", other)),
        }
    }
}

/// Sort direction for an explicit sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_path_segments() {
        assert_eq!(DocumentType::Data.as_str(), "data");
        assert_eq!(DocumentType::TaskType.as_str(), "task_type");
        assert_eq!(DocumentType::Run.to_string(), "run");
    }

    #[test]
    fn test_document_type_round_trip() {
        for ty in [
            DocumentType::Data,
            DocumentType::Task,
            DocumentType::Flow,
            DocumentType::Run,
            DocumentType::Study,
            DocumentType::Measure,
            DocumentType::TaskType,
            DocumentType::User,
        ] {
            assert_eq!(ty.as_str().parse::<DocumentType>(), Ok(ty));
        }
    }

    #[test]
    fn test_document_type_rejects_unknown() {
        let err = "dataset".parse::<DocumentType>().unwrap_err();
        assert!(err.contains("dataset"));
    }

    #[test]
    fn test_sort_order_serde_lowercase() {
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"desc\"");
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"asc\"");
    }
}
