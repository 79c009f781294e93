//! Status enums for timeline events and documents.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and parse from the same literals via `FromStr`. Unknown literals are rejected.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// TimelineStatus
// ---------------------------------------------------------------------------

/// Status of one step in a case timeline.
///
/// ```text
/// pending → current → completed
/// ```
///
/// The progression is a workflow convention. Nothing in the storage layer
/// rejects a step that moves backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimelineStatus {
    #[default]
    Pending,
    Current,
    Completed,
}

impl TimelineStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Current, Self::Completed];

    /// Position of this status in the workflow (`pending` = 0).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Current => 1,
            Self::Completed => 2,
        }
    }

    /// Whether moving to `next` follows the forward-only convention.
    #[must_use]
    pub const fn can_advance_to(self, next: Self) -> bool {
        next.rank() > self.rank()
    }

    /// Whether this step has happened or is happening (carries an `event_date`).
    #[must_use]
    pub const fn is_reached(self) -> bool {
        matches!(self, Self::Current | Self::Completed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Current => "current",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TimelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimelineStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::InvalidStatus {
                kind: "timeline",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// DocumentStatus
// ---------------------------------------------------------------------------

/// Availability of a document attached to a case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Available,
    Pending,
    Processing,
}

impl DocumentStatus {
    pub const ALL: [Self; 3] = [Self::Available, Self::Pending, Self::Processing];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Processing => "processing",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::InvalidStatus {
                kind: "document",
                value: s.to_string(),
            })
    }
}
