//! Agent records and the draft values a form submits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color applied to a new agent until the user picks one.
pub const DEFAULT_COLOR: &str = "#000000";

/// Kind of chatbot an agent configures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AgentType {
    /// Answers general college questions.
    #[default]
    CollegeQueryBot,
    /// College bot grounded on uploaded documents.
    AdvancedCollegeBot,
    /// Guides applicants through admissions.
    AdmissionBot,
    /// Summarises supplied text.
    SummarisationBot,
}

impl AgentType {
    /// Every agent type, in selection order. The first entry is the default.
    pub const ALL: [AgentType; 4] = [
        AgentType::CollegeQueryBot,
        AgentType::AdvancedCollegeBot,
        AgentType::AdmissionBot,
        AgentType::SummarisationBot,
    ];

    /// Stable machine-readable value, as persisted.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentType::CollegeQueryBot => "college-query-bot",
            AgentType::AdvancedCollegeBot => "advanced-college-bot",
            AgentType::AdmissionBot => "admission-bot",
            AgentType::SummarisationBot => "summarisation-bot",
        }
    }

    /// Human-readable label for selection UIs.
    pub fn label(self) -> &'static str {
        match self {
            AgentType::CollegeQueryBot => "College Query Bot",
            AgentType::AdvancedCollegeBot => "Advanced College Bot",
            AgentType::AdmissionBot => "Admission Bot",
            AgentType::SummarisationBot => "Summarisation Bot",
        }
    }

    /// Whether agents of this type carry uploaded documents.
    pub fn accepts_documents(self) -> bool {
        self == AgentType::AdvancedCollegeBot
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentType {
    type Err = ParseAgentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAgentTypeError {
                requested: s.to_string(),
            })
    }
}

/// Error returned when a string names no known agent type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAgentTypeError {
    requested: String,
}

impl ParseAgentTypeError {
    fn available(&self) -> String {
        AgentType::ALL
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ParseAgentTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown agent type '{}'. Available types: {}",
            self.requested,
            self.available()
        )
    }
}

impl std::error::Error for ParseAgentTypeError {}

/// A persisted chatbot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Unique identifier, assigned once at creation.
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AgentType,
    /// Hex UI color such as `#1a2b3c`.
    pub color: String,
    #[serde(default)]
    pub description: String,
    /// Uploaded file names. Empty unless `kind` accepts documents.
    #[serde(default)]
    pub documents: Vec<String>,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// Field values collected by the agent form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDraft {
    pub name: String,
    pub kind: AgentType,
    pub color: String,
    pub description: String,
    pub documents: Vec<String>,
}

impl Default for AgentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: AgentType::default(),
            color: DEFAULT_COLOR.to_string(),
            description: String::new(),
            documents: Vec::new(),
        }
    }
}

impl AgentDraft {
    /// Copy the editable fields of an existing agent.
    pub fn from_agent(agent: &Agent) -> Self {
        Self {
            name: agent.name.clone(),
            kind: agent.kind,
            color: agent.color.clone(),
            description: agent.description.clone(),
            documents: agent.documents.clone(),
        }
    }

    /// Documents as they must be written: dropped for types without uploads.
    pub fn persisted_documents(&self) -> Vec<String> {
        if self.kind.accepts_documents() {
            self.documents.clone()
        } else {
            Vec::new()
        }
    }
}

/// Source of creation timestamps.
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
