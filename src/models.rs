use serde::{Deserialize, Deserializer};

pub const EVIDENCE_FIELD: &str = "customfield_17840";

/// Treats `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The evidence field is an instance-specific custom field. Anything other
/// than a string counts as empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Ok(value),
        _ => Ok(String::new()),
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct IssueListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub issues: Vec<JiraIssue>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct JiraUser {
    #[serde(rename = "displayName", default, deserialize_with = "null_as_default")]
    pub display_name: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct JiraStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct JiraIssue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: JiraIssueFields,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct JiraIssueFields {
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reporter: JiraUser,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assignee: JiraUser,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: JiraStatus,
    #[serde(rename = "customfield_17840", default, deserialize_with = "lenient_string")]
    pub evidence: String,
}

/// Display-ready issue, flattened from the wire shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub url: String,
    pub reporter: String,
    pub assignee: String,
    pub status: String,
    pub evidence_completed: bool,
}

impl Issue {
    pub fn from_jira(issue: &JiraIssue, browse_base: &str) -> Self {
        Self {
            key: issue.key.clone(),
            summary: issue.fields.summary.clone(),
            url: format!("{}{}", browse_base, issue.key),
            reporter: issue.fields.reporter.display_name.clone(),
            assignee: issue.fields.assignee.display_name.clone(),
            status: issue.fields.status.description.clone(),
            evidence_completed: !issue.fields.evidence.is_empty(),
        }
    }
}
