use crate::models::*;
use base64::Engine;
use itertools::Itertools;
use reqwest::blocking::{Client, Request};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, info};

const SEARCH_FIELDS: [&str; 6] = [
    "summary",
    "status",
    "fixVersions",
    "reporter",
    "assignee",
    EVIDENCE_FIELD,
];

#[derive(Error, Debug)]
pub enum JiraError {
    #[error("Error creating request: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Error performing request: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Authentication failed with status {0}, check your credentials")]
    Authentication(StatusCode),
    #[error("Oops something went wrong with the request. Status: {0}")]
    UnexpectedStatus(StatusCode),
    #[error("Error reading response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("Error parsing response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub fn basic_auth_header(credentials: &Credentials) -> String {
    let pair = format!("{}:{}", credentials.user, credentials.password);
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(pair)
    )
}

pub fn decode_issue_list(body: &[u8]) -> Result<Vec<JiraIssue>, JiraError> {
    let response: IssueListResponse = serde_json::from_slice(body)?;
    Ok(response.issues)
}

pub struct JiraClient {
    client: Client,
    base_url: String,
}

impl JiraClient {
    pub fn new(base_url: &str) -> Result<Self, JiraError> {
        Ok(Self {
            client: Client::builder().build().map_err(JiraError::Request)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn browse_base(&self) -> String {
        format!("{}/browse/", self.base_url)
    }

    pub fn search_url(&self, project: &str, version: &str) -> String {
        format!(
            "{}/rest/api/2/search/?jql=project={}%20AND%20fixVersion={}&fields={}",
            self.base_url,
            project,
            version,
            SEARCH_FIELDS.iter().join(",")
        )
    }

    pub fn build_search_request(
        &self,
        credentials: &Credentials,
        project: &str,
        version: &str,
    ) -> Result<Request, JiraError> {
        self.client
            .get(self.search_url(project, version))
            .header(reqwest::header::AUTHORIZATION, basic_auth_header(credentials))
            .build()
            .map_err(JiraError::Request)
    }

    fn execute(&self, request: Request) -> Result<Vec<u8>, JiraError> {
        info!("GET {}", request.url());
        let response = self
            .client
            .execute(request)
            .map_err(JiraError::Transport)?;

        let status = response.status();
        debug!("Response status: {}", status);
        match status {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(JiraError::Authentication(status))
            }
            _ => return Err(JiraError::UnexpectedStatus(status)),
        }

        let body = response.bytes().map_err(JiraError::Body)?;
        Ok(body.to_vec())
    }

    pub fn search_issues(
        &self,
        credentials: &Credentials,
        project: &str,
        version: &str,
    ) -> Result<Vec<JiraIssue>, JiraError> {
        let request = self.build_search_request(credentials, project, version)?;
        let body = self.execute(request)?;
        let issues = decode_issue_list(&body)?;
        info!("Found {} issues for {} {}", issues.len(), project, version);
        Ok(issues)
    }
}
