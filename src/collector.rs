use crate::config::Config;
use crate::credentials::*;
use crate::jira_client::*;
use crate::models::Issue;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    #[error(transparent)]
    Jira(#[from] JiraError),
}

/// Loads credentials, queries Jira once and maps the result for display.
pub fn collect_issues(config: &Config, project: &str, version: &str) -> Result<Vec<Issue>, CollectError> {
    let credentials = load_credentials(&config.credentials_path)?;
    let jira_client = JiraClient::new(&config.base_url)?;

    let browse_base = jira_client.browse_base();
    let issues = jira_client
        .search_issues(&credentials, project, version)?
        .iter()
        .map(|jira_issue| Issue::from_jira(jira_issue, &browse_base))
        .collect::<Vec<_>>();

    debug!("Mapped {} issues", issues.len());
    Ok(issues)
}
