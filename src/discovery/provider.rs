use serde_json::Value;
use std::time::Duration;

use crate::error::FetchError;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("surfacegen/", env!("CARGO_PKG_VERSION"));

/// Where discovery reads raw repository and event listings from
pub(crate) trait RepoSource: Send + Sync {
    fn list_repos(&self, username: &str) -> Result<Vec<Value>, FetchError>;
    fn list_events(&self, username: &str) -> Result<Vec<Value>, FetchError>;
}

/// GitHub REST client. One attempt per call, no retries.
pub(crate) struct GitHubClient {
    agent: ureq::Agent,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub(crate) fn new(api_url: &str, token: Option<String>) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(FETCH_TIMEOUT))
            .build()
            .into();
        Self {
            agent,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn get_array(&self, url: &str) -> Result<Vec<Value>, FetchError> {
        let mut request = self
            .agent
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT);
        if let Some(ref token) = self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request.call()?;
        let mut body = response.into_body();
        let parsed: Value = serde_json::from_reader(body.as_reader())
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        match parsed {
            Value::Array(items) => Ok(items),
            other => Err(FetchError::Decode(format!(
                "expected a JSON array, got {}",
                kind_of(&other)
            ))),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl RepoSource for GitHubClient {
    fn list_repos(&self, username: &str) -> Result<Vec<Value>, FetchError> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page=30",
            self.api_url, username
        );
        self.get_array(&url)
    }

    fn list_events(&self, username: &str) -> Result<Vec<Value>, FetchError> {
        let url = format!("{}/users/{}/events", self.api_url, username);
        self.get_array(&url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_host_is_a_transport_error() {
        // Port 9 (discard) is closed on any sane test host.
        let client = GitHubClient::new("http://127.0.0.1:9/", None);
        let err = client.list_repos("octo").expect_err("should fail");
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[test]
    fn api_url_is_trimmed() {
        let client = GitHubClient::new("https://api.example.test///", Some("t".into()));
        assert_eq!(client.api_url, "https://api.example.test");
    }
}
