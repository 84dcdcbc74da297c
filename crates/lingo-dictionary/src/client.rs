use std::time::Duration;

use reqwest::Client;

use crate::SourceError;

/// Shared client for the word and dictionary services
pub fn http_client(timeout: Duration, user_agent: &str) -> Result<Client, SourceError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .map_err(SourceError::Network)
}
