use corrector_common::{CheckerConfig, ServiceError};
use corrector_core::{CheckRequest, CheckingService, Span};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

use crate::types::CheckResponse;

/// Form parameters of a `/v2/check` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckParams<'a> {
    text: &'a str,
    language: &'a str,
    enabled_only: bool,
}

/// HTTP client for a LanguageTool-compatible `/v2/check` endpoint.
#[derive(Debug, Clone)]
pub struct LanguageToolClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl LanguageToolClient {
    pub fn new(config: &CheckerConfig) -> Self {
        Self::with_client(reqwest::Client::default(), config.endpoint.clone())
    }

    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

pub(crate) fn form_body(request: &CheckRequest) -> Result<String, ServiceError> {
    serde_html_form::to_string(CheckParams {
        text: &request.text,
        language: &request.language,
        enabled_only: !request.all_categories,
    })
    .map_err(|e| ServiceError::Transport(Box::new(e)))
}

/// Parse a `/v2/check` response body into spans, dropping unusable matches.
pub fn parse_response(body: &[u8]) -> Result<Vec<Span>, ServiceError> {
    let response: CheckResponse =
        serde_json::from_slice(body).map_err(|e| ServiceError::Malformed(Box::new(e)))?;
    Ok(response.into_spans())
}

impl CheckingService for LanguageToolClient {
    async fn check(&self, request: &CheckRequest) -> Result<Vec<Span>, ServiceError> {
        let body = form_body(request)?;

        tracing::debug!(
            target: "corrector::client",
            endpoint = %self.endpoint,
            language = %request.language,
            len = request.text.len(),
            "sending check request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                target: "corrector::client",
                status = status.as_u16(),
                "checking service returned an error status"
            );
            return Err(ServiceError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ServiceError::Transport(Box::new(e)))?;
        let spans = parse_response(&bytes)?;

        tracing::debug!(target: "corrector::client", matches = spans.len(), "check complete");
        Ok(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_body_encoding() {
        let config = CheckerConfig::default();
        let request = CheckRequest::new("Este es un pruebas & más", &config);
        let body = form_body(&request).unwrap();
        assert_eq!(
            body,
            "text=Este+es+un+pruebas+%26+m%C3%A1s&language=es&enabledOnly=false"
        );
    }

    #[test]
    fn test_form_body_enabled_only() {
        let config = CheckerConfig {
            enabled_only: true,
            ..CheckerConfig::default()
        };
        let body = form_body(&CheckRequest::new("hola", &config)).unwrap();
        assert!(body.ends_with("enabledOnly=true"));
    }

    #[test]
    fn test_parse_response_malformed() {
        assert!(matches!(
            parse_response(b"<html>502</html>"),
            Err(ServiceError::Malformed(_))
        ));
        assert!(matches!(
            parse_response(br#"{"matches":[{"offset":"x"}]}"#),
            Err(ServiceError::Malformed(_))
        ));
    }

    #[test]
    fn test_endpoint_from_config() {
        let client = LanguageToolClient::new(&CheckerConfig::default());
        assert_eq!(
            client.endpoint().as_str(),
            "https://api.languagetool.org/v2/check"
        );
    }
}
