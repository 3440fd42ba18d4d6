//! Error type for Github Client

use super::{Pagination, Rate, Response};
use serde::Deserialize;
use std::{borrow::Cow, fmt};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by the client.
///
/// Whenever Github actually answered, the error keeps the response status along with the
/// pagination and rate limit metadata so callers can still inspect them.
#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error")]
    Reqwest(#[from] reqwest::Error),

    #[error("json error")]
    Json(#[from] serde_json::Error),

    #[error("invalid url")]
    Url(#[from] url::ParseError),

    #[error("unable to encode options: {0}")]
    Options(Cow<'static, str>),

    #[error("`{0}`")]
    Message(Cow<'static, str>),

    #[error("request failed with status `{}`: {}", .0.status(), .0.inner())]
    Api(Box<Response<GithubClientError>>),

    #[error("RateLimit: {}", .0.inner())]
    RateLimit(Box<Response<GithubClientError>>),

    #[error("AbuseLimit: {}", .0.inner())]
    AbuseLimit(Box<Response<GithubClientError>>),

    #[error("unable to read response body with status `{}`", .response.status())]
    Body {
        response: Box<Response<()>>,
        source: reqwest::Error,
    },

    #[error("unable to decode response with status `{}`", .response.status())]
    Decode {
        response: Box<Response<()>>,
        source: serde_json::Error,
    },
}

impl Error {
    /// Status of the response that caused this error, if one was received
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::Api(response) | Error::RateLimit(response) | Error::AbuseLimit(response) => {
                Some(response.status())
            }
            Error::Body { response, .. } | Error::Decode { response, .. } => {
                Some(response.status())
            }
            Error::Reqwest(e) => e.status(),
            _ => None,
        }
    }

    /// Pagination metadata of the response that caused this error, if one was received
    pub fn pagination(&self) -> Option<&Pagination> {
        match self {
            Error::Api(response) | Error::RateLimit(response) | Error::AbuseLimit(response) => {
                Some(response.pagination())
            }
            Error::Body { response, .. } | Error::Decode { response, .. } => {
                Some(response.pagination())
            }
            _ => None,
        }
    }

    /// Rate limit metadata of the response that caused this error, if one was received
    pub fn rate(&self) -> Option<&Rate> {
        match self {
            Error::Api(response) | Error::RateLimit(response) | Error::AbuseLimit(response) => {
                Some(response.rate())
            }
            Error::Body { response, .. } | Error::Decode { response, .. } => {
                Some(response.rate())
            }
            _ => None,
        }
    }
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}

// Github Error Responses
// https://developer.github.com/v3/#client-errors
#[derive(Debug, Default, Deserialize)]
pub struct GithubClientError {
    pub message: Option<String>,
    pub errors: Option<Vec<GithubClientErrorType>>,
    pub documentation_url: Option<String>,
}

impl GithubClientError {
    /// Parse an error payload, falling back to the raw body when it isn't the documented json
    pub(super) fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| GithubClientError {
            message: Some(body.to_owned()).filter(|body| !body.is_empty()),
            ..Default::default()
        })
    }
}

impl fmt::Display for GithubClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_deref().unwrap_or("no message"))?;

        if let Some(errors) = &self.errors {
            for error in errors {
                match error {
                    GithubClientErrorType::Message(message) => write!(f, "; {}", message)?,
                    GithubClientErrorType::Code {
                        resource,
                        field,
                        code,
                    } => write!(f, "; {}.{}: {}", resource, field, code)?,
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GithubClientErrorType {
    Message(String),
    Code {
        resource: String,
        field: String,
        code: String,
    },
}

#[cfg(test)]
mod test {
    use super::{GithubClientError, GithubClientErrorType};

    #[test]
    fn validation_error() {
        const ERROR_JSON: &str = r#"
            {
                "message": "Validation Failed",
                "errors": [
                    {
                        "resource": "Repository",
                        "field": "name",
                        "code": "custom"
                    }
                ],
                "documentation_url": "https://developer.github.com/v3/repos/#create"
            }
        "#;

        let error = GithubClientError::from_body(ERROR_JSON);
        assert_eq!(error.message.as_deref(), Some("Validation Failed"));
        match &error.errors.as_ref().unwrap()[0] {
            GithubClientErrorType::Code { field, .. } => assert_eq!(field, "name"),
            other => panic!("unexpected error type {:?}", other),
        }
        assert_eq!(error.to_string(), "Validation Failed; Repository.name: custom");
    }

    #[test]
    fn non_json_error_body() {
        let error = GithubClientError::from_body("Bad Gateway");
        assert_eq!(error.message.as_deref(), Some("Bad Gateway"));
        assert!(error.errors.is_none());

        let error = GithubClientError::from_body("");
        assert_eq!(error.to_string(), "no message");
    }
}
