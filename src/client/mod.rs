use log::{debug, warn};
use reqwest::{header, Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::env;
use url::Url;

mod error;
mod options;
mod pagination;
mod rate_limit;
mod repos;
mod response;

pub use error::{Error, GithubClientError, GithubClientErrorType, Result};
pub use options::add_options;
pub use pagination::{Pagination, PaginationOptions, SortDirection};
pub use rate_limit::Rate;
pub use repos::{
    CollaboratorAffiliation, CollaboratorPermission, ListAllRepositoriesOptions,
    ListCollaboratorsOptions, ListContributorsOptions, ListOrgRepositoriesOptions,
    ListRepositoriesOptions, OrgRepositoryType, RepositoryClient, RepositorySort,
    RepositoryType,
};
pub use response::Response;

// Constants
const DEFAULT_BASE_URL: &str = "https://api.github.com/";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const ENV_BASE_URL: &str = "GITHUB_API_URL";
const ENV_TOKEN: &str = "GITHUB_TOKEN";

const HEADER_LINK: &str = "Link";
const HEADER_RATE_LIMIT: &str = "X-RateLimit-Limit";
const HEADER_RATE_REMAINING: &str = "X-RateLimit-Remaining";
const HEADER_RATE_RESET: &str = "X-RateLimit-Reset";

const MEDIA_TYPE_V3: &str = "application/vnd.github.v3+json";

#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    github_api_token: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            github_api_token: None,
        }
    }

    /// Seed the builder from `GITHUB_API_URL` and `GITHUB_TOKEN` when they are set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut builder = Self::new();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            builder = builder.base_url(base_url);
        }

        if let Some(token) = lookup(ENV_TOKEN) {
            builder = builder.github_api_token(token);
        }

        builder
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn github_api_token<S: Into<String>>(mut self, github_api_token: S) -> Self {
        self.github_api_token = Some(github_api_token.into());
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Url::parse(&base_url)?;

        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned());

        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static(MEDIA_TYPE_V3));

        if let Some(token) = &self.github_api_token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("token {}", token))
                    .map_err(|e| e.to_string())?,
            );
        }

        let client = ReqwestClient::builder()
            .user_agent(&user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Client {
            base_url,
            user_agent,
            github_api_token: self.github_api_token,
            client,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Client {
    /// Base URL to use for API requests. Defaults to the public GitHub API,
    /// but can be overridden for use with GitHub Enterprise. Always
    /// terminated with a trailing slash.
    base_url: String,

    /// User agent string sent when communicating with GitHub APIs
    user_agent: String,

    /// API token to use when issuing requests to GitHub
    github_api_token: Option<String>,

    /// Client used to make http requests
    client: ReqwestClient,
}

impl Client {
    /// An unauthenticated client for the public API
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn is_authenticated(&self) -> bool {
        self.github_api_token.is_some()
    }

    pub fn repos(&self) -> RepositoryClient {
        RepositoryClient::new(self)
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    fn post(&self, url: &str) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    fn put(&self, url: &str) -> RequestBuilder {
        self.request(Method::PUT, url)
    }

    fn patch(&self, url: &str) -> RequestBuilder {
        self.request(Method::PATCH, url)
    }

    fn delete(&self, url: &str) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }

    /// Build a request against `url`, relative to the base url
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, url);
        debug!("Github Request: {} {}", method, url);
        self.client.request(method, &url)
    }

    // Split a response into its metadata and body. Non-success statuses are turned into errors
    // which keep that metadata around.
    async fn process_response(
        &self,
        response: reqwest::Response,
    ) -> Result<(Response<()>, String)> {
        let status = response.status();
        let headers = response.headers();
        debug!("Github Response: {} {}", status, response.url());

        let pagination = Pagination::from_headers(headers);
        let rate = Rate::from_headers(headers);
        let rate_exhausted = Rate::is_exhausted(headers);

        let meta = Response::new(status, pagination, rate, ());
        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => {
                warn!("Unable to read Github Response body: {}", source);
                return Err(Error::Body {
                    response: Box::new(meta),
                    source,
                });
            }
        };

        if status.is_success() {
            return Ok((meta, body));
        }

        warn!("Github request failed with status {}", status);
        let error = Box::new(meta.map(|()| GithubClientError::from_body(&body)));

        if status == StatusCode::FORBIDDEN {
            if rate_exhausted {
                return Err(Error::RateLimit(error));
            }

            let abuse = error
                .inner()
                .documentation_url
                .as_deref()
                .map_or(false, |url| url.contains("abuse"));
            if abuse {
                return Err(Error::AbuseLimit(error));
            }
        }

        Err(Error::Api(error))
    }

    /// Deserialize a json response body
    async fn json<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<Response<T>> {
        let (meta, body) = self.process_response(response).await?;

        match serde_json::from_str(&body) {
            Ok(t) => Ok(meta.map(|()| t)),
            Err(source) => {
                debug!("Unable to deserialize Github Response: {}", body);
                Err(Error::Decode {
                    response: Box::new(meta),
                    source,
                })
            }
        }
    }

    /// Expect an empty response, such as a `204 No Content`
    async fn empty(&self, response: reqwest::Response) -> Result<Response<()>> {
        let (meta, _body) = self.process_response(response).await?;

        Ok(meta)
    }

    /// Interpret `204 No Content` as `true` and `404 Not Found` as `false`
    async fn boolean(&self, response: reqwest::Response) -> Result<Response<bool>> {
        match self.process_response(response).await {
            Ok((meta, _body)) => Ok(meta.map(|()| true)),
            Err(Error::Api(error)) if error.status() == StatusCode::NOT_FOUND => {
                Ok((*error).map(|_| false))
            }
            Err(e) => Err(e),
        }
    }
}
