//! HTTP gateway to the qRate backend.
//!
//! Plain fetch semantics, mirroring the web client: every call is a
//! single attempt with no retry, caching, deduplication or explicit
//! timeout. Non-2xx responses surface the server's `error` message
//! unchanged when the body carries one.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::config::Config;
use crate::core::error::GatewayError;
use crate::core::models::{CourseDetail, CourseSummary, ProfessorReviewHit, ProfessorSummary};
use crate::core::review::{CourseReviewPayload, ProfessorReviewPayload};

/// Fallback shown when the server fails without a usable error payload.
pub const GENERIC_ERROR: &str = "Something went wrong.";

/// A signed-in identity as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Email the backend confirmed
    pub email: String,
    /// Auth token to persist
    pub token: String,
}

#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: Option<String>,
    user: Option<AuthUser>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    email: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Typed client over the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for a backend base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Build a client from the `[api]` config section.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api.endpoint.clone())
    }

    /// The backend base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Fetch the course catalogue.
    ///
    /// # Errors
    /// [`GatewayError`] on transport failure, a non-2xx response, or an
    /// undecodable body.
    pub async fn list_courses(&self) -> Result<Vec<CourseSummary>, GatewayError> {
        self.get_json("/api/v1/courses").await
    }

    /// Fetch one course with its ratings, distribution and reviews.
    ///
    /// # Errors
    /// [`GatewayError`] as for [`ApiClient::list_courses`].
    pub async fn course_detail(&self, id: &str) -> Result<CourseDetail, GatewayError> {
        self.get_json(&format!("/api/v1/courses/{id}")).await
    }

    /// Fetch the professor directory.
    ///
    /// # Errors
    /// [`GatewayError`] as for [`ApiClient::list_courses`].
    pub async fn list_professors(&self) -> Result<Vec<ProfessorSummary>, GatewayError> {
        self.get_json("/api/v1/professors").await
    }

    /// Fetch all reviews filed against a professor's display name.
    /// Zero hits is an empty list, not an error.
    ///
    /// # Errors
    /// [`GatewayError`] as for [`ApiClient::list_courses`].
    pub async fn search_professor_reviews(
        &self,
        name: &str,
    ) -> Result<Vec<ProfessorReviewHit>, GatewayError> {
        tracing::debug!("GET {}/api/v1/professor-reviews/search name={name}", self.base_url);
        let response = self
            .http
            .get(self.url("/api/v1/professor-reviews/search"))
            .query(&[("name", name)])
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Submit a course review.
    ///
    /// # Errors
    /// [`GatewayError::Api`] with the server's message when the review
    /// is rejected; [`GatewayError::Network`] when the request fails.
    pub async fn submit_course_review(
        &self,
        payload: &CourseReviewPayload,
    ) -> Result<(), GatewayError> {
        self.post_json("/api/v1/reviews/new", payload).await
    }

    /// Submit a professor review.
    ///
    /// # Errors
    /// As for [`ApiClient::submit_course_review`].
    pub async fn submit_professor_review(
        &self,
        payload: &ProfessorReviewPayload,
    ) -> Result<(), GatewayError> {
        self.post_json("/api/v1/professor-reviews/new", payload).await
    }

    /// Exchange credentials for a token.
    ///
    /// # Errors
    /// [`GatewayError::Api`] carrying the server's message on rejected
    /// credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, GatewayError> {
        self.auth("/api/v1/auth/login", email, password).await
    }

    /// Create an account and sign in.
    ///
    /// # Errors
    /// As for [`ApiClient::login`].
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthSession, GatewayError> {
        self.auth("/api/v1/auth/register", email, password).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        tracing::debug!("GET {}{path}", self.base_url);
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), GatewayError> {
        tracing::debug!("POST {}{path}", self.base_url);
        let response = self.http.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::api_error(status, &body))
        }
    }

    async fn auth(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, GatewayError> {
        tracing::debug!("POST {}{path}", self.base_url);
        let response = self
            .http
            .post(self.url(path))
            .json(&AuthRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }

        let parsed: AuthResponse = serde_json::from_str(&body)?;
        if let Some(message) = parsed.error {
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }
        match (parsed.token, parsed.user) {
            (Some(token), Some(user)) => Ok(AuthSession {
                email: user.email,
                token,
            }),
            _ => Err(GatewayError::Api {
                status: status.as_u16(),
                message: GENERIC_ERROR.to_string(),
            }),
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GatewayError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Recover the server-provided message from an error body, falling
    /// back to [`GENERIC_ERROR`] when the body is not usable.
    fn api_error(status: StatusCode, body: &str) -> GatewayError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .unwrap_or_else(|| GENERIC_ERROR.to_string());
        tracing::warn!("API error {status}: {message}");
        GatewayError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
