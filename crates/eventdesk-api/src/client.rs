// Async HTTP client for the event management REST service.
//
// Base path: /api/
// Auth: none (the service is an external collaborator)

use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::envelope::{self, Listing};
use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{
    EventPage, EventRequest, EventResponse, EventSearchRequest, ParticipantRequest,
    ParticipantResponse, StatisticsResponse,
};

/// Default service root used when no server is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

// ── Error response shape from the service ────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

// ── Request options ──────────────────────────────────────────────────

/// Optional parts of a gateway request. Defaults to a bodiless `GET`.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self, Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the events/participants service.
///
/// Every call funnels through [`request`](Self::request): one URL builder,
/// one status check, one envelope normalization.
pub struct EventsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl EventsClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append path segments to the base URL. Each segment is
    /// percent-encoded, so emails and names are safe to pass verbatim.
    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── Gateway ──────────────────────────────────────────────────────

    /// Issue a JSON request against `endpoint` (relative to the base URL,
    /// e.g. `"/events/5"` or `"/events?page=1"`) and return the normalized
    /// payload. Path segments are percent-encoded; a query string after `?`
    /// is kept as given.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, Error> {
        let (path, query) = match endpoint.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (endpoint, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut url = self.url(&segments)?;
        url.set_query(query.filter(|q| !q.is_empty()));
        self.execute(url, options).await
    }

    async fn execute(&self, url: Url, options: RequestOptions) -> Result<Value, Error> {
        debug!("{} {url}", options.method);

        let mut builder = self
            .http
            .request(options.method, url)
            .headers(options.headers);
        if let Some(ref body) = options.body {
            trace!(%body, "request body");
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let value = self.handle_response(resp).await?;
        Ok(envelope::unwrap_data(value))
    }

    async fn handle_response(&self, resp: reqwest::Response) -> Result<Value, Error> {
        let status = resp.status();
        if !status.is_success() {
            let raw = resp.text().await.unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                message: error_message(status, &raw),
            });
        }

        let body = resp.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    async fn get(&self, segments: &[&str]) -> Result<Value, Error> {
        self.execute(self.url(segments)?, RequestOptions::default())
            .await
    }

    async fn send_json(
        &self,
        method: Method,
        segments: &[&str],
        body: &impl Serialize,
    ) -> Result<Value, Error> {
        let options = RequestOptions::method(method).json(body)?;
        self.execute(self.url(segments)?, options).await
    }

    async fn delete(&self, segments: &[&str]) -> Result<(), Error> {
        self.execute(self.url(segments)?, RequestOptions::method(Method::DELETE))
            .await
            .map(drop)
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Events ───────────────────────────────────────────────────────

    pub async fn list_events(&self) -> Result<Vec<EventResponse>, Error> {
        let value = self.get(&["events"]).await?;
        Ok(envelope::decode::<Listing<EventResponse>>(value)?.into_vec())
    }

    pub async fn get_event(&self, event_id: i64) -> Result<EventResponse, Error> {
        let value = self.get(&["events", &event_id.to_string()]).await?;
        envelope::decode(value)
    }

    pub async fn create_event(&self, body: &EventRequest) -> Result<EventResponse, Error> {
        let value = self.send_json(Method::POST, &["events"], body).await?;
        envelope::decode(value)
    }

    pub async fn update_event(
        &self,
        event_id: i64,
        body: &EventRequest,
    ) -> Result<EventResponse, Error> {
        let value = self
            .send_json(Method::PUT, &["events", &event_id.to_string()], body)
            .await?;
        envelope::decode(value)
    }

    pub async fn delete_event(&self, event_id: i64) -> Result<(), Error> {
        self.delete(&["events", &event_id.to_string()]).await
    }

    pub async fn search_events(&self, body: &EventSearchRequest) -> Result<EventPage, Error> {
        let value = self
            .send_json(Method::POST, &["events", "search"], body)
            .await?;
        envelope::decode(value)
    }

    pub async fn statistics(&self) -> Result<StatisticsResponse, Error> {
        let value = self.get(&["events", "statistics"]).await?;
        envelope::decode(value)
    }

    pub async fn events_by_status(&self, status: &str) -> Result<Vec<EventResponse>, Error> {
        let value = self.get(&["events", "status", status]).await?;
        Ok(envelope::decode::<Listing<EventResponse>>(value)?.into_vec())
    }

    pub async fn events_by_organizer(
        &self,
        organizer: &str,
    ) -> Result<Vec<EventResponse>, Error> {
        let value = self.get(&["events", "organizer", organizer]).await?;
        Ok(envelope::decode::<Listing<EventResponse>>(value)?.into_vec())
    }

    // ── Participants ─────────────────────────────────────────────────

    pub async fn list_participants(
        &self,
        event_id: i64,
    ) -> Result<Vec<ParticipantResponse>, Error> {
        let value = self
            .get(&["participants", "event", &event_id.to_string()])
            .await?;
        Ok(envelope::decode::<Listing<ParticipantResponse>>(value)?.into_vec())
    }

    pub async fn register_participant(
        &self,
        body: &ParticipantRequest,
    ) -> Result<ParticipantResponse, Error> {
        let value = self
            .send_json(Method::POST, &["participants", "register"], body)
            .await?;
        envelope::decode(value)
    }

    pub async fn cancel_participation(&self, participation_id: i64) -> Result<(), Error> {
        self.delete(&["participants", "cancel", &participation_id.to_string()])
            .await
    }

    pub async fn participations_by_email(
        &self,
        email: &str,
    ) -> Result<Vec<ParticipantResponse>, Error> {
        let value = self.get(&["participants", "participant", email]).await?;
        Ok(envelope::decode::<Listing<ParticipantResponse>>(value)?.into_vec())
    }

    pub async fn cancel_participation_by_email(
        &self,
        event_id: i64,
        email: &str,
    ) -> Result<(), Error> {
        self.delete(&[
            "participants",
            "cancel",
            "event",
            &event_id.to_string(),
            "email",
            email,
        ])
        .await
    }
}

/// Prefer the service's `{message}` field, then the raw body, then the
/// status line.
fn error_message(status: reqwest::StatusCode, raw: &str) -> String {
    if let Ok(ErrorResponse { message: Some(msg) }) = serde_json::from_str::<ErrorResponse>(raw) {
        return msg;
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        status.to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}
