use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use crate::DEFAULT_TIMEOUT_MS;

/// GET request envelope used by the history client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub timeout_ms: u64,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok_json(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport-level HTTP error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    message: String,
    timed_out: bool,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: true,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn timed_out(&self) -> bool {
        self.timed_out
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

/// Transport contract for the history client.
pub trait HttpClient: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;
}

/// Production HTTP client backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
}

impl ReqwestHttpClient {
    pub fn new(user_agent: &str) -> Self {
        Self {
            client: Arc::new(
                reqwest::Client::builder()
                    .user_agent(user_agent)
                    .build()
                    .unwrap_or_else(|_| reqwest::Client::new()),
            ),
        }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            let mut builder = self.client.get(&request.url);

            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let timeout = std::time::Duration::from_millis(request.timeout_ms);
            builder = builder.timeout(timeout);

            let response = builder.send().await.map_err(|e| {
                if e.is_timeout() {
                    HttpError::timeout(format!("request timeout: {e}"))
                } else if e.is_connect() {
                    HttpError::new(format!("connection failed: {e}"))
                } else {
                    HttpError::new(format!("request failed: {e}"))
                }
            })?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| HttpError::new(format!("failed to read response body: {e}")))?;

            Ok(HttpResponse { status, body })
        })
    }
}

type Reply = Result<HttpResponse, HttpError>;

enum ScriptedReply {
    Ready(Reply),
    Gated(oneshot::Receiver<Reply>),
}

/// Offline transport for tests: replies are scripted per URL and served in
/// FIFO order. Gated replies resolve only when the test sends through the
/// returned sender, which lets a test choose the order responses arrive in.
///
/// Unscripted URLs answer `404` with an empty body.
#[derive(Default)]
pub struct ScriptedHttpClient {
    replies: Mutex<HashMap<String, VecDeque<ScriptedReply>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an immediate reply for `url`.
    pub fn respond(&self, url: impl Into<String>, reply: Reply) -> &Self {
        self.push(url.into(), ScriptedReply::Ready(reply));
        self
    }

    /// Queues a reply for `url` that is held until the returned sender fires.
    /// Dropping the sender resolves the request as a transport error.
    pub fn respond_later(&self, url: impl Into<String>) -> oneshot::Sender<Reply> {
        let (sender, receiver) = oneshot::channel();
        self.push(url.into(), ScriptedReply::Gated(receiver));
        sender
    }

    /// Every request seen so far, in arrival order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("scripted request log is not poisoned")
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .expect("scripted request log is not poisoned")
            .len()
    }

    fn push(&self, url: String, reply: ScriptedReply) {
        self.replies
            .lock()
            .expect("scripted replies are not poisoned")
            .entry(url)
            .or_default()
            .push_back(reply);
    }

    fn take(&self, url: &str) -> Option<ScriptedReply> {
        self.replies
            .lock()
            .expect("scripted replies are not poisoned")
            .get_mut(url)
            .and_then(VecDeque::pop_front)
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("scripted request log is not poisoned")
            .push(request.clone());
        let scripted = self.take(&request.url);

        Box::pin(async move {
            match scripted {
                Some(ScriptedReply::Ready(reply)) => reply,
                Some(ScriptedReply::Gated(receiver)) => receiver
                    .await
                    .unwrap_or_else(|_| Err(HttpError::new("connection closed"))),
                None => Ok(HttpResponse::new(404, "")),
            }
        })
    }
}
