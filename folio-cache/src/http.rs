//! Request/response model for the interception contract
//!
//! The worker never shares memory with the page; it sees only the
//! requests the hosting runtime grants it and the responses it returns.
//! These types are that contract.

/// How a request was initiated, as far as caching policy cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// A top-level document navigation; eligible for the offline
    /// shell fallback
    Navigate,

    /// A same-origin subresource request
    SameOrigin,

    /// A cross-origin subresource request
    CrossOrigin,
}

/// An intercepted request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub mode: RequestMode,
}

impl Request {
    /// A same-origin subresource request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: RequestMode::SameOrigin,
        }
    }

    /// A top-level navigation request
    pub fn navigate(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: RequestMode::Navigate,
        }
    }

    /// A cross-origin request
    pub fn cross_origin(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: RequestMode::CrossOrigin,
        }
    }

    pub fn is_navigation(&self) -> bool {
        self.mode == RequestMode::Navigate
    }
}

/// Visibility class of a response, mirroring how the runtime labels
/// fetched responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Same-origin response with readable headers and body
    Basic,

    /// Cross-origin response fetched with CORS
    Cors,

    /// Cross-origin response with no readable contents
    Opaque,
}

/// A response as seen by the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub url: String,
    pub status: u16,
    pub kind: ResponseKind,
    pub body: Vec<u8>,
}

impl Response {
    /// A successful same-origin response
    pub fn basic(url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.into(),
            status: 200,
            kind: ResponseKind::Basic,
            body: body.into(),
        }
    }

    /// Override the status code
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Override the response kind
    pub fn with_kind(mut self, kind: ResponseKind) -> Self {
        self.kind = kind;
        self
    }

    /// Cache admission policy: only successful same-origin responses
    /// are ever stored. Non-200 and cross-origin/opaque responses are
    /// served but never cached.
    pub fn is_cacheable(&self) -> bool {
        self.status == 200 && self.kind == ResponseKind::Basic
    }
}
