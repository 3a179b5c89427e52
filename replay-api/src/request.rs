use serde::Serialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;

pub use reqwest::Method;

/// How a request carries its payload.
pub enum RequestData<D> {
    Query(D),
    Json(D),
    Empty,
}

/// Descriptor for one backend call.
///
/// Implementations are plain value types constructed fresh per invocation;
/// the client never mutates them.
pub trait Request {
    type Data: Serialize;
    type Response: DeserializeOwned;

    const METHOD: Method = Method::GET;

    fn endpoint(&self) -> Cow<'_, str>;

    fn data(&self) -> RequestData<&Self::Data>;

    /// Whether the call must carry a bearer token. Everything except the
    /// auth exchanges does.
    fn requires_auth(&self) -> bool {
        true
    }
}

/// Response type for endpoints that complete without a body.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct EmptyResponse;
