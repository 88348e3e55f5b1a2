use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

const DEFAULT_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

// Typed descriptor of one remote endpoint: where it lives, what it sends and
// what it answers with.
pub trait RestRequest {
    type Response: DeserializeOwned;
    type QueryParams: Serialize;
    type Body: Serialize;

    fn path(&self) -> std::borrow::Cow<'static, str>;

    fn method() -> reqwest::Method;

    // Private endpoints carry a signed form body and auth headers.
    fn requires_auth() -> bool {
        false
    }

    fn query_params(&self) -> Option<&Self::QueryParams> {
        None
    }

    fn body(&self) -> Option<&Self::Body> {
        None
    }

    fn timeout() -> Duration {
        DEFAULT_HTTP_REQUEST_TIMEOUT
    }
}
