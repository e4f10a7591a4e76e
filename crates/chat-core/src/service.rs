//! Answer Service
//!
//! The remote procedure that turns a query into an answer, plus the JSON
//! shapes exchanged with it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_core::service::{service_fn, AnswerService};
//!
//! // Any async closure can stand in for the remote call
//! let service = service_fn(|query: String| async move { Ok(format!("echo: {query}")) });
//! let answer = service.ask("hello").await?;
//! ```

use std::future::Future;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Outcome;

/// Path of the answer endpoint on the hosting server
pub const ANSWER_PATH: &str = "/get";

/// Outbound request body
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Success response body
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerBody {
    pub response: String,
}

impl AnswerBody {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

/// Error response body; the reason is optional
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub response: Option<String>,
}

/// Capability to ask the remote answer service
///
/// Futures are not required to be `Send`: the widget runs on a single
/// cooperative thread (the browser event loop).
#[async_trait(?Send)]
pub trait AnswerService {
    /// Issue exactly one request for `query` and report how it settled
    async fn ask(&self, query: &str) -> Outcome;
}

#[async_trait(?Send)]
impl<S: AnswerService + ?Sized> AnswerService for std::rc::Rc<S> {
    async fn ask(&self, query: &str) -> Outcome {
        (**self).ask(query).await
    }
}

/// Adapter turning an async closure into an [`AnswerService`]
pub struct ServiceFn<F> {
    f: F,
}

/// Wrap `f` so it can be injected wherever an [`AnswerService`] is expected
pub const fn service_fn<F, Fut>(f: F) -> ServiceFn<F>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Outcome>,
{
    ServiceFn { f }
}

#[async_trait(?Send)]
impl<F, Fut> AnswerService for ServiceFn<F>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Outcome>,
{
    async fn ask(&self, query: &str) -> Outcome {
        (self.f)(query.to_owned()).await
    }
}
