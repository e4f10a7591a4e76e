//! Query Dispatcher
//!
//! Drives one submission through its lifecycle:
//!
//! ```text
//! Idle ─▶ Submitted ─▶ AwaitingResponse ─┬─▶ Resolved
//!                                        └─▶ Failed
//! ```
//!
//! Only one submission is in flight at a time. While a request is pending
//! the dispatcher is busy, and further submissions are turned away without
//! touching the transcript or the input field.

use std::cell::Cell;

use crate::error::Failure;
use crate::input::InputField;
use crate::message::Message;
use crate::service::AnswerService;
use crate::transcript::TranscriptRenderer;

/// Lifecycle state of the most recent submission
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Query accepted, messages being appended
    Submitted,
    /// Remote call in flight
    AwaitingResponse,
    /// Answer displayed
    Resolved,
    /// Error displayed
    Failed,
}

/// How a call to [`QueryDispatcher::submit`] ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Empty or whitespace-only query, nothing happened
    Ignored,
    /// Another submission is still awaiting its answer
    Busy,
    /// The answer was appended to the transcript
    Resolved(String),
    /// An error message was appended to the transcript
    Failed(Failure),
}

/// Owns the message lifecycle of the widget
pub struct QueryDispatcher<R, I, S> {
    renderer: R,
    input: I,
    service: S,
    state: Cell<SubmissionState>,
    in_flight: Cell<bool>,
}

impl<R, I, S> QueryDispatcher<R, I, S>
where
    R: TranscriptRenderer,
    I: InputField,
    S: AnswerService,
{
    /// Create a new dispatcher
    pub const fn new(renderer: R, input: I, service: S) -> Self {
        Self {
            renderer,
            input,
            service,
            state: Cell::new(SubmissionState::Idle),
            in_flight: Cell::new(false),
        }
    }

    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub const fn input(&self) -> &I {
        &self.input
    }

    /// State of the most recent submission
    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    /// Whether a submission is awaiting its answer
    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    /// Submit whatever is in the input field
    pub async fn submit(&self) -> Submission {
        let raw = self.input.value();
        self.submit_query(&raw).await
    }

    /// Submit `raw` as a query
    pub async fn submit_query(&self, raw: &str) -> Submission {
        let query = raw.trim();
        if query.is_empty() {
            return Submission::Ignored;
        }
        if self.in_flight.get() {
            tracing::debug!("Submission rejected, another request is in flight");
            return Submission::Busy;
        }

        let _flight = FlightGuard::engage(&self.in_flight, &self.input);
        self.transition(SubmissionState::Submitted);

        self.input.clear();
        self.renderer.append(Message::user(query));
        let placeholder = self.renderer.append(Message::pending());

        self.transition(SubmissionState::AwaitingResponse);
        let outcome = self.service.ask(query).await;

        self.renderer.remove(placeholder);
        let submission = match outcome {
            Ok(answer) => {
                self.renderer.append(Message::assistant(answer.as_str()));
                self.transition(SubmissionState::Resolved);
                Submission::Resolved(answer)
            }
            Err(failure) => {
                tracing::warn!(error = %failure, "Query failed");
                self.renderer.append(Message::assistant(failure.user_message()));
                self.transition(SubmissionState::Failed);
                Submission::Failed(failure)
            }
        };
        self.renderer.scroll_to_bottom();

        submission
    }

    fn transition(&self, next: SubmissionState) {
        tracing::debug!(from = ?self.state.get(), to = ?next, "Submission state");
        self.state.set(next);
    }
}

/// Marks the dispatcher busy until dropped, including when the submission
/// future is dropped mid-flight
struct FlightGuard<'a, I: InputField> {
    flag: &'a Cell<bool>,
    input: &'a I,
}

impl<'a, I: InputField> FlightGuard<'a, I> {
    fn engage(flag: &'a Cell<bool>, input: &'a I) -> Self {
        flag.set(true);
        input.set_busy(true);
        Self { flag, input }
    }
}

impl<I: InputField> Drop for FlightGuard<'_, I> {
    fn drop(&mut self) {
        self.flag.set(false);
        self.input.set_busy(false);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tokio::sync::oneshot;

    use super::*;
    use crate::error::{FALLBACK_MESSAGE, Outcome};
    use crate::input::MemoryInput;
    use crate::message::{PENDING_TEXT, Role};
    use crate::service::service_fn;
    use crate::transcript::{MemoryTranscript, TranscriptEvent};

    const QUERY: &str = "What is the treatment for X?";

    fn dispatcher_with(
        outcome: Outcome,
    ) -> QueryDispatcher<MemoryTranscript, MemoryInput, impl AnswerService> {
        let service = service_fn(move |_query: String| {
            let outcome = outcome.clone();
            async move { outcome }
        });
        QueryDispatcher::new(MemoryTranscript::new(), MemoryInput::new(), service)
    }

    #[tokio::test]
    async fn test_empty_input_is_ignored() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let service = service_fn(move |_query: String| {
            counter.set(counter.get() + 1);
            async { Ok::<_, Failure>("unused".to_string()) }
        });
        let dispatcher = QueryDispatcher::new(MemoryTranscript::new(), MemoryInput::new(), service);

        assert_eq!(dispatcher.submit_query("").await, Submission::Ignored);
        assert_eq!(dispatcher.submit_query("   ").await, Submission::Ignored);

        dispatcher.input().type_text(" \t ");
        assert_eq!(dispatcher.submit().await, Submission::Ignored);

        assert!(dispatcher.renderer().is_empty());
        assert!(dispatcher.renderer().events().is_empty());
        assert_eq!(calls.get(), 0);
        assert_eq!(dispatcher.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_success_round_trip() {
        let dispatcher = dispatcher_with(Ok("Take two tablets daily.".into()));

        let submission = dispatcher.submit_query(QUERY).await;

        assert_eq!(
            submission,
            Submission::Resolved("Take two tablets daily.".into())
        );
        assert_eq!(
            dispatcher.renderer().messages(),
            vec![
                Message::user(QUERY),
                Message::assistant("Take two tablets daily."),
            ]
        );
        assert_eq!(dispatcher.state(), SubmissionState::Resolved);
    }

    #[tokio::test]
    async fn test_placeholder_lifecycle_ordering() {
        let dispatcher = dispatcher_with(Ok("Rest.".into()));
        dispatcher.submit_query(QUERY).await;

        let mutations: Vec<_> = dispatcher
            .renderer()
            .events()
            .into_iter()
            .filter(|e| *e != TranscriptEvent::Scrolled)
            .collect();

        // user, placeholder, placeholder removed, final answer
        let [
            TranscriptEvent::Appended(user),
            TranscriptEvent::Appended(placeholder),
            TranscriptEvent::Removed(removed),
            TranscriptEvent::Appended(answer),
        ] = mutations.as_slice()
        else {
            panic!("unexpected mutation sequence: {mutations:?}");
        };
        assert_eq!(placeholder, removed);
        assert!(user < placeholder && placeholder < answer);

        assert_eq!(dispatcher.renderer().pending_count(), 0);
        assert!(
            dispatcher
                .renderer()
                .messages()
                .iter()
                .all(|m| m.text != PENDING_TEXT)
        );
        assert_eq!(
            dispatcher.renderer().events().last(),
            Some(&TranscriptEvent::Scrolled)
        );
    }

    #[tokio::test]
    async fn test_status_failure_uses_fallback() {
        let dispatcher = dispatcher_with(Err(Failure::status(500, None)));

        let submission = dispatcher.submit_query(QUERY).await;

        assert!(matches!(submission, Submission::Failed(_)));
        let messages = dispatcher.renderer().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(
            messages[1].text,
            "Error: Could not get an answer. Please try again. (status 500)"
        );
        assert_eq!(dispatcher.state(), SubmissionState::Failed);
    }

    #[tokio::test]
    async fn test_server_supplied_reason_is_shown() {
        let dispatcher =
            dispatcher_with(Err(Failure::status(400, Some("Invalid query".into()))));

        dispatcher.submit_query(QUERY).await;

        let messages = dispatcher.renderer().messages();
        assert_eq!(messages[0], Message::user(QUERY));
        assert!(messages[1].text.contains("Invalid query"));
    }

    #[tokio::test]
    async fn test_transport_and_malformed_failures() {
        let dispatcher = dispatcher_with(Err(Failure::Transport("network unreachable".into())));
        dispatcher.submit_query(QUERY).await;
        assert_eq!(
            dispatcher.renderer().messages()[1].text,
            "Error: network unreachable"
        );

        let dispatcher = dispatcher_with(Err(Failure::MalformedBody("EOF".into())));
        dispatcher.submit_query(QUERY).await;
        assert_eq!(
            dispatcher.renderer().messages()[1].text,
            format!("Error: {FALLBACK_MESSAGE}")
        );
    }

    #[tokio::test]
    async fn test_submit_reads_and_clears_input() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let service = service_fn(move |query: String| {
            log.borrow_mut().push(query.clone());
            async move { Ok::<_, Failure>(format!("answer to {query}")) }
        });
        let dispatcher = QueryDispatcher::new(MemoryTranscript::new(), MemoryInput::new(), service);

        dispatcher.input().type_text("  hello  ");
        dispatcher.submit().await;

        assert_eq!(dispatcher.input().value(), "");
        assert_eq!(*seen.borrow(), vec!["hello".to_string()]);
        assert_eq!(dispatcher.renderer().messages()[0], Message::user("hello"));
        assert!(!dispatcher.input().is_busy());
    }

    #[tokio::test]
    async fn test_second_submission_while_in_flight_is_rejected() {
        let (tx, rx) = oneshot::channel::<Outcome>();
        let rx = RefCell::new(Some(rx));
        let service = service_fn(move |_query: String| {
            let rx = rx.borrow_mut().take();
            async move {
                match rx {
                    Some(rx) => rx.await.unwrap_or_else(|_| Err(Failure::Transport(String::new()))),
                    None => Ok("second".to_string()),
                }
            }
        });
        let dispatcher = QueryDispatcher::new(MemoryTranscript::new(), MemoryInput::new(), service);

        let (first, ()) = tokio::join!(dispatcher.submit_query("first"), async {
            tokio::task::yield_now().await;

            assert!(dispatcher.is_busy());
            assert!(dispatcher.input().is_busy());
            assert_eq!(dispatcher.state(), SubmissionState::AwaitingResponse);
            assert_eq!(dispatcher.renderer().pending_count(), 1);

            dispatcher.input().type_text("second");
            assert_eq!(dispatcher.submit().await, Submission::Busy);
            assert_eq!(dispatcher.input().value(), "second");
            assert_eq!(dispatcher.renderer().len(), 2);

            tx.send(Ok("first answer".into())).unwrap();
        });

        assert_eq!(first, Submission::Resolved("first answer".into()));
        assert!(!dispatcher.is_busy());
        assert!(!dispatcher.input().is_busy());
        assert_eq!(
            dispatcher.renderer().messages(),
            vec![Message::user("first"), Message::assistant("first answer")]
        );
    }

    #[tokio::test]
    async fn test_dispatcher_remains_usable_after_failure() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let service = service_fn(move |_query: String| {
            counter.set(counter.get() + 1);
            let n = counter.get();
            async move {
                if n == 1 {
                    Err(Failure::status(503, None))
                } else {
                    Ok("recovered".to_string())
                }
            }
        });
        let dispatcher = QueryDispatcher::new(MemoryTranscript::new(), MemoryInput::new(), service);

        assert!(matches!(
            dispatcher.submit_query("one").await,
            Submission::Failed(_)
        ));
        assert_eq!(
            dispatcher.submit_query("two").await,
            Submission::Resolved("recovered".into())
        );
        assert_eq!(dispatcher.renderer().len(), 4);
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_dropped_submission_releases_busy_state() {
        let service = service_fn(|_query: String| std::future::pending::<Outcome>());
        let dispatcher = QueryDispatcher::new(MemoryTranscript::new(), MemoryInput::new(), service);

        {
            let fut = dispatcher.submit_query("stalled");
            tokio::pin!(fut);
            let polled = poll_once(fut.as_mut()).await;
            assert!(polled.is_none());
            assert!(dispatcher.is_busy());
        }

        assert!(!dispatcher.is_busy());
        // a stalled call leaves its placeholder visible
        assert_eq!(dispatcher.renderer().pending_count(), 1);
    }

    async fn poll_once<F: std::future::Future + Unpin>(mut fut: F) -> Option<F::Output> {
        std::future::poll_fn(|cx| {
            std::task::Poll::Ready(match std::future::Future::poll(std::pin::Pin::new(&mut fut), cx) {
                std::task::Poll::Ready(out) => Some(out),
                std::task::Poll::Pending => None,
            })
        })
        .await
    }
}
