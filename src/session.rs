//! Lazy, cancellable pagination over one query string.

use std::time::Duration;

use futures::stream::{self, Stream};
use tracing::debug;

use crate::item::Item;
use crate::wiki::{ArticleSearch, WikiError};

pub const BATCH_SIZE: u32 = 10;
/// Offset ceiling of the search backend; deeper pages are rejected upstream anyway.
pub const DEFAULT_MAX_OFFSET: u32 = 10_000;

// Naive throttling before the first request, per the Wikimedia API terms:
// https://www.mediawiki.org/wiki/Wikimedia_REST_API#Terms_and_conditions
const THROTTLE_STEPS: u32 = 5;
const THROTTLE_STEP: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Fetching { offset: u32, yielded_any: bool },
    Done,
}

/// Produces result batches for one query, one remote call per batch.
///
/// - empty query: a single placeholder batch
/// - no hits at offset 0: a single fallback batch
/// - otherwise: non-empty batches until the API runs dry or `max_offset` is reached
///
/// `is_valid` is consulted only while throttling. After that, cancellation is
/// the caller's business: stop calling [`Session::next_batch`] or drop the stream.
pub struct Session<'a, C, F> {
    client: &'a C,
    query: String,
    is_valid: F,
    max_offset: u32,
    state: State,
}

impl<'a, C, F> Session<'a, C, F>
where
    C: ArticleSearch,
    F: Fn() -> bool,
{
    pub fn new(client: &'a C, query: &str, is_valid: F) -> Self {
        Self {
            client,
            query: query.trim().to_string(),
            is_valid,
            max_offset: DEFAULT_MAX_OFFSET,
            state: State::Start,
        }
    }

    pub fn with_max_offset(mut self, max_offset: u32) -> Self {
        self.max_offset = max_offset;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// `Ok(None)` once the session is exhausted. An error also ends the session.
    pub async fn next_batch(&mut self) -> Result<Option<Vec<Item>>, WikiError> {
        loop {
            match self.state {
                State::Start => {
                    if self.query.is_empty() {
                        self.state = State::Done;
                        return Ok(Some(vec![Item::placeholder()]));
                    }
                    if !self.throttle().await {
                        debug!(query = %self.query, "session invalidated while throttling");
                        self.state = State::Done;
                        return Ok(None);
                    }
                    self.state = State::Fetching {
                        offset: 0,
                        yielded_any: false,
                    };
                }
                State::Fetching {
                    offset,
                    yielded_any,
                } => {
                    if offset >= self.max_offset {
                        debug!(query = %self.query, offset, "offset ceiling reached");
                        self.state = State::Done;
                        return Ok(None);
                    }

                    let items = match self.client.fetch(&self.query, BATCH_SIZE, offset).await {
                        Ok(items) => items,
                        Err(e) => {
                            self.state = State::Done;
                            return Err(e);
                        }
                    };

                    if items.is_empty() {
                        self.state = State::Done;
                        if yielded_any {
                            return Ok(None);
                        }
                        debug!(query = %self.query, "no results, offering fallback");
                        return Ok(Some(vec![Item::fallback(
                            &self.query,
                            self.client.endpoint(),
                        )]));
                    }

                    self.state = State::Fetching {
                        offset: offset.saturating_add(BATCH_SIZE),
                        yielded_any: true,
                    };
                    return Ok(Some(items));
                }
                State::Done => return Ok(None),
            }
        }
    }

    /// Sleeps in small steps; `false` as soon as the session is no longer valid.
    async fn throttle(&self) -> bool {
        for _ in 0..THROTTLE_STEPS {
            tokio::time::sleep(THROTTLE_STEP).await;
            if !(self.is_valid)() {
                return false;
            }
        }
        true
    }

    /// The session as a lazy stream of batches. A fetch error is yielded once and ends the stream.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<Item>, WikiError>> {
        stream::unfold(Some(self), |session| async move {
            let Some(mut session) = session else {
                return None;
            };
            match session.next_batch().await {
                Ok(Some(batch)) => Some((Ok(batch), Some(session))),
                Ok(None) => None,
                Err(e) => Some((Err(e), None)),
            }
        })
    }
}
