//! Last-write-wins holder for the current analysis.
//!
//! Each analysis request takes a [`RequestTicket`]. When a response arrives,
//! it is accepted only if its ticket belongs to the newest request issued;
//! anything older is dropped, so two payload generations are never mixed
//! into one view.

use crate::errors::Result;
use crate::pipeline::{analyze_payload, AnalyzedPayload};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Accepted(Arc<AnalyzedPayload>),
    /// A newer request was issued after this ticket.
    Stale { ticket: u64, latest: u64 },
}

#[derive(Debug, Default)]
pub struct AnalysisSession {
    latest_issued: u64,
    current: Option<(u64, Arc<AnalyzedPayload>)>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request; every earlier ticket becomes stale.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.latest_issued += 1;
        RequestTicket {
            generation: self.latest_issued,
        }
    }

    /// Offer an already-analyzed payload for `ticket`.
    pub fn complete(&mut self, ticket: RequestTicket, analyzed: AnalyzedPayload) -> Completion {
        if ticket.generation != self.latest_issued {
            tracing::debug!(
                ticket = ticket.generation,
                latest = self.latest_issued,
                "Discarding stale analysis result"
            );
            return Completion::Stale {
                ticket: ticket.generation,
                latest: self.latest_issued,
            };
        }

        let analyzed = Arc::new(analyzed);
        self.current = Some((ticket.generation, Arc::clone(&analyzed)));
        Completion::Accepted(analyzed)
    }

    /// Analyze a raw payload for `ticket` and offer it.
    ///
    /// A payload that fails to parse leaves the current result untouched.
    pub fn complete_with_payload(
        &mut self,
        ticket: RequestTicket,
        payload: &Value,
    ) -> Result<Completion> {
        let analyzed = analyze_payload(payload)?;
        Ok(self.complete(ticket, analyzed))
    }

    pub fn current(&self) -> Option<Arc<AnalyzedPayload>> {
        self.current.as_ref().map(|(_, analyzed)| Arc::clone(analyzed))
    }

    /// Generation of the result currently held, if any.
    pub fn current_generation(&self) -> Option<u64> {
        self.current.as_ref().map(|(generation, _)| *generation)
    }

    /// Drop the current result, e.g. on navigation away.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
