//! proxima-observe: vendor-neutral observability ABI.
//!
//! Core crates depend only on these traits and event types. Backends live
//! elsewhere; the index defines the event shape, not the transport.

use std::sync::{Arc, Mutex, PoisonError};

/// Sink for structured index events.
pub trait GraphObserver: Send + Sync {
    fn emit(&self, evt: GraphEvent);
}

/// Typed events emitted by the graph index.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphEvent {
    /// A bidirectional edge was created during insertion.
    EdgeCreated(EdgeEvt),
}

/// One edge wired between a newly inserted node and an existing neighbor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeEvt {
    /// Caller-supplied id of the newly inserted node.
    pub node: u64,
    /// Caller-supplied id of the neighbor it was connected to.
    pub neighbor: u64,
    /// Graph level the edge lives at.
    pub level: usize,
}

/// A do-nothing observer for tests and users who don't care about telemetry.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl GraphObserver for NoopObserver {
    fn emit(&self, _evt: GraphEvent) {}
}

/// An observer that captures every event in memory, for tests.
#[derive(Clone, Default)]
pub struct MemoryObserver {
    events: Arc<Mutex<Vec<GraphEvent>>>,
}

impl MemoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events emitted so far, in order.
    pub fn events(&self) -> Vec<GraphEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl GraphObserver for MemoryObserver {
    fn emit(&self, evt: GraphEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(evt);
    }
}
