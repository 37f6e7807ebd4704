#![forbid(unsafe_code)]

//! Request execution engine for reqsmith.
//!
//! The model types live in `reqsmith-core`; this crate owns everything that
//! touches the network: auth application, request building, the pooled
//! transport behind the [`HttpClient`] seam, response normalization, and the
//! guarantee that [`Executor::execute`] returns a result for every input
//! instead of ever surfacing an error.

pub mod executor;

pub use crate::executor::{
    ChannelHistorySink, EngineError, Executor, ExecutorConfig, HistoryEntry, HistoryError,
    HistorySink, HttpClient, NoEnvironments, NoOpHistorySink, RawResponse, ReqwestHttpClient,
    StaticVariableSource, TransportConfig, TransportError, TransportRequest, VariableSource,
    VariableSourceError,
};
