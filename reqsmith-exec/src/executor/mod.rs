pub mod auth;
mod engine;
pub mod failure;
pub mod history;
pub mod http;
mod request;
mod response;
pub mod source;

pub use engine::{Executor, ExecutorConfig};
pub use failure::EngineError;
pub use history::{ChannelHistorySink, HistoryEntry, HistoryError, HistorySink, NoOpHistorySink};
pub use http::{
    HttpClient, RawResponse, ReqwestHttpClient, TransportConfig, TransportError, TransportRequest,
};
pub use request::build_request;
pub use response::normalize;
pub use source::{NoEnvironments, StaticVariableSource, VariableSource, VariableSourceError};
