mod auth;
mod method;
mod request;
mod result;

pub use auth::AuthScheme;
pub use method::{BodyType, HttpMethod};
pub use request::{ExecuteRequest, KeyValuePair};
pub use result::{ExecutionResult, ResponseHeader};
