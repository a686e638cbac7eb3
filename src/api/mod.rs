pub mod error;
pub mod fetch;
pub mod types;
pub mod xhr;

pub use error::{ActionError, ErrorKind, StatusMessages};
pub use types::{Post, PostDraft};
pub use xhr::{XhrRequest, XhrResponse};
