pub mod commands;
pub mod contracts;
pub mod error;
pub mod frame;
pub mod pipeline;
pub mod vocab;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{RecapError, RecapResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
