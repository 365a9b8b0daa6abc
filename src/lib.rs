//! chatgrab - save shared ChatGPT conversations as JSON transcripts.
//!
//! The library exposes the extraction pipeline ([`extract`]), page retrieval
//! ([`fetch`]), transcript encoding ([`transcript`]) and the batch runner
//! ([`grab`]) used by the `chatgrab` binary.

pub mod cli;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod files;
pub mod grab;
pub mod transcript;

pub use config::Config;
pub use extract::{extract, ExtractError, ExtractionConfig};
pub use grab::{BatchReport, GrabError, Grabber, Saved};
pub use transcript::Turn;
