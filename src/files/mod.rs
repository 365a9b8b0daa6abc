//! File naming for saved transcripts.

pub mod filename;
