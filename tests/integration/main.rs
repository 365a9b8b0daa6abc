//! Integration tests for chatgrab.

mod batch_test;
mod filename_test;
