//! Integration test modules for rs-blobfinder.
//!
//! This module organizes all integration tests that verify
//! end-to-end functionality of the scanner.

mod pipeline_tests;
