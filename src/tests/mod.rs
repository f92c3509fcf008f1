//! Unit tests for the pipeline components

mod extent_tests;
mod reconciler_tests;
mod session_store_tests;
mod change_detector_tests;
mod report_tests;
mod config_tests;
