//! Integration test modules.

mod tracker_flow_test;
