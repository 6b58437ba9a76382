//! Unit test modules.

mod calendar_test;
mod progression_test;
mod stats_test;
