//! Unit tests for the moodboard engine.

mod snapshot_tests;
