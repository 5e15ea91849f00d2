//! Integration tests driving the full app surface.

mod deletion_tests;
mod drag_tests;
mod theming_tests;
