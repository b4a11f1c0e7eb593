//! Shared helpers for the lock tests.
