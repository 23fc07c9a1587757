//! End-to-end registration scenarios
