//! Workspace-level integration tests for fibref.
