//! Unit tests for team members and progress aggregation.
