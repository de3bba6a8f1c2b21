//! Tests for the form token service
