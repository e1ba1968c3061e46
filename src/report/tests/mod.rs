//! Tests for report finalization and file output
