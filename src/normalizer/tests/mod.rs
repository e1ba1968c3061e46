//! Tests for row normalization and trip validity rules
