//! Property-based tests for classifier totality and grid invariants

mod table_invariants;
