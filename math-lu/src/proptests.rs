//! Property-based tests for the factorization building blocks.
