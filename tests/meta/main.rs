//! Structural checks that keep `src/` and `tests/unit/` in step
