//! Cross-component scenario tests exercised through [`super::Engine`].
//! Per-component unit tests (levels, the dual-indexed map, the registry)
//! live inline next to the code they cover.
