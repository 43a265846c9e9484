// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/tests/mod.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: Tests for envelope parsing, canonical rendering, artifacts, key loading, verifier backends and the full pipeline

#[cfg(test)]
mod support;
#[cfg(test)]
mod config_tests;
