//! Repository structure checks for the test suite

mod coverage;
