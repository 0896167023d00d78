//! ilars-core
//!
//! Pure domain types for the iLARS questionnaire pipeline: answers, submission
//! payloads, chart series points, and the questionnaire schedule vocabulary.
//! No I/O and no HTTP — this is the shared vocabulary of the iLARS system.

pub mod models;
