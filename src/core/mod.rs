//! Core types: the tool envelope and the failure taxonomy.

pub mod envelope;
pub mod error;
