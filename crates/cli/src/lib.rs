//! CLI shell for the devserve launch orchestration library.
//!
//! Thin I/O glue: banner and status printing, the interactive backend menu,
//! logging setup, and the final result envelope. All decisions live in the
//! core crate.

pub mod cli;
pub mod logging;
pub mod output;
pub mod prompt;
