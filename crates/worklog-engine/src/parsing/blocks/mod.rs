//! # Block Parsing
//!
//! Two-phase, single-pass conversion of markdown lines into workspace blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line outside a fence is
//!    classified into a `LineClass` from its own text alone
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` holds the pending
//!    paragraph or fence and emits `Block`s through a `BlockBudget`
//!
//! ## Modules
//!
//! - **`kinds`**: Line syntax with owned delimiters (CodeFence, Heading, BlockQuote, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`budget`**: `BlockBudget` caps output and rewrites the tail on truncation
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code is a raw zone: no classification or stripping inside
//! - A line is either prose or code, never both
//! - Once the budget refuses a block, no further input is consumed

pub mod budget;
pub mod builder;
pub mod classify;
pub mod kinds;

pub use budget::BlockBudget;
pub use builder::{BlockBuilder, ParsedBlocks, code_blocks};
pub use classify::{LineClass, MarkdownLineClassifier};
