//! # trellis
//!
//! A schema-driven UI composition and data-binding engine.
//!
//! trellis represents a user interface as a serializable widget tree and
//! derives runtime artifacts — style strings, bound values, computed states —
//! from declarative schema fragments attached to each node. An editor holds
//! one persisted schema as the source of truth, expands it into an editable
//! tree, folds edits back in, and persists the result.
//!
//! ## Core Systems
//!
//! - **[`schema`]** — Typed schema model: widget families, styles, data
//!   mappings, states, events, components
//! - **[`tree`]** — Slotmap-backed editable tree and the bidirectional
//!   schema ⇄ tree conversion
//! - **[`source`]** — Data-source schema inference over one example payload
//! - **[`binding`]** — Reference-path parsing and the data-mapping evaluator
//! - **[`calc`]** — State calculation: schema export and runtime accessors
//! - **[`style`]** — Style compilation into concrete style strings
//! - **[`form`]** — Typed editor form records and schema materialization
//! - **[`session`]** — The explicit per-editor context object

pub mod binding;
pub mod calc;
pub mod form;
pub mod schema;
pub mod session;
pub mod source;
pub mod style;
pub mod tree;
