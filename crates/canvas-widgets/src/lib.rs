//! Reusable widgets for the **canvas** showcase.
//!
//! Every widget implements [`canvas_core::Component`], so it can be
//! embedded inside any [`canvas_core::Model`] and placed with
//! [`ratatui`] layouts. State flows one way: callers pass data and
//! configuration in, user interactions come back out as messages
//! emitted through commands.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`data_table`] | Tabular display with sorting, pagination, and row selection |
//! | [`input_field`] | Single-line input with label, validation, and password concealment |
//!
//! # Engines
//!
//! The data table's derivation pipeline is split into plain modules so
//! its pieces can be used (and tested) without rendering anything:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cell`] | Typed cell values ([`CellValue`](cell::CellValue)) |
//! | [`column`] | Column descriptors with typed accessors |
//! | [`sort`] | Stable single-column sort order |
//! | [`pagination`] | Page state, slicing, and summary text |
//! | [`row_selection`] | Selected-row identifier set and derived flags |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`focus`] | [`FocusGroup`](focus::FocusGroup) for cycling focus across widgets |
//! | [`key`] | Key-binding helpers |

pub mod cell;
pub mod column;
pub mod data_table;
pub mod focus;
pub mod input_field;
pub mod key;
pub mod pagination;
pub mod row_selection;
pub mod sort;
