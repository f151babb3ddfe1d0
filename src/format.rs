//! Text Parameters Wire Format
//!
//! This module documents the line-oriented parameter format as implemented
//! by this library.
//!
//! # Overview
//!
//! A body is a flat list of named string values, one per line:
//!
//! ```text
//! packet-received: 1024
//! transfer-time: 12.345
//! Extra: extra-field
//! ```
//!
//! There is no nesting, no list syntax, no comments and no escaping.
//!
//! # Grammar
//!
//! ```text
//! line      := name [ ws* ":" ws* value ]
//! name      := 1*namechar
//! value     := *anychar
//! namechar  := %x21-39 / %x3B-7E
//! ```
//!
//! - Lines are separated by `\n`. A `\r` right before the `\n` is dropped.
//! - The line is split at its **first** `:`; any later `:` belongs to the
//!   value, so `F:oo: 3` is the name `F` with the value `oo: 3`.
//! - Spaces and tabs around the name and around the value are trimmed.
//!   Whitespace inside the value is kept; whitespace inside the name is an
//!   error.
//! - A line without `:` is a name-only entry whose value is empty.
//! - Blank lines are ignored.
//! - Names are case-sensitive. When a name repeats, the last line wins.
//!
//! ## Names
//!
//! | Accepted | Rejected |
//! |----------|----------|
//! | `foo`, `packet-received` | `f oo` (inner space) |
//! | `(^^)`, `~!@#$%` | `愛` (non-ASCII) |
//! | `TypeFloat32` | `` (empty) |
//!
//! A rejected name fails the whole body with a format error that quotes the
//! line; no partial result is produced.
//!
//! # Rendering
//!
//! - Entries are written in ascending byte-wise order of their names by
//!   default, so the same map always renders to the same text.
//! - Each line is `name: value` followed by `\n`. An empty value is written
//!   as a bare `name` line unless
//!   [`EmptyValue::Separator`](crate::EmptyValue::Separator) is selected.
//! - Values are written verbatim. A value containing a line terminator
//!   cannot be represented and will not read back as written.
//!
//! # Typed Values
//!
//! | Field type | Text |
//! |------------|------|
//! | `i8`..`i128`, `isize` | base-10, optional sign: `-20` |
//! | `u8`..`u128`, `usize` | base-10, no sign: `20` |
//! | `f32`, `f64` | shortest decimal that reads back exactly: `1.4142` |
//! | `String` | verbatim |
//! | `Option<T>` | as `T` when `Some`; entry omitted when `None` |
//!
//! A value that does not parse as the field's type, overflows its width, or
//! carries a sign an unsigned field cannot hold is a field type error.
