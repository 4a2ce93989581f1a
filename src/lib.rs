//! # rex
//!
//! A parser for a compact regex dialect, with ASCII parse-tree diagrams.
//!
//! The crate is split in two halves: a construction layer that assembles a
//! lexer/parser pair with a pluggable error-reporting strategy (see
//! [`pattern::builder`] and [`pattern::listener`]), and a renderer that
//! turns the resulting parse tree into a filesystem-listing style diagram
//! (see [`pattern::diagram`]).

pub mod pattern;
