//! Command-line front end: argument definitions, command handlers, and the
//! scripted demo.
//!
//! The library half holds the implementations so black-box tests can drive
//! them; the binary is argument parsing plus dispatch.

pub mod cli;
pub mod commands;
pub mod demo;
