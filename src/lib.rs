//! MCP server exposing the Vocus content platform as two tools:
//! `get_hot_contents` and `search_contents`.

pub mod cli;
pub mod clients;
pub mod core;
pub mod domain;
pub mod infra;
pub mod tools;
