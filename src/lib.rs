//! LubaUI component lookup over the Model Context Protocol.
//!
//! The [`search`] module holds the ranker; [`catalog`] holds the records it
//! ranks; [`service`] exposes both as MCP tools.

pub mod catalog;
pub mod search;
pub mod service;

pub use service::LubaMcpService;
