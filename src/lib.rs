//! kapso-observe library interface
//!
//! Command-line access to the observability endpoints of the Kapso Platform
//! API (WhatsApp messages, webhook deliveries, API logs, phone number health).
//!
//! # Module Organization
//!
//! - [`cli`] - Flag parsing and query construction
//! - [`config`] - API configuration resolved from the environment
//! - [`client`] - Authenticated GET requests
//! - [`commands`] - One module per command
//! - [`output`] - Result envelopes
//! - [`core`] - Main execution logic

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod logging;
pub mod output;
pub mod status;
