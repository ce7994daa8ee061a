//! grafanactl - A CLI for Grafana's management API
//!
//! grafanactl performs operations against a Grafana installation via its
//! HTTP API: listing, fetching, creating, and deleting folders and
//! dashboards, with output rendered as a table or as JSON.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, resolves settings,
//!   delegates to command handlers)
//! - [`config`] - Settings resolution from config file, environment, and flags
//! - [`client`] - Abstraction over the Grafana HTTP API
//! - [`render`] - Record rendering (table or JSON)
//!
//! # Settings Precedence
//!
//! Every global setting resolves from, in ascending precedence:
//!
//! 1. Built-in defaults
//! 2. Config file (`~/.grafanactl.yaml` or `--config <path>`)
//! 3. Environment variables (`URL`, `APIKEY`, `VERBOSITY`, `OUTPUT`)
//! 4. Command-line flags, when explicitly set

pub mod cli;
pub mod client;
pub mod config;
pub mod render;
