//! Build and run Netdisco in Docker from a fork or feature branch.
//!
//! The workflow is:
//! - clone or update the `netdisco-docker` packaging repository
//! - clone or update a `netdisco` fork at the requested branch
//! - `docker compose build` with `COMMITTISH` and `GIT_URL` build arguments
//! - optionally `docker compose up -d`

pub mod command_utils;
pub mod config;
pub mod error;
pub mod logging;
pub mod quickstart;
pub mod repo;
pub mod system_config;
