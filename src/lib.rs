//! # buildwatch
//!
//! Polls configured git repositories on a fixed interval, pulls the tracked
//! branch, and runs a build command when new commits arrive (or when the
//! repository is marked for forced updates). Build start and outcome are
//! reported by mail.
//!
//! The per-repository pass lives in [`core::watcher::process_repo`]:
//! ensure the local clone exists, pull and compare HEAD, then build and
//! notify when something changed.

pub mod cli;
pub mod config;
pub mod core;
pub mod exec;
pub mod git;
pub mod logging;
pub mod notifications;
