//! Onboarding survey backend library.
//!
//! Profile storage, the HTTP API the survey wizard submits to, the wizard's
//! draft rules, and a client for the API.

pub mod api;
pub mod client;
pub mod db;
pub mod draft;
pub mod profile;
