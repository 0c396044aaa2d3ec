//! Shared utilities for the Thyme browser test language
//!
//! Every crate in the workspace reports failures through the
//! [`error::AsThymeError`] trait so that the command line front end can
//! render them uniformly.

pub mod error;

pub use error::{AsThymeError, Context, ErrorLocation, ThymeError};
