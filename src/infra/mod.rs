//! Infrastructure layer
//!
//! Process execution for the external pbuilder tool.

pub mod pbuilder;
