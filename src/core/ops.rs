//! Operation descriptors
//!
//! The three pbuilder operations differ only in name and whether the base
//! archive is checked before invocation, so they are described by a table
//! and handled by one dispatcher.

/// One pbuilder operation the wrapper can forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Operation name as passed to pbuilder
    pub name: &'static str,
    /// Whether an existing base archive blocks the run (without --force)
    pub requires_archive_check: bool,
}

/// All supported operations
pub const OPERATIONS: &[Operation] = &[
    Operation {
        name: "create",
        requires_archive_check: true,
    },
    Operation {
        name: "update",
        requires_archive_check: false,
    },
    Operation {
        name: "login",
        requires_archive_check: false,
    },
];

/// Look up an operation by name
pub fn find(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}
