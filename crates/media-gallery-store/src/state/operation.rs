//! Operations a piece of state can be busy with

use std::fmt;

/// Operation in flight on a single entity (gallery or image)
///
/// There is no `Add`: an entity only enters the state once it was created,
/// so creation is tracked at collection level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityOperation {
    Delete,
    Update,
    Fetch,
}

/// Operation in flight on a whole collection
///
/// There is no `Update` because updates always target one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionOperation {
    Add,
    Delete,
    Fetch,
}

/// Operation in flight on the scratch image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScratchOperation {
    Add,
    Delete,
}

impl fmt::Display for EntityOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityOperation::Delete => "delete",
            EntityOperation::Update => "update",
            EntityOperation::Fetch => "fetch",
        })
    }
}

impl fmt::Display for CollectionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CollectionOperation::Add => "add",
            CollectionOperation::Delete => "delete",
            CollectionOperation::Fetch => "fetch",
        })
    }
}

impl fmt::Display for ScratchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScratchOperation::Add => "add",
            ScratchOperation::Delete => "delete",
        })
    }
}
