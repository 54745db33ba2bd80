//! Structural mutations
//!
//! A mutation runs in three phases: collect the distinct matched locations,
//! validate that every location has the shape the operation needs, then apply
//! the change deepest location first. Validation happens before any change,
//! so a failed mutation leaves the document untouched.

mod apply;
mod collect;

use std::fmt;

use serde_json::Value;

use crate::config::Configuration;

pub(crate) use apply::{MutationPlan, mutate, plan};

/// Closure replacing a matched value
pub type MapFunction<'f> = dyn Fn(Value, &Configuration) -> Value + 'f;

/// Structural change applied to every matched location
pub(crate) enum Mutation<'f> {
    Set(Value),
    Delete,
    Add(Value),
    Put { key: String, value: Value },
    RenameKey { old_key: String, new_key: String },
    Map(&'f MapFunction<'f>),
}

impl Mutation<'_> {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Mutation::Set(_) => "set",
            Mutation::Delete => "delete",
            Mutation::Add(_) => "add",
            Mutation::Put { .. } => "put",
            Mutation::RenameKey { .. } => "renameKey",
            Mutation::Map(_) => "map",
        }
    }
}

impl fmt::Debug for Mutation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::Set(value) => f.debug_tuple("Set").field(value).finish(),
            Mutation::Delete => f.write_str("Delete"),
            Mutation::Add(value) => f.debug_tuple("Add").field(value).finish(),
            Mutation::Put { key, value } => f
                .debug_struct("Put")
                .field("key", key)
                .field("value", value)
                .finish(),
            Mutation::RenameKey { old_key, new_key } => f
                .debug_struct("RenameKey")
                .field("old_key", old_key)
                .field("new_key", new_key)
                .finish(),
            Mutation::Map(_) => f.write_str("Map(..)"),
        }
    }
}
