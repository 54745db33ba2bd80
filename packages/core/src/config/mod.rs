//! Configuration
//!
//! [`Configuration`] is immutable: every derivation helper returns a new value
//! and leaves the receiver untouched. Clones share one allocation.

mod builders;
mod defaults;
mod enums;
mod types;

pub use builders::ConfigurationBuilder;
pub use enums::EvalOption;
pub use types::Configuration;
