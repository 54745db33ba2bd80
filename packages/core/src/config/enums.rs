//! Evaluation options

use std::fmt;

/// Switches altering how reads and mutations evaluate a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalOption {
    /// Reads return the normalized paths of matches instead of their values
    AsPathList,

    /// Reads always return an array, even for definite paths
    AlwaysReturnList,

    /// Evaluation failures during reads produce `null` (or `[]`) instead of an error
    ///
    /// Invalid arguments and compile errors are still reported.
    SuppressExceptions,

    /// A missing leaf property evaluates to `null` instead of failing
    DefaultPathLeafToNull,

    /// Missing properties in indefinite paths are errors instead of being skipped
    RequireProperties,
}

impl fmt::Display for EvalOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EvalOption::AsPathList => "AS_PATH_LIST",
            EvalOption::AlwaysReturnList => "ALWAYS_RETURN_LIST",
            EvalOption::SuppressExceptions => "SUPPRESS_EXCEPTIONS",
            EvalOption::DefaultPathLeafToNull => "DEFAULT_PATH_LEAF_TO_NULL",
            EvalOption::RequireProperties => "REQUIRE_PROPERTIES",
        })
    }
}
