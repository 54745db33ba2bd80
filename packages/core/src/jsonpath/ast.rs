//! Path expression abstract syntax tree
//!
//! A compiled expression is a flat chain of [`JsonSelector`]s starting at
//! [`JsonSelector::Root`]. Filters carry their own small expression tree.

use std::fmt;

/// Individual selector in a compiled path
#[derive(Debug, Clone, PartialEq)]
pub enum JsonSelector {
    /// Root selector (`$`)
    Root,

    /// Member access (`.name` or `['name']`)
    Child {
        /// Member name
        name: String,
    },

    /// Recursive descent (`..`), applies the rest of the chain at every depth
    RecursiveDescent,

    /// Array element (`[0]`, `[-1]`)
    Index {
        /// Element index, negative values count from the end
        index: i64,
    },

    /// Array slice (`[start:end:step]`)
    Slice {
        start: Option<i64>,
        end: Option<i64>,
        step: Option<i64>,
    },

    /// Wildcard (`.*` or `[*]`)
    Wildcard,

    /// Inline filter (`[?(@.price < 10)]`)
    Filter {
        /// Filter expression tree
        expression: FilterExpression,
    },

    /// Placeholder (`[?]`) bound to the predicate at `slot` in the compiled predicate list
    Predicate {
        slot: usize,
    },

    /// Comma separated selectors inside one bracket (`[0,2]`, `['a','b']`)
    Union {
        selectors: Vec<JsonSelector>,
    },
}

impl JsonSelector {
    /// Whether this selector can only ever produce at most one node
    #[inline]
    #[must_use]
    pub fn is_definite(&self) -> bool {
        matches!(
            self,
            JsonSelector::Root | JsonSelector::Child { .. } | JsonSelector::Index { .. }
        )
    }
}

/// Filter expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpression {
    /// Relative (`@...`) or absolute (`$...`) path; an empty chain is the anchor itself
    Path {
        /// `true` for `@`, `false` for `$`
        relative: bool,
        selectors: Vec<JsonSelector>,
    },

    Literal {
        value: FilterValue,
    },

    Comparison {
        left: Box<FilterExpression>,
        operator: ComparisonOp,
        right: Box<FilterExpression>,
    },

    Logical {
        left: Box<FilterExpression>,
        operator: LogicalOp,
        right: Box<FilterExpression>,
    },

    /// Function call (`length`, `count`, `value`, `match`, `search`)
    Function {
        name: String,
        args: Vec<FilterExpression>,
    },
}

/// Literal values in filter expressions
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    String(String),
    Number(f64),
    Integer(i64),
    Boolean(bool),
    Null,
}

impl FilterValue {
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FilterValue::String(s) => serde_json::Value::String(s.clone()),
            FilterValue::Number(n) => serde_json::Number::from_f64(*n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            FilterValue::Integer(i) => serde_json::Value::from(*i),
            FilterValue::Boolean(b) => serde_json::Value::Bool(*b),
            FilterValue::Null => serde_json::Value::Null,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Equal,
    NotEqual,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            ComparisonOp::Equal => "==",
            ComparisonOp::NotEqual => "!=",
            ComparisonOp::Less => "<",
            ComparisonOp::LessEq => "<=",
            ComparisonOp::Greater => ">",
            ComparisonOp::GreaterEq => ">=",
        };
        f.write_str(symbol)
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        })
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("'")?;
    for ch in text.chars() {
        if ch == '\'' || ch == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{ch}")?;
    }
    f.write_str("'")
}

/// Canonical bracket notation, used for cache signatures and diagnostics
impl fmt::Display for JsonSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonSelector::Root => f.write_str("$"),
            JsonSelector::Child { name } => {
                f.write_str("[")?;
                write_quoted(f, name)?;
                f.write_str("]")
            }
            JsonSelector::RecursiveDescent => f.write_str(".."),
            JsonSelector::Index { index } => write!(f, "[{index}]"),
            JsonSelector::Slice { start, end, step } => {
                f.write_str("[")?;
                if let Some(start) = start {
                    write!(f, "{start}")?;
                }
                f.write_str(":")?;
                if let Some(end) = end {
                    write!(f, "{end}")?;
                }
                if let Some(step) = step {
                    write!(f, ":{step}")?;
                }
                f.write_str("]")
            }
            JsonSelector::Wildcard => f.write_str("[*]"),
            JsonSelector::Filter { expression } => write!(f, "[?({expression})]"),
            JsonSelector::Predicate { .. } => f.write_str("[?]"),
            JsonSelector::Union { selectors } => {
                f.write_str("[")?;
                for (i, selector) in selectors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    let rendered = selector.to_string();
                    let inner = rendered
                        .strip_prefix('[')
                        .and_then(|s| s.strip_suffix(']'))
                        .unwrap_or(&rendered);
                    f.write_str(inner)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpression::Path { relative, selectors } => {
                f.write_str(if *relative { "@" } else { "$" })?;
                for selector in selectors {
                    write!(f, "{selector}")?;
                }
                Ok(())
            }
            FilterExpression::Literal { value } => match value {
                FilterValue::String(s) => write_quoted(f, s),
                FilterValue::Number(n) => write!(f, "{n}"),
                FilterValue::Integer(i) => write!(f, "{i}"),
                FilterValue::Boolean(b) => write!(f, "{b}"),
                FilterValue::Null => f.write_str("null"),
            },
            FilterExpression::Comparison {
                left,
                operator,
                right,
            } => write!(f, "{left} {operator} {right}"),
            FilterExpression::Logical {
                left,
                operator,
                right,
            } => write!(f, "({left} {operator} {right})"),
            FilterExpression::Function { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
