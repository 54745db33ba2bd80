//! Normalized path types

use std::fmt;

/// A concrete location of exactly one node inside a document
///
/// Ordering compares segment by segment, so sorting in reverse places
/// descendants before their ancestors and higher array indices before lower
/// ones; applying removals in that order never invalidates a later location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    pub(crate) segments: Vec<PathSegment>,
}

/// One step below the root
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    /// Object member (`['name']`)
    Member(String),
    /// Array element (`[3]`)
    Index(usize),
}

impl NormalizedPath {
    /// The root path (`$`)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments below the root
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Path of the containing node together with the final step, `None` for the root
    #[must_use]
    pub fn split_last(&self) -> Option<(NormalizedPath, &PathSegment)> {
        let (last, parent) = self.segments.split_last()?;
        Some((
            NormalizedPath {
                segments: parent.to_vec(),
            },
            last,
        ))
    }

    /// Remainder of this path below `ancestor`, `None` unless `ancestor` is a prefix
    #[must_use]
    pub fn strip_prefix(&self, ancestor: &NormalizedPath) -> Option<NormalizedPath> {
        self.segments
            .strip_prefix(ancestor.segments.as_slice())
            .map(|rest| NormalizedPath::from(rest.to_vec()))
    }

    /// New path one member deeper
    #[must_use]
    pub fn child_member(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Member(name.to_string()));
        Self { segments }
    }

    #[inline]
    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    #[inline]
    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl From<Vec<PathSegment>> for NormalizedPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Member(name) => {
                f.write_str("['")?;
                for c in name.chars() {
                    match c {
                        '\'' => f.write_str("\\'")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\t' => f.write_str("\\t")?,
                        c if u32::from(c) < 0x20 => write!(f, "\\u{:04x}", u32::from(c))?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("']")
            }
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
