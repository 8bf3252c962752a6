//! Defines the parsed form of a path expression.
use std::fmt;

/// One atomic step of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object property (e.g., `.name`).
    Key(String),
    /// An array index (e.g., `[0]` or `[-1]`). Negative values count from the
    /// end of the array at the moment the segment is traversed.
    Index(i64),
}

/// A parsed path: an ordered sequence of segments.
///
/// Paths produced by [`crate::parse_path`] always start with a [`PathSegment::Key`].
/// Paths built programmatically from [`Path::root`] may be empty, in which
/// case they address the root value itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// The empty path, addressing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns a new path one property deeper.
    pub fn with_key(&self, key: impl Into<String>) -> Self {
        self.with_segment(PathSegment::Key(key.into()))
    }

    /// Returns a new path one array element deeper.
    pub fn with_index(&self, index: i64) -> Self {
        self.with_segment(PathSegment::Index(index))
    }

    fn with_segment(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
