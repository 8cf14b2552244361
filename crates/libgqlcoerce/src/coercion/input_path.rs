/// One step into a nested input value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}
impl std::convert::From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        Self::Field(name.to_string())
    }
}
impl std::convert::From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        Self::Index(idx)
    }
}

/// Locates a position within a nested input value, e.g. `point.tags[2]`.
///
/// The empty path is the root of the value being coerced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct InputPath(Vec<PathSegment>);
impl InputPath {
    pub fn root() -> Self {
        Self(vec![])
    }

    pub fn field(&self, name: impl AsRef<str>) -> Self {
        let mut path = self.clone();
        path.0.push(PathSegment::Field(name.as_ref().to_string()));
        path
    }

    pub fn index(&self, idx: usize) -> Self {
        let mut path = self.clone();
        path.0.push(PathSegment::Index(idx));
        path
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.0.last()
    }

    pub fn segments(&self) -> &[PathSegment] {
        self.0.as_slice()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }
}
impl std::fmt::Display for InputPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if idx == 0 => write!(f, "{name}")?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}
impl<S: Into<PathSegment>> FromIterator<S> for InputPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
