use std::{fmt, sync::Arc};

/// The identifier of an image being packed.
///
/// Shelfpack never interprets names. They're carried through packing so that
/// consumers can associate placements back to their own files, and they're
/// cheap to clone since rotated copies of every image get built during
/// packing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageName(Arc<str>);

impl From<&str> for ImageName {
    fn from(name: &str) -> Self {
        ImageName(name.into())
    }
}

impl From<String> for ImageName {
    fn from(name: String) -> Self {
        ImageName(name.into())
    }
}

impl AsRef<str> for ImageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
