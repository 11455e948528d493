use std::{env, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::error::{UnparseError, UnparseResult};

/// A Ruby version number, `major.minor[.patch]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = UnparseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || UnparseError::UnsupportedDialect(s.to_string());
        let parts = s
            .trim()
            .split('.')
            .map(|part| part.parse::<u32>().map_err(|_| invalid()))
            .collect::<UnparseResult<Vec<_>>>()?;

        match parts.as_slice() {
            [major, minor] => Ok(Version::new(*major, *minor, 0)),
            [major, minor, patch] => Ok(Version::new(*major, *minor, *patch)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Version {
    type Error = UnparseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.to_string()
    }
}

/// The grammar dialects with their own rule stratum, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Dialect {
    Ruby2_6,
    Ruby2_7,
    Ruby2_7_2,
    Ruby3_0,
    Ruby3_1,
}

impl Dialect {
    /// Half-open version range `[start, end)` served by this dialect.
    pub const fn range(&self) -> (Version, Version) {
        match self {
            Dialect::Ruby2_6 => (Version::new(2, 6, 0), Version::new(2, 7, 0)),
            Dialect::Ruby2_7 => (Version::new(2, 7, 0), Version::new(2, 7, 2)),
            Dialect::Ruby2_7_2 => (Version::new(2, 7, 2), Version::new(3, 0, 0)),
            Dialect::Ruby3_0 => (Version::new(3, 0, 0), Version::new(3, 1, 0)),
            Dialect::Ruby3_1 => (Version::new(3, 1, 0), Version::new(4, 0, 0)),
        }
    }

    pub fn contains(&self, version: &Version) -> bool {
        let (start, end) = self.range();
        start <= *version && *version < end
    }

    pub fn for_version(version: &Version) -> UnparseResult<Self> {
        Dialect::iter()
            .find(|d| d.contains(version))
            .ok_or_else(|| UnparseError::UnsupportedDialect(version.to_string()))
    }

    pub fn latest() -> Self {
        Dialect::Ruby3_1
    }

    /// The dialect this one is layered on.
    pub fn parent(&self) -> Option<Dialect> {
        match self {
            Dialect::Ruby2_6 => None,
            Dialect::Ruby2_7 => Some(Dialect::Ruby2_6),
            Dialect::Ruby2_7_2 => Some(Dialect::Ruby2_7),
            Dialect::Ruby3_0 => Some(Dialect::Ruby2_7_2),
            Dialect::Ruby3_1 => Some(Dialect::Ruby3_0),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.range().0)
    }
}

/// Options for an unparse call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Version of the grammar that produced the tree.
    pub dialect: Version,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dialect: Dialect::latest().range().0,
        }
    }
}

impl Options {
    pub fn new(dialect: Version) -> Self {
        Self { dialect }
    }

    /// Reads `RBSRC_DIALECT`, falling back to `RUBY_VERSION`.
    pub fn from_env() -> Self {
        let mut options = Self::default();

        if let Some(raw) = env::var("RBSRC_DIALECT").ok().or_else(|| env::var("RUBY_VERSION").ok()) {
            match raw.parse::<Version>() {
                Ok(version) => options.dialect = version,
                Err(_) => {
                    tracing::warn!(value = %raw, default = %options.dialect, "Invalid dialect version, using default");
                }
            }
        }

        options
    }
}
