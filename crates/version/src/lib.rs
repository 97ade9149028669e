use libversion::{Flags, VersionRef};
use serde::{Serialize, Deserialize};

/// How letters in a version are read, for projects that use "p" or any
/// letter suffix to mean a patch release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatchStyle {
    #[default]
    Keywords,
    PIsPatch,
    AnyIsPatch,
}

impl PatchStyle {
    pub fn flags(self) -> Flags {
        match self {
            PatchStyle::Keywords => Flags::empty(),
            PatchStyle::PIsPatch => Flags::P_IS_PATCH,
            PatchStyle::AnyIsPatch => Flags::ANY_IS_PATCH,
        }
    }

    fn is_default(&self) -> bool {
        *self == PatchStyle::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    raw: VersionString,
    #[serde(default, skip_serializing_if = "PatchStyle::is_default")]
    patch: PatchStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionString(pub String);

impl VersionString {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialOrd for VersionString {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionString {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        libversion::compare(self.as_str(), other.as_str())
    }
}

impl PartialEq for VersionString {
    fn eq(&self, other: &VersionString) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for VersionString {}

impl From<VersionString> for Version {
    fn from(v: VersionString) -> Self {
        Version { raw: v, patch: PatchStyle::default() }
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Version::new(s)
    }
}

impl From<String> for VersionString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VersionString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Version {

    pub fn new(v: &str) -> Self {
        Self {
            raw: v.into(),
            patch: PatchStyle::default(),
        }
    }

    pub fn with_patch_style(v: &str, patch: PatchStyle) -> Self {
        Self {
            raw: v.into(),
            patch,
        }
    }

    pub fn as_str(&self) -> &str {
        self.raw.as_str()
    }

    pub fn patch_style(&self) -> PatchStyle {
        self.patch
    }

    pub fn flags(&self) -> Flags {
        self.patch.flags()
    }

    /// sorts below this version and every version starting with it
    pub fn lower_bound(&self) -> VersionRef<'_> {
        VersionRef::with_flags(self.as_str(), self.flags() | Flags::LOWER_BOUND)
    }

    /// sorts above this version and every version starting with it
    pub fn upper_bound(&self) -> VersionRef<'_> {
        VersionRef::with_flags(self.as_str(), self.flags() | Flags::UPPER_BOUND)
    }

    pub fn as_version_ref(&self) -> VersionRef<'_> {
        VersionRef::with_flags(self.as_str(), self.flags())
    }
}

impl std::ops::Deref for Version {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl std::ops::Deref for VersionString {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Version) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Version) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Version) -> std::cmp::Ordering {
        self.as_version_ref().cmp(&other.as_version_ref())
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl std::fmt::Display for VersionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
