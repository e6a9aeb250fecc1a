use std::fmt;

/// Qualified function name, e.g. `Time.steps` or `pow`.
///
/// SPL qualifies builtins with a dotted package prefix. The prefix is kept
/// as a path so lookups compare structurally instead of re-splitting strings.
///
/// # Examples
///
/// ```
/// use spl_core::QualifiedName;
///
/// let steps = QualifiedName::from_qualified_string("Time.steps");
/// assert_eq!(steps.simple_name(), "steps");
/// assert_eq!(steps.package_string(), "Time");
/// assert_eq!(steps.to_string(), "Time.steps");
///
/// let pow = QualifiedName::global("pow");
/// assert!(pow.is_global());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Simple name (e.g., "steps", "pow")
    pub name: String,
    /// Package path (e.g., ["Time"]). Empty for unqualified names.
    pub package: Vec<String>,
}

impl QualifiedName {
    /// Create a new qualified name with a package path.
    pub fn new(name: impl Into<String>, package: Vec<String>) -> Self {
        Self {
            name: name.into(),
            package,
        }
    }

    /// Create an unqualified name.
    pub fn global(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: Vec::new(),
        }
    }

    /// Create from a dotted string (e.g., "Spiking.emitSpike").
    ///
    /// The last segment is the name, the rest is the package path. Empty
    /// segments are dropped, so "Time..steps" == "Time.steps".
    pub fn from_qualified_string(s: &str) -> Self {
        let mut parts: Vec<String> = s
            .split('.')
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        match parts.pop() {
            Some(name) => Self {
                name,
                package: parts,
            },
            None => Self::global(""),
        }
    }

    /// Whether the name has no package prefix.
    pub fn is_global(&self) -> bool {
        self.package.is_empty()
    }

    /// Get the simple (unqualified) name.
    pub fn simple_name(&self) -> &str {
        &self.name
    }

    /// Get the package as a dotted string ("" for unqualified names).
    pub fn package_string(&self) -> String {
        self.package.join(".")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.package.join("."), self.name)
        }
    }
}

impl From<&str> for QualifiedName {
    fn from(s: &str) -> Self {
        Self::from_qualified_string(s)
    }
}

impl From<String> for QualifiedName {
    fn from(s: String) -> Self {
        Self::from_qualified_string(&s)
    }
}
