/// Display name the release notes use for the Windows distribution.
/// Windows versions get their own display simplification.
pub const WINDOWS_NAME: &str = "Windows";

/// An operating system variant as listed by one release line's support matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub id: String,
    pub name: String,
    pub link: Option<String>,
    pub lifecycle: Option<String>,
    pub architectures: Vec<String>,
    /// Currently supported versions, in the order the release notes list them
    pub supported_versions: Vec<String>,
    /// Versions that used to be supported by this release line
    pub unsupported_versions: Vec<String>,
}

impl Distribution {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            link: None,
            lifecycle: None,
            architectures: Vec::new(),
            supported_versions: Vec::new(),
            unsupported_versions: Vec::new(),
        }
    }

    pub fn with_supported_versions<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_versions = versions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_unsupported_versions<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unsupported_versions = versions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_architectures<I, S>(mut self, architectures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.architectures = architectures.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_lifecycle(mut self, lifecycle: impl Into<String>) -> Self {
        self.lifecycle = Some(lifecycle.into());
        self
    }

    pub fn is_windows(&self) -> bool {
        self.name == WINDOWS_NAME
    }

    pub fn supports(&self, version: &str) -> bool {
        self.supported_versions.iter().any(|v| v == version)
    }

    pub fn lists(&self, version: &str) -> bool {
        self.supports(version) || self.unsupported_versions.iter().any(|v| v == version)
    }
}

/// A grouping of related distributions (e.g. "Linux", "Windows")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub name: String,
    pub distributions: Vec<Distribution>,
}

impl Family {
    pub fn new(name: impl Into<String>, distributions: Vec<Distribution>) -> Self {
        Self {
            name: name.into(),
            distributions,
        }
    }
}

/// The supported-OS matrix of one release line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportMatrix {
    pub channel_version: String,
    pub families: Vec<Family>,
}

impl SupportMatrix {
    pub fn new(channel_version: impl Into<String>, families: Vec<Family>) -> Self {
        Self {
            channel_version: channel_version.into(),
            families,
        }
    }

    /// Iterates every distribution together with the name of its family
    pub fn distributions(&self) -> impl Iterator<Item = (&str, &Distribution)> {
        self.families.iter().flat_map(|family| {
            family
                .distributions
                .iter()
                .map(move |distribution| (family.name.as_str(), distribution))
        })
    }

    pub fn distribution_count(&self) -> usize {
        self.families.iter().map(|f| f.distributions.len()).sum()
    }
}
