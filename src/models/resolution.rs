//! Resolution request and result types.

/// Input to the resolver: an entity name plus its current icon reference, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveRequest {
    pub name: String,
    pub current_icon: Option<String>,
}

impl ResolveRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), current_icon: None }
    }

    pub fn with_current_icon(mut self, icon: impl Into<String>) -> Self {
        self.current_icon = Some(icon.into());
        self
    }
}

/// Outcome of a resolution: keep the entity's icon, or apply a new reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No replacement: the name was empty, policy forbade it, or no entry matched
    Unchanged,
    /// Replace the entity's icon with this reference
    Replaced(String),
}

impl Resolution {
    /// The new icon reference, or `None` when nothing changes.
    pub fn icon(&self) -> Option<&str> {
        match self {
            Resolution::Replaced(icon) => Some(icon),
            Resolution::Unchanged => None,
        }
    }

    pub fn is_replaced(&self) -> bool {
        matches!(self, Resolution::Replaced(_))
    }

    pub fn into_icon(self) -> Option<String> {
        match self {
            Resolution::Replaced(icon) => Some(icon),
            Resolution::Unchanged => None,
        }
    }
}
