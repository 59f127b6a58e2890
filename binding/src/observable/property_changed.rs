use std::fmt;

/// Change event broadcast by an [`ObservableModel`](super::ObservableModel).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyChanged {
    /// Any property may have changed; observers should refresh everything.
    All,
    Property(String),
}

impl PropertyChanged {
    pub fn named(property_name: impl Into<String>) -> Self {
        PropertyChanged::Property(property_name.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, PropertyChanged::All)
    }

    /// `None` for the wildcard event.
    pub fn property_name(&self) -> Option<&str> {
        match self {
            PropertyChanged::All => None,
            PropertyChanged::Property(name) => Some(name),
        }
    }

    /// Whether an observer bound to `property_name` has to refresh.
    pub fn affects(&self, property_name: &str) -> bool {
        match self {
            PropertyChanged::All => true,
            PropertyChanged::Property(name) => name == property_name,
        }
    }
}

impl fmt::Display for PropertyChanged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyChanged::All => f.write_str("*"),
            PropertyChanged::Property(name) => f.write_str(name),
        }
    }
}

/// Entry of a property name sequence, `None` standing for a missing name.
pub trait AsPropertyName {
    fn as_property_name(&self) -> Option<&str>;
}

impl AsPropertyName for str {
    fn as_property_name(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsPropertyName for String {
    fn as_property_name(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: AsPropertyName + ?Sized> AsPropertyName for &T {
    fn as_property_name(&self) -> Option<&str> {
        (**self).as_property_name()
    }
}

impl<T: AsPropertyName> AsPropertyName for Option<T> {
    fn as_property_name(&self) -> Option<&str> {
        self.as_ref().and_then(|name| name.as_property_name())
    }
}
