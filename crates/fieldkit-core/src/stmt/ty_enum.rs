use super::Type;

/// A closed set of labels.
///
/// Enumerations resolve to their label type rather than to the storage
/// representation backing them, so downstream schema generators can emit a
/// closed-choice definition.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TypeEnum {
    /// Declared name of the enumeration
    pub name: String,

    /// Labels in declaration order
    pub labels: Vec<String>,
}

impl TypeEnum {
    pub fn new<I, S>(name: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

impl From<TypeEnum> for Type {
    fn from(value: TypeEnum) -> Self {
        Self::Enum(value)
    }
}
