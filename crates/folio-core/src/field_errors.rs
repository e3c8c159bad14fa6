use crate::ProjectField;

use std::collections::BTreeMap;

/// Inline validation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ProjectField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message unless the field already has one.
    pub fn insert<S: Into<String>>(&mut self, field: ProjectField, message: S) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: ProjectField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ProjectField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Messages in form declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ProjectField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}
