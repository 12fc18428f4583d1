use indexmap::IndexMap;

use crate::error::Error;

/// Label name -> (defining line index, address), in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Symbols(IndexMap<String, (usize, usize)>);

impl Symbols {
    pub fn new() -> Self {
        Symbols(IndexMap::new())
    }

    /// Binds `name` to `addr`. A name can only be bound once.
    pub fn define(&mut self, name: &str, line_idx: usize, addr: usize) -> Result<(), Error> {
        if let Some((first, _)) = self.0.get(name) {
            return Err(Error::RedefinedLabel(name.to_string(), *first));
        }
        self.0.insert(name.to_string(), (line_idx, addr));
        Ok(())
    }

    pub fn get_val(&self, name: &str) -> Option<usize> {
        self.0.get(name).map(|(_, addr)| *addr)
    }

    pub fn resolve(&self, name: &str) -> Result<usize, Error> {
        self.get_val(name)
            .ok_or_else(|| Error::UndefinedLabel(name.to_string()))
    }

    /// Iterates `(name, line_idx, addr)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize, usize)> {
        self.0
            .iter()
            .map(|(name, (line_idx, addr))| (name.as_str(), *line_idx, *addr))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
