use arch::mem::{PREDEFINED, VAR_BASE};
use indexmap::IndexMap;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Predefined,
    /// ROM address of the instruction after `(NAME)`
    Label,
    /// RAM slot handed out by [`SymbolTable::next_available_address`]
    Variable,
}

/// Symbol name -> address. Names are case-sensitive and never rebound.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    map: IndexMap<String, (Kind, u16)>,
    next_var: u16,
}

impl SymbolTable {
    pub fn new() -> Self {
        let map = PREDEFINED
            .iter()
            .map(|(name, addr)| (name.to_string(), (Kind::Predefined, *addr)))
            .collect();
        SymbolTable {
            map,
            next_var: VAR_BASE,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn get_address(&self, name: &str) -> Result<u16, Error> {
        self.map
            .get(name)
            .map(|(_, addr)| *addr)
            .ok_or_else(|| Error::UndefinedSymbol(name.to_string()))
    }

    pub fn get_kind(&self, name: &str) -> Option<Kind> {
        self.map.get(name).map(|(kind, _)| *kind)
    }

    /// Refuses to rebind a name that is already present.
    pub fn add_entry(&mut self, name: &str, kind: Kind, address: u16) -> Result<(), Error> {
        if self.contains(name) {
            return Err(Error::RedefinedLabel(name.to_string()));
        }
        self.map.insert(name.to_string(), (kind, address));
        Ok(())
    }

    pub fn next_available_address(&mut self) -> u16 {
        let addr = self.next_var;
        self.next_var += 1;
        addr
    }

    /// Labels and variables in the order they were added.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Kind, u16)> {
        self.map
            .iter()
            .skip(PREDEFINED.len())
            .map(|(name, (kind, addr))| (name.as_str(), *kind, *addr))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_symbols() {
        let table = SymbolTable::new();
        assert_eq!(table.get_address("SP").unwrap(), 0);
        assert_eq!(table.get_address("THAT").unwrap(), 4);
        assert_eq!(table.get_address("R13").unwrap(), 13);
        assert_eq!(table.get_address("SCREEN").unwrap(), 16384);
        assert_eq!(table.get_address("KBD").unwrap(), 24576);
        assert_eq!(table.get_kind("R0"), Some(Kind::Predefined));
        assert_eq!(table.entries().count(), 0);
    }

    #[test]
    fn names_are_case_sensitive() {
        let table = SymbolTable::new();
        assert!(table.contains("SP"));
        assert!(!table.contains("sp"));
        assert!(matches!(
            table.get_address("sp"),
            Err(Error::UndefinedSymbol(_))
        ));
    }

    #[test]
    fn variable_addresses_count_up_from_16() {
        let mut table = SymbolTable::new();
        assert_eq!(table.next_available_address(), 16);
        assert_eq!(table.next_available_address(), 17);
        assert_eq!(table.next_available_address(), 18);
    }

    #[test]
    fn entries_are_never_rebound() {
        let mut table = SymbolTable::new();
        table.add_entry("LOOP", Kind::Label, 4).unwrap();
        assert!(matches!(
            table.add_entry("LOOP", Kind::Label, 9),
            Err(Error::RedefinedLabel(_))
        ));
        assert!(table.add_entry("R1", Kind::Label, 9).is_err());
        assert_eq!(table.get_address("LOOP").unwrap(), 4);
        assert_eq!(
            table.entries().collect::<Vec<_>>(),
            vec![("LOOP", Kind::Label, 4)]
        );
    }
}
