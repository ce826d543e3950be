use indexmap::IndexMap;

/// Code assigned to the first identifier of a scan.
pub const FIRST_CODE: u32 = 100;

/// An interned identifier and its code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Symbol {
    pub name: String,
    pub code: u32,
}

/// Identifier interning table.
///
/// Each distinct name gets the next sequential code on first sight, starting
/// at [`FIRST_CODE`]. Entries are never removed, and iteration follows
/// first-appearance order.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    codes: IndexMap<String, u32>,
    next_code: u32,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            codes: IndexMap::new(),
            next_code: FIRST_CODE,
        }
    }

    /// Look up the code for `name`, allocating a new one if it has not been seen.
    pub fn code_for(&mut self, name: &str) -> u32 {
        if let Some(&code) = self.codes.get(name) {
            return code;
        }
        let code = self.next_code;
        self.next_code += 1;
        self.codes.insert(name.to_string(), code);
        code
    }

    /// Look up without allocating.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.codes.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.codes.iter().map(|(name, &code)| (name.as_str(), code))
    }

    pub fn symbols(&self) -> Vec<Symbol> {
        self.iter()
            .map(|(name, code)| Symbol {
                name: name.to_string(),
                code,
            })
            .collect()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
