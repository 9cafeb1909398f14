//! Node implementation for the Niihau Record Trie.
//!
//! Each node owns its children directly and carries an explicit, optional
//! list of records that terminate at it. Children are kept in a `BTreeMap`
//! so traversal visits them in ascending character order.

use std::collections::BTreeMap;

/// A node in the Niihau Record Trie.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Map of lower-cased characters to child nodes
    pub children: BTreeMap<char, TrieNode>,

    /// Records whose indexed key ends at this node, in insertion order
    pub records: Option<Vec<String>>,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            records: None,
        }
    }

    /// Whether some key ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.records.is_some()
    }

    /// Appends a record to this node, marking it terminal.
    ///
    /// Returns `true` if the node was not terminal before.
    pub fn push_record(&mut self, record: String) -> bool {
        match &mut self.records {
            Some(records) => {
                records.push(record);
                false
            }
            None => {
                self.records = Some(vec![record]);
                true
            }
        }
    }
}
