//! Niihau Record Trie Implementation
//!
//! This module provides a trie that maps lower-cased keys to the original
//! records indexed under them, with prefix lookups that gather every record
//! below a prefix in one depth-first crawl.

mod error;
mod node;

pub use error::NiihauTrieError;
use node::TrieNode;

/// Result type for Niihau Trie operations
pub type NiihauTrieResult<T> = Result<T, NiihauTrieError>;

/// Configuration options for the Niihau Record Trie
#[derive(Debug, Clone)]
pub struct NiihauTrieConfig {
    /// Maximum depth allowed in the trie, counted on the lower-cased key
    pub max_depth: usize,
}

impl Default for NiihauTrieConfig {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// Niihau Record Trie stores records under one or more keys and answers
/// prefix queries with every record whose key starts with the prefix.
///
/// Key features:
/// * Keys and prefixes are lower-cased, records keep their original casing
/// * Several records may share one key, and one record may sit under many keys
/// * Deterministic results: children are visited in ascending character order
#[derive(Debug)]
pub struct NiihauTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Configuration options
    config: NiihauTrieConfig,
}

impl NiihauTrie {
    /// Creates a new empty `NiihauTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(NiihauTrieConfig::default())
    }

    /// Creates a new empty `NiihauTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: NiihauTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
        }
    }

    /// Lower-cases a key and checks it against the depth limit.
    ///
    /// Lower-casing may lengthen a key ('İ' becomes two chars), so the limit
    /// applies to the normalized form.
    fn prepare_key(&self, key: &str) -> NiihauTrieResult<String> {
        if key.is_empty() {
            return Err(NiihauTrieError::EmptyKey);
        }

        let processed_key = key.to_lowercase();
        if processed_key.chars().count() > self.config.max_depth {
            return Err(NiihauTrieError::KeyTooLong {
                key: processed_key,
                max_depth: self.config.max_depth,
            });
        }

        Ok(processed_key)
    }

    fn insert_prepared(&mut self, key: &str, record: String) -> bool {
        key.chars()
            .fold(&mut self.root, |node, c| node.children.entry(c).or_default())
            .push_record(record)
    }

    /// Indexes a record under a key.
    ///
    /// The key is normalized before it is walked; the record is stored as given.
    /// Inserting the same record under the same key twice stores it twice.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to index the record under.
    /// * `record` - The record to store at the end of the key path.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the key was new, `false` if it already held records.
    /// * `Err(NiihauTrieError)` - If the key is empty or deeper than `max_depth`.
    pub fn insert<K, V>(&mut self, key: K, record: V) -> NiihauTrieResult<bool>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let key = self.prepare_key(key.as_ref())?;
        Ok(self.insert_prepared(&key, record.into()))
    }

    /// Indexes one record under every key in `keys`, all or nothing.
    ///
    /// Every key is normalized and checked before the first one is inserted,
    /// so a refused key leaves the trie untouched.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - How many of the keys were new.
    /// * `Err(NiihauTrieError)` - The first key that was refused.
    pub fn insert_all<I, K>(&mut self, keys: I, record: &str) -> NiihauTrieResult<usize>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let keys = keys
            .into_iter()
            .map(|key| self.prepare_key(key.as_ref()))
            .collect::<NiihauTrieResult<Vec<_>>>()?;

        let mut new_keys = 0;
        for key in &keys {
            if self.insert_prepared(key, record.to_string()) {
                new_keys += 1;
            }
        }
        Ok(new_keys)
    }

    /// Finds every record indexed under a key starting with `prefix`.
    ///
    /// Records are gathered depth-first: a node's own records come before its
    /// children's, and children are visited in ascending character order.
    /// A record indexed under several matching keys appears once per key.
    /// An empty prefix returns every record in the trie.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to search for.
    ///
    /// # Returns
    ///
    /// The matching records, or an empty `Vec` if no key has this prefix.
    pub fn find_by_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let processed_prefix = prefix.as_ref().to_lowercase();

        let mut result = Vec::new();
        if let Some(node) = self.find_node(&processed_prefix) {
            Self::collect_records(node, &mut result);
        }
        result
    }

    fn find_node(&self, key: &str) -> Option<&TrieNode> {
        key.chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }

    fn collect_records(node: &TrieNode, result: &mut Vec<String>) {
        if let Some(records) = &node.records {
            result.extend(records.iter().cloned());
        }

        for child in node.children.values() {
            Self::collect_records(child, result);
        }
    }

    /// Returns the number of distinct keys in the trie.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn key_count(&self) -> usize {
        Self::count_keys(&self.root)
    }

    fn count_keys(node: &TrieNode) -> usize {
        let own = usize::from(node.is_terminal());
        own + node.children.values().map(Self::count_keys).sum::<usize>()
    }

    /// Checks if the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && !self.root.is_terminal()
    }
}

impl Default for NiihauTrie {
    fn default() -> Self {
        Self::new()
    }
}
