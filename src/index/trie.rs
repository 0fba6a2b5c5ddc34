use ahash::AHashMap;

#[derive(Debug)]
struct TrieNode<T> {
    children: AHashMap<char, TrieNode<T>>,
    values: Vec<T>,
}

impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        Self {
            children: AHashMap::new(),
            values: Vec::new(),
        }
    }
}

/// A character trie mapping whole keys to the values inserted under them.
///
/// Lookups are exact: [`Trie::search`] only returns values stored at the node where
/// the full key ends. Keys are used as given, so callers normalize casing and
/// whitespace before inserting or searching.
#[derive(Debug)]
pub struct Trie<T> {
    root: TrieNode<T>,
    len: usize,
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Trie<T> {
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            len: 0,
        }
    }

    /// Appends `value` under `key`. Repeated inserts accumulate; nothing is replaced or deduplicated.
    pub fn insert(&mut self, key: &str, value: T) {
        let mut node = &mut self.root;
        for ch in key.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.values.push(value);
        self.len += 1;
    }

    /// Returns the values stored under exactly `key`, in insertion order.
    pub fn search(&self, key: &str) -> &[T] {
        let mut node = &self.root;
        for ch in key.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return &[],
            }
        }
        &node.values
    }

    /// Total number of stored values, counting duplicates.
    pub fn count(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every `(key, value)` pair, keys in lexicographic character order.
    pub fn all_items(&self) -> Vec<(String, &T)> {
        let mut items = Vec::with_capacity(self.len);
        let mut path = String::new();
        Self::collect(&self.root, &mut path, &mut items);
        items
    }

    fn collect<'a>(node: &'a TrieNode<T>, path: &mut String, items: &mut Vec<(String, &'a T)>) {
        items.extend(node.values.iter().map(|value| (path.clone(), value)));

        let mut edges: Vec<_> = node.children.iter().collect();
        edges.sort_by_key(|(ch, _)| **ch);
        for (ch, child) in edges {
            path.push(*ch);
            Self::collect(child, path, items);
            path.pop();
        }
    }
}
