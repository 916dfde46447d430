use crate::prefix_node::PrefixNode;

/// Character trie over a static dictionary.
///
/// Words are added with [`insert`](PrefixIndex::insert) while the dictionary
/// loads, after which the index is only queried. Children are kept in
/// ascending `char` order, so [`words_with_prefix`](PrefixIndex::words_with_prefix)
/// returns its words in lexicographic order.
///
/// The empty string is never a word: inserting it does nothing and
/// `contains_word("")` is false. Asking for words with the empty prefix
/// returns the whole dictionary.
#[derive(Default)]
pub struct PrefixIndex {
    root: PrefixNode,
    words_count: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self {
            root: PrefixNode::default(),
            words_count: 0,
        }
    }

    /// Adds `word`, creating a node for every character not already on the
    /// path. Inserting a word twice leaves the index unchanged.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }

        if !node.is_terminal {
            node.is_terminal = true;
            self.words_count += 1;
        }
    }

    /// True iff `word` itself was inserted, not merely a longer word starting
    /// with it.
    pub fn contains_word(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        self.find(word).map_or(false, |node| node.is_terminal)
    }

    /// Every inserted word starting with `prefix` (including `prefix` itself
    /// when it was inserted), in lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();

        if let Some(node) = self.find(prefix) {
            let mut word = prefix.to_string();
            collect_words(node, &mut word, &mut words);
        }

        words
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.words_count
    }

    pub fn is_empty(&self) -> bool {
        self.words_count == 0
    }

    /// Number of nodes, root included.
    pub fn nodes_count(&self) -> usize {
        count_nodes(&self.root)
    }

    fn find(&self, prefix: &str) -> Option<&PrefixNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }
}

impl<'a> Extend<&'a str> for PrefixIndex {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<'a> std::iter::FromIterator<&'a str> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut index = Self::new();
        index.extend(words);
        index
    }
}

// Pre-order: a word is emitted before any longer word continuing it. Walks
// with a stack of child iterators, one per level below `node`.
fn collect_words(node: &PrefixNode, word: &mut String, words: &mut Vec<String>) {
    if node.is_terminal {
        words.push(word.clone());
    }

    let mut levels = vec![node.children.iter()];

    while let Some(children) = levels.last_mut() {
        match children.next() {
            Some((c, child)) => {
                word.push(*c);
                if child.is_terminal {
                    words.push(word.clone());
                }
                levels.push(child.children.iter());
            }
            None => {
                levels.pop();
                if !levels.is_empty() {
                    word.pop();
                }
            }
        }
    }
}

fn count_nodes(root: &PrefixNode) -> usize {
    let mut count = 0;
    let mut pending = vec![root];

    while let Some(node) = pending.pop() {
        count += 1;
        pending.extend(node.children.values());
    }

    count
}
