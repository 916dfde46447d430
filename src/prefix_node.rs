use std::collections::BTreeMap;
use std::mem;

/// One node of a `PrefixIndex`: the outgoing edges keyed by character and
/// whether the path leading here spells a whole word.
#[derive(Default)]
pub struct PrefixNode {
    pub children: BTreeMap<char, PrefixNode>,
    pub is_terminal: bool,
}

// Tears the subtree down from a worklist so long words don't exhaust the stack.
impl Drop for PrefixNode {
    fn drop(&mut self) {
        let mut pending: Vec<PrefixNode> = mem::take(&mut self.children).into_values().collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(mem::take(&mut node.children).into_values());
        }
    }
}
