use crate::ast::{ClassItem, PatternNode, RepeatKind};

/// Match the whole text against a parsed pattern, anchored at both ends.
///
/// The continuation passed down the tree answers "can the rest of the
/// pattern succeed from this end position"; at the top level the rest of
/// the pattern is empty, so the match must land exactly on the end of the
/// text.
pub fn is_match(root: &PatternNode, text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    match_node(root, &chars, 0, &|end| end == chars.len())
}

// Backtracking worst case is exponential in the pattern for pathological
// repetition/alternation mixes. Accepted trade-off; no memoization.
fn match_node(node: &PatternNode, input: &[char], pos: usize, k: &dyn Fn(usize) -> bool) -> bool {
    match node {
        PatternNode::Literal(c) => pos < input.len() && input[pos] == *c && k(pos + 1),
        PatternNode::AnyChar => pos < input.len() && k(pos + 1),
        PatternNode::CharClass { items, negated } => {
            pos < input.len()
                && (items.iter().any(|item| item.contains(input[pos])) != *negated)
                && k(pos + 1)
        }
        PatternNode::StartAnchor => pos == 0 && k(pos),
        PatternNode::EndAnchor => pos == input.len() && k(pos),
        PatternNode::Concat(nodes) => match_seq(nodes, input, pos, k),
        // Logical "exists": a branch is abandoned only after every
        // backtracking choice inside it has failed against k.
        PatternNode::Alternation(branches) => {
            branches.iter().any(|branch| match_node(branch, input, pos, k))
        }
        PatternNode::Repeat { node, kind } => match kind {
            RepeatKind::ZeroOrMore => match_repeat(node, input, pos, k),
            // One mandatory occurrence, then the star loop.
            RepeatKind::OneOrMore => {
                match_node(node, input, pos, &|p| match_repeat(node, input, p, k))
            }
            RepeatKind::ZeroOrOne => match_node(node, input, pos, k) || k(pos),
        },
        PatternNode::Group(inner) => match_node(inner, input, pos, k),
    }
}

/// Match a sequence of nodes: each node's continuation is the rest of the
/// sequence, and the last node falls through to the outer continuation.
fn match_seq(nodes: &[PatternNode], input: &[char], pos: usize, k: &dyn Fn(usize) -> bool) -> bool {
    match nodes.split_first() {
        None => k(pos),
        Some((head, tail)) => match_node(head, input, pos, &|p| match_seq(tail, input, p, k)),
    }
}

/// Greedy zero-or-more loop: prefer one more occurrence of `child`, fall
/// back to the outer continuation only when the longer attempt fails all
/// the way down. The `p > pos` guard stops the loop from re-entering on a
/// zero-width child match (e.g. `(a?)*`), which would otherwise recurse
/// forever.
fn match_repeat(
    child: &PatternNode,
    input: &[char],
    pos: usize,
    k: &dyn Fn(usize) -> bool,
) -> bool {
    if match_node(child, input, pos, &|p| {
        p > pos && match_repeat(child, input, p, k)
    }) {
        return true;
    }
    k(pos)
}
