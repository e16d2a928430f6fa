//! Binary search tree for symbol frequency counting.
//!
//! The tree is keyed by character code. Inserting a symbol that is already
//! present increments its count instead of creating a second node, so the
//! tree never holds duplicate keys. There is no deletion and no balancing:
//! tree shape is whatever the insertion order produces, which is fine for
//! the ~40-symbol messages this program analyzes (a monotonically ordered
//! input would degenerate to a linked list, also fine at this scale).
//!
//! # Ownership
//!
//! Child links are `Option<Box<Node>>`: every node is owned by exactly one
//! parent (or by the root slot). No deletion or rebalancing exists, so no
//! shared or back references are needed.
//!
//! # The percentage denominator
//!
//! `frequencies` takes the denominator as an argument rather than using the
//! number of inserted symbols. The historical analysis used a fixed estimate
//! of 40 total symbols regardless of the actual message length, so reported
//! percentages need not sum to 100%. That quirk is preserved deliberately;
//! callers who want exact percentages can pass `len()` themselves.

use std::cmp::Ordering;

/// Default denominator for percentage reporting: the analyst's fixed
/// estimate of the total symbol population, independent of input length.
pub const TOTAL_SYMBOL_ESTIMATE: u32 = 40;

/// A single node: one distinct symbol and how many times it was inserted.
#[derive(Debug, Clone)]
struct Node {
    symbol: char,
    count: u32,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(symbol: char) -> Self {
        Self {
            symbol,
            count: 1,
            left: None,
            right: None,
        }
    }
}

/// One line of the frequency report.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolFrequency {
    /// The distinct symbol
    pub symbol: char,
    /// How many times it was inserted
    pub count: u32,
    /// `100 * count / denominator`, for whatever denominator the caller chose
    pub percentage: f64,
}

/// Unbalanced binary search tree ordered by character code.
///
/// # Invariants
/// - At every node, all symbols in the left subtree compare less than the
///   node's symbol and all symbols in the right subtree compare greater.
/// - No symbol appears in more than one node; repeats increment `count`.
/// - In-order traversal therefore yields symbols in strictly ascending
///   character-code order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTree {
    root: Option<Box<Node>>,
    inserted: u64,
    distinct: u64,
}

impl FrequencyTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a symbol: create a leaf on first sight, bump the count after.
    ///
    /// Recursion depth is bounded by the number of distinct symbols, which
    /// for this program is a few dozen at most.
    pub fn insert(&mut self, symbol: char) {
        self.inserted += 1;
        if Self::insert_node(&mut self.root, symbol) {
            self.distinct += 1;
        }
    }

    /// Returns true if a new node was created.
    fn insert_node(slot: &mut Option<Box<Node>>, symbol: char) -> bool {
        match slot {
            None => {
                *slot = Some(Box::new(Node::new(symbol)));
                true
            }
            Some(node) => match symbol.cmp(&node.symbol) {
                Ordering::Equal => {
                    node.count += 1;
                    false
                }
                Ordering::Less => Self::insert_node(&mut node.left, symbol),
                Ordering::Greater => Self::insert_node(&mut node.right, symbol),
            },
        }
    }

    /// Total number of symbols inserted (counting repeats).
    pub fn len(&self) -> u64 {
        self.inserted
    }

    /// Number of distinct symbols (= number of nodes).
    pub fn distinct_len(&self) -> u64 {
        self.distinct
    }

    /// True if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.inserted == 0
    }

    /// Count recorded for a single symbol (0 if never inserted).
    pub fn count(&self, symbol: char) -> u32 {
        let mut cur = &self.root;
        while let Some(node) = cur {
            match symbol.cmp(&node.symbol) {
                Ordering::Equal => return node.count,
                Ordering::Less => cur = &node.left,
                Ordering::Greater => cur = &node.right,
            }
        }
        0
    }

    /// In-order traversal: `(symbol, count)` pairs in strictly ascending
    /// character-code order.
    pub fn in_order(&self) -> Vec<(char, u32)> {
        let mut out = Vec::with_capacity(self.distinct as usize);
        Self::visit(&self.root, &mut out);
        out
    }

    fn visit(slot: &Option<Box<Node>>, out: &mut Vec<(char, u32)>) {
        if let Some(node) = slot {
            Self::visit(&node.left, out);
            out.push((node.symbol, node.count));
            Self::visit(&node.right, out);
        }
    }

    /// Frequency report rows in ascending character-code order.
    ///
    /// `total_symbols` is the percentage denominator; see the module docs
    /// for why this is a parameter and not `len()`. Read-only: the tree is
    /// not mutated.
    pub fn frequencies(&self, total_symbols: u32) -> Vec<SymbolFrequency> {
        self.in_order()
            .into_iter()
            .map(|(symbol, count)| SymbolFrequency {
                symbol,
                count,
                percentage: count as f64 * 100.0 / total_symbols as f64,
            })
            .collect()
    }
}
