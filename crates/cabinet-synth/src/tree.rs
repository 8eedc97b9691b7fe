use crate::error::SynthError;
use crate::poisson::sample_poisson;
use rand::Rng;
use std::collections::BTreeMap;

/// ID of the root node in every non-empty tree.
pub const ROOT: u64 = 0;

/// A randomly grown rooted tree, stored as node ID → child IDs.
///
/// IDs are dense (`0..len`), assigned in creation order, with the root at
/// 0. Child lists preserve attachment order. Every child ID is greater
/// than its parent's, so ascending-ID iteration always visits a parent
/// before any of its children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    nodes: BTreeMap<u64, Vec<u64>>,
}

impl Tree {
    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Child IDs of `id` in attachment order, or None for an unknown node.
    pub fn children(&self, id: u64) -> Option<&[u64]> {
        self.nodes.get(&id).map(Vec::as_slice)
    }

    /// All nodes with their child lists, in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &[u64])> + '_ {
        self.nodes.iter().map(|(&id, children)| (id, children.as_slice()))
    }

    /// Child → parent lookup derived from the child lists. The root has no
    /// entry.
    pub fn parent_map(&self) -> BTreeMap<u64, u64> {
        let mut parents = BTreeMap::new();
        for (&id, children) in &self.nodes {
            for &child in children {
                parents.insert(child, id);
            }
        }
        parents
    }
}

/// Grow a random tree of `total_nodes` nodes whose shape is driven by
/// Poisson(`rate`) depth draws.
///
/// Each non-root node samples a depth, the depths are bucketed into a
/// histogram, and buckets are realized in ascending depth order: every
/// node in a bucket picks a uniformly random parent (with replacement)
/// among the nodes of the *previous* bucket. A sampled depth therefore
/// places a node at the rank of that depth among the distinct sampled
/// values, not at literal graph distance — a depth of 100 lands one level
/// below whatever bucket preceded it. Downstream consumers depend on this
/// shape, so it is load-bearing, not an artifact.
///
/// `total_nodes == 0` returns an empty tree. Larger rates spread the
/// depth histogram over more buckets, yielding deeper, thinner trees.
pub fn build_poisson_tree<R: Rng + ?Sized>(
    rng: &mut R,
    total_nodes: u64,
    rate: f64,
) -> Result<Tree, SynthError> {
    if !(rate.is_finite() && rate >= 0.0) {
        return Err(SynthError::InvalidRate(rate));
    }

    let mut tree = Tree::default();
    if total_nodes == 0 {
        return Ok(tree);
    }

    // Depth histogram for the non-root nodes, iterated in ascending depth.
    let mut depth_counts: BTreeMap<u64, u64> = BTreeMap::new();
    for _ in 1..total_nodes {
        *depth_counts.entry(sample_poisson(rng, rate)?).or_insert(0) += 1;
    }

    tree.nodes.insert(ROOT, Vec::new());
    let mut previous_level: Vec<u64> = vec![ROOT];
    let mut next_id: u64 = 1;

    for count in depth_counts.into_values() {
        let mut current_level = Vec::with_capacity(count as usize);
        for _ in 0..count {
            // Non-empty by construction: the previous bucket produced at
            // least one node, and the first bucket attaches to the root.
            let parent = previous_level[rng.gen_range(0..previous_level.len())];
            tree.nodes.get_mut(&parent).unwrap().push(next_id);
            tree.nodes.insert(next_id, Vec::new());
            current_level.push(next_id);
            next_id += 1;
        }
        previous_level = current_level;
    }

    Ok(tree)
}
