//! # Optimal Leaf Ordering
//!
//! Among the `2^(n-1)` leaf orders consistent with a dendrogram, find the one
//! minimizing the sum of distances between adjacent leaves (Bar-Joseph,
//! Gifford and Jaakkola). `O(n³)` time, `O(n²)` memory.
//!
//! `cost[i][j]` is the cheapest order of the subtree rooted at the lowest
//! common ancestor of leaves `i` and `j` that starts at `i` and ends at `j`.
//! `turn[i][j]` records the leaf of `i`'s side that sits next to the other
//! side in that order.

use crate::algorithms::linkage::Merge;
use crate::domain::errors::StrategyError;
use ro_01_distance_metrics::CondensedMatrix;
use std::ops::Range;

/// Binary tree view of a linkage matrix.
struct Dendrogram {
    /// Children of internal node `n + k`
    children: Vec<(usize, usize)>,
    /// Leaves in left-first depth-first order
    order: Vec<usize>,
    /// Range of `order` covered by each node
    spans: Vec<Range<usize>>,
    n: usize,
}

impl Dendrogram {
    fn new(merges: &[Merge], n: usize) -> Result<Self, StrategyError> {
        if merges.len() + 1 != n {
            return Err(StrategyError::InvalidParameter(format!(
                "{} merges cannot describe {} leaves",
                merges.len(),
                n
            )));
        }
        let children: Vec<(usize, usize)> = merges.iter().map(|m| (m.left, m.right)).collect();
        for (k, &(left, right)) in children.iter().enumerate() {
            if left >= n + k || right >= n + k {
                return Err(StrategyError::InvalidParameter(format!(
                    "merge {k} references a cluster that does not exist yet"
                )));
            }
        }

        let root = 2 * n - 2;
        let mut order = Vec::with_capacity(n);
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if node < n {
                order.push(node);
            } else {
                let (left, right) = children[node - n];
                stack.push(right);
                stack.push(left);
            }
        }
        if order.len() != n {
            return Err(StrategyError::InvalidParameter(
                "linkage does not form a single tree".to_string(),
            ));
        }

        let mut spans = vec![0..0; 2 * n - 1];
        for (pos, &leaf) in order.iter().enumerate() {
            spans[leaf] = pos..pos + 1;
        }
        for (k, &(left, right)) in children.iter().enumerate() {
            let (a, b) = (&spans[left], &spans[right]);
            spans[n + k] = a.start.min(b.start)..a.end.max(b.end);
        }

        Ok(Self {
            children,
            order,
            spans,
            n,
        })
    }

    fn leaves(&self, node: usize) -> &[usize] {
        &self.order[self.spans[node].clone()]
    }

    /// Leaves of the child of `node` that does not contain `leaf`.
    fn opposite(&self, node: usize, leaf: usize, position: &[usize]) -> &[usize] {
        if node < self.n {
            return self.leaves(node);
        }
        let (left, right) = self.children[node - self.n];
        if self.spans[left].contains(&position[leaf]) {
            self.leaves(right)
        } else {
            self.leaves(left)
        }
    }

    /// Child of internal `node` containing `leaf`.
    fn child_with(&self, node: usize, leaf: usize, position: &[usize]) -> (usize, usize) {
        let (left, right) = self.children[node - self.n];
        if self.spans[left].contains(&position[leaf]) {
            (left, right)
        } else {
            (right, left)
        }
    }
}

/// Reorder the leaves of `merges` optimally and return the leaf sequence.
pub fn optimal_leaf_ordering(
    merges: &[Merge],
    distances: &CondensedMatrix,
) -> Result<Vec<usize>, StrategyError> {
    let n = distances.n();
    match n {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![0]),
        _ => {}
    }
    let tree = Dendrogram::new(merges, n)?;

    let mut position = vec![0usize; n];
    for (pos, &leaf) in tree.order.iter().enumerate() {
        position[leaf] = pos;
    }

    let mut cost = vec![0.0f64; n * n];
    let mut turn = vec![0u32; n * n];

    for &(left, right) in &tree.children {
        let right_leaves = tree.leaves(right);
        let right_start = tree.spans[right].start;

        for &i in tree.leaves(left) {
            // best order of `left` from i, then a step to each m on the right
            let inner = tree.opposite(left, i, &position);
            let partial: Vec<(f64, usize)> = right_leaves
                .iter()
                .map(|&m| {
                    let mut best = (f64::INFINITY, inner[0]);
                    for &k in inner {
                        let c = cost[i * n + k] + distances.get(k, m);
                        if c < best.0 {
                            best = (c, k);
                        }
                    }
                    best
                })
                .collect();

            for &j in right_leaves {
                let mut best = (f64::INFINITY, j);
                for &m in tree.opposite(right, j, &position) {
                    let c = partial[position[m] - right_start].0 + cost[m * n + j];
                    if c < best.0 {
                        best = (c, m);
                    }
                }
                let (total, m) = best;
                let k = partial[position[m] - right_start].1;
                cost[i * n + j] = total;
                cost[j * n + i] = total;
                turn[i * n + j] = k as u32;
                turn[j * n + i] = m as u32;
            }
        }
    }

    let root = 2 * n - 2;
    let (left, right) = tree.children[root - n];
    let mut start = tree.leaves(left)[0];
    let mut end = tree.leaves(right)[0];
    let mut best = f64::INFINITY;
    for &i in tree.leaves(left) {
        for &j in tree.leaves(right) {
            if cost[i * n + j] < best {
                best = cost[i * n + j];
                start = i;
                end = j;
            }
        }
    }

    let mut sequence = Vec::with_capacity(n);
    let mut stack = vec![(root, start, end)];
    while let Some((node, s, e)) = stack.pop() {
        if node < n {
            sequence.push(node);
            continue;
        }
        let (first, second) = tree.child_with(node, s, &position);
        let s_end = turn[s * n + e] as usize;
        let e_start = turn[e * n + s] as usize;
        stack.push((second, e_start, e));
        stack.push((first, s, s_end));
    }

    Ok(sequence)
}
