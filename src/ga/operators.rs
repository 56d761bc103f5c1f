//! Permutation-preserving genetic operators.
//!
//! Both operators work on `&[usize]` tours and always return permutations
//! when given permutations.
//!
//! - [`pmx_crossover`] (PMX): Goldberg & Lingle (1985), preserves absolute position
//! - [`shuffle_indexes`]: per-gene probabilistic swap with another position
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use std::collections::HashMap;

use rand::Rng;

use super::types::{CrossoverOperator, MutationOperator};

// ============================================================================
// Crossover
// ============================================================================

/// Partially Matched Crossover (PMX) with random cut points.
///
/// Draws cut points `0 <= a < b < n` uniformly and delegates to
/// [`pmx_with_cuts`]. Parents shorter than 2 are returned unchanged.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn pmx_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let (a, b) = cut_points(n, rng);
    pmx_with_cuts(parent1, parent2, a, b)
}

/// PMX with explicit cut points; the matched segment is `[a, b)`.
///
/// # Algorithm (Goldberg & Lingle, 1985)
///
/// 1. Copy parent1's segment into child1 at the same positions
/// 2. Every other position takes parent2's gene there; if that gene is
///    already in the segment, replace it with the gene parent2 holds at
///    the segment position where parent1 has it, and repeat
/// 3. Child2 is built the same way with the parents swapped
///
/// Gene values need not be `0..n`; any pair of permutations of the same
/// value set works.
///
/// # Examples
///
/// ```
/// use u_tourga::ga::operators::pmx_with_cuts;
///
/// let (c1, c2) = pmx_with_cuts(&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1], 1, 3);
/// assert_eq!(c1, vec![5, 2, 3, 4, 1]);
/// assert_eq!(c2, vec![1, 4, 3, 2, 5]);
/// ```
///
/// # Complexity
/// O(n) expected time, O(b - a) extra space
///
/// # Panics
/// Panics if parents have different lengths or `a > b` or `b > n`.
pub fn pmx_with_cuts(
    parent1: &[usize],
    parent2: &[usize],
    a: usize,
    b: usize,
) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    assert!(a <= b && b <= parent1.len(), "invalid cut points {a}..{b}");

    let child1 = pmx_build_child(parent1, parent2, a, b);
    let child2 = pmx_build_child(parent2, parent1, a, b);
    (child1, child2)
}

/// Build one PMX child: keep `template[a..b]`, fill the rest from `donor`.
fn pmx_build_child(template: &[usize], donor: &[usize], a: usize, b: usize) -> Vec<usize> {
    // gene value -> its position inside the template's segment
    let segment: HashMap<usize, usize> = (a..b).map(|i| (template[i], i)).collect();

    (0..template.len())
        .map(|i| {
            if (a..b).contains(&i) {
                return template[i];
            }
            let mut gene = donor[i];
            // A chain over valid permutations visits each segment slot at most once.
            let mut hops = 0;
            while let Some(&pos) = segment.get(&gene) {
                if hops > b - a {
                    break;
                }
                gene = donor[pos];
                hops += 1;
            }
            gene
        })
        .collect()
}

/// Two distinct positions drawn uniformly from `0..n`, ordered.
fn cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let x = rng.random_range(0..n);
    let mut y = rng.random_range(0..n - 1);
    if y >= x {
        y += 1;
    }
    if x < y {
        (x, y)
    } else {
        (y, x)
    }
}

/// [`CrossoverOperator`] wrapper around [`pmx_crossover`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PartiallyMatched;

impl CrossoverOperator for PartiallyMatched {
    fn crossover<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        rng: &mut R,
    ) -> (Vec<usize>, Vec<usize>) {
        pmx_crossover(parent1, parent2, rng)
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Index-shuffle mutation.
///
/// Each position `i` is, with probability `gene_rate`, swapped with a
/// uniformly chosen other position `j != i`. A swap keeps a permutation a
/// permutation, so no repair step exists.
///
/// # Complexity
/// O(n)
pub fn shuffle_indexes<R: Rng>(perm: &mut [usize], gene_rate: f64, rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        if rng.random_range(0.0..1.0) < gene_rate {
            let mut j = rng.random_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            perm.swap(i, j);
        }
    }
}

/// [`MutationOperator`] wrapper around [`shuffle_indexes`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShuffleIndexes {
    gene_rate: f64,
}

impl ShuffleIndexes {
    /// Creates the operator with a per-gene swap probability.
    pub fn new(gene_rate: f64) -> Self {
        Self { gene_rate }
    }

    /// Per-gene swap probability.
    pub fn gene_rate(&self) -> f64 {
        self.gene_rate
    }
}

impl Default for ShuffleIndexes {
    fn default() -> Self {
        Self { gene_rate: 0.05 }
    }
}

impl MutationOperator for ShuffleIndexes {
    fn mutate<R: Rng>(&self, genes: &mut [usize], rng: &mut R) {
        shuffle_indexes(genes, self.gene_rate, rng);
    }
}

// ============================================================================
// Tests
// ============================================================================
