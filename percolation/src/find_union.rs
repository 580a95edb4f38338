//! Disjoint-set forests over `0..n`.
//! Four interchangeable algorithms share the [UnionFind] interface. They always agree on
//! [UnionFind::connected] and [UnionFind::count] for the same sequence of operations,
//! and differ only in how fast they get there.
//!
//! Indices outside `0..n` are a bug in the caller, and every method panics on them.
use definitions::Strategy;

pub trait UnionFind: std::fmt::Debug + Send {
    /// Create `size` isolated components, `0..size`.
    fn new(size: usize) -> Self
    where
        Self: Sized;
    /// The algorithm this type implements.
    fn strategy() -> Strategy
    where
        Self: Sized;
    /// The number of elements.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// The representative of the component `index` resides in.
    fn find(&mut self, index: usize) -> usize;
    /// The number of components.
    fn count(&self) -> usize;
    /// Determine if `node1` and `node2` reside in the same component.
    fn connected(&mut self, node1: usize, node2: usize) -> bool {
        self.find(node1) == self.find(node2)
    }
    /// Merge the component `node1` resides in and the one `node2` resides in.
    /// Return true if two components were merged, false if they were already one.
    fn union(&mut self, node1: usize, node2: usize) -> bool;
}

/// Build a forest of the given algorithm.
pub fn build(strategy: Strategy, size: usize) -> Box<dyn UnionFind> {
    match strategy {
        Strategy::QuickFind => Box::new(QuickFind::new(size)),
        Strategy::QuickUnion => Box::new(QuickUnion::new(size)),
        Strategy::WeightedCompression => Box::new(WeightedCompression::new(size)),
        Strategy::WeightedHalving => Box::new(WeightedHalving::new(size)),
    }
}

fn validate(index: usize, length: usize) {
    assert!(
        index < length,
        "index {} is out of range (0..{})",
        index,
        length
    );
}

/// Every element stores its component id directly.
#[derive(Debug, Clone, Default)]
pub struct QuickFind {
    ids: Vec<usize>,
    count: usize,
}

impl UnionFind for QuickFind {
    fn strategy() -> Strategy {
        Strategy::QuickFind
    }
    fn new(size: usize) -> Self {
        Self {
            ids: (0..size).collect(),
            count: size,
        }
    }
    fn len(&self) -> usize {
        self.ids.len()
    }
    fn find(&mut self, index: usize) -> usize {
        validate(index, self.ids.len());
        self.ids[index]
    }
    fn count(&self) -> usize {
        self.count
    }
    fn union(&mut self, node1: usize, node2: usize) -> bool {
        let loser = self.find(node1);
        let winner = self.find(node2);
        if loser == winner {
            return false;
        }
        self.ids
            .iter_mut()
            .filter(|id| **id == loser)
            .for_each(|id| *id = winner);
        self.count -= 1;
        true
    }
}

/// Parent pointers without any balancing. The height can grow up to n.
#[derive(Debug, Clone, Default)]
pub struct QuickUnion {
    parents: Vec<usize>,
    count: usize,
}

impl UnionFind for QuickUnion {
    fn strategy() -> Strategy {
        Strategy::QuickUnion
    }
    fn new(size: usize) -> Self {
        Self {
            parents: (0..size).collect(),
            count: size,
        }
    }
    fn len(&self) -> usize {
        self.parents.len()
    }
    fn find(&mut self, index: usize) -> usize {
        validate(index, self.parents.len());
        let mut index = index;
        while index != self.parents[index] {
            index = self.parents[index];
        }
        index
    }
    fn count(&self) -> usize {
        self.count
    }
    fn union(&mut self, node1: usize, node2: usize) -> bool {
        let parent1 = self.find(node1);
        let parent2 = self.find(node2);
        if parent1 == parent2 {
            return false;
        }
        self.parents[parent1] = parent2;
        self.count -= 1;
        true
    }
}

/// Union by size with full path compression.
#[derive(Debug, Clone, Default)]
pub struct WeightedCompression {
    /// The vector of parents. If parents[i] = j, the j-th node represnets
    /// the component which i-th node redides.
    parents: Vec<usize>,
    /// The size of each component. If sizes[i] = k, the size of component which i-th nodes resides
    /// is k.
    /// It is valid if and only if i-th nodes is the represnetor of the components.
    sizes: Vec<usize>,
    count: usize,
}

impl WeightedCompression {
    /// Get the size of the component node1 resides.
    pub fn size(&mut self, node1: usize) -> usize {
        let parent = self.find(node1);
        self.sizes[parent]
    }
}

impl UnionFind for WeightedCompression {
    fn strategy() -> Strategy {
        Strategy::WeightedCompression
    }
    fn new(size: usize) -> Self {
        Self {
            parents: (0..size).collect(),
            sizes: vec![1; size],
            count: size,
        }
    }
    fn len(&self) -> usize {
        self.parents.len()
    }
    fn find(&mut self, index: usize) -> usize {
        validate(index, self.parents.len());
        let parent = {
            let mut temp = index;
            while temp != self.parents[temp] {
                temp = self.parents[temp];
            }
            temp
        };
        let mut index = index;
        while index != parent {
            let next = self.parents[index];
            self.parents[index] = parent;
            index = next;
        }
        parent
    }
    fn count(&self) -> usize {
        self.count
    }
    fn union(&mut self, node1: usize, node2: usize) -> bool {
        let parent1 = self.find(node1);
        let parent2 = self.find(node2);
        if parent1 == parent2 {
            return false;
        }
        link_by_size(&mut self.parents, &mut self.sizes, parent1, parent2);
        self.count -= 1;
        true
    }
}

/// Union by size with path halving.
#[derive(Debug, Clone, Default)]
pub struct WeightedHalving {
    parents: Vec<usize>,
    sizes: Vec<usize>,
    count: usize,
}

impl WeightedHalving {
    /// Get the size of the component node1 resides.
    pub fn size(&mut self, node1: usize) -> usize {
        let parent = self.find(node1);
        self.sizes[parent]
    }
}

impl UnionFind for WeightedHalving {
    fn strategy() -> Strategy {
        Strategy::WeightedHalving
    }
    fn new(size: usize) -> Self {
        Self {
            parents: (0..size).collect(),
            sizes: vec![1; size],
            count: size,
        }
    }
    fn len(&self) -> usize {
        self.parents.len()
    }
    fn find(&mut self, index: usize) -> usize {
        validate(index, self.parents.len());
        let mut index = index;
        while index != self.parents[index] {
            // Skip to the grandparent.
            self.parents[index] = self.parents[self.parents[index]];
            index = self.parents[index];
        }
        index
    }
    fn count(&self) -> usize {
        self.count
    }
    fn union(&mut self, node1: usize, node2: usize) -> bool {
        let parent1 = self.find(node1);
        let parent2 = self.find(node2);
        if parent1 == parent2 {
            return false;
        }
        link_by_size(&mut self.parents, &mut self.sizes, parent1, parent2);
        self.count -= 1;
        true
    }
}

// Hang the smaller tree under the larger one. On a tie, parent1 goes under parent2.
fn link_by_size(parents: &mut [usize], sizes: &mut [usize], parent1: usize, parent2: usize) {
    if sizes[parent1] > sizes[parent2] {
        parents[parent2] = parent1;
        sizes[parent1] += sizes[parent2];
    } else {
        parents[parent1] = parent2;
        sizes[parent2] += sizes[parent1];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256StarStar;
    const TINY: [(usize, usize); 11] = [
        (4, 3),
        (3, 8),
        (6, 5),
        (9, 4),
        (2, 1),
        (8, 9),
        (5, 0),
        (7, 2),
        (6, 1),
        (1, 0),
        (6, 7),
    ];
    fn all(size: usize) -> Vec<Box<dyn UnionFind>> {
        Strategy::ALL.iter().map(|&s| build(s, size)).collect()
    }
    #[test]
    fn strategy_names() {
        for &s in Strategy::ALL.iter() {
            assert_eq!(format!("{}", s), s.name());
        }
        assert_eq!(QuickFind::strategy(), Strategy::QuickFind);
        assert_eq!(QuickUnion::strategy(), Strategy::QuickUnion);
        assert_eq!(WeightedCompression::strategy(), Strategy::WeightedCompression);
        assert_eq!(WeightedHalving::strategy(), Strategy::WeightedHalving);
    }
    #[test]
    fn findunion_init() {
        for fu in all(0) {
            assert!(fu.is_empty());
            assert_eq!(fu.count(), 0);
        }
    }
    #[test]
    fn findunion_init2() {
        for mut fu in all(10) {
            assert_eq!(fu.len(), 10);
            assert_eq!(fu.count(), 10);
            assert!((0..10).all(|i| fu.find(i) == i));
        }
    }
    #[test]
    fn quick_find_tiny() {
        let mut fu = QuickFind::new(10);
        for &(p, q) in TINY.iter().take(5) {
            assert!(fu.union(p, q));
        }
        assert_eq!(fu.count(), 5);
        assert!(fu.connected(8, 9));
        assert!(!fu.connected(5, 0));
    }
    #[test]
    fn quick_find_second_wins() {
        let mut fu = QuickFind::new(4);
        fu.union(0, 1);
        assert_eq!(fu.find(0), 1);
        fu.union(1, 3);
        assert_eq!(fu.find(0), 3);
        assert_eq!(fu.find(1), 3);
    }
    #[test]
    fn quick_union_root_under_second() {
        let mut fu = QuickUnion::new(4);
        fu.union(0, 1);
        fu.union(1, 2);
        assert_eq!(fu.find(0), 2);
        fu.union(3, 0);
        assert_eq!(fu.find(3), 2);
    }
    #[test]
    fn tiny_all() {
        for mut fu in all(10) {
            let merged = TINY.iter().filter(|&&(p, q)| fu.union(p, q)).count();
            assert_eq!(merged, 8, "{:?}", fu);
            assert_eq!(fu.count(), 2);
            assert!(fu.connected(0, 7));
            assert!(fu.connected(3, 9));
            assert!(!fu.connected(0, 9));
        }
    }
    #[test]
    fn find() {
        let mut fu = WeightedCompression::new(10);
        fu.union(0, 1);
        assert_eq!(fu.find(0), fu.find(1));
        fu.union(2, 3);
        assert_eq!(fu.find(2), fu.find(3));
    }
    #[test]
    fn find2() {
        let mut fu = WeightedHalving::new(10);
        fu.union(0, 1);
        fu.union(1, 2);
        assert_eq!(fu.find(0), fu.find(2));
    }
    #[test]
    fn tie_goes_under_second() {
        let mut fu = WeightedCompression::new(4);
        fu.union(0, 1);
        assert_eq!(fu.find(0), 1);
        let mut fu = WeightedHalving::new(4);
        fu.union(2, 3);
        assert_eq!(fu.find(2), 3);
        // Larger component keeps its root regardless of argument order.
        fu.union(3, 0);
        fu.union(0, 3);
        assert_eq!(fu.find(0), 3);
    }
    #[test]
    fn compression_flattens() {
        let mut fu = WeightedCompression::new(8);
        for i in 0..4 {
            fu.union(2 * i, 2 * i + 1);
        }
        fu.union(1, 3);
        fu.union(5, 7);
        fu.union(3, 7);
        assert_eq!(fu.parents, vec![1, 3, 3, 7, 5, 7, 7, 7]);
        let root = fu.find(0);
        assert_eq!(root, 7);
        assert_eq!(fu.parents, vec![7, 7, 3, 7, 5, 7, 7, 7]);
        assert_eq!(fu.size(2), 8);
    }
    #[test]
    fn halving_shortens() {
        let mut fu = WeightedHalving::new(5);
        // Build the chain 0 -> 1 -> 2 -> 3 -> 4 by hand.
        fu.parents = vec![1, 2, 3, 4, 4];
        assert_eq!(fu.find(0), 4);
        assert_eq!(fu.parents, vec![2, 2, 4, 4, 4]);
    }
    #[test]
    fn same_component_noop() {
        for mut fu in all(10) {
            assert!(fu.union(0, 1));
            assert!(fu.union(1, 2));
            let count = fu.count();
            assert!(!fu.union(0, 2));
            assert!(!fu.union(3, 3));
            assert_eq!(fu.count(), count);
        }
    }
    #[test]
    fn size() {
        let mut fu = WeightedCompression::new(10);
        for i in 0..10 {
            assert_eq!(fu.size(i), 1);
        }
        fu.union(0, 1);
        fu.union(0, 2);
        fu.union(4, 3);
        fu.union(3, 2);
        for i in 0..5 {
            assert_eq!(fu.size(i), 5);
        }
        assert_eq!(fu.size(7), 1);
    }
    #[test]
    fn size2() {
        let mut fu = WeightedHalving::new(10);
        for i in 0..9 {
            fu.union(i, i + 1);
        }
        for i in 0..10 {
            assert_eq!(fu.size(i), 10);
        }
        assert_eq!(fu.count(), 1);
    }
    #[test]
    fn all_connected() {
        for mut fu in all(10) {
            for i in 0..10 {
                for j in (0..10).rev() {
                    fu.union(i, j);
                    fu.union((i * 3) % 10, (j * 7) % 10);
                }
            }
            let p = fu.find(0);
            assert!((0..10).all(|e| fu.find(e) == p));
            assert_eq!(fu.count(), 1);
        }
    }
    #[test]
    fn random_agreement() {
        let size = 200;
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(3205);
        let mut forests = all(size);
        for _ in 0..500 {
            let (p, q) = (rng.gen_range(0..size), rng.gen_range(0..size));
            let before = forests[0].count();
            let merged: Vec<_> = forests.iter_mut().map(|fu| fu.union(p, q)).collect();
            assert!(merged.iter().all(|&m| m == merged[0]));
            let after = forests[0].count();
            assert_eq!(before - after, merged[0] as usize);
            assert!(forests.iter().all(|fu| fu.count() == after));
            assert!(1 <= after && after <= size);
            let (s, t) = (rng.gen_range(0..size), rng.gen_range(0..size));
            let answers: Vec<_> = forests.iter_mut().map(|fu| fu.connected(s, t)).collect();
            assert!(answers.iter().all(|&a| a == answers[0]));
        }
    }
    #[test]
    #[should_panic]
    fn find_out_of_range() {
        let mut fu = QuickFind::new(10);
        fu.find(10);
    }
    #[test]
    #[should_panic]
    fn union_out_of_range() {
        let mut fu = WeightedCompression::new(10);
        fu.union(3, 100);
    }
    #[test]
    #[should_panic]
    fn connected_out_of_range() {
        let mut fu = WeightedHalving::new(10);
        fu.connected(10, 0);
    }
}
