use core::fmt;
use segtree_stats::Sketch;

/// Stats for [EfficientSegmentTree](crate::EfficientSegmentTree)
#[derive(Clone, Default)]
pub struct Stats {
    /// A sketch for recording latencies of building the tree
    pub build: Sketch,
    /// A sketch for recording latencies of point updates
    pub set: Sketch,
    /// A sketch for recording latencies of ordered range folds
    pub fold: Sketch,
    /// A sketch for recording latencies of commutative range folds
    pub fold_commutative: Sketch,
    /// A sketch for recording latencies of predicate searches
    pub max_right: Sketch,
}

impl fmt::Debug for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SegmentTree Stats")
            .field("build", &self.build.percentiles())
            .field("set", &self.set.percentiles())
            .field("fold", &self.fold.percentiles())
            .field("fold_commutative", &self.fold_commutative.percentiles())
            .field("max_right", &self.max_right.percentiles())
            .finish()
    }
}
