pub mod hash_segment_tree;

pub use hash_segment_tree::HashSegmentTree;
