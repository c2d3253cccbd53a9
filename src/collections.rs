use std::hash::BuildHasherDefault;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
/// Insertion order doubles as the iteration order of every engine
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Ordered set counterpart, used for the A* open set
pub(crate) type FxIndexSet<K> = IndexSet<K, BuildHasherDefault<FxHasher>>;
