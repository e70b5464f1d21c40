use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use crate::map::PolyMap;

/// A [`PolyMap`] that synthesizes missing values from a factory
///
/// `DefaultPolyMap` wraps a `PolyMap` together with a value factory. Reading
/// an absent key through [`get_or_default`](Self::get_or_default) invokes the
/// factory, stores the produced value under that key, and returns it — so a
/// read can mutate the map. Synthesized entries belong to no groups.
///
/// Everything else — grouping, group-filtered iteration, removal — is the
/// wrapped map's behavior, reachable directly through deref.
///
/// # Examples
///
/// ```
/// use polymap::DefaultPolyMap;
///
/// let mut counts: DefaultPolyMap<String, i32> = DefaultPolyMap::with_default();
/// *counts.get_or_default("visits".to_string()) += 1;
/// *counts.get_or_default("visits".to_string()) += 1;
///
/// assert_eq!(counts.get(&"visits".to_string()), Some(&2));
/// ```
pub struct DefaultPolyMap<K, V, G = String, F = fn() -> V>
where
    K: Clone + Eq + Hash + Debug,
    G: Clone + Eq + Hash,
    F: Fn() -> V,
{
    map: PolyMap<K, V, G>,
    factory: F,
}

impl<K, V, G, F> DefaultPolyMap<K, V, G, F>
where
    K: Clone + Eq + Hash + Debug,
    G: Clone + Eq + Hash,
    F: Fn() -> V,
{
    /// Creates an empty map that fills absent keys using `factory`
    ///
    /// # Examples
    ///
    /// ```
    /// use polymap::DefaultPolyMap;
    ///
    /// let mut lists: DefaultPolyMap<&str, Vec<i32>> = DefaultPolyMap::new(Vec::new);
    /// lists.get_or_default("evens").push(2);
    /// lists.get_or_default("evens").push(4);
    ///
    /// assert_eq!(lists.get(&"evens"), Some(&vec![2, 4]));
    /// ```
    pub fn new(factory: F) -> Self {
        Self {
            map: PolyMap::new(),
            factory,
        }
    }

    /// Wraps an existing PolyMap, keeping its entries and group index
    pub fn from_map(factory: F, map: PolyMap<K, V, G>) -> Self {
        Self { map, factory }
    }

    /// Returns the value under `key`, synthesizing and storing one first if
    /// the key is absent
    ///
    /// The factory runs only for absent keys. The new entry belongs to no
    /// groups; tag it afterwards with the grouping methods if needed.
    pub fn get_or_default(&mut self, key: K) -> &mut V {
        let Self { map, factory } = self;
        map.set_default_with(key, || factory())
    }

    /// Unwraps the underlying PolyMap, discarding the factory
    pub fn into_inner(self) -> PolyMap<K, V, G> {
        self.map
    }
}

impl<K, V, G> DefaultPolyMap<K, V, G, fn() -> V>
where
    K: Clone + Eq + Hash + Debug,
    G: Clone + Eq + Hash,
    V: Default,
{
    /// Creates an empty map that fills absent keys with `V::default()`
    pub fn with_default() -> Self {
        Self::new(V::default)
    }
}

impl<K, V, G, F> Deref for DefaultPolyMap<K, V, G, F>
where
    K: Clone + Eq + Hash + Debug,
    G: Clone + Eq + Hash,
    F: Fn() -> V,
{
    type Target = PolyMap<K, V, G>;

    fn deref(&self) -> &Self::Target {
        &self.map
    }
}

impl<K, V, G, F> DerefMut for DefaultPolyMap<K, V, G, F>
where
    K: Clone + Eq + Hash + Debug,
    G: Clone + Eq + Hash,
    F: Fn() -> V,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.map
    }
}

/// Factories aren't comparable, so equality is the wrapped maps' equality.
impl<K, V, G, F> PartialEq for DefaultPolyMap<K, V, G, F>
where
    K: Clone + Eq + Hash + Debug,
    V: PartialEq,
    G: Clone + Eq + Hash,
    F: Fn() -> V,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K, V, G, F> Clone for DefaultPolyMap<K, V, G, F>
where
    K: Clone + Eq + Hash + Debug,
    V: Clone,
    G: Clone + Eq + Hash,
    F: Clone + Fn() -> V,
{
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
            factory: self.factory.clone(),
        }
    }
}

impl<K, V, G, F> fmt::Debug for DefaultPolyMap<K, V, G, F>
where
    K: Clone + Eq + Hash + Debug,
    V: Debug,
    G: Clone + Eq + Hash + Debug,
    F: Fn() -> V,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DefaultPolyMap")
            .field("map", &self.map)
            .finish_non_exhaustive()
    }
}
