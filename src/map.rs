use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::MapError;
use crate::groups::GroupIndex;

/// A key-value map whose entries can be tagged into named groups
///
/// `PolyMap` behaves like a regular map, with one addition: every key can
/// belong to zero or more groups, and most read operations have a
/// group-filtered counterpart. The map owns both the entries and the group
/// index and keeps them consistent under every mutation, so a key removed
/// from the map is guaranteed to vanish from every group it belonged to.
///
/// Group membership is a set relation: a key is either in a group or not,
/// with no duplicates and no ordering. Groups themselves only exist while
/// they have at least one member.
///
/// The group id type defaults to `String` but can be any hashable type.
///
/// # Examples
///
/// ```
/// use polymap::PolyMap;
///
/// let mut pets: PolyMap<&str, &str, &str> = PolyMap::new();
/// pets.set_grouped("cat", "tom", ["animal"]);
/// pets.set_grouped("marigold", "flowey", ["plant"]);
///
/// assert_eq!(pets.get(&"cat"), Some(&"tom"));
/// assert_eq!(pets.group_keys(&"plant").collect::<Vec<_>>(), vec![&"marigold"]);
/// ```
#[derive(Clone, Debug)]
pub struct PolyMap<K, V, G = String>
where
    K: Clone + Eq + Hash + Debug,
    G: Clone + Eq + Hash,
{
    entries: HashMap<K, V>,
    groups: GroupIndex<K, G>,
}

impl<K, V, G> PolyMap<K, V, G>
where
    K: Clone + Eq + Hash + Debug,
    G: Clone + Eq + Hash,
{
    /// Creates a new, empty PolyMap
    ///
    /// # Examples
    ///
    /// ```
    /// use polymap::PolyMap;
    ///
    /// let mut map: PolyMap<String, i32> = PolyMap::new();
    /// map.set("one".to_string(), 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            groups: GroupIndex::new(),
        }
    }

    /// Creates an empty PolyMap with at least the specified entry capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            groups: GroupIndex::new(),
        }
    }

    /// Stores a value without touching group membership
    ///
    /// Overwriting an existing key keeps whatever groups the key already
    /// belongs to; tags accumulate across repeated sets until replaced with
    /// [`set_groups`](Self::set_groups) or cleared with
    /// [`ungroup`](Self::ungroup).
    pub fn set(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Stores a value and tags the key with each of the given groups
    ///
    /// # Examples
    ///
    /// ```
    /// use polymap::PolyMap;
    ///
    /// let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    /// map.set_grouped("cat", "tom", ["animal", "pet"]);
    ///
    /// assert_eq!(map.get(&"cat"), Some(&"tom"));
    /// assert_eq!(map.groups_of(&"cat").count(), 2);
    /// ```
    pub fn set_grouped<I>(&mut self, key: K, value: V, groups: I)
    where
        I: IntoIterator<Item = G>,
    {
        self.groups.add_all(&key, groups);
        self.entries.insert(key, value);
    }

    /// Returns the value for `key` if it exists, otherwise stores `default`
    ///
    /// Either way, a mutable reference to the value now under `key` is
    /// returned. Group membership is untouched.
    pub fn set_default(&mut self, key: K, default: V) -> &mut V {
        self.entries.entry(key).or_insert(default)
    }

    /// Like [`set_default`](Self::set_default), but computes the fallback
    /// value lazily
    pub fn set_default_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.entries.entry(key).or_insert_with(default)
    }

    /// Like [`set_default`](Self::set_default), but also tags the key with
    /// `group`
    ///
    /// The tag is applied whether or not the key already existed.
    pub fn set_default_grouped(&mut self, key: K, default: V, group: G) -> &mut V {
        self.groups.add(group, key.clone());
        self.entries.entry(key).or_insert(default)
    }

    /// Returns a reference to the value stored under `key`, if any
    ///
    /// # Examples
    ///
    /// ```
    /// use polymap::PolyMap;
    ///
    /// let mut map: PolyMap<&str, i32, &str> = PolyMap::new();
    /// map.set("one", 1);
    ///
    /// assert_eq!(map.get(&"one"), Some(&1));
    /// assert_eq!(map.get(&"two"), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`, if any
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Returns true if the map contains the specified key
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries in the map
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map contains no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes an entry, retracting the key from every group it belonged to
    ///
    /// # Examples
    ///
    /// ```
    /// use polymap::{MapError, PolyMap};
    ///
    /// let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    /// map.set_grouped("cat", "tom", ["animal"]);
    ///
    /// assert_eq!(map.remove(&"cat")?, "tom");
    /// assert_eq!(map.groups().count(), 0);
    /// # Ok::<(), MapError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `MapError::KeyNotFound` if the key doesn't exist.
    pub fn remove(&mut self, key: &K) -> Result<V, MapError> {
        match self.entries.remove(key) {
            Some(value) => {
                self.groups.retract_all(key);
                Ok(value)
            }
            None => Err(MapError::KeyNotFound(format!("{:?}", key))),
        }
    }

    /// Removes an entry like [`remove`](Self::remove), but returns `None`
    /// instead of failing on an absent key
    ///
    /// # Examples
    ///
    /// ```
    /// use polymap::PolyMap;
    ///
    /// let mut map: PolyMap<&str, i32, &str> = PolyMap::new();
    /// map.set("one", 1);
    ///
    /// assert_eq!(map.pop(&"one"), Some(1));
    /// assert_eq!(map.pop(&"one").unwrap_or(0), 0);
    /// ```
    pub fn pop(&mut self, key: &K) -> Option<V> {
        let value = self.entries.remove(key)?;
        self.groups.retract_all(key);
        Some(value)
    }

    /// Removes and returns an arbitrary entry, retracting its key from every
    /// group
    ///
    /// Returns `None` if the map is empty.
    pub fn pop_any(&mut self) -> Option<(K, V)> {
        let key = self.entries.keys().next()?.clone();
        let value = self.entries.remove(&key)?;
        self.groups.retract_all(&key);
        Some((key, value))
    }

    /// Merges another PolyMap into this one
    ///
    /// Entries from `other` overwrite entries with the same key; group
    /// memberships are unioned per group id, so none of this map's existing
    /// tags are discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use polymap::PolyMap;
    ///
    /// let mut left: PolyMap<&str, &str, &str> = PolyMap::new();
    /// left.set_grouped("cat", "tom", ["animal"]);
    ///
    /// let mut right: PolyMap<&str, &str, &str> = PolyMap::new();
    /// right.set_grouped("marigold", "flowey", ["plant"]);
    ///
    /// left.update(right);
    /// assert!(left.contains_key(&"marigold"));
    /// assert!(left.groups().any(|g| *g == "animal"));
    /// assert!(left.groups().any(|g| *g == "plant"));
    /// ```
    pub fn update(&mut self, other: Self) {
        self.entries.extend(other.entries);
        self.groups.merge(other.groups);
    }

    /// Removes all entries and all groups
    pub fn clear(&mut self) {
        self.entries.clear();
        self.groups.clear();
    }

    /// Removes every entry belonging to `group`, then the group itself
    ///
    /// Members are removed through the same retraction path as
    /// [`remove`](Self::remove), so a key that also belonged to other groups
    /// disappears from those as well. Unknown groups are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use polymap::PolyMap;
    ///
    /// let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    /// map.set_grouped("cat", "tom", ["animal"]);
    /// map.set_grouped("marigold", "flowey", ["plant"]);
    ///
    /// map.clear_group(&"plant");
    /// assert!(!map.contains_key(&"marigold"));
    /// assert!(map.contains_key(&"cat"));
    /// ```
    pub fn clear_group(&mut self, group: &G) {
        if let Some(members) = self.groups.remove_group(group) {
            for key in &members {
                self.entries.remove(key);
                self.groups.retract_all(key);
            }
        }
    }

    /// Re-tags a key: removes it from all current groups, then adds it to
    /// exactly the listed ones
    ///
    /// # Examples
    ///
    /// ```
    /// use polymap::{MapError, PolyMap};
    ///
    /// let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    /// map.set_grouped("cat", "tom", ["animal"]);
    ///
    /// map.set_groups(&"cat", ["pet"])?;
    /// assert_eq!(map.groups_of(&"cat").collect::<Vec<_>>(), vec![&"pet"]);
    /// # Ok::<(), MapError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns `MapError::NoGroups` if `groups` is empty
    /// - Returns `MapError::KeyNotFound` if the key doesn't exist
    pub fn set_groups<I>(&mut self, key: &K, groups: I) -> Result<(), MapError>
    where
        I: IntoIterator<Item = G>,
    {
        let groups: Vec<G> = groups.into_iter().collect();
        if groups.is_empty() {
            return Err(MapError::NoGroups);
        }
        if !self.entries.contains_key(key) {
            return Err(MapError::KeyNotFound(format!("{:?}", key)));
        }
        self.groups.retract_all(key);
        self.groups.add_all(key, groups);
        Ok(())
    }

    /// Adds a key to the listed groups without touching its existing tags
    ///
    /// # Errors
    ///
    /// - Returns `MapError::NoGroups` if `groups` is empty
    /// - Returns `MapError::KeyNotFound` if the key doesn't exist
    pub fn add_groups<I>(&mut self, key: &K, groups: I) -> Result<(), MapError>
    where
        I: IntoIterator<Item = G>,
    {
        let groups: Vec<G> = groups.into_iter().collect();
        if groups.is_empty() {
            return Err(MapError::NoGroups);
        }
        if !self.entries.contains_key(key) {
            return Err(MapError::KeyNotFound(format!("{:?}", key)));
        }
        self.groups.add_all(key, groups);
        Ok(())
    }

    /// Removes a key from every group it belongs to
    ///
    /// The entry itself stays in the map. Does nothing if the key belongs to
    /// no groups.
    ///
    /// # Examples
    ///
    /// ```
    /// use polymap::PolyMap;
    ///
    /// let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    /// map.set_grouped("dog", "odie", ["animal", "show"]);
    ///
    /// map.ungroup(&"dog");
    /// assert_eq!(map.groups_of(&"dog").count(), 0);
    /// assert_eq!(map.get(&"dog"), Some(&"odie"));
    /// ```
    pub fn ungroup(&mut self, key: &K) {
        self.groups.retract_all(key);
    }

    /// Removes a key from a single group
    ///
    /// Does nothing if the key is not in that group.
    pub fn ungroup_from(&mut self, key: &K, group: &G) {
        self.groups.retract(key, group);
    }

    /// Iterates over all entries
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    /// Iterates over all keys
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Iterates over all values
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    /// Iterates over the entries belonging to `group`
    ///
    /// Members are looked up live against the map. An unknown group yields an
    /// empty iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use polymap::PolyMap;
    ///
    /// let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    /// map.set_grouped("cat", "tom", ["animal"]);
    /// map.set_grouped("marigold", "flowey", ["plant"]);
    ///
    /// let plants: Vec<_> = map.group_iter(&"plant").collect();
    /// assert_eq!(plants, vec![(&"marigold", &"flowey")]);
    /// ```
    pub fn group_iter<'a>(&'a self, group: &G) -> impl Iterator<Item = (&'a K, &'a V)> + 'a {
        self.groups
            .members(group)
            .into_iter()
            .flatten()
            .filter_map(move |key| self.entries.get(key).map(|value| (key, value)))
    }

    /// Iterates over the keys belonging to `group`
    pub fn group_keys<'a>(&'a self, group: &G) -> impl Iterator<Item = &'a K> + 'a {
        self.groups.members(group).into_iter().flatten()
    }

    /// Iterates over the values belonging to `group`
    pub fn group_values<'a>(&'a self, group: &G) -> impl Iterator<Item = &'a V> + 'a {
        self.group_iter(group).map(|(_, value)| value)
    }

    /// Iterates over the ids of all groups that currently have members
    ///
    /// A group whose last member was removed no longer exists, so it never
    /// shows up here.
    ///
    /// # Examples
    ///
    /// ```
    /// use polymap::PolyMap;
    ///
    /// let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    /// map.set_grouped("cat", "tom", ["animal"]);
    /// map.set_grouped("marigold", "flowey", ["plant"]);
    ///
    /// let mut groups: Vec<_> = map.groups().collect();
    /// groups.sort();
    /// assert_eq!(groups, vec![&"animal", &"plant"]);
    /// ```
    pub fn groups(&self) -> impl Iterator<Item = &G> {
        self.groups.ids()
    }

    /// Iterates over the ids of the groups containing `key`
    ///
    /// # Examples
    ///
    /// ```
    /// use polymap::PolyMap;
    ///
    /// let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    /// map.set_grouped("cat", "tom", ["animal"]);
    ///
    /// assert!(map.groups_of(&"cat").any(|g| *g == "animal"));
    /// assert_eq!(map.groups_of(&"marigold").count(), 0);
    /// ```
    pub fn groups_of<'a>(&'a self, key: &'a K) -> impl Iterator<Item = &'a G> + 'a {
        self.groups.ids_of(key)
    }

    /// Iterates over `(group, entries)` pairs, one per non-empty group
    ///
    /// The inner sequence is itself lazy and yields the group's entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use polymap::PolyMap;
    ///
    /// let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    /// map.set_grouped("cat", "tom", ["animal"]);
    /// map.set_grouped("marigold", "flowey", ["plant"]);
    ///
    /// for (group, items) in map.grouped() {
    ///     for (key, value) in items {
    ///         println!("{}: {} = {}", group, key, value);
    ///     }
    /// }
    /// ```
    pub fn grouped(&self) -> impl Iterator<Item = (&G, impl Iterator<Item = (&K, &V)>)> {
        self.groups.iter().map(move |(group, members)| {
            (
                group,
                members
                    .iter()
                    .filter_map(move |key| self.entries.get(key).map(|value| (key, value))),
            )
        })
    }

    /// Returns a new PolyMap holding only the members of `group`
    ///
    /// The copy's group index contains just that one group, rebuilt from the
    /// filtered entries. Cloning the whole map (entries and full group index)
    /// is what [`Clone`] is for.
    ///
    /// # Examples
    ///
    /// ```
    /// use polymap::PolyMap;
    ///
    /// let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    /// map.set_grouped("cat", "tom", ["animal"]);
    /// map.set_grouped("marigold", "flowey", ["plant"]);
    ///
    /// let plants = map.copy_group(&"plant");
    /// assert_eq!(plants.len(), 1);
    /// assert_eq!(plants.get(&"marigold"), Some(&"flowey"));
    /// ```
    pub fn copy_group(&self, group: &G) -> Self
    where
        V: Clone,
    {
        let mut copy = Self::new();
        for (key, value) in self.group_iter(group) {
            copy.set_grouped(key.clone(), value.clone(), [group.clone()]);
        }
        copy
    }
}

impl<K, V, G> Default for PolyMap<K, V, G>
where
    K: Clone + Eq + Hash + Debug,
    G: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Two PolyMaps are equal when their entries and their group indexes are
/// both equal. Groups without members don't exist, so they can never make
/// two otherwise identical maps compare unequal.
impl<K, V, G> PartialEq for PolyMap<K, V, G>
where
    K: Clone + Eq + Hash + Debug,
    V: PartialEq,
    G: Clone + Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.groups == other.groups
    }
}

impl<K, V, G> Eq for PolyMap<K, V, G>
where
    K: Clone + Eq + Hash + Debug,
    V: Eq,
    G: Clone + Eq + Hash,
{
}

impl<K, V, G> From<HashMap<K, V>> for PolyMap<K, V, G>
where
    K: Clone + Eq + Hash + Debug,
    G: Clone + Eq + Hash,
{
    /// Wraps an existing map; no entry belongs to any group yet.
    fn from(entries: HashMap<K, V>) -> Self {
        Self {
            entries,
            groups: GroupIndex::new(),
        }
    }
}

impl<K, V, G> FromIterator<(K, V)> for PolyMap<K, V, G>
where
    K: Clone + Eq + Hash + Debug,
    G: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            groups: GroupIndex::new(),
        }
    }
}

impl<K, V, G> Extend<(K, V)> for PolyMap<K, V, G>
where
    K: Clone + Eq + Hash + Debug,
    G: Clone + Eq + Hash,
{
    /// Merges plain entries; group membership is untouched.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K, V, G> IntoIterator for PolyMap<K, V, G>
where
    K: Clone + Eq + Hash + Debug,
    G: Clone + Eq + Hash,
{
    type Item = (K, V);
    type IntoIter = std::collections::hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V, G> IntoIterator for &'a PolyMap<K, V, G>
where
    K: Clone + Eq + Hash + Debug,
    G: Clone + Eq + Hash,
{
    type Item = (&'a K, &'a V);
    type IntoIter = std::collections::hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
