use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Secondary index from group ids to the keys currently tagged with them.
///
/// Both map variants own one of these and route every membership change
/// through it. Group sets are pruned eagerly: a set that becomes empty is
/// removed outright, so every stored group has at least one member and
/// enumeration never has to filter.
#[derive(Clone, Debug)]
pub(crate) struct GroupIndex<K, G> {
    sets: HashMap<G, HashSet<K>>,
}

impl<K, G> GroupIndex<K, G>
where
    K: Eq + Hash,
    G: Eq + Hash,
{
    pub(crate) fn new() -> Self {
        Self {
            sets: HashMap::new(),
        }
    }

    /// Tags `key` with `group`, creating the group set on first use.
    pub(crate) fn add(&mut self, group: G, key: K) {
        self.sets.entry(group).or_insert_with(HashSet::new).insert(key);
    }

    /// Tags `key` with every group in `groups`.
    pub(crate) fn add_all<I>(&mut self, key: &K, groups: I)
    where
        K: Clone,
        I: IntoIterator<Item = G>,
    {
        for group in groups {
            self.add(group, key.clone());
        }
    }

    /// Removes `key` from one group's set, dropping the set if it empties.
    ///
    /// No-op when the group doesn't exist or doesn't contain the key.
    pub(crate) fn retract(&mut self, key: &K, group: &G) {
        if let Some(members) = self.sets.get_mut(group) {
            members.remove(key);
            if members.is_empty() {
                self.sets.remove(group);
            }
        }
    }

    /// Removes `key` from every group's set, dropping sets that empty.
    pub(crate) fn retract_all(&mut self, key: &K) {
        self.sets.retain(|_, members| {
            members.remove(key);
            !members.is_empty()
        });
    }

    /// Removes a whole group, returning its members.
    pub(crate) fn remove_group(&mut self, group: &G) -> Option<HashSet<K>> {
        self.sets.remove(group)
    }

    pub(crate) fn members(&self, group: &G) -> Option<&HashSet<K>> {
        self.sets.get(group)
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = &G> {
        self.sets.keys()
    }

    /// Ids of the groups whose set contains `key`.
    pub(crate) fn ids_of<'a>(&'a self, key: &'a K) -> impl Iterator<Item = &'a G> + 'a {
        self.sets
            .iter()
            .filter(move |(_, members)| members.contains(key))
            .map(|(group, _)| group)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&G, &HashSet<K>)> {
        self.sets.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.sets.clear();
    }

    /// Unions another index into this one, group by group.
    pub(crate) fn merge(&mut self, other: Self) {
        for (group, members) in other.sets {
            self.sets.entry(group).or_insert_with(HashSet::new).extend(members);
        }
    }
}

impl<K, G> Default for GroupIndex<K, G>
where
    K: Eq + Hash,
    G: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, G> PartialEq for GroupIndex<K, G>
where
    K: Eq + Hash,
    G: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.sets == other.sets
    }
}

impl<K, G> Eq for GroupIndex<K, G>
where
    K: Eq + Hash,
    G: Eq + Hash,
{
}
