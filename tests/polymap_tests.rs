use std::collections::HashMap;

use itertools::Itertools;
use polymap::{MapError, PolyMap};

#[test]
fn test_create_from_mapping() {
    let mut source = HashMap::new();
    source.insert("hello", "world");

    let map: PolyMap<&str, &str, &str> = PolyMap::from(source);
    assert_eq!(map.get(&"hello"), Some(&"world"));
    assert_eq!(map.groups().count(), 0);
}

#[test]
fn test_collect_from_pairs() {
    let map: PolyMap<&str, i32, &str> = [("one", 1), ("two", 2)].into_iter().collect();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&"two"), Some(&2));
}

#[test]
fn test_set_with_group() {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set_grouped("cat", "tom", ["animal"]);

    assert_eq!(map.get(&"cat"), Some(&"tom"));
    assert!(map.groups().any(|g| *g == "animal"));
}

#[test]
fn test_items_by_group() {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set_grouped("cat", "tom", ["animal"]);
    map.set_grouped("marigold", "flowey", ["plant"]);

    let plants: Vec<_> = map.group_iter(&"plant").collect();
    assert_eq!(plants, vec![(&"marigold", &"flowey")]);
}

#[test]
fn test_keys_by_group() {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set_grouped("cat", "tom", ["animal"]);
    map.set_grouped("dog", "odie", ["animal"]);
    map.set_grouped("marigold", "flowey", ["plant"]);

    let animals = map.group_keys(&"animal").sorted().collect::<Vec<_>>();
    assert_eq!(animals, vec![&"cat", &"dog"]);
}

#[test]
fn test_values_by_group() {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set_grouped("cat", "tom", ["animal"]);
    map.set_grouped("marigold", "flowey", ["plant"]);

    let values: Vec<_> = map.group_values(&"plant").collect();
    assert_eq!(values, vec![&"flowey"]);
}

#[test]
fn test_groups_of_key() {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set_grouped("cat", "tom", ["animal"]);
    map.set_grouped("marigold", "flowey", ["plant"]);

    let groups: Vec<_> = map.groups_of(&"marigold").collect();
    assert_eq!(groups, vec![&"plant"]);
}

#[test]
fn test_grouped_iteration() {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set_grouped("cat", "tom", ["animal"]);
    map.set_grouped("marigold", "flowey", ["plant"]);

    let mut seen = 0;
    for (group, items) in map.grouped() {
        let items: Vec<_> = items.collect();
        match *group {
            "animal" => assert_eq!(items, vec![(&"cat", &"tom")]),
            "plant" => assert_eq!(items, vec![(&"marigold", &"flowey")]),
            other => panic!("unexpected group {}", other),
        }
        seen += 1;
    }
    assert_eq!(seen, 2);
}

#[test]
fn test_repeated_sets_accumulate_groups() {
    let mut map: PolyMap<&str, i32, &str> = PolyMap::new();
    map.set_grouped("n", 1, ["first"]);
    map.set_grouped("n", 2, ["second"]);

    assert_eq!(map.get(&"n"), Some(&2));
    let groups = map.groups_of(&"n").sorted().collect::<Vec<_>>();
    assert_eq!(groups, vec![&"first", &"second"]);
}

#[test]
fn test_set_groups_replaces_memberships() -> Result<(), MapError> {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set_grouped("cat", "tom", ["animal", "pet"]);

    map.set_groups(&"cat", ["cartoon"])?;
    let groups: Vec<_> = map.groups_of(&"cat").collect();
    assert_eq!(groups, vec![&"cartoon"]);

    Ok(())
}

#[test]
fn test_add_groups_keeps_memberships() -> Result<(), MapError> {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set_grouped("cat", "tom", ["animal"]);

    map.add_groups(&"cat", ["pet"])?;
    let groups = map.groups_of(&"cat").sorted().collect::<Vec<_>>();
    assert_eq!(groups, vec![&"animal", &"pet"]);

    Ok(())
}

#[test]
fn test_group_assignment_errors() {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set("cat", "tom");

    assert!(matches!(
        map.set_groups(&"ghost", ["spooky"]),
        Err(MapError::KeyNotFound(_))
    ));
    assert!(matches!(map.set_groups(&"cat", []), Err(MapError::NoGroups)));
    assert!(matches!(map.add_groups(&"cat", []), Err(MapError::NoGroups)));

    // failed calls left the index untouched
    assert_eq!(map.groups().count(), 0);
}

#[test]
fn test_ungroup_all_groups() {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set_grouped("cat", "tom", ["animal"]);
    map.set_grouped("dog", "odie", ["animal", "show"]);

    map.ungroup(&"dog");

    assert_eq!(map.groups_of(&"dog").count(), 0);
    assert!(!map.group_keys(&"animal").any(|k| *k == "dog"));
    assert_eq!(map.groups().collect::<Vec<_>>(), vec![&"animal"]);
    // the entry itself survives
    assert_eq!(map.get(&"dog"), Some(&"odie"));

    // ungrouping a key with no memberships is fine
    map.ungroup(&"dog");
    assert_eq!(map.groups_of(&"dog").count(), 0);
}

#[test]
fn test_ungroup_single_group() {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set_grouped("dog", "odie", ["animal", "show"]);

    map.ungroup_from(&"dog", &"show");
    assert_eq!(map.groups_of(&"dog").collect::<Vec<_>>(), vec![&"animal"]);

    // not a member of "plant": nothing happens
    map.ungroup_from(&"dog", &"plant");
    assert_eq!(map.groups_of(&"dog").count(), 1);
}

#[test]
fn test_remove_retracts_from_groups() -> Result<(), MapError> {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set_grouped("dog", "odie", ["animal", "show"]);
    map.set_grouped("cat", "tom", ["animal"]);

    assert_eq!(map.remove(&"dog")?, "odie");
    assert_eq!(map.groups_of(&"dog").count(), 0);
    assert!(!map.group_keys(&"animal").any(|k| *k == "dog"));
    assert_eq!(map.groups().collect::<Vec<_>>(), vec![&"animal"]);

    assert!(matches!(map.remove(&"dog"), Err(MapError::KeyNotFound(_))));
    Ok(())
}

#[test]
fn test_pop_with_default() {
    let mut map: PolyMap<&str, i32, &str> = PolyMap::new();
    map.set_grouped("one", 1, ["odd"]);

    assert_eq!(map.pop(&"one"), Some(1));
    assert_eq!(map.groups().count(), 0);
    assert_eq!(map.pop(&"one").unwrap_or(0), 0);
}

#[test]
fn test_pop_any_retracts() {
    let mut map: PolyMap<&str, i32, &str> = PolyMap::new();
    map.set_grouped("one", 1, ["odd"]);

    let (key, value) = map.pop_any().unwrap();
    assert_eq!((key, value), ("one", 1));
    assert!(map.is_empty());
    assert_eq!(map.groups().count(), 0);
    assert!(map.pop_any().is_none());
}

#[test]
fn test_update_merges_entries_and_groups() {
    let mut target: PolyMap<&str, &str, &str> = PolyMap::new();
    target.set_grouped("cat", "tom", ["animal"]);

    let mut source: PolyMap<&str, &str, &str> = PolyMap::new();
    source.set_grouped("dog", "odie", ["animal"]);
    source.set_grouped("marigold", "flowey", ["plant"]);

    target.update(source);

    assert!(target.contains_key(&"marigold"));
    let animals = target.group_keys(&"animal").sorted().collect::<Vec<_>>();
    assert_eq!(animals, vec![&"cat", &"dog"]);
    let groups = target.groups().sorted().collect::<Vec<_>>();
    assert_eq!(groups, vec![&"animal", &"plant"]);
}

#[test]
fn test_extend_plain_entries() {
    let mut map: PolyMap<&str, i32, &str> = PolyMap::new();
    map.set_grouped("one", 1, ["odd"]);

    map.extend([("two", 2), ("three", 3)]);
    assert_eq!(map.len(), 3);
    assert_eq!(map.groups().count(), 1);
}

#[test]
fn test_clear_everything() {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set_grouped("cat", "tom", ["animal"]);

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.groups().count(), 0);
}

#[test]
fn test_clear_by_group() {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set_grouped("cat", "tom", ["animal"]);
    map.set_grouped("marigold", "flowey", ["plant"]);

    map.clear_group(&"plant");
    assert_eq!(map.keys().collect::<Vec<_>>(), vec![&"cat"]);
    assert_eq!(map.groups().collect::<Vec<_>>(), vec![&"animal"]);

    // unknown group: no-op
    map.clear_group(&"mineral");
    assert_eq!(map.len(), 1);
}

#[test]
fn test_clear_group_retracts_other_memberships() {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set_grouped("dog", "odie", ["animal", "show"]);
    map.set_grouped("cat", "tom", ["animal"]);

    map.clear_group(&"show");

    assert!(!map.contains_key(&"dog"));
    assert!(map.contains_key(&"cat"));
    assert!(!map.group_keys(&"animal").any(|k| *k == "dog"));
}

#[test]
fn test_equals() {
    let mut left: PolyMap<&str, &str, &str> = PolyMap::new();
    left.set_grouped("cat", "tom", ["animal"]);

    let mut right: PolyMap<&str, &str, &str> = PolyMap::new();
    right.set_grouped("cat", "tom", ["animal"]);

    assert_eq!(left, right);

    right.add_groups(&"cat", ["pet"]).unwrap();
    assert_ne!(left, right);
}

#[test]
fn test_copy_equals_and_is_independent() {
    let mut original: PolyMap<&str, &str, &str> = PolyMap::new();
    original.set_grouped("cat", "tom", ["animal"]);

    let mut copy = original.clone();
    assert_eq!(original, copy);

    copy.ungroup(&"cat");
    assert_eq!(copy.groups().count(), 0);
    assert_eq!(original.groups().count(), 1);
    assert_ne!(original, copy);
}

#[test]
fn test_copy_group() {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set_grouped("cat", "tom", ["animal", "pet"]);
    map.set_grouped("marigold", "flowey", ["plant"]);

    let animals = map.copy_group(&"animal");
    assert_eq!(animals.len(), 1);
    assert_eq!(animals.get(&"cat"), Some(&"tom"));
    // only the requested group is reconstructed in the copy
    assert_eq!(animals.groups().collect::<Vec<_>>(), vec![&"animal"]);
}

#[test]
fn test_set_default() {
    let mut map: PolyMap<&str, i32, &str> = PolyMap::new();
    map.set("one", 1);

    assert_eq!(*map.set_default("one", 10), 1);
    assert_eq!(*map.set_default("two", 2), 2);
    assert_eq!(map.get(&"two"), Some(&2));
}

#[test]
fn test_set_default_grouped_tags_existing_key() {
    let mut map: PolyMap<&str, i32, &str> = PolyMap::new();
    map.set("one", 1);

    assert_eq!(*map.set_default_grouped("one", 10, "odd"), 1);
    assert!(map.groups_of(&"one").any(|g| *g == "odd"));

    assert_eq!(*map.set_default_grouped("three", 3, "odd"), 3);
    let odds = map.group_keys(&"odd").sorted().collect::<Vec<_>>();
    assert_eq!(odds, vec![&"one", &"three"]);
}

#[test]
fn test_unknown_group_reads_are_empty() {
    let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
    map.set("cat", "tom");

    assert_eq!(map.group_iter(&"animal").count(), 0);
    assert_eq!(map.group_keys(&"animal").count(), 0);
    assert_eq!(map.group_values(&"animal").count(), 0);
}

#[test]
fn test_whole_map_iteration() {
    let mut map: PolyMap<&str, i32, &str> = PolyMap::new();
    map.set_grouped("one", 1, ["odd"]);
    map.set("two", 2);

    let keys = map.keys().sorted().collect::<Vec<_>>();
    assert_eq!(keys, vec![&"one", &"two"]);

    let mut values: Vec<i32> = map.values().copied().collect();
    values.sort();
    assert_eq!(values, vec![1, 2]);

    let borrowed: Vec<_> = (&map).into_iter().map(|(k, _)| k).sorted().collect();
    assert_eq!(borrowed, vec![&"one", &"two"]);
}
