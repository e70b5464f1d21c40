use polymap::{DefaultPolyMap, MapError};

fn main() -> Result<(), MapError> {
    // Buckets of words keyed by their first letter; absent buckets spring
    // into existence empty.
    let mut index: DefaultPolyMap<char, Vec<&str>, &str> = DefaultPolyMap::new(Vec::new);

    let words = [
        "apple",
        "avocado",
        "banana",
        "blueberry",
        "cherry",
        "elderberry",
    ];
    for word in words {
        if let Some(initial) = word.chars().next() {
            index.get_or_default(initial).push(word);
        }
    }

    // Tag the buckets themselves, then walk them group by group
    let initials: Vec<char> = index.keys().copied().collect();
    for initial in initials {
        let group = if "aeiou".contains(initial) {
            "vowel"
        } else {
            "consonant"
        };
        index.add_groups(&initial, [group])?;
    }

    for (group, buckets) in index.grouped() {
        println!("{} initials:", group);
        for (initial, bucket) in buckets {
            println!("  {}: {:?}", initial, bucket);
        }
    }

    Ok(())
}
