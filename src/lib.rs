//! # polymap
//!
//! A key-value map whose entries can be tagged into named groups.
//!
//! `polymap` provides [`PolyMap`], a plain in-memory map augmented with a
//! group index: every key can belong to zero or more groups, and lookups,
//! iteration, and clearing all come in group-filtered flavors. The map keeps
//! the entries and the index consistent under every mutation — removing an
//! entry always retracts its key from every group, so the index never holds
//! dangling keys.
//!
//! ## Key Features
//!
//! - **Grouped access**: iterate, query, and clear entries by group
//! - **Consistent by construction**: every mutation maintains the group
//!   index; a group only exists while it has members
//! - **Many-to-many**: a key can carry any number of group tags, accumulated
//!   across inserts or replaced in one step
//! - **Generic**: any hashable key and group id types; group ids default to
//!   `String`
//! - **Default-factory variant**: [`DefaultPolyMap`] synthesizes values for
//!   absent keys, like a counter or accumulator map
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use polymap::PolyMap;
//!
//! let mut pets: PolyMap<String, String> = PolyMap::new();
//!
//! // Tag entries with groups as they're stored
//! pets.set_grouped("cat".to_string(), "Tom".to_string(), ["animal".to_string()]);
//! pets.set_grouped(
//!     "marigold".to_string(),
//!     "Flowey".to_string(),
//!     ["plant".to_string()],
//! );
//!
//! // Plain map behavior still works
//! assert_eq!(pets.get(&"cat".to_string()), Some(&"Tom".to_string()));
//!
//! // ...plus group-filtered reads
//! let plants: Vec<_> = pets.group_keys(&"plant".to_string()).collect();
//! assert_eq!(plants, vec![&"marigold".to_string()]);
//! ```
//!
//! ### Managing Group Membership
//!
//! ```rust
//! use polymap::{MapError, PolyMap};
//!
//! let mut map: PolyMap<&str, &str, &str> = PolyMap::new();
//! map.set_grouped("dog", "Odie", ["animal", "show"]);
//!
//! // Tags accumulate across inserts...
//! map.set("dog", "Garfield's friend");
//! assert_eq!(map.groups_of(&"dog").count(), 2);
//!
//! // ...until replaced in one step
//! map.set_groups(&"dog", ["pet"])?;
//! assert_eq!(map.groups_of(&"dog").collect::<Vec<_>>(), vec![&"pet"]);
//!
//! // Untagging keeps the entry, only the memberships go away
//! map.ungroup(&"dog");
//! assert_eq!(map.groups_of(&"dog").count(), 0);
//! assert!(map.contains_key(&"dog"));
//! # Ok::<(), MapError>(())
//! ```
//!
//! ### Default-Factory Variant
//!
//! ```rust
//! use polymap::DefaultPolyMap;
//!
//! let mut tally: DefaultPolyMap<&str, i32> = DefaultPolyMap::with_default();
//!
//! // Absent keys spring into existence with the factory value
//! *tally.get_or_default("wins") += 1;
//! *tally.get_or_default("wins") += 1;
//! *tally.get_or_default("losses") += 1;
//!
//! assert_eq!(tally.get(&"wins"), Some(&2));
//! assert_eq!(tally.get(&"losses"), Some(&1));
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use polymap::{MapError, PolyMap};
//!
//! let mut map: PolyMap<&str, i32, &str> = PolyMap::new();
//! map.set("one", 1);
//!
//! // Grouping an unknown key is a contract violation
//! match map.set_groups(&"two", ["odd"]) {
//!     Err(MapError::KeyNotFound(_)) => println!("no such key"),
//!     _ => unreachable!(),
//! }
//!
//! // So is supplying no groups at all
//! match map.set_groups(&"one", []) {
//!     Err(MapError::NoGroups) => println!("nothing to assign"),
//!     _ => unreachable!(),
//! }
//!
//! // Absent-key reads are not errors, just `None`
//! assert_eq!(map.get(&"two"), None);
//! assert_eq!(map.pop(&"two"), None);
//! ```

mod default_map;
mod error;
mod groups;
mod map;

pub use default_map::DefaultPolyMap;
pub use error::MapError;
pub use map::PolyMap;
