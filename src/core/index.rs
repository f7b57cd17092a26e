//! # Jump Index
//!
//! Per-collection map from a leading symbol to the first item that starts
//! with it. Items are never owned here: an [`ItemRef`] is the collection's
//! ordinal plus the item's position in that collection's sorted list.
//!
//! ## Bucket advance
//!
//! The scan seeds the index with the first item, then walks the list once
//! with a cursor symbol. An item whose leading symbol is greater than the
//! cursor is inserted (first one wins) and the cursor moves up by exactly
//! one symbol, not to the item's symbol:
//!
//! ```text
//! items:   Apple  Egg  Eel  Fig
//! cursor:  A      B    C    D      (after each step)
//! index:   A      E    -    F
//! ```
//!
//! So a run of one letter after a gap keeps advancing the cursor without
//! overwriting anything. Scanning stops once the cursor passes the last
//! symbol of the alphabet.

use std::collections::{BTreeMap, HashMap};

use crate::core::alphabet::{Alphabet, canonical};
use crate::core::library::{Library, System};

/// A sorted group of items with a stable id.
pub trait Collection {
    fn id(&self) -> &str;

    fn len(&self) -> usize;

    /// Leading character of the item's clean name, if it has one.
    fn leading_char(&self, position: usize) -> Option<char>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Collection for System {
    fn id(&self) -> &str {
        &self.start_path
    }

    fn len(&self) -> usize {
        self.root.len()
    }

    fn leading_char(&self, position: usize) -> Option<char> {
        self.root.get(position).and_then(|e| e.leading_char())
    }
}

/// Non-owning reference into an externally owned, sorted item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub collection: usize,
    pub position: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionIndex {
    entries: HashMap<char, ItemRef>,
}

impl CollectionIndex {
    pub fn get(&self, symbol: char) -> Option<ItemRef> {
        self.entries.get(&canonical(symbol)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in symbol order.
    pub fn sorted(&self) -> Vec<(char, ItemRef)> {
        let mut entries: Vec<(char, ItemRef)> =
            self.entries.iter().map(|(c, r)| (*c, *r)).collect();
        entries.sort_by_key(|(c, _)| *c);
        entries
    }

    /// Inserts unless the symbol is already present.
    fn insert_first(&mut self, symbol: char, item: ItemRef) {
        self.entries.entry(symbol).or_insert(item);
    }
}

/// Indices for every collection, addressed by collection id.
#[derive(Debug, Clone, Default)]
pub struct IndexSet {
    positions: HashMap<String, usize>,
    /// One slot per collection ordinal; `None` for empty collections.
    indices: Vec<Option<CollectionIndex>>,
}

impl IndexSet {
    pub fn lookup(&self, collection_id: &str, symbol: char) -> Option<ItemRef> {
        self.collection(collection_id)
            .and_then(|index| index.get(symbol))
    }

    pub fn collection(&self, collection_id: &str) -> Option<&CollectionIndex> {
        let ordinal = *self.positions.get(collection_id)?;
        self.indices.get(ordinal)?.as_ref()
    }

    pub fn ordinal(&self, collection_id: &str) -> Option<usize> {
        self.positions.get(collection_id).copied()
    }

    /// Number of collections registered, empty ones included.
    pub fn collection_count(&self) -> usize {
        self.indices.len()
    }
}

/// Builds the index for every collection, in collection order.
pub fn build_index<C: Collection>(collections: &[C], alphabet: &Alphabet) -> IndexSet {
    let mut set = IndexSet {
        positions: HashMap::with_capacity(collections.len()),
        indices: Vec::with_capacity(collections.len()),
    };

    for (ordinal, collection) in collections.iter().enumerate() {
        set.positions
            .entry(collection.id().to_string())
            .or_insert(ordinal);
        set.indices.push(index_collection(ordinal, collection, alphabet));
    }

    set
}

fn index_collection<C: Collection>(
    ordinal: usize,
    collection: &C,
    alphabet: &Alphabet,
) -> Option<CollectionIndex> {
    if collection.is_empty() {
        return None;
    }

    let mut index = CollectionIndex::default();
    let item = |position| ItemRef {
        collection: ordinal,
        position,
    };

    let Some(first) = collection.leading_char(0).map(canonical) else {
        return Some(index);
    };
    index.insert_first(first, item(0));

    let last = alphabet.last();
    let mut cursor = first;
    for position in 0..collection.len() {
        if cursor > last {
            break;
        }
        let Some(leading) = collection.leading_char(position).map(canonical) else {
            continue;
        };
        if leading > cursor {
            index.insert_first(leading, item(position));
            match char::from_u32(cursor as u32 + 1) {
                Some(next) => cursor = next,
                None => break,
            }
        }
    }

    Some(index)
}

/// Readable form of an index set: system id → symbol → clean name.
pub fn dump(library: &Library, set: &IndexSet) -> BTreeMap<String, BTreeMap<String, String>> {
    library
        .systems
        .iter()
        .map(|system| {
            let entries = set
                .collection(system.id())
                .map(|index| {
                    index
                        .sorted()
                        .into_iter()
                        .filter_map(|(symbol, item)| {
                            let entry = system.root.get(item.position)?;
                            Some((symbol.to_string(), entry.name.clone()))
                        })
                        .collect()
                })
                .unwrap_or_default();
            (system.id().to_string(), entries)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::system;

    fn names(system: &System, index: &CollectionIndex) -> Vec<(char, String)> {
        index
            .sorted()
            .into_iter()
            .map(|(c, r)| (c, system.root[r.position].name.clone()))
            .collect()
    }

    #[test]
    fn test_first_entry_is_first_item() {
        let sys = system("nes", &["Castlevania", "Contra", "Duck Hunt"]);
        let set = build_index(std::slice::from_ref(&sys), &Alphabet::latin());
        assert_eq!(
            set.lookup("nes", 'C'),
            Some(ItemRef {
                collection: 0,
                position: 0
            })
        );
    }

    #[test]
    fn test_scenario_apple_ant_banana() {
        // Unsorted on purpose: the builder trusts the given order.
        let sys = System {
            name: "fruit".to_string(),
            fullname: "fruit".to_string(),
            start_path: "fruit".to_string(),
            root: ["Apple", "Ant", "Banana", "Car", "Castle"]
                .iter()
                .map(|n| crate::core::library::Entry::game(*n, *n))
                .collect(),
        };
        let set = build_index(std::slice::from_ref(&sys), &Alphabet::latin());
        let index = set.collection("fruit").unwrap();
        assert_eq!(
            names(&sys, index),
            vec![
                ('A', "Apple".to_string()),
                ('B', "Banana".to_string()),
                ('C', "Car".to_string()),
            ]
        );
        assert_eq!(set.lookup("fruit", 'D'), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let sys = system("gb", &["alleyway", "Baseball"]);
        let set = build_index(std::slice::from_ref(&sys), &Alphabet::latin());
        assert_eq!(set.lookup("gb", 'a').map(|r| r.position), Some(0));
        assert_eq!(set.lookup("gb", 'B').map(|r| r.position), Some(1));
    }

    #[test]
    fn test_empty_collection_has_no_index() {
        let systems = vec![system("empty", &[]), system("zoo", &["Zebra"])];
        let set = build_index(&systems, &Alphabet::latin());

        assert_eq!(set.collection_count(), 2);
        assert!(set.collection("empty").is_none());
        for symbol in Alphabet::latin().ordered() {
            assert_eq!(set.lookup("empty", *symbol), None);
        }
        assert_eq!(
            set.lookup("zoo", 'Z'),
            Some(ItemRef {
                collection: 1,
                position: 0
            })
        );
        assert_eq!(set.lookup("zoo", 'A'), None);
    }

    #[test]
    fn test_unknown_collection_not_found() {
        let sys = system("nes", &["Metroid"]);
        let set = build_index(std::slice::from_ref(&sys), &Alphabet::latin());
        assert_eq!(set.lookup("snes", 'M'), None);
    }

    #[test]
    fn test_values_stay_in_their_collection() {
        let systems = vec![
            system("a", &["Alpha", "Beta", "Gamma"]),
            system("b", &["Delta", "Epsilon"]),
            system("c", &["Omega"]),
        ];
        let set = build_index(&systems, &Alphabet::latin());
        for (ordinal, sys) in systems.iter().enumerate() {
            let index = set.collection(sys.id()).unwrap();
            for (_, item) in index.sorted() {
                assert_eq!(item.collection, ordinal);
                assert!(item.position < sys.root.len());
            }
        }
    }

    #[test]
    fn test_cursor_advances_one_symbol_per_insert() {
        // Known quirk: after the jump from A to E the cursor sits at B, so
        // each following E item bumps it once more without overwriting E.
        let sys = system("quirk", &["Apple", "Eagle", "Ear", "Eel", "Egg", "Fig"]);
        let set = build_index(std::slice::from_ref(&sys), &Alphabet::latin());
        let index = set.collection("quirk").unwrap();
        assert_eq!(
            names(&sys, index),
            vec![
                ('A', "Apple".to_string()),
                ('E', "Eagle".to_string()),
                ('F', "Fig".to_string()),
            ]
        );
    }

    #[test]
    fn test_digits_and_symbols_before_letters() {
        let sys = system("arcade", &["1942", "Asteroids", "Berzerk"]);
        let set = build_index(std::slice::from_ref(&sys), &Alphabet::latin());
        assert_eq!(set.lookup("arcade", '1').map(|r| r.position), Some(0));
        assert_eq!(set.lookup("arcade", 'A').map(|r| r.position), Some(1));
        assert_eq!(set.lookup("arcade", 'B').map(|r| r.position), Some(2));
    }

    #[test]
    fn test_stops_after_last_symbol() {
        let alphabet = Alphabet::from_symbols("ABC").unwrap();
        let sys = system("short", &["Apple", "Banana", "Cherry", "Date", "Elder"]);
        let set = build_index(std::slice::from_ref(&sys), &alphabet);
        // Date still lands while the cursor sits on C; the cursor then passes
        // C and the scan ends before Elder.
        assert_eq!(set.lookup("short", 'C').map(|r| r.position), Some(2));
        assert_eq!(set.lookup("short", 'D').map(|r| r.position), Some(3));
        assert_eq!(set.lookup("short", 'E'), None);
    }

    #[test]
    fn test_punctuation_led_entry_keeps_letters_indexed() {
        let sys = system("snes", &["Apple", "Banana", "_Homebrew"]);
        let set = build_index(std::slice::from_ref(&sys), &Alphabet::latin());
        let index = set.collection("snes").unwrap();
        assert_eq!(
            names(&sys, index),
            vec![
                ('A', "Apple".to_string()),
                ('B', "Banana".to_string()),
                ('_', "_Homebrew".to_string()),
            ]
        );
    }

    #[test]
    fn test_dump_names_entries() {
        let library = Library::new(vec![system("nes", &["Contra", "Metroid"]), system("empty", &[])]);
        let set = build_index(&library.systems, &Alphabet::latin());
        let dumped = dump(&library, &set);
        assert_eq!(dumped["nes"]["C"], "Contra");
        assert_eq!(dumped["nes"]["M"], "Metroid");
        assert!(dumped["empty"].is_empty());
    }
}
