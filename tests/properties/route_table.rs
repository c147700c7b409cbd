//! Property tests for folding route entries into a table.

use std::collections::HashMap;
use std::path::PathBuf;

use proptest::prelude::*;

use routegen::{RouteEntry, RouteTable};

fn url_path() -> impl Strategy<Value = String> {
    // Small alphabet so duplicates are common
    proptest::string::string_regex("/[a-c]{0,2}").unwrap()
}

fn entries() -> impl Strategy<Value = Vec<RouteEntry>> {
    proptest::collection::vec(
        (url_path(), "[a-z]{1,8}").prop_map(|(path, file)| {
            RouteEntry::new(path, format!("./src/pages/{file}.js"))
        }),
        0..32,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every url path appears once and maps to its last occurrence.
    #[test]
    fn property_last_write_wins(entries in entries()) {
        let table: RouteTable = entries.iter().collect();

        let mut expected: HashMap<&str, &PathBuf> = HashMap::new();
        for entry in &entries {
            expected.insert(entry.path.as_str(), &entry.component);
        }

        prop_assert_eq!(table.len(), expected.len());
        for (path, component) in table.iter() {
            prop_assert_eq!(Some(&component.to_path_buf()), expected.get(path).copied());
        }
    }

    /// PROPERTY: table order follows first occurrence.
    #[test]
    fn property_first_occurrence_order(entries in entries()) {
        let table: RouteTable = entries.iter().collect();

        let mut first_seen: Vec<&str> = Vec::new();
        for entry in &entries {
            if !first_seen.contains(&entry.path.as_str()) {
                first_seen.push(entry.path.as_str());
            }
        }

        let order: Vec<&str> = table.iter().map(|(path, _)| path).collect();
        prop_assert_eq!(order, first_seen);
    }
}
