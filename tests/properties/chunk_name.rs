//! Property tests for chunk name derivation.

use std::path::Path;

use proptest::prelude::*;

use routegen::ChunkName;

fn component_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap();
    (
        proptest::collection::vec(segment, 1..=4),
        prop_oneof![Just(".js"), Just(".jsx")],
        any::<bool>(),
    )
        .prop_map(|(segments, ext, dotted)| {
            let prefix = if dotted { "./" } else { "" };
            format!("{prefix}{}{ext}", segments.join("/"))
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: chunk names never panic on arbitrary input.
    #[test]
    fn property_chunk_name_never_panics(s in "(?s).{0,128}") {
        let _ = ChunkName::from_component(Path::new(&s));
    }

    /// PROPERTY: the same component always yields the same chunk name.
    #[test]
    fn property_chunk_name_is_deterministic(path in component_path()) {
        let a = ChunkName::from_component(Path::new(&path));
        let b = ChunkName::from_component(Path::new(&path));
        prop_assert_eq!(a, b);
    }

    /// PROPERTY: chunk names carry no separators, leading `./` or script extension.
    #[test]
    fn property_chunk_name_is_flat(path in component_path()) {
        let name = ChunkName::from_component(Path::new(&path));
        let name = name.as_str();

        prop_assert!(!name.contains('/'));
        prop_assert!(!name.starts_with('.'));
        prop_assert!(!name.ends_with(".js") && !name.ends_with(".jsx"));
    }

    /// PROPERTY: `./`-prefixed and bare forms of a path share a chunk.
    #[test]
    fn property_leading_dot_slash_is_ignored(path in component_path()) {
        let bare = path.trim_start_matches("./");
        prop_assert_eq!(
            ChunkName::from_component(Path::new(bare)),
            ChunkName::from_component(Path::new(&format!("./{bare}")))
        );
    }
}
