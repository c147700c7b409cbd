//! Property tests for the debounce state machine.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use routegen::application::Debouncer;

const WINDOW: Duration = Duration::from_millis(100);

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a burst of changes spaced closer than the window fires once,
    /// with every distinct path, after the last change settles.
    #[test]
    fn property_burst_fires_once(
        gaps in proptest::collection::vec(0u64..100, 1..20),
        names in proptest::collection::vec("[a-d]", 20),
    ) {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();
        let mut now = start;
        let mut fired = 0;

        for (i, gap) in gaps.iter().enumerate() {
            now += Duration::from_millis(*gap);
            if debouncer.poll(now).is_some() {
                fired += 1;
            }
            debouncer.record(PathBuf::from(format!("{}.js", names[i])), now);
        }
        prop_assert_eq!(fired, 0);
        prop_assert!(debouncer.poll(now + WINDOW - Duration::from_millis(1)).is_none());

        let batch = debouncer.poll(now + WINDOW).expect("settled batch");
        let mut expected: Vec<PathBuf> = names[..gaps.len()]
            .iter()
            .map(|n| PathBuf::from(format!("{n}.js")))
            .collect();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(batch, expected);
        prop_assert!(!debouncer.is_pending());
    }
}
