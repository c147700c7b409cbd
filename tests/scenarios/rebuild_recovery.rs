//! Scenario: rebuilds during a dev session
//!
//! Success criteria:
//! - a failing rebuild sends `errors` and never propagates
//! - the next successful rebuild sends `content-changed` exactly once
//! - unchanged output is never rewritten

use routegen::config::Config;
use routegen::infrastructure::RecordingNotifier;
use routegen::{DevServerMessage, FilesGenerator, GenerationState, RebuildOutcome, WriteOutcome};

use crate::common::*;

#[test]
fn scenario_failure_then_recovery_notifies_in_order() {
    let config = Config::default();
    let (fs, paths) = memory_project(&config);
    let routes = ScriptedRoutes::new(&[("/", "./src/pages/index.js")]);
    let notifier = RecordingNotifier::new();
    let (count, on_change) = change_counter();

    let mut generator = FilesGenerator::new(paths.clone(), config, fs.clone(), routes.clone())
        .with_notifier(notifier.clone())
        .on_change(on_change);
    generator.generate().unwrap();
    assert_eq!(count.get(), 1);

    // Step 1: a broken page makes the route source fail
    routes.fail_with("unexpected token in src/pages/about.js");
    let outcome = generator.rebuild();

    let RebuildOutcome::Failed(message) = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert!(message.contains("unexpected token"));
    assert_eq!(generator.state(), GenerationState::ErrorPending);
    assert_eq!(count.get(), 1, "failed rebuilds do not report a change");

    // Step 2: the page is fixed
    routes.set(&[
        ("/", "./src/pages/index.js"),
        ("/about", "./src/pages/about.js"),
    ]);
    let outcome = generator.rebuild();

    assert_eq!(outcome, RebuildOutcome::Recovered(WriteOutcome::Written));
    assert_eq!(generator.state(), GenerationState::Idle);
    assert_eq!(count.get(), 2);
    assert_eq!(
        notifier.messages(),
        vec![
            DevServerMessage::Errors(vec![message]),
            DevServerMessage::ContentChanged,
        ]
    );

    // Step 3: a further rebuild is ordinary again
    routes.set(&[("/", "./src/pages/index.js")]);
    assert_eq!(
        generator.rebuild(),
        RebuildOutcome::Rebuilt(WriteOutcome::Written)
    );
    assert_eq!(notifier.messages().len(), 2);
    assert!(!fs.get(&paths.router).unwrap().contains("/about"));
}

#[test]
fn scenario_recovery_rewrites_identical_output() {
    let config = Config::default();
    let (fs, paths) = memory_project(&config);
    let routes = ScriptedRoutes::new(&[("/", "./src/pages/index.js")]);

    let mut generator = FilesGenerator::new(paths.clone(), config, fs.clone(), routes.clone());
    generator.generate().unwrap();
    assert_eq!(fs.write_count(&paths.router), 1);

    routes.fail_with("boom");
    generator.rebuild();
    routes.set(&[("/", "./src/pages/index.js")]);
    let outcome = generator.rebuild();

    assert_eq!(outcome, RebuildOutcome::Recovered(WriteOutcome::Written));
    assert_eq!(fs.write_count(&paths.router), 2);
}

#[test]
fn scenario_repeated_failures_report_each_time() {
    let config = Config::default();
    let (fs, paths) = memory_project(&config);
    let routes = ScriptedRoutes::new(&[("/", "./src/pages/index.js")]);
    let notifier = RecordingNotifier::new();

    let mut generator = FilesGenerator::new(paths, config, fs, routes.clone())
        .with_notifier(notifier.clone());
    generator.generate().unwrap();

    routes.fail_with("first");
    generator.rebuild();
    routes.fail_with("second");
    generator.rebuild();
    routes.set(&[("/", "./src/pages/index.js")]);
    generator.rebuild();

    let messages = notifier.messages();
    assert_eq!(messages.len(), 3);
    assert!(matches!(&messages[0], DevServerMessage::Errors(m) if m[0].contains("first")));
    assert!(matches!(&messages[1], DevServerMessage::Errors(m) if m[0].contains("second")));
    assert_eq!(messages[2], DevServerMessage::ContentChanged);
}

#[test]
fn scenario_write_failure_is_caught_by_rebuild() {
    let config = Config::default();
    let (fs, paths) = memory_project(&config);
    let routes = ScriptedRoutes::new(&[("/", "./src/pages/index.js")]);
    let notifier = RecordingNotifier::new();

    let mut generator = FilesGenerator::new(paths.clone(), config, fs.clone(), routes.clone())
        .with_notifier(notifier.clone());
    generator.generate().unwrap();

    fs.set_write_failure(paths.router.clone(), true);
    routes.set(&[("/about", "./src/pages/about.js")]);
    assert!(matches!(generator.rebuild(), RebuildOutcome::Failed(_)));

    fs.set_write_failure(paths.router.clone(), false);
    assert_eq!(
        generator.rebuild(),
        RebuildOutcome::Recovered(WriteOutcome::Written)
    );
    assert!(fs.get(&paths.router).unwrap().contains("/about"));
}

#[test]
fn scenario_unchanged_routes_are_not_rewritten() {
    let config = Config::default();
    let (fs, paths) = memory_project(&config);
    let routes = ScriptedRoutes::new(&[
        ("/", "./src/pages/index.js"),
        ("/about", "./src/pages/about.js"),
    ]);

    let mut generator = FilesGenerator::new(paths.clone(), config, fs.clone(), routes);
    assert_eq!(generator.regenerate_routes().unwrap(), WriteOutcome::Written);
    assert_eq!(generator.regenerate_routes().unwrap(), WriteOutcome::Unchanged);
    assert_eq!(generator.regenerate_routes().unwrap(), WriteOutcome::Unchanged);

    assert_eq!(fs.write_count(&paths.router), 1);
}

#[test]
fn scenario_regenerate_routes_leaves_auxiliary_modules_alone() {
    let config = Config::default();
    let (fs, paths) = memory_project(&config);
    let routes = ScriptedRoutes::new(&[("/", "./src/pages/index.js")]);

    let mut generator = FilesGenerator::new(paths.clone(), config, fs.clone(), routes.clone());
    generator.generate().unwrap();
    routes.set(&[("/about", "./src/pages/about.js")]);
    generator.regenerate_routes().unwrap();
    generator.rebuild();

    assert_eq!(fs.write_count(&paths.library_entry), 1);
    assert_eq!(fs.write_count(&paths.register_sw), 1);
}

#[test]
fn scenario_duplicate_paths_keep_last_component() {
    let config = Config::default();
    let (fs, paths) = memory_project(&config);
    let routes = ScriptedRoutes::new(&[
        ("/", "./src/pages/index.js"),
        ("/about", "./src/pages/about.js"),
        ("/", "./src/pages/home.js"),
    ]);

    let mut generator = FilesGenerator::new(paths.clone(), config, fs.clone(), routes);
    generator.regenerate_routes().unwrap();

    let router = fs.get(&paths.router).unwrap();
    assert_eq!(router.matches("<Route exact path=\"/\"").count(), 1);
    assert!(router.contains("'../pages/home.js'"));
    assert!(!router.contains("'../pages/index.js'"));
    assert!(router.find("path=\"/\"").unwrap() < router.find("path=\"/about\"").unwrap());
    assert_eq!(generator.routes().len(), 3);
}
