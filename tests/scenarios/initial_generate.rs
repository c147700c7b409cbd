//! Scenario: first `generate()` for a project
//!
//! Success criteria:
//! - router, entry and service-worker modules land in the tmp dir
//! - the service-worker bootstrap follows `disable_service_worker`
//! - a missing configured template aborts before anything is written

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use routegen::application::SERVICE_WORKER_BOOTSTRAP;
use routegen::config::Config;
use routegen::error::{GenError, GenResult};
use routegen::{FilesGenerator, GeneratorPaths, GeneratorPlugin};

use crate::common::*;

#[test]
fn scenario_generate_writes_all_three_modules() {
    let config = Config::default();
    let (fs, paths) = memory_project(&config);
    let routes = ScriptedRoutes::new(&[("/", "./src/pages/index.js")]);

    let mut generator = FilesGenerator::new(paths.clone(), config, fs.clone(), routes);
    generator.generate().unwrap();

    assert!(fs.has_dir(&paths.abs_tmp_dir));
    let router = fs.get(&paths.router).expect("router written");
    assert!(router.contains("import dynamic from 'umi/dynamic';"));
    assert!(router.contains("<Route exact path=\"/\""));
    assert!(!router.contains("<%="), "placeholders left in:\n{router}");

    let entry = fs.get(&paths.library_entry).expect("entry written");
    assert_eq!(paths.library_entry, PathBuf::from("/app/src/.routegen/umi.js"));
    assert!(entry.ends_with(SERVICE_WORKER_BOOTSTRAP));

    let register_sw = fs.get(&paths.register_sw).expect("service worker written");
    assert!(register_sw.contains("serviceWorker"));
}

#[test]
fn scenario_disabled_service_worker_omits_bootstrap() {
    let config = Config {
        disable_service_worker: true,
        ..Config::default()
    };
    let (fs, paths) = memory_project(&config);
    let routes = ScriptedRoutes::new(&[("/", "./src/pages/index.js")]);

    FilesGenerator::new(paths.clone(), config, fs.clone(), routes)
        .generate()
        .unwrap();

    let entry = fs.get(&paths.library_entry).unwrap();
    assert!(!entry.contains("registerServiceWorker"));
}

#[test]
fn scenario_library_name_names_entry_and_imports() {
    let config = Config {
        library_name: "dva".to_string(),
        ..Config::default()
    };
    let (fs, paths) = memory_project(&config);
    let routes = ScriptedRoutes::new(&[("/", "./src/pages/index.js")]);

    FilesGenerator::new(paths.clone(), config, fs.clone(), routes)
        .generate()
        .unwrap();

    assert!(fs.get(&PathBuf::from("/app/src/.routegen/dva.js")).is_some());
    let router = fs.get(&paths.router).unwrap();
    assert!(router.contains("import dynamic from 'dva/dynamic';"));
}

#[test]
fn scenario_missing_router_template_is_fatal() {
    let mut config = Config::default();
    config.templates.router = Some(PathBuf::from("templates/router.js"));
    let (fs, paths) = memory_project(&config);
    let routes = ScriptedRoutes::new(&[("/", "./src/pages/index.js")]);

    let (count, on_change) = change_counter();
    let mut generator =
        FilesGenerator::new(paths.clone(), config, fs.clone(), routes).on_change(on_change);
    let err = generator.generate().unwrap_err();

    assert!(matches!(err, GenError::TemplateNotFound { kind: "router", .. }));
    assert!(err.to_string().contains("/app/templates/router.js"));
    assert_eq!(fs.write_count(&paths.router), 0);
    assert_eq!(fs.write_count(&paths.library_entry), 0);
    assert_eq!(count.get(), 0);
}

#[test]
fn scenario_configured_templates_replace_builtins() {
    let mut config = Config::default();
    config.templates.router = Some(PathBuf::from("tpl/router.js"));
    config.templates.entry = Some(PathBuf::from("tpl/entry.js"));
    let (fs, paths) = memory_project(&config);
    fs.insert(
        "/app/tpl/router.js",
        "// <%= libraryName %>\n<%= codeForPlugin %>\n<%= routeComponents %>\n",
    );
    fs.insert("/app/tpl/entry.js", "// custom entry\n");
    let routes = ScriptedRoutes::new(&[("/", "./src/pages/index.js")]);

    FilesGenerator::new(paths.clone(), config, fs.clone(), routes)
        .generate()
        .unwrap();

    let router = fs.get(&paths.router).unwrap();
    assert!(router.starts_with("// umi\n\n<Router history={window.g_history}>"));
    let entry = fs.get(&paths.library_entry).unwrap();
    assert!(entry.starts_with("// custom entry\n"));
}

struct RecordingPlugin {
    calls: Rc<RefCell<Vec<&'static str>>>,
}

impl GeneratorPlugin for RecordingPlugin {
    fn name(&self) -> &str {
        "recording"
    }

    fn generate_entry(&self, _paths: &GeneratorPaths) -> GenResult<()> {
        self.calls.borrow_mut().push("generate_entry");
        Ok(())
    }

    fn pre_build_router_content(
        &self,
        template: String,
        _paths: &GeneratorPaths,
    ) -> GenResult<String> {
        self.calls.borrow_mut().push("pre_build_router_content");
        Ok(template.replace("<%= codeForPlugin %>", "import './plugin';\n<%= codeForPlugin %>"))
    }
}

#[test]
fn scenario_plugins_hook_into_generation() {
    let config = Config::default();
    let (fs, paths) = memory_project(&config);
    let routes = ScriptedRoutes::new(&[("/", "./src/pages/index.js")]);
    let calls = Rc::new(RefCell::new(Vec::new()));

    let mut generator = FilesGenerator::new(paths.clone(), config, fs.clone(), routes)
        .with_plugin(RecordingPlugin {
            calls: calls.clone(),
        });
    generator.generate().unwrap();
    generator.regenerate_routes().unwrap();

    assert_eq!(
        *calls.borrow(),
        vec![
            "generate_entry",
            "pre_build_router_content",
            "pre_build_router_content"
        ]
    );
    assert!(fs.get(&paths.router).unwrap().contains("import './plugin';"));
}

#[test]
fn scenario_on_change_fires_after_generate() {
    let config = Config::default();
    let (fs, paths) = memory_project(&config);
    let routes = ScriptedRoutes::new(&[("/", "./src/pages/index.js")]);
    let (count, on_change) = change_counter();

    let mut generator = FilesGenerator::new(paths, config, fs, routes).on_change(on_change);
    generator.generate().unwrap();

    assert_eq!(count.get(), 1);
}
