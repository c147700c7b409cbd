//! Shared helpers for routegen integration tests.
//!
//! - `memory_project()`: an in-memory project rooted at `/app`
//! - `ScriptedRoutes`: a route source whose output tests can swap between rebuilds
//! - `write_page_tree()`: a small page tree on disk for end-to-end runs

#![allow(dead_code)]

use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use routegen::config::Config;
use routegen::error::{GenError, GenResult};
use routegen::infrastructure::MemoryFs;
use routegen::{GeneratorPaths, RouteEntry, RouteSource};

pub const PROJECT_ROOT: &str = "/app";

pub fn memory_project(config: &Config) -> (MemoryFs, GeneratorPaths) {
    (MemoryFs::new(), GeneratorPaths::new(PROJECT_ROOT, config))
}

/// Route source backed by a shared, replaceable list
///
/// `fail_with` makes every following call return an error until `set` is
/// called again.
#[derive(Clone)]
pub struct ScriptedRoutes {
    inner: Arc<Mutex<Result<Vec<RouteEntry>, String>>>,
}

impl ScriptedRoutes {
    pub fn new(routes: &[(&str, &str)]) -> Self {
        let source = Self {
            inner: Arc::new(Mutex::new(Ok(Vec::new()))),
        };
        source.set(routes);
        source
    }

    pub fn set(&self, routes: &[(&str, &str)]) {
        let entries = routes
            .iter()
            .map(|(path, component)| RouteEntry::new(*path, *component))
            .collect();
        *self.inner.lock().unwrap() = Ok(entries);
    }

    pub fn fail_with(&self, message: &str) {
        *self.inner.lock().unwrap() = Err(message.to_string());
    }
}

impl RouteSource for ScriptedRoutes {
    fn routes(&self, _paths: &GeneratorPaths, _config: &Config) -> GenResult<Vec<RouteEntry>> {
        match &*self.inner.lock().unwrap() {
            Ok(entries) => Ok(entries.clone()),
            Err(message) => Err(GenError::InvalidRoute {
                component: "src/pages".into(),
                message: message.clone(),
            }),
        }
    }
}

/// Counter for `on_change` callbacks
pub fn change_counter() -> (Rc<Cell<usize>>, impl FnMut() + 'static) {
    let count = Rc::new(Cell::new(0));
    let handle = count.clone();
    (count, move || handle.set(handle.get() + 1))
}

/// `src/pages/{index,about}.js` and `src/pages/users/index.js`
pub fn write_page_tree(root: &Path) {
    let pages = root.join("src/pages");
    fs::create_dir_all(pages.join("users")).unwrap();
    fs::write(pages.join("index.js"), "export default () => 'home';\n").unwrap();
    fs::write(pages.join("about.js"), "export default () => 'about';\n").unwrap();
    fs::write(pages.join("users/index.js"), "export default () => 'users';\n").unwrap();
}
