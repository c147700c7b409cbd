//! Files generator
//!
//! Owns the generated artifacts and the rebuild error state:
//!
//! - `generate()` - full initial run (router + entry + service worker)
//! - `regenerate_routes()` - router module only
//! - `rebuild()` - recovery boundary used by the watch loop
//! - `watch()` - debounced rebuilds until the running flag is cleared

use std::sync::atomic::AtomicBool;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::config::Config;
use crate::domain::entities::{GeneratedArtifact, RouteEntry, RouteTable, WriteOutcome};
use crate::domain::ports::{
    DevServerNotifier, FileSystem, GeneratorPlugin, RequestCache, RouteSource,
};
use crate::domain::services::{RenderOptions, TemplateRenderer};
use crate::domain::value_objects::RenderMode;
use crate::error::GenResult;
use crate::infrastructure::devserver::{NoopNotifier, SharedRequestCache};
use crate::paths::GeneratorPaths;

use super::templates::{load_template, TemplateKind, SERVICE_WORKER_BOOTSTRAP};
use super::watch::{ChangeWatcher, WatchSession};
use super::writer::ArtifactWriter;

/// Rebuild lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Generating,
    /// The last rebuild failed; the next success notifies clients
    ErrorPending,
}

/// What a single `rebuild()` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebuildOutcome {
    /// Routes regenerated
    Rebuilt(WriteOutcome),
    /// Routes regenerated after a failed rebuild; clients were told to reload
    Recovered(WriteOutcome),
    /// Regeneration failed; clients were sent the message
    Failed(String),
}

/// Route module generator for one project
pub struct FilesGenerator<FS: FileSystem, RS: RouteSource> {
    paths: GeneratorPaths,
    config: Config,
    fs: FS,
    route_source: RS,
    notifier: Box<dyn DevServerNotifier>,
    requests: Box<dyn RequestCache>,
    plugins: Vec<Box<dyn GeneratorPlugin>>,
    mode: RenderMode,
    state: GenerationState,
    router: GeneratedArtifact,
    library_entry: GeneratedArtifact,
    register_sw: GeneratedArtifact,
    routes: Vec<RouteEntry>,
    on_change: Option<Box<dyn FnMut()>>,
}

impl<FS: FileSystem, RS: RouteSource> FilesGenerator<FS, RS> {
    pub fn new(paths: GeneratorPaths, config: Config, fs: FS, route_source: RS) -> Self {
        Self {
            router: GeneratedArtifact::new(paths.router.clone()),
            library_entry: GeneratedArtifact::new(paths.library_entry.clone()),
            register_sw: GeneratedArtifact::new(paths.register_sw.clone()),
            paths,
            config,
            fs,
            route_source,
            notifier: Box::new(NoopNotifier),
            requests: Box::new(SharedRequestCache::new()),
            plugins: Vec::new(),
            mode: RenderMode::default(),
            state: GenerationState::Idle,
            routes: Vec::new(),
            on_change: None,
        }
    }

    pub fn with_notifier(mut self, notifier: impl DevServerNotifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_request_cache(mut self, requests: impl RequestCache + 'static) -> Self {
        self.requests = Box::new(requests);
        self
    }

    pub fn with_plugin(mut self, plugin: impl GeneratorPlugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Called after `generate()` and after every successful rebuild
    pub fn on_change(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn paths(&self) -> &GeneratorPaths {
        &self.paths
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    /// Routes from the most recent regeneration, in source order
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    pub fn router_artifact(&self) -> &GeneratedArtifact {
        &self.router
    }

    /// Full generation
    ///
    /// Failures propagate: there is no watch session to keep alive yet.
    pub fn generate(&mut self) -> GenResult<()> {
        debug!(dir = %self.paths.abs_tmp_dir.display(), "creating tmp dir");
        self.fs.create_dir_all(&self.paths.abs_tmp_dir)?;

        for plugin in &self.plugins {
            plugin.generate_entry(&self.paths)?;
        }

        self.regenerate_routes()?;

        let mut entry = load_template(&self.fs, &self.paths, &self.config, TemplateKind::Entry)?;
        if !self.config.disable_service_worker {
            entry.push_str(SERVICE_WORKER_BOOTSTRAP);
        }
        let register_sw = load_template(
            &self.fs,
            &self.paths,
            &self.config,
            TemplateKind::RegisterServiceWorker,
        )?;

        let writer = ArtifactWriter::new(&self.fs);
        writer.write_if_changed(&mut self.library_entry, &entry)?;
        writer.write_if_changed(&mut self.register_sw, &register_sw)?;

        info!(
            routes = self.routes.len(),
            mode = %self.mode,
            dir = %self.paths.tmp_dir.display(),
            "generated files"
        );
        self.emit_change();
        Ok(())
    }

    /// Regenerate the router module
    ///
    /// The entry and service-worker modules are never touched here.
    pub fn regenerate_routes(&mut self) -> GenResult<WriteOutcome> {
        let entries = self.route_source.routes(&self.paths, &self.config)?;
        let table: RouteTable = entries.iter().collect();
        self.routes = entries;

        let mut template =
            load_template(&self.fs, &self.paths, &self.config, TemplateKind::Router)?;
        for plugin in &self.plugins {
            template = plugin.pre_build_router_content(template, &self.paths)?;
        }

        let layout = self
            .fs
            .exists(&self.paths.layout)
            .then_some(self.paths.layout.as_path());

        let renderer = TemplateRenderer::new(
            &self.paths,
            RenderOptions {
                mode: self.mode,
                loading: self.config.loading.as_deref(),
                requests: self.requests.as_ref(),
            },
        );
        let template = renderer.inject_layout(&template, layout);
        let routes = renderer.render_routes(&table);
        let content = renderer.fill_placeholders(&template, &routes, &self.config.library_name);

        let outcome = ArtifactWriter::new(&self.fs).write_if_changed(&mut self.router, &content)?;
        debug!(routes = table.len(), written = outcome.is_written(), "router regenerated");
        Ok(outcome)
    }

    /// Regenerate routes, reporting instead of propagating failures
    pub fn rebuild(&mut self) -> RebuildOutcome {
        let previous = std::mem::replace(&mut self.state, GenerationState::Generating);

        match self.regenerate_routes() {
            Ok(outcome) => {
                self.emit_change();
                self.state = GenerationState::Idle;
                if previous == GenerationState::ErrorPending {
                    info!("recovered from previous rebuild error");
                    self.notifier.content_changed();
                    RebuildOutcome::Recovered(outcome)
                } else {
                    RebuildOutcome::Rebuilt(outcome)
                }
            }
            Err(e) => {
                let message = e.to_string();
                error!(error = %message, "rebuild failed");
                self.notifier.errors(std::slice::from_ref(&message));
                self.state = GenerationState::ErrorPending;
                self.router.invalidate();
                RebuildOutcome::Failed(message)
            }
        }
    }

    /// Rebuild on settled changes to the pages or layout directory until
    /// `running` is cleared
    ///
    /// The session is stopped before returning.
    pub fn watch(&mut self, running: &AtomicBool) -> GenResult<()> {
        let mut session = WatchSession::new([
            self.paths.pages.clone(),
            self.paths.layout_dir().to_path_buf(),
        ]);
        session.start()?;
        info!(
            roots = ?session.roots(),
            debounce_ms = self.config.watch.debounce_ms,
            "watching for changes"
        );

        let debounce = Duration::from_millis(self.config.watch.debounce_ms);
        let mut watcher = ChangeWatcher::new(session, debounce);
        watcher.run(running, |changes| {
            for path in &changes {
                debug!(path = %path.display(), "changed");
            }
            self.rebuild();
        });

        watcher.source_mut().stop();
        info!("stopped watching");
        Ok(())
    }

    fn emit_change(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback();
        }
    }
}
