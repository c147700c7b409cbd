//! Router module rendering
//!
//! Turns a `RouteTable` into the body of the generated router module and
//! splices it into the router template.

use std::path::{Path, PathBuf};

use crate::domain::entities::RouteTable;
use crate::domain::ports::RequestCache;
use crate::domain::value_objects::{ChunkName, RenderMode};
use crate::paths::{to_slash, GeneratorPaths};

use super::template::{
    apply_substitutions, Substitution, CODE_FOR_PLUGIN, LIBRARY_NAME, ROUTE_COMPONENTS,
};

/// Rendered in place of a page that has not been requested yet
pub const COMPILING_PLACEHOLDER: &str = "() => <div>Compiling...</div>";

/// Inputs that shape route registrations
#[derive(Clone, Copy)]
pub struct RenderOptions<'a> {
    pub mode: RenderMode,
    /// Loading component for lazily imported pages, relative to the project root
    pub loading: Option<&'a Path>,
    pub requests: &'a dyn RequestCache,
}

/// Renders router modules for one project
pub struct TemplateRenderer<'a> {
    paths: &'a GeneratorPaths,
    options: RenderOptions<'a>,
}

impl<'a> TemplateRenderer<'a> {
    pub fn new(paths: &'a GeneratorPaths, options: RenderOptions<'a>) -> Self {
        Self { paths, options }
    }

    /// Route tree body: one `<Route>` per table entry, in table order
    pub fn render_routes(&self, table: &RouteTable) -> String {
        let lines: Vec<String> = table
            .iter()
            .map(|(path, component)| self.render_route(path, component))
            .collect();

        format!(
            "<Router history={{window.g_history}}>\n  <Switch>\n{}\n  </Switch>\n</Router>",
            lines.join("\n")
        )
    }

    fn render_route(&self, path: &str, component: &Path) -> String {
        let file = self.paths.import_path(component);
        match self.options.mode {
            RenderMode::OnDemand => {
                let reference = if self.options.requests.is_requested(path) {
                    format!("require('{}').default", file)
                } else {
                    COMPILING_PLACEHOLDER.to_string()
                };
                format!(
                    "    <Route exact path=\"{}\" component={{{}}}></Route>",
                    path, reference
                )
            }
            RenderMode::Production => format!(
                "    <Route exact path=\"{}\" component={{dynamic(() => import(/* webpackChunkName: '{}' */'{}'), {{ {} }}) }}></Route>",
                path,
                ChunkName::from_component(component),
                file,
                self.loading_option()
            ),
        }
    }

    fn loading_option(&self) -> String {
        match self.options.loading {
            Some(loading) => {
                let resolved: PathBuf = self.paths.cwd.join(loading);
                format!("loading: require('{}').default,", to_slash(&resolved))
            }
            None => String::new(),
        }
    }

    /// Wrap the route tree in `layout` when one exists
    pub fn inject_layout(&self, template: &str, layout: Option<&Path>) -> String {
        inject_layout(template, layout)
    }

    /// Final module text
    pub fn fill_placeholders(&self, template: &str, routes: &str, library_name: &str) -> String {
        fill_placeholders(template, routes, library_name)
    }
}

/// Insert the layout import and wrap the route tree
///
/// With no layout the template is returned unchanged.
pub fn inject_layout(template: &str, layout: Option<&Path>) -> String {
    let Some(layout) = layout else {
        return template.to_string();
    };

    let import = format!(
        "import Layout from '{}';\n{}",
        to_slash(layout),
        CODE_FOR_PLUGIN
    );
    let wrapped = format!("<Layout>{}</Layout>", ROUTE_COMPONENTS);

    apply_substitutions(
        template,
        &[
            Substitution::first(CODE_FOR_PLUGIN, import),
            Substitution::first(ROUTE_COMPONENTS, wrapped),
        ],
    )
}

/// Clear the plugin slot, insert the routes, name the library
pub fn fill_placeholders(template: &str, routes: &str, library_name: &str) -> String {
    apply_substitutions(
        template,
        &[
            Substitution::first(CODE_FOR_PLUGIN, ""),
            Substitution::first(ROUTE_COMPONENTS, routes),
            Substitution::all(LIBRARY_NAME, library_name),
        ],
    )
}
