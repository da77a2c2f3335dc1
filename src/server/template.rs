//! Template rendering for handlers.

use std::path::Path;

use minijinja::Environment;
use serde::Serialize;

use crate::server::error::Error;

/// A process-wide template resource.
///
/// Wraps a `minijinja` environment with a filesystem loader rooted at the
/// configured template directory. Read-only after construction, so it is
/// shared across connections behind an `Arc` without synchronization.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Create a template resource loading from `template_path`.
    pub fn new(template_path: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(template_path.as_ref()));
        Self { env }
    }

    /// Render the named template with the given context.
    pub fn render(&self, name: &str, ctx: impl Serialize) -> Result<String, Error> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }
}
