//! Server-rendered HTML pages.

use minijinja::{Environment, context};

use genvision_core::ModelRegistry;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Build the template environment with every page registered.
pub fn templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("index.html", INDEX_TEMPLATE)?;
    Ok(env)
}

/// Render the landing page listing every model in `registry`.
pub fn render_index(
    env: &Environment<'_>,
    registry: &ModelRegistry,
) -> Result<String, minijinja::Error> {
    env.get_template("index.html")?.render(context! {
        title => "GenVision Hub",
        models => registry.models(),
    })
}
