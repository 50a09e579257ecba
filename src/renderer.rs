//! Template rendering engine for generated component sources.
use crate::error::{Error, Result};
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template source to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered source text
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that keeps the trailing newline of every template,
    /// so generated files end with one.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::MinijinjaError` if the template fails to parse or render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env
            .render_str(template, context)
            .map_err(Error::MinijinjaError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_context() {
        let renderer = MiniJinjaRenderer::new();
        let context = serde_json::json!({ "name": "Card" });

        let result = renderer.render("class {{ name }} {}\n", &context).unwrap();
        assert_eq!(result, "class Card {}\n");
    }

    #[test]
    fn test_render_invalid_template() {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render("{% if name %}", &serde_json::json!({}));
        assert!(matches!(result, Err(Error::MinijinjaError(_))));
    }
}
