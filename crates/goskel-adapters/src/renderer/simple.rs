//! Placeholder-marker substitution renderer.

use tracing::{instrument, trace};

use goskel_core::{
    application::ports::TemplateRenderer,
    domain::{PlaceholderMap, Template},
    error::GoskelResult,
};

/// Replaces every `{{Name}}` marker with its value. Strict: a marker with
/// no value is `MissingPlaceholder`, never an empty string.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(template = %template.id))]
    fn render(&self, template: &Template, values: &PlaceholderMap) -> GoskelResult<String> {
        let rendered = template.render(values)?;
        trace!(bytes = rendered.len(), "rendered");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goskel_core::{
        domain::{DomainError, TemplateId},
        error::GoskelError,
    };

    #[test]
    fn substitutes_every_occurrence() {
        let t = Template::builtin(
            TemplateId::MockStub,
            "package {{Component}}_test\n\ntype Mock{{Component}} struct{}\n",
        );
        let values = PlaceholderMap::new().with("Component", "Order");

        let out = SimpleRenderer::new().render(&t, &values).unwrap();

        assert_eq!(out, "package Order_test\n\ntype MockOrder struct{}\n");
    }

    #[test]
    fn missing_value_is_an_error() {
        let t = Template::builtin(TemplateId::TestStub, "func Test{{Component}}() {}");

        let err = SimpleRenderer::new()
            .render(&t, &PlaceholderMap::new())
            .unwrap_err();

        assert!(matches!(
            err,
            GoskelError::Domain(DomainError::MissingPlaceholder { ref name, .. }) if name == "Component"
        ));
    }

    #[test]
    fn go_composite_literals_are_left_alone() {
        let t = Template::builtin(
            TemplateId::HttpHandler,
            "return &{{HTTPHandler}}{}\ngin.H{\"message\": \"hi\"}",
        );
        let values = PlaceholderMap::new().with("HTTPHandler", "OrderHTTPHandler");

        let out = SimpleRenderer::new().render(&t, &values).unwrap();

        assert_eq!(out, "return &OrderHTTPHandler{}\ngin.H{\"message\": \"hi\"}");
    }
}
