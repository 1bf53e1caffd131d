//! Scaffold rendering: missing test code as paste-ready Rust.
//!
//! Rendering goes through `minijinja` with auto-escaping disabled; the
//! identifier normalizer is exposed to the template as the `identifier`
//! filter. The contract with the template is the tuple of context values:
//! `features` (still referenced by unbound scenarios, sorted by display
//! key), `scenarios` (the unbound scenarios), and `steps` (grouped
//! undefined steps in generation order).

use minijinja::{Environment, context};
use serde::Serialize;

use crate::catalog::{FeatureFile, PlannedStep, ScenarioRef};
use crate::error::CoverageError;
use crate::naming::to_identifier;

/// Stub layout for unbound scenarios and grouped undefined steps.
const SCAFFOLD_TEMPLATE: &str = r#"//! {{ header }} feature tests.

use rstest_bdd_macros::{given, scenario, then, when};
{% for scenario in scenarios %}
#[scenario(path = "{{ scenario.feature_path }}", name = "{{ scenario.literal }}")]
fn test_{{ scenario.name | identifier }}() {}
{% endfor %}{% for step in steps %}
#[{{ step.keyword }}("{{ step.literal }}")]
fn {{ step.name | identifier }}() {
    todo!();
}
{% endfor %}"#;

/// Fallback header when no unbound scenario references a feature.
const FALLBACK_HEADER: &str = "Missing coverage";

#[derive(Debug, Serialize)]
struct TemplateFeature {
    name: String,
    path: String,
}

#[derive(Debug, Serialize)]
struct TemplateScenario {
    name: String,
    literal: String,
    feature_path: String,
}

#[derive(Debug, Serialize)]
struct TemplateStep {
    name: String,
    literal: String,
    keyword: &'static str,
}

/// Renders test stubs for the unbound scenarios and grouped undefined
/// steps.
///
/// `features` must be the features still referenced by `scenarios`, sorted
/// by display key; the first one names the generated module. Step and
/// scenario texts are escaped for Rust string literals.
///
/// # Errors
///
/// Returns [`CoverageError::Template`] when the template fails to parse or
/// render.
pub fn render_scaffold(
    features: &[&FeatureFile],
    scenarios: &[ScenarioRef<'_>],
    steps: &[&PlannedStep],
) -> Result<String, CoverageError> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);
    env.add_filter("identifier", |text: String| to_identifier(&text));
    env.add_template("scaffold", SCAFFOLD_TEMPLATE)
        .map_err(template_error)?;

    let header = features
        .first()
        .map_or_else(|| FALLBACK_HEADER.to_owned(), |f| f.display_key().to_owned());
    let feature_ctx: Vec<TemplateFeature> = features
        .iter()
        .map(|feature| TemplateFeature {
            name: feature.display_key().to_owned(),
            path: feature.path().as_str().to_owned(),
        })
        .collect();
    let scenario_ctx: Vec<TemplateScenario> = scenarios
        .iter()
        .map(|scenario_ref| TemplateScenario {
            name: scenario_ref.scenario().name().to_owned(),
            literal: escape_literal(scenario_ref.scenario().name()),
            feature_path: escape_literal(scenario_ref.feature().path().as_str()),
        })
        .collect();
    let step_ctx: Vec<TemplateStep> = steps
        .iter()
        .map(|step| TemplateStep {
            name: step.name().to_owned(),
            literal: escape_literal(step.name()),
            keyword: step.kind().keyword(),
        })
        .collect();

    let template = env.get_template("scaffold").map_err(template_error)?;
    template
        .render(context! {
            header => header,
            features => feature_ctx,
            scenarios => scenario_ctx,
            steps => step_ctx,
        })
        .map_err(template_error)
}

fn template_error(error: minijinja::Error) -> CoverageError {
    CoverageError::Template {
        message: error.to_string(),
    }
}

/// Escapes text for inclusion in a Rust string literal.
fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
