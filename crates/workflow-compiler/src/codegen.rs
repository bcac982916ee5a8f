//! Agent script generation
//!
//! Renders a workflow into the line-oriented agent script consumed by the
//! execution engine:
//!
//! ```text
//! @agent <slug> v1.0
//! @tier starter
//!
//! > <type>.<action> [$<prevType>.result] [key="string" | key=number ...]
//! ```
//!
//! Each module line references the result of the line before it, forming a
//! linear pipeline. Output depends only on the workflow and the registry, so
//! a preview always matches what is submitted.

use crate::descriptor::ModuleDefinition;
use crate::registry::ModuleRegistry;
use crate::types::{ModuleInstance, ParamValue, Workflow};

/// Version tag written into the agent header
pub const SCRIPT_VERSION: &str = "v1.0";

/// Tier tag written after the agent header
pub const SCRIPT_TIER: &str = "starter";

/// Action emitted for module types missing from the registry
pub const FALLBACK_ACTION: &str = "run";

/// Normalize an agent name into a script identifier
///
/// Lowercases, trims, and replaces each run of whitespace with a single `_`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Name of the implicit result variable a module type produces
pub fn result_variable(module_type: &str) -> String {
    format!("${}.result", module_type)
}

/// Renders workflows against a module registry
pub struct ScriptGenerator<'r> {
    registry: &'r ModuleRegistry,
}

impl<'r> ScriptGenerator<'r> {
    pub fn new(registry: &'r ModuleRegistry) -> Self {
        Self { registry }
    }

    /// Render the complete script for a workflow
    ///
    /// Never fails: an empty agent name yields an empty slug, which
    /// submission validation rejects separately.
    pub fn generate(&self, workflow: &Workflow) -> String {
        let mut script = format!(
            "@agent {} {}\n@tier {}\n\n",
            slugify(&workflow.agent_name),
            SCRIPT_VERSION,
            SCRIPT_TIER
        );

        let mut previous: Option<&ModuleInstance> = None;
        for module in &workflow.modules {
            script.push_str(&self.render_line(module, previous));
            script.push('\n');
            previous = Some(module);
        }

        script
    }

    /// Render one module line, chained to the previous module if any
    pub fn render_line(&self, module: &ModuleInstance, previous: Option<&ModuleInstance>) -> String {
        let definition = self.registry.get(&module.module_type);
        let action = match definition {
            Some(def) => def.action_name.as_str(),
            None => {
                log::warn!(
                    "Module type '{}' is not registered; emitting '{}'",
                    module.module_type,
                    FALLBACK_ACTION
                );
                FALLBACK_ACTION
            }
        };

        let mut line = format!("> {}.{}", module.module_type, action);

        if let Some(prev) = previous {
            line.push(' ');
            line.push_str(&result_variable(&prev.module_type));
        }

        for token in param_tokens(module, definition) {
            line.push(' ');
            line.push_str(&token);
        }

        line
    }
}

/// `key=value` tokens in schema order
///
/// Without a definition the config's own order is used.
fn param_tokens(module: &ModuleInstance, definition: Option<&ModuleDefinition>) -> Vec<String> {
    match definition {
        Some(def) => def
            .params
            .iter()
            .filter_map(|spec| {
                module
                    .config
                    .get(&spec.key)
                    .map(|value| format_token(&spec.key, value))
            })
            .collect(),
        None => module
            .config
            .iter()
            .map(|(key, value)| format_token(key, value))
            .collect(),
    }
}

fn format_token(key: &str, value: &ParamValue) -> String {
    match value {
        ParamValue::Text(s) => format!("{}=\"{}\"", key, s),
        ParamValue::Number(n) => format!("{}={}", key, ParamValue::canonical_number(*n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::WorkflowBuilder;
    use crate::descriptor::ParamSpec;
    use crate::types::{Direction, ModuleCategory};

    fn test_registry() -> ModuleRegistry {
        ModuleRegistry::from_definitions([
            ModuleDefinition::new("em", ModuleCategory::Input, "Email Reader", "scan")
                .with_param(ParamSpec::string("query", "Search Query", "is:unread"))
                .with_param(ParamSpec::number("max", "Max Emails", 50.0)),
            ModuleDefinition::new("ec", ModuleCategory::Processing, "Email Categorizer", "categorize"),
            ModuleDefinition::new("rg", ModuleCategory::Processing, "Reply Generator", "generate")
                .with_param(ParamSpec::enumeration(
                    "style",
                    "Writing Style",
                    ["professional", "casual", "formal", "friendly"],
                    "professional",
                ))
                .with_param(ParamSpec::number("count", "Number of Drafts", 3.0)),
            ModuleDefinition::new("su", ModuleCategory::Processing, "Summarizer", "summarize")
                .with_param(ParamSpec::number("max_length", "Max Summary Length", 200.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My Custom Agent"), "my_custom_agent");
        assert_eq!(slugify("  Inbox \t  Zero\n"), "inbox_zero");
        assert_eq!(slugify("already_slugged"), "already_slugged");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn test_custom_agent_scenario() {
        let registry = test_registry();
        let mut builder = WorkflowBuilder::new(&registry);
        builder.set_agent_name("My Custom Agent");
        builder.add_module("em").unwrap();
        builder.add_module("rg").unwrap();
        builder.update_module_config(1, "style", "casual").unwrap();
        builder.update_module_config(1, "count", 3).unwrap();

        let script = ScriptGenerator::new(&registry).generate(builder.workflow());
        assert_eq!(
            script,
            "@agent my_custom_agent v1.0\n\
             @tier starter\n\
             \n\
             > em.scan query=\"is:unread\" max=50\n\
             > rg.generate $em.result style=\"casual\" count=3\n"
        );
    }

    #[test]
    fn test_empty_workflow_renders_header_only() {
        let registry = test_registry();
        let mut workflow = Workflow::new();
        workflow.agent_name = "Solo".to_string();

        let script = ScriptGenerator::new(&registry).generate(&workflow);
        assert_eq!(script, "@agent solo v1.0\n@tier starter\n\n");
    }

    #[test]
    fn test_empty_agent_name_still_generates() {
        let registry = test_registry();
        let mut builder = WorkflowBuilder::new(&registry);
        builder.add_module("ec").unwrap();

        let script = ScriptGenerator::new(&registry).generate(builder.workflow());
        assert_eq!(script, "@agent  v1.0\n@tier starter\n\n> ec.categorize\n");
    }

    #[test]
    fn test_add_module_appends_one_default_line() {
        let registry = test_registry();
        let generator = ScriptGenerator::new(&registry);

        for definition in registry.list_all() {
            let mut builder = WorkflowBuilder::new(&registry);
            builder.set_agent_name("agent");
            builder.add_module("ec").unwrap();
            let before = generator.generate(builder.workflow());

            builder.add_module(&definition.module_type).unwrap();
            let after = generator.generate(builder.workflow());

            let new_line = after.strip_prefix(&before).unwrap().trim_end_matches('\n');
            let mut expected = format!(
                "> {}.{} $ec.result",
                definition.module_type, definition.action_name
            );
            for spec in &definition.params {
                expected.push(' ');
                expected.push_str(&format_token(&spec.key, &spec.default_value));
            }
            assert_eq!(new_line, expected);
        }
    }

    #[test]
    fn test_remove_deletes_exactly_one_line() {
        let registry = test_registry();
        let generator = ScriptGenerator::new(&registry);
        let mut builder = WorkflowBuilder::new(&registry);
        builder.set_agent_name("agent");
        builder.add_module("em").unwrap();
        builder.add_module("su").unwrap();
        builder.update_module_config(1, "max_length", 80).unwrap();

        builder.remove_module(0).unwrap();
        let script = generator.generate(builder.workflow());

        assert_eq!(
            script,
            "@agent agent v1.0\n@tier starter\n\n> su.summarize max_length=80\n"
        );
    }

    #[test]
    fn test_boundary_move_keeps_script_identical() {
        let registry = test_registry();
        let generator = ScriptGenerator::new(&registry);
        let mut builder = WorkflowBuilder::new(&registry);
        builder.set_agent_name("agent");
        builder.add_module("em").unwrap();
        builder.add_module("rg").unwrap();

        let before = generator.generate(builder.workflow());
        builder.move_module(0, Direction::Up);
        builder.move_module(1, Direction::Down);
        assert_eq!(generator.generate(builder.workflow()), before);
    }

    #[test]
    fn test_move_rechains_result_variables() {
        let registry = test_registry();
        let generator = ScriptGenerator::new(&registry);
        let mut builder = WorkflowBuilder::new(&registry);
        builder.set_agent_name("agent");
        builder.add_module("em").unwrap();
        builder.add_module("ec").unwrap();

        builder.move_module(1, Direction::Up);
        let script = generator.generate(builder.workflow());
        assert!(script.ends_with("> ec.categorize\n> em.scan $ec.result query=\"is:unread\" max=50\n"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let registry = test_registry();
        let generator = ScriptGenerator::new(&registry);
        let mut builder = WorkflowBuilder::new(&registry);
        builder.set_agent_name("Repeat Me");
        builder.add_module("em").unwrap();
        builder.add_module("ec").unwrap();
        builder.add_module("rg").unwrap();

        assert_eq!(
            generator.generate(builder.workflow()),
            generator.generate(builder.workflow())
        );
    }

    #[test]
    fn test_tokens_follow_schema_order() {
        let registry = test_registry();
        let generator = ScriptGenerator::new(&registry);
        let module = ModuleInstance {
            id: "em-1".to_string(),
            module_type: "em".to_string(),
            config: [("max", ParamValue::from(5)), ("query", "label:work".into())]
                .into_iter()
                .collect(),
        };

        assert_eq!(
            generator.render_line(&module, None),
            "> em.scan query=\"label:work\" max=5"
        );
    }

    #[test]
    fn test_fractional_numbers() {
        assert_eq!(format_token("ratio", &ParamValue::Number(0.25)), "ratio=0.25");
    }

    #[test]
    fn test_unregistered_type_falls_back_to_run() {
        let registry = test_registry();
        let generator = ScriptGenerator::new(&registry);
        let module = ModuleInstance {
            id: "zz-1".to_string(),
            module_type: "zz".to_string(),
            config: [("level", ParamValue::from(2))].into_iter().collect(),
        };

        assert_eq!(generator.render_line(&module, None), "> zz.run level=2");
    }
}
