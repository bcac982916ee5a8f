//! Module registry
//!
//! The registry maps module type strings to their definitions. It is built
//! once from a fixed catalog and never modified afterwards: there is no
//! registration API on a constructed registry.
//!
//! # Usage
//!
//! ```ignore
//! use workflow_compiler::{ModuleDescriptor, ModuleRegistry};
//!
//! let registry = ModuleRegistry::from_definitions([
//!     EmailReader::descriptor(),
//!     ReplyGenerator::descriptor(),
//! ])?;
//!
//! let reader = registry.lookup("em")?;
//! ```

use std::collections::{HashMap, HashSet};

use crate::descriptor::ModuleDefinition;
use crate::error::{CompilerError, RegistryError, Result};
use crate::types::{ModuleCategory, ParamKind};

/// Immutable catalog of module definitions
///
/// Definitions are kept in catalog order, which is the order `list_all`
/// returns them in.
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    definitions: Vec<ModuleDefinition>,
    index: HashMap<String, usize>,
}

impl ModuleRegistry {
    /// Build a registry from definitions in catalog order
    ///
    /// Fails if two definitions share a type id or a definition's parameter
    /// schema is malformed.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ModuleDefinition>,
    ) -> std::result::Result<Self, RegistryError> {
        let definitions: Vec<ModuleDefinition> = definitions.into_iter().collect();
        let mut index = HashMap::with_capacity(definitions.len());

        for (position, definition) in definitions.iter().enumerate() {
            check_schema(definition)?;
            if index
                .insert(definition.module_type.clone(), position)
                .is_some()
            {
                return Err(RegistryError::DuplicateModuleType(
                    definition.module_type.clone(),
                ));
            }
        }

        Ok(Self { definitions, index })
    }

    /// Get the definition for a module type
    pub fn lookup(&self, module_type: &str) -> Result<&ModuleDefinition> {
        self.get(module_type)
            .ok_or_else(|| CompilerError::UnknownModuleType(module_type.to_string()))
    }

    /// Get the definition for a module type, if registered
    pub fn get(&self, module_type: &str) -> Option<&ModuleDefinition> {
        self.index.get(module_type).map(|&i| &self.definitions[i])
    }

    /// All definitions in catalog order
    pub fn list_all(&self) -> &[ModuleDefinition] {
        &self.definitions
    }

    /// Check if a module type is registered
    pub fn contains(&self, module_type: &str) -> bool {
        self.index.contains_key(module_type)
    }

    /// List all registered type ids in catalog order
    pub fn module_types(&self) -> Vec<&str> {
        self.definitions
            .iter()
            .map(|d| d.module_type.as_str())
            .collect()
    }

    /// Definitions grouped by category, each group in catalog order
    pub fn by_category(&self) -> HashMap<ModuleCategory, Vec<&ModuleDefinition>> {
        let mut grouped: HashMap<ModuleCategory, Vec<&ModuleDefinition>> = HashMap::new();
        for definition in &self.definitions {
            grouped
                .entry(definition.category)
                .or_default()
                .push(definition);
        }
        grouped
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Check that every parameter has a unique key and a default its schema admits
fn check_schema(definition: &ModuleDefinition) -> std::result::Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for param in &definition.params {
        if !seen.insert(param.key.as_str()) {
            return Err(RegistryError::DuplicateParameterKey {
                module_type: definition.module_type.clone(),
                key: param.key.clone(),
            });
        }
        if param.kind == ParamKind::Enum && param.enum_options.is_empty() {
            return Err(RegistryError::EmptyEnumOptions {
                module_type: definition.module_type.clone(),
                key: param.key.clone(),
            });
        }
        if !param.admits(&param.default_value) {
            return Err(RegistryError::InvalidDefault {
                module_type: definition.module_type.clone(),
                key: param.key.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ParamSpec;

    fn test_definition(module_type: &str) -> ModuleDefinition {
        ModuleDefinition::new(
            module_type,
            ModuleCategory::Processing,
            format!("Test {}", module_type),
            "run",
        )
        .with_param(ParamSpec::string("text", "Text", ""))
    }

    #[test]
    fn test_lookup() {
        let registry =
            ModuleRegistry::from_definitions([test_definition("aa"), test_definition("bb")])
                .unwrap();

        assert!(registry.contains("aa"));
        assert!(!registry.contains("zz"));
        assert_eq!(registry.lookup("bb").unwrap().display_name, "Test bb");
        assert_eq!(
            registry.lookup("zz").unwrap_err(),
            CompilerError::UnknownModuleType("zz".to_string())
        );
    }

    #[test]
    fn test_list_all_keeps_catalog_order() {
        let registry = ModuleRegistry::from_definitions([
            test_definition("zz"),
            test_definition("aa"),
            test_definition("mm"),
        ])
        .unwrap();

        assert_eq!(registry.module_types(), vec!["zz", "aa", "mm"]);
        assert_eq!(registry.list_all()[1].module_type, "aa");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let err = ModuleRegistry::from_definitions([test_definition("aa"), test_definition("aa")])
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateModuleType("aa".to_string()));
    }

    #[test]
    fn test_duplicate_param_rejected() {
        let def = test_definition("aa").with_param(ParamSpec::number("text", "Again", 1.0));
        let err = ModuleRegistry::from_definitions([def]).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateParameterKey { .. }));
    }

    #[test]
    fn test_empty_enum_rejected() {
        let def = test_definition("aa").with_param(ParamSpec::enumeration(
            "style",
            "Style",
            Vec::<String>::new(),
            "plain",
        ));
        let err = ModuleRegistry::from_definitions([def]).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyEnumOptions { .. }));
    }

    #[test]
    fn test_default_outside_options_rejected() {
        let def = test_definition("aa").with_param(ParamSpec::enumeration(
            "style",
            "Style",
            ["formal"],
            "casual",
        ));
        let err = ModuleRegistry::from_definitions([def]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidDefault { .. }));
    }

    #[test]
    fn test_non_finite_default_rejected() {
        let def = test_definition("aa").with_param(ParamSpec::number("max", "Max", f64::NAN));
        assert!(ModuleRegistry::from_definitions([def]).is_err());
    }

    #[test]
    fn test_by_category() {
        let mut input = test_definition("in");
        input.category = ModuleCategory::Input;
        let registry =
            ModuleRegistry::from_definitions([input, test_definition("p1"), test_definition("p2")])
                .unwrap();

        let grouped = registry.by_category();
        assert_eq!(grouped.get(&ModuleCategory::Input).unwrap().len(), 1);
        assert_eq!(grouped.get(&ModuleCategory::Processing).unwrap().len(), 2);
        assert!(!grouped.contains_key(&ModuleCategory::Output));
    }
}
