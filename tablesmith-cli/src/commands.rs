//! Command implementations that do not need a live database

use tablesmith::{
    introspect, validate_models, Dialect, DryRunExecutor, ModelDef, SchemaError, SchemaManager,
    TableDescriptor,
};

/// Statements `create_schema` would issue against an empty database, in order
///
/// Models are validated first; nothing is rendered for invalid declarations.
pub fn plan(models: &[ModelDef], dialect: Dialect) -> Result<Vec<String>, SchemaError> {
    let manager = SchemaManager::new(DryRunExecutor::new(), dialect);
    manager.validate_and_create(models)?;
    Ok(manager.into_executor().into_statements())
}

/// Table descriptors of every model as pretty JSON
pub fn inspect(models: &[ModelDef]) -> serde_json::Result<String> {
    let tables: Vec<TableDescriptor> = models.iter().map(introspect).collect();
    serde_json::to_string_pretty(&tables)
}

/// One line per validation issue; empty when the models are valid
pub fn validation_report(models: &[ModelDef]) -> Vec<String> {
    match validate_models(models) {
        Ok(()) => Vec::new(),
        Err(err) => err.issues().iter().map(ToString::to_string).collect(),
    }
}
