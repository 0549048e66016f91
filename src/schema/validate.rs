//! Validation pre-flight for model declarations.

use super::model::ModelDef;
use super::tag::parse_tag;
use crate::error::{ValidationError, ValidationIssue};

/// Check model declarations before provisioning
///
/// Rejects fields without an annotation (or with an empty one) and `references:` tokens
/// without an explicit column. Every offending field is reported, in declaration order.
/// Nothing is created or modified.
///
/// ```
/// use tablesmith::{validate_models, ModelDef};
///
/// let post = ModelDef::new("Post").field("UserID", "i64", "user_id,references:users");
/// let err = validate_models(&[post]).unwrap_err();
/// assert_eq!(err.issues().len(), 1);
/// ```
pub fn validate_models(models: &[ModelDef]) -> Result<(), ValidationError> {
    let mut issues = Vec::new();

    for model in models {
        for field in &model.fields {
            let tag = match field.tag.as_deref() {
                Some(tag) if !tag.trim().is_empty() => tag,
                _ => {
                    issues.push(ValidationIssue::MissingAnnotation {
                        model: model.type_name.clone(),
                        field: field.name.clone(),
                    });
                    continue;
                }
            };

            if let Some(reference) = parse_tag(tag).reference {
                if reference.column.is_empty() {
                    issues.push(ValidationIssue::IncompleteReference {
                        model: model.type_name.clone(),
                        field: field.name.clone(),
                        table: reference.table,
                    });
                }
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(issues))
    }
}
