//! Field annotation parsing
//!
//! A field annotation is a comma separated list: the first token is the column name,
//! the rest are keywords.
//!
//! ```text
//! user_id,notnull,references:users(id),on_delete:cascade,index
//! ```
//!
//! Parsing never fails. Tokens that are not recognized are ignored so annotations written
//! for newer versions still parse.

use super::naming::snake_case;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Action taken on the referencing rows when the referenced row is deleted or updated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferentialAction {
    Cascade,
    SetNull,
    SetDefault,
    Restrict,
    NoAction,
}

impl ReferentialAction {
    /// Canonical SQL token (`CASCADE`, `SET NULL`, ...)
    pub fn as_sql(&self) -> &'static str {
        match self {
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::SetDefault => "SET DEFAULT",
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::NoAction => "NO ACTION",
        }
    }
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for ReferentialAction {
    type Err = String;

    /// Case-insensitive; words may be separated by `_`, `-` or spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
            .filter(|w| !w.is_empty())
            .map(str::to_ascii_uppercase)
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "CASCADE" => Ok(ReferentialAction::Cascade),
            "SET NULL" => Ok(ReferentialAction::SetNull),
            "SET DEFAULT" => Ok(ReferentialAction::SetDefault),
            "RESTRICT" => Ok(ReferentialAction::Restrict),
            "NO ACTION" => Ok(ReferentialAction::NoAction),
            _ => Err(format!("unknown referential action: {s}")),
        }
    }
}

/// Target of a `references:` token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub table: String,
    /// Empty for the bare `references:<table>` form, which validation rejects
    pub column: String,
}

impl Reference {
    /// Parse `<table>(<column>)` or `<table>`
    fn parse(spec: &str) -> Self {
        let spec = spec.trim();
        match spec.split_once('(') {
            Some((table, rest)) => Reference {
                table: table.trim().to_string(),
                column: rest.trim_end_matches(')').trim().to_string(),
            },
            None => Reference {
                table: spec.trim_end_matches(')').trim().to_string(),
                column: String::new(),
            },
        }
    }
}

/// Structured form of one field annotation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagDescriptor {
    /// Column name in snake_case; empty when the annotation starts with a comma
    pub name: String,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub not_null: bool,
    pub unique: bool,
    /// Field is excluded from the schema (`-` or empty annotation)
    pub skip: bool,
    /// Raw `default:` value, rendered later according to the column type
    pub default: Option<String>,
    pub reference: Option<Reference>,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
    pub index: bool,
    pub index_name: Option<String>,
}

impl TagDescriptor {
    fn skipped() -> Self {
        Self {
            skip: true,
            ..Default::default()
        }
    }
}

/// Parse a field annotation
///
/// # Example
///
/// ```
/// use tablesmith::parse_tag;
///
/// let tag = parse_tag("UserID,primary_key,auto,notnull,unique,index:custom_idx,default:10");
/// assert_eq!(tag.name, "user_id");
/// assert!(tag.primary_key && tag.auto_increment && tag.not_null && tag.unique);
/// assert_eq!(tag.index_name.as_deref(), Some("custom_idx"));
/// assert_eq!(tag.default.as_deref(), Some("10"));
/// ```
pub fn parse_tag(tag: &str) -> TagDescriptor {
    let tag = tag.trim();
    if tag.is_empty() || tag == "-" {
        return TagDescriptor::skipped();
    }

    let mut parts = tag.split(',').map(str::trim);
    let mut info = TagDescriptor {
        name: snake_case(parts.next().unwrap_or_default()),
        ..Default::default()
    };

    for part in parts {
        match part {
            "primary_key" => info.primary_key = true,
            "auto" => info.auto_increment = true,
            "notnull" => info.not_null = true,
            "unique" => info.unique = true,
            "index" => info.index = true,
            _ => {
                if let Some(name) = part.strip_prefix("index:") {
                    info.index = true;
                    let name = name.trim();
                    if !name.is_empty() {
                        info.index_name = Some(name.to_string());
                    }
                } else if let Some(value) = part.strip_prefix("default:") {
                    info.default = Some(value.to_string());
                } else if let Some(spec) = part.strip_prefix("references:") {
                    info.reference = Some(Reference::parse(spec));
                } else if let Some(action) = part.strip_prefix("on_delete:") {
                    if let Some(action) = parse_action("on_delete", action) {
                        info.on_delete = Some(action);
                    }
                } else if let Some(action) = part.strip_prefix("on_update:") {
                    if let Some(action) = parse_action("on_update", action) {
                        info.on_update = Some(action);
                    }
                }
            }
        }
    }

    info
}

/// Parse an `on_delete:`/`on_update:` value; unknown actions are dropped with a debug log
fn parse_action(key: &str, value: &str) -> Option<ReferentialAction> {
    match value.parse() {
        Ok(action) => Some(action),
        Err(err) => {
            log::debug!("Ignoring {} in column tag: {}", key, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_all_flags() {
        let info = parse_tag("UserID,primary_key,auto,notnull,unique,index:custom_idx,default:10");

        assert_eq!(info.name, "user_id");
        assert!(info.primary_key);
        assert!(info.auto_increment);
        assert!(info.not_null);
        assert!(info.unique);
        assert!(info.index);
        assert_eq!(info.index_name.as_deref(), Some("custom_idx"));
        assert_eq!(info.default.as_deref(), Some("10"));
        assert!(!info.skip);
        assert!(info.reference.is_none());
    }

    #[test]
    fn test_parse_tag_skip_sentinels() {
        assert!(parse_tag("-").skip);
        assert!(parse_tag("").skip);
        assert!(parse_tag("   ").skip);
        assert!(!parse_tag("name").skip);
    }

    #[test]
    fn test_parse_tag_name_only() {
        let info = parse_tag("CreatedAt");
        assert_eq!(info.name, "created_at");
        assert_eq!(
            info,
            TagDescriptor {
                name: "created_at".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_parse_tag_empty_name_keeps_flags() {
        let info = parse_tag(",notnull");
        assert_eq!(info.name, "");
        assert!(info.not_null);
        assert!(!info.skip);
    }

    #[test]
    fn test_parse_tag_reference_with_column() {
        let info = parse_tag("user_id,notnull,references:users(id),on_delete:cascade,on_update:set_null");
        assert_eq!(
            info.reference,
            Some(Reference {
                table: "users".to_string(),
                column: "id".to_string(),
            })
        );
        assert_eq!(info.on_delete, Some(ReferentialAction::Cascade));
        assert_eq!(info.on_update, Some(ReferentialAction::SetNull));
    }

    #[test]
    fn test_parse_tag_bare_reference_has_empty_column() {
        let info = parse_tag("user_id,references:users");
        let reference = info.reference.unwrap();
        assert_eq!(reference.table, "users");
        assert_eq!(reference.column, "");

        let info = parse_tag("user_id,references:users()");
        assert_eq!(info.reference.unwrap().column, "");
    }

    #[test]
    fn test_parse_tag_generic_index() {
        let info = parse_tag("email,index");
        assert!(info.index);
        assert!(info.index_name.is_none());

        let info = parse_tag("email,index:");
        assert!(info.index);
        assert!(info.index_name.is_none());
    }

    #[test]
    fn test_parse_tag_ignores_unknown_tokens() {
        let with_noise = parse_tag("email,notnull,frobnicate,size:20,unique,on_delete:explode");
        let clean = parse_tag("email,notnull,unique");
        assert_eq!(with_noise, clean);
    }

    #[test]
    fn test_unknown_action_does_not_clobber_the_other() {
        let info = parse_tag("user_id,references:users(id),on_delete:explode,on_update:cascade");
        assert_eq!(info.on_delete, None);
        assert_eq!(info.on_update, Some(ReferentialAction::Cascade));

        assert_eq!(parse_action("on_delete", "explode"), None);
        assert_eq!(parse_action("on_update", "set null"), Some(ReferentialAction::SetNull));
    }

    #[test]
    fn test_parse_tag_default_keeps_raw_value() {
        let info = parse_tag("title,default:it's");
        assert_eq!(info.default.as_deref(), Some("it's"));

        let info = parse_tag("created_at,default:current_timestamp");
        assert_eq!(info.default.as_deref(), Some("current_timestamp"));
    }

    #[test]
    fn test_referential_action_parsing() {
        assert_eq!("cascade".parse(), Ok(ReferentialAction::Cascade));
        assert_eq!("SET NULL".parse(), Ok(ReferentialAction::SetNull));
        assert_eq!("set_default".parse(), Ok(ReferentialAction::SetDefault));
        assert_eq!("Restrict".parse(), Ok(ReferentialAction::Restrict));
        assert_eq!("no-action".parse(), Ok(ReferentialAction::NoAction));
        assert!("explode".parse::<ReferentialAction>().is_err());
        assert_eq!(ReferentialAction::SetNull.to_string(), "SET NULL");
    }
}
