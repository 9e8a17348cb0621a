//! Attribute parsing utilities

use syn::{Attribute, ExprLit, Field, Lit};

/// Extract a `#[name = "value"]` string attribute.
fn extract_string_attribute(attrs: &[Attribute], name: &str) -> Option<String> {
    for attr in attrs {
        if attr.path().is_ident(name) {
            if let Ok(meta) = attr.meta.require_name_value() {
                if let syn::Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) = &meta.value
                {
                    return Some(s.value());
                }
            }
        }
    }
    None
}

/// Extract table name from struct attributes
pub fn extract_table_name(attrs: &[Attribute]) -> Option<String> {
    extract_string_attribute(attrs, "table_name")
}

/// Column attributes parsed from one field.
pub struct ColumnAttributes {
    pub is_primary_key: bool,
    pub is_auto_increment: bool,
    pub column_name: Option<String>,
    pub is_skipped: bool,
    pub is_soft_delete: bool,
    /// Documents database nullability; not used in code generation.
    #[allow(dead_code)]
    pub is_nullable: bool,
}

/// Parse all column attributes from a field.
pub fn parse_column_attributes(field: &Field) -> ColumnAttributes {
    let mut attrs = ColumnAttributes {
        is_primary_key: false,
        is_auto_increment: false,
        column_name: None,
        is_skipped: false,
        is_soft_delete: false,
        is_nullable: false,
    };

    for attr in &field.attrs {
        if attr.path().is_ident("primary_key") {
            attrs.is_primary_key = true;
        } else if attr.path().is_ident("auto_increment") {
            attrs.is_auto_increment = true;
        } else if attr.path().is_ident("column_name") {
            attrs.column_name = extract_string_attribute(std::slice::from_ref(attr), "column_name");
        } else if attr.path().is_ident("skip") || attr.path().is_ident("ignore") {
            attrs.is_skipped = true;
        } else if attr.path().is_ident("soft_delete") {
            attrs.is_soft_delete = true;
        } else if attr.path().is_ident("nullable") {
            attrs.is_nullable = true;
        }
    }

    attrs
}

/// Column name from attribute or snake_case of the field name.
pub fn column_name_for(field: &Field) -> String {
    parse_column_attributes(field)
        .column_name
        .unwrap_or_else(|| {
            crate::utils::snake_case(&field.ident.as_ref().unwrap().to_string())
        })
}
