//! `DockModel` derive macro implementation.
//!
//! Generates the entity item set (Entity, Column, PrimaryKey, Model) plus
//! trait implementations from one annotated struct. All items are emitted
//! in a single expansion as module-level siblings.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, Data, DataStruct, DeriveInput, Fields, GenericArgument, Ident, LitStr,
    PathArguments, Type,
};

use crate::attributes;
use crate::utils;

/// Extract the inner type from `Option<T>`; `None` for any other type.
fn extract_option_inner_type(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            if segment.ident == "Option" {
                if let PathArguments::AngleBracketed(args) = &segment.arguments {
                    if let Some(GenericArgument::Type(inner_type)) = args.args.first() {
                        return Some(inner_type);
                    }
                }
            }
        }
    }
    None
}

pub fn derive_dock_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let vis = &input.vis;
    let struct_name = &input.ident;
    let table_name = attributes::extract_table_name(&input.attrs)
        .unwrap_or_else(|| utils::snake_case(&struct_name.to_string()));
    let table_name_lit = LitStr::new(&table_name, struct_name.span());

    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => &fields.named,
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "DockModel can only be derived for structs with named fields",
            )
            .to_compile_error()
            .into();
        }
    };

    let model_name = Ident::new(&format!("{struct_name}Model"), struct_name.span());

    let mut column_variants: Vec<Ident> = Vec::new();
    let mut iden_arms: Vec<TokenStream2> = Vec::new();
    let mut metadata_entries: Vec<TokenStream2> = Vec::new();
    let mut model_fields: Vec<TokenStream2> = Vec::new();
    let mut from_row_fields: Vec<TokenStream2> = Vec::new();
    let mut get_arms: Vec<TokenStream2> = Vec::new();
    let mut get_by_name_arms: Vec<TokenStream2> = Vec::new();
    let mut pk_variants: Vec<Ident> = Vec::new();
    let mut pk_auto_arms: Vec<TokenStream2> = Vec::new();
    let mut pk_to_column_arms: Vec<TokenStream2> = Vec::new();
    let mut pk_value_exprs: Vec<TokenStream2> = Vec::new();
    let mut pk_types: Vec<&Type> = Vec::new();
    let mut soft_delete_seen = false;
    let mut mapped_count = 0usize;

    for field in fields.iter() {
        let field_name = field.ident.as_ref().unwrap();
        let field_vis = &field.vis;
        let field_type = &field.ty;
        let col_attrs = attributes::parse_column_attributes(field);
        let column_name = col_attrs
            .column_name
            .clone()
            .unwrap_or_else(|| utils::snake_case(&field_name.to_string()));
        let column_name_lit = LitStr::new(&column_name, field_name.span());
        let field_name_lit = LitStr::new(&field_name.to_string(), field_name.span());

        if col_attrs.is_primary_key && col_attrs.is_skipped {
            return syn::Error::new_spanned(
                field_name,
                "field cannot combine `#[primary_key]` with `#[skip]`; key fields must be mapped",
            )
            .to_compile_error()
            .into();
        }
        if col_attrs.is_soft_delete && col_attrs.is_skipped {
            return syn::Error::new_spanned(
                field_name,
                "field cannot combine `#[soft_delete]` with `#[skip]`; the marker must be mapped",
            )
            .to_compile_error()
            .into();
        }
        if col_attrs.is_soft_delete && col_attrs.is_primary_key {
            return syn::Error::new_spanned(
                field_name,
                "the `#[soft_delete]` marker cannot be a primary key column",
            )
            .to_compile_error()
            .into();
        }
        if col_attrs.is_soft_delete {
            if soft_delete_seen {
                return syn::Error::new_spanned(
                    field_name,
                    "only one `#[soft_delete]` column is allowed per entity",
                )
                .to_compile_error()
                .into();
            }
            soft_delete_seen = true;
        }

        let is_pk = col_attrs.is_primary_key;
        let is_auto = col_attrs.is_auto_increment;
        let is_skipped = col_attrs.is_skipped;
        let is_soft = col_attrs.is_soft_delete;

        metadata_entries.push(quote! {
            drydock::ColumnMeta {
                field: #field_name_lit,
                name: #column_name_lit,
                primary_key: #is_pk,
                auto_increment: #is_auto,
                skipped: #is_skipped,
                soft_delete: #is_soft,
            },
        });

        if is_skipped {
            // Kept on the model, never read from or written to the database.
            model_fields.push(quote! {
                #[serde(default)]
                #field_vis #field_name: #field_type,
            });
            from_row_fields.push(quote! {
                #field_name: Default::default(),
            });
            continue;
        }
        mapped_count += 1;

        let variant = Ident::new(
            &utils::pascal_case(&field_name.to_string()),
            field_name.span(),
        );
        column_variants.push(variant.clone());
        iden_arms.push(quote! {
            Column::#variant => #column_name_lit,
        });

        model_fields.push(quote! {
            #[serde(rename = #column_name_lit)]
            #field_vis #field_name: #field_type,
        });
        from_row_fields.push(quote! {
            #field_name: row.try_get::<&str, #field_type>(#column_name_lit)?,
        });
        get_arms.push(quote! {
            Column::#variant => sea_query::Value::from(self.#field_name.clone()),
        });
        get_by_name_arms.push(quote! {
            #column_name_lit => Some(drydock::ModelTrait::get(self, Column::#variant)),
        });

        if is_pk {
            pk_variants.push(variant.clone());
            pk_auto_arms.push(quote! {
                PrimaryKey::#variant => #is_auto,
            });
            pk_to_column_arms.push(quote! {
                PrimaryKey::#variant => Column::#variant,
            });
            pk_value_exprs.push(quote! {
                sea_query::Value::from(self.#field_name.clone())
            });
            pk_types.push(field_type);
        }
    }

    if mapped_count == 0 {
        return syn::Error::new_spanned(
            &input.ident,
            "DockModel requires at least one mapped column",
        )
        .to_compile_error()
        .into();
    }

    // PrimaryKey value type: the key type for single keys (unwrapping
    // Option), a tuple for composite keys.
    let primary_key_items = if pk_variants.is_empty() {
        quote! {
            #[doc = " Generated by drydock-derive"]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            #vis enum PrimaryKey {}
        }
    } else {
        let unwrapped: Vec<TokenStream2> = pk_types
            .iter()
            .map(|ty| match extract_option_inner_type(ty) {
                Some(inner) => quote! { #inner },
                None => quote! { #ty },
            })
            .collect();
        let value_type = if unwrapped.len() == 1 {
            let single = &unwrapped[0];
            quote! { #single }
        } else {
            quote! { (#(#unwrapped),*) }
        };
        quote! {
            #[doc = " Generated by drydock-derive"]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            #vis enum PrimaryKey {
                #(#pk_variants,)*
            }

            impl drydock::PrimaryKeyTrait for PrimaryKey {
                type ValueType = #value_type;

                fn auto_increment(self) -> bool {
                    match self {
                        #(#pk_auto_arms)*
                    }
                }
            }

            impl drydock::PrimaryKeyToColumn for PrimaryKey {
                type Column = Column;

                fn to_column(self) -> Self::Column {
                    match self {
                        #(#pk_to_column_arms)*
                    }
                }
            }
        }
    };

    let expanded = quote! {
        #[doc = " Generated by drydock-derive"]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #vis enum Column {
            #(#column_variants,)*
        }

        impl sea_query::Iden for Column {
            fn unquoted(&self) -> &str {
                match self {
                    #(#iden_arms)*
                }
            }
        }

        impl sea_query::IdenStatic for Column {
            fn as_str(&self) -> &'static str {
                match self {
                    #(#iden_arms)*
                }
            }
        }

        #[doc = " Generated by drydock-derive"]
        #[derive(Copy, Clone, Debug, Default)]
        #vis struct Entity;

        impl drydock::DockEntityName for Entity {
            fn table_name(&self) -> &'static str {
                #table_name_lit
            }
        }

        impl sea_query::Iden for Entity {
            fn unquoted(&self) -> &str {
                #table_name_lit
            }
        }

        impl sea_query::IdenStatic for Entity {
            fn as_str(&self) -> &'static str {
                #table_name_lit
            }
        }

        impl Entity {
            pub const TABLE_NAME: &'static str = #table_name_lit;
        }

        impl drydock::DockEntity for Entity {
            type Model = #model_name;
            type Column = Column;

            fn metadata() -> &'static drydock::EntityMetadata {
                static META: drydock::once_cell::sync::Lazy<drydock::EntityMetadata> =
                    drydock::once_cell::sync::Lazy::new(|| drydock::EntityMetadata {
                        table: #table_name_lit,
                        columns: vec![
                            #(#metadata_entries)*
                        ],
                    });
                &META
            }
        }

        #primary_key_items

        #[doc = " Generated by drydock-derive"]
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
        #vis struct #model_name {
            #(#model_fields)*
        }

        #[automatically_derived]
        impl drydock::FromRow for #model_name {
            fn from_row(row: &may_postgres::Row) -> Result<Self, may_postgres::Error> {
                Ok(Self {
                    #(#from_row_fields)*
                })
            }
        }

        #[automatically_derived]
        impl drydock::ModelTrait for #model_name {
            type Entity = Entity;

            fn get(&self, column: Column) -> sea_query::Value {
                match column {
                    #(#get_arms)*
                }
            }

            fn get_by_column_name(&self, column_name: &str) -> Option<sea_query::Value> {
                match column_name {
                    #(#get_by_name_arms)*
                    _ => None,
                }
            }

            fn primary_key_values(&self) -> Vec<sea_query::Value> {
                vec![#(#pk_value_exprs),*]
            }
        }
    };

    TokenStream::from(expanded)
}
