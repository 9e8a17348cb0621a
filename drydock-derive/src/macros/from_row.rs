//! `FromRow` derive macro implementation.
//!
//! Generates row decoding for plain structs, mainly projection structs
//! consumed through `SelectQuery::into_model`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DataStruct, DeriveInput, Fields};

use crate::attributes;

pub fn derive_from_row(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => &fields.named,
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "FromRow can only be derived for structs with named fields",
            )
            .to_compile_error()
            .into();
        }
    };

    let from_row_fields: Vec<TokenStream2> = fields
        .iter()
        .map(|field| {
            let field_name = field.ident.as_ref().unwrap();
            let field_type = &field.ty;
            let column_name = attributes::column_name_for(field);
            let column_name_lit = syn::LitStr::new(&column_name, field_name.span());

            quote! {
                #field_name: row.try_get::<&str, #field_type>(#column_name_lit)?,
            }
        })
        .collect();

    let expanded = quote! {
        #[automatically_derived]
        impl drydock::FromRow for #struct_name {
            fn from_row(row: &may_postgres::Row) -> Result<Self, may_postgres::Error> {
                Ok(Self {
                    #(#from_row_fields)*
                })
            }
        }
    };

    TokenStream::from(expanded)
}
