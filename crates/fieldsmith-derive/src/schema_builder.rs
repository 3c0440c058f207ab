//! Expansion of `#[derive(SchemaBuilder)]`
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use crate::attrs::{FieldArgs, SchemaArgs};
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{
    Data, DeriveInput, Fields, GenericArgument, Ident, LitStr, PathArguments, Result, Type,
};

/// One struct field as the generated code sees it
struct SchemaField {
    ident: Ident,
    key: LitStr,
    /// Type accepted by the setter: the field type, or `T` for `Option<T>`
    setter_ty: Type,
    optional: bool,
    validator: TokenStream,
}

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "SchemaBuilder cannot be derived for generic types",
        ));
    }

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new(
                    Span::call_site(),
                    "SchemaBuilder requires a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new(
                Span::call_site(),
                "SchemaBuilder can only be derived for structs",
            ))
        }
    };

    let args = SchemaArgs::from_attrs(&input.attrs)?;
    let target = &input.ident;
    let vis = &input.vis;
    let builder = args
        .builder
        .unwrap_or_else(|| format_ident!("{}Builder", target));
    let schema_name = args
        .name
        .unwrap_or_else(|| LitStr::new(&target.unraw().to_string(), target.span()));

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let field_args = FieldArgs::from_attrs(&field.attrs)?;
        let key = field_args
            .rename
            .unwrap_or_else(|| LitStr::new(&ident.unraw().to_string(), ident.span()));
        let (setter_ty, optional) = match option_inner(&field.ty) {
            Some(inner) => (inner.clone(), true),
            None => (field.ty.clone(), false),
        };
        let validator = match field_args.validate {
            Some(expr) => quote! { #expr },
            None => quote! { ::fieldsmith_core::schema::validators::any() },
        };
        fields.push(SchemaField {
            ident,
            key,
            setter_ty,
            optional,
            validator,
        });
    }

    let registrations = fields.iter().map(|field| {
        let key = &field.key;
        let validator = &field.validator;
        if field.optional {
            quote! { .optional_field(#key, #validator) }
        } else {
            quote! { .field(#key, #validator) }
        }
    });

    let setters = fields.iter().map(|field| {
        let setter = format_ident!("set_{}", field.ident.unraw());
        let key = &field.key;
        let ty = &field.setter_ty;
        let doc = format!("Set `{}`, validating it unless the cache already knows the value", key.value());
        quote! {
            #[doc = #doc]
            pub fn #setter(
                &mut self,
                value: impl ::core::convert::Into<#ty>,
            ) -> ::fieldsmith_core::ValidationResult<&mut Self> {
                let value: #ty = value.into();
                let value = ::fieldsmith_core::serde_json::to_value(&value).map_err(|e| {
                    ::fieldsmith_core::ValidationError::field(
                        #key,
                        ::fieldsmith_core::Violation::new(
                            "serializable",
                            "a JSON-representable value",
                            e.to_string(),
                        ),
                    )
                })?;
                self.inner.set_field(#key, value)?;
                Ok(self)
            }
        }
    });

    let builder_doc = format!("Fluent builder for [`{}`]", target.unraw());

    Ok(quote! {
        impl #target {
            /// Shared schema for this type, built on first use
            pub fn schema() -> ::std::sync::Arc<::fieldsmith_core::ObjectSchema<#target>> {
                static SCHEMA: ::std::sync::OnceLock<
                    ::std::sync::Arc<::fieldsmith_core::ObjectSchema<#target>>,
                > = ::std::sync::OnceLock::new();
                ::std::sync::Arc::clone(SCHEMA.get_or_init(|| {
                    ::std::sync::Arc::new(
                        ::fieldsmith_core::ObjectSchema::new(#schema_name)
                            #(#registrations)*
                    )
                }))
            }

            /// Strict builder for this type
            pub fn builder() -> #builder {
                #builder::new()
            }

            /// Builder for this type with an explicit validation mode
            pub fn builder_with_mode(mode: ::fieldsmith_core::ValidationMode) -> #builder {
                #builder::with_mode(mode)
            }
        }

        #[doc = #builder_doc]
        #[derive(Debug, Clone)]
        #vis struct #builder {
            inner: ::fieldsmith_core::Builder<::fieldsmith_core::ObjectSchema<#target>>,
        }

        impl #builder {
            /// Create a strict builder
            pub fn new() -> Self {
                Self::with_mode(::fieldsmith_core::ValidationMode::Strict)
            }

            /// Create a builder with an explicit validation mode
            pub fn with_mode(mode: ::fieldsmith_core::ValidationMode) -> Self {
                Self {
                    inner: ::fieldsmith_core::Builder::with_mode(#target::schema(), mode),
                }
            }

            #(#setters)*

            /// Set a field by its schema key
            pub fn set_field(
                &mut self,
                key: &str,
                value: impl ::core::convert::Into<::fieldsmith_core::serde_json::Value>,
            ) -> ::fieldsmith_core::ValidationResult<&mut Self> {
                self.inner.set_field(key, value)?;
                Ok(self)
            }

            /// Re-validate everything and produce the value
            pub fn build(&self) -> ::fieldsmith_core::ValidationResult<#target> {
                self.inner.build()
            }

            /// Forget all accepted values, cached outcomes and diagnostics
            pub fn reset(&mut self) -> &mut Self {
                self.inner.reset();
                self
            }

            /// The untyped builder underneath
            pub fn into_inner(
                self,
            ) -> ::fieldsmith_core::Builder<::fieldsmith_core::ObjectSchema<#target>> {
                self.inner
            }
        }

        impl ::core::default::Default for #builder {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::core::ops::Deref for #builder {
            type Target = ::fieldsmith_core::Builder<::fieldsmith_core::ObjectSchema<#target>>;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }
    })
}

/// The `T` of an `Option<T>` field type, if it is one
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand_str(input: DeriveInput) -> String {
        expand(input).unwrap().to_string()
    }

    #[test]
    fn test_generates_setters_and_builder() {
        let output = expand_str(parse_quote! {
            pub struct User {
                #[field(validate = validators::min_length(1))]
                name: String,
                age: i64,
            }
        });

        assert!(output.contains("pub struct UserBuilder"));
        assert!(output.contains("fn set_name"));
        assert!(output.contains("fn set_age"));
        assert!(output.contains("validators :: min_length (1)"));
        assert!(output.contains(":: fieldsmith_core :: schema :: validators :: any ()"));
        assert!(output.contains("ObjectSchema :: new (\"User\")"));
    }

    #[test]
    fn test_option_fields_are_optional() {
        let output = expand_str(parse_quote! {
            struct Profile {
                nickname: Option<String>,
            }
        });

        assert!(output.contains(". optional_field (\"nickname\""));
        assert!(output.contains("Into < String >"));
    }

    #[test]
    fn test_container_and_field_overrides() {
        let output = expand_str(parse_quote! {
            #[schema(builder = "AccountDraft", name = "account")]
            struct Account {
                #[field(rename = "displayName")]
                display_name: String,
            }
        });

        assert!(output.contains("struct AccountDraft"));
        assert!(output.contains("ObjectSchema :: new (\"account\")"));
        assert!(output.contains("fn set_display_name"));
        assert!(output.contains(". field (\"displayName\""));
    }

    #[test]
    fn test_raw_identifiers_are_unrawed() {
        let output = expand_str(parse_quote! {
            struct Item {
                r#type: String,
            }
        });

        assert!(output.contains("fn set_type"));
        assert!(output.contains(". field (\"type\""));
    }

    #[test]
    fn test_rejects_generics() {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<T> { value: T }
        };
        let err = expand(input).unwrap_err();
        assert!(err.to_string().contains("generic"));
    }

    #[test]
    fn test_rejects_tuple_structs_and_enums() {
        let tuple: DeriveInput = parse_quote! { struct Pair(u8, u8); };
        assert!(expand(tuple).is_err());

        let enumeration: DeriveInput = parse_quote! { enum Kind { A, B } };
        assert!(expand(enumeration).is_err());
    }

    #[test]
    fn test_option_inner() {
        let ty: Type = parse_quote!(std::option::Option<u32>);
        assert!(option_inner(&ty).is_some());

        let ty: Type = parse_quote!(Vec<u32>);
        assert!(option_inner(&ty).is_none());
    }
}
