//! Attribute parsing for `#[schema(...)]` and `#[field(...)]`
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use syn::{Attribute, Expr, Ident, LitStr, Result};

/// Container-level options from `#[schema(...)]`
#[derive(Default)]
pub struct SchemaArgs {
    pub builder: Option<Ident>,
    pub name: Option<LitStr>,
}

impl SchemaArgs {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut args = SchemaArgs::default();

        for attr in attrs {
            if !attr.path().is_ident("schema") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("builder") {
                    let value: LitStr = meta.value()?.parse()?;
                    args.builder = Some(value.parse()?);
                    Ok(())
                } else if meta.path.is_ident("name") {
                    args.name = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unknown schema attribute, expected `builder` or `name`"))
                }
            })?;
        }

        Ok(args)
    }
}

/// Field-level options from `#[field(...)]`
#[derive(Default)]
pub struct FieldArgs {
    pub validate: Option<Expr>,
    pub rename: Option<LitStr>,
}

impl FieldArgs {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut args = FieldArgs::default();

        for attr in attrs {
            if !attr.path().is_ident("field") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("validate") {
                    if args.validate.is_some() {
                        return Err(meta.error("duplicate `validate`, combine rules with `.and(...)`"));
                    }
                    args.validate = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    args.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unknown field attribute, expected `validate` or `rename`"))
                }
            })?;
        }

        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_schema_args() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[schema(builder = "Draft", name = "user")])];
        let args = SchemaArgs::from_attrs(&attrs).unwrap();
        assert_eq!(args.builder.unwrap().to_string(), "Draft");
        assert_eq!(args.name.unwrap().value(), "user");
    }

    #[test]
    fn test_unrelated_attributes_ignored() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[serde(rename_all = "camelCase")])];
        let args = SchemaArgs::from_attrs(&attrs).unwrap();
        assert!(args.builder.is_none());
        assert!(args.name.is_none());
    }

    #[test]
    fn test_field_args_with_expression() {
        let attrs: Vec<Attribute> =
            vec![parse_quote!(#[field(validate = validators::range(0.0, 150.0), rename = "years")])];
        let args = FieldArgs::from_attrs(&attrs).unwrap();
        assert!(matches!(args.validate, Some(Expr::Call(_))));
        assert_eq!(args.rename.unwrap().value(), "years");
    }

    #[test]
    fn test_unknown_field_key_rejected() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[field(check = "x")])];
        let err = FieldArgs::from_attrs(&attrs).err().unwrap();
        assert!(err.to_string().contains("unknown field attribute"));
    }

    #[test]
    fn test_duplicate_validate_rejected() {
        let attrs: Vec<Attribute> = vec![
            parse_quote!(#[field(validate = a())]),
            parse_quote!(#[field(validate = b())]),
        ];
        assert!(FieldArgs::from_attrs(&attrs).is_err());
    }
}
