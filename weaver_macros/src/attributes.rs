//! Parsing of `#[weave(...)]` attributes

use syn::Attribute;
use syn::Ident;
use syn::LitStr;
use syn::Type;
use syn::meta::ParseNestedMeta;

const WEAVE: &str = "weave";

/// Options from `#[weave(...)]` on a field
#[derive(Default)]
pub struct FieldOptions {
    pub readonly: bool,
    pub skip:     bool,
}

/// A property declared with `#[weave(property(...))]` on the struct
pub struct PropertyDecl {
    pub name:   LitStr,
    pub ty:     Type,
    pub getter: Ident,
    pub setter: Option<Ident>,
}

/// Parse the `#[weave(...)]` attributes on a field
pub fn parse_field_options(attrs: &[Attribute]) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(WEAVE)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("readonly") {
                options.readonly = true;
                Ok(())
            } else if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported weave field attribute, expected `readonly` or `skip`"))
            }
        })?;
    }

    Ok(options)
}

/// Parse every `#[weave(property(...))]` on the struct
pub fn parse_properties(attrs: &[Attribute]) -> syn::Result<Vec<PropertyDecl>> {
    let mut properties = Vec::new();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(WEAVE)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("property") {
                properties.push(parse_property(&meta)?);
                Ok(())
            } else {
                Err(meta.error("unsupported weave struct attribute, expected `property(...)`"))
            }
        })?;
    }

    for (index, property) in properties.iter().enumerate() {
        let duplicate = properties[..index]
            .iter()
            .any(|earlier| earlier.name.value() == property.name.value());
        if duplicate {
            return Err(syn::Error::new(
                property.name.span(),
                format!("duplicate weave property `{}`", property.name.value()),
            ));
        }
    }

    Ok(properties)
}

fn parse_property(meta: &ParseNestedMeta<'_>) -> syn::Result<PropertyDecl> {
    let mut name: Option<LitStr> = None;
    let mut ty: Option<Type> = None;
    let mut getter: Option<LitStr> = None;
    let mut setter: Option<Ident> = None;

    meta.parse_nested_meta(|inner| {
        let value: LitStr = inner.value()?.parse()?;
        if inner.path.is_ident("name") {
            name = Some(value);
        } else if inner.path.is_ident("ty") {
            ty = Some(value.parse()?);
        } else if inner.path.is_ident("get") {
            getter = Some(value);
        } else if inner.path.is_ident("set") {
            setter = Some(value.parse()?);
        } else {
            return Err(inner.error("unsupported property key, expected `name`, `ty`, `get` or `set`"));
        }
        Ok(())
    })?;

    let Some(getter) = getter else {
        return Err(meta.error("weave property requires `get = \"...\"`"));
    };
    let Some(ty) = ty else {
        return Err(meta.error("weave property requires `ty = \"...\"`"));
    };

    Ok(PropertyDecl {
        name: name.unwrap_or_else(|| getter.clone()),
        ty,
        getter: getter.parse()?,
        setter,
    })
}
