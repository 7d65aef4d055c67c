//! Weave derive macro implementation

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::Data;
use syn::DeriveInput;
use syn::Fields;
use syn::GenericParam;
use syn::Ident;
use syn::Type;
use syn::parse_macro_input;
use syn::parse_quote;

use crate::attributes::PropertyDecl;
use crate::attributes::parse_field_options;
use crate::attributes::parse_properties;

/// A field that takes part in mapping
struct FieldMember {
    ident:    Ident,
    ty:       Type,
    readonly: bool,
}

/// Implementation of the Weave derive macro
pub fn derive_weave_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    // Ensure we're working with a struct
    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Weave can only be derived for structs",
        ));
    };

    // Collect field information; unit structs have no members
    let fields = match &data_struct.fields {
        Fields::Named(named) => collect_fields(named.named.iter())?,
        Fields::Unit => Vec::new(),
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Weave can only be derived for structs with named fields",
            ));
        }
    };
    let properties = parse_properties(&input.attrs)?;

    add_trait_bounds(&mut input)?;

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Fields first, then properties, matching the mapper's pass order
    let descriptors = fields
        .iter()
        .map(field_descriptor)
        .chain(properties.iter().map(property_descriptor));
    let read_arms = fields
        .iter()
        .map(field_read_arm)
        .chain(properties.iter().map(property_read_arm));
    // Read-only fields and getter-only properties get no write arm
    let write_arms = fields
        .iter()
        .filter_map(field_write_arm)
        .chain(properties.iter().filter_map(property_write_arm));

    // Generate the trait implementation
    Ok(quote! {
        impl #impl_generics ::object_weaver::Weave for #struct_name #ty_generics #where_clause {
            fn members(&self) -> &'static [::object_weaver::MemberDescriptor] {
                ::object_weaver::registry::members_of::<Self>(|| {
                    ::std::vec![
                        #(#descriptors,)*
                    ]
                })
            }

            fn read_member(
                &self,
                kind: ::object_weaver::MemberKind,
                name: &str,
            ) -> ::core::option::Option<::std::boxed::Box<dyn ::core::any::Any>> {
                match (kind, name) {
                    #(#read_arms,)*
                    _ => ::core::option::Option::None,
                }
            }

            fn write_member(
                &mut self,
                kind: ::object_weaver::MemberKind,
                name: &str,
                value: ::std::boxed::Box<dyn ::core::any::Any>,
            ) -> ::core::result::Result<(), ::std::boxed::Box<dyn ::core::any::Any>> {
                match (kind, name) {
                    #(#write_arms,)*
                    _ => ::core::result::Result::Err(value),
                }
            }
        }
    })
}

fn collect_fields<'a>(
    fields: impl Iterator<Item = &'a syn::Field>,
) -> syn::Result<Vec<FieldMember>> {
    let mut members = Vec::new();

    for field in fields {
        let options = parse_field_options(&field.attrs)?;
        // Skipped fields are not members and keep their default
        if options.skip {
            continue;
        }
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "Weave requires named fields"));
        };
        members.push(FieldMember {
            ident,
            ty: field.ty.clone(),
            readonly: options.readonly,
        });
    }

    Ok(members)
}

/// Values cross the `Any` boundary, so every type parameter must be `'static`;
/// fields are cloned out of the source, so they must be `Clone` as well.
fn add_trait_bounds(input: &mut DeriveInput) -> syn::Result<()> {
    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Weave cannot be derived for types with lifetime parameters",
        ));
    }

    for param in &mut input.generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param
                .bounds
                .push(parse_quote!(::core::clone::Clone));
            type_param.bounds.push(parse_quote!('static));
        }
    }

    Ok(())
}

/// Member names as seen by the mapper: raw identifiers lose their `r#`
fn member_name(ident: &Ident) -> String {
    let name = ident.to_string();
    name.strip_prefix("r#").map_or_else(|| name.clone(), str::to_string)
}

fn field_descriptor(field: &FieldMember) -> TokenStream2 {
    let name = member_name(&field.ident);
    let ty = &field.ty;
    let writable = !field.readonly;

    quote! {
        ::object_weaver::MemberDescriptor::field::<#ty>(#name, #writable)
    }
}

fn property_descriptor(property: &PropertyDecl) -> TokenStream2 {
    let name = &property.name;
    let ty = &property.ty;
    let writable = property.setter.is_some();

    quote! {
        ::object_weaver::MemberDescriptor::property::<#ty>(#name, #writable)
    }
}

fn field_read_arm(field: &FieldMember) -> TokenStream2 {
    let name = member_name(&field.ident);
    let ident = &field.ident;

    quote! {
        (::object_weaver::MemberKind::Field, #name) => ::core::option::Option::Some(
            ::std::boxed::Box::new(::core::clone::Clone::clone(&self.#ident))
                as ::std::boxed::Box<dyn ::core::any::Any>
        )
    }
}

fn property_read_arm(property: &PropertyDecl) -> TokenStream2 {
    let name = &property.name;
    let ty = &property.ty;
    let getter = &property.getter;

    // The typed binding makes a getter returning the wrong type a compile error
    quote! {
        (::object_weaver::MemberKind::Property, #name) => {
            let value: #ty = self.#getter();
            ::core::option::Option::Some(
                ::std::boxed::Box::new(value) as ::std::boxed::Box<dyn ::core::any::Any>
            )
        }
    }
}

fn field_write_arm(field: &FieldMember) -> Option<TokenStream2> {
    if field.readonly {
        return None;
    }
    let name = member_name(&field.ident);
    let ident = &field.ident;
    let ty = &field.ty;

    Some(quote! {
        (::object_weaver::MemberKind::Field, #name) => {
            self.#ident = *value.downcast::<#ty>()?;
            ::core::result::Result::Ok(())
        }
    })
}

fn property_write_arm(property: &PropertyDecl) -> Option<TokenStream2> {
    let setter = property.setter.as_ref()?;
    let name = &property.name;
    let ty = &property.ty;

    Some(quote! {
        (::object_weaver::MemberKind::Property, #name) => {
            self.#setter(*value.downcast::<#ty>()?);
            ::core::result::Result::Ok(())
        }
    })
}
