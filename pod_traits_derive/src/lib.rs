extern crate proc_macro;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Type, TypePath, Visibility, parse_macro_input, parse_quote};

/// Map a primitive type name to its `pod_traits::Scalar` variant.
fn scalar_variant(ident: &str) -> Option<&'static str> {
    match ident {
        "bool" => Some("Bool"),
        "u8" => Some("U8"),
        "i8" => Some("I8"),
        "u16" => Some("U16"),
        "i16" => Some("I16"),
        "u32" => Some("U32"),
        "i32" => Some("I32"),
        "f32" => Some("F32"),
        "u64" => Some("U64"),
        "i64" => Some("I64"),
        "f64" => Some("F64"),
        "u128" => Some("U128"),
        "i128" => Some("I128"),
        "usize" | "isize" => Some("Pointer"),
        _ => None,
    }
}

fn scalar_tokens(variant: &str) -> TokenStream2 {
    let v = format_ident!("{}", variant);
    quote! { ::pod_traits::FieldType::Scalar(::pod_traits::Scalar::#v) }
}

/// Build a `pod_traits::FieldType` expression for a field type.
fn field_type_tokens(ty: &Type) -> syn::Result<TokenStream2> {
    match ty {
        Type::Path(TypePath { qself: None, path }) => {
            if let Some(ident) = path.get_ident() {
                if let Some(v) = scalar_variant(&ident.to_string()) {
                    return Ok(scalar_tokens(v));
                }
            }
            Ok(quote! {
                ::pod_traits::FieldType::record(<#ty as ::pod_traits::Describe>::describe())
            })
        }
        Type::Array(arr) => {
            let elem = field_type_tokens(&arr.elem)?;
            let len = &arr.len;
            Ok(quote! { ::pod_traits::FieldType::array(#elem, (#len) as usize) })
        }
        Type::Ptr(_) | Type::Reference(_) => Ok(scalar_tokens("Pointer")),
        Type::Paren(p) => field_type_tokens(&p.elem),
        _ => Err(syn::Error::new_spanned(ty, "unsupported field type for Describe")),
    }
}

fn access_tokens(vis: &Visibility) -> TokenStream2 {
    match vis {
        Visibility::Public(_) => quote! { ::pod_traits::Access::Public },
        _ => quote! { ::pod_traits::Access::Private },
    }
}

/// Whether `#[describe(owns_resources)]` is present.
fn owns_resources(input: &DeriveInput) -> syn::Result<bool> {
    let mut owns = false;
    for attr in &input.attrs {
        if !attr.path().is_ident("describe") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("owns_resources") {
                owns = true;
                Ok(())
            } else {
                Err(meta.error("unknown describe attribute, expected `owns_resources`"))
            }
        })?;
    }
    Ok(owns)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let name = ident.to_string();

    let named = match &input.data {
        Data::Struct(ds) => match &ds.fields {
            Fields::Named(named) => Some(named),
            Fields::Unit => None,
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(ident, "Only named fields supported"));
            }
        },
        _ => return Err(syn::Error::new_spanned(ident, "Only structs supported")),
    };

    let mut fields = Vec::new();
    for f in named.into_iter().flat_map(|n| n.named.iter()) {
        let fname = f
            .ident
            .as_ref()
            .map(|i| i.to_string())
            .ok_or_else(|| syn::Error::new_spanned(f, "expected a named field"))?;
        let access = access_tokens(&f.vis);
        let ty = field_type_tokens(&f.ty)?;
        fields.push(quote! { .field(#fname, #access, #ty) });
    }

    let special = if owns_resources(input)? {
        quote! { .user_provided(::pod_traits::SpecialMembers::RESOURCE_MANAGEMENT) }
    } else {
        quote! {}
    };

    // Field types may name type parameters, so each one must describe itself.
    let mut generics = input.generics.clone();
    let params: Vec<_> = generics.type_params().map(|p| p.ident.clone()).collect();
    for param in params {
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#param: ::pod_traits::Describe));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::pod_traits::Describe for #ident #ty_generics #where_clause {
            fn describe() -> ::pod_traits::TypeDescriptor {
                ::pod_traits::TypeDescriptor::new(#name)
                    #( #fields )*
                    #special
            }
        }
    })
}

#[proc_macro_derive(Describe, attributes(describe))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
