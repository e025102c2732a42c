use super::derived_trait_names;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, ItemFn, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

/// Expands `#[api_model]`: common derives, optional `ToSchema`, and the serde policy.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match api_model_tokens(args, &input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

/// Expands `#[api_handler]`: forwards the arguments to `utoipa::path`.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

#[derive(Default)]
struct ApiModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

#[derive(Default)]
struct SerdeAttrs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

fn api_model_tokens(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = parse_args(args)?;
    let serde = existing_serde_attrs(&input.attrs)?;
    let derived = derived_trait_names(&input.attrs);

    let mut derives = Vec::new();
    if !derived.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !derived.contains("Serialize") {
        derives.push(quote! { ::serde::Serialize });
    }
    if !derived.contains("Deserialize") {
        derives.push(quote! { ::serde::Deserialize });
    }
    let derive_attr =
        if derives.is_empty() { quote! {} } else { quote! { #[derive(#(#derives),*)] } };

    let schema_attr = if derived.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let rename = args.rename_all.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));
    let rename_attr = match &serde.rename_all {
        Some(existing) if existing.value() != rename.value() => {
            return Err(syn::Error::new_spanned(
                existing,
                "Conflicting serde rename_all; remove it or pass the same value to api_model",
            ));
        }
        Some(_) => quote! {},
        None => quote! { #[serde(rename_all = #rename)] },
    };

    let deny = args.deny_unknown_fields.unwrap_or(true);
    if serde.deny_unknown_fields && !deny {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "deny_unknown_fields is already set via serde; remove it before disabling",
        ));
    }
    let deny_attr = if deny && !serde.deny_unknown_fields {
        quote! { #[serde(deny_unknown_fields)] }
    } else {
        quote! {}
    };

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #input
    })
}

fn parse_args(args: TokenStream) -> syn::Result<ApiModelArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut parsed = ApiModelArgs::default();

    for meta in metas {
        let Meta::NameValue(nv) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "Expected name-value arguments like `rename_all = \"...\"`",
            ));
        };

        if nv.path.is_ident("rename_all") {
            let Lit::Str(value) = literal(&nv)? else {
                return Err(syn::Error::new_spanned(&nv.value, "rename_all must be a string"));
            };
            if parsed.rename_all.replace(value.clone()).is_some() {
                return Err(syn::Error::new_spanned(&nv, "Duplicate argument"));
            }
        } else if nv.path.is_ident("deny_unknown_fields") {
            let Lit::Bool(value) = literal(&nv)? else {
                return Err(syn::Error::new_spanned(
                    &nv.value,
                    "deny_unknown_fields must be a boolean",
                ));
            };
            if parsed.deny_unknown_fields.replace(value.value).is_some() {
                return Err(syn::Error::new_spanned(&nv, "Duplicate argument"));
            }
        } else {
            return Err(syn::Error::new_spanned(
                &nv.path,
                "Unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn literal(nv: &MetaNameValue) -> syn::Result<&Lit> {
    match &nv.value {
        Expr::Lit(ExprLit { lit, .. }) => Ok(lit),
        other => Err(syn::Error::new_spanned(other, "Expected a literal value")),
    }
}

fn existing_serde_attrs(attrs: &[Attribute]) -> syn::Result<SerdeAttrs> {
    let mut serde = SerdeAttrs::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                serde.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                serde.deny_unknown_fields = true;
            } else if meta.input.peek(Token![=]) {
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }

    Ok(serde)
}
