use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, Ident, ItemFn, ReturnType, Type};

/// Expands `#[petreg_runtime::main(profile)]`.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            &input.sig.ident,
            "#[petreg_runtime::main] can only be applied to an async fn",
        )
        .to_compile_error();
    }

    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.output,
            "#[petreg_runtime::main] requires the function to return a Result",
        )
        .to_compile_error();
    }

    let profile = match profile_call(args) {
        Ok(profile) => profile,
        Err(err) => return err.to_compile_error(),
    };

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let config = #profile;
            let rt = ::petreg_runtime::build_runtime_with_config(&config)?;
            rt.block_on(async #block)
        }
    }
}

fn profile_call(args: TokenStream) -> syn::Result<TokenStream> {
    if args.is_empty() {
        return Ok(quote! { ::petreg_runtime::RuntimeConfig::default() });
    }

    let ident: Ident = syn::parse2(args)?;
    match ident.to_string().as_str() {
        "server" => Ok(quote! { ::petreg_runtime::RuntimeConfig::server() }),
        "default" => Ok(quote! { ::petreg_runtime::RuntimeConfig::default() }),
        _ => Err(Error::new_spanned(ident, "Unknown runtime profile. Use: server or default")),
    }
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = &**ty else {
        return false;
    };
    path.path.segments.last().is_some_and(|seg| seg.ident == "Result")
}
