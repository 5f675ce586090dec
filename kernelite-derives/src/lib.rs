use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DeriveInput, Field, LitStr, Meta, Type};

macro_rules! has_attr {
    ($F:expr, $Attr:expr) => {
        $F.attrs.iter().any(|a| a.path().is_ident($Attr))
    };
}

/// Implements `kernelite::params::PortSpec` for a parameter bundle.
///
/// The generated impl names the trait through the `kernelite` crate, so the
/// derive is meant to be used through `kernelite::KernelParams`.
///
/// Mark each field the kernel reads with `#[input]` and each field it writes
/// with `#[output]`. The port is named after the field unless a name is given
/// in the attribute. Fields with neither attribute are not ports.
///
/// Output ports must be `&mut` borrows, and port names must be unique.
///
/// ```ignore
/// #[derive(Debug, KernelParams)]
/// pub struct ActivationParams<'a> {
///     #[input("X")]
///     pub x: &'a Tensor,
///     #[output("Out")]
///     pub out: &'a mut Tensor,
/// }
///
/// assert_eq!(ActivationParams::INPUTS, ["X"]);
/// assert_eq!(ActivationParams::OUTPUTS, ["Out"]);
/// ```
#[proc_macro_derive(KernelParams, attributes(input, output))]
pub fn kernel_params(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_kernel_params(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_kernel_params(input: &DeriveInput) -> syn::Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(obj) => &obj.fields,
        Data::Enum(_) => {
            return Err(syn::Error::new(
                input.span(),
                "KernelParams cannot be derived for enums.",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new(
                input.span(),
                "KernelParams cannot be derived for unions.",
            ))
        }
    };

    let mut inputs: Vec<LitStr> = Vec::new();
    let mut outputs: Vec<LitStr> = Vec::new();
    for f in fields.iter() {
        let is_input = has_attr!(f, "input");
        let is_output = has_attr!(f, "output");
        if is_input && is_output {
            return Err(syn::Error::new(
                f.span(),
                "a field cannot be both an #[input] and an #[output]",
            ));
        }
        if is_input {
            inputs.push(port_name(f, "input")?);
        }
        if is_output {
            if !matches!(&f.ty, Type::Reference(r) if r.mutability.is_some()) {
                return Err(syn::Error::new(
                    f.ty.span(),
                    "#[output] ports must be `&mut` borrows",
                ));
            }
            outputs.push(port_name(f, "output")?);
        }
    }

    let mut seen: Vec<String> = Vec::new();
    for lit in inputs.iter().chain(outputs.iter()) {
        let name = lit.value();
        if seen.contains(&name) {
            return Err(syn::Error::new(
                lit.span(),
                format!("duplicate port name `{name}`"),
            ));
        }
        seen.push(name);
    }

    let name = &input.ident;
    let name_str = LitStr::new(&name.to_string(), name.span());
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::kernelite::params::PortSpec for #name #ty_generics #where_clause {
            const NAME: &'static str = #name_str;
            const INPUTS: &'static [&'static str] = &[#(#inputs),*];
            const OUTPUTS: &'static [&'static str] = &[#(#outputs),*];
        }
    })
}

/// `#[input("X")]` names the port `X`, a bare `#[input]` uses the field name.
fn port_name(f: &Field, attr_name: &str) -> syn::Result<LitStr> {
    let attr = f
        .attrs
        .iter()
        .find(|a| a.path().is_ident(attr_name))
        .ok_or_else(|| syn::Error::new(f.span(), format!("missing #[{attr_name}]")))?;
    match &attr.meta {
        Meta::Path(_) => match &f.ident {
            Some(ident) => Ok(LitStr::new(&ident.to_string(), ident.span())),
            None => Err(syn::Error::new(
                attr.span(),
                format!("tuple fields need an explicit port name, e.g. #[{attr_name}(\"X\")]"),
            )),
        },
        _ => attr.parse_args::<LitStr>(),
    }
}
