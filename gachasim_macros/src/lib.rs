use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Expr, Fields, Lit, LitFloat, LitStr, Meta, parse_macro_input,
    spanned::Spanned,
};

/// Derives `gachasim::WeightedEnum` for a fieldless enum.
///
/// Variant attributes:
/// * `#[probability(<expr>)]` (required): percentage weight of the tier.
/// * `#[label("<text>")]` (optional): display label; defaults to the variant name.
///
/// Declaration order is table order, so the last variant receives any
/// remainder the weights leave uncovered.
#[proc_macro_derive(WeightedEnum, attributes(probability, label))]
pub fn derive_weighted_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            "WeightedEnum can only be derived for enums",
        ));
    };

    if data_enum.variants.is_empty() {
        return Err(syn::Error::new(
            input.ident.span(),
            "WeightedEnum needs at least one variant",
        ));
    }

    let mut entries = Vec::new();
    let mut label_arms = Vec::new();

    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "WeightedEnum only supports fieldless variants",
            ));
        }

        let VariantAttrs { weight, label } = parse_variant_attrs(&variant.attrs)?;
        let Some(weight) = weight else {
            return Err(syn::Error::new(
                variant.span(),
                "missing #[probability(...)] on variant",
            ));
        };

        let ident = &variant.ident;
        let label = label.unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));
        let weight = to_f64_expr(weight);

        entries.push(quote! { (Self::#ident, (#weight)) });
        label_arms.push(quote! { Self::#ident => #label });
    }

    Ok(quote! {
        impl gachasim::WeightedEnum for #enum_ident {
            const ENTRIES: &'static [(Self, f64)] = &[
                #(#entries),*
            ];

            fn label(&self) -> &'static str {
                #enum_ident::label(self)
            }
        }

        impl #enum_ident {
            /// Display label declared with `#[label(...)]`.
            pub const fn label(&self) -> &'static str {
                match self {
                    #(#label_arms),*
                }
            }

            /// Build a `RarityTable<#enum_ident>` from the annotated probabilities.
            pub fn table() -> ::core::result::Result<gachasim::RarityTable<Self>, gachasim::ProbError>
            where
                Self: Copy
            {
                <Self as gachasim::WeightedEnum>::table()
            }
        }
    })
}

#[derive(Default)]
struct VariantAttrs {
    weight: Option<Expr>,
    label: Option<LitStr>,
}

fn parse_variant_attrs(attrs: &[Attribute]) -> syn::Result<VariantAttrs> {
    let mut out = VariantAttrs::default();
    for Attribute { meta, .. } in attrs {
        if meta.path().is_ident("probability") {
            let Meta::List(list) = meta else {
                return Err(syn::Error::new(meta.span(), "use #[probability(<expr>)]"));
            };
            if out.weight.is_some() {
                return Err(syn::Error::new(meta.span(), "duplicate #[probability(...)]"));
            }
            // Parse inside as an expression (e.g., 1.8 or 16/1000)
            let expr = syn::parse2::<Expr>(list.tokens.clone()).map_err(|e| {
                syn::Error::new(list.span(), format!("invalid probability expr: {e}"))
            })?;
            out.weight = Some(expr);
        } else if meta.path().is_ident("label") {
            let Meta::List(list) = meta else {
                return Err(syn::Error::new(meta.span(), "use #[label(\"<text>\")]"));
            };
            if out.label.is_some() {
                return Err(syn::Error::new(meta.span(), "duplicate #[label(...)]"));
            }
            out.label = Some(syn::parse2::<LitStr>(list.tokens.clone())?);
        }
    }
    Ok(out)
}

/// Recursively rewrite integer literals to floating-point (e.g., 1 -> 1.0),
/// so that expressions like `16/1000` use FP division.
fn to_f64_expr(mut e: Expr) -> Expr {
    match e {
        Expr::Lit(ref mut el) => {
            if let Lit::Int(int) = &el.lit {
                let s = format!("{}{}", int.base10_digits(), ".0");
                el.lit = Lit::Float(LitFloat::new(&s, int.span()));
            }
            e
        }
        Expr::Binary(mut b) => {
            b.left = Box::new(to_f64_expr(*b.left));
            b.right = Box::new(to_f64_expr(*b.right));
            Expr::Binary(b)
        }
        Expr::Paren(mut p) => {
            p.expr = Box::new(to_f64_expr(*p.expr));
            Expr::Paren(p)
        }
        Expr::Unary(mut u) => {
            u.expr = Box::new(to_f64_expr(*u.expr));
            Expr::Unary(u)
        }
        Expr::Group(mut g) => {
            g.expr = Box::new(to_f64_expr(*g.expr));
            Expr::Group(g)
        }
        _ => e,
    }
}
