use super::CodeGenerator;
use crate::{
    PageRoute,
    config::NamingConfig,
    utils::case::{convert_to_case, sanitize_identifier},
    utils::path::{Segment, split_segments},
};
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::{HashMap, HashSet};

pub struct PageLinksGenerator;

impl CodeGenerator for PageLinksGenerator {
    type Config = NamingConfig;
    type Output = String;

    fn generate(
        routes: &[PageRoute],
        config: &Self::Config,
    ) -> Result<Self::Output, Box<dyn std::error::Error>> {
        if routes.is_empty() {
            return Err("No page routes to generate links for".into());
        }

        let enum_name = make_ident(config.enum_name())?;
        let mut variants = Vec::new();
        let mut path_arms = Vec::new();
        let mut template_arms = Vec::new();

        // Track variant names so two pages never share one
        let mut unique_variants: HashMap<String, &PageRoute> = HashMap::new();

        for route in routes {
            let variant_name = variant_ident(route)?;
            let variant_name_str = variant_name.to_string();

            if let Some(existing_route) = unique_variants.get(&variant_name_str) {
                tracing::warn!(
                    variant = %variant_name_str,
                    path = %route.path,
                    existing = %existing_route.path,
                    "duplicate page variant skipped"
                );
                continue;
            }
            unique_variants.insert(variant_name_str, route);

            let template_path = route.template_path.to_string_lossy().replace('\\', "/");
            template_arms.push(quote! {
                #enum_name::#variant_name { .. } => #template_path
            });

            let fields = create_fields(&route.params, config)?;
            let path_build_code = generate_path_build_code(&route.path, config)?;

            if fields.is_empty() {
                variants.push(quote! { #variant_name });
                path_arms.push(quote! {
                    #enum_name::#variant_name => #path_build_code
                });
            } else {
                variants.push(quote! {
                    #variant_name {
                        #(#fields: String),*
                    }
                });
                path_arms.push(quote! {
                    #enum_name::#variant_name { #(#fields),* } => #path_build_code
                });
            }
        }

        let generated = quote! {
            /// Auto-generated enum of every scanned page
            #[derive(Debug, Clone, PartialEq)]
            pub enum #enum_name {
                #(#variants),*
            }

            impl #enum_name {
                /// Route path with parameters filled in
                pub fn to_path(&self) -> String {
                    match self {
                        #(#path_arms),*
                    }
                }

                /// Template file backing this page, relative to the pages directory
                pub fn template(&self) -> &'static str {
                    match self {
                        #(#template_arms),*
                    }
                }
            }

            impl std::fmt::Display for #enum_name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.to_path())
                }
            }
        };

        Ok(generated.to_string())
    }
}

/// Pages skipped because an earlier page already took their variant name,
/// paired with the page that kept it.
pub(crate) fn duplicate_variants(routes: &[PageRoute]) -> Vec<(&PageRoute, &PageRoute)> {
    let mut taken: HashMap<String, &PageRoute> = HashMap::new();
    let mut duplicates = Vec::new();

    for route in routes {
        let Ok(variant_name) = variant_ident(route) else {
            continue;
        };
        match taken.get(&variant_name.to_string()) {
            Some(existing_route) => duplicates.push((route, *existing_route)),
            None => {
                taken.insert(variant_name.to_string(), route);
            }
        }
    }

    duplicates
}

fn variant_ident(route: &PageRoute) -> Result<proc_macro2::Ident, Box<dyn std::error::Error>> {
    make_ident(&sanitize_identifier(&route.component)).map_err(|e| {
        format!(
            "Invalid variant name for page {}: {}",
            route.template_path.display(),
            e
        )
        .into()
    })
}

/// Parses `name` as an identifier, falling back to `r#name` for keywords.
fn make_ident(name: &str) -> Result<proc_macro2::Ident, Box<dyn std::error::Error>> {
    syn::parse_str::<proc_macro2::Ident>(name)
        .or_else(|_| syn::parse_str::<proc_macro2::Ident>(&format!("r#{}", name)))
        .map_err(|e| format!("`{}` is not a valid identifier: {}", name, e).into())
}

fn field_name(param: &str, config: &NamingConfig) -> String {
    sanitize_identifier(&convert_to_case(param, config.field_case()))
}

/// One field per distinct parameter, in path order.
fn create_fields(
    params: &[String],
    config: &NamingConfig,
) -> Result<Vec<proc_macro2::Ident>, Box<dyn std::error::Error>> {
    let mut seen = HashSet::new();
    params
        .iter()
        .map(|param| field_name(param, config))
        .filter(|name| seen.insert(name.clone()))
        .map(|name| make_ident(&name))
        .collect()
}

fn generate_path_build_code(
    route_path: &str,
    config: &NamingConfig,
) -> Result<TokenStream, Box<dyn std::error::Error>> {
    // The root page is a bare "/"
    if route_path == "/" {
        return Ok(quote! { "/".to_string() });
    }

    let mut push_operations = Vec::new();
    for segment in split_segments(route_path) {
        push_operations.push(quote! { path.push('/'); });
        match segment {
            Segment::Param(name) => {
                let field = make_ident(&field_name(name, config))?;
                push_operations.push(quote! { path.push_str(&#field); });
            }
            Segment::Literal("") => {}
            Segment::Literal(text) => {
                push_operations.push(quote! { path.push_str(#text); });
            }
        }
    }

    Ok(quote! {
        {
            let mut path = String::new();
            #(#push_operations)*
            path
        }
    })
}
