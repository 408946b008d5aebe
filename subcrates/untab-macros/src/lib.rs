use proc_macro::TokenStream;
use proc_macro2::Literal;
use proc_macro_error::{abort, abort_call_site, proc_macro_error};
use quote::{quote, ToTokens};
use syn::{parse::Parser, parse_quote, punctuated::Punctuated, MetaNameValue, Token};

const UNTAB_ATTRIBUTE_NAME: &str = "untab";
const TEST_ATTRIBUTE_NAME: &str = "test";

const DEPTH_ARGUMENT_NAME: &str = "depth";
const TRIM_ARGUMENT_NAME: &str = "trim";
const UNIT_ARGUMENT_NAME: &str = "unit";


/// Represents the parsed arguments of an `#[untab(...)]` attribute.
///
/// Arguments that were not provided are `None`.
#[derive(Clone, Default, Debug)]
struct UntabArguments {
    depth: Option<usize>,
    trim: Option<bool>,
    unit: Option<String>,
}

impl UntabArguments {
    /// Fills in any argument not provided here with the one from an enclosing `#[untab(...)]`.
    fn inherit_from(self, enclosing: &UntabArguments) -> Self {
        Self {
            depth: self.depth.or(enclosing.depth),
            trim: self.trim.or(enclosing.trim),
            unit: self.unit.or_else(|| enclosing.unit.clone()),
        }
    }

    /// Returns the arguments as they would be written inside `#[untab(...)]`.
    fn to_attribute_arguments(&self) -> proc_macro2::TokenStream {
        let mut arguments: Vec<proc_macro2::TokenStream> = Vec::with_capacity(3);

        if let Some(depth) = self.depth {
            let depth_literal = Literal::usize_unsuffixed(depth);
            arguments.push(quote!(depth = #depth_literal));
        }

        if let Some(trim) = self.trim {
            arguments.push(quote!(trim = #trim));
        }

        if let Some(unit) = &self.unit {
            arguments.push(quote!(unit = #unit));
        }

        quote!(#(#arguments),*)
    }
}


/// Returns `true` if the last segment of the attribute's path is `name`
/// (so both `#[test]` and `#[tokio::test]` count as `test`).
fn is_attribute_named(attribute: &syn::Attribute, name: &str) -> bool {
    attribute
        .path()
        .segments
        .last()
        .map(|segment| segment.ident == name)
        .unwrap_or(false)
}

/// Parse the contents of an `#[untab(...)]` attribute. Aborts on unknown, duplicate or mistyped arguments.
fn parse_untab_arguments(arguments: proc_macro2::TokenStream) -> UntabArguments {
    let name_value_pairs = Punctuated::<MetaNameValue, Token![,]>::parse_terminated
        .parse2(arguments.clone())
        .unwrap_or_else(|_| {
            abort_call_site!(
                "Expected #[{}({} = integer literal, {} = bool literal, {} = \"string literal\")], \
                got #[{}({})] instead.",
                UNTAB_ATTRIBUTE_NAME,
                DEPTH_ARGUMENT_NAME,
                TRIM_ARGUMENT_NAME,
                UNIT_ARGUMENT_NAME,
                UNTAB_ATTRIBUTE_NAME,
                arguments
            )
        });

    let mut parsed = UntabArguments::default();

    for name_value_pair in name_value_pairs {
        let syn::Expr::Lit(syn::ExprLit { lit: literal, .. }) = &name_value_pair.value else {
            abort!(
                name_value_pair.value,
                "Expected a literal value for #[{}(...)] argument, got {}.",
                UNTAB_ATTRIBUTE_NAME,
                name_value_pair.value.to_token_stream()
            );
        };

        if name_value_pair.path.is_ident(DEPTH_ARGUMENT_NAME) {
            let syn::Lit::Int(depth_literal) = literal else {
                abort!(
                    literal,
                    "Expected #[{}(..., {} = integer literal)], got {}.",
                    UNTAB_ATTRIBUTE_NAME,
                    DEPTH_ARGUMENT_NAME,
                    name_value_pair.to_token_stream()
                );
            };

            if parsed.depth.is_some() {
                abort!(
                    name_value_pair.path,
                    "Unexpected contents of #[{}(...)] attribute: \
                    argument \"{}\" appears more than once.",
                    UNTAB_ATTRIBUTE_NAME,
                    DEPTH_ARGUMENT_NAME
                );
            }

            let depth = depth_literal.base10_parse::<usize>().unwrap_or_else(|error| {
                abort!(
                    depth_literal,
                    "Invalid {} in #[{}(...)]: {}.",
                    DEPTH_ARGUMENT_NAME,
                    UNTAB_ATTRIBUTE_NAME,
                    error
                )
            });

            parsed.depth = Some(depth);
        } else if name_value_pair.path.is_ident(TRIM_ARGUMENT_NAME) {
            let syn::Lit::Bool(trim_literal) = literal else {
                abort!(
                    literal,
                    "Expected #[{}(..., {} = true/false)], got {}.",
                    UNTAB_ATTRIBUTE_NAME,
                    TRIM_ARGUMENT_NAME,
                    name_value_pair.to_token_stream()
                );
            };

            if parsed.trim.is_some() {
                abort!(
                    name_value_pair.path,
                    "Unexpected contents of #[{}(...)] attribute: \
                    argument \"{}\" appears more than once.",
                    UNTAB_ATTRIBUTE_NAME,
                    TRIM_ARGUMENT_NAME
                );
            }

            parsed.trim = Some(trim_literal.value);
        } else if name_value_pair.path.is_ident(UNIT_ARGUMENT_NAME) {
            let syn::Lit::Str(unit_literal) = literal else {
                abort!(
                    literal,
                    "Expected #[{}(..., {} = \"string literal\")], got {}.",
                    UNTAB_ATTRIBUTE_NAME,
                    UNIT_ARGUMENT_NAME,
                    name_value_pair.to_token_stream()
                );
            };

            if parsed.unit.is_some() {
                abort!(
                    name_value_pair.path,
                    "Unexpected contents of #[{}(...)] attribute: \
                    argument \"{}\" appears more than once.",
                    UNTAB_ATTRIBUTE_NAME,
                    UNIT_ARGUMENT_NAME
                );
            }

            let unit = unit_literal.value();
            if unit.is_empty() {
                abort!(
                    unit_literal,
                    "The {} in #[{}(...)] must not be empty.",
                    UNIT_ARGUMENT_NAME,
                    UNTAB_ATTRIBUTE_NAME
                );
            }

            parsed.unit = Some(unit);
        } else {
            abort!(
                name_value_pair.path,
                "Unexpected contents of #[{}(...)] attribute: \
                expected arguments {}, {} and/or {}, got \"{}\" instead.",
                UNTAB_ATTRIBUTE_NAME,
                DEPTH_ARGUMENT_NAME,
                TRIM_ARGUMENT_NAME,
                UNIT_ARGUMENT_NAME,
                name_value_pair.path.to_token_stream()
            );
        }
    }

    parsed
}

/// Parse an `#[untab]`/`#[untab(...)]` attribute found on a nested item.
fn parse_nested_untab_attribute(attribute: &syn::Attribute) -> UntabArguments {
    match &attribute.meta {
        syn::Meta::Path(_) => UntabArguments::default(),
        syn::Meta::List(list_attribute) => parse_untab_arguments(list_attribute.tokens.clone()),
        syn::Meta::NameValue(_) => {
            abort!(
                attribute,
                "Expected #[{}(...)], got {} instead.",
                UNTAB_ATTRIBUTE_NAME,
                attribute.to_token_stream()
            );
        }
    }
}


/// Returns the statements that open an untab scope for the rest of a function body.
///
/// The scope guard is bound to a local, so the settings stay in effect until the function returns.
fn generate_scope_statements(arguments: &UntabArguments) -> Vec<syn::Stmt> {
    let depth = match arguments.depth {
        Some(depth) => quote!(::core::option::Option::Some(#depth)),
        None => quote!(::core::option::Option::None),
    };

    let trim = match arguments.trim {
        Some(trim) => quote!(#trim),
        None => quote!(::untab::UntabSettings::DEFAULT_DECLARED_TRIM),
    };

    let mut statements: Vec<syn::Stmt> = Vec::with_capacity(2);

    if let Some(unit) = &arguments.unit {
        statements.push(parse_quote! {
            ::untab::set_indentation_unit(
                ::untab::IndentationUnit::literal(#unit)
                    .expect("non-empty literal indentation units are always valid")
            );
        });
    }

    statements.push(parse_quote! {
        let __untab_scope_guard = ::untab::enter(::untab::UntabSettings::new(#depth, #trim));
    });

    statements
}

/// Prepend the scope statements to the body of `function`.
fn insert_scope_into_function(function: &mut syn::ItemFn, arguments: &UntabArguments) {
    let mut new_statements = generate_scope_statements(arguments);
    new_statements.append(&mut function.block.stmts);

    function.block.stmts = new_statements;
}

/// Hand the enclosing arguments down to an item's own `#[untab(...)]` attribute,
/// filling in whichever arguments it leaves out.
///
/// The nested attribute then expands on its own, after this one.
fn inherit_into_nested_attribute(attribute: &mut syn::Attribute, enclosing: &UntabArguments) {
    let merged_arguments = parse_nested_untab_attribute(attribute)
        .inherit_from(enclosing)
        .to_attribute_arguments();

    let attribute_path = attribute.path().clone();

    *attribute = parse_quote! {
        #[#attribute_path(#merged_arguments)]
    };
}

/// Apply the untab scope to every test function in `items`, descending into nested inline modules.
///
/// Items that carry their own `#[untab(...)]` attribute are left for it to expand,
/// but inherit the arguments they do not override.
fn apply_to_module_items(items: &mut [syn::Item], arguments: &UntabArguments) {
    for item in items {
        match item {
            syn::Item::Fn(function) => {
                if let Some(own_attribute) = function
                    .attrs
                    .iter_mut()
                    .find(|attribute| is_attribute_named(attribute, UNTAB_ATTRIBUTE_NAME))
                {
                    inherit_into_nested_attribute(own_attribute, arguments);
                    continue;
                }

                let is_test_function = function
                    .attrs
                    .iter()
                    .any(|attribute| is_attribute_named(attribute, TEST_ATTRIBUTE_NAME));

                if is_test_function {
                    insert_scope_into_function(function, arguments);
                }
            }
            syn::Item::Mod(nested_module) => {
                if let Some(own_attribute) = nested_module
                    .attrs
                    .iter_mut()
                    .find(|attribute| is_attribute_named(attribute, UNTAB_ATTRIBUTE_NAME))
                {
                    inherit_into_nested_attribute(own_attribute, arguments);
                    continue;
                }

                if let Some((_, nested_items)) = &mut nested_module.content {
                    apply_to_module_items(nested_items, arguments);
                }
            }
            _ => {}
        }
    }
}


/// Scopes untab settings to a test function, or to every test in an inline module.
///
/// Supported arguments (all optional):
/// - `depth = <integer>`: how many indentation units to strip from each line,
/// - `trim = <bool>`: whether to remove leading and trailing blank lines (defaults to `true`),
/// - `unit = "<string>"`: the literal text of one indentation unit (defaults to a tab).
///
/// On a function, the settings apply for the rest of its body. On an inline module,
/// they apply to every `#[test]` (or `#[something::test]`) function inside it, including
/// those in nested inline modules. A nested module or function with its own `#[untab(...)]`
/// overrides the enclosing arguments it specifies and inherits the rest.
///
/// ## Example
/// ```rust
/// #[untab::untab(depth = 2)]
/// mod outer {
///     #[test]
///     fn strips_two_tabs() {
///         assert_eq!(untab::untab("\n\t\t\tfoo\n"), "\tfoo");
///     }
///
///     // Nested attributes are resolved from inside the module, so spell out their path.
///     #[untab::untab(depth = 3)]
///     mod inner {
///         #[test]
///         fn strips_three_tabs() {
///             assert_eq!(untab::untab("\n\t\t\tfoo\n"), "foo");
///         }
///     }
/// }
/// ```
#[proc_macro_error]
#[proc_macro_attribute]
pub fn untab(attributes: TokenStream, item: TokenStream) -> TokenStream {
    let arguments = parse_untab_arguments(attributes.into());

    let mut item = match syn::parse::<syn::Item>(item) {
        Ok(item) => item,
        Err(_) => {
            abort_call_site!(
                "Can't parse input (#[{}] can only be used on functions and inline modules).",
                UNTAB_ATTRIBUTE_NAME
            );
        }
    };

    match &mut item {
        syn::Item::Fn(function) => insert_scope_into_function(function, &arguments),
        syn::Item::Mod(module) => {
            let Some((_, items)) = &mut module.content else {
                abort_call_site!(
                    "#[{}] can only be used on inline modules (mod name {{ ... }}), \
                    not on module declarations.",
                    UNTAB_ATTRIBUTE_NAME
                );
            };

            apply_to_module_items(items, &arguments);
        }
        _ => {
            abort_call_site!(
                "#[{}] can only be used on functions and inline modules.",
                UNTAB_ATTRIBUTE_NAME
            );
        }
    }

    item.into_token_stream().into()
}
