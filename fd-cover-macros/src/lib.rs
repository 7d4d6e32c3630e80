use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, LitStr, Token};

/// One dependency: attribute names on both sides of `->`
struct Dependency {
    lhs: Vec<String>,
    rhs: Vec<String>,
}

impl Dependency {
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        let lhs = &self.lhs;
        let rhs = &self.rhs;
        let lhs_len = lhs.len();
        let rhs_len = rhs.len();
        quote! {
            {
                let lhs: [&str; #lhs_len] = [#(#lhs),*];
                let rhs: [&str; #rhs_len] = [#(#rhs),*];
                ::fd_cover::FunctionalDependency::new(lhs, rhs)
            }
        }
    }
}

impl Parse for Dependency {
    fn parse(input: ParseStream) -> Result<Self> {
        let lhs = parse_attributes(input)?;
        input.parse::<Token![->]>()?;
        let rhs = parse_attributes(input)?;
        Ok(Dependency { lhs, rhs })
    }
}

/// `;`-separated dependencies, trailing `;` allowed
struct Dependencies {
    dependencies: Vec<Dependency>,
}

impl Parse for Dependencies {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut dependencies = Vec::new();
        while !input.is_empty() {
            dependencies.push(input.parse()?);
            if input.is_empty() {
                break;
            }
            input.parse::<Token![;]>()?;
        }
        Ok(Dependencies { dependencies })
    }
}

/// Parse attribute names up to `->`, `;` or the end of input
///
/// Names are identifiers (raw identifiers lose their `r#` prefix) or string
/// literals; commas between them are optional.
fn parse_attributes(input: ParseStream) -> Result<Vec<String>> {
    let mut attributes = Vec::new();
    while !input.is_empty() && !input.peek(Token![->]) && !input.peek(Token![;]) {
        if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            attributes.push(lit.value());
        } else {
            let ident = input.call(Ident::parse_any)?;
            attributes.push(ident.unraw().to_string());
        }
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
    }
    Ok(attributes)
}

/// The `fd!` procedural macro for a single functional dependency
///
/// # Supported Syntax
///
/// - `A, B -> C` - identifiers as attribute names
/// - `"first name" -> id` - string literals for names that are not identifiers
/// - `A B -> C D` - commas are optional
/// - `-> C` - either side may be empty
///
/// # Examples
///
/// ```ignore
/// use fd_cover::fd;
///
/// let dep = fd!(emp_id -> name, "dept no");
/// assert_eq!(dep.to_string(), "emp_id->\"dept no\",name");
/// ```
#[proc_macro]
pub fn fd(input: TokenStream) -> TokenStream {
    let dependency = parse_macro_input!(input as Dependency);
    TokenStream::from(dependency.to_tokens())
}

/// The `fds!` procedural macro for a dependency set
///
/// Dependencies use the [`fd!`] syntax and are separated by `;`. The result is a
/// `DependencySet` in the order written.
///
/// # Examples
///
/// ```ignore
/// use fd_cover::fds;
///
/// let deps = fds![A, B -> C; C -> D, E];
/// assert_eq!(deps.to_string(), "A,B->C; C->D,E");
/// ```
#[proc_macro]
pub fn fds(input: TokenStream) -> TokenStream {
    let parsed = parse_macro_input!(input as Dependencies);
    let dependencies = parsed.dependencies.iter().map(Dependency::to_tokens);
    TokenStream::from(quote! {
        ::fd_cover::DependencySet::from_dependencies(::std::vec![#(#dependencies),*])
    })
}
