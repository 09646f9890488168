#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the site engine.
//!
//! * [`df_error`] turns an enum with named-field variants into a `thiserror` error with
//!   `.context(...)` support.
//! * [`main`] bootstraps a `df_runtime` profile around an
//!   `async fn main`.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros; see the
//! consuming crates' tests for compiled usage.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro to bootstrap a `df_runtime` profile.
///
/// Rewrites `async fn main() -> Result<..>` into a synchronous `fn main` that builds the
/// runtime described by the profile and blocks on the original body.
///
/// # Profiles
///
/// * `event_loop` - a current-thread runtime; the cooperative single-threaded model the site
///   logic is written for.
/// * `background` - a multi-thread runtime for batch tooling.
/// * no argument / `default` - `RuntimeConfig::default()`, which is `event_loop`.
///
/// # Examples
///
/// ```rust,ignore
/// #[df_runtime::main(event_loop)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for the error enums of this workspace.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext<T>` with `.context(...)` for `Result<T, Name>` and, for every variant holding a
///   `source`, for `Result<T, Source>` as well.
/// * `From<Source>` for variants with a `source` field (or a field tagged `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant
///   exists.
/// * A module-private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A `context` field, when present, must be
/// `Option<Cow<'static, str>>`, and it is mandatory for variants with a source.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[df_derive::df_error]
/// pub enum CatalogError {
///     #[error("Catalog transport failure{}: {source}", format_context(.context))]
///     Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal catalog error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn df_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
