mod record;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Record)] derive macro
// ============================================================================

/// Derive macro for the `Record` trait.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, PartialEq, Record)]
/// struct Book {
///     #[record(name)]
///     pub title: String,
///     #[record(age)]
///     pub edition: u16,
///     #[record(id)]
///     pub isbn: i64,
///     pub shelf: String,
/// }
/// ```
///
/// - `#[record(name)]` marks the field searched by substring and sorted by name.
///   If omitted, defaults to a field named `name`.
/// - `#[record(age)]` marks the field sorted by age. Must convert `Into<u32>`.
///   If omitted, defaults to a field named `age`.
/// - `#[record(id)]` marks the numeric identifier. Must convert `Into<i64>`.
///   If omitted, defaults to a field named `id`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
