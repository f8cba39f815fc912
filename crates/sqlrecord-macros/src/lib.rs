extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `sqlrecord::Record` for a struct with named fields.
///
/// Field annotations, all optional string values:
///
/// - `#[db = "column"]`: column name; `"-"` leaves the field unmapped
/// - `#[fieldtag = "a,b"]`: tag groups the field belongs to
/// - `#[fieldopt = "withquote,omitempty(a)"]`: field options
/// - `#[fieldas = "alias"]`: alias used in SELECT
///
/// Enums, unions and structs without named fields derive a record with no
/// fields.
#[proc_macro_derive(Record, attributes(db, fieldtag, fieldopt, fieldas))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match sqlrecord_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
