mod record;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for sqlrecord types
    sqlrecord: TokenStream,
}

pub(super) fn record(record: &Record) -> TokenStream {
    let expand = Expand {
        record,
        sqlrecord: quote!(_sqlrecord::codegen_support),
    };

    wrap_in_const(expand.expand_record_impl())
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use sqlrecord as _sqlrecord;
            #code
        };
    }
}
