use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let sqlrecord = &self.sqlrecord;
        let ident = &self.record.ident;

        let decls = self.expand_field_decls();
        let field_value = self.expand_field_value();
        let is_empty_field = self.expand_is_empty_field();
        let scan_targets = self.expand_scan_targets();

        quote! {
            impl #sqlrecord::Record for #ident {
                fn fields() -> &'static [#sqlrecord::FieldDecl] {
                    const FIELDS: &[#sqlrecord::FieldDecl] = &[ #( #decls ),* ];
                    FIELDS
                }

                #field_value
                #is_empty_field
                #scan_targets
            }
        }
    }

    fn expand_field_decls(&self) -> Vec<TokenStream> {
        let sqlrecord = &self.sqlrecord;

        self.record
            .fields
            .iter()
            .map(|field| {
                let name = &field.name;
                let db = option_lit(&field.attrs.db);
                let fieldtag = option_lit(&field.attrs.fieldtag);
                let fieldopt = option_lit(&field.attrs.fieldopt);
                let fieldas = option_lit(&field.attrs.fieldas);

                quote! {
                    #sqlrecord::FieldDecl {
                        name: #name,
                        db: #db,
                        fieldtag: #fieldtag,
                        fieldopt: #fieldopt,
                        fieldas: #fieldas,
                    }
                }
            })
            .collect()
    }

    fn expand_field_value(&self) -> TokenStream {
        let sqlrecord = &self.sqlrecord;

        let arms = self.record.fields.iter().enumerate().map(|(index, field)| {
            let field_ident = &field.ident;
            quote!( #index => #sqlrecord::Primitive::to_value(&self.#field_ident), )
        });

        quote! {
            fn field_value(&self, index: usize) -> #sqlrecord::Value {
                match index {
                    #( #arms )*
                    _ => #sqlrecord::Value::Null,
                }
            }
        }
    }

    fn expand_is_empty_field(&self) -> TokenStream {
        let sqlrecord = &self.sqlrecord;

        let arms = self.record.fields.iter().enumerate().map(|(index, field)| {
            let field_ident = &field.ident;
            quote!( #index => #sqlrecord::Primitive::is_empty_value(&self.#field_ident), )
        });

        quote! {
            fn is_empty_field(&self, index: usize) -> bool {
                match index {
                    #( #arms )*
                    _ => true,
                }
            }
        }
    }

    fn expand_scan_targets(&self) -> TokenStream {
        let sqlrecord = &self.sqlrecord;

        // Each field is borrowed once, so the borrows are disjoint.
        let targets = self.record.fields.iter().map(|field| {
            let field_ident = &field.ident;
            quote!( &mut self.#field_ident as &mut dyn #sqlrecord::Scan )
        });

        quote! {
            fn scan_targets(&mut self) -> ::std::vec::Vec<&mut dyn #sqlrecord::Scan> {
                ::std::vec![ #( #targets ),* ]
            }
        }
    }
}

fn option_lit(lit: &Option<syn::LitStr>) -> TokenStream {
    match lit {
        Some(lit) => quote!(::core::option::Option::Some(#lit)),
        None => quote!(::core::option::Option::None),
    }
}
