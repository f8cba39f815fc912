use super::{Errors, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Mapped fields in declaration order. Empty for enums, unions, and
    /// structs without named fields.
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut fields = vec![];

        if let syn::Data::Struct(syn::DataStruct {
            fields: syn::Fields::Named(named),
            ..
        }) = &ast.data
        {
            let mut errs = Errors::default();

            for node in &named.named {
                match Field::from_ast(node) {
                    Ok(Some(field)) => fields.push(field),
                    Ok(None) => {}
                    Err(err) => errs.push(err),
                }
            }

            errs.finish()?;
        }

        Ok(Record {
            ident: ast.ident.clone(),
            fields,
        })
    }
}
