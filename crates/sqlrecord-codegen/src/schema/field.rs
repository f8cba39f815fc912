use super::Errors;

use syn::ext::IdentExt;

/// `db` value that removes a field from the mapping.
const SKIP: &str = "-";

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Declared name as seen by field mappers (raw identifier prefix removed)
    pub(crate) name: String,

    /// Raw annotation strings
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// `#[db = "column"]`
    pub(crate) db: Option<syn::LitStr>,

    /// `#[fieldtag = "a,b"]`
    pub(crate) fieldtag: Option<syn::LitStr>,

    /// `#[fieldopt = "withquote,omitempty(tag)"]`
    pub(crate) fieldopt: Option<syn::LitStr>,

    /// `#[fieldas = "alias"]`
    pub(crate) fieldas: Option<syn::LitStr>,
}

impl Field {
    /// Parses a named field. Returns `Ok(None)` for fields marked `#[db = "-"]`.
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Option<Self>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = Errors::default();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            let slot = if attr.path().is_ident("db") {
                &mut attrs.db
            } else if attr.path().is_ident("fieldtag") {
                &mut attrs.fieldtag
            } else if attr.path().is_ident("fieldopt") {
                &mut attrs.fieldopt
            } else if attr.path().is_ident("fieldas") {
                &mut attrs.fieldas
            } else {
                continue;
            };

            if slot.is_some() {
                errs.push(syn::Error::new_spanned(attr, "duplicate field annotation"));
                continue;
            }

            match parse_str_value(attr) {
                Ok(lit) => *slot = Some(lit),
                Err(err) => errs.push(err),
            }
        }

        errs.finish()?;

        if attrs.db.as_ref().is_some_and(|db| db.value() == SKIP) {
            return Ok(None);
        }

        Ok(Some(Field {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            attrs,
        }))
    }
}

/// Accepts `#[key = "value"]`.
fn parse_str_value(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let name = attr
        .path()
        .get_ident()
        .map(ToString::to_string)
        .unwrap_or_default();

    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(syn::Error::new_spanned(
            attr,
            format!("expected `{name} = \"...\"`"),
        ));
    };

    match &meta.value {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(lit),
            ..
        }) => Ok(lit.clone()),
        value => Err(syn::Error::new_spanned(
            value,
            format!("`{name}` expects a string literal"),
        )),
    }
}
