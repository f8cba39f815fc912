/// Raw declaration of one record field, exactly as written by the record
/// author.
///
/// Each annotation is kept as its unparsed string so the engine owns the
/// grammar; the derive macro only copies the literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    /// Rust field identifier
    pub name: &'static str,

    /// `#[db = "..."]`: column name override
    pub db: Option<&'static str>,

    /// `#[fieldtag = "..."]`: comma separated tag groups
    pub fieldtag: Option<&'static str>,

    /// `#[fieldopt = "..."]`: field options such as `withquote` and `omitempty(tag)`
    pub fieldopt: Option<&'static str>,

    /// `#[fieldas = "..."]`: column alias used in SELECT
    pub fieldas: Option<&'static str>,
}

impl FieldDecl {
    /// Declaration with no annotations.
    pub const fn new(name: &'static str) -> FieldDecl {
        FieldDecl {
            name,
            db: None,
            fieldtag: None,
            fieldopt: None,
            fieldas: None,
        }
    }

    pub const fn db(mut self, db: &'static str) -> FieldDecl {
        self.db = Some(db);
        self
    }

    pub const fn fieldtag(mut self, fieldtag: &'static str) -> FieldDecl {
        self.fieldtag = Some(fieldtag);
        self
    }

    pub const fn fieldopt(mut self, fieldopt: &'static str) -> FieldDecl {
        self.fieldopt = Some(fieldopt);
        self
    }

    pub const fn fieldas(mut self, fieldas: &'static str) -> FieldDecl {
        self.fieldas = Some(fieldas);
        self
    }
}
