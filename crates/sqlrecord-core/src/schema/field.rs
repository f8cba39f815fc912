use super::{FieldDecl, FieldMapper, FieldOpts, OPT_OMIT_EMPTY, OPT_WITH_QUOTE};

/// Resolved metadata for one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Position of the field in the record's declaration table
    index: usize,

    /// Rust field identifier
    declared_name: &'static str,

    /// Column name: the `db` annotation, or the mapped declared name
    column_name: String,

    /// Alias used in SELECT; equals `column_name` unless `fieldas` is set
    alias: String,

    /// Tag groups the field belongs to, in annotation order
    tags: Vec<String>,

    /// Parsed `fieldopt` annotation
    options: FieldOpts,

    /// True if the column name must be quoted
    quote: bool,

    /// Tags for which `omitempty` applies. `""` means every tag.
    omit_empty_tags: Vec<String>,
}

impl FieldDescriptor {
    pub(crate) fn from_decl(index: usize, decl: &FieldDecl, mapper: &FieldMapper) -> Self {
        let column_name = match decl.db {
            Some(db) if !db.is_empty() => db.to_string(),
            _ => mapper.map(decl.name),
        };

        let alias = match decl.fieldas {
            Some(fieldas) if !fieldas.is_empty() => fieldas.to_string(),
            _ => column_name.clone(),
        };

        let mut tags: Vec<String> = vec![];

        for tag in decl.fieldtag.unwrap_or_default().split(',') {
            let tag = tag.trim();

            if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }

        let options = FieldOpts::parse(decl.fieldopt.unwrap_or_default());
        let quote = options.contains(OPT_WITH_QUOTE);

        let mut omit_empty_tags: Vec<String> = vec![];

        if let Some(params) = options.params(OPT_OMIT_EMPTY) {
            if params.is_empty() {
                omit_empty_tags.push(String::new());
            }

            for param in params {
                if !omit_empty_tags.contains(param) {
                    omit_empty_tags.push(param.clone());
                }
            }
        }

        FieldDescriptor {
            index,
            declared_name: decl.name,
            column_name,
            alias,
            tags,
            options,
            quote,
            omit_empty_tags,
        }
    }

    /// Gets the index into the record's field table.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn declared_name(&self) -> &'static str {
        self.declared_name
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// True if `fieldas` gave the field an alias distinct from its column.
    pub fn has_alias(&self) -> bool {
        self.alias != self.column_name
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn options(&self) -> &FieldOpts {
        &self.options
    }

    pub fn quote_requested(&self) -> bool {
        self.quote
    }

    pub fn omit_empty_requested(&self) -> bool {
        !self.omit_empty_tags.is_empty()
    }

    /// Returns true if an empty value of this field should be left out of a
    /// statement built for `tag`.
    pub fn should_omit_empty(&self, tag: &str) -> bool {
        self.omit_empty_tags
            .iter()
            .any(|t| t.is_empty() || t == tag)
    }
}
