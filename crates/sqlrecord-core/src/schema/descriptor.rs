use super::{FieldDecl, FieldDescriptor, FieldMapper, TaggedView};

use indexmap::IndexMap;
use std::sync::Arc;

/// Field metadata for one declared record type under one field mapper.
///
/// Built once by [`resolve`](super::resolve) and shared read-only afterwards.
#[derive(Debug, Default)]
pub struct TypeDescriptor {
    /// Name of the declared type, for diagnostics
    type_name: &'static str,

    /// Fields in declaration order
    fields: Vec<Arc<FieldDescriptor>>,

    /// View over every field
    all: TaggedView,

    /// One view per declared tag, in order of first appearance
    tagged: IndexMap<String, TaggedView>,
}

impl TypeDescriptor {
    pub fn build(type_name: &'static str, decls: &[FieldDecl], mapper: &FieldMapper) -> Self {
        let fields: Vec<_> = decls
            .iter()
            .enumerate()
            .map(|(index, decl)| Arc::new(FieldDescriptor::from_decl(index, decl, mapper)))
            .collect();

        let mut tags: Vec<&str> = vec![];

        for field in &fields {
            for tag in field.tags() {
                if !tags.contains(&tag.as_str()) {
                    tags.push(tag);
                }
            }
        }

        let tagged = tags
            .iter()
            .map(|&tag| {
                let view = TaggedView::from_fields(fields.iter().filter(|f| f.has_tag(tag)));
                (tag.to_string(), view)
            })
            .collect();

        TypeDescriptor {
            type_name,
            all: TaggedView::from_fields(&fields),
            fields,
            tagged,
        }
    }

    /// Descriptor with no fields, used for types that are not shaped like a
    /// struct with named fields.
    pub fn empty(type_name: &'static str) -> Self {
        TypeDescriptor {
            type_name,
            ..TypeDescriptor::default()
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn fields(&self) -> &[Arc<FieldDescriptor>] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> &FieldDescriptor {
        &self.fields[index]
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True if any field declares a tag group.
    pub fn has_tags(&self) -> bool {
        !self.tagged.is_empty()
    }

    /// Declared tag groups, in order of first appearance.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tagged.keys().map(String::as_str)
    }

    /// Resolves the view for `tag`.
    ///
    /// The empty tag always selects every field, as does any tag on a type
    /// that declares no tag groups. Otherwise an unknown tag yields `None`.
    pub fn tag(&self, tag: &str) -> Option<&TaggedView> {
        if tag.is_empty() || !self.has_tags() {
            return Some(&self.all);
        }

        self.tagged.get(tag)
    }
}
