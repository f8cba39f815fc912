use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use std::{fmt, sync::Arc};

type MapFn = dyn Fn(&str) -> String + Send + Sync;

/// Maps a declared field name to its default column name.
///
/// Only used for fields without a `db` annotation. A mapper returning an
/// empty string leaves the declared name in place.
#[derive(Clone, Default)]
pub struct FieldMapper {
    kind: Kind,
}

#[derive(Clone, Default)]
enum Kind {
    #[default]
    Identity,
    SnakeCase,
    CamelCase,
    PascalCase,
    KebabCase,
    Custom(Arc<str>, Arc<MapFn>),
}

/// Identity of a mapper, used as part of the descriptor cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum MapperKey {
    Identity,
    SnakeCase,
    CamelCase,
    PascalCase,
    KebabCase,
    Custom(Arc<str>),
}

impl FieldMapper {
    /// Keeps the declared name unchanged.
    pub fn identity() -> FieldMapper {
        FieldMapper {
            kind: Kind::Identity,
        }
    }

    /// `createdAt` → `created_at`
    pub fn snake_case() -> FieldMapper {
        FieldMapper {
            kind: Kind::SnakeCase,
        }
    }

    /// `created_at` → `createdAt`
    pub fn camel_case() -> FieldMapper {
        FieldMapper {
            kind: Kind::CamelCase,
        }
    }

    /// `created_at` → `CreatedAt`
    pub fn pascal_case() -> FieldMapper {
        FieldMapper {
            kind: Kind::PascalCase,
        }
    }

    /// `created_at` → `created-at`
    pub fn kebab_case() -> FieldMapper {
        FieldMapper {
            kind: Kind::KebabCase,
        }
    }

    /// Wraps a custom mapping function identified by `name`.
    ///
    /// Descriptors are cached per (record type, mapper name), so the cache
    /// holds at most one entry per name and type no matter how many mappers
    /// are built. Mappers sharing a name must map names the same way: the
    /// first one used for a record type decides that type's column names.
    pub fn custom(
        name: impl Into<Arc<str>>,
        f: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> FieldMapper {
        FieldMapper {
            kind: Kind::Custom(name.into(), Arc::new(f)),
        }
    }

    /// Column name for a declared field name.
    pub fn map(&self, name: &str) -> String {
        let mapped = match &self.kind {
            Kind::Identity => return name.to_string(),
            Kind::SnakeCase => name.to_snake_case(),
            Kind::CamelCase => name.to_lower_camel_case(),
            Kind::PascalCase => name.to_upper_camel_case(),
            Kind::KebabCase => name.to_kebab_case(),
            Kind::Custom(_, f) => f(name),
        };

        if mapped.is_empty() {
            name.to_string()
        } else {
            mapped
        }
    }

    pub(crate) fn key(&self) -> MapperKey {
        match &self.kind {
            Kind::Identity => MapperKey::Identity,
            Kind::SnakeCase => MapperKey::SnakeCase,
            Kind::CamelCase => MapperKey::CamelCase,
            Kind::PascalCase => MapperKey::PascalCase,
            Kind::KebabCase => MapperKey::KebabCase,
            Kind::Custom(name, _) => MapperKey::Custom(name.clone()),
        }
    }
}

impl fmt::Debug for FieldMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match &self.kind {
            Kind::Identity => "Identity",
            Kind::SnakeCase => "SnakeCase",
            Kind::CamelCase => "CamelCase",
            Kind::PascalCase => "PascalCase",
            Kind::KebabCase => "KebabCase",
            Kind::Custom(name, _) => return f.debug_tuple("FieldMapper::Custom").field(name).finish(),
        };
        f.debug_tuple("FieldMapper").field(&name).finish()
    }
}
