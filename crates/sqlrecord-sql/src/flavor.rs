use crate::stmt::{DeleteBuilder, InsertBuilder, InsertVerb, SelectBuilder, UpdateBuilder};

/// SQL dialect a statement is built for.
///
/// The flavor decides identifier quoting, placeholder syntax and the insert
/// verbs that differ between databases.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    #[default]
    Mysql,
    Postgresql,
    Sqlite,
}

impl Flavor {
    /// Quotes an identifier. Embedded quote characters are doubled.
    pub fn quote(self, ident: &str) -> String {
        let q = match self {
            Flavor::Mysql => '`',
            Flavor::Postgresql | Flavor::Sqlite => '"',
        };

        let mut ret = String::with_capacity(ident.len() + 2);
        ret.push(q);

        for ch in ident.chars() {
            if ch == q {
                ret.push(q);
            }
            ret.push(ch);
        }

        ret.push(q);
        ret
    }

    pub fn is_mysql(self) -> bool {
        matches!(self, Flavor::Mysql)
    }

    pub fn is_postgresql(self) -> bool {
        matches!(self, Flavor::Postgresql)
    }

    pub fn is_sqlite(self) -> bool {
        matches!(self, Flavor::Sqlite)
    }

    pub fn select_builder(self) -> SelectBuilder {
        SelectBuilder::new(self)
    }

    pub fn insert_builder(self, verb: InsertVerb) -> InsertBuilder {
        InsertBuilder::new(self, verb)
    }

    pub fn update_builder(self) -> UpdateBuilder {
        UpdateBuilder::new(self)
    }

    pub fn delete_builder(self) -> DeleteBuilder {
        DeleteBuilder::new(self)
    }
}
