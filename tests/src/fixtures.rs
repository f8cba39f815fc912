//! Record types shared by several test files.

use sqlrecord::Record;

/// Mirrors a typical user table with tag groups, options and an alias.
#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct User {
    #[db = "id"]
    #[fieldtag = "pk"]
    pub id: i64,

    #[db = "name"]
    #[fieldtag = "info"]
    #[fieldopt = "withquote"]
    pub name: String,

    #[db = "email"]
    #[fieldtag = "info"]
    #[fieldopt = "omitempty(info)"]
    pub email: String,

    #[db = "status"]
    #[fieldtag = "info,pk"]
    #[fieldas = "user_status"]
    pub status: i32,

    #[db = "-"]
    pub session: String,
}

/// Untagged record with an option applying to every tag.
#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct Item {
    #[db = "id"]
    pub id: i64,

    #[db = "name"]
    #[fieldopt = "omitempty"]
    pub name: String,
}

impl Item {
    pub fn new(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
        }
    }
}
