use sqlrecord::{Flavor, Mapper, Record, Value};
use tests::{
    assert_eq, assert_stmt,
    fixtures::{Item, User},
    init_logging, records,
};

#[test]
fn retained_omitempty_column_uses_null_for_empty_cells() {
    init_logging();

    let mapper = Mapper::new::<Item>();
    let a = Item::new(1, "");
    let b = Item::new(2, "x");

    let builder = mapper.insert_into_for_tag("t", "", records![a, b]);

    assert_eq!(builder.columns(), ["id", "name"]);
    assert_eq!(
        builder.rows(),
        [
            vec![Value::I64(1), Value::Null],
            vec![Value::I64(2), Value::from("x")],
        ]
    );
    assert_stmt!(
        builder,
        "INSERT INTO t (id, name) VALUES (?, ?), (?, ?)",
        [1, Value::Null, 2, "x"]
    );
}

#[test]
fn omitempty_column_dropped_when_empty_in_every_row() {
    let mapper = Mapper::new::<Item>();
    let a = Item::new(1, "");

    let builder = mapper.insert_into("t", records![a]);

    assert_eq!(builder.columns(), ["id"]);
    assert_stmt!(builder, "INSERT INTO t (id) VALUES (?)", [1]);

    let a = Item::new(1, "");
    let b = Item::new(2, "");
    let builder = mapper.insert_into("t", records![a, b]);
    assert_stmt!(builder, "INSERT INTO t (id) VALUES (?), (?)", [1, 2]);
}

#[test]
fn regular_columns_keep_empty_values() {
    let mapper = Mapper::new::<Item>();
    let a = Item::new(0, "n");

    let builder = mapper.insert_into("t", records![a]);
    assert_stmt!(builder, "INSERT INTO t (id, name) VALUES (?, ?)", [0, "n"]);
}

#[test]
fn omitempty_scoped_to_tag() {
    let mapper = Mapper::new::<User>();
    let user = User {
        id: 1,
        name: "alice".into(),
        ..Default::default()
    };

    // `email` only omits under the `info` tag.
    let builder = mapper.insert_into_for_tag("users", "info", records![user]);
    assert_stmt!(
        builder,
        "INSERT INTO users (`name`, status) VALUES (?, ?)",
        ["alice", 0]
    );

    let builder = mapper.insert_into("users", records![user]);
    assert_stmt!(
        builder,
        "INSERT INTO users (id, `name`, email, status) VALUES (?, ?, ?, ?)",
        [1, "alice", "", 0]
    );
}

#[test]
fn foreign_records_are_skipped() {
    init_logging();

    let mapper = Mapper::new::<Item>();
    let item = Item::new(7, "seven");
    let user = User::default();
    let number = 42_i32;

    let builder = mapper.insert_into("t", records![user, item, number]);

    assert_eq!(builder.rows().len(), 1);
    assert_stmt!(
        builder,
        "INSERT INTO t (id, name) VALUES (?, ?)",
        [7, "seven"]
    );
}

#[test]
fn no_matching_records_lists_columns_only() {
    let mapper = Mapper::new::<User>();
    let item = Item::new(1, "x");

    let builder = mapper.insert_into("users", records![item]);
    assert_eq!(builder.columns(), ["id", "`name`", "email", "status"]);
    assert!(builder.rows().is_empty());

    let none: Vec<&dyn std::any::Any> = vec![];
    let builder = mapper.insert_into("users", none);
    assert_stmt!(builder, "INSERT INTO users (id, `name`, email, status)", []);
}

#[test]
fn unknown_tag_yields_bare_insert() {
    let mapper = Mapper::new::<User>();
    let user = User::default();

    let builder = mapper.insert_into_for_tag("users", "missing", records![user]);

    assert!(builder.columns().is_empty());
    assert_stmt!(builder, "INSERT INTO users", []);
}

#[test]
fn verbs_follow_flavor() {
    let item = Item::new(1, "a");

    let mysql = Mapper::new::<Item>();
    assert_stmt!(
        mysql.insert_ignore_into("t", records![item]),
        "INSERT IGNORE INTO t (id, name) VALUES (?, ?)",
        [1, "a"]
    );
    assert_stmt!(
        mysql.replace_into("t", records![item]),
        "REPLACE INTO t (id, name) VALUES (?, ?)",
        [1, "a"]
    );

    let sqlite = mysql.for_flavor(Flavor::Sqlite);
    assert_stmt!(
        sqlite.insert_ignore_into_for_tag("t", "", records![item]),
        "INSERT OR IGNORE INTO t (id, name) VALUES (?1, ?2)",
        [1, "a"]
    );

    let postgresql = mysql.for_flavor(Flavor::Postgresql);
    assert_stmt!(
        postgresql.insert_ignore_into("t", records![item]),
        "INSERT INTO t (id, name) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        [1, "a"]
    );
    assert_stmt!(
        postgresql.replace_into_for_tag("t", "", records![item]),
        "INSERT INTO t (id, name) VALUES ($1, $2)",
        [1, "a"]
    );
}

#[test]
fn optional_fields_are_dereferenced() {
    #[derive(Record)]
    struct Profile {
        id: i64,

        #[fieldopt = "omitempty"]
        nickname: Option<String>,

        age: Option<u32>,
    }

    let mapper = Mapper::new::<Profile>();
    let a = Profile {
        id: 1,
        nickname: Some("al".into()),
        age: None,
    };
    let b = Profile {
        id: 2,
        nickname: None,
        age: Some(30),
    };

    assert_stmt!(
        mapper.insert_into("profiles", records![a, b]),
        "INSERT INTO profiles (id, nickname, age) VALUES (?, ?, ?), (?, ?, ?)",
        [1, "al", Value::Null, 2, Value::Null, 30u32]
    );
}

#[test]
fn alias_matching_another_column_keeps_both_fields() {
    #[derive(Record)]
    struct Shadow {
        #[db = "a"]
        #[fieldas = "b"]
        first: i32,

        #[db = "b"]
        second: i32,
    }

    let mapper = Mapper::new::<Shadow>();
    let shadow = Shadow {
        first: 1,
        second: 2,
    };

    assert_stmt!(
        mapper.insert_into("t", records![shadow]),
        "INSERT INTO t (a, b) VALUES (?, ?)",
        [1, 2]
    );
    assert_stmt!(
        mapper.select_from("t"),
        "SELECT t.a AS b, t.b FROM t",
        []
    );
}
