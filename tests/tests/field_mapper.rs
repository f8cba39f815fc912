use sqlrecord::{FieldMapper, Mapper, Record};
use tests::assert_eq;

#[derive(Record)]
struct Account {
    account_id: i64,

    display_name: String,

    #[db = "EXPLICIT"]
    created_at: i64,

    #[fieldas = "note_alias"]
    note_text: String,
}

#[test]
fn identity_is_the_default() {
    let mapper = Mapper::new::<Account>();
    assert_eq!(
        mapper.columns(),
        ["account_id", "display_name", "EXPLICIT", "note_alias"]
    );
}

#[test]
fn builtin_case_mappers() {
    let mapper = Mapper::new::<Account>();

    assert_eq!(
        mapper.with_field_mapper(FieldMapper::camel_case()).columns(),
        ["accountId", "displayName", "EXPLICIT", "note_alias"]
    );
    assert_eq!(
        mapper.with_field_mapper(FieldMapper::pascal_case()).columns(),
        ["AccountId", "DisplayName", "EXPLICIT", "note_alias"]
    );
    assert_eq!(
        mapper.with_field_mapper(FieldMapper::kebab_case()).columns(),
        ["account-id", "display-name", "EXPLICIT", "note_alias"]
    );
    assert_eq!(
        mapper.with_field_mapper(FieldMapper::snake_case()).columns(),
        ["account_id", "display_name", "EXPLICIT", "note_alias"]
    );
}

#[test]
fn custom_mapper() {
    let mapper = Mapper::new::<Account>()
        .with_field_mapper(FieldMapper::custom("prefixed", |name| format!("c_{name}")));

    assert_eq!(
        mapper.columns(),
        ["c_account_id", "c_display_name", "EXPLICIT", "note_alias"]
    );

    let (sql, _) = mapper.select_from("a").build();
    assert_eq!(
        sql,
        "SELECT a.c_account_id, a.c_display_name, a.EXPLICIT, a.c_note_text AS note_alias FROM a"
    );
}

#[test]
fn empty_mapper_result_falls_back_to_declared_name() {
    let mapper = Mapper::new::<Account>().with_field_mapper(FieldMapper::custom("blank", |_| String::new()));

    assert_eq!(
        mapper.columns(),
        ["account_id", "display_name", "EXPLICIT", "note_alias"]
    );
}

#[test]
fn mappers_do_not_share_descriptors() {
    let snake = Mapper::new::<Account>().with_field_mapper(FieldMapper::snake_case());
    let camel = snake.with_field_mapper(FieldMapper::camel_case());

    assert_eq!(snake.columns()[0], "account_id");
    assert_eq!(camel.columns()[0], "accountId");
}
