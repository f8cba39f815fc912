use sqlrecord::{Mapper, Record};
use tests::{assert_eq, assert_stmt, records};

#[derive(Record)]
enum Status {
    #[allow(dead_code)]
    Active,
}

#[derive(Record)]
struct Pair(i32, String);

#[derive(Record)]
struct Unit;

#[test]
fn non_struct_types_have_no_fields() {
    assert!(Mapper::new::<Status>().columns().is_empty());
    assert!(Mapper::new::<Pair>().columns().is_empty());
    assert!(Mapper::new::<Unit>().descriptor().is_empty());
}

#[test]
fn empty_record_statements() {
    let mapper = Mapper::new::<Unit>();
    let unit = Unit;

    assert_stmt!(mapper.select_from("t"), "SELECT * FROM t", []);
    assert_stmt!(mapper.update("t", &unit), "UPDATE t", []);
    assert_stmt!(mapper.insert_into("t", records![unit]), "INSERT INTO t", []);

    assert!(mapper.values(&unit).unwrap().is_empty());
    assert!(mapper.addr(&mut Pair(1, "x".into())).is_none());
}

#[test]
fn empty_mapper_matches_nothing() {
    let mapper = Mapper::empty();
    let unit = Unit;

    assert_eq!(mapper.type_name(), None);
    assert!(mapper.columns().is_empty());
    assert!(mapper.values(&unit).is_none());
    assert_stmt!(mapper.update("t", &unit), "UPDATE t", []);
}
