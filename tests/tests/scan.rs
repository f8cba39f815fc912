use sqlrecord::{scan_row, Mapper, Value};
use tests::{
    assert_eq,
    fixtures::{Item, User},
    init_logging,
};

#[test]
fn addr_loads_a_row_into_the_record() {
    let mapper = Mapper::new::<User>();
    let mut user = User::default();

    let targets = mapper.addr(&mut user).unwrap();
    assert_eq!(targets.len(), 4);

    scan_row(
        targets,
        vec![
            Value::I64(10),
            Value::from("carol"),
            Value::from("carol@example.com"),
            Value::I64(2),
        ],
    )
    .unwrap();

    assert_eq!(
        user,
        User {
            id: 10,
            name: "carol".into(),
            email: "carol@example.com".into(),
            status: 2,
            session: String::new(),
        }
    );
}

#[test]
fn addr_for_tag_covers_the_tag_view() {
    let mapper = Mapper::new::<User>();
    let mut user = User::default();

    let targets = mapper.addr_for_tag("pk", &mut user).unwrap();
    scan_row(targets, vec![Value::I64(5), Value::U64(1)]).unwrap();

    assert_eq!(user.id, 5);
    assert_eq!(user.status, 1);
    assert_eq!(user.name, "");
}

#[test]
fn addr_with_cols_follows_caller_order() {
    let mapper = Mapper::new::<User>();
    let mut user = User::default();

    // Aliases resolve to their field as well.
    let targets = mapper
        .addr_with_cols(&["user_status", "name"], &mut user)
        .unwrap();
    scan_row(targets, vec![Value::I64(3), Value::from("dave")]).unwrap();

    assert_eq!(user.status, 3);
    assert_eq!(user.name, "dave");
}

#[test]
fn addr_with_unknown_or_repeated_column_is_none() {
    let mapper = Mapper::new::<User>();
    let mut user = User::default();

    assert!(mapper.addr_with_cols(&["id", "nope"], &mut user).is_none());
    assert!(mapper.addr_with_cols(&["id", "id"], &mut user).is_none());
    assert!(mapper
        .addr_with_cols(&["status", "user_status"], &mut user)
        .is_none());
}

#[test]
fn addr_of_foreign_record_is_none() {
    init_logging();

    let mapper = Mapper::new::<User>();
    let mut item = Item::default();

    assert!(mapper.addr(&mut item).is_none());
    assert!(mapper.addr_for_tag("missing", &mut User::default()).is_none());
}

#[test]
fn scan_reports_conversion_errors() {
    let mapper = Mapper::new::<Item>();
    let mut item = Item::default();

    let targets = mapper.addr(&mut item).unwrap();
    let err = scan_row(targets, vec![Value::from("x"), Value::from("y")]).unwrap_err();

    assert_eq!(err.to_string(), "column 0: cannot convert String to i64");
    assert_eq!(item.id, 0);
}

#[test]
fn scan_rejects_row_length_mismatch() {
    let mapper = Mapper::new::<Item>();
    let mut item = Item::new(1, "keep");

    let targets = mapper.addr(&mut item).unwrap();
    let err = scan_row(targets, vec![Value::I64(2)]).unwrap_err();

    assert!(err.is_invalid_record_count());
    assert_eq!(item, Item::new(1, "keep"));
}
