use sqlrecord::{Mapper, Record, Value};
use tests::{
    assert_eq,
    fixtures::{Item, User},
};

#[test]
fn values_snapshot_the_record() {
    let mapper = Mapper::new::<User>();
    let user = User {
        id: 1,
        name: "erin".into(),
        email: String::new(),
        status: 4,
        session: "not mapped".into(),
    };

    assert_eq!(
        mapper.values(&user).unwrap(),
        [
            Value::I64(1),
            Value::from("erin"),
            Value::from(""),
            Value::I64(4),
        ]
    );
    assert_eq!(
        mapper.values_for_tag("pk", &user).unwrap(),
        [Value::I64(1), Value::I64(4)]
    );
}

#[test]
fn values_degrade_to_none() {
    let mapper = Mapper::new::<User>();

    assert!(mapper.values(&Item::default()).is_none());
    assert!(mapper.values_for_tag("nope", &User::default()).is_none());
}

#[test]
fn values_of_every_primitive() {
    #[derive(Record)]
    struct Everything {
        flag: bool,
        small: i8,
        unsigned: u64,
        ratio: f32,
        precise: f64,
        text: String,
        blob: Vec<u8>,
        maybe: Option<i16>,
    }

    let record = Everything {
        flag: true,
        small: -3,
        unsigned: 9,
        ratio: 0.5,
        precise: 1.25,
        text: "t".into(),
        blob: vec![1, 2],
        maybe: None,
    };

    assert_eq!(
        Mapper::of(&record).values(&record).unwrap(),
        [
            Value::Bool(true),
            Value::I64(-3),
            Value::U64(9),
            Value::F64(0.5),
            Value::F64(1.25),
            Value::String("t".into()),
            Value::Bytes(vec![1, 2]),
            Value::Null,
        ]
    );
}
