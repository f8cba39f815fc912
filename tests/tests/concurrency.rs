use sqlrecord::{FieldMapper, Mapper, Record};
use std::{
    sync::{Arc, Barrier},
    thread,
};
use tests::{assert_eq, fixtures::User};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn mapper_is_send_and_sync() {
    assert_send_sync::<Mapper>();
}

#[test]
fn mapper_is_shareable_across_threads() {
    let mapper = Mapper::new::<User>();
    let handles: Vec<_> = (0..8)
        .map(|id| {
            let mapper = mapper.clone();
            thread::spawn(move || {
                let user = User {
                    id,
                    ..Default::default()
                };
                mapper.values_for_tag("pk", &user).unwrap()
            })
        })
        .collect();

    for (id, handle) in handles.into_iter().enumerate() {
        let values = handle.join().unwrap();
        assert_eq!(values[0], sqlrecord::Value::I64(id as i64));
    }
}

#[test]
fn concurrent_first_use_builds_one_descriptor() {
    #[derive(Record)]
    struct Fresh {
        some_field: i32,
    }

    const THREADS: usize = 16;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                Mapper::new::<Fresh>().with_field_mapper(FieldMapper::kebab_case())
            })
        })
        .collect();

    let mappers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for mapper in &mappers {
        assert!(std::ptr::eq(mapper.descriptor(), mappers[0].descriptor()));
        assert_eq!(mapper.columns(), ["some-field"]);
    }
}
