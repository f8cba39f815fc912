/// Builds a statement and compares its SQL text and parameters.
#[macro_export]
macro_rules! assert_stmt {
    ($builder:expr, $sql:expr, [ $( $param:expr ),* $(,)? ]) => {{
        let (sql, params) = $builder.build();
        let expect: Vec<sqlrecord::Value> = vec![ $( sqlrecord::Value::from($param) ),* ];
        $crate::assert_eq!(sql, $sql);
        $crate::assert_eq!(params, expect);
    }};
}

/// Casts each record to `&dyn Any` for the batch insert operations.
#[macro_export]
macro_rules! records {
    ( $( $record:expr ),* $(,)? ) => {
        [ $( &$record as &dyn std::any::Any ),* ]
    };
}
