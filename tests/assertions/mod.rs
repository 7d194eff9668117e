#[macro_export]
macro_rules! assert_ok {
    ( $expression:expr ) => {
        match $expression {
            Ok(result) => result,
            Err(error) => {
                panic!(
                    "Operation '{}' should be successful but it failed with: {}",
                    stringify!($expression),
                    error
                );
            }
        }
    };
}

#[macro_export]
macro_rules! assert_code {
    ($store:expr, $expected:expr) => {
        let actual = $store.code();
        let expected: String = $expected;
        assert_eq!(
            actual, expected,
            "Rendered code mismatch, got:\n{}\nexpected:\n{}",
            actual, expected
        );
    };
}
