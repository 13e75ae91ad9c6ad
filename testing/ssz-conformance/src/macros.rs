/// Assert that a value's `HashTreeRoot` equals the `TreeHash` root of its reference mirror.
#[macro_export]
macro_rules! assert_root_matches {
    ($value:expr, $mirror:expr) => {{
        let actual = tessera_merkle::HashTreeRoot::hash_tree_root(&$value)
            .expect("value should be fully populated");
        let expected = tree_hash::TreeHash::tree_hash_root(&$mirror);
        assert_eq!(
            actual,
            expected,
            "hash tree root mismatch for {}",
            stringify!($value)
        );
    }};
}
