/// Declares a database struct holding named sled trees and the store config.
#[macro_export]
macro_rules! define_sled_database {
    (
        $(#[$meta:meta])*
        pub struct $db_name:ident {
            $($field:ident: $tree_name:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $db_name {
            $(
                $field: ::sled::Tree,
            )*
            config: $crate::SledDbConfig,
        }

        impl $db_name {
            pub fn new(
                db: &::sled::Db,
                config: $crate::SledDbConfig,
            ) -> ::ferry_db_types::DbResult<Self> {
                Ok(Self {
                    $(
                        $field: db.open_tree($tree_name).map_err($crate::utils::to_db_error)?,
                    )*
                    config,
                })
            }
        }
    };
}

/// Runs a generic test suite from `ferry-db-tests` against a fresh temporary
/// sled instance per test.
#[macro_export]
macro_rules! sled_db_test_setup {
    ($db_type:ty, $test_macro:ident) => {
        fn setup_db() -> $db_type {
            let db = ::sled::Config::new().temporary(true).open().unwrap();
            let config = $crate::SledDbConfig::test();
            <$db_type>::new(&db, config).unwrap()
        }

        $test_macro!(setup_db());
    };
}
