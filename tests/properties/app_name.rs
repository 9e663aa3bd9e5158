//! Property tests for app name validation.

use proptest::prelude::*;

use appdeploy::{AppName, MAX_APP_NAME_LEN};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: names made of allowed characters within the limit are accepted.
    #[test]
    fn valid_names_accepted(name in "[a-z0-9-]{1,30}") {
        let app = AppName::new(name.clone()).unwrap();
        prop_assert_eq!(app.as_str(), name.as_str());
    }

    /// PROPERTY: anything longer than the limit is rejected.
    #[test]
    fn long_names_rejected(name in "[a-z0-9-]{31,60}") {
        prop_assert!(name.len() > MAX_APP_NAME_LEN);
        prop_assert!(AppName::new(name).is_err());
    }

    /// PROPERTY: validation never panics.
    #[test]
    fn validation_never_panics(name in any::<String>()) {
        let _ = AppName::new(name);
    }
}
