//! Property tests for workspace path composition.

use proptest::prelude::*;

use appdeploy::{AppName, UserId, WorkspacePath};

fn user_id() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._@+-]{1,40}").unwrap()
}

fn app_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9-]{1,30}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: composition is plain concatenation around the fixed segments.
    #[test]
    fn compose_is_plain_concatenation(user in user_id(), app in app_name()) {
        let app = AppName::new(app.clone()).unwrap();
        let path = WorkspacePath::compose(&UserId::new(user.clone()), &app);

        prop_assert_eq!(
            path.as_str(),
            format!("/Workspace/Users/{}/databricks-apps-scratchpad/{}", user, app)
        );
    }

    /// PROPERTY: a non-empty user never yields an empty path segment.
    #[test]
    fn non_empty_user_has_no_empty_segment(user in user_id(), app in app_name()) {
        let app = AppName::new(app).unwrap();
        let path = WorkspacePath::compose(&UserId::new(user), &app);

        prop_assert!(!path.has_empty_segment());
        prop_assert!(!path.as_str().contains("//"));
    }

    /// PROPERTY: the app name is always the final segment.
    #[test]
    fn app_name_is_last_segment(user in user_id(), app in app_name()) {
        let app = AppName::new(app).unwrap();
        let path = WorkspacePath::compose(&UserId::new(user), &app);

        prop_assert_eq!(path.as_str().rsplit('/').next(), Some(app.as_str()));
    }

    /// PROPERTY: an empty user always produces the `//` artifact.
    #[test]
    fn empty_user_yields_double_slash(app in app_name()) {
        let app = AppName::new(app).unwrap();
        let path = WorkspacePath::compose(&UserId::default(), &app);

        prop_assert!(path.as_str().starts_with("/Workspace/Users//"));
        prop_assert!(path.has_empty_segment());
    }
}
