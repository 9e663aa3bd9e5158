//! Property tests for `User:` line parsing.

use proptest::prelude::*;

use appdeploy::parse_user_id;

fn token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._@+-]{1,40}").unwrap()
}

/// Lines that can never carry the label
fn noise_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z ]{0,30}: [A-Za-z0-9:/._-]{0,30}")
        .unwrap()
        .prop_filter("must not look like a User: line", |l| {
            !l.starts_with("User:")
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn parse_never_panics(input in any::<String>()) {
        let _ = parse_user_id(&input);
    }

    /// PROPERTY: the token after `User:` is found among surrounding noise.
    #[test]
    fn finds_user_among_noise(
        user in token(),
        before in proptest::collection::vec(noise_line(), 0..5),
        after in proptest::collection::vec(noise_line(), 0..5),
    ) {
        let mut lines = before;
        lines.push(format!("User: {}", user));
        lines.extend(after);

        let id = parse_user_id(&lines.join("\n"));
        prop_assert_eq!(id.as_str(), user.as_str());
    }

    /// PROPERTY: without a `User:` line the identifier is empty.
    #[test]
    fn no_label_gives_empty(lines in proptest::collection::vec(noise_line(), 0..8)) {
        prop_assert!(parse_user_id(&lines.join("\n")).is_empty());
    }

    /// PROPERTY: only the first `User:` line counts.
    #[test]
    fn first_user_line_wins(first in token(), second in token()) {
        let text = format!("User: {}\nUser: {}\n", first, second);
        let id = parse_user_id(&text);
        prop_assert_eq!(id.as_str(), first.as_str());
    }

    /// PROPERTY: an indented `User:` entry is never taken as the identity.
    #[test]
    fn indented_user_line_ignored(user in token(), indent in "[ \t]{1,8}") {
        let text = format!("Current configuration:\n{}User: {}\n", indent, user);
        prop_assert!(parse_user_id(&text).is_empty());
    }
}
