// Property tests
// Author: Gabriel Demetrios Lafis

use proptest::prelude::*;

use record_pipeline::{
    data::UserRecord,
    processing::{capitalize, has_space, RecordPipeline},
    CallStyle,
};

fn user_strategy() -> impl Strategy<Value = UserRecord> {
    ("[ a-zA-Z]{0,8}", "[a-zA-Z ]{1,16}").prop_map(|(tag, name)| UserRecord::new(tag, name))
}

proptest! {
    #[test]
    fn test_capitalize_is_idempotent(value in "[ -~]*") {
        let once = capitalize(value);
        let twice = capitalize(once.clone());

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_leading_space_only_is_rejected(rest in "[a-zA-Z]{0,12}") {
        let user = UserRecord::new(format!(" {}", rest), "Someone");

        prop_assert!(!has_space(&user));
    }

    #[test]
    fn test_tags_without_space_are_rejected(tag in "[a-zA-Z0-9_]{0,12}") {
        prop_assert!(!has_space(&UserRecord::new(tag, "Someone")));
    }

    #[test]
    fn test_inner_space_is_accepted(head in "[a-zA-Z]{1,6}", tail in "[ a-zA-Z]{0,6}") {
        let user = UserRecord::new(format!("{} {}", head, tail), "Someone");

        prop_assert!(has_space(&user));
    }

    #[test]
    fn test_output_preserves_input_order(users in prop::collection::vec(user_strategy(), 0..20)) {
        let expected: Vec<String> = users
            .iter()
            .filter(|user| has_space(user))
            .map(|user| user.real_name().to_uppercase())
            .collect();

        prop_assert_eq!(RecordPipeline::reference("order").process(&users), expected);
    }

    #[test]
    fn test_styles_agree(users in prop::collection::vec(user_strategy(), 0..10)) {
        let mut expected = Vec::new();
        CallStyle::NamedFunctions.run(&users, &mut expected).unwrap();

        for style in CallStyle::all() {
            let mut out = Vec::new();
            style.run(&users, &mut out).unwrap();
            prop_assert_eq!(&out, &expected);
        }
    }
}
