use livespec_blocks::{END_MARKER, START_MARKER, upsert_section, wrap_section};
use proptest::prelude::*;

// Text that cannot contain either marker.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 #\n\t.,_-]{0,64}"
}

proptest! {
    #[test]
    fn test_replace_preserves_outside_bytes(
        head in plain_text(),
        old in plain_text(),
        tail in plain_text(),
        new_body in plain_text(),
    ) {
        let content = format!("{head}{START_MARKER}{old}{END_MARKER}{tail}");
        let section = wrap_section(&new_body);

        let result = upsert_section(&content, &section).unwrap();

        prop_assert!(result.starts_with(&head));
        prop_assert!(result.ends_with(&tail));
        prop_assert_eq!(result.len(), head.len() + section.len() + tail.len());
        prop_assert_eq!(&result[head.len()..head.len() + section.len()], section.as_str());
    }

    #[test]
    fn test_prepend_preserves_original(original in plain_text(), body in plain_text()) {
        let section = wrap_section(&body);

        let result = upsert_section(&original, &section).unwrap();

        prop_assert!(result.starts_with(&section));
        prop_assert!(result.ends_with(&original));
        prop_assert_eq!(result.matches(START_MARKER).count(), 1);
    }

    #[test]
    fn test_upsert_converges(original in plain_text(), body in plain_text()) {
        let section = wrap_section(&body);

        let once = upsert_section(&original, &section).unwrap();
        let twice = upsert_section(&once, &section).unwrap();

        prop_assert_eq!(once, twice);
    }
}
