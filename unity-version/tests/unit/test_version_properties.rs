//! 版本号属性测试
//!
//! 随机生成合法版本号,验证解析、分类与排序的普遍性质

use proptest::prelude::*;
use std::cmp::Ordering;
use unity_version::VersionIdentifier;

/// 合法版本号的文本字段: (major, minor, patch, 可选的 (渠道, 构建号))
fn version_text() -> impl Strategy<Value = (String, String, String, Option<(char, String)>)> {
    (
        "[0-9]{1,4}",
        "[0-9]{1,2}",
        "[0-9]{1,2}",
        proptest::option::of((
            prop_oneof![Just('f'), Just('b'), Just('a'), Just('p'), Just('x')],
            "[0-9]{1,3}",
        )),
    )
}

fn render(major: &str, minor: &str, patch: &str, suffix: &Option<(char, String)>) -> String {
    match suffix {
        Some((channel, build)) => format!("{}.{}.{}{}{}", major, minor, patch, channel, build),
        None => format!("{}.{}.{}", major, minor, patch),
    }
}

proptest! {
    #[test]
    fn accessors_reproduce_input((major, minor, patch, suffix) in version_text()) {
        let input = render(&major, &minor, &patch, &suffix);
        let version = VersionIdentifier::parse(&input).unwrap();

        prop_assert_eq!(version.major(), major.parse::<u32>().unwrap());
        prop_assert_eq!(version.minor(), minor.parse::<u32>().unwrap());
        prop_assert_eq!(version.patch(), patch.parse::<u32>().unwrap());
        prop_assert_eq!(version.channel(), suffix.as_ref().map(|(c, _)| *c));
        prop_assert_eq!(
            version.build(),
            suffix.as_ref().map(|(_, b)| b.parse::<u32>().unwrap())
        );
    }

    #[test]
    fn channel_and_build_are_co_mandatory((major, minor, patch, suffix) in version_text()) {
        let version = VersionIdentifier::parse(&render(&major, &minor, &patch, &suffix)).unwrap();
        prop_assert_eq!(version.channel().is_some(), version.build().is_some());
    }

    #[test]
    fn at_most_one_channel_predicate((major, minor, patch, suffix) in version_text()) {
        let version = VersionIdentifier::parse(&render(&major, &minor, &patch, &suffix)).unwrap();
        let count = [
            version.is_lts(),
            version.is_stable(),
            version.is_beta(),
            version.is_alpha(),
        ]
        .iter()
        .filter(|flag| **flag)
        .count();

        prop_assert!(count <= 1);
    }

    #[test]
    fn canonical_form_parses_back((major, minor, patch, suffix) in version_text()) {
        let version = VersionIdentifier::parse(&render(&major, &minor, &patch, &suffix)).unwrap();
        let reparsed = VersionIdentifier::parse(&version.to_string()).unwrap();

        prop_assert_eq!(&reparsed, &version);
        prop_assert_eq!(reparsed.compare(&version), Ordering::Equal);
    }

    #[test]
    fn ordering_consistent_with_equality(
        (a_major, a_minor, a_patch, a_suffix) in version_text(),
        (b_major, b_minor, b_patch, b_suffix) in version_text(),
    ) {
        let a = VersionIdentifier::parse(&render(&a_major, &a_minor, &a_patch, &a_suffix)).unwrap();
        let b = VersionIdentifier::parse(&render(&b_major, &b_minor, &b_patch, &b_suffix)).unwrap();

        prop_assert_eq!(a.compare(&b) == Ordering::Equal, a == b);
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
    }

    #[test]
    fn accessors_are_idempotent((major, minor, patch, suffix) in version_text()) {
        let version = VersionIdentifier::parse(&render(&major, &minor, &patch, &suffix)).unwrap();

        prop_assert_eq!(version.comparison_key(), version.comparison_key());
        prop_assert_eq!(version.release_channel(), version.release_channel());
        prop_assert_eq!(version.is_stable(), version.is_stable());
    }
}
