//! 版本号解析单元测试
//!
//! 覆盖:
//! - 字段提取与前导零处理
//! - 语法错误
//! - 字段长度上限及检查顺序
//! - 渠道分类谓词

use unity_version::{ReleaseChannel, VersionError, VersionField, VersionIdentifier};

// ============================================================
// 1. 合法输入
// ============================================================

#[test]
fn test_parse_all_fields() {
    let test_cases = [
        ("2022.1.0f1", (2022, 1, 0, Some('f'), Some(1))),
        ("2021.3.0b15", (2021, 3, 0, Some('b'), Some(15))),
        ("2023.2.0a999", (2023, 2, 0, Some('a'), Some(999))),
        ("5.6.7", (5, 6, 7, None, None)),
        ("9999.99.99f999", (9999, 99, 99, Some('f'), Some(999))),
        ("0.0.0", (0, 0, 0, None, None)),
    ];

    for (input, (major, minor, patch, channel, build)) in test_cases {
        let version = VersionIdentifier::parse(input).unwrap();
        assert_eq!(
            (
                version.major(),
                version.minor(),
                version.patch(),
                version.channel(),
                version.build()
            ),
            (major, minor, patch, channel, build),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_leading_zeros_within_limits() {
    let version = VersionIdentifier::parse("0009.09.09f009").unwrap();

    assert_eq!(version.major(), 9);
    assert_eq!(version.minor(), 9);
    assert_eq!(version.patch(), 9);
    assert_eq!(version.build(), Some(9));
}

#[test]
fn test_prefix_match_ignores_trailing_text() {
    let version = VersionIdentifier::parse("2022.3.5f1 (Apple silicon)").unwrap();
    assert_eq!(version.to_string(), "2022.3.5f1");
}

// ============================================================
// 2. 语法错误
// ============================================================

#[test]
fn test_missing_groups_are_invalid_syntax() {
    for input in ["2022", "2022.1", "2022..1", "2022.1.f1", "x2022.1.0", " 2022.1.0"] {
        let result = VersionIdentifier::parse(input);
        assert_eq!(
            result,
            Err(VersionError::InvalidSyntax {
                input: input.to_string()
            }),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_channel_requires_build() {
    let result = VersionIdentifier::parse("2022.1.0b");
    assert!(matches!(result, Err(VersionError::InvalidSyntax { .. })));
}

// ============================================================
// 3. 长度上限
// ============================================================

#[test]
fn test_each_field_length_limit() {
    let test_cases = [
        ("20222.1.0", VersionField::Major, 4, 5),
        ("2022.100.0", VersionField::Minor, 2, 3),
        ("2022.1.100", VersionField::Patch, 2, 3),
        ("2022.1.0f1000", VersionField::Build, 3, 4),
    ];

    for (input, field, max, actual) in test_cases {
        let result = VersionIdentifier::parse(input);
        assert_eq!(
            result,
            Err(VersionError::MismatchingLength {
                input: input.to_string(),
                field,
                max,
                actual,
            }),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_first_offending_field_wins() {
    let result = VersionIdentifier::parse("123456.789.123f4567");

    match result {
        Err(VersionError::MismatchingLength { field, actual, .. }) => {
            assert_eq!(field, VersionField::Major);
            assert_eq!(actual, 6);
        }
        other => panic!("expected MismatchingLength, got {:?}", other),
    }
}

// ============================================================
// 4. 渠道分类
// ============================================================

#[test]
fn test_channel_predicates() {
    let test_cases = [
        ("2022.1.0f1", [true, false, false, false], ReleaseChannel::Lts),
        ("2022.1.0", [false, true, false, false], ReleaseChannel::Stable),
        ("2022.1.0b1", [false, false, true, false], ReleaseChannel::Beta),
        ("2022.1.0a1", [false, false, false, true], ReleaseChannel::Alpha),
        ("2022.1.0c1", [false, false, false, false], ReleaseChannel::Unknown('c')),
        ("2022.1.0F1", [false, false, false, false], ReleaseChannel::Unknown('F')),
    ];

    for (input, expected, channel) in test_cases {
        let version = VersionIdentifier::parse(input).unwrap();
        let predicates = [
            version.is_lts(),
            version.is_stable(),
            version.is_beta(),
            version.is_alpha(),
        ];

        assert_eq!(predicates, expected, "Failed for input: {}", input);
        assert_eq!(version.release_channel(), channel);
    }
}
