//! 契约测试: 版本新旧排序
//!
//! 验证比较键在渠道、数值、构建号三个层面的排序契约

use std::cmp::Ordering;
use unity_version::VersionIdentifier;

/// 测试辅助: 解析合法版本
fn version(input: &str) -> VersionIdentifier {
    VersionIdentifier::parse(input).expect("测试输入应为合法版本")
}

#[test]
fn test_channel_breaks_tie_on_same_patch() {
    let lts = version("2022.2.1f1");
    let stable = version("2022.2.1");
    let beta = version("2022.2.1b1");
    let alpha = version("2022.2.1a1");

    assert!(lts.comparison_key() > stable.comparison_key());
    assert!(stable.comparison_key() > beta.comparison_key());
    assert!(beta.comparison_key() > alpha.comparison_key());
}

#[test]
fn test_major_dominates_minor_and_patch() {
    assert!(version("2022.1.0").comparison_key() > version("2021.9.9").comparison_key());
}

#[test]
fn test_build_breaks_tie_within_channel() {
    assert!(version("2021.1.0f1").comparison_key() > version("2021.1.0f0").comparison_key());
}

#[test]
fn test_patch_dominates_channel() {
    // 更高补丁级别的 alpha 仍比低补丁级别的 LTS 新
    assert!(version("2021.3.1a1") > version("2021.3.0f9"));
}

#[test]
fn test_unknown_channel_ranks_below_alpha() {
    assert!(version("2020.1.0p3") < version("2020.1.0a1"));
    assert!(version("2020.1.1p3") > version("2020.1.0f1"));
}

#[test]
fn test_sorting_a_release_history() {
    let mut versions: Vec<_> = [
        "2021.3.0f1",
        "2022.1.0a1",
        "2021.3.0b15",
        "2022.1.0b1",
        "2021.3.1f1",
        "2021.3.0",
        "2022.1.0f1",
        "2021.3.0b9",
    ]
    .iter()
    .map(|input| version(input))
    .collect();

    versions.sort();

    let rendered: Vec<_> = versions.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "2021.3.0b9",
            "2021.3.0b15",
            "2021.3.0",
            "2021.3.0f1",
            "2021.3.1f1",
            "2022.1.0a1",
            "2022.1.0b1",
            "2022.1.0f1",
        ]
    );
}

#[test]
fn test_compare_is_antisymmetric() {
    let pairs = [
        ("2022.2.1f1", "2022.2.1"),
        ("2022.1.0", "2021.9.9"),
        ("2021.1.0f1", "2021.1.0f0"),
        ("2020.1.0x1", "2020.1.0p1"),
    ];

    for (newer, older) in pairs {
        let (newer, older) = (version(newer), version(older));
        assert_eq!(newer.compare(&older), Ordering::Greater, "{} vs {}", newer, older);
        assert_eq!(older.compare(&newer), Ordering::Less, "{} vs {}", older, newer);
    }
}
