//! # Option Normalizer
//!
//! フラグの表記ゆれを正規名に寄せる

use crate::domain::entities::options::OptionName;

/// フラグトークン（先頭のダッシュ除去済み）を正規名に変換
///
/// 大文字小文字は区別しない。認識できないフラグは `None`
pub fn normalize_option_name(raw: &str) -> Option<OptionName> {
    let name = match raw.to_ascii_lowercase().as_str() {
        "b" | "bucket" => OptionName::Bucket,
        "d" | "dest" | "destination" => OptionName::Destination,
        "i" | "input" => OptionName::Input,
        "data" => OptionName::Data,
        "stdin" => OptionName::Stdin,
        "p" | "project" => OptionName::Project,
        "credentials" => OptionName::Credentials,
        "cache-control" | "cachecontrol" => OptionName::CacheControl,
        "compact" => OptionName::Compact,
        "dry-run" | "dryrun" => OptionName::DryRun,
        "h" | "help" => OptionName::Help,
        "config" => OptionName::Config,
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_aliases() {
        assert_eq!(normalize_option_name("b"), Some(OptionName::Bucket));
        assert_eq!(normalize_option_name("d"), Some(OptionName::Destination));
        assert_eq!(normalize_option_name("dest"), Some(OptionName::Destination));
        assert_eq!(normalize_option_name("i"), Some(OptionName::Input));
        assert_eq!(normalize_option_name("p"), Some(OptionName::Project));
        assert_eq!(normalize_option_name("h"), Some(OptionName::Help));
    }

    #[test]
    fn test_hyphenated_to_camel() {
        assert_eq!(
            normalize_option_name("cache-control"),
            Some(OptionName::CacheControl)
        );
        assert_eq!(normalize_option_name("dry-run"), Some(OptionName::DryRun));
        assert_eq!(normalize_option_name("dryRun"), Some(OptionName::DryRun));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize_option_name("BUCKET"), Some(OptionName::Bucket));
        assert_eq!(normalize_option_name("Stdin"), Some(OptionName::Stdin));
        assert_eq!(normalize_option_name("B"), Some(OptionName::Bucket));
    }

    #[test]
    fn test_unknown_flags() {
        assert_eq!(normalize_option_name("verbose"), None);
        assert_eq!(normalize_option_name(""), None);
        assert_eq!(normalize_option_name("c"), None);
    }
}
