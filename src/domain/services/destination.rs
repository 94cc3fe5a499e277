//! # Destination Resolver
//!
//! オブジェクトパスの決定

use chrono::{DateTime, SecondsFormat, Utc};
use std::path::Path;

/// アップロード先のオブジェクトパスを決定
///
/// 優先順位:
/// 1. 明示的な `destination`
/// 2. 入力ファイルのベース名
/// 3. `document-<タイムスタンプ>.json`
pub fn resolve_destination(
    destination: Option<&str>,
    input: Option<&str>,
    now: DateTime<Utc>,
) -> String {
    if let Some(destination) = destination {
        return destination.to_string();
    }

    if let Some(name) = input
        .and_then(|path| Path::new(path).file_name())
        .map(|name| name.to_string_lossy().to_string())
    {
        return name;
    }

    default_object_name(now)
}

/// タイムスタンプから既定のオブジェクト名を生成
///
/// ISO8601 の `:` と `.` は `-` に置き換える
pub fn default_object_name(now: DateTime<Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("document-{}.json", stamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 25, 10, 30, 15).unwrap()
            + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn test_explicit_destination_wins() {
        let result = resolve_destination(Some("out/custom.json"), Some("data/in.json"), fixed_now());
        assert_eq!(result, "out/custom.json");
    }

    #[test]
    fn test_input_base_name() {
        let result = resolve_destination(None, Some("foo.json"), fixed_now());
        assert_eq!(result, "foo.json");

        let result = resolve_destination(None, Some("/var/data/nested/foo.json"), fixed_now());
        assert_eq!(result, "foo.json");

        let result = resolve_destination(None, Some("./relative/bar.json"), fixed_now());
        assert_eq!(result, "bar.json");
    }

    #[test]
    fn test_default_name_from_timestamp() {
        let result = resolve_destination(None, None, fixed_now());
        assert_eq!(result, "document-2024-12-25T10-30-15-123Z.json");
    }

    #[test]
    fn test_default_name_has_no_colons_or_periods_in_stamp() {
        let name = default_object_name(Utc::now());
        let stamp = name
            .strip_prefix("document-")
            .and_then(|s| s.strip_suffix(".json"))
            .unwrap();
        assert!(!stamp.contains(':'));
        assert!(!stamp.contains('.'));
        assert!(stamp.ends_with('Z'));
    }

    #[test]
    fn test_input_without_file_name_falls_back_to_default() {
        let result = resolve_destination(None, Some(".."), fixed_now());
        assert!(result.starts_with("document-"));
    }
}
