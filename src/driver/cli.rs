//! CLI Argument Parsing
//!
//! CLIの引数解析。未知のフラグはエラーにせず読み飛ばす

use clap::{Arg, ArgAction, Command};
use log::debug;

use crate::domain::entities::options::{OptionMap, OptionValue};
use crate::domain::services::option_normalizer::normalize_option_name;

/// コマンドライン引数（プログラム名を除く）をオプションマップに変換
///
/// - `-` で始まらないトークンは読み飛ばす
/// - `--key=value` は最初の `=` で分割
/// - 値が無い場合は次のトークンを値とする。次が無いかフラグなら `Flag`
/// - 同じキーは後勝ち
pub fn parse_options<I, S>(tokens: I) -> OptionMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<String> = tokens
        .into_iter()
        .map(|token| token.as_ref().to_string())
        .collect();

    let mut options = OptionMap::new();
    let mut index = 0;

    while index < tokens.len() {
        let token = &tokens[index];
        index += 1;

        if !token.starts_with('-') {
            continue;
        }

        let body = token.trim_start_matches('-');
        let (key, inline_value) = match body.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (body, None),
        };

        let Some(name) = normalize_option_name(key) else {
            debug!("Ignoring unknown option: {}", token);
            continue;
        };

        let value = match inline_value {
            Some(value) => OptionValue::Text(value.to_string()),
            None => match tokens.get(index) {
                Some(next) if !next.starts_with('-') => {
                    index += 1;
                    OptionValue::Text(next.clone())
                }
                _ => OptionValue::Flag,
            },
        };

        options.insert(name, value);
    }

    options
}

/// ヘルプ表示用のコマンド定義
pub fn command() -> Command {
    Command::new("gcs-json-upload")
        .about("Validate a JSON document and upload it to a Google Cloud Storage bucket")
        .arg(
            Arg::new("bucket")
                .short('b')
                .long("bucket")
                .value_name("NAME")
                .help("Target bucket (required)"),
        )
        .arg(
            Arg::new("destination")
                .short('d')
                .long("destination")
                .visible_alias("dest")
                .value_name("PATH")
                .help("Object path in the bucket [default: input file name or document-<timestamp>.json]"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Read JSON from a file"),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .value_name("JSON")
                .help("Inline JSON string"),
        )
        .arg(
            Arg::new("stdin")
                .long("stdin")
                .action(ArgAction::SetTrue)
                .help("Read JSON from stdin (implied when stdin is piped)"),
        )
        .arg(
            Arg::new("project")
                .short('p')
                .long("project")
                .value_name("ID")
                .help("Google Cloud project id [env: GOOGLE_CLOUD_PROJECT]"),
        )
        .arg(
            Arg::new("credentials")
                .long("credentials")
                .value_name("FILE")
                .help("Service account or authorized user key file [default: Application Default Credentials]"),
        )
        .arg(
            Arg::new("cache-control")
                .long("cache-control")
                .value_name("VALUE")
                .help("Cache-Control metadata for the uploaded object"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .action(ArgAction::SetTrue)
                .help("Upload minified JSON instead of 2-space indentation"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Validate and report the target without uploading"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("JSON file with default settings"),
        )
        .after_help(
            "Examples:\n  gcs-json-upload -b my-bucket -i report.json\n  cat doc.json | gcs-json-upload --bucket my-bucket --dest docs/doc.json --compact",
        )
}

/// ヘルプテキスト
pub fn usage() -> String {
    command().render_help().to_string()
}
