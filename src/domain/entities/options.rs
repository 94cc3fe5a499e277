//! # Option Mapping
//!
//! 正規化済みオプション名 → 値 のマッピング

use std::collections::HashMap;
use std::fmt;

/// 正規化されたオプション名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionName {
    Bucket,
    Destination,
    Input,
    Data,
    Stdin,
    Project,
    Credentials,
    CacheControl,
    Compact,
    DryRun,
    Help,
    Config,
}

impl OptionName {
    /// 正規名（camelCase）を返す
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionName::Bucket => "bucket",
            OptionName::Destination => "destination",
            OptionName::Input => "input",
            OptionName::Data => "data",
            OptionName::Stdin => "stdin",
            OptionName::Project => "project",
            OptionName::Credentials => "credentials",
            OptionName::CacheControl => "cacheControl",
            OptionName::Compact => "compact",
            OptionName::DryRun => "dryRun",
            OptionName::Help => "help",
            OptionName::Config => "config",
        }
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// オプションの値
///
/// 値付きで渡された場合は `Text`、値なしのフラグは `Flag`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Text(String),
    Flag,
}

/// パース済みオプション
///
/// キーは一意。同じキーが複数回指定された場合は後勝ち
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap {
    values: HashMap<OptionName, OptionValue>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 値を設定（既存の値は上書き）
    pub fn insert(&mut self, name: OptionName, value: OptionValue) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: OptionName) -> Option<&OptionValue> {
        self.values.get(&name)
    }

    /// 空でないテキスト値を返す
    ///
    /// 値なしフラグや空文字列は未指定として扱う
    pub fn text(&self, name: OptionName) -> Option<&str> {
        match self.values.get(&name) {
            Some(OptionValue::Text(value)) if !value.is_empty() => Some(value.as_str()),
            _ => None,
        }
    }

    /// ブール型オプションが有効かどうか
    ///
    /// フラグ、または空でないテキスト値の場合に `true`
    pub fn is_set(&self, name: OptionName) -> bool {
        match self.values.get(&name) {
            Some(OptionValue::Flag) => true,
            Some(OptionValue::Text(value)) => !value.is_empty(),
            None => false,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
