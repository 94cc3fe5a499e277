//! # Resolve Input Use Case
//!
//! JSONテキストの入力元を決定して読み込むユースケース

use anyhow::Result;
use log::info;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::options::{OptionMap, OptionName};
use crate::domain::errors::UploadError;
use crate::domain::repositories::input_repository::InputRepository;

/// 入力解決ユースケース
///
/// 優先順位:
/// 1. `--data` のインライン文字列
/// 2. `--input` のファイル
/// 3. `--stdin`、または標準入力が端末でない場合の標準入力
pub struct ResolveInputUseCase<R: InputRepository> {
    input_repository: Arc<R>,
}

impl<R: InputRepository> ResolveInputUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `input_repository` - 入力リポジトリ
    pub fn new(input_repository: Arc<R>) -> Self {
        Self { input_repository }
    }

    /// 生のJSONテキストを取得
    ///
    /// # Arguments
    ///
    /// * `options` - パース済みオプション
    /// * `stdin_timeout` - 標準入力の読み取りタイムアウト
    ///
    /// # Errors
    ///
    /// - ファイルが読めない場合は `UploadError::InputFile`
    /// - 標準入力が空の場合は `UploadError::EmptyInput`
    /// - 入力元が無い場合は `UploadError::NoInput`
    pub async fn execute(
        &self,
        options: &OptionMap,
        stdin_timeout: Option<Duration>,
    ) -> Result<String> {
        if let Some(data) = options.text(OptionName::Data) {
            info!("Using inline --data ({} bytes)", data.len());
            return Ok(data.to_string());
        }

        if let Some(path) = options.text(OptionName::Input) {
            info!("Reading input file: {}", path);
            return self.input_repository.read_file(path).await;
        }

        if options.is_set(OptionName::Stdin) || !self.input_repository.stdin_is_terminal() {
            info!("Reading JSON from stdin");
            let text = self.input_repository.read_stdin(stdin_timeout).await?;
            if text.is_empty() {
                return Err(UploadError::EmptyInput.into());
            }
            return Ok(text);
        }

        Err(UploadError::NoInput.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::domain::entities::options::OptionValue;

    struct MockInputRepository {
        file_content: Option<String>,
        stdin_content: String,
        is_terminal: bool,
        stdin_reads: AtomicUsize,
    }

    impl MockInputRepository {
        fn new(is_terminal: bool) -> Self {
            Self {
                file_content: None,
                stdin_content: String::new(),
                is_terminal,
                stdin_reads: AtomicUsize::new(0),
            }
        }

        fn with_file(mut self, content: &str) -> Self {
            self.file_content = Some(content.to_string());
            self
        }

        fn with_stdin(mut self, content: &str) -> Self {
            self.stdin_content = content.to_string();
            self
        }
    }

    #[async_trait]
    impl InputRepository for MockInputRepository {
        async fn read_file(&self, path: &str) -> Result<String> {
            match &self.file_content {
                Some(content) => Ok(content.clone()),
                None => Err(UploadError::InputFile {
                    path: path.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                }
                .into()),
            }
        }

        async fn read_stdin(&self, _timeout: Option<Duration>) -> Result<String> {
            self.stdin_reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.stdin_content.clone())
        }

        fn stdin_is_terminal(&self) -> bool {
            self.is_terminal
        }
    }

    fn options(pairs: &[(OptionName, OptionValue)]) -> OptionMap {
        let mut map = OptionMap::new();
        for (name, value) in pairs {
            map.insert(*name, value.clone());
        }
        map
    }

    fn text(value: &str) -> OptionValue {
        OptionValue::Text(value.to_string())
    }

    #[tokio::test]
    async fn test_inline_data_returned_verbatim() {
        let repo = Arc::new(MockInputRepository::new(true));
        let use_case = ResolveInputUseCase::new(repo);

        let result = use_case
            .execute(&options(&[(OptionName::Data, text(r#"{"a":1}"#))]), None)
            .await
            .unwrap();

        assert_eq!(result, r#"{"a":1}"#);
    }

    #[tokio::test]
    async fn test_data_takes_precedence_over_input_and_stdin() {
        let repo = Arc::new(
            MockInputRepository::new(false)
                .with_file("[1]")
                .with_stdin("[2]"),
        );
        let use_case = ResolveInputUseCase::new(repo.clone());

        let result = use_case
            .execute(
                &options(&[
                    (OptionName::Data, text("[0]")),
                    (OptionName::Input, text("file.json")),
                    (OptionName::Stdin, OptionValue::Flag),
                ]),
                None,
            )
            .await
            .unwrap();

        assert_eq!(result, "[0]");
        assert_eq!(repo.stdin_reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_input_file_before_stdin() {
        let repo = Arc::new(
            MockInputRepository::new(false)
                .with_file(r#"{"from":"file"}"#)
                .with_stdin(r#"{"from":"stdin"}"#),
        );
        let use_case = ResolveInputUseCase::new(repo.clone());

        let result = use_case
            .execute(&options(&[(OptionName::Input, text("doc.json"))]), None)
            .await
            .unwrap();

        assert_eq!(result, r#"{"from":"file"}"#);
        assert_eq!(repo.stdin_reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_input_file_propagates() {
        let repo = Arc::new(MockInputRepository::new(true));
        let use_case = ResolveInputUseCase::new(repo);

        let err = use_case
            .execute(&options(&[(OptionName::Input, text("missing.json"))]), None)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<UploadError>(),
            Some(UploadError::InputFile { .. })
        ));
    }

    #[tokio::test]
    async fn test_explicit_stdin_flag_on_terminal() {
        let repo = Arc::new(MockInputRepository::new(true).with_stdin("[true]"));
        let use_case = ResolveInputUseCase::new(repo);

        let result = use_case
            .execute(&options(&[(OptionName::Stdin, OptionValue::Flag)]), None)
            .await
            .unwrap();

        assert_eq!(result, "[true]");
    }

    #[tokio::test]
    async fn test_piped_stdin_used_implicitly() {
        let repo = Arc::new(MockInputRepository::new(false).with_stdin(r#"{"piped":1}"#));
        let use_case = ResolveInputUseCase::new(repo);

        let result = use_case.execute(&OptionMap::new(), None).await.unwrap();

        assert_eq!(result, r#"{"piped":1}"#);
    }

    #[tokio::test]
    async fn test_empty_stdin() {
        let repo = Arc::new(MockInputRepository::new(false));
        let use_case = ResolveInputUseCase::new(repo);

        let err = use_case.execute(&OptionMap::new(), None).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<UploadError>(),
            Some(UploadError::EmptyInput)
        ));
    }

    #[tokio::test]
    async fn test_no_input_on_interactive_terminal() {
        let repo = Arc::new(MockInputRepository::new(true).with_stdin("[1]"));
        let use_case = ResolveInputUseCase::new(repo.clone());

        let err = use_case.execute(&OptionMap::new(), None).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<UploadError>(),
            Some(UploadError::NoInput)
        ));
        assert!(err.to_string().contains("No input provided"));
        assert_eq!(repo.stdin_reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_data_value_falls_through() {
        let repo = Arc::new(MockInputRepository::new(true).with_file("[3]"));
        let use_case = ResolveInputUseCase::new(repo);

        let result = use_case
            .execute(
                &options(&[
                    (OptionName::Data, text("")),
                    (OptionName::Input, text("doc.json")),
                ]),
                None,
            )
            .await
            .unwrap();

        assert_eq!(result, "[3]");
    }
}
