//! # Payload Value Object
//!
//! 整形済みJSONとそのバイト長

/// アップロードするJSONペイロード
///
/// 生成後は変更されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    body: String,
    byte_len: usize,
}

impl Payload {
    /// 整形済みJSON文字列からペイロードを作成
    pub fn new(body: String) -> Self {
        let byte_len = body.len();
        Self { body, byte_len }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// UTF-8でのバイト長
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub fn into_body(self) -> String {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_len_counts_utf8_bytes() {
        let payload = Payload::new(r#"{"name":"日本"}"#.to_string());
        assert_eq!(payload.byte_len(), 17);
        assert_eq!(payload.body().chars().count(), 13);
    }
}
