//! 指名手配レコードの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - WantedRecord: 上流API(/wanted/v1/list)の1件分のレコード
//! - ImageRef: レコードに添付される画像参照
//! - PageResult: リスト/検索エンドポイントのレスポンス

use serde::{Deserialize, Serialize};

/// レコード添付画像への参照（先頭がメイン画像）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRef {
    pub original: String,
    pub caption: Option<String>,
}

/// 指名手配レコード1件
///
/// 取得後は不変。上流のフィールド欠落でパースが失敗しないよう
/// 全フィールドにデフォルトを許容する
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WantedRecord {
    /// 安定識別子
    pub uid: String,

    pub title: String,

    pub images: Vec<ImageRef>,

    /// 犯罪カテゴリ
    pub subjects: Vec<String>,

    pub sex: Option<String>,
    pub race: Option<String>,
    pub hair: Option<String>,
    pub eyes: Option<String>,
    pub nationality: Option<String>,
    pub place_of_birth: Option<String>,
    pub age_range: Option<String>,
    pub height_min: Option<String>,
    pub weight: Option<String>,

    /// 使用されたことのある生年月日
    pub dates_of_birth_used: Vec<String>,

    pub warning_message: Option<String>,
    pub reward_text: Option<String>,

    /// 自由記述の詳細
    pub details: Option<String>,
}

impl WantedRecord {
    /// メイン画像URL（先頭画像）
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(|i| i.original.as_str())
    }
}

/// リスト/検索エンドポイントのレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageResult {
    pub items: Vec<WantedRecord>,
    pub total: u32,
    pub page: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wanted_record_default() {
        let record = WantedRecord::default();
        assert_eq!(record.uid, "");
        assert!(record.images.is_empty());
        assert!(record.sex.is_none());
    }

    #[test]
    fn test_wanted_record_deserialize() {
        let json = r#"{
            "uid": "abc123",
            "title": "John Doe",
            "images": [{"original": "https://example.com/a.jpg", "caption": "mugshot"}],
            "subjects": ["Murder", "Armed Robbery"],
            "sex": "Male",
            "race": "White",
            "place_of_birth": "New York, NY",
            "dates_of_birth_used": ["1983-05-15"],
            "warning_message": "ARMED AND EXTREMELY DANGEROUS"
        }"#;

        let record: WantedRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.uid, "abc123");
        assert_eq!(record.title, "John Doe");
        assert_eq!(record.subjects.len(), 2);
        assert_eq!(record.sex.as_deref(), Some("Male"));
        assert_eq!(record.place_of_birth.as_deref(), Some("New York, NY"));
        assert_eq!(record.primary_image(), Some("https://example.com/a.jpg"));
        assert!(record.details.is_none()); // デフォルト値
    }

    #[test]
    fn test_wanted_record_deserialize_missing_fields() {
        // 最小限のフィールドでもデシリアライズできることを確認
        let json = r#"{"uid": "minimal"}"#;

        let record: WantedRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.uid, "minimal");
        assert_eq!(record.title, ""); // デフォルト値
        assert!(record.subjects.is_empty());
        assert!(record.primary_image().is_none());
    }

    #[test]
    fn test_wanted_record_roundtrip() {
        let original = WantedRecord {
            uid: "roundtrip".to_string(),
            title: "Jane Smith".to_string(),
            subjects: vec!["Fraud".to_string()],
            sex: Some("Female".to_string()),
            race: Some("Hispanic".to_string()),
            reward_text: Some("$25,000 reward offered".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&original).expect("シリアライズ失敗");
        let restored: WantedRecord = serde_json::from_str(&json).expect("デシリアライズ失敗");

        assert_eq!(original, restored);
    }

    #[test]
    fn test_page_result_deserialize() {
        let json = r#"{
            "total": 980,
            "page": 2,
            "items": [{"uid": "a"}, {"uid": "b"}]
        }"#;

        let result: PageResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.total, 980);
        assert_eq!(result.page, 2);
        assert_eq!(result.items.len(), 2);
    }

    #[test]
    fn test_page_result_deserialize_empty() {
        let result: PageResult = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert_eq!(result.total, 0);
        assert!(result.items.is_empty());
    }
}
