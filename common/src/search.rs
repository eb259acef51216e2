//! 検索・絞り込み述語
//!
//! フリーテキスト検索（大文字小文字を無視した部分一致）と
//! 構造化フィルタ（性別・人種・犯罪カテゴリ）。ランキングも
//! トークン化もあいまい一致もしない。順序は常に保存する

use crate::types::WantedRecord;
use serde::{Deserialize, Serialize};

/// 構造化フィルタ
///
/// 空文字/空リストのフィールドは「フィルタなし」を意味する
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    /// 性別（完全一致、大文字小文字無視）
    pub sex: String,
    /// 人種（部分一致、大文字小文字無視）
    pub race: String,
    /// 犯罪カテゴリ（レコードのsubjectsと交差すれば一致）
    pub subjects: Vec<String>,
}

impl Filters {
    /// いずれかのフィルタが有効か
    pub fn is_active(&self) -> bool {
        !self.sex.is_empty() || !self.race.is_empty() || !self.subjects.is_empty()
    }
}

/// Option文字列への部分一致（大文字小文字無視）
///
/// フィールドが欠落している場合は一致しない（エラーにもしない）
fn contains_ci(field: Option<&str>, term: &str) -> bool {
    field.is_some_and(|f| f.to_lowercase().contains(term))
}

/// フリーテキスト述語
///
/// クエリが title / subjects / race / hair / sex / eyes / nationality /
/// place_of_birth / details のいずれかに部分一致すればtrue。
/// 空白のみのクエリは全件一致
pub fn matches_query(record: &WantedRecord, query: &str) -> bool {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    record.title.to_lowercase().contains(&term)
        || record.subjects.iter().any(|s| s.to_lowercase().contains(&term))
        || contains_ci(record.race.as_deref(), &term)
        || contains_ci(record.hair.as_deref(), &term)
        || contains_ci(record.sex.as_deref(), &term)
        || contains_ci(record.eyes.as_deref(), &term)
        || contains_ci(record.nationality.as_deref(), &term)
        || contains_ci(record.place_of_birth.as_deref(), &term)
        || contains_ci(record.details.as_deref(), &term)
}

/// 構造化フィルタ述語
///
/// 有効なフィルタすべてを満たす場合のみtrue
pub fn matches_filters(record: &WantedRecord, filters: &Filters) -> bool {
    if !filters.sex.is_empty() {
        let matched = record
            .sex
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(&filters.sex));
        if !matched {
            return false;
        }
    }

    if !filters.race.is_empty() {
        if !contains_ci(record.race.as_deref(), &filters.race.to_lowercase()) {
            return false;
        }
    }

    if !filters.subjects.is_empty() {
        let intersects = record
            .subjects
            .iter()
            .any(|s| filters.subjects.iter().any(|f| f == s));
        if !intersects {
            return false;
        }
    }

    true
}

/// テキスト述語と構造化フィルタを合成して適用
///
/// 元の順序を保ったまま一致レコードのみを返す
pub fn apply_filters(records: &[WantedRecord], query: &str, filters: &Filters) -> Vec<WantedRecord> {
    records
        .iter()
        .filter(|r| matches_query(r, query) && matches_filters(r, filters))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(uid: &str, title: &str, subjects: &[&str]) -> WantedRecord {
        WantedRecord {
            uid: uid.to_string(),
            title: title.to_string(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    // =============================================
    // テキスト述語テスト
    // =============================================

    #[test]
    fn test_matches_query_empty_matches_all() {
        let r = record("1", "John Doe", &["Murder"]);
        assert!(matches_query(&r, ""));
        assert!(matches_query(&r, "   "));
    }

    #[test]
    fn test_matches_query_title_case_insensitive() {
        let r = record("1", "John Doe", &[]);
        assert!(matches_query(&r, "doe"));
        assert!(matches_query(&r, "DOE"));
        assert!(matches_query(&r, "ohn d"));
    }

    #[test]
    fn test_matches_query_subjects() {
        let r = record("1", "John Doe", &["Armed Robbery"]);
        assert!(matches_query(&r, "robbery"));
        assert!(!matches_query(&r, "fraud"));
    }

    #[test]
    fn test_matches_query_optional_fields() {
        let mut r = record("1", "X", &[]);
        r.hair = Some("Brown".to_string());
        r.place_of_birth = Some("New York, NY".to_string());
        r.details = Some("Last seen driving a blue sedan.".to_string());

        assert!(matches_query(&r, "brown"));
        assert!(matches_query(&r, "new york"));
        assert!(matches_query(&r, "sedan"));
    }

    #[test]
    fn test_matches_query_absent_field_never_matches() {
        // race等が欠落していてもエラーにならず、単に一致しない
        let r = record("1", "X", &[]);
        assert!(!matches_query(&r, "white"));
    }

    // =============================================
    // 構造化フィルタテスト
    // =============================================

    #[test]
    fn test_filters_inactive_by_default() {
        assert!(!Filters::default().is_active());
    }

    #[test]
    fn test_matches_filters_sex_exact() {
        let mut r = record("1", "X", &[]);
        r.sex = Some("Male".to_string());

        let filters = Filters {
            sex: "male".to_string(),
            ..Default::default()
        };
        assert!(matches_filters(&r, &filters));

        // 完全一致のみ（部分一致しない）
        let filters = Filters {
            sex: "ma".to_string(),
            ..Default::default()
        };
        assert!(!matches_filters(&r, &filters));
    }

    #[test]
    fn test_matches_filters_race_substring() {
        let mut r = record("1", "X", &[]);
        r.race = Some("White (Hispanic)".to_string());

        let filters = Filters {
            race: "hispanic".to_string(),
            ..Default::default()
        };
        assert!(matches_filters(&r, &filters));
    }

    #[test]
    fn test_matches_filters_subjects_intersection() {
        let r = record("1", "X", &["Murder", "Armed Robbery"]);

        let filters = Filters {
            subjects: vec!["Fraud".to_string(), "Murder".to_string()],
            ..Default::default()
        };
        assert!(matches_filters(&r, &filters));

        let filters = Filters {
            subjects: vec!["Fraud".to_string()],
            ..Default::default()
        };
        assert!(!matches_filters(&r, &filters));
    }

    #[test]
    fn test_matches_filters_absent_sex_fails_active_filter() {
        let r = record("1", "X", &[]);
        let filters = Filters {
            sex: "Male".to_string(),
            ..Default::default()
        };
        assert!(!matches_filters(&r, &filters));
    }

    // =============================================
    // 合成適用テスト
    // =============================================

    #[test]
    fn test_apply_filters_scenario() {
        let records = vec![
            record("1", "John Doe", &["Murder"]),
            record("2", "Jane Smith", &["Fraud"]),
        ];

        let filtered = apply_filters(&records, "murder", &Filters::default());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].uid, "1");
    }

    #[test]
    fn test_apply_filters_empty_query_no_filters_is_identity() {
        let records = vec![
            record("1", "A", &[]),
            record("2", "B", &[]),
            record("3", "C", &[]),
        ];

        let filtered = apply_filters(&records, "", &Filters::default());
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_apply_filters_preserves_order() {
        let records = vec![
            record("3", "Carl Doe", &[]),
            record("1", "Ann Doe", &[]),
            record("2", "Bob Doe", &[]),
        ];

        let filtered = apply_filters(&records, "doe", &Filters::default());
        let uids: Vec<&str> = filtered.iter().map(|r| r.uid.as_str()).collect();
        assert_eq!(uids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_apply_filters_text_and_structured_combined() {
        let mut a = record("1", "John Doe", &["Murder"]);
        a.sex = Some("Male".to_string());
        let mut b = record("2", "Johnny Roe", &["Murder"]);
        b.sex = Some("Female".to_string());

        let filters = Filters {
            sex: "Male".to_string(),
            ..Default::default()
        };
        let filtered = apply_filters(&[a, b], "john", &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].uid, "1");
    }
}
