//! ファンアウト検索の共通部品
//!
//! 検索は対象フィールドごとに1リクエストを発行し、結果をuidで
//! 重複排除してマージする。リクエスト発行はフロントエンドごと
//! （reqwest / web-sys fetch）だが、対象フィールドとマージ規則は
//! ここで固定する

use crate::types::WantedRecord;

/// 上流APIのベースURL
pub const API_BASE_URL: &str = "https://api.fbi.gov/wanted/v1";

/// リスト取得時のソート指定
pub const LIST_SORT: (&str, &str) = ("modified", "desc");

/// ファンアウト検索の対象フィールド
pub const SEARCH_FIELDS: &[&str] = &[
    "title",
    "subjects",
    "hair",
    "eyes",
    "race",
    "sex",
    "nationality",
    "place_of_birth",
];

/// フィールド別の検索結果をuidで重複排除してマージする
///
/// 複数フィールドに一致したレコードは1件にまとまる（先着優先）。
/// uid集合としての結果は到着順に依存しない
pub fn merge_by_uid(per_field: Vec<Vec<WantedRecord>>) -> Vec<WantedRecord> {
    let mut merged: Vec<WantedRecord> = Vec::new();
    for items in per_field {
        for record in items {
            if !merged.iter().any(|r| r.uid == record.uid) {
                merged.push(record);
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(uid: &str, title: &str) -> WantedRecord {
        WantedRecord {
            uid: uid.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_dedups_across_fields() {
        // titleとraceの両方に一致したレコードは1件になる
        let title_hits = vec![record("1", "John Doe"), record("2", "Jane Smith")];
        let race_hits = vec![record("1", "John Doe"), record("3", "Robert Johnson")];

        let merged = merge_by_uid(vec![title_hits, race_hits]);
        assert_eq!(merged.len(), 3);

        let uids: Vec<&str> = merged.iter().map(|r| r.uid.as_str()).collect();
        assert_eq!(uids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_merge_uid_set_is_order_independent() {
        let a = vec![record("1", "A")];
        let b = vec![record("2", "B")];

        let forward = merge_by_uid(vec![a.clone(), b.clone()]);
        let backward = merge_by_uid(vec![b, a]);

        let mut fw: Vec<&str> = forward.iter().map(|r| r.uid.as_str()).collect();
        let mut bw: Vec<&str> = backward.iter().map(|r| r.uid.as_str()).collect();
        fw.sort_unstable();
        bw.sort_unstable();
        assert_eq!(fw, bw);
    }

    #[test]
    fn test_merge_empty_input() {
        assert!(merge_by_uid(vec![]).is_empty());
        assert!(merge_by_uid(vec![vec![], vec![]]).is_empty());
    }

    #[test]
    fn test_merge_first_occurrence_wins() {
        let first = vec![record("1", "John Doe")];
        let second = vec![record("1", "John Doe (race match)")];

        let merged = merge_by_uid(vec![first, second]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].title, "John Doe");
    }

    #[test]
    fn test_search_fields_cover_spec() {
        assert_eq!(SEARCH_FIELDS.len(), 8);
        assert!(SEARCH_FIELDS.contains(&"title"));
        assert!(SEARCH_FIELDS.contains(&"place_of_birth"));
    }
}
