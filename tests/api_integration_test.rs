//! 上流APIへの疎通テスト
//!
//! ネットワークを使うため、WANTED_WATCH_LIVE=1 のときのみ実行する

use wanted_watch::api::ApiClient;
use wanted_watch::config::Config;

fn live_enabled() -> bool {
    matches!(std::env::var("WANTED_WATCH_LIVE"), Ok(v) if v == "1")
}

#[tokio::test]
async fn list_integration() {
    if !live_enabled() {
        eprintln!("WANTED_WATCH_LIVE not set; skipping integration test");
        return;
    }

    let client = ApiClient::new(&Config::default()).expect("クライアント生成失敗");
    let result = client.fetch_list(1).await.expect("リスト取得失敗");

    assert!(result.total > 0);
    assert!(!result.items.is_empty());
    for record in &result.items {
        assert!(!record.uid.is_empty());
    }
}

#[tokio::test]
async fn search_fanout_integration() {
    if !live_enabled() {
        eprintln!("WANTED_WATCH_LIVE not set; skipping integration test");
        return;
    }

    let client = ApiClient::new(&Config::default()).expect("クライアント生成失敗");
    let result = client.search("white", 1).await.expect("検索失敗");

    // マージ後はuidが一意
    let mut uids: Vec<&str> = result.items.iter().map(|r| r.uid.as_str()).collect();
    let before = uids.len();
    uids.sort_unstable();
    uids.dedup();
    assert_eq!(uids.len(), before);
    assert_eq!(result.total as usize, before);
}
