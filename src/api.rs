//! 上流API（FBI wanted/v1）クライアント
//!
//! 検索はフィールドごとに1リクエストを並行発行し、uidで重複排除して
//! マージする。フィールド単位の失敗はログに出して握りつぶし、
//! 全フィールドが失敗した場合のみエラーを返す

use crate::config::Config;
use crate::error::{Result, WantedWatchError};
use std::time::Duration;
use wanted_common::query::{merge_by_uid, LIST_SORT, SEARCH_FIELDS};
use wanted_common::types::{PageResult, WantedRecord};

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    /// リスト取得（更新日時の降順）
    pub async fn fetch_list(&self, page: u32) -> Result<PageResult> {
        let (sort_on, sort_order) = LIST_SORT;
        let response = self
            .client
            .get(format!("{}/list", self.base_url))
            .query(&[
                ("page", page.to_string().as_str()),
                ("sort_on", sort_on),
                ("sort_order", sort_order),
            ])
            .send()
            .await?
            .error_for_status()?;

        let result: PageResult = response.json().await?;
        Ok(result)
    }

    /// uid指定で1件取得（該当なしはOk(None)）
    pub async fn fetch_by_uid(&self, uid: &str) -> Result<Option<WantedRecord>> {
        let response = self
            .client
            .get(format!("{}/list", self.base_url))
            .query(&[("uid", uid)])
            .send()
            .await?
            .error_for_status()?;

        let result: PageResult = response.json().await?;
        Ok(result.items.into_iter().next())
    }

    /// ファンアウト検索
    ///
    /// 対象フィールドごとの結果をuidで重複排除してマージする。
    /// totalはマージ後の件数
    pub async fn search(&self, query: &str, page: u32) -> Result<PageResult> {
        let requests = SEARCH_FIELDS
            .iter()
            .map(|field| self.fetch_field(field, query, page));
        let settled = futures::future::join_all(requests).await;

        let mut per_field: Vec<Vec<WantedRecord>> = Vec::new();
        for (field, result) in SEARCH_FIELDS.iter().zip(settled) {
            match result {
                Ok(items) => per_field.push(items),
                // フィールド単位の失敗は非致命（結果から黙って除外）
                Err(e) => eprintln!("⚠ フィールド {} の検索に失敗: {}", field, e),
            }
        }

        if per_field.is_empty() {
            return Err(WantedWatchError::ApiCall(
                "全フィールドの検索リクエストが失敗しました".to_string(),
            ));
        }

        let items = merge_by_uid(per_field);
        Ok(PageResult {
            total: items.len() as u32,
            page,
            items,
        })
    }

    async fn fetch_field(&self, field: &str, query: &str, page: u32) -> Result<Vec<WantedRecord>> {
        let response = self
            .client
            .get(format!("{}/list", self.base_url))
            .query(&[(field, query), ("page", page.to_string().as_str())])
            .send()
            .await?
            .error_for_status()?;

        let result: PageResult = response.json().await?;
        Ok(result.items)
    }
}
