//! 上流API（FBI wanted/v1）連携
//!
//! - リスト取得: /list?page=&sort_on=modified&sort_order=desc
//! - uid指定取得: /list?uid=
//! - ファンアウト検索: 対象フィールドごとに /list?<field>=<query> を
//!   並行発行し、uidで重複排除してマージする

use wanted_common::query::{merge_by_uid, API_BASE_URL, LIST_SORT, SEARCH_FIELDS};
use wanted_common::types::{PageResult, WantedRecord};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn encode(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

fn list_url(page: u32) -> String {
    let (sort_on, sort_order) = LIST_SORT;
    format!(
        "{}/list?page={}&sort_on={}&sort_order={}",
        API_BASE_URL, page, sort_on, sort_order
    )
}

fn uid_url(encoded_uid: &str) -> String {
    format!("{}/list?uid={}", API_BASE_URL, encoded_uid)
}

fn field_url(field: &str, encoded_query: &str, page: u32) -> String {
    format!("{}/list?{}={}&page={}", API_BASE_URL, field, encoded_query, page)
}

/// GETリクエストを発行してPageResultにパースする（共通処理）
async fn fetch_page(url: &str) -> Result<PageResult, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let result: PageResult = serde_wasm_bindgen::from_value(json)?;
    Ok(result)
}

/// リスト取得（更新日時の降順）
pub async fn fetch_list(page: u32) -> Result<PageResult, JsValue> {
    fetch_page(&list_url(page)).await
}

/// uid指定で1件取得
///
/// 該当なしはOk(None)（エラーではなく「見つからない」）
pub async fn fetch_by_uid(uid: &str) -> Result<Option<WantedRecord>, JsValue> {
    let result = fetch_page(&uid_url(&encode(uid))).await?;
    Ok(result.items.into_iter().next())
}

/// ファンアウト検索
///
/// フィールド単位の失敗はコンソールに記録して結果から除外する。
/// 全フィールドが失敗した場合のみErr
pub async fn search(query: &str, page: u32) -> Result<PageResult, JsValue> {
    let encoded = encode(query);
    let requests = SEARCH_FIELDS
        .iter()
        .map(|field| fetch_page_items(field, &encoded, page));
    let settled = futures::future::join_all(requests).await;

    let mut per_field: Vec<Vec<WantedRecord>> = Vec::new();
    for (field, result) in SEARCH_FIELDS.iter().zip(settled) {
        match result {
            Ok(items) => per_field.push(items),
            Err(e) => web_sys::console::warn_2(
                &JsValue::from_str(&format!("フィールド {} の検索に失敗", field)),
                &e,
            ),
        }
    }

    if per_field.is_empty() {
        return Err(JsValue::from_str("全フィールドの検索リクエストが失敗しました"));
    }

    let items = merge_by_uid(per_field);
    Ok(PageResult {
        total: items.len() as u32,
        page,
        items,
    })
}

async fn fetch_page_items(
    field: &str,
    encoded_query: &str,
    page: u32,
) -> Result<Vec<WantedRecord>, JsValue> {
    let result = fetch_page(&field_url(field, encoded_query, page)).await?;
    Ok(result.items)
}
