//! 内蔵サンプルデータ
//!
//! 上流APIに到達できない場合のフォールバック。初回表示が
//! 空にならないことを保証するための最小セット

use crate::types::{ImageRef, WantedRecord};

fn placeholder_image() -> Vec<ImageRef> {
    vec![ImageRef {
        original: "https://via.placeholder.com/300x400?text=Photo+Not+Available".to_string(),
        caption: None,
    }]
}

/// サンプルレコード3件を返す
pub fn sample_records() -> Vec<WantedRecord> {
    vec![
        WantedRecord {
            uid: "1".to_string(),
            title: "John Doe".to_string(),
            images: placeholder_image(),
            subjects: vec!["Murder".to_string(), "Armed Robbery".to_string()],
            race: Some("White".to_string()),
            sex: Some("Male".to_string()),
            age_range: Some("35-40".to_string()),
            hair: Some("Brown".to_string()),
            eyes: Some("Blue".to_string()),
            height_min: Some("5'10\"".to_string()),
            weight: Some("180 lbs".to_string()),
            nationality: Some("American".to_string()),
            place_of_birth: Some("New York, NY".to_string()),
            dates_of_birth_used: vec!["1983-05-15".to_string()],
            warning_message: Some("ARMED AND EXTREMELY DANGEROUS".to_string()),
            details: Some(
                "Wanted for multiple armed robberies and a murder in the downtown area. \
                 Last seen driving a blue sedan."
                    .to_string(),
            ),
            reward_text: Some("$50,000 reward offered".to_string()),
        },
        WantedRecord {
            uid: "2".to_string(),
            title: "Jane Smith".to_string(),
            images: placeholder_image(),
            subjects: vec!["Fraud".to_string(), "Identity Theft".to_string()],
            race: Some("Hispanic".to_string()),
            sex: Some("Female".to_string()),
            age_range: Some("28-35".to_string()),
            hair: Some("Black".to_string()),
            eyes: Some("Brown".to_string()),
            height_min: Some("5'4\"".to_string()),
            weight: Some("140 lbs".to_string()),
            nationality: Some("American".to_string()),
            place_of_birth: Some("Los Angeles, CA".to_string()),
            dates_of_birth_used: vec!["1988-12-03".to_string()],
            warning_message: None,
            details: Some(
                "Wanted for large-scale identity theft operations affecting over 200 victims."
                    .to_string(),
            ),
            reward_text: Some("$25,000 reward offered".to_string()),
        },
        WantedRecord {
            uid: "3".to_string(),
            title: "Robert Johnson".to_string(),
            images: placeholder_image(),
            subjects: vec!["Drug Trafficking".to_string(), "Money Laundering".to_string()],
            race: Some("Black".to_string()),
            sex: Some("Male".to_string()),
            age_range: Some("40-45".to_string()),
            hair: Some("Bald".to_string()),
            eyes: Some("Brown".to_string()),
            height_min: Some("6'2\"".to_string()),
            weight: Some("220 lbs".to_string()),
            nationality: Some("American".to_string()),
            place_of_birth: Some("Chicago, IL".to_string()),
            dates_of_birth_used: vec!["1978-08-20".to_string()],
            warning_message: Some("CONSIDERED ARMED AND DANGEROUS".to_string()),
            details: Some(
                "Leader of a major drug trafficking organization. \
                 Has connections across multiple states."
                    .to_string(),
            ),
            reward_text: Some("$100,000 reward offered".to_string()),
        },
    ]
}
