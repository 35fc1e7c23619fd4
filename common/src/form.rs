//! スキーム申請フォーム
//!
//! 入力値はすべて文字列のまま保持する。必須チェックはフォーム描画側
//! (Web/CLI) が `missing_fields` を使って行う。

use serde::{Deserialize, Serialize};

use crate::types::FormData;

/// `formData` に書き出すフィールド名 (入力順)
pub const FIELD_NAMES: [&str; 14] = [
    "name",
    "email",
    "mobile",
    "dateOfBirth",
    "disabilityType",
    "disabilityPercentage",
    "address",
    "city",
    "state",
    "pincode",
    "income",
    "bankAccount",
    "ifscCode",
    "additionalInfo",
];

/// 州の初期値
pub const DEFAULT_STATE: &str = "Maharashtra";

/// 障害種別の選択肢 (value, label)
pub const DISABILITY_TYPES: &[(&str, &str)] = &[
    ("locomotor", "Locomotor Disability"),
    ("visual", "Visual Impairment"),
    ("hearing", "Hearing Impairment"),
    ("intellectual", "Intellectual Disability"),
    ("mental", "Mental Illness"),
    ("multiple", "Multiple Disabilities"),
    ("other", "Other"),
];

/// 障害程度の選択肢 (value, label)
pub const DISABILITY_PERCENTAGES: &[(&str, &str)] = &[
    ("40-59", "40% - 59%"),
    ("60-79", "60% - 79%"),
    ("80-100", "80% - 100%"),
];

/// 申請フォーム入力
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationForm {
    #[serde(alias = "fullName")]
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub date_of_birth: String,
    pub disability_type: String,
    pub disability_percentage: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub income: String,
    pub bank_account: String,
    pub ifsc_code: String,
    /// 任意項目
    pub additional_info: String,
}

impl ApplicationForm {
    /// 画面初期表示用の空フォーム (州のみ初期値あり)
    pub fn new() -> Self {
        Self {
            state: DEFAULT_STATE.to_string(),
            ..Default::default()
        }
    }

    /// 必須項目 (フィールド名, 値) の一覧
    fn required_fields(&self) -> [(&'static str, &str); 13] {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("mobile", &self.mobile),
            ("dateOfBirth", &self.date_of_birth),
            ("disabilityType", &self.disability_type),
            ("disabilityPercentage", &self.disability_percentage),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("pincode", &self.pincode),
            ("income", &self.income),
            ("bankAccount", &self.bank_account),
            ("ifscCode", &self.ifsc_code),
        ]
    }

    /// 未入力の必須項目名を返す (additionalInfo は含まない)
    pub fn missing_fields(&self) -> Vec<String> {
        self.required_fields()
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field.to_string())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// フィールド名で値を参照する
    pub fn get_field(&self, field: &str) -> Option<&str> {
        let value = match field {
            "name" | "fullName" => &self.name,
            "email" => &self.email,
            "mobile" => &self.mobile,
            "dateOfBirth" => &self.date_of_birth,
            "disabilityType" => &self.disability_type,
            "disabilityPercentage" => &self.disability_percentage,
            "address" => &self.address,
            "city" => &self.city,
            "state" => &self.state,
            "pincode" => &self.pincode,
            "income" => &self.income,
            "bankAccount" => &self.bank_account,
            "ifscCode" => &self.ifsc_code,
            "additionalInfo" => &self.additional_info,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// レコードに保存する `formData` に変換する (全14項目)
    pub fn to_form_data(&self) -> FormData {
        FIELD_NAMES
            .iter()
            .filter_map(|field| {
                self.get_field(field)
                    .map(|value| (field.to_string(), serde_json::Value::from(value)))
            })
            .collect()
    }

    /// フィールド名で値を設定する。未知のフィールド名は false
    pub fn set_field(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "name" | "fullName" => &mut self.name,
            "email" => &mut self.email,
            "mobile" => &mut self.mobile,
            "dateOfBirth" => &mut self.date_of_birth,
            "disabilityType" => &mut self.disability_type,
            "disabilityPercentage" => &mut self.disability_percentage,
            "address" => &mut self.address,
            "city" => &mut self.city,
            "state" => &mut self.state,
            "pincode" => &mut self.pincode,
            "income" => &mut self.income,
            "bankAccount" => &mut self.bank_account,
            "ifscCode" => &mut self.ifsc_code,
            "additionalInfo" => &mut self.additional_info,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// テスト用の入力済みフォーム
#[cfg(test)]
pub(crate) fn sample_form() -> ApplicationForm {
    ApplicationForm {
        name: "Rahul Sharma".to_string(),
        email: "rahul@example.in".to_string(),
        mobile: "9876543210".to_string(),
        date_of_birth: "1995-03-15".to_string(),
        disability_type: "locomotor".to_string(),
        disability_percentage: "40-59".to_string(),
        address: "12 MG Road".to_string(),
        city: "Pune".to_string(),
        state: DEFAULT_STATE.to_string(),
        pincode: "411001".to_string(),
        income: "120000".to_string(),
        bank_account: "001234567890".to_string(),
        ifsc_code: "SBIN0000001".to_string(),
        additional_info: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_has_default_state() {
        let form = ApplicationForm::new();
        assert_eq!(form.state, "Maharashtra");
        assert_eq!(form.name, "");
    }

    #[test]
    fn test_missing_fields_on_blank_form() {
        let missing = ApplicationForm::default().missing_fields();
        assert_eq!(missing.len(), 13);
        assert!(missing.contains(&"name".to_string()));
        assert!(missing.contains(&"ifscCode".to_string()));
        assert!(!missing.contains(&"additionalInfo".to_string()));
    }

    #[test]
    fn test_filled_form_is_complete() {
        let form = sample_form();
        assert!(form.is_complete());
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut form = sample_form();
        form.city = "   ".to_string();
        assert_eq!(form.missing_fields(), vec!["city".to_string()]);
    }

    #[test]
    fn test_set_field() {
        let mut form = ApplicationForm::new();
        assert!(form.set_field("ifscCode", "HDFC0000123".to_string()));
        assert!(form.set_field("fullName", "Asha".to_string()));
        assert!(!form.set_field("aadhaar", "x".to_string()));
        assert_eq!(form.ifsc_code, "HDFC0000123");
        assert_eq!(form.get_field("name"), Some("Asha"));
        assert_eq!(form.get_field("state"), Some("Maharashtra"));
        assert_eq!(form.get_field("aadhaar"), None);
    }

    #[test]
    fn test_deserialize_accepts_full_name_key() {
        let json = r#"{"fullName": "Priya", "state": "Goa", "pincode": "403001"}"#;
        let form: ApplicationForm = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(form.name, "Priya");
        assert_eq!(form.state, "Goa");
        assert_eq!(form.email, "");
    }

    #[test]
    fn test_serialize_field_names() {
        let json = serde_json::to_string(&sample_form()).unwrap();
        assert!(json.contains("\"name\":\"Rahul Sharma\""));
        assert!(json.contains("\"dateOfBirth\":\"1995-03-15\""));
        assert!(json.contains("\"ifscCode\":\"SBIN0000001\""));
        assert!(json.contains("\"additionalInfo\":\"\""));
    }

    #[test]
    fn test_to_form_data_has_every_field() {
        let data = sample_form().to_form_data();
        assert_eq!(data.len(), FIELD_NAMES.len());
        assert_eq!(data["name"], "Rahul Sharma");
        assert_eq!(data["ifscCode"], "SBIN0000001");
        assert_eq!(data["additionalInfo"], "");
    }
}
