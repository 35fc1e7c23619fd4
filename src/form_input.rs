//! 申請フォームの入力（JSONファイル or 対話入力）

use std::path::Path;

use dialoguer::{Input, Select};
use welfare_portal_common::form::{DISABILITY_PERCENTAGES, DISABILITY_TYPES};
use welfare_portal_common::ApplicationForm;

use crate::error::{PortalError, Result};

/// JSONファイルからフォームを読み込む
///
/// キー名はレコードの `formData` と同じ（`fullName` も可）。
pub fn read_form_file(path: &Path) -> Result<ApplicationForm> {
    if !path.exists() {
        return Err(PortalError::FormNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let form: ApplicationForm = serde_json::from_str(&content)?;
    Ok(form)
}

/// 必須項目がすべて埋まっているか確認
pub fn ensure_complete(form: &ApplicationForm) -> Result<()> {
    let missing = form.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(PortalError::IncompleteForm(missing))
    }
}

/// 対話式でフォームを入力
pub fn prompt_form() -> Result<ApplicationForm> {
    let mut form = ApplicationForm::new();

    form.name = prompt_text("Full Name", None)?;
    form.email = prompt_text("Email Address", None)?;
    form.mobile = prompt_text("Mobile Number", None)?;
    form.date_of_birth = prompt_text("Date of Birth (YYYY-MM-DD)", None)?;
    form.disability_type = prompt_choice("Disability Type", DISABILITY_TYPES)?;
    form.disability_percentage = prompt_choice("Disability Percentage", DISABILITY_PERCENTAGES)?;
    form.address = prompt_text("Address", None)?;
    form.city = prompt_text("City", None)?;
    form.state = prompt_text("State", Some(&form.state))?;
    form.pincode = prompt_text("Pincode", None)?;
    form.income = prompt_text("Annual Income (₹)", None)?;
    form.bank_account = prompt_text("Bank Account Number", None)?;
    form.ifsc_code = prompt_text("IFSC Code", None)?;
    form.additional_info = Input::new()
        .with_prompt("Additional Information (optional)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PortalError::Prompt(e.to_string()))?;

    Ok(form)
}

fn prompt_text(prompt: &str, initial: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(initial) = initial {
        input = input.default(initial.to_string());
    }

    input
        .interact_text()
        .map(|value| value.trim().to_string())
        .map_err(|e| PortalError::Prompt(e.to_string()))
}

fn prompt_choice(prompt: &str, options: &[(&str, &str)]) -> Result<String> {
    let labels: Vec<&str> = options.iter().map(|(_, label)| *label).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| PortalError::Prompt(e.to_string()))?;

    Ok(options[index].0.to_string())
}
