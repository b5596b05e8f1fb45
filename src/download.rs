//! Saving server-generated files through a temporary object URL.

use chrono::NaiveDate;
use wasm_bindgen::JsCast;

use crate::error::ApiError;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub fn backup_file_name(day: NaiveDate) -> String {
    format!("Backup_EduCRM_{}.xlsx", day.format("%Y-%m-%d"))
}

fn browser_err(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Browser(format!("{:?}", e))
}

/// Hand `bytes` to the browser as a download named `file_name`.
pub fn save_xlsx(bytes: &[u8], file_name: &str) -> Result<(), ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Browser("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ApiError::Browser("no document".to_string()))?;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(XLSX_MIME);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(browser_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(browser_err)?;

    let anchor = document
        .create_element("a")
        .map_err(browser_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ApiError::Browser("anchor cast failed".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    let body = document
        .body()
        .ok_or_else(|| ApiError::Browser("no body".to_string()))?;
    body.append_child(&anchor).map_err(browser_err)?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);

    log::info!("Saved {} ({} bytes)", file_name, bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_file_name() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(backup_file_name(day), "Backup_EduCRM_2026-03-09.xlsx");
    }
}
