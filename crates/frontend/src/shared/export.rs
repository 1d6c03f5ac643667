//! Скачивание файлов, сформированных на backend (CSV-выгрузка журнала)

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Сохраняет текст как файл через временную ссылку `<a download>`
pub fn download_text(content: &str, filename: &str, mime: &str) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Не удалось создать файл: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Failed to cast to HtmlAnchorElement")?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

/// Имя файла выгрузки за период
pub fn export_file_name(prefix: &str, from: Option<&str>, to: Option<&str>) -> String {
    match (from, to) {
        (Some(f), Some(t)) if f == t => format!("{}_{}.csv", prefix, f),
        (Some(f), Some(t)) => format!("{}_{}_{}.csv", prefix, f, t),
        (Some(f), None) => format!("{}_{}.csv", prefix, f),
        _ => format!("{}.csv", prefix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_reflects_period() {
        assert_eq!(export_file_name("bookings", None, None), "bookings.csv");
        assert_eq!(
            export_file_name("bookings", Some("2025-05-01"), Some("2025-05-01")),
            "bookings_2025-05-01.csv"
        );
        assert_eq!(
            export_file_name("bookings", Some("2025-05-01"), Some("2025-05-31")),
            "bookings_2025-05-01_2025-05-31.csv"
        );
    }
}
