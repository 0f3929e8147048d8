use contracts::usecases::common::{FileSlot, SelectedFile};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::notice::Notice;

/// Первый файл из `<input type="file">`, вызвавшего событие
pub fn file_from_event(ev: &web_sys::Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Читает файл целиком в память
pub async fn read_selected_file(file: web_sys::File) -> Result<SelectedFile, String> {
    // Читаем файл как ArrayBuffer
    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;

    let bytes = js_sys::Uint8Array::new(&array_buffer).to_vec();

    Ok(SelectedFile::new(file.name(), file.type_(), bytes))
}

/// Обработчик `<input type="file">`: слот сразу переходит в чтение, файл
/// кладётся в него после загрузки в память. Отмена диалога слот не трогает.
pub fn file_slot_handler(
    slot: RwSignal<FileSlot>,
    set_notice: WriteSignal<Option<Notice>>,
) -> impl Fn(web_sys::Event) + Clone + Send + Sync + 'static {
    move |ev: web_sys::Event| {
        let Some(file) = file_from_event(&ev) else {
            return;
        };
        let mut ticket = 0;
        slot.update(|slot| ticket = slot.begin_read());

        spawn_local(async move {
            let selected = match read_selected_file(file).await {
                Ok(selected) => Some(selected),
                Err(e) => {
                    set_notice.set(Some(Notice::Error(e)));
                    None
                }
            };
            slot.update(|slot| {
                if !slot.finish_read(ticket, selected) {
                    log::debug!("file read #{} superseded by a newer selection", ticket);
                }
            });
        });
    }
}

/// Подпись под полем выбора файла
pub fn slot_caption(slot: &FileSlot) -> String {
    if slot.is_reading() {
        return "Reading file...".to_string();
    }
    match slot.selected() {
        Some(file) => format!("{} ({:.2} KB)", file.name, file.size() as f64 / 1024.0),
        None => "No file selected".to_string(),
    }
}
