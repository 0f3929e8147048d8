use super::usecase_result::{UseCaseError, UseCaseResult};

/// Выбранный пользователем файл, уже прочитанный в память
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Исходное имя файла
    pub name: String,
    /// Заявленный MIME-тип (может быть пустым, браузер не всегда его знает)
    pub media_type: String,
    /// Содержимое файла
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// MIME-тип для multipart-части; пустой заменяется на text/csv
    pub fn effective_media_type(&self) -> &str {
        if self.media_type.trim().is_empty() {
            "text/csv"
        } else {
            &self.media_type
        }
    }
}

/// Слот выбора файла в форме.
///
/// Пока файл читается в память, слот пуст для отправки: прежний файл уже
/// заменён, новый ещё не готов. Каждое чтение получает номер; завершение
/// устаревшего чтения (пользователь успел выбрать другой файл) игнорируется.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSlot {
    generation: u32,
    reading: bool,
    file: Option<SelectedFile>,
}

impl FileSlot {
    /// Начало чтения нового выбора; возвращает номер чтения
    pub fn begin_read(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.reading = true;
        self.file = None;
        self.generation
    }

    /// Завершение чтения. `false`, если чтение устарело и результат отброшен.
    pub fn finish_read(&mut self, ticket: u32, file: Option<SelectedFile>) -> bool {
        if ticket != self.generation || !self.reading {
            return false;
        }
        self.reading = false;
        self.file = file;
        true
    }

    pub fn is_reading(&self) -> bool {
        self.reading
    }

    /// Файл, готовый к отправке
    pub fn selected(&self) -> Option<&SelectedFile> {
        if self.reading {
            None
        } else {
            self.file.as_ref()
        }
    }
}

/// Проверяет слот выбора файла: файл должен быть выбран и не пуст
pub fn require_file<'a>(
    slot: Option<&'a SelectedFile>,
    slot_label: &str,
) -> UseCaseResult<&'a SelectedFile> {
    match slot {
        None => Err(UseCaseError::validation(format!(
            "Please select the {} file.",
            slot_label
        ))),
        Some(file) if file.is_empty() => Err(UseCaseError::validation(format!(
            "The {} file \"{}\" is empty.",
            slot_label, file.name
        ))),
        Some(file) => Ok(file),
    }
}
