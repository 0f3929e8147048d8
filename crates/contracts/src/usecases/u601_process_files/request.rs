use serde::{Deserialize, Serialize};

use crate::usecases::common::selected_file::require_file;
use crate::usecases::common::{SelectedFile, UseCaseError, UseCaseResult};

/// Логическая роль входного файла. Роли фиксированы и не меняются местами.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileRole {
    Sales,
    Inventory,
}

impl FileRole {
    pub const ALL: [FileRole; 2] = [FileRole::Sales, FileRole::Inventory];

    /// Имя multipart-части
    pub fn field_name(self) -> &'static str {
        match self {
            FileRole::Sales => "sales_file",
            FileRole::Inventory => "inventory_file",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileRole::Sales => "sales",
            FileRole::Inventory => "inventory",
        }
    }
}

/// Запрос на обработку: оба файла выбраны и не пусты
#[derive(Debug, Clone, Copy)]
pub struct ProcessRequest<'a> {
    pub sales: &'a SelectedFile,
    pub inventory: &'a SelectedFile,
}

impl<'a> ProcessRequest<'a> {
    /// Собирает запрос из двух слотов выбора
    pub fn from_slots(
        sales: Option<&'a SelectedFile>,
        inventory: Option<&'a SelectedFile>,
    ) -> UseCaseResult<Self> {
        if sales.is_none() || inventory.is_none() {
            return Err(UseCaseError::validation("Please upload both files."));
        }
        Ok(Self {
            sales: require_file(sales, FileRole::Sales.label())?,
            inventory: require_file(inventory, FileRole::Inventory.label())?,
        })
    }

    /// Части multipart-тела в фиксированном порядке
    pub fn parts(&self) -> [(&'static str, &'a SelectedFile); 2] {
        [
            (FileRole::Sales.field_name(), self.sales),
            (FileRole::Inventory.field_name(), self.inventory),
        ]
    }
}
