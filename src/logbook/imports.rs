//! Import-file runs: listing, category lookup, multipart upload.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, ListPage};
use crate::grid::ColumnDef;

use super::format::{dash, date, yes_no};

const CONTROLLER: &str = "ImportFiles";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportedFile {
    pub id: Option<i64>,
    pub category_id: Option<i64>,
    pub file_date: Option<String>,
    pub file_name: Option<String>,
    pub imported_at: Option<String>,
    pub is_failed_import: Option<bool>,
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportCategory {
    pub id: i64,
    #[serde(rename = "category_Name")]
    pub category_name: String,
    #[serde(rename = "file_Extension", default)]
    pub file_extension: Option<String>,
}

/// Parameters for a multipart import run.
#[derive(Debug, Clone)]
pub struct ImportRun {
    pub category_id: i64,
    pub project_id: String,
    pub file_date: String,
}

impl ImportRun {
    /// Form fields accompanying the uploaded file.
    pub fn to_fields(&self) -> [(&'static str, String); 3] {
        [
            ("CategoryId", self.category_id.to_string()),
            ("ProjectId", self.project_id.clone()),
            ("FileDate", self.file_date.clone()),
        ]
    }
}

pub static COLUMNS: &[ColumnDef<ImportedFile>] = &[
    ColumnDef {
        id: "id",
        header: "ID",
        cell: |f: &ImportedFile| f.id.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string()),
        sortable: true,
    },
    ColumnDef {
        id: "file_name",
        header: "File Name",
        cell: |f: &ImportedFile| dash(&f.file_name),
        sortable: true,
    },
    ColumnDef {
        id: "project_id",
        header: "Project",
        cell: |f: &ImportedFile| dash(&f.project_id),
        sortable: true,
    },
    ColumnDef {
        id: "file_date",
        header: "File Date",
        cell: |f: &ImportedFile| date(&f.file_date),
        sortable: true,
    },
    ColumnDef {
        id: "imported_at",
        header: "Imported At",
        cell: |f: &ImportedFile| date(&f.imported_at),
        sortable: true,
    },
    ColumnDef {
        id: "is_failed_import",
        header: "Failed?",
        cell: |f: &ImportedFile| yes_no(f.is_failed_import),
        sortable: true,
    },
];

pub struct ImportsService<'a> {
    api: &'a ApiClient,
}

impl<'a> ImportsService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Paged listing. This controller uses plain `page`/`size` params.
    pub fn list(&self, page: usize, size: usize) -> Result<ListPage<ImportedFile>, ApiError> {
        let pairs = [
            ("page".to_string(), page.to_string()),
            ("size".to_string(), size.to_string()),
        ];
        let value = self.api.get_json(CONTROLLER, &pairs)?;
        ListPage::from_value(value)
    }

    pub fn categories(&self) -> Result<Vec<ImportCategory>, ApiError> {
        self.api.get_typed(&format!("{CONTROLLER}/categories"))
    }

    /// Runs an import by uploading the file through the multipart path.
    pub fn run(&self, run: &ImportRun, file: &Path) -> Result<(), ApiError> {
        self.api
            .post_multipart(&format!("{CONTROLLER}/run"), &run.to_fields(), "File", file)?;
        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("{CONTROLLER}/{id}"))?;
        Ok(())
    }
}
