//! Project registry.

use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, ListPage, ListQuery};
use crate::grid::ColumnDef;

use super::format::dash;

const GET_URL: &str = "Projects/GetProject";
const MANAGE_URL: &str = "Projects/ManageProject";
const DELETE_URL: &str = "Projects/DeleteProject";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
}

pub static COLUMNS: &[ColumnDef<Project>] = &[
    ColumnDef {
        id: "id",
        header: "Project ID",
        cell: |p: &Project| dash(&p.id),
        sortable: true,
    },
    ColumnDef {
        id: "project_name",
        header: "Project Name",
        cell: |p: &Project| dash(&p.project_name),
        sortable: true,
    },
];

pub struct ProjectsService<'a> {
    api: &'a ApiClient,
}

impl<'a> ProjectsService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub fn list(&self, query: &ListQuery) -> Result<ListPage<Project>, ApiError> {
        let mut pairs = query.to_pairs("project_name");
        pairs.insert(0, ("id".to_string(), String::new()));
        let value = self.api.get_json(GET_URL, &pairs)?;
        ListPage::from_value(value)
    }

    /// Create or update, one endpoint for both.
    pub fn save(&self, item: &Project) -> Result<(), ApiError> {
        self.api.post_json(MANAGE_URL, item)?;
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("{DELETE_URL}/{id}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_render_dashes_for_missing_values() {
        let p = Project::default();
        assert_eq!((COLUMNS[0].cell)(&p), "-");
        assert_eq!((COLUMNS[1].cell)(&p), "-");

        let p = Project {
            id: Some("103576".to_string()),
            project_name: Some("USS Gravely FY26".to_string()),
        };
        assert_eq!((COLUMNS[0].cell)(&p), "103576");
        assert_eq!((COLUMNS[1].cell)(&p), "USS Gravely FY26");
    }
}
