//! ERL data glossary.
//!
//! The glossary endpoint returns the full term list as a bare array with no
//! server-side paging, so its page runs the grid in local mode.

use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, ListPage};
use crate::grid::ColumnDef;

use super::format::{dash, yes_no};

const LIST_URL: &str = "ERLGlossary/GetERLGlossaryList";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossaryTerm {
    pub id: Option<i64>,
    pub colmn_header: Option<String>,
    pub description: Option<String>,
    pub data_type: Option<String>,
    pub ips: Option<bool>,
    pub t_i_plan: Option<bool>,
    pub cfr_log: Option<bool>,
    pub rr_list: Option<bool>,
    pub itstp: Option<bool>,
    pub waf_log: Option<bool>,
}

pub static COLUMNS: &[ColumnDef<GlossaryTerm>] = &[
    ColumnDef {
        id: "id",
        header: "ID",
        cell: |t: &GlossaryTerm| t.id.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string()),
        sortable: true,
    },
    ColumnDef {
        id: "colmn_header",
        header: "Column Header",
        cell: |t: &GlossaryTerm| dash(&t.colmn_header),
        sortable: true,
    },
    ColumnDef {
        id: "description",
        header: "Description",
        cell: |t: &GlossaryTerm| dash(&t.description),
        sortable: true,
    },
    ColumnDef {
        id: "data_type",
        header: "Data Type",
        cell: |t: &GlossaryTerm| dash(&t.data_type),
        sortable: true,
    },
    ColumnDef {
        id: "ips",
        header: "IPS",
        cell: |t: &GlossaryTerm| yes_no(t.ips),
        sortable: true,
    },
    ColumnDef {
        id: "t_i_plan",
        header: "T/I Plan",
        cell: |t: &GlossaryTerm| yes_no(t.t_i_plan),
        sortable: true,
    },
    ColumnDef {
        id: "cfr_log",
        header: "CFR Log",
        cell: |t: &GlossaryTerm| yes_no(t.cfr_log),
        sortable: true,
    },
    ColumnDef {
        id: "rr_list",
        header: "RR List",
        cell: |t: &GlossaryTerm| yes_no(t.rr_list),
        sortable: true,
    },
    ColumnDef {
        id: "itstp",
        header: "ITSTP",
        cell: |t: &GlossaryTerm| yes_no(t.itstp),
        sortable: true,
    },
    ColumnDef {
        id: "waf_log",
        header: "WAF Log",
        cell: |t: &GlossaryTerm| yes_no(t.waf_log),
        sortable: true,
    },
];

pub struct GlossaryService<'a> {
    api: &'a ApiClient,
}

impl<'a> GlossaryService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// The whole glossary; the caller pages it locally.
    pub fn list(&self) -> Result<Vec<GlossaryTerm>, ApiError> {
        let value = self.api.get_json(LIST_URL, &[])?;
        Ok(ListPage::from_value(value)?.items)
    }

    pub fn add(&self, term: &GlossaryTerm) -> Result<(), ApiError> {
        self.api.post_json(LIST_URL, term)?;
        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api
            .delete(&format!("{LIST_URL}?id={id}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flags_render_yes_no_with_dash_for_unknown() {
        let t: GlossaryTerm = serde_json::from_value(json!({
            "id": 7,
            "colmn_header": "WAF #",
            "data_type": "string",
            "ips": true,
            "waf_log": false
        }))
        .unwrap();
        assert_eq!((COLUMNS[0].cell)(&t), "7");
        assert_eq!((COLUMNS[4].cell)(&t), "Yes");
        assert_eq!((COLUMNS[9].cell)(&t), "No");
        assert_eq!((COLUMNS[5].cell)(&t), "-");
    }

    // The add body keeps the API's snake_case names, including the
    // misspelled colmn_header.
    #[test]
    fn add_body_serializes_with_wire_names() {
        let t = GlossaryTerm {
            colmn_header: Some("WAF #".to_string()),
            description: Some("Work authorization form number".to_string()),
            waf_log: Some(true),
            ..GlossaryTerm::default()
        };
        let body = serde_json::to_value(&t).unwrap();
        assert_eq!(body["colmn_header"], "WAF #");
        assert_eq!(body["waf_log"], true);
        assert!(body.get("columnHeader").is_none());
    }
}
