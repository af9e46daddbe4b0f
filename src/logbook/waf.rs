//! Work-authorization form (WAF) log.

use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, ListPage, ListQuery};
use crate::grid::ColumnDef;

use super::format::{dash, date};

const GET_URL: &str = "WafLog/GetWafLogList";
const MANAGE_URL: &str = "WafLog/ManageWafLog";
const DELETE_URL: &str = "WafLog/DeleteWafLog";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WafEntry {
    pub id: Option<String>,
    pub waf_number: Option<String>,
    pub spec_item: Option<String>,
    pub ra: Option<String>,
    pub space: Option<String>,
    pub system: Option<String>,
    pub work_description: Option<String>,
    pub received: Option<String>,
    pub request_start: Option<String>,
    pub date_authorized: Option<String>,
    pub status: Option<String>,
    pub rev: Option<String>,
    pub ship_div: Option<String>,
    pub tag: Option<String>,
    pub danger_tags_number_listed: Option<String>,
    pub completed_date: Option<String>,
    pub closed_date: Option<String>,
    pub ra_contact: Option<String>,
    pub comments: Option<String>,
}

pub static COLUMNS: &[ColumnDef<WafEntry>] = &[
    ColumnDef {
        id: "wafNumber",
        header: "WAF #",
        cell: |e: &WafEntry| dash(&e.waf_number),
        sortable: true,
    },
    ColumnDef {
        id: "specItem",
        header: "Spec Item",
        cell: |e: &WafEntry| dash(&e.spec_item),
        sortable: true,
    },
    ColumnDef {
        id: "ra",
        header: "RA",
        cell: |e: &WafEntry| dash(&e.ra),
        sortable: true,
    },
    ColumnDef {
        id: "space",
        header: "Space",
        cell: |e: &WafEntry| dash(&e.space),
        sortable: true,
    },
    ColumnDef {
        id: "system",
        header: "System",
        cell: |e: &WafEntry| dash(&e.system),
        sortable: true,
    },
    ColumnDef {
        id: "workDescription",
        header: "Work Description",
        cell: |e: &WafEntry| dash(&e.work_description),
        sortable: true,
    },
    ColumnDef {
        id: "received",
        header: "Received",
        cell: |e: &WafEntry| date(&e.received),
        sortable: true,
    },
    ColumnDef {
        id: "requestStart",
        header: "Request Start",
        cell: |e: &WafEntry| date(&e.request_start),
        sortable: true,
    },
    ColumnDef {
        id: "dateAuthorized",
        header: "Authorized",
        cell: |e: &WafEntry| date(&e.date_authorized),
        sortable: true,
    },
    ColumnDef {
        id: "status",
        header: "Status",
        cell: |e: &WafEntry| dash(&e.status),
        sortable: true,
    },
    ColumnDef {
        id: "rev",
        header: "Rev",
        cell: |e: &WafEntry| dash(&e.rev),
        sortable: true,
    },
    ColumnDef {
        id: "shipDiv",
        header: "Ship Div",
        cell: |e: &WafEntry| dash(&e.ship_div),
        sortable: true,
    },
    ColumnDef {
        id: "tag",
        header: "Tag",
        cell: |e: &WafEntry| dash(&e.tag),
        sortable: true,
    },
    ColumnDef {
        id: "dangerTagsNumberListed",
        header: "Danger Tags Listed",
        cell: |e: &WafEntry| dash(&e.danger_tags_number_listed),
        sortable: true,
    },
    ColumnDef {
        id: "completedDate",
        header: "Completed",
        cell: |e: &WafEntry| date(&e.completed_date),
        sortable: true,
    },
    ColumnDef {
        id: "closedDate",
        header: "Closed",
        cell: |e: &WafEntry| date(&e.closed_date),
        sortable: true,
    },
    ColumnDef {
        id: "raContact",
        header: "RA Contact",
        cell: |e: &WafEntry| dash(&e.ra_contact),
        sortable: true,
    },
    ColumnDef {
        id: "comments",
        header: "Comments",
        cell: |e: &WafEntry| dash(&e.comments),
        sortable: false,
    },
];

pub struct WafService<'a> {
    api: &'a ApiClient,
}

impl<'a> WafService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub fn list(&self, query: &ListQuery) -> Result<ListPage<WafEntry>, ApiError> {
        let value = self.api.get_json(GET_URL, &query.to_pairs("search"))?;
        ListPage::from_value(value)
    }

    pub fn save(&self, item: &WafEntry) -> Result<(), ApiError> {
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
    use serde_json::json;

    #[test]
    fn waf_row_renders() {
        let e: WafEntry = serde_json::from_value(json!({
            "wafNumber": "WAF-0042",
            "specItem": "561-77-001",
            "status": "Authorized",
            "dateAuthorized": "2026-01-15"
        }))
        .unwrap();
        assert_eq!((COLUMNS[0].cell)(&e), "WAF-0042");
        assert_eq!((COLUMNS[8].cell)(&e), "01/15/2026");
        assert_eq!((COLUMNS[16].cell)(&e), "-");
    }

    #[test]
    fn save_body_serializes_with_wire_names() {
        let e = WafEntry {
            id: Some("w1".to_string()),
            waf_number: Some("WAF-0042".to_string()),
            danger_tags_number_listed: Some("2".to_string()),
            ..WafEntry::default()
        };
        let body = serde_json::to_value(&e).unwrap();
        assert_eq!(body["wafNumber"], "WAF-0042");
        assert_eq!(body["dangerTagsNumberListed"], "2");
        assert!(body.get("waf_number").is_none());
    }
}
