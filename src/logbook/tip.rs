//! Test and inspection plan (TIP) tickets. Read-only.

use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, ListPage, ListQuery};
use crate::grid::ColumnDef;

use super::format::{dash, date_time};

const GET_URL: &str = "Tip/GetTipList";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TipTicket {
    pub id: Option<String>,
    pub item_no: Option<String>,
    pub shop_sub: Option<String>,
    pub task: Option<String>,
    pub title: Option<String>,
    pub item_location: Option<String>,
    pub work_para: Option<String>,
    pub standard_item: Option<String>,
    pub para: Option<String>,
    pub inspection_type: Option<String>,
    pub key_events: Option<String>,
    pub partial_final: Option<String>,
    pub sat_unsat: Option<String>,
    pub notified_customer_government_rep: Option<String>,
    pub notify_date_time: Option<String>,
    pub checkpoint_date_time: Option<String>,
    pub completed_date_time: Option<String>,
    pub ticket_no: Option<String>,
    pub added_to_nmd: Option<String>,
    pub criteria: Option<String>,
    pub remarks: Option<String>,
}

pub static COLUMNS: &[ColumnDef<TipTicket>] = &[
    ColumnDef {
        id: "itemNo",
        header: "Item No",
        cell: |t: &TipTicket| dash(&t.item_no),
        sortable: true,
    },
    ColumnDef {
        id: "shopSub",
        header: "Shop/Sub",
        cell: |t: &TipTicket| dash(&t.shop_sub),
        sortable: true,
    },
    ColumnDef {
        id: "task",
        header: "Task",
        cell: |t: &TipTicket| dash(&t.task),
        sortable: true,
    },
    ColumnDef {
        id: "title",
        header: "Title",
        cell: |t: &TipTicket| dash(&t.title),
        sortable: true,
    },
    ColumnDef {
        id: "itemLocation",
        header: "Location",
        cell: |t: &TipTicket| dash(&t.item_location),
        sortable: true,
    },
    ColumnDef {
        id: "inspectionType",
        header: "Inspection Type",
        cell: |t: &TipTicket| dash(&t.inspection_type),
        sortable: true,
    },
    ColumnDef {
        id: "keyEvents",
        header: "Key Events",
        cell: |t: &TipTicket| dash(&t.key_events),
        sortable: true,
    },
    ColumnDef {
        id: "partialFinal",
        header: "Partial/Final",
        cell: |t: &TipTicket| dash(&t.partial_final),
        sortable: true,
    },
    ColumnDef {
        id: "satUnsat",
        header: "Sat/Unsat",
        cell: |t: &TipTicket| dash(&t.sat_unsat),
        sortable: true,
    },
    ColumnDef {
        id: "notifyDateTime",
        header: "Notified",
        cell: |t: &TipTicket| date_time(&t.notify_date_time),
        sortable: true,
    },
    ColumnDef {
        id: "checkpointDateTime",
        header: "Checkpoint",
        cell: |t: &TipTicket| date_time(&t.checkpoint_date_time),
        sortable: true,
    },
    ColumnDef {
        id: "completedDateTime",
        header: "Completed",
        cell: |t: &TipTicket| date_time(&t.completed_date_time),
        sortable: true,
    },
    ColumnDef {
        id: "ticketNo",
        header: "Ticket No",
        cell: |t: &TipTicket| dash(&t.ticket_no),
        sortable: true,
    },
    ColumnDef {
        id: "remarks",
        header: "Remarks",
        cell: |t: &TipTicket| dash(&t.remarks),
        sortable: false,
    },
];

pub struct TipService<'a> {
    api: &'a ApiClient,
}

impl<'a> TipService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub fn list(&self, query: &ListQuery) -> Result<ListPage<TipTicket>, ApiError> {
        let value = self.api.get_json(GET_URL, &query.to_pairs("search"))?;
        ListPage::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn checkpoint_renders_date_and_time() {
        let t: TipTicket = serde_json::from_value(json!({
            "itemNo": "TIP-105",
            "checkpointDateTime": "2026-02-07T13:30:00",
            "satUnsat": "SAT"
        }))
        .unwrap();
        assert_eq!((COLUMNS[0].cell)(&t), "TIP-105");
        assert_eq!((COLUMNS[10].cell)(&t), "02/07/2026 13:30");
        assert_eq!((COLUMNS[8].cell)(&t), "SAT");
    }
}
