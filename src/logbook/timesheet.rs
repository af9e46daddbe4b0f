//! Time-by-job timesheet lines. Read-only.

use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, ListPage, ListQuery};
use crate::grid::ColumnDef;

use super::format::{NumOrText, dash, date, number};

const GET_URL: &str = "TimeByJob/GetTimeByJobList";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimesheetLine {
    pub id: Option<String>,
    pub employee_name: Option<String>,
    pub badge_number: Option<String>,
    pub employee_division: Option<String>,
    pub date: Option<String>,
    pub project: Option<String>,
    pub task: Option<String>,
    pub item: Option<String>,
    pub repair_activity: Option<String>,
    pub title: Option<String>,
    pub trade: Option<String>,
    pub dept: Option<String>,
    pub hours: Option<NumOrText>,
    pub time_type: Option<String>,
    pub support: Option<String>,
}

pub static COLUMNS: &[ColumnDef<TimesheetLine>] = &[
    ColumnDef {
        id: "employeeName",
        header: "Employee Name",
        cell: |l: &TimesheetLine| dash(&l.employee_name),
        sortable: true,
    },
    ColumnDef {
        id: "badgeNumber",
        header: "Badge #",
        cell: |l: &TimesheetLine| dash(&l.badge_number),
        sortable: true,
    },
    ColumnDef {
        id: "employeeDivision",
        header: "Division",
        cell: |l: &TimesheetLine| dash(&l.employee_division),
        sortable: true,
    },
    ColumnDef {
        id: "date",
        header: "Date",
        cell: |l: &TimesheetLine| date(&l.date),
        sortable: true,
    },
    ColumnDef {
        id: "project",
        header: "Project",
        cell: |l: &TimesheetLine| dash(&l.project),
        sortable: true,
    },
    ColumnDef {
        id: "task",
        header: "Task",
        cell: |l: &TimesheetLine| dash(&l.task),
        sortable: true,
    },
    ColumnDef {
        id: "item",
        header: "Item",
        cell: |l: &TimesheetLine| dash(&l.item),
        sortable: true,
    },
    ColumnDef {
        id: "repairActivity",
        header: "Repair Activity",
        cell: |l: &TimesheetLine| dash(&l.repair_activity),
        sortable: true,
    },
    ColumnDef {
        id: "title",
        header: "Title",
        cell: |l: &TimesheetLine| dash(&l.title),
        sortable: true,
    },
    ColumnDef {
        id: "trade",
        header: "Trade",
        cell: |l: &TimesheetLine| dash(&l.trade),
        sortable: true,
    },
    ColumnDef {
        id: "dept",
        header: "Dept",
        cell: |l: &TimesheetLine| dash(&l.dept),
        sortable: true,
    },
    ColumnDef {
        id: "hours",
        header: "Hours",
        cell: |l: &TimesheetLine| number(&l.hours),
        sortable: true,
    },
    ColumnDef {
        id: "timeType",
        header: "Time Type",
        cell: |l: &TimesheetLine| dash(&l.time_type),
        sortable: true,
    },
    ColumnDef {
        id: "support",
        header: "Support",
        cell: |l: &TimesheetLine| dash(&l.support),
        sortable: true,
    },
];

pub struct TimesheetService<'a> {
    api: &'a ApiClient,
}

impl<'a> TimesheetService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub fn list(&self, query: &ListQuery) -> Result<ListPage<TimesheetLine>, ApiError> {
        let value = self.api.get_json(GET_URL, &query.to_pairs("employee_name"))?;
        ListPage::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hours_default_to_zero() {
        let l: TimesheetLine = serde_json::from_value(json!({
            "employeeName": "GUTIERREZ, DIEGO",
            "badgeNumber": "2334",
            "date": "2025-11-10",
            "hours": 8,
            "timeType": "ST"
        }))
        .unwrap();
        assert_eq!((COLUMNS[0].cell)(&l), "GUTIERREZ, DIEGO");
        assert_eq!((COLUMNS[3].cell)(&l), "11/10/2025");
        assert_eq!((COLUMNS[11].cell)(&l), "8");

        let empty = TimesheetLine::default();
        assert_eq!((COLUMNS[11].cell)(&empty), "0");
    }
}
