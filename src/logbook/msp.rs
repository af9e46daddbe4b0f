//! Master schedule (MSP) export.
//!
//! The schedule arrives as a spreadsheet export rather than through a list
//! endpoint, so this logbook is served from the built-in dataset and pages
//! locally.

use serde::{Deserialize, Serialize};

use crate::grid::ColumnDef;

use super::format::{NumOrText, dash, date, date_or_na, duration_days, number};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MspTask {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub work_item: Option<String>,
    #[serde(default)]
    pub unique_id: Option<String>,
    #[serde(default)]
    pub task_name: Option<String>,
    #[serde(default)]
    pub icn: Option<String>,
    #[serde(default)]
    pub key_event_milestone_system: Option<String>,
    #[serde(default)]
    pub component_location: Option<String>,
    #[serde(default)]
    pub executing: Option<String>,
    #[serde(default)]
    pub superinten: Option<String>,
    #[serde(default)]
    pub baseline_s: Option<String>,
    #[serde(default)]
    pub baseline_f: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub finish_date: Option<String>,
    #[serde(default)]
    pub early_start: Option<String>,
    #[serde(default)]
    pub early_finish: Option<String>,
    #[serde(default)]
    pub late_start: Option<String>,
    #[serde(default)]
    pub late_finish: Option<String>,
    /// Dates, or the literal `"NA"` for tasks that have not started.
    #[serde(default)]
    pub actual_start: Option<String>,
    #[serde(default)]
    pub actual_finish: Option<String>,
    #[serde(default)]
    pub percent_c: Option<NumOrText>,
    #[serde(default)]
    pub percent_w: Option<NumOrText>,
    #[serde(default)]
    pub duration: Option<NumOrText>,
    #[serde(default)]
    pub calendar: Option<String>,
    #[serde(default)]
    pub total_float: Option<String>,
    /// The export repeats the unique-id column twice more.
    #[serde(default)]
    pub unique_id2: Option<String>,
    #[serde(default)]
    pub unique_id3: Option<String>,
    #[serde(default, rename = "constraint")]
    pub task_constraint: Option<String>,
    #[serde(default)]
    pub sow_para: Option<String>,
    #[serde(default)]
    pub rcc_rtr: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

pub static COLUMNS: &[ColumnDef<MspTask>] = &[
    ColumnDef {
        id: "work_item",
        header: "Work_Item",
        cell: |t: &MspTask| dash(&t.work_item),
        sortable: true,
    },
    ColumnDef {
        id: "unique_id",
        header: "Unique_ID",
        cell: |t: &MspTask| dash(&t.unique_id),
        sortable: true,
    },
    ColumnDef {
        id: "task_name",
        header: "Task_Nam",
        cell: |t: &MspTask| dash(&t.task_name),
        sortable: true,
    },
    ColumnDef {
        id: "icn",
        header: "ICN",
        cell: |t: &MspTask| dash(&t.icn),
        sortable: true,
    },
    ColumnDef {
        id: "key_event_milestone_system",
        header: "Key Event Milestone: System",
        cell: |t: &MspTask| dash(&t.key_event_milestone_system),
        sortable: true,
    },
    ColumnDef {
        id: "component_location",
        header: "Component Location",
        cell: |t: &MspTask| dash(&t.component_location),
        sortable: true,
    },
    ColumnDef {
        id: "executing",
        header: "Executing",
        cell: |t: &MspTask| dash(&t.executing),
        sortable: true,
    },
    ColumnDef {
        id: "superinten",
        header: "Superinten",
        cell: |t: &MspTask| dash(&t.superinten),
        sortable: true,
    },
    ColumnDef {
        id: "baseline_s",
        header: "Baseline_S",
        cell: |t: &MspTask| date(&t.baseline_s),
        sortable: true,
    },
    ColumnDef {
        id: "baseline_f",
        header: "Baseline_F",
        cell: |t: &MspTask| date(&t.baseline_f),
        sortable: true,
    },
    ColumnDef {
        id: "start_date",
        header: "Start_Date",
        cell: |t: &MspTask| date(&t.start_date),
        sortable: true,
    },
    ColumnDef {
        id: "finish_date",
        header: "Finish_Date",
        cell: |t: &MspTask| date(&t.finish_date),
        sortable: true,
    },
    ColumnDef {
        id: "early_start",
        header: "Early_Start",
        cell: |t: &MspTask| date(&t.early_start),
        sortable: true,
    },
    ColumnDef {
        id: "early_finish",
        header: "Early_Finish",
        cell: |t: &MspTask| date(&t.early_finish),
        sortable: true,
    },
    ColumnDef {
        id: "late_start",
        header: "Late_Start",
        cell: |t: &MspTask| date(&t.late_start),
        sortable: true,
    },
    ColumnDef {
        id: "late_finish",
        header: "Late_Finish",
        cell: |t: &MspTask| date(&t.late_finish),
        sortable: true,
    },
    ColumnDef {
        id: "actual_start",
        header: "Actual_Start",
        cell: |t: &MspTask| date_or_na(&t.actual_start),
        sortable: true,
    },
    ColumnDef {
        id: "actual_finish",
        header: "Actual_Finish",
        cell: |t: &MspTask| date_or_na(&t.actual_finish),
        sortable: true,
    },
    ColumnDef {
        id: "percent_c",
        header: "Percent_C",
        cell: |t: &MspTask| number(&t.percent_c),
        sortable: true,
    },
    ColumnDef {
        id: "percent_w",
        header: "Percent_W",
        cell: |t: &MspTask| number(&t.percent_w),
        sortable: true,
    },
    ColumnDef {
        id: "duration",
        header: "Duration",
        cell: |t: &MspTask| duration_days(&t.duration),
        sortable: true,
    },
    ColumnDef {
        id: "calendar",
        header: "Calendar_",
        cell: |t: &MspTask| dash(&t.calendar),
        sortable: true,
    },
    ColumnDef {
        id: "total_float",
        header: "Total_Float",
        cell: |t: &MspTask| dash(&t.total_float),
        sortable: true,
    },
    ColumnDef {
        id: "unique_id2",
        header: "Unique_ID",
        cell: |t: &MspTask| dash(&t.unique_id2),
        sortable: true,
    },
    ColumnDef {
        id: "unique_id3",
        header: "Unique_ID",
        cell: |t: &MspTask| dash(&t.unique_id3),
        sortable: true,
    },
    ColumnDef {
        id: "constraint",
        header: "Constraint",
        cell: |t: &MspTask| dash(&t.task_constraint),
        sortable: true,
    },
    ColumnDef {
        id: "sow_para",
        header: "SOW_Para",
        cell: |t: &MspTask| dash(&t.sow_para),
        sortable: true,
    },
    ColumnDef {
        id: "rcc_rtr",
        header: "RCC_RTR",
        cell: |t: &MspTask| dash(&t.rcc_rtr),
        sortable: true,
    },
    ColumnDef {
        id: "summary",
        header: "Summary",
        cell: |t: &MspTask| dash(&t.summary),
        sortable: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_cells_handle_na_dates_and_durations() {
        let t = MspTask {
            task_name: Some("USS GRAVELY (DDG 107) FY26 SRA".to_string()),
            baseline_s: Some("2024-01-12".to_string()),
            actual_start: Some("NA".to_string()),
            duration: Some(NumOrText::Text("192.8".to_string())),
            percent_c: None,
            ..MspTask::default()
        };
        let cell = |id: &str| {
            COLUMNS
                .iter()
                .find(|c| c.id == id)
                .map(|c| (c.cell)(&t))
                .unwrap()
        };
        assert_eq!(cell("task_name"), "USS GRAVELY (DDG 107) FY26 SRA");
        assert_eq!(cell("baseline_s"), "01/12/2024");
        assert_eq!(cell("actual_start"), "NA");
        assert_eq!(cell("duration"), "192.8");
        assert_eq!(cell("percent_c"), "0");
    }

    #[test]
    fn repeated_unique_id_columns_keep_distinct_ids() {
        let ids: Vec<_> = COLUMNS.iter().map(|c| c.id).collect();
        let mut dedup = ids.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(ids.len(), dedup.len());
    }

    #[test]
    fn constraint_field_keeps_its_wire_name() {
        let json = serde_json::json!({"constraint": "As Soon As Possible"});
        let t: MspTask = serde_json::from_value(json).unwrap();
        assert_eq!(t.task_constraint.as_deref(), Some("As Soon As Possible"));
    }
}
