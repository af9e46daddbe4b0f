//! Required report log.
//!
//! Contract-deliverable reports per availability, with due/submit/answer
//! dates. Served from the built-in dataset; there is no list endpoint for
//! this logbook.

use serde::{Deserialize, Serialize};

use crate::grid::ColumnDef;

use super::format::{NumOrText, dash, date, number};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredReport {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub report_number: Option<NumOrText>,
    #[serde(default)]
    pub nsi_fy: Option<String>,
    #[serde(default)]
    pub ssp: Option<String>,
    #[serde(default)]
    pub vessel_name_and_hull: Option<String>,
    #[serde(default)]
    pub contract: Option<String>,
    #[serde(default)]
    pub ecr_job_order: Option<String>,
    #[serde(default)]
    pub ecr_item: Option<String>,
    #[serde(default)]
    pub rcc: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub navy_item_number: Option<String>,
    #[serde(default)]
    pub work_para: Option<String>,
    #[serde(default)]
    pub std_item: Option<String>,
    #[serde(default)]
    pub std_item_para: Option<String>,
    #[serde(default)]
    pub inspection_description_accept_criteria: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub rpt_due_date: Option<String>,
    #[serde(default)]
    pub submit_date: Option<String>,
    #[serde(default)]
    pub answered_date: Option<String>,
    #[serde(default)]
    pub cfr_nmd_number: Option<String>,
}

pub static COLUMNS: &[ColumnDef<RequiredReport>] = &[
    ColumnDef {
        id: "report_number",
        header: "Report #",
        cell: |r: &RequiredReport| number(&r.report_number),
        sortable: true,
    },
    ColumnDef {
        id: "nsi_fy",
        header: "NSI FY",
        cell: |r: &RequiredReport| dash(&r.nsi_fy),
        sortable: true,
    },
    ColumnDef {
        id: "ssp",
        header: "SSP",
        cell: |r: &RequiredReport| dash(&r.ssp),
        sortable: true,
    },
    ColumnDef {
        id: "vessel_name_and_hull",
        header: "Vessel Name and Hull",
        cell: |r: &RequiredReport| dash(&r.vessel_name_and_hull),
        sortable: true,
    },
    ColumnDef {
        id: "contract",
        header: "Contract",
        cell: |r: &RequiredReport| dash(&r.contract),
        sortable: true,
    },
    ColumnDef {
        id: "ecr_job_order",
        header: "ECR Job Order",
        cell: |r: &RequiredReport| dash(&r.ecr_job_order),
        sortable: true,
    },
    ColumnDef {
        id: "ecr_item",
        header: "ECR Item",
        cell: |r: &RequiredReport| dash(&r.ecr_item),
        sortable: true,
    },
    ColumnDef {
        id: "rcc",
        header: "RCC",
        cell: |r: &RequiredReport| dash(&r.rcc),
        sortable: true,
    },
    ColumnDef {
        id: "title",
        header: "Title",
        cell: |r: &RequiredReport| dash(&r.title),
        sortable: true,
    },
    ColumnDef {
        id: "navy_item_number",
        header: "Navy Item Number",
        cell: |r: &RequiredReport| dash(&r.navy_item_number),
        sortable: true,
    },
    ColumnDef {
        id: "work_para",
        header: "Work Para",
        cell: |r: &RequiredReport| dash(&r.work_para),
        sortable: true,
    },
    ColumnDef {
        id: "std_item",
        header: "STD Item",
        cell: |r: &RequiredReport| dash(&r.std_item),
        sortable: true,
    },
    ColumnDef {
        id: "std_item_para",
        header: "STD Item Para",
        cell: |r: &RequiredReport| dash(&r.std_item_para),
        sortable: true,
    },
    ColumnDef {
        id: "inspection_description_accept_criteria",
        header: "Inspection Description / Accept Criteria",
        cell: |r: &RequiredReport| dash(&r.inspection_description_accept_criteria),
        sortable: true,
    },
    ColumnDef {
        id: "remarks",
        header: "Remarks",
        cell: |r: &RequiredReport| dash(&r.remarks),
        sortable: true,
    },
    ColumnDef {
        id: "rpt_due_date",
        header: "RPT DUE DATE",
        cell: |r: &RequiredReport| date(&r.rpt_due_date),
        sortable: true,
    },
    ColumnDef {
        id: "submit_date",
        header: "Submit Date",
        cell: |r: &RequiredReport| date(&r.submit_date),
        sortable: true,
    },
    ColumnDef {
        id: "answered_date",
        header: "Answered Date",
        cell: |r: &RequiredReport| date(&r.answered_date),
        sortable: true,
    },
    ColumnDef {
        id: "cfr_nmd_number",
        header: "CFR # NMD #",
        cell: |r: &RequiredReport| dash(&r.cfr_nmd_number),
        sortable: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_cells_render_numbers_dates_and_dashes() {
        let r = RequiredReport {
            report_number: Some(NumOrText::Num(1.0)),
            nsi_fy: Some("FY-26".to_string()),
            vessel_name_and_hull: Some("USS GRAVELY (DDG-107)".to_string()),
            rpt_due_date: None,
            submit_date: Some("2026-02-10".to_string()),
            ..RequiredReport::default()
        };
        let cell = |id: &str| {
            COLUMNS
                .iter()
                .find(|c| c.id == id)
                .map(|c| (c.cell)(&r))
                .unwrap()
        };
        assert_eq!(cell("report_number"), "1");
        assert_eq!(cell("nsi_fy"), "FY-26");
        assert_eq!(cell("vessel_name_and_hull"), "USS GRAVELY (DDG-107)");
        assert_eq!(cell("rpt_due_date"), "-");
        assert_eq!(cell("submit_date"), "02/10/2026");
        assert_eq!(cell("cfr_nmd_number"), "-");
    }
}
