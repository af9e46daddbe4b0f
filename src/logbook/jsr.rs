//! Job summary report (JSR).
//!
//! Cost and labor rollup per task. Like the master schedule this arrives as
//! an export, not a list endpoint; the grid runs in local mode over the
//! built-in dataset.

use serde::{Deserialize, Serialize};

use crate::grid::ColumnDef;

use super::format::{NumOrText, dash, fixed2, number, percent2};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsrLine {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub task_num: Option<String>,
    #[serde(default)]
    pub task_note: Option<String>,
    #[serde(default)]
    pub task_ra: Option<String>,
    #[serde(default)]
    pub task_job: Option<String>,
    #[serde(default)]
    pub spec_item: Option<String>,
    #[serde(default)]
    pub comp_percent: Option<NumOrText>,
    #[serde(default, rename = "mod")]
    pub contract_mod: Option<String>,
    #[serde(default)]
    pub clin: Option<String>,
    #[serde(default)]
    pub budget_hrs: Option<NumOrText>,
    #[serde(default)]
    pub budget_ot_hrs: Option<NumOrText>,
    #[serde(default)]
    pub actual_total: Option<NumOrText>,
    #[serde(default)]
    pub actual_ot: Option<NumOrText>,
    #[serde(default)]
    pub average_labor: Option<NumOrText>,
    #[serde(default)]
    pub eac_labor: Option<NumOrText>,
    #[serde(default)]
    pub budget_material: Option<NumOrText>,
    #[serde(default)]
    pub actual_material: Option<NumOrText>,
    #[serde(default)]
    pub eac_material: Option<NumOrText>,
    #[serde(default)]
    pub budget_sub: Option<NumOrText>,
    #[serde(default)]
    pub actual_sub: Option<NumOrText>,
    #[serde(default)]
    pub eac_sub: Option<NumOrText>,
    #[serde(default)]
    pub zero_cost_revenue: Option<NumOrText>,
    #[serde(default)]
    pub contract_value: Option<NumOrText>,
    #[serde(default)]
    pub current_direct: Option<NumOrText>,
    #[serde(default)]
    pub eac_eac: Option<NumOrText>,
    #[serde(default)]
    pub projected_margin: Option<NumOrText>,
    #[serde(default)]
    pub projected_profit_percent: Option<NumOrText>,
}

pub static COLUMNS: &[ColumnDef<JsrLine>] = &[
    ColumnDef {
        id: "task_num",
        header: "Task Num",
        cell: |l: &JsrLine| dash(&l.task_num),
        sortable: true,
    },
    ColumnDef {
        id: "task_note",
        header: "Task Note",
        cell: |l: &JsrLine| dash(&l.task_note),
        sortable: true,
    },
    ColumnDef {
        id: "task_ra",
        header: "Task RA",
        cell: |l: &JsrLine| dash(&l.task_ra),
        sortable: true,
    },
    ColumnDef {
        id: "task_job",
        header: "Task Job",
        cell: |l: &JsrLine| dash(&l.task_job),
        sortable: true,
    },
    ColumnDef {
        id: "spec_item",
        header: "Spec Item",
        cell: |l: &JsrLine| dash(&l.spec_item),
        sortable: true,
    },
    ColumnDef {
        id: "comp_percent",
        header: "Comp %",
        cell: |l: &JsrLine| percent2(&l.comp_percent),
        sortable: true,
    },
    ColumnDef {
        id: "mod",
        header: "Mod",
        cell: |l: &JsrLine| dash(&l.contract_mod),
        sortable: true,
    },
    ColumnDef {
        id: "clin",
        header: "CLIN",
        cell: |l: &JsrLine| dash(&l.clin),
        sortable: true,
    },
    ColumnDef {
        id: "budget_hrs",
        header: "Budget Hrs",
        cell: |l: &JsrLine| fixed2(&l.budget_hrs),
        sortable: true,
    },
    ColumnDef {
        id: "budget_ot_hrs",
        header: "Budget OT Hrs",
        cell: |l: &JsrLine| fixed2(&l.budget_ot_hrs),
        sortable: true,
    },
    ColumnDef {
        id: "actual_total",
        header: "Actual Total",
        cell: |l: &JsrLine| fixed2(&l.actual_total),
        sortable: true,
    },
    ColumnDef {
        id: "actual_ot",
        header: "Actual OT",
        cell: |l: &JsrLine| fixed2(&l.actual_ot),
        sortable: true,
    },
    ColumnDef {
        id: "average_labor",
        header: "Average Labor",
        cell: |l: &JsrLine| fixed2(&l.average_labor),
        sortable: true,
    },
    ColumnDef {
        id: "eac_labor",
        header: "EAC Labor",
        cell: |l: &JsrLine| fixed2(&l.eac_labor),
        sortable: true,
    },
    ColumnDef {
        id: "budget_material",
        header: "Budget Material",
        cell: |l: &JsrLine| fixed2(&l.budget_material),
        sortable: true,
    },
    ColumnDef {
        id: "actual_material",
        header: "Actual Material",
        cell: |l: &JsrLine| fixed2(&l.actual_material),
        sortable: true,
    },
    ColumnDef {
        id: "eac_material",
        header: "EAC Material",
        cell: |l: &JsrLine| fixed2(&l.eac_material),
        sortable: true,
    },
    ColumnDef {
        id: "budget_sub",
        header: "Budget Sub",
        cell: |l: &JsrLine| fixed2(&l.budget_sub),
        sortable: true,
    },
    ColumnDef {
        id: "actual_sub",
        header: "Actual Sub",
        cell: |l: &JsrLine| fixed2(&l.actual_sub),
        sortable: true,
    },
    ColumnDef {
        id: "eac_sub",
        header: "EAC Sub",
        cell: |l: &JsrLine| fixed2(&l.eac_sub),
        sortable: true,
    },
    ColumnDef {
        id: "zero_cost_revenue",
        header: "Zero Cost Revenue",
        cell: |l: &JsrLine| fixed2(&l.zero_cost_revenue),
        sortable: true,
    },
    ColumnDef {
        id: "contract_value",
        header: "Contract Value",
        cell: |l: &JsrLine| fixed2(&l.contract_value),
        sortable: true,
    },
    ColumnDef {
        id: "current_direct",
        header: "Current Direct",
        cell: |l: &JsrLine| fixed2(&l.current_direct),
        sortable: true,
    },
    ColumnDef {
        id: "eac_eac",
        header: "EAC EAC",
        cell: |l: &JsrLine| percent2(&l.eac_eac),
        sortable: true,
    },
    ColumnDef {
        id: "projected_margin",
        header: "Projected Margin",
        cell: |l: &JsrLine| percent2(&l.projected_margin),
        sortable: true,
    },
    ColumnDef {
        id: "projected_profit_percent",
        header: "Projected Profit %",
        cell: |l: &JsrLine| number(&l.projected_profit_percent),
        sortable: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_cells_render_money_and_percent_styles() {
        let l = JsrLine {
            task_num: Some("000".to_string()),
            actual_total: Some(NumOrText::Num(1166.0)),
            average_labor: Some(NumOrText::Num(54.18)),
            current_direct: Some(NumOrText::Num(63176.21)),
            comp_percent: Some(NumOrText::Num(0.0)),
            ..JsrLine::default()
        };
        let cell = |id: &str| {
            COLUMNS
                .iter()
                .find(|c| c.id == id)
                .map(|c| (c.cell)(&l))
                .unwrap()
        };
        assert_eq!(cell("task_num"), "000");
        assert_eq!(cell("actual_total"), "1,166.00");
        assert_eq!(cell("average_labor"), "54.18");
        assert_eq!(cell("current_direct"), "63,176.21");
        assert_eq!(cell("comp_percent"), "0.00 %");
        // Unset money columns fall back to 0.00, not a dash.
        assert_eq!(cell("budget_hrs"), "0.00");
    }

    #[test]
    fn mod_column_keeps_its_wire_name() {
        let json = serde_json::json!({"taskNum": "102", "mod": "P00003"});
        let l: JsrLine = serde_json::from_value(json).unwrap();
        assert_eq!(l.contract_mod.as_deref(), Some("P00003"));
        let back = serde_json::to_value(&l).unwrap();
        assert_eq!(back["mod"], "P00003");
        assert_eq!(back["taskNum"], "102");
    }
}
