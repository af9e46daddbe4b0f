//! Built-in sample rows for demo mode.
//!
//! A small, plausible slice of each logbook so the binary can run offline
//! with every page in local grid mode.

use super::cfr::CfrEntry;
use super::format::NumOrText;
use super::glossary::GlossaryTerm;
use super::imports::ImportedFile;
use super::jsr::JsrLine;
use super::msp::MspTask;
use super::projects::Project;
use super::reports::RequiredReport;
use super::timesheet::TimesheetLine;
use super::tip::TipTicket;
use super::waf::WafEntry;

fn s(v: &str) -> Option<String> {
    Some(v.to_string())
}

fn n(v: f64) -> Option<NumOrText> {
    Some(NumOrText::Num(v))
}

fn na() -> Option<NumOrText> {
    Some(NumOrText::Text("N/A".to_string()))
}

pub fn projects() -> Vec<Project> {
    let names = [
        "USS Gravely FY26 Drydocking",
        "USS Mason CMAV",
        "USS Laboon SRA",
        "USS Cole EDSRA",
        "Pier 4 Crane Overhaul",
    ];
    (0..23)
        .map(|i| Project {
            id: s(&format!("{}", 103_560 + i)),
            project_name: s(&format!("{} ({})", names[i % names.len()], 2024 + i % 3)),
        })
        .collect()
}

pub fn cfr_entries() -> Vec<CfrEntry> {
    vec![
        CfrEntry {
            id: s("1"),
            cr: s("001"),
            spec_item: s("123-11-002 (E1)"),
            created_date: s("2025-11-28"),
            submitted_date: s("2025-12-04"),
            total_days_from_created_and_submitted: n(6.0),
            total_days_from_submitted_and_settled: na(),
            title: s("Added Tank NMD Rpt 01"),
            is_sequence_required: s("Yes"),
            is_required_report: s("No"),
            follow_on_report_required: s("No"),
            tip_impact: s("Yes"),
            report_category: s("Immediate"),
            rcc_number: s("RCC 1G"),
            date_rcc_issued_for_pricing: s("2025-12-08"),
            ..CfrEntry::default()
        },
        CfrEntry {
            id: s("2"),
            cr: s("002"),
            spec_item: s("589-22-004"),
            created_date: s("2025-12-01"),
            submitted_date: s("2025-12-03"),
            total_days_from_created_and_submitted: n(2.0),
            title: s("Shaft Seal Inspection Finding"),
            answer_date: s("2025-12-15"),
            days_expended_awaiting_answer: n(12.0),
            is_sequence_required: s("No"),
            tip_impact: s("No"),
            report_category: s("Routine"),
            government_response: s("Concur"),
            ..CfrEntry::default()
        },
        CfrEntry {
            id: s("3"),
            cr: s("003"),
            spec_item: s("631-00-001"),
            created_date: s("2026-01-06"),
            title: s("Deck Preservation Rework"),
            subcontractor: s("Coastal Coatings"),
            subcontractor_report_number: s("CC-114"),
            report_category: s("Deferred"),
            ..CfrEntry::default()
        },
    ]
}

pub fn waf_entries() -> Vec<WafEntry> {
    vec![
        WafEntry {
            id: s("1"),
            waf_number: s("WAF-0042"),
            spec_item: s("561-77-001"),
            ra: s("ECR-VA"),
            space: s("2-300-0-E"),
            system: s("Steering Gear"),
            work_description: s("Hydraulic flush and sample"),
            received: s("2026-01-10"),
            request_start: s("2026-01-12"),
            date_authorized: s("2026-01-15"),
            status: s("Authorized"),
            rev: s("A"),
            ship_div: s("E-Div"),
            ra_contact: s("J. Whitfield"),
            ..WafEntry::default()
        },
        WafEntry {
            id: s("2"),
            waf_number: s("WAF-0057"),
            spec_item: s("512-40-003"),
            ra: s("ECR-VA"),
            space: s("1-120-2-L"),
            system: s("Vent Heating"),
            work_description: s("Duct blank removal"),
            received: s("2026-01-18"),
            status: s("Pending"),
            tag: s("Danger"),
            danger_tags_number_listed: s("DT-2241, DT-2242"),
            ..WafEntry::default()
        },
        WafEntry {
            id: s("3"),
            waf_number: s("WAF-0031"),
            spec_item: s("631-00-001"),
            system: s("Topside Preservation"),
            work_description: s("Spot blast and prime, frames 40-52"),
            received: s("2025-12-20"),
            date_authorized: s("2025-12-22"),
            completed_date: s("2026-01-08"),
            closed_date: s("2026-01-09"),
            status: s("Closed"),
            ..WafEntry::default()
        },
    ]
}

pub fn glossary_terms() -> Vec<GlossaryTerm> {
    let rows: &[(&str, &str, &str)] = &[
        ("C/R", "Change request serial within the availability", "string"),
        ("Spec Item", "Work specification item number", "string"),
        ("WAF #", "Work authorization form number", "string"),
        ("RCC Number", "Repair cost category tracking number", "string"),
        ("Key Events", "Milestones the checkpoint supports", "string"),
        ("Hours", "Labor hours charged to the job", "number"),
        ("Sat/Unsat", "Inspection outcome", "string"),
        ("Danger Tags", "Tag-out serials covering the work", "string"),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (header, desc, ty))| GlossaryTerm {
            id: Some(i as i64 + 1),
            colmn_header: s(header),
            description: s(desc),
            data_type: s(ty),
            ips: Some(i % 2 == 0),
            t_i_plan: Some(i % 3 == 0),
            cfr_log: Some(i < 4),
            rr_list: Some(false),
            itstp: Some(i % 4 == 0),
            waf_log: Some(i == 2 || i == 7),
        })
        .collect()
}

pub fn timesheet_lines() -> Vec<TimesheetLine> {
    vec![
        TimesheetLine {
            id: s("1"),
            employee_name: s("GUTIERREZ, DIEGO"),
            badge_number: s("2334"),
            employee_division: s("ECR-VA"),
            date: s("2025-11-10"),
            project: s("103576"),
            task: s("000"),
            item: s("000"),
            repair_activity: s("ECR-VA"),
            title: s("SENIOR PROJECT MANAGER"),
            trade: s("PROJECT MGR"),
            dept: s("PD"),
            hours: n(8.0),
            time_type: s("ST"),
            ..TimesheetLine::default()
        },
        TimesheetLine {
            id: s("2"),
            employee_name: s("OKAFOR, MARIE"),
            badge_number: s("4112"),
            employee_division: s("ECR-VA"),
            date: s("2025-11-10"),
            project: s("103576"),
            task: s("102"),
            item: s("561-77-001"),
            title: s("MARINE MACHINIST"),
            trade: s("MACHINIST"),
            dept: s("OM"),
            hours: n(9.5),
            time_type: s("OT"),
            ..TimesheetLine::default()
        },
        TimesheetLine {
            id: s("3"),
            employee_name: s("PRICE, ANDERSON"),
            badge_number: s("3887"),
            employee_division: s("ECR-VA"),
            date: s("2025-11-11"),
            project: s("103561"),
            task: s("044"),
            item: s("631-00-001"),
            title: s("PAINTER/BLASTER"),
            trade: s("PRESERVATION"),
            dept: s("SF"),
            hours: n(8.0),
            time_type: s("ST"),
            support: s("Subcontract"),
            ..TimesheetLine::default()
        },
    ]
}

pub fn tip_tickets() -> Vec<TipTicket> {
    vec![
        TipTicket {
            id: s("1"),
            item_no: s("TIP-105"),
            shop_sub: s("17/Coastal"),
            task: s("102"),
            title: s("Steering hydraulic flush verification"),
            item_location: s("2-300-0-E"),
            inspection_type: s("G-point"),
            key_events: s("Dock trials"),
            partial_final: s("Final"),
            sat_unsat: s("SAT"),
            notify_date_time: s("2026-02-06T09:00:00"),
            checkpoint_date_time: s("2026-02-07T13:30:00"),
            completed_date_time: s("2026-02-07T14:10:00"),
            ticket_no: s("41207"),
            ..TipTicket::default()
        },
        TipTicket {
            id: s("2"),
            item_no: s("TIP-118"),
            shop_sub: s("71"),
            task: s("044"),
            title: s("Topside preservation surface readiness"),
            inspection_type: s("I-point"),
            key_events: s("Undocking"),
            partial_final: s("Partial"),
            notify_date_time: s("2026-02-09T07:30:00"),
            ticket_no: s("41233"),
            remarks: s("Awaiting humidity window"),
            ..TipTicket::default()
        },
    ]
}

pub fn msp_tasks() -> Vec<MspTask> {
    vec![
        MspTask {
            id: s("1"),
            work_item: s("0"),
            task_name: s("USS GRAVELY (DDG 107) FY26 SRA"),
            executing: s("ECRF"),
            baseline_s: s("2024-01-12"),
            baseline_f: s("2024-10-15"),
            start_date: s("2024-01-12"),
            finish_date: s("2024-10-19"),
            early_start: s("2024-01-12"),
            early_finish: s("2024-10-15"),
            late_start: s("2024-01-12"),
            late_finish: s("2024-10-19"),
            actual_start: s("NA"),
            actual_finish: s("NA"),
            percent_c: n(0.0),
            percent_w: n(0.0),
            duration: Some(NumOrText::Text("192.8".to_string())),
            total_float: s("0d"),
            task_constraint: s("As Soon As Possible"),
            summary: s("Yes"),
            ..MspTask::default()
        },
        MspTask {
            id: s("2"),
            work_item: s("102"),
            unique_id: s("1044"),
            task_name: s("Steering Gear Hydraulic Overhaul"),
            icn: s("ICN-0042"),
            key_event_milestone_system: s("Dock Trials: Steering"),
            component_location: s("2-300-0-E"),
            executing: s("ECRF"),
            superinten: s("R. Calloway"),
            baseline_s: s("2024-02-05"),
            baseline_f: s("2024-04-22"),
            start_date: s("2024-02-05"),
            finish_date: s("2024-04-25"),
            actual_start: s("2024-02-06"),
            actual_finish: s("NA"),
            percent_c: n(45.0),
            percent_w: n(40.0),
            duration: n(57.0),
            calendar: s("Standard"),
            total_float: s("3d"),
            task_constraint: s("As Soon As Possible"),
            sow_para: s("3.4.1"),
            summary: s("No"),
            ..MspTask::default()
        },
        MspTask {
            id: s("3"),
            work_item: s("044"),
            unique_id: s("1108"),
            task_name: s("Topside Preservation Frames 40-52"),
            executing: s("Coastal Coatings"),
            baseline_s: s("2024-03-01"),
            baseline_f: s("2024-06-10"),
            actual_start: s("2024-03-04"),
            percent_c: n(10.0),
            duration: n(70.0),
            summary: s("No"),
            ..MspTask::default()
        },
    ]
}

pub fn jsr_lines() -> Vec<JsrLine> {
    vec![
        JsrLine {
            id: s("1"),
            task_num: s("000"),
            task_ra: s("VA"),
            task_job: s("Admin Item"),
            spec_item: s("COD"),
            comp_percent: n(0.0),
            actual_total: n(1166.0),
            actual_ot: n(13.0),
            average_labor: n(54.18),
            eac_labor: n(1166.0),
            current_direct: n(63176.21),
            eac_eac: n(11943358.0),
            ..JsrLine::default()
        },
        JsrLine {
            id: s("2"),
            task_num: s("102"),
            task_ra: s("VA"),
            task_job: s("Steering Gear"),
            spec_item: s("561-77-001"),
            comp_percent: n(45.0),
            contract_mod: s("P00003"),
            clin: s("0001"),
            budget_hrs: n(2400.0),
            actual_total: n(1080.5),
            average_labor: n(52.4),
            eac_labor: n(2350.0),
            budget_material: n(185000.0),
            actual_material: n(92417.6),
            contract_value: n(412000.0),
            projected_margin: n(8.25),
            ..JsrLine::default()
        },
        JsrLine {
            id: s("3"),
            task_num: s("044"),
            task_ra: s("VA"),
            task_job: s("Topside Preservation"),
            spec_item: s("631-00-001"),
            comp_percent: n(10.0),
            budget_hrs: n(5200.0),
            actual_total: n(498.0),
            budget_sub: n(264000.0),
            actual_sub: n(31200.0),
            eac_sub: n(264000.0),
            ..JsrLine::default()
        },
    ]
}

pub fn required_reports() -> Vec<RequiredReport> {
    vec![
        RequiredReport {
            id: s("1"),
            report_number: n(1.0),
            nsi_fy: s("FY-26"),
            ssp: s("SRA"),
            vessel_name_and_hull: s("USS GRAVELY (DDG-107)"),
            contract: s("N0002422D402"),
            ecr_job_order: s("103576"),
            title: s("Administrative Purposes; accomplish"),
            navy_item_number: s("000-00-000"),
            work_para: s("3.1"),
            std_item: s("009-001"),
            std_item_para: s("3.2.4-3.2.4.2"),
            inspection_description_accept_criteria: s(
                "GFM Log, GFI, Overdue CFRs. Submit one legible copy to the \
                 SUPERVISOR one day prior to the weekly progress meeting.",
            ),
            ..RequiredReport::default()
        },
        RequiredReport {
            id: s("2"),
            report_number: n(2.0),
            nsi_fy: s("FY-26"),
            ssp: s("SRA"),
            vessel_name_and_hull: s("USS GRAVELY (DDG-107)"),
            contract: s("N0002422D402"),
            ecr_job_order: s("103576"),
            rcc: s("RCC 1G"),
            title: s("Tank Inspection Report, Added Tank NMD Rpt 01"),
            navy_item_number: s("123-11-002"),
            work_para: s("3.6"),
            std_item: s("009-004"),
            rpt_due_date: s("2025-12-12"),
            submit_date: s("2025-12-10"),
            answered_date: s("2025-12-18"),
            cfr_nmd_number: s("CFR-001 / NMD-01"),
            ..RequiredReport::default()
        },
    ]
}

pub fn imported_files() -> Vec<ImportedFile> {
    vec![
        ImportedFile {
            id: Some(12),
            category_id: Some(3),
            file_name: s("waf_log_2026-01.xlsx"),
            project_id: s("103576"),
            file_date: s("2026-01-31"),
            imported_at: s("2026-02-01T06:12:00"),
            is_failed_import: Some(false),
        },
        ImportedFile {
            id: Some(13),
            category_id: Some(1),
            file_name: s("timesheet_wk46.csv"),
            project_id: s("103576"),
            file_date: s("2025-11-14"),
            imported_at: s("2025-11-17T05:40:00"),
            is_failed_import: Some(true),
        },
    ]
}
