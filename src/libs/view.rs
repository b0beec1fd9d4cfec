//! Terminal table rendering for entries, master data and reports.

use crate::libs::entry::WorkEntry;
use crate::libs::master::{Personnel, Project, Status};
use crate::libs::messages::Message;
use crate::libs::report::contribution::AssigneeContribution;
use crate::libs::report::conversion::ConversionReport;
use crate::libs::report::delay::{DelayAnalysis, DelayedTask};
use crate::libs::report::target::ProjectAchievement;
use crate::libs::report::workload::WorkloadReport;
use crate::libs::report::ReportResult;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};
use std::collections::BTreeMap;

pub struct View {}

impl View {
    pub fn entries(entries: &[WorkEntry]) -> Result<()> {
        if entries.is_empty() {
            msg_print!(Message::EntriesNotFound);
            return Ok(());
        }
        let mut table = Table::new();
        table.add_row(row!["ID", "DATE", "PROJECT", "ACTIVITY", "ASSIGNED TO", "HOURS", "STATUS", "TARGET"]);
        for entry in entries {
            table.add_row(row![
                entry.id.unwrap_or(0),
                entry.date.format("%Y-%m-%d"),
                entry.project_name,
                entry.activity,
                entry.assigned_to,
                format!("{:.2}", entry.hours),
                entry.final_status,
                entry.target_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            ]);
        }
        table.printstd();
        Ok(())
    }

    pub fn projects(projects: &[Project]) -> Result<()> {
        if projects.is_empty() {
            msg_print!(Message::ProjectsNotFound);
            return Ok(());
        }
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "CLIENT", "MANAGER", "LOCATION", "TIMELINE"]);
        for project in projects {
            table.add_row(row![
                project.id.unwrap_or(0),
                project.name,
                project.client,
                project.manager,
                project.location,
                project.timeline
            ]);
        }
        table.printstd();
        Ok(())
    }

    pub fn personnel(personnel: &[Personnel]) -> Result<()> {
        if personnel.is_empty() {
            msg_print!(Message::PersonnelListEmpty);
            return Ok(());
        }
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "EMAIL"]);
        for person in personnel {
            table.add_row(row![
                person.id.unwrap_or(0),
                person.name,
                person.email.clone().unwrap_or_default()
            ]);
        }
        table.printstd();
        Ok(())
    }

    pub fn statuses(statuses: &[Status]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "COLOR", "ORDER"]);
        for status in statuses {
            table.add_row(row![
                status.id.unwrap_or(0),
                status.name,
                status.color.clone().unwrap_or_default(),
                status.order.unwrap_or(0)
            ]);
        }
        table.printstd();
        Ok(())
    }

    pub fn report(result: &ReportResult) -> Result<()> {
        match result {
            ReportResult::Delay(analysis) => Self::delay(analysis),
            ReportResult::Workload(report) => Self::workload(report),
            ReportResult::Target(rows) => Self::target(rows),
            ReportResult::StatusConversion(report) => Self::conversion(report),
            ReportResult::Contribution(rows) => Self::contribution(rows),
            ReportResult::Entries { entries, status_counts } => Self::entries_with_counts(entries, status_counts),
        }
    }

    pub fn delay(analysis: &DelayAnalysis) -> Result<()> {
        msg_print!(Message::DelaySummary(
            analysis.overdue_count(),
            analysis.due_today_count(),
            analysis.upcoming_count()
        ));
        Self::delay_section("OVERDUE", &analysis.overdue)?;
        Self::delay_section("DUE TODAY", &analysis.due_today)?;
        Self::delay_section("UPCOMING", &analysis.upcoming)?;
        Ok(())
    }

    fn delay_section(title: &str, tasks: &[DelayedTask]) -> Result<()> {
        if tasks.is_empty() {
            return Ok(());
        }
        msg_print!(Message::Custom(title.to_string()), true);
        let mut table = Table::new();
        table.add_row(row!["PROJECT", "ACTIVITY", "ASSIGNED TO", "TARGET", "STATUS", "DAYS", "DELAY %"]);
        for task in tasks {
            table.add_row(row![
                task.project_name,
                task.activity,
                task.assigned_to,
                task.target_date.format("%Y-%m-%d"),
                task.current_status,
                task.days_diff,
                format!("{}%", task.delay_percentage),
            ]);
        }
        table.printstd();
        Ok(())
    }

    pub fn workload(report: &WorkloadReport) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row![
            "ASSIGNEE", "TASKS", "HOURS", "COMPLETED", "ONGOING", "NOT STARTED", "OVERDUE", "UPCOMING", "PROJECTS"
        ]);
        for assignee in &report.rows {
            table.add_row(row![
                assignee.assignee,
                assignee.total_tasks,
                format!("{:.2}", assignee.total_hours),
                assignee.completed_tasks,
                assignee.ongoing_tasks,
                assignee.not_started_tasks,
                assignee.overdue_tasks,
                assignee.upcoming_deadlines,
                assignee.projects.len(),
            ]);
        }
        table.printstd();
        msg_print!(Message::Custom(format!(
            "Total: {} tasks, {:.2} hours",
            report.total_tasks, report.total_hours
        )));
        Ok(())
    }

    pub fn target(rows: &[ProjectAchievement]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row![
            "PROJECT", "TASKS", "COMPLETED", "ONGOING", "NOT STARTED", "WITH TARGET", "DELAYED", "RATE"
        ]);
        for project in rows {
            table.add_row(row![
                project.project_name,
                project.total_tasks,
                project.completed_tasks,
                project.ongoing_tasks,
                project.not_started_tasks,
                project.tasks_with_target,
                project.tasks_delayed,
                format!("{}%", project.achievement_rate),
            ]);
        }
        table.printstd();
        Ok(())
    }

    pub fn conversion(report: &ConversionReport) -> Result<()> {
        if report.total_conversions > report.records.len() {
            msg_print!(Message::ConversionRecordsCapped(
                report.total_conversions as u64,
                report.records.len()
            ));
        }
        let mut table = Table::new();
        table.add_row(row!["WHEN", "PROJECT", "ACTIVITY", "ASSIGNED TO", "FROM", "TO"]);
        for record in &report.records {
            table.add_row(row![
                record.timestamp.format("%Y-%m-%d %H:%M"),
                record.project_name,
                record.activity,
                record.assigned_to,
                record.from_label,
                record.to_label,
            ]);
        }
        table.printstd();

        if !report.matrix.is_empty() {
            msg_print!(Message::Custom("TRANSITION MATRIX".to_string()), true);
            let mut matrix = Table::new();
            matrix.add_row(row!["FROM", "TO", "COUNT"]);
            for (from, targets) in &report.matrix {
                for (to, count) in targets {
                    matrix.add_row(row![from, to, count]);
                }
            }
            matrix.printstd();
        }
        Ok(())
    }

    pub fn contribution(rows: &[AssigneeContribution]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row![
            "ASSIGNEE", "TASKS", "COMPLETED", "HOURS", "COMPLETED HRS", "PROJECTS", "AVG HRS/TASK", "SCORE"
        ]);
        for assignee in rows {
            table.add_row(row![
                assignee.assignee,
                assignee.total_tasks,
                assignee.completed_tasks,
                format!("{:.2}", assignee.total_hours),
                format!("{:.2}", assignee.completed_hours),
                assignee.projects_count,
                format!("{:.1}", assignee.average_hours_per_task),
                assignee.contribution_score,
            ]);
        }
        table.printstd();
        Ok(())
    }

    fn entries_with_counts(entries: &[WorkEntry], status_counts: &BTreeMap<String, usize>) -> Result<()> {
        Self::entries(entries)?;
        if !status_counts.is_empty() {
            let mut table = Table::new();
            table.add_row(row!["STATUS", "COUNT"]);
            for (status, count) in status_counts {
                table.add_row(row![status, count]);
            }
            table.printstd();
        }
        Ok(())
    }

    pub fn migrations(history: &[(u32, String, String)]) -> Result<()> {
        msg_print!(Message::MigrationsHeader);
        let mut table = Table::new();
        table.add_row(row!["VERSION", "NAME", "APPLIED AT"]);
        for (version, name, applied_at) in history {
            table.add_row(row![version, name, applied_at]);
        }
        table.printstd();
        Ok(())
    }
}
