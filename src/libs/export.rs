//! Report and entry export in CSV, JSON and Excel formats.
//!
//! JSON exports serialize the report structures directly. CSV exports use
//! labeled sections within one file; Excel exports get a bold header row
//! and autofit columns.

use crate::libs::entry::WorkEntry;
use crate::libs::messages::Message;
use crate::libs::report::contribution::AssigneeContribution;
use crate::libs::report::conversion::ConversionReport;
use crate::libs::report::delay::{DelayAnalysis, DelayedTask};
use crate::libs::report::target::ProjectAchievement;
use crate::libs::report::workload::WorkloadReport;
use crate::libs::report::ReportResult;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("sitelog_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn export_entries(&self, entries: &[WorkEntry]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.entries_csv(entries)?,
            ExportFormat::Json => self.write_json(entries)?,
            ExportFormat::Excel => self.entries_excel(entries)?,
        }
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn export_report(&self, result: &ReportResult) -> Result<()> {
        match self.format {
            ExportFormat::Json => self.write_json(result)?,
            ExportFormat::Csv => match result {
                ReportResult::Delay(analysis) => self.delay_csv(analysis)?,
                ReportResult::Workload(report) => self.workload_csv(report)?,
                ReportResult::Target(rows) => self.target_csv(rows)?,
                ReportResult::StatusConversion(report) => self.conversion_csv(report)?,
                ReportResult::Contribution(rows) => self.contribution_csv(rows)?,
                ReportResult::Entries { entries, .. } => self.entries_csv(entries)?,
            },
            ExportFormat::Excel => match result {
                ReportResult::Delay(analysis) => self.delay_excel(analysis)?,
                ReportResult::Workload(report) => self.workload_excel(report)?,
                ReportResult::Target(rows) => self.target_excel(rows)?,
                ReportResult::StatusConversion(report) => self.conversion_excel(report)?,
                ReportResult::Contribution(rows) => self.contribution_excel(rows)?,
                ReportResult::Entries { entries, .. } => self.entries_excel(entries)?,
            },
        }
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_json<T: serde::Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn entries_csv(&self, entries: &[WorkEntry]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "Date", "Project", "Activity", "Assigned To", "Hours", "Status", "Target Date"])?;
        for entry in entries {
            wtr.write_record(&[
                entry.id.unwrap_or(0).to_string(),
                entry.date.format("%Y-%m-%d").to_string(),
                entry.project_name.clone(),
                entry.activity.clone(),
                entry.assigned_to.clone(),
                format!("{:.2}", entry.hours),
                entry.final_status.clone(),
                entry.target_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn delay_csv(&self, analysis: &DelayAnalysis) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        for (title, tasks) in [
            ("OVERDUE", &analysis.overdue),
            ("DUE TODAY", &analysis.due_today),
            ("UPCOMING", &analysis.upcoming),
        ] {
            wtr.write_record([title, "", "", "", "", "", ""])?;
            wtr.write_record(["Project", "Activity", "Assigned To", "Target", "Status", "Days", "Delay %"])?;
            for task in tasks {
                wtr.write_record(&[
                    task.project_name.clone(),
                    task.activity.clone(),
                    task.assigned_to.clone(),
                    task.target_date.format("%Y-%m-%d").to_string(),
                    task.current_status.clone(),
                    task.days_diff.to_string(),
                    format!("{}%", task.delay_percentage),
                ])?;
            }
            wtr.write_record(["", "", "", "", "", "", ""])?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn workload_csv(&self, report: &WorkloadReport) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record([
            "Assignee", "Tasks", "Hours", "Completed", "Ongoing", "Not Started", "Overdue", "Upcoming", "Projects",
        ])?;
        for row in &report.rows {
            wtr.write_record(&[
                row.assignee.clone(),
                row.total_tasks.to_string(),
                format!("{:.2}", row.total_hours),
                row.completed_tasks.to_string(),
                row.ongoing_tasks.to_string(),
                row.not_started_tasks.to_string(),
                row.overdue_tasks.to_string(),
                row.upcoming_deadlines.to_string(),
                row.projects.len().to_string(),
            ])?;
        }
        wtr.write_record(["", "", "", "", "", "", "", "", ""])?;
        wtr.write_record(&[
            "Total".to_string(),
            report.total_tasks.to_string(),
            format!("{:.2}", report.total_hours),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ])?;
        wtr.flush()?;
        Ok(())
    }

    fn target_csv(&self, rows: &[ProjectAchievement]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record([
            "Project", "Tasks", "Completed", "Ongoing", "Not Started", "With Target", "Delayed", "Achievement Rate",
        ])?;
        for row in rows {
            wtr.write_record(&[
                row.project_name.clone(),
                row.total_tasks.to_string(),
                row.completed_tasks.to_string(),
                row.ongoing_tasks.to_string(),
                row.not_started_tasks.to_string(),
                row.tasks_with_target.to_string(),
                row.tasks_delayed.to_string(),
                format!("{}%", row.achievement_rate),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn conversion_csv(&self, report: &ConversionReport) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["CONVERSIONS", "", "", "", "", ""])?;
        wtr.write_record(["When", "Project", "Activity", "Assigned To", "From", "To"])?;
        for record in &report.records {
            wtr.write_record(&[
                record.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                record.project_name.clone(),
                record.activity.clone(),
                record.assigned_to.clone(),
                record.from_label.clone(),
                record.to_label.clone(),
            ])?;
        }
        wtr.write_record(["", "", "", "", "", ""])?;
        wtr.write_record(["MATRIX", "", "", "", "", ""])?;
        wtr.write_record(["From", "To", "Count", "", "", ""])?;
        for (from, targets) in &report.matrix {
            for (to, count) in targets {
                wtr.write_record(&[from.clone(), to.clone(), count.to_string(), String::new(), String::new(), String::new()])?;
            }
        }
        wtr.write_record(["", "", "", "", "", ""])?;
        wtr.write_record(&[
            "Total Conversions".to_string(),
            report.total_conversions.to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ])?;
        wtr.flush()?;
        Ok(())
    }

    fn contribution_csv(&self, rows: &[AssigneeContribution]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record([
            "Assignee", "Tasks", "Completed", "Hours", "Completed Hours", "Projects", "Avg Hours/Task", "Score",
        ])?;
        for row in rows {
            wtr.write_record(&[
                row.assignee.clone(),
                row.total_tasks.to_string(),
                row.completed_tasks.to_string(),
                format!("{:.2}", row.total_hours),
                format!("{:.2}", row.completed_hours),
                row.projects_count.to_string(),
                format!("{:.1}", row.average_hours_per_task),
                row.contribution_score.to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn header_format() -> Format {
        Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray)
    }

    fn entries_excel(&self, entries: &[WorkEntry]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header = Self::header_format();

        for (col, title) in ["ID", "Date", "Project", "Activity", "Assigned To", "Hours", "Status", "Target Date"]
            .iter()
            .enumerate()
        {
            worksheet.write_string_with_format(0, col as u16, *title, &header)?;
        }
        let mut row = 1;
        for entry in entries {
            worksheet.write_number(row, 0, entry.id.unwrap_or(0) as f64)?;
            worksheet.write_string(row, 1, entry.date.format("%Y-%m-%d").to_string())?;
            worksheet.write_string(row, 2, &entry.project_name)?;
            worksheet.write_string(row, 3, &entry.activity)?;
            worksheet.write_string(row, 4, &entry.assigned_to)?;
            worksheet.write_number(row, 5, entry.hours)?;
            worksheet.write_string(row, 6, &entry.final_status)?;
            worksheet.write_string(
                row,
                7,
                entry.target_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            )?;
            row += 1;
        }
        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn delay_excel(&self, analysis: &DelayAnalysis) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header = Self::header_format();

        let mut row = 0;
        for (title, tasks) in [
            ("OVERDUE", &analysis.overdue),
            ("DUE TODAY", &analysis.due_today),
            ("UPCOMING", &analysis.upcoming),
        ] {
            worksheet.write_string_with_format(row, 0, title, &header)?;
            row += 1;
            for (col, label) in ["Project", "Activity", "Assigned To", "Target", "Status", "Days", "Delay %"]
                .iter()
                .enumerate()
            {
                worksheet.write_string_with_format(row, col as u16, *label, &header)?;
            }
            row += 1;
            row = Self::delay_rows(worksheet, row, tasks)?;
            row += 1;
        }
        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn delay_rows(worksheet: &mut Worksheet, mut row: u32, tasks: &[DelayedTask]) -> Result<u32> {
        for task in tasks {
            worksheet.write_string(row, 0, &task.project_name)?;
            worksheet.write_string(row, 1, &task.activity)?;
            worksheet.write_string(row, 2, &task.assigned_to)?;
            worksheet.write_string(row, 3, task.target_date.format("%Y-%m-%d").to_string())?;
            worksheet.write_string(row, 4, &task.current_status)?;
            worksheet.write_number(row, 5, task.days_diff as f64)?;
            worksheet.write_string(row, 6, format!("{}%", task.delay_percentage))?;
            row += 1;
        }
        Ok(row)
    }

    fn workload_excel(&self, report: &WorkloadReport) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header = Self::header_format();

        for (col, title) in ["Assignee", "Tasks", "Hours", "Completed", "Ongoing", "Not Started", "Overdue", "Upcoming", "Projects"]
            .iter()
            .enumerate()
        {
            worksheet.write_string_with_format(0, col as u16, *title, &header)?;
        }
        let mut row = 1;
        for assignee in &report.rows {
            worksheet.write_string(row, 0, &assignee.assignee)?;
            worksheet.write_number(row, 1, assignee.total_tasks as f64)?;
            worksheet.write_number(row, 2, assignee.total_hours)?;
            worksheet.write_number(row, 3, assignee.completed_tasks as f64)?;
            worksheet.write_number(row, 4, assignee.ongoing_tasks as f64)?;
            worksheet.write_number(row, 5, assignee.not_started_tasks as f64)?;
            worksheet.write_number(row, 6, assignee.overdue_tasks as f64)?;
            worksheet.write_number(row, 7, assignee.upcoming_deadlines as f64)?;
            worksheet.write_number(row, 8, assignee.projects.len() as f64)?;
            row += 1;
        }
        row += 1;
        worksheet.write_string_with_format(row, 0, "Total", &header)?;
        worksheet.write_number(row, 1, report.total_tasks as f64)?;
        worksheet.write_number(row, 2, report.total_hours)?;
        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn target_excel(&self, rows: &[ProjectAchievement]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header = Self::header_format();

        for (col, title) in ["Project", "Tasks", "Completed", "Ongoing", "Not Started", "With Target", "Delayed", "Achievement Rate"]
            .iter()
            .enumerate()
        {
            worksheet.write_string_with_format(0, col as u16, *title, &header)?;
        }
        let mut row = 1;
        for project in rows {
            worksheet.write_string(row, 0, &project.project_name)?;
            worksheet.write_number(row, 1, project.total_tasks as f64)?;
            worksheet.write_number(row, 2, project.completed_tasks as f64)?;
            worksheet.write_number(row, 3, project.ongoing_tasks as f64)?;
            worksheet.write_number(row, 4, project.not_started_tasks as f64)?;
            worksheet.write_number(row, 5, project.tasks_with_target as f64)?;
            worksheet.write_number(row, 6, project.tasks_delayed as f64)?;
            worksheet.write_string(row, 7, format!("{}%", project.achievement_rate))?;
            row += 1;
        }
        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn conversion_excel(&self, report: &ConversionReport) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header = Self::header_format();

        worksheet.write_string_with_format(0, 0, "CONVERSIONS", &header)?;
        for (col, title) in ["When", "Project", "Activity", "Assigned To", "From", "To"].iter().enumerate() {
            worksheet.write_string_with_format(1, col as u16, *title, &header)?;
        }
        let mut row = 2;
        for record in &report.records {
            worksheet.write_string(row, 0, record.timestamp.format("%Y-%m-%d %H:%M").to_string())?;
            worksheet.write_string(row, 1, &record.project_name)?;
            worksheet.write_string(row, 2, &record.activity)?;
            worksheet.write_string(row, 3, &record.assigned_to)?;
            worksheet.write_string(row, 4, &record.from_label)?;
            worksheet.write_string(row, 5, &record.to_label)?;
            row += 1;
        }

        row += 1;
        worksheet.write_string_with_format(row, 0, "MATRIX", &header)?;
        row += 1;
        for (col, title) in ["From", "To", "Count"].iter().enumerate() {
            worksheet.write_string_with_format(row, col as u16, *title, &header)?;
        }
        row += 1;
        for (from, targets) in &report.matrix {
            for (to, count) in targets {
                worksheet.write_string(row, 0, from)?;
                worksheet.write_string(row, 1, to)?;
                worksheet.write_number(row, 2, *count as f64)?;
                row += 1;
            }
        }
        row += 1;
        worksheet.write_string(row, 0, "Total Conversions")?;
        worksheet.write_number(row, 1, report.total_conversions as f64)?;
        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn contribution_excel(&self, rows: &[AssigneeContribution]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header = Self::header_format();

        for (col, title) in ["Assignee", "Tasks", "Completed", "Hours", "Completed Hours", "Projects", "Avg Hours/Task", "Score"]
            .iter()
            .enumerate()
        {
            worksheet.write_string_with_format(0, col as u16, *title, &header)?;
        }
        let mut row = 1;
        for assignee in rows {
            worksheet.write_string(row, 0, &assignee.assignee)?;
            worksheet.write_number(row, 1, assignee.total_tasks as f64)?;
            worksheet.write_number(row, 2, assignee.completed_tasks as f64)?;
            worksheet.write_number(row, 3, assignee.total_hours)?;
            worksheet.write_number(row, 4, assignee.completed_hours)?;
            worksheet.write_number(row, 5, assignee.projects_count as f64)?;
            worksheet.write_number(row, 6, assignee.average_hours_per_task)?;
            worksheet.write_number(row, 7, assignee.contribution_score as f64)?;
            row += 1;
        }
        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
