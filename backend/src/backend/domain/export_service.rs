//! CSV export for the volunteer management view.
//!
//! Generates the fixed-header export over the current filtered view (or a
//! selection of it), either as in-memory CSV content or written straight
//! to a directory on disk.

use anyhow::{Context, Result};
use chrono::Utc;
use log::{error, info};
use std::fs;
use std::path::PathBuf;

use crate::backend::domain::commands::export::{
    ExportDataResult, ExportToPathCommand, ExportToPathResult, ExportVolunteersCommand,
};
use crate::backend::domain::models::volunteer::Volunteer;
use crate::backend::domain::volunteer_service::{VolunteerSelection, VolunteerService};

/// Fixed CSV header row, in column order.
pub const EXPORT_HEADERS: [&str; 7] = ["Name", "CNIC", "Phone", "WhatsApp", "Email", "District", "Status"];

/// Export service for volunteer CSV downloads.
#[derive(Clone, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Restrict the filtered records to a selection. An empty selection
    /// exports the whole filtered view; filtered order is preserved.
    pub fn export_subset(records: &[Volunteer], selection: &VolunteerSelection) -> Vec<Volunteer> {
        if selection.is_empty() {
            records.to_vec()
        } else {
            records
                .iter()
                .filter(|record| selection.is_selected(&record.id))
                .cloned()
                .collect()
        }
    }

    /// Generate CSV content for the filtered (and optionally selected)
    /// volunteers, with a date-stamped filename.
    pub fn export_volunteers_csv(
        &self,
        command: ExportVolunteersCommand,
        volunteer_service: &VolunteerService,
    ) -> Result<ExportDataResult> {
        info!(
            "Exporting volunteers as CSV ({} ids selected)",
            command.selected_ids.len()
        );

        let filtered = volunteer_service.list_volunteers(&command.criteria)?;
        let selection = VolunteerSelection::from_ids(command.selected_ids);
        let rows = Self::export_subset(&filtered, &selection);

        let csv_content = write_csv(&rows)?;
        let filename = format!("volunteers-{}.csv", Utc::now().format("%Y-%m-%d"));

        info!("Generated {} ({} records)", filename, rows.len());

        Ok(ExportDataResult {
            csv_content,
            filename,
            record_count: rows.len(),
        })
    }

    /// Write an export to a directory on disk: the given path, or the
    /// user's Documents folder (home as a last resort). File-system
    /// failures are reported in the result, not raised as errors.
    pub fn export_to_path(
        &self,
        command: ExportToPathCommand,
        volunteer_service: &VolunteerService,
    ) -> Result<ExportToPathResult> {
        let export = self.export_volunteers_csv(
            ExportVolunteersCommand {
                criteria: command.criteria,
                selected_ids: command.selected_ids,
            },
            volunteer_service,
        )?;

        let export_dir = match command.custom_path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => expand_home(path),
            _ => match dirs::document_dir().or_else(dirs::home_dir) {
                Some(dir) => dir,
                None => {
                    error!("Could not determine a default export directory");
                    return Ok(ExportToPathResult {
                        success: false,
                        message: "Failed to determine export directory".to_string(),
                        file_path: String::new(),
                        record_count: 0,
                    });
                }
            },
        };

        let file_path = export_dir.join(&export.filename);
        if let Err(e) = fs::create_dir_all(&export_dir) {
            error!("Failed to create export directory {:?}: {}", export_dir, e);
            return Ok(ExportToPathResult {
                success: false,
                message: format!("Failed to create export directory: {}", e),
                file_path: export_dir.to_string_lossy().to_string(),
                record_count: 0,
            });
        }

        match fs::write(&file_path, &export.csv_content) {
            Ok(()) => {
                let file_path = file_path.to_string_lossy().to_string();
                info!("Exported {} volunteers to {}", export.record_count, file_path);
                Ok(ExportToPathResult {
                    success: true,
                    message: format!("File exported successfully to: {}", file_path),
                    file_path,
                    record_count: export.record_count,
                })
            }
            Err(e) => {
                error!("Failed to write export file {:?}: {}", file_path, e);
                Ok(ExportToPathResult {
                    success: false,
                    message: format!("Failed to write export file: {}", e),
                    file_path: file_path.to_string_lossy().to_string(),
                    record_count: 0,
                })
            }
        }
    }
}

/// Serialize records with RFC 4180 quoting. The WhatsApp column falls back
/// to the phone number when the volunteer gave none.
fn write_csv(rows: &[Volunteer]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADERS).context("Failed to write CSV header")?;

    for volunteer in rows {
        let whatsapp = volunteer.whatsapp.as_deref().unwrap_or(&volunteer.phone);
        writer
            .write_record([
                volunteer.full_name.as_str(),
                volunteer.cnic.as_str(),
                volunteer.phone.as_str(),
                whatsapp,
                volunteer.email.as_str(),
                volunteer.district.as_str(),
                &volunteer.status.to_string(),
            ])
            .with_context(|| format!("Failed to write CSV row for {}", volunteer.id))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
    String::from_utf8(bytes).context("Export CSV was not valid UTF-8")
}

/// Expand a leading `~` to the user's home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        if path == "~" {
            return home;
        }
        if let Some(rest) = path.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
