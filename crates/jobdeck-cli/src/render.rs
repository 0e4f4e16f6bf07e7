//! Terminal implementations of the presentation seams.
//!
//! These types are the CLI's display regions: the job list area, the
//! notification banners, and the three statistics badges. Sentinel-valued
//! fields are hidden rather than printed.

use std::cell::RefCell;
use std::rc::Rc;

use owo_colors::OwoColorize;

use jobdeck_core::{JobListView, JobRecord, Notifier, SENTINEL, Severity, StatsPanel};

use crate::OutputFormat;

/// Renders one job as a text card.
#[must_use]
pub fn job_card(job: &JobRecord) -> String {
    let mut lines = vec![
        format!("#{} {}", job.id, job.title.bold()),
        format!("   {}", job.company),
    ];

    let mut place = format!("   {}", job.location);
    if job.salary != SENTINEL {
        place.push_str(&format!(" | {}", job.salary));
    }
    lines.push(place);

    let mut posted = format!("   {}", job.posted_date);
    if job.job_type != SENTINEL {
        posted.push_str(&format!(" | {}", job.job_type));
    }
    lines.push(posted);

    lines.push(format!("   {}", job.description.dimmed()));
    if job.job_url != SENTINEL {
        lines.push(format!("   {}", job.job_url));
    }

    lines.join("\n")
}

/// Prints a job sequence in the requested format.
pub fn print_jobs(jobs: &[JobRecord], format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(jobs).unwrap_or_else(|_| "[]".to_owned())
            );
        }
        OutputFormat::Text => {
            for job in jobs {
                println!("{}", job_card(job));
                println!();
            }
        }
        OutputFormat::Table => {
            use tabled::{Table, Tabled};

            #[derive(Tabled)]
            struct JobRow {
                #[tabled(rename = "ID")]
                id: String,
                #[tabled(rename = "Title")]
                title: String,
                #[tabled(rename = "Company")]
                company: String,
                #[tabled(rename = "Location")]
                location: String,
                #[tabled(rename = "Salary")]
                salary: String,
                #[tabled(rename = "Type")]
                job_type: String,
                #[tabled(rename = "Posted")]
                posted_date: String,
            }

            let rows: Vec<_> = jobs
                .iter()
                .map(|j| JobRow {
                    id: j.id.to_string(),
                    title: j.title.clone(),
                    company: j.company.clone(),
                    location: j.location.clone(),
                    salary: j.salary.clone(),
                    job_type: j.job_type.clone(),
                    posted_date: j.posted_date.clone(),
                })
                .collect();

            println!("{}", Table::new(rows));
        }
    }
}

/// Prints a single job in the requested format.
pub fn print_job(job: &JobRecord, format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(job).unwrap_or_else(|_| "{}".to_owned())
            );
        }
        OutputFormat::Text | OutputFormat::Table => println!("{}", job_card(job)),
    }
}

/// Job-list surface writing to stdout.
///
/// The edit dialog has no terminal equivalent, so opening one parks the
/// pre-populated record in a shared slot the interactive session reads
/// back; closing it clears the slot.
pub struct TerminalJobView {
    format: OutputFormat,
    pending_edit: Rc<RefCell<Option<JobRecord>>>,
}

impl TerminalJobView {
    /// Creates a view rendering in the given format.
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pending_edit: Rc::default(),
        }
    }

    /// Handle for the record the edit dialog was last opened with.
    #[must_use]
    pub fn pending_edit_handle(&self) -> Rc<RefCell<Option<JobRecord>>> {
        Rc::clone(&self.pending_edit)
    }
}

impl JobListView for TerminalJobView {
    fn show_jobs(&mut self, jobs: &[JobRecord]) {
        print_jobs(jobs, &self.format);
    }

    fn show_empty(&mut self) {
        println!(
            "{}",
            "No jobs found. Try different filters or add new jobs.".yellow()
        );
    }

    fn set_count(&mut self, count: u64) {
        if !matches!(self.format, OutputFormat::Json) {
            println!("{}", format!("{count} job(s)").dimmed());
        }
    }

    fn open_edit_dialog(&mut self, job: &JobRecord) {
        *self.pending_edit.borrow_mut() = Some(job.clone());
    }

    fn close_edit_dialog(&mut self) {
        *self.pending_edit.borrow_mut() = None;
    }

    fn close_add_dialog(&mut self) {}
}

/// Notifier that prints each banner as soon as it is raised.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => println!("{}", message.green()),
            Severity::Error => eprintln!("{}", message.red()),
        }
    }
}

/// Statistics badges collected region by region, printed on demand.
///
/// Each region is set independently; regions the stats read never reached
/// stay unset and print nothing.
pub struct TerminalStatsPanel {
    format: OutputFormat,
    csv_exists: Option<bool>,
    db_exists: Option<bool>,
    total_jobs: Option<u64>,
}

impl TerminalStatsPanel {
    /// Creates a panel rendering in the given format.
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            csv_exists: None,
            db_exists: None,
            total_jobs: None,
        }
    }

    /// Prints whichever regions were populated.
    pub fn print(&self) {
        match self.format {
            OutputFormat::Json => {
                if let (Some(csv), Some(db), Some(total)) =
                    (self.csv_exists, self.db_exists, self.total_jobs)
                {
                    println!(
                        "{}",
                        serde_json::json!({
                            "csv_exists": csv,
                            "db_exists": db,
                            "total_jobs": total
                        })
                    );
                }
            }
            OutputFormat::Text | OutputFormat::Table => {
                if let Some(csv) = self.csv_exists {
                    if csv {
                        println!("{}", "CSV File Ready".green());
                    } else {
                        println!("{}", "No CSV File".dimmed());
                    }
                }
                if let Some(db) = self.db_exists {
                    if db {
                        println!("{}", "Database Ready".green());
                    } else {
                        println!("{}", "No Database".dimmed());
                    }
                }
                if let Some(total) = self.total_jobs {
                    println!("Total jobs: {total}");
                }
            }
        }
    }
}

impl StatsPanel for TerminalStatsPanel {
    fn set_csv_status(&mut self, exists: bool) {
        self.csv_exists = Some(exists);
    }

    fn set_db_status(&mut self, exists: bool) {
        self.db_exists = Some(exists);
    }

    fn set_total_jobs(&mut self, total: u64) {
        self.total_jobs = Some(total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobdeck_core::JobId;

    fn job() -> JobRecord {
        JobRecord {
            id: JobId(3),
            title: "Backend Engineer".to_owned(),
            company: "Acme".to_owned(),
            location: "Berlin".to_owned(),
            salary: "100k".to_owned(),
            job_type: "N/A".to_owned(),
            description: "Builds things".to_owned(),
            posted_date: "2024-05-01".to_owned(),
            job_url: "N/A".to_owned(),
            scraped_at: None,
        }
    }

    #[test]
    fn test_card_keys_row_by_id() {
        let card = job_card(&job());
        assert!(card.contains("#3"));
    }

    #[test]
    fn test_card_shows_salary_when_present() {
        let card = job_card(&job());
        assert!(card.contains("100k"));
    }

    #[test]
    fn test_card_hides_sentinel_url() {
        let card = job_card(&job());
        assert!(!card.contains("N/A"));
    }

    #[test]
    fn test_edit_dialog_slot_round_trip() {
        let mut view = TerminalJobView::new(OutputFormat::Text);
        let handle = view.pending_edit_handle();

        view.open_edit_dialog(&job());
        assert_eq!(handle.borrow().as_ref().map(|j| j.id), Some(JobId(3)));

        view.close_edit_dialog();
        assert!(handle.borrow().is_none());
    }
}
