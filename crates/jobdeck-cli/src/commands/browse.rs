//! Browse command - interactive dashboard session.
//!
//! Advisory statistics on entry, a filtered job list, add/edit/delete
//! driven by prompts, and notification banners that stack and expire on
//! their own.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use jobdeck_core::{
    JobDraft, JobFilter, JobId, JobListManager, JobRecord, JobUpdate, JobsApiClient,
    NotificationCenter, Notifier, Severity, StatsReader,
};

use crate::Config;
use crate::render::{TerminalJobView, TerminalStatsPanel, print_job};

/// Notifier backed by the session's shared notification center.
#[derive(Clone, Default)]
struct SessionNotifier(Rc<RefCell<NotificationCenter>>);

impl Notifier for SessionNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        self.0.borrow_mut().notify(severity, message);
    }
}

/// One line of session input, parsed.
#[derive(Debug, PartialEq, Eq)]
enum SessionCommand {
    Reload,
    City(Option<String>),
    Position(Option<String>),
    ClearFilters,
    Add,
    Edit(JobId),
    Delete(JobId),
    Show(JobId),
    Stats,
    Help,
    Quit,
}

fn parse_command(line: &str) -> std::result::Result<Option<SessionCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "list" | "ls" | "reload" => SessionCommand::Reload,
        "city" => SessionCommand::City(non_empty(rest)),
        "position" | "pos" => SessionCommand::Position(non_empty(rest)),
        "clear" => SessionCommand::ClearFilters,
        "add" => SessionCommand::Add,
        "edit" => SessionCommand::Edit(parse_id(rest)?),
        "delete" | "del" => SessionCommand::Delete(parse_id(rest)?),
        "show" => SessionCommand::Show(parse_id(rest)?),
        "stats" => SessionCommand::Stats,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => return Err(format!("unknown command: {other} (try 'help')")),
    };
    Ok(Some(command))
}

fn non_empty(rest: &str) -> Option<String> {
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_owned())
    }
}

fn parse_id(rest: &str) -> std::result::Result<JobId, String> {
    rest.parse()
        .map_err(|_| format!("expected a job id, got '{rest}'"))
}

/// Execute the browse command.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read.
pub async fn execute(config: &Config) -> Result<()> {
    let client = JobsApiClient::new(config.api_url.clone());

    // Landing view: advisory statistics first, then the job list.
    load_stats(&client, config).await;

    let view = TerminalJobView::new(config.format.clone());
    let pending_edit = view.pending_edit_handle();
    let notifications = SessionNotifier::default();
    let mut manager = JobListManager::new(client.clone(), view, notifications.clone());
    let mut filter = JobFilter::default();

    manager.load_jobs().await;

    let mut rl = DefaultEditor::new()?;
    println!("{}", "Type 'help' for commands.".dimmed());

    loop {
        print_banners(&notifications);

        let line = match rl.readline("jobdeck> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(error) => return Err(error.into()),
        };
        let _ = rl.add_history_entry(line.as_str());

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(usage) => {
                println!("{}", usage.red());
                continue;
            }
        };

        match command {
            SessionCommand::Reload => {
                manager.load_jobs().await;
            }
            SessionCommand::City(city) => {
                filter.city = city;
                manager.set_filter(filter.clone());
                manager.load_jobs().await;
            }
            SessionCommand::Position(position) => {
                filter.position = position;
                manager.set_filter(filter.clone());
                manager.load_jobs().await;
            }
            SessionCommand::ClearFilters => {
                filter = JobFilter::default();
                manager.set_filter(filter.clone());
                manager.load_jobs().await;
            }
            SessionCommand::Add => {
                let draft = prompt_draft(&mut rl)?;
                manager.add_job(draft).await;
            }
            SessionCommand::Edit(id) => {
                manager.open_edit_dialog(id);
                // Absent from the mirror: the dialog never opened.
                let Some(job) = pending_edit.borrow_mut().take() else {
                    continue;
                };
                let update = prompt_update(&mut rl, &job)?;
                manager.update_job(id, update).await;
            }
            SessionCommand::Delete(id) => {
                if super::confirm(&mut rl, "Are you sure you want to delete this job? [y/N] ")? {
                    manager.delete_job(id).await;
                }
            }
            SessionCommand::Show(id) => match client.fetch_job(id).await {
                Ok(job) => print_job(&job, &config.format),
                Err(error) => println!("{}", format!("Failed to fetch job: {error}").red()),
            },
            SessionCommand::Stats => {
                load_stats(&client, config).await;
            }
            SessionCommand::Help => print_help(),
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

async fn load_stats(client: &JobsApiClient, config: &Config) {
    let mut reader = StatsReader::new(
        client.clone(),
        TerminalStatsPanel::new(config.format.clone()),
    );
    reader.load_stats().await;
    reader.into_panel().print();
}

fn print_banners(notifications: &SessionNotifier) {
    let mut center = notifications.0.borrow_mut();
    center.sweep();
    for notice in center.notices() {
        match notice.severity {
            Severity::Success => println!("{}", notice.message.green()),
            Severity::Error => println!("{}", notice.message.red()),
        }
    }
}

fn prompt_draft(rl: &mut DefaultEditor) -> Result<JobDraft> {
    let title = prompt(rl, "Title")?;
    let company = prompt(rl, "Company")?;
    Ok(JobDraft::new(title, company)
        .with_location(&prompt(rl, "Location")?)
        .with_salary(&prompt(rl, "Salary")?)
        .with_job_type(&prompt(rl, "Job type")?)
        .with_description(&prompt(rl, "Description")?)
        .with_posted_date(&prompt(rl, "Posted date")?)
        .with_job_url(&prompt(rl, "Job URL")?))
}

fn prompt_update(rl: &mut DefaultEditor, job: &JobRecord) -> Result<JobUpdate> {
    println!("Editing job #{} (enter keeps the current value)", job.id);
    Ok(JobUpdate::full(
        prompt_or(rl, "Title", &job.title)?,
        prompt_or(rl, "Company", &job.company)?,
        prompt_or(rl, "Location", &job.location)?,
        prompt_or(rl, "Salary", &job.salary)?,
        prompt_or(rl, "Job type", &job.job_type)?,
        prompt_or(rl, "Description", &job.description)?,
        prompt_or(rl, "Posted date", &job.posted_date)?,
    ))
}

fn prompt(rl: &mut DefaultEditor, label: &str) -> Result<String> {
    match rl.readline(&format!("{label}: ")) {
        Ok(line) => Ok(line.trim().to_owned()),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(String::new()),
        Err(error) => Err(error.into()),
    }
}

fn prompt_or(rl: &mut DefaultEditor, label: &str, current: &str) -> Result<String> {
    match rl.readline(&format!("{label} [{current}]: ")) {
        Ok(line) => {
            let line = line.trim();
            if line.is_empty() {
                Ok(current.to_owned())
            } else {
                Ok(line.to_owned())
            }
        }
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(current.to_owned()),
        Err(error) => Err(error.into()),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  list               Reload the job list");
    println!("  city [text]        Set or clear the city filter and reload");
    println!("  position [text]    Set or clear the position filter and reload");
    println!("  clear              Clear both filters and reload");
    println!("  add                Add a job (prompts for each field)");
    println!("  edit <id>          Edit a job from the current list");
    println!("  delete <id>        Delete a job (asks for confirmation)");
    println!("  show <id>          Show one job in full");
    println!("  stats              Show aggregate statistics");
    println!("  quit               Leave the session");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line_is_noop() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_parse_reload_aliases() {
        assert_eq!(parse_command("list"), Ok(Some(SessionCommand::Reload)));
        assert_eq!(parse_command("ls"), Ok(Some(SessionCommand::Reload)));
    }

    #[test]
    fn test_parse_city_with_spaces() {
        assert_eq!(
            parse_command("city New York"),
            Ok(Some(SessionCommand::City(Some("New York".to_owned()))))
        );
    }

    #[test]
    fn test_parse_bare_city_clears_the_filter() {
        assert_eq!(parse_command("city"), Ok(Some(SessionCommand::City(None))));
    }

    #[test]
    fn test_parse_edit_requires_an_id() {
        assert_eq!(
            parse_command("edit 3"),
            Ok(Some(SessionCommand::Edit(JobId(3))))
        );
        assert!(parse_command("edit x").is_err());
        assert!(parse_command("edit").is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(parse_command("frobnicate").is_err());
    }
}
