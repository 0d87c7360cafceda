//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskdeck_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use std::error::Error;
use taskdeck_core::{task_service, NewTask, ProjectService, TaskPriority, TaskStatus};

fn main() -> Result<(), Box<dyn Error>> {
    println!("taskdeck_core version={}", taskdeck_core::core_version());

    let mut service = ProjectService::new();
    let project_id = service.create_project("Launch", "Release checklist")?;

    let project = service
        .find_project_mut(project_id)
        .ok_or("freshly created project must exist")?;

    task_service::create_task(
        project,
        NewTask {
            title: "Write release notes".to_string(),
            description: "Cover breaking changes".to_string(),
            status: TaskStatus::Todo,
            priority: TaskPriority::High,
            due_date: date(2026, 9, 1)?,
        },
    )?;
    task_service::create_task(
        project,
        NewTask {
            title: "Tag the build".to_string(),
            description: String::new(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::Medium,
            due_date: date(2026, 9, 3)?,
        },
    )?;

    println!("{project}");
    for task in task_service::sort_tasks_by_deadline(project) {
        println!("  {task}");
    }

    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, Box<dyn Error>> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| "invalid calendar date".into())
}
