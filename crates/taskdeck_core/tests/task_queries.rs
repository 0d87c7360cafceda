use chrono::NaiveDate;
use taskdeck_core::{
    task_service, NewTask, Project, Task, TaskPriority, TaskServiceError, TaskStatus,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn new_task(title: &str, status: TaskStatus, priority: TaskPriority, due: NaiveDate) -> NewTask {
    NewTask {
        title: title.to_string(),
        description: String::new(),
        status,
        priority,
        due_date: due,
    }
}

#[test]
fn create_task_allocates_increasing_ids() {
    let mut project = Project::new(1, "Launch", "");

    let a = task_service::create_task(
        &mut project,
        new_task("A", TaskStatus::Todo, TaskPriority::Low, date(2024, 1, 1)),
    )
    .unwrap();
    let b = task_service::create_task(
        &mut project,
        new_task("B", TaskStatus::Todo, TaskPriority::Low, date(2024, 1, 2)),
    )
    .unwrap();

    assert_eq!(a, 1);
    assert_eq!(b, 2);
    assert_eq!(project.tasks().len(), 2);
}

#[test]
fn create_task_rejects_blank_title_and_leaves_project_unchanged() {
    let mut project = Project::new(1, "Launch", "");

    let err = task_service::create_task(
        &mut project,
        new_task("  ", TaskStatus::Todo, TaskPriority::Low, date(2024, 1, 1)),
    )
    .unwrap_err();

    assert_eq!(err, TaskServiceError::InvalidTitle);
    assert!(project.tasks().is_empty());
}

#[test]
fn allocator_never_collides_with_explicitly_inserted_ids() {
    let mut project = Project::new(1, "Launch", "");

    task_service::add_task_to_project(
        &mut project,
        Task::new(
            7,
            "Imported",
            "",
            TaskStatus::Todo,
            TaskPriority::Low,
            date(2024, 1, 1),
        ),
    );

    let allocated = task_service::create_task(
        &mut project,
        new_task("Next", TaskStatus::Todo, TaskPriority::Low, date(2024, 1, 2)),
    )
    .unwrap();
    assert_eq!(allocated, 8);
}

#[test]
fn find_task_by_id_returns_first_match_or_none() {
    let mut project = Project::new(1, "Launch", "");
    let id = task_service::create_task(
        &mut project,
        new_task("A", TaskStatus::Todo, TaskPriority::Low, date(2024, 1, 1)),
    )
    .unwrap();

    assert_eq!(task_service::find_task_by_id(&project, id).unwrap().title, "A");
    assert!(task_service::find_task_by_id(&project, 999).is_none());
}

#[test]
fn mark_task_as_done_is_unconditional_and_idempotent() {
    let mut project = Project::new(1, "Launch", "");
    let id = task_service::create_task(
        &mut project,
        new_task(
            "A",
            TaskStatus::InProgress,
            TaskPriority::High,
            date(2024, 1, 1),
        ),
    )
    .unwrap();

    let task = task_service::find_task_by_id_mut(&mut project, id).unwrap();
    task_service::mark_task_as_done(task);
    assert_eq!(task.status, TaskStatus::Done);

    task_service::mark_task_as_done(task);
    assert_eq!(task.status, TaskStatus::Done);
}

#[test]
fn filters_preserve_insertion_order() {
    let mut project = Project::new(1, "Launch", "");
    for (title, status, priority) in [
        ("A", TaskStatus::Todo, TaskPriority::High),
        ("B", TaskStatus::Done, TaskPriority::Low),
        ("C", TaskStatus::Todo, TaskPriority::High),
        ("D", TaskStatus::InProgress, TaskPriority::Medium),
    ] {
        task_service::create_task(&mut project, new_task(title, status, priority, date(2024, 1, 1)))
            .unwrap();
    }

    let todos = task_service::filter_by_status(&project, TaskStatus::Todo);
    let titles: Vec<&str> = todos.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, ["A", "C"]);

    let high = task_service::filter_by_priority(&project, TaskPriority::High);
    let titles: Vec<&str> = high.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, ["A", "C"]);

    let low: Vec<&Task> = task_service::filter_by_priority(&project, TaskPriority::Low);
    assert_eq!(low.len(), 1);
}

#[test]
fn overdue_excludes_done_tasks_and_future_or_today_deadlines() {
    let mut project = Project::new(1, "Launch", "");
    let today = date(2024, 3, 1);

    for (title, status, due) in [
        ("past todo", TaskStatus::Todo, date(2024, 1, 1)),
        ("past done", TaskStatus::Done, date(2024, 1, 1)),
        ("due today", TaskStatus::Todo, today),
        ("future", TaskStatus::InProgress, date(2024, 6, 1)),
    ] {
        task_service::create_task(&mut project, new_task(title, status, TaskPriority::Medium, due))
            .unwrap();
    }

    let overdue = task_service::overdue_tasks_at(&project, today);
    let titles: Vec<&str> = overdue.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, ["past todo"]);
}

#[test]
fn sort_by_deadline_is_stable_and_does_not_mutate_stored_order() {
    let mut project = Project::new(1, "Launch", "");
    for (title, due) in [
        ("late", date(2024, 6, 1)),
        ("early first", date(2024, 1, 1)),
        ("early second", date(2024, 1, 1)),
    ] {
        task_service::create_task(
            &mut project,
            new_task(title, TaskStatus::Todo, TaskPriority::Low, due),
        )
        .unwrap();
    }

    let sorted = task_service::sort_tasks_by_deadline(&project);
    let titles: Vec<&str> = sorted.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, ["early first", "early second", "late"]);

    let stored: Vec<&str> = project.tasks().iter().map(|task| task.title.as_str()).collect();
    assert_eq!(stored, ["late", "early first", "early second"]);
}

#[test]
fn remove_task_by_id_removes_every_duplicate() {
    let mut project = Project::new(1, "Launch", "");
    for title in ["first copy", "second copy"] {
        task_service::add_task_to_project(
            &mut project,
            Task::new(
                5,
                title,
                "",
                TaskStatus::Todo,
                TaskPriority::Low,
                date(2024, 1, 1),
            ),
        );
    }
    task_service::create_task(
        &mut project,
        new_task("kept", TaskStatus::Todo, TaskPriority::Low, date(2024, 1, 2)),
    )
    .unwrap();

    project.remove_task_by_id(5);

    assert_eq!(project.tasks().len(), 1);
    assert_eq!(project.tasks()[0].title, "kept");

    // Removing a missing id is a silent no-op.
    project.remove_task_by_id(5);
    assert_eq!(project.tasks().len(), 1);
}

#[test]
fn launch_scenario_end_to_end() {
    let mut project = Project::new(1, "Launch", "");
    let today = date(2024, 3, 1);

    let task_a = task_service::create_task(
        &mut project,
        new_task("Task A", TaskStatus::Todo, TaskPriority::High, date(2024, 1, 1)),
    )
    .unwrap();
    task_service::create_task(
        &mut project,
        new_task("Task B", TaskStatus::Done, TaskPriority::Low, date(2024, 6, 1)),
    )
    .unwrap();

    let overdue = task_service::overdue_tasks_at(&project, today);
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].title, "Task A");

    let sorted = task_service::sort_tasks_by_deadline(&project);
    let titles: Vec<&str> = sorted.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, ["Task A", "Task B"]);

    let done = task_service::filter_by_status(&project, TaskStatus::Done);
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].title, "Task B");

    let handle = task_service::find_task_by_id_mut(&mut project, task_a).unwrap();
    task_service::mark_task_as_done(handle);
    assert!(task_service::overdue_tasks_at(&project, today).is_empty());
}
