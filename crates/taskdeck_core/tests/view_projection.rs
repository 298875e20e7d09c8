use taskdeck_core::{project, Filter, Task, TaskCounts};

fn sample_tasks() -> Vec<Task> {
    let mut tasks = vec![
        Task::new(1, "Team meeting").unwrap(),
        Task::new(2, "Buy milk").unwrap(),
        Task::new(3, "Call mom").unwrap(),
        Task::new(4, "Meet the plumber").unwrap(),
    ];
    tasks[0].completed = true;
    tasks[1].important = true;
    tasks[3].completed = true;
    tasks[3].important = true;
    tasks
}

#[test]
fn filter_all_with_empty_query_passes_everything_in_order() {
    let tasks = sample_tasks();
    let view = project(&tasks, Filter::All, "");

    let ids: Vec<_> = view.iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn completed_filter_passes_only_completed_tasks() {
    let tasks = sample_tasks();
    let view = project(&tasks, Filter::Completed, "");

    assert!(view.iter().all(|task| task.completed));
    let ids: Vec<_> = view.iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn uncompleted_filter_passes_only_open_tasks() {
    let tasks = sample_tasks();
    let view = project(&tasks, Filter::Uncompleted, "");

    let ids: Vec<_> = view.iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn completed_tasks_missing_from_view_failed_the_search() {
    let tasks = sample_tasks();
    let view = project(&tasks, Filter::Completed, "plumber");

    assert!(view.iter().all(|task| task.completed));
    for task in tasks.iter().filter(|task| task.completed) {
        let in_view = view.iter().any(|visible| visible.id == task.id);
        let matches_search = task.text.to_lowercase().contains("plumber");
        assert_eq!(in_view, matches_search);
    }
}

#[test]
fn search_is_case_insensitive() {
    let tasks = sample_tasks();
    let view = project(&tasks, Filter::All, "MEET");

    let ids: Vec<_> = view.iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn important_filter_scenario() {
    let mut tasks = vec![
        Task::new(1, "Buy milk").unwrap(),
        Task::new(2, "Call mom").unwrap(),
    ];
    tasks[0].important = true;

    let view = project(&tasks, Filter::Important, "");
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].text, "Buy milk");
    assert!(view[0].important);
}

#[test]
fn counts_are_global_and_ignore_filter_and_search() {
    let tasks = sample_tasks();
    let counts = TaskCounts::tally(&tasks);

    assert_eq!(counts.total, 4);
    assert_eq!(counts.completed, 2);
    assert_eq!(counts.uncompleted, 2);
    assert_eq!(counts.important, 2);
}

#[test]
fn counts_on_empty_collection_are_zero() {
    assert_eq!(TaskCounts::tally(&[]), TaskCounts::default());
}

#[test]
fn filter_names_round_trip_and_default_is_all() {
    assert_eq!(Filter::default(), Filter::All);
    for filter in [
        Filter::All,
        Filter::Completed,
        Filter::Uncompleted,
        Filter::Important,
    ] {
        assert_eq!(Filter::parse(filter.as_str()), Some(filter));
    }
    assert_eq!(Filter::parse("starred"), None);
}
