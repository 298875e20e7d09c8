//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskdeck_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskdeck_core::db::open_db_in_memory;
use taskdeck_core::{Filter, SqliteSlotRepository, TaskService};

fn main() {
    println!("taskdeck_core version={}", taskdeck_core::core_version());

    // In-memory round trip to validate core wiring independently from any
    // presentation runtime.
    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("taskdeck_core smoke failed: {err}");
            std::process::exit(1);
        }
    };

    let mut service = TaskService::open(SqliteSlotRepository::new(&conn));
    if let Some(id) = service.add_task("smoke task") {
        service.toggle_important(id);
    }
    service.set_filter(Filter::Important);

    let counts = service.counts();
    println!(
        "smoke visible={} total={} completed={} uncompleted={} important={}",
        service.visible_tasks().len(),
        counts.total,
        counts.completed,
        counts.uncompleted,
        counts.important
    );
}
