use legend_core::export::{metadata_line, COLUMNS};
use legend_core::model::{Category, PlantSchedule};
use legend_core::ParsedSchedule;

pub fn print(result: &ParsedSchedule, project: &str, tool_name: &str) {
    println!("{}\n", metadata_line(project, tool_name));

    if result.schedule.is_empty() {
        println!("  No plant entries found.");
        return;
    }

    print_schedule(&result.schedule);

    let subtotals: Vec<_> = result
        .documents
        .iter()
        .filter_map(|d| d.subtotal.as_ref().map(|s| (d.name.as_str(), s)))
        .collect();
    if !subtotals.is_empty() {
        println!("\nPer document:");
        for (name, schedule) in subtotals {
            println!(
                "  {:<30} {:>4} row(s)  {:>6} plant(s)",
                name,
                schedule.len(),
                schedule.total_quantity()
            );
        }
    }
}

fn print_schedule(schedule: &PlantSchedule) {
    let name_width = schedule
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once(COLUMNS[2].chars().count()))
        .max()
        .unwrap_or(20);
    let size_width = schedule
        .iter()
        .map(|r| r.size.chars().count())
        .chain(std::iter::once(COLUMNS[3].len()))
        .max()
        .unwrap_or(8);

    println!(
        "  {:<12}  {:>8}  {:<nw$}  {:<sw$}  {}",
        COLUMNS[0],
        COLUMNS[1],
        COLUMNS[2],
        COLUMNS[3],
        COLUMNS[4],
        nw = name_width,
        sw = size_width
    );
    println!("  {}", "-".repeat(12 + 8 + name_width + size_width + 8 + 16));

    let mut previous: Option<Category> = None;
    for row in schedule {
        // Blank line between category groups
        if previous.is_some_and(|c| c != row.category) {
            println!();
        }
        previous = Some(row.category);
        println!(
            "  {:<12}  {:>8}  {:<nw$}  {:<sw$}  {}",
            row.category.as_str(),
            row.quantity,
            row.name,
            row.size,
            row.dimensions,
            nw = name_width,
            sw = size_width
        );
    }

    println!();
    println!(
        "  {} row(s), {} plant(s) in total",
        schedule.len(),
        schedule.total_quantity()
    );
}
