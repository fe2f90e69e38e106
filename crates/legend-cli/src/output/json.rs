use legend_core::error::LegendError;
use legend_core::export::write_json;
use legend_core::model::PlantSchedule;

pub fn print(schedule: &PlantSchedule, project: &str, tool_name: &str) -> Result<(), LegendError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, schedule, project, tool_name)?;
    println!();
    Ok(())
}
