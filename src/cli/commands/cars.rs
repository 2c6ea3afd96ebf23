use crate::cli::commands::resolve_line;
use crate::cli::parser::Commands;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Cars { line } = cmd {
        let line = resolve_line(line.as_deref(), &ctx.cfg)?;
        let records = ctx.store.list(line)?;
        let cars = ctx.store.cars(line)?;

        if cars.is_empty() {
            info(format!("No cars recorded on {}.", line.label()));
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("CAR", 6),
            Column::new("ROWS", 4),
            Column::new("LAST DATE", 9),
        ]);
        for car in &cars {
            let rows = records.iter().filter(|r| &r.car_number == car);
            let count = rows.clone().count();
            let last = rows
                .map(|r| r.modified_date)
                .max()
                .map(|d| d.format("%Y%m%d").to_string())
                .unwrap_or_default();
            table.add_row(vec![car.clone(), count.to_string(), last]);
        }

        header(format!("{} · {} cars", line.label(), cars.len()));
        print!("{}", table.render());
    }
    Ok(())
}
