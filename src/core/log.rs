use crate::audit::AuditLog;
use crate::errors::AppResult;
use crate::utils::table::display_width;
use ansi_term::Colour;

/// ANSI colour for each audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "denied" => Colour::Purple,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

const MAX_TARGET_WIDTH: usize = 40;

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(audit: &AuditLog) -> AppResult<()> {
        let entries = audit.entries()?;

        if entries.is_empty() {
            println!("📜 Audit log is empty.");
            return Ok(());
        }

        let rows: Vec<(String, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%F %T").to_string())
                    .unwrap_or(e.date);
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    truncate(&format!("{} {}", e.operation, e.target), MAX_TARGET_WIDTH)
                };
                (e.id.to_string(), date, op_target, e.message)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|r| display_width(&r.2))
            .max()
            .unwrap_or(10);

        println!("📜 Audit log:\n");

        for (id, date, op_target, message) in rows {
            // only the operation word is coloured
            let (op, rest) = op_target
                .split_once(' ')
                .map(|(o, r)| (o.to_string(), format!(" {r}")))
                .unwrap_or((op_target.clone(), String::new()));
            let colored = format!("{}{}", color_for_operation(&op).paint(op.as_str()), rest);
            let padding = " ".repeat(op_w.saturating_sub(display_width(&op_target)));

            println!("{id:>id_w$}: {date:<date_w$} | {colored}{padding} => {message}");
        }

        Ok(())
    }
}
