//! Dashboard: list, delete and logout commands.

use super::Context;
use botdesk_core::dashboard::COLUMNS;
use botdesk_core::{Dashboard, DashboardRow};
use std::fmt::Write as _;

pub fn list(ctx: &Context, json: bool) -> anyhow::Result<()> {
    let dashboard = Dashboard::load(&ctx.repo, &ctx.session);
    if json {
        println!("{}", serde_json::to_string_pretty(dashboard.agents())?);
    } else {
        print!("{}", render_dashboard(&dashboard));
    }
    Ok(())
}

pub fn delete(ctx: &Context, id: &str) -> anyhow::Result<()> {
    let mut dashboard = Dashboard::load(&ctx.repo, &ctx.session);
    let before = dashboard.agents().len();
    dashboard.delete(id)?;
    if dashboard.agents().len() == before {
        eprintln!("No agent with ID {id}.");
    }
    print!("{}", render_dashboard(&dashboard));
    Ok(())
}

pub fn logout(ctx: &Context) -> anyhow::Result<()> {
    let mut dashboard = Dashboard::load(&ctx.repo, &ctx.session);
    let next = dashboard.logout()?;
    println!("Signed out. Next: {next}");
    Ok(())
}

/// Text rendering of the dashboard screen.
pub fn render_dashboard(dashboard: &Dashboard<'_>) -> String {
    let mut table: Vec<[String; 5]> = vec![COLUMNS.map(str::to_string)];
    let mut placeholder = None;

    for row in dashboard.rows() {
        match row {
            DashboardRow::Agent(row) => table.push([
                row.index.to_string(),
                row.name,
                row.kind.to_string(),
                row.created,
                format!("edit: {}", row.edit_route),
            ]),
            DashboardRow::Empty(message) => placeholder = Some(message),
        }
    }

    let mut widths = [0usize; 5];
    for cells in &table {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", dashboard.greeting());
    let _ = writeln!(out);
    for cells in &table {
        let line = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    if let Some(message) = placeholder {
        let _ = writeln!(out, "{message}");
    }
    out
}
