//! Subcommand implementations
//!
//! Each command operates on the loaded database and writes its report to
//! the given output; saving is left to the caller.

use std::io::Write;
use std::path::Path;

use actiondb::{Action, ActionDb, Effects, Stroke, StrokeId, StrokeInfo};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local};
use log::info;

use crate::cli::Command;

/// Execute one subcommand
pub fn run(
    command: &Command,
    db: &mut ActionDb<Stroke>,
    actions_path: &Path,
    fx: &mut dyn Effects,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::List => list(db, out),
        Command::Show { id } => show(db, StrokeId(*id), out),
        Command::Add { name, cmd } => {
            let id = db.add_command(None, name.as_str(), cmd.as_str());
            info!("Added {} as {}", name, id);
            writeln!(out, "{}", id)?;
            Ok(())
        }
        Command::Remove { id } => {
            if !db.remove(StrokeId(*id)) {
                bail!("No entry with id {}", id);
            }
            Ok(())
        }
        Command::Rename { id, name } => {
            entry_mut(db, *id)?.name = name.clone();
            Ok(())
        }
        Command::SetCommand { id, cmd } => {
            entry_mut(db, *id)?.action = Some(Action::command(cmd.as_str()));
            Ok(())
        }
        Command::Run { id } => {
            let info = db
                .get(StrokeId(*id))
                .with_context(|| format!("No entry with id {}", id))?;
            let attempted = info.action.as_ref().is_some_and(|action| action.run(fx));
            writeln!(
                out,
                "{}",
                if attempted { "executed" } else { "nothing to run" }
            )?;
            Ok(())
        }
        Command::Stats => stats(db, actions_path, out),
    }
}

fn entry_mut(db: &mut ActionDb<Stroke>, id: u32) -> Result<&mut StrokeInfo<Stroke>> {
    db.get_mut(StrokeId(id))
        .with_context(|| format!("No entry with id {}", id))
}

fn action_text(action: Option<&Action>) -> (String, &'static str) {
    match action {
        Some(action) => (action.describe(), action.kind()),
        None => (String::new(), "None"),
    }
}

fn list(db: &ActionDb<Stroke>, out: &mut dyn Write) -> Result<()> {
    for (id, info) in db {
        let (text, kind) = action_text(info.action.as_ref());
        writeln!(
            out,
            "{:>4}  {:<24} {:<8} {:<32} {} stroke(s)",
            id.get(),
            info.name,
            kind,
            text,
            info.strokes.len()
        )?;
    }
    Ok(())
}

fn show(db: &ActionDb<Stroke>, id: StrokeId, out: &mut dyn Write) -> Result<()> {
    let info = db
        .get(id)
        .with_context(|| format!("No entry with id {}", id))?;
    let (text, kind) = action_text(info.action.as_ref());

    writeln!(out, "id:      {}", id)?;
    writeln!(out, "name:    {}", info.name)?;
    writeln!(out, "type:    {}", kind)?;
    writeln!(out, "action:  {}", text)?;
    if let Some(mods) = info
        .action
        .as_ref()
        .and_then(Action::modifiers)
        .filter(|mods| !mods.is_empty())
    {
        writeln!(out, "mods:    {}", mods.label().trim_end_matches('+'))?;
    }
    for (n, stroke) in info.strokes.iter().enumerate() {
        let (w, h) = stroke.extent();
        writeln!(
            out,
            "stroke {}: {} points, {}x{}",
            n,
            stroke.points.len(),
            w,
            h
        )?;
    }
    Ok(())
}

fn stats(db: &ActionDb<Stroke>, actions_path: &Path, out: &mut dyn Write) -> Result<()> {
    let unbound = db.iter().filter(|(_, info)| info.strokes.is_empty()).count();

    writeln!(out, "file:     {}", actions_path.display())?;
    if let Ok(modified) = std::fs::metadata(actions_path).and_then(|m| m.modified()) {
        let modified: DateTime<Local> = modified.into();
        writeln!(out, "modified: {}", modified.format("%Y-%m-%d %H:%M:%S"))?;
    }
    writeln!(out, "entries:  {}", db.len())?;
    writeln!(out, "strokes:  {}", db.count_bound_shapes())?;
    writeln!(out, "unbound:  {}", unbound)?;
    Ok(())
}
