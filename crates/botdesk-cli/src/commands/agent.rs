//! Agent form: create, edit and embed commands.

use super::Context;
use crate::cli::AgentFields;
use botdesk_core::form::COPIED_NOTICE;
use botdesk_core::{AgentForm, AgentRepository, Clipboard, FormError, FormMode};
use std::fmt::Write as _;

/// Create a new agent from `fields`.
pub fn create(ctx: &Context, fields: &AgentFields, copy: bool) -> anyhow::Result<()> {
    let mut form = AgentForm::create(&ctx.repo);
    submit(ctx, &mut form, fields, copy)
}

/// Update agent `id`. An unknown id falls back to creating a new agent.
pub fn edit(ctx: &Context, id: &str, fields: &AgentFields, copy: bool) -> anyhow::Result<()> {
    let mut form = AgentForm::open(&ctx.repo, Some(id));
    if form.mode() == FormMode::Create {
        eprintln!("Agent {id} not found; creating a new agent instead.");
    }
    submit(ctx, &mut form, fields, copy)
}

/// Print (and optionally copy) the embed code of a stored agent.
pub fn embed(ctx: &Context, id: &str, copy: bool) -> anyhow::Result<()> {
    let agent = ctx
        .repo
        .get_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("Unknown agent: {id}"))?;
    let snippet = botdesk_core::generate_embed(&agent.id);
    println!("{snippet}");

    if copy {
        match ctx.clipboard.write_text(&snippet) {
            Ok(()) => eprintln!("{COPIED_NOTICE}"),
            Err(e) => eprintln!("Could not copy embed code: {e}"),
        }
    }
    Ok(())
}

fn submit(
    ctx: &Context,
    form: &mut AgentForm<'_>,
    fields: &AgentFields,
    copy: bool,
) -> anyhow::Result<()> {
    apply_fields(form, fields)?;

    match form.submit() {
        Ok(()) => {}
        Err(FormError::Validation(e)) => anyhow::bail!("{e}"),
        Err(e) => return Err(e.into()),
    }

    print!("{}", render_form(form));

    if copy {
        match form.copy_embed(&ctx.clipboard) {
            Ok(notice) => eprintln!("{notice}"),
            Err(e) => eprintln!("Could not copy embed code: {e}"),
        }
    }
    Ok(())
}

fn apply_fields(form: &mut AgentForm<'_>, fields: &AgentFields) -> Result<(), FormError> {
    if let Some(name) = &fields.name {
        form.set_name(name.as_str())?;
    }
    if let Some(kind) = fields.kind {
        form.set_type(kind)?;
    }
    if let Some(color) = &fields.color {
        form.set_color(color.as_str())?;
    }
    if let Some(description) = &fields.description {
        form.set_description(description.as_str())?;
    }
    if fields.clear_documents {
        form.attach_documents(std::iter::empty::<&str>())?;
    } else if !fields.documents.is_empty() {
        form.attach_documents(&fields.documents)?;
    }
    Ok(())
}

/// Text rendering of the form screen.
pub fn render_form(form: &AgentForm<'_>) -> String {
    let draft = form.draft();
    let mut out = String::new();

    let _ = writeln!(out, "{}", form.title());
    if let Some(id) = form.id() {
        let _ = writeln!(out, "  ID:          {id}");
    }
    let _ = writeln!(out, "  Name:        {}", draft.name);
    let _ = writeln!(out, "  Type:        {} ({})", draft.kind.label(), draft.kind);
    let _ = writeln!(out, "  UI Color:    {}", draft.color);
    let _ = writeln!(out, "  Description: {}", draft.description);

    if form.documents_visible() {
        if draft.documents.is_empty() {
            let _ = writeln!(out, "  Documents:   (none)");
        } else {
            let _ = writeln!(out, "  Documents:");
            for doc in &draft.documents {
                let _ = writeln!(out, "    - {doc}");
            }
        }
    }

    if form.embed_visible() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Embed Code");
        let _ = writeln!(out, "{}", form.embed_text());
    }
    out
}
