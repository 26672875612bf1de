//! Create/edit form controller for agents.
//!
//! The draft is lenient: switching the type away from
//! [`AgentType::AdvancedCollegeBot`] hides the upload section but keeps any
//! attached file names. The repository drops them when the form is submitted.

use crate::agent::{AgentDraft, AgentType};
use crate::clipboard::Clipboard;
use crate::embed::generate_embed;
use crate::error::{FormError, ValidationError};
use crate::repository::AgentRepository;
use std::path::Path;

/// Notice shown after a successful copy.
pub const COPIED_NOTICE: &str = "Embed code copied to clipboard!";

/// Whether the form creates a new agent or edits a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Lifecycle of a single form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Reading the agent being edited.
    Loading,
    /// Accepting field changes.
    Editing,
    /// Handing the draft to the repository.
    Submitting,
    /// Saved; the embed snippet is on display.
    Submitted,
}

/// Controller state for one visit to the agent form.
pub struct AgentForm<'a> {
    repo: &'a dyn AgentRepository,
    id: Option<String>,
    draft: AgentDraft,
    mode: FormMode,
    phase: FormPhase,
    embed_visible: bool,
    embed_text: String,
}

impl<'a> AgentForm<'a> {
    /// Open a blank form for a new agent.
    pub fn create(repo: &'a dyn AgentRepository) -> Self {
        Self {
            repo,
            id: None,
            draft: AgentDraft::default(),
            mode: FormMode::Create,
            phase: FormPhase::Editing,
            embed_visible: false,
            embed_text: String::new(),
        }
    }

    /// Open the form for `id`, or a blank create form when `id` is `None` or
    /// names no stored agent.
    pub fn open(repo: &'a dyn AgentRepository, id: Option<&str>) -> Self {
        let Some(id) = id else {
            return Self::create(repo);
        };

        let mut form = Self::create(repo);
        form.phase = FormPhase::Loading;

        match repo.get_by_id(id) {
            Some(agent) => {
                form.draft = AgentDraft::from_agent(&agent);
                form.embed_text = generate_embed(&agent.id);
                form.id = Some(agent.id);
                form.mode = FormMode::Edit;
            }
            None => {
                tracing::warn!(id, "agent not found; opening a blank form");
            }
        }

        form.phase = FormPhase::Editing;
        form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Identifier of the agent being edited, or of the one just created.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn draft(&self) -> &AgentDraft {
        &self.draft
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create New Agent",
            FormMode::Edit => "Edit Agent",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create",
            FormMode::Edit => "Update",
        }
    }

    /// Whether the upload section is shown for the current type.
    pub fn documents_visible(&self) -> bool {
        self.draft.kind.accepts_documents()
    }

    pub fn embed_visible(&self) -> bool {
        self.embed_visible
    }

    /// Snippet for the agent. In edit mode this is filled as soon as the form
    /// opens, though it is only shown after a submit.
    pub fn embed_text(&self) -> &str {
        &self.embed_text
    }

    fn ensure_editable(&self) -> Result<(), FormError> {
        if self.phase == FormPhase::Submitted {
            return Err(FormError::AlreadySubmitted);
        }
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), FormError> {
        self.ensure_editable()?;
        self.draft.name = name.into();
        Ok(())
    }

    pub fn set_type(&mut self, kind: AgentType) -> Result<(), FormError> {
        self.ensure_editable()?;
        self.draft.kind = kind;
        Ok(())
    }

    pub fn set_color(&mut self, color: impl Into<String>) -> Result<(), FormError> {
        self.ensure_editable()?;
        self.draft.color = color.into();
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), FormError> {
        self.ensure_editable()?;
        self.draft.description = description.into();
        Ok(())
    }

    /// Replace the attached documents with the names of the selected files.
    ///
    /// Only the final path component is kept; nothing is read from disk.
    pub fn attach_documents<I, P>(&mut self, files: I) -> Result<(), FormError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.ensure_editable()?;
        self.draft.documents = files
            .into_iter()
            .map(|file| {
                let path = file.as_ref();
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.to_string_lossy().into_owned())
            })
            .collect();
        Ok(())
    }

    /// Check the draft without saving it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.draft.name.is_empty() {
            return Err(ValidationError::new("Name is required"));
        }
        if self.draft.description.is_empty() {
            return Err(ValidationError::new("Description is required"));
        }
        if !is_hex_color(&self.draft.color) {
            return Err(ValidationError::new(
                "Color must be a hex value like #1a2b3c",
            ));
        }
        Ok(())
    }

    /// Validate and save the draft, then show the embed snippet.
    ///
    /// A rejected draft leaves both the form and the store untouched.
    pub fn submit(&mut self) -> Result<(), FormError> {
        self.ensure_editable()?;
        self.validate()?;

        self.phase = FormPhase::Submitting;
        let agent = match self.repo.upsert(&self.draft, self.id.as_deref()) {
            Ok(agent) => agent,
            Err(e) => {
                self.phase = FormPhase::Editing;
                return Err(e.into());
            }
        };

        self.embed_text = generate_embed(&agent.id);
        self.embed_visible = true;
        self.id = Some(agent.id);
        self.phase = FormPhase::Submitted;
        Ok(())
    }

    /// Copy the visible embed snippet to `clipboard`.
    pub fn copy_embed(&self, clipboard: &dyn Clipboard) -> Result<&'static str, FormError> {
        if !self.embed_visible || self.embed_text.is_empty() {
            return Err(FormError::EmbedUnavailable);
        }

        match clipboard.write_text(&self.embed_text) {
            Ok(()) => Ok(COPIED_NOTICE),
            Err(e) => {
                tracing::warn!(error = %e, "copy to clipboard failed");
                Err(e.into())
            }
        }
    }
}

/// `#rrggbb`, as produced by a color picker.
fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Clock;
    use crate::clipboard::ClipboardError;
    use crate::repository::StoreAgentRepository;
    use botdesk_store::MemoryStore;
    use std::cell::RefCell;
    use std::sync::Arc;

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        copied: RefCell<Vec<String>>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::CommandFailed("permission denied".to_string()))
        }
    }

    fn repo() -> StoreAgentRepository {
        StoreAgentRepository::with_clock(Arc::new(MemoryStore::new()), Arc::new(FixedClock(42)))
    }

    fn fill(form: &mut AgentForm<'_>, name: &str) {
        form.set_name(name).unwrap();
        form.set_description("answers questions").unwrap();
    }

    #[test]
    fn test_blank_form_defaults() {
        let repo = repo();
        let form = AgentForm::open(&repo, None);
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.draft().kind, AgentType::CollegeQueryBot);
        assert_eq!(form.draft().color, "#000000");
        assert!(form.draft().documents.is_empty());
        assert_eq!(form.title(), "Create New Agent");
        assert!(!form.embed_visible());
        assert!(form.embed_text().is_empty());
    }

    #[test]
    fn test_edit_form_loads_agent_and_prepares_embed() {
        let repo = repo();
        let mut create = AgentForm::create(&repo);
        fill(&mut create, "Bot1");
        create.submit().unwrap();
        let id = create.id().unwrap().to_string();

        let form = AgentForm::open(&repo, Some(&id));
        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!(form.submit_label(), "Update");
        assert_eq!(form.draft().name, "Bot1");
        assert_eq!(form.embed_text(), generate_embed(&id));
        assert!(!form.embed_visible());
    }

    #[test]
    fn test_unknown_id_falls_back_to_create() {
        let repo = repo();
        let form = AgentForm::open(&repo, Some("missing"));
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.id(), None);
        assert_eq!(form.draft(), &AgentDraft::default());
    }

    #[test]
    fn test_submit_requires_name_and_description() {
        let repo = repo();
        let mut form = AgentForm::create(&repo);

        let err = form.submit().unwrap_err();
        assert!(matches!(err, FormError::Validation(ref v) if v.message() == "Name is required"));

        form.set_name("Bot").unwrap();
        let err = form.submit().unwrap_err();
        assert!(
            matches!(err, FormError::Validation(ref v) if v.message() == "Description is required")
        );

        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(repo.list_all().is_empty());
    }

    #[test]
    fn test_blank_text_counts_as_filled() {
        let repo = repo();
        let mut form = AgentForm::create(&repo);
        form.set_name(" ").unwrap();
        form.set_description("\t").unwrap();
        form.submit().unwrap();
        assert_eq!(repo.list_all()[0].name, " ");
    }

    #[test]
    fn test_submit_rejects_bad_color() {
        let repo = repo();
        let mut form = AgentForm::create(&repo);
        fill(&mut form, "Bot");
        form.set_color("red").unwrap();
        assert!(matches!(form.submit(), Err(FormError::Validation(_))));
        assert!(repo.list_all().is_empty());
    }

    #[test]
    fn test_submit_shows_embed_for_new_id() {
        let repo = repo();
        let mut form = AgentForm::create(&repo);
        fill(&mut form, "Bot1");
        form.submit().unwrap();

        let agents = repo.list_all();
        assert_eq!(agents.len(), 1);
        assert_eq!(form.phase(), FormPhase::Submitted);
        assert!(form.embed_visible());
        assert!(form.embed_text().contains(&agents[0].id));
        assert_eq!(agents[0].created_at, 42);
    }

    #[test]
    fn test_submitted_form_is_closed() {
        let repo = repo();
        let mut form = AgentForm::create(&repo);
        fill(&mut form, "Bot1");
        form.submit().unwrap();

        assert!(matches!(form.set_name("again"), Err(FormError::AlreadySubmitted)));
        assert!(matches!(form.submit(), Err(FormError::AlreadySubmitted)));
        assert_eq!(repo.list_all().len(), 1);
    }

    #[test]
    fn test_stale_documents_kept_in_draft_but_not_saved() {
        let repo = repo();
        let mut form = AgentForm::create(&repo);
        fill(&mut form, "Docs");
        form.set_type(AgentType::AdvancedCollegeBot).unwrap();
        form.attach_documents(["/tmp/a.pdf", "b.pdf"]).unwrap();
        assert!(form.documents_visible());

        form.set_type(AgentType::AdmissionBot).unwrap();
        assert!(!form.documents_visible());
        assert_eq!(form.draft().documents, vec!["a.pdf", "b.pdf"]);

        form.submit().unwrap();
        assert!(repo.list_all()[0].documents.is_empty());
    }

    #[test]
    fn test_attach_replaces_previous_selection() {
        let repo = repo();
        let mut form = AgentForm::create(&repo);
        form.attach_documents(["a.pdf", "b.pdf"]).unwrap();
        form.attach_documents(["c.pdf", "c.pdf"]).unwrap();
        assert_eq!(form.draft().documents, vec!["c.pdf", "c.pdf"]);
    }

    #[test]
    fn test_copy_embed() {
        let repo = repo();
        let mut form = AgentForm::create(&repo);
        let clipboard = RecordingClipboard::default();
        assert!(matches!(form.copy_embed(&clipboard), Err(FormError::EmbedUnavailable)));

        fill(&mut form, "Bot1");
        form.submit().unwrap();
        assert_eq!(form.copy_embed(&clipboard).unwrap(), COPIED_NOTICE);
        assert_eq!(*clipboard.copied.borrow(), vec![form.embed_text().to_string()]);
    }

    #[test]
    fn test_copy_failure_leaves_form_intact() {
        let repo = repo();
        let mut form = AgentForm::create(&repo);
        fill(&mut form, "Bot1");
        form.submit().unwrap();

        let err = form.copy_embed(&DeniedClipboard).unwrap_err();
        assert!(matches!(err, FormError::Clipboard(_)));
        assert!(form.embed_visible());
        assert_eq!(form.phase(), FormPhase::Submitted);
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#000000"));
        assert!(is_hex_color("#A1b2C3"));
        assert!(!is_hex_color("000000"));
        assert!(!is_hex_color("#12345"));
        assert!(!is_hex_color("#12345g"));
    }
}
