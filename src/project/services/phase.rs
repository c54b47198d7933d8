//! Phase shared by the project and task editors.

/// Where an editor is in the draft-commit workflow.
///
/// Validation happens inside `commit`: on success the editor returns to
/// [`EditorPhase::Viewing`], on failure it stays in
/// [`EditorPhase::Editing`] with the draft kept for correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorPhase {
    /// Read-only display of the persisted entity.
    Viewing,
    /// A mutable draft is open.
    Editing,
}
