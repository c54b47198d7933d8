//! Given steps for project draft-commit BDD scenarios.

use super::world::{ProjectDraftWorld, run_async};
use chrono::Duration;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a new project draft named "{name}""#)]
fn new_named_draft(world: &mut ProjectDraftWorld, name: String) -> Result<(), eyre::Report> {
    world.open_creation().draft_mut()?.name = name;
    Ok(())
}

#[given("a new project draft without a name")]
fn new_unnamed_draft(world: &mut ProjectDraftWorld) {
    world.open_creation();
}

#[given("the draft ends {days:i64} days after it starts")]
fn draft_ends_after(world: &mut ProjectDraftWorld, days: i64) -> Result<(), eyre::Report> {
    let draft = world.editor_mut()?.draft_mut()?;
    draft.end = draft.start + Duration::days(days);
    Ok(())
}

#[given("the draft ends {days:i64} days before it starts")]
fn draft_ends_before(world: &mut ProjectDraftWorld, days: i64) -> Result<(), eyre::Report> {
    let draft = world.editor_mut()?.draft_mut()?;
    draft.end = draft.start - Duration::days(days);
    Ok(())
}

#[given(r#"a committed project named "{name}""#)]
fn committed_project(world: &mut ProjectDraftWorld, name: String) -> Result<(), eyre::Report> {
    let editor = world.open_creation();
    editor.draft_mut()?.name = name;
    run_async(editor.commit()).wrap_err("commit project in scenario setup")?;
    Ok(())
}
