//! Then steps for project draft-commit BDD scenarios.

use super::world::{ProjectDraftWorld, run_async};
use dailytask::project::{
    domain::ProjectDomainError,
    ports::ProjectRepository,
    services::{EditorPhase, ProjectEditorError},
};
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then("the commit succeeds")]
fn commit_succeeds(world: &ProjectDraftWorld) -> Result<(), eyre::Report> {
    world.committed()?;
    Ok(())
}

#[then("the commit fails with an invalid date range error")]
fn commit_fails_with_invalid_date_range(world: &ProjectDraftWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_commit
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing commit result"))?;

    if !matches!(
        result,
        Err(ProjectEditorError::Domain(
            ProjectDomainError::InvalidDateRange { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidDateRange error, got {result:?}"
        ));
    }

    Ok(())
}

#[then("the store holds {count:usize} project")]
fn store_holds(world: &ProjectDraftWorld, count: usize) -> Result<(), eyre::Report> {
    let projects =
        run_async(world.store.fetch_projects()).wrap_err("fetch projects from the store")?;
    eyre::ensure!(
        projects.len() == count,
        "expected {count} stored projects, found {}",
        projects.len()
    );
    Ok(())
}

#[then("the editor is viewing the project")]
fn editor_is_viewing(world: &ProjectDraftWorld) -> Result<(), eyre::Report> {
    let editor = world
        .editor
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing project editor"))?;
    eyre::ensure!(
        editor.phase() == EditorPhase::Viewing,
        "expected viewing phase, found {:?}",
        editor.phase()
    );
    eyre::ensure!(
        editor.project() == Some(world.committed()?),
        "editor does not show the committed project"
    );
    Ok(())
}

#[then("the editor is still editing")]
fn editor_is_editing(world: &ProjectDraftWorld) -> Result<(), eyre::Report> {
    let editor = world
        .editor
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing project editor"))?;
    eyre::ensure!(
        editor.phase() == EditorPhase::Editing,
        "expected editing phase, found {:?}",
        editor.phase()
    );
    eyre::ensure!(editor.draft().is_some(), "draft was discarded");
    Ok(())
}

#[then(r#"the project name is "{name}""#)]
fn project_name_is(world: &ProjectDraftWorld, name: String) -> Result<(), eyre::Report> {
    let project = world.committed()?;
    eyre::ensure!(
        project.name() == name,
        "expected name {name:?}, found {:?}",
        project.name()
    );
    Ok(())
}

#[then(r#"the project description is "{description}""#)]
fn project_description_is(
    world: &ProjectDraftWorld,
    description: String,
) -> Result<(), eyre::Report> {
    let project = world.committed()?;
    eyre::ensure!(
        project.description() == description,
        "expected description {description:?}, found {:?}",
        project.description()
    );
    Ok(())
}
