//! Command handlers for the cat registry.
//!
//! Each handler turns a command into a repository call and logs the outcome
//! against the command's correlation ID. Validation and identifier
//! assignment belong to the repository and the `Cat` constructors.

use cattery_core::error::DomainError;
use tracing::{debug, info, warn};

use crate::domain::commands::{CreateCat, DeleteCat, UpdateCat};
use crate::domain::entities::{Cat, CatDetails};
use crate::domain::repository::CatRepository;

fn log_failure(correlation_id: uuid::Uuid, operation: &'static str, err: &DomainError) {
    match err {
        DomainError::CatNotFound(cat_id) => {
            warn!(%correlation_id, %cat_id, operation, "cat not found");
        }
        DomainError::CatInvalid(violations) => {
            warn!(%correlation_id, operation, ?violations, "cat rejected");
        }
    }
}

/// Handles the `CreateCat` command: stores a new cat under the next free
/// identifier.
///
/// # Errors
///
/// Returns `DomainError::CatInvalid` if the fields break a cat rule.
pub async fn handle_create_cat(
    command: &CreateCat,
    repo: &dyn CatRepository,
) -> Result<Cat, DomainError> {
    debug!(correlation_id = %command.correlation_id, name = %command.name, "creating cat");

    let details = CatDetails {
        name: command.name.clone(),
        breed: command.breed.clone(),
        birth_date: command.birth_date,
        death_date: command.death_date,
    };
    let cat = repo
        .create(details)
        .await
        .inspect_err(|err| log_failure(command.correlation_id, "create", err))?;

    info!(
        correlation_id = %command.correlation_id,
        cat_id = %cat.id(),
        name = cat.name(),
        "cat created"
    );
    Ok(cat)
}

/// Handles the `UpdateCat` command: merges the requested changes over the
/// stored cat.
///
/// # Errors
///
/// Returns `DomainError::CatNotFound` if no cat has the ID, or
/// `DomainError::CatInvalid` if the merged cat breaks a rule.
pub async fn handle_update_cat(
    command: &UpdateCat,
    repo: &dyn CatRepository,
) -> Result<Cat, DomainError> {
    debug!(correlation_id = %command.correlation_id, cat_id = %command.cat_id, "updating cat");

    let cat = repo
        .update(command.cat_id, command.changes.clone())
        .await
        .inspect_err(|err| log_failure(command.correlation_id, "update", err))?;

    info!(correlation_id = %command.correlation_id, cat_id = %cat.id(), "cat updated");
    Ok(cat)
}

/// Handles the `DeleteCat` command.
///
/// # Errors
///
/// Returns `DomainError::CatNotFound` if no cat has the ID.
pub async fn handle_delete_cat(
    command: &DeleteCat,
    repo: &dyn CatRepository,
) -> Result<(), DomainError> {
    debug!(correlation_id = %command.correlation_id, cat_id = %command.cat_id, "deleting cat");

    repo.remove(command.cat_id)
        .await
        .inspect_err(|err| log_failure(command.correlation_id, "delete", err))?;

    info!(correlation_id = %command.correlation_id, cat_id = %command.cat_id, "cat deleted");
    Ok(())
}
