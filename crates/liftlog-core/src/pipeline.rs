//! Exercise-resolution step of the workout commit pipeline.
//!
//! Entries are processed strictly in insertion order; each catalog creation
//! and its follow-up catalog re-fetch completes before the next entry is
//! touched. The first failed creation aborts the whole commit — no partial
//! workout is ever persisted.

use std::rc::Rc;

use liftlog_types::exercise::ExerciseCreate;
use liftlog_types::workout::{EntryExercise, EntryPayload, WorkoutEntry};
use liftlog_types::{Result, StoreError};

use crate::catalog::CatalogStore;
use crate::ports::GatewayPort;

pub(crate) async fn resolve_entries(
    gateway: &Rc<dyn GatewayPort>,
    catalog: &CatalogStore,
    entries: &[WorkoutEntry],
) -> Result<Vec<EntryPayload>> {
    let mut resolved = Vec::with_capacity(entries.len());

    for entry in entries {
        match &entry.exercise {
            EntryExercise::Saved { item_id, details } => {
                resolved.push(EntryPayload {
                    item_id: *item_id,
                    name: details.name.clone(),
                    sets: entry.sets.clone(),
                    details: details.clone(),
                });
            }
            EntryExercise::New(draft) => {
                log::info!("creating catalog exercise '{}'", draft.name);
                let payload = ExerciseCreate::from_draft(draft);
                let saved = match gateway.create_exercise(&payload).await {
                    Ok(saved) => saved,
                    Err(e) => {
                        return Err(StoreError::ExerciseCreate {
                            name: draft.name.clone(),
                            message: e.to_string(),
                        });
                    }
                };
                resolved.push(EntryPayload {
                    item_id: saved.item_id,
                    name: saved.name.clone(),
                    sets: entry.sets.clone(),
                    details: saved,
                });
                // keep the catalog consistent with what was just created;
                // a failed re-fetch does not abort the commit
                let _ = catalog.fetch_all().await;
            }
        }
    }

    Ok(resolved)
}
