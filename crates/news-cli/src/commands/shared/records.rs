//! Create, update and delete flows shared by every admin entity.

use news_core::entities::Record;
use news_core::enums::EntityKind;
use news_core::ids::RecordId;
use news_core::responses::{DeleteResponse, SaveResponse};
use news_store::editor::EntityForm;
use news_store::service::Collections;
use news_store::{NewsService, StoreError};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DeleteArgs;
use crate::commands::shared::confirm::confirm_deletion;
use crate::context::AppContext;
use crate::output::output;

/// Form for `target`: blank when creating, prefilled from the stored record
/// when updating.
pub fn open_form<F>(service: &NewsService, target: Option<RecordId>) -> anyhow::Result<F>
where
    F: EntityForm + Default,
    NewsService: Collections<F::Record>,
{
    let Some(id) = target else {
        return Ok(F::default());
    };
    let record = <NewsService as Collections<F::Record>>::records(service)
        .get(id)
        .ok_or(StoreError::NotFound {
            kind: <F::Record as Record>::KIND,
            id,
        })?;
    Ok(F::prefill(record))
}

/// Submit `form` and print the stored record.
pub fn save<F>(
    ctx: &mut AppContext,
    form: F,
    target: Option<RecordId>,
    flags: &GlobalFlags,
) -> anyhow::Result<()>
where
    F: EntityForm,
    F::Record: Serialize,
    NewsService: Collections<F::Record>,
{
    let saved = ctx.service.save(form, target)?;
    output(
        &SaveResponse {
            created: saved.created(),
            record: saved.record,
        },
        flags.format,
    )
}

/// Confirm (unless `--yes`) and delete.
pub fn delete(
    ctx: &mut AppContext,
    kind: EntityKind,
    args: &DeleteArgs,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let pending = ctx.service.request_deletion(kind, args.id)?;
    let confirmed = args.yes || confirm_deletion(&pending, &mut std::io::stdin().lock())?;
    let removed = if confirmed {
        ctx.service.confirm(pending)
    } else {
        if !flags.quiet {
            eprintln!("deletion cancelled");
        }
        false
    };
    output(
        &DeleteResponse {
            kind,
            id: args.id,
            removed,
        },
        flags.format,
    )
}
