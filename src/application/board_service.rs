// Board service - Resolve, create and populate boards on an instance
use crate::application::asset_matcher::{match_dashboard_id, match_look_id};
use crate::application::error::{find_unique, DeployError};
use crate::application::looker_api::LookerApi;
use crate::domain::asset::AssetKind;
use crate::domain::board::{Board, Item, ItemContent, Section, WriteItem};
use anyhow::anyhow;

fn record_id(id: Option<i64>, what: &str) -> Result<i64, DeployError> {
    id.ok_or_else(|| DeployError::Api(anyhow!("{} record returned without an id", what)))
}

/// Id of the board titled `title`, or `None` if the instance has none.
pub async fn return_board(title: &str, sdk: &dyn LookerApi) -> Result<Option<i64>, DeployError> {
    let found = sdk.search_boards(title).await?;
    match find_unique(found, AssetKind::Board, title)? {
        Some(board) => Ok(Some(record_id(board.id, "board")?)),
        None => Ok(None),
    }
}

/// Make sure a board with `board`'s title exists on `sdk` and is empty.
///
/// An existing board keeps its id but loses every section it had; the title
/// and description are then rewritten. More than one board with the same
/// title is left for an operator to sort out.
pub async fn create_or_update_board(board: &Board, sdk: &dyn LookerApi) -> Result<i64, DeployError> {
    let mut found = sdk.search_boards(&board.title).await?;
    let write = board.to_write();

    match found.len() {
        0 => {
            let created = sdk.create_board(&write).await?;
            let board_id = record_id(created.id, "board")?;
            tracing::info!("Created board '{}' with id {}", board.title, board_id);
            Ok(board_id)
        }
        1 => {
            let existing = found.remove(0);
            let board_id = record_id(existing.id, "board")?;

            for section in &existing.sections {
                if let Some(section_id) = section.id {
                    tracing::debug!("Deleting section {} from board {}", section_id, board_id);
                    sdk.delete_section(section_id).await?;
                }
            }

            sdk.update_board(board_id, &write).await?;
            tracing::info!("Updated board '{}' with id {}", board.title, board_id);
            Ok(board_id)
        }
        n => Err(DeployError::Precondition(format!(
            "{} boards titled '{}' exist on the target",
            n, board.title
        ))),
    }
}

pub async fn create_board_section(
    section: &Section,
    board_id: i64,
    sdk: &dyn LookerApi,
) -> Result<i64, DeployError> {
    let created = sdk.create_section(&section.to_write(board_id)).await?;
    let section_id = record_id(created.id, "section")?;
    tracing::debug!("Created section '{}' with id {}", section.title, section_id);
    Ok(section_id)
}

/// Recreate `item` under `section_id` on the target, pointing at the target's
/// copy of whatever dashboard or look it referenced on the source.
pub async fn create_board_item(
    item: &Item,
    section_id: i64,
    source: &dyn LookerApi,
    target: &dyn LookerApi,
) -> Result<Item, DeployError> {
    let content = item.content().ok_or_else(|| {
        DeployError::Precondition(format!(
            "item {:?} must reference exactly one of a dashboard or a look",
            item.id
        ))
    })?;

    let resolved = match content {
        ItemContent::Dashboard(id) => ItemContent::Dashboard(match_dashboard_id(id, source, target).await?),
        ItemContent::Look(id) => ItemContent::Look(match_look_id(id, source, target).await?),
    };

    let created = target.create_item(&WriteItem::new(resolved, section_id)).await?;
    tracing::debug!("Created item {:?} in section {}", created.id, section_id);
    Ok(created)
}
