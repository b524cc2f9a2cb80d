// Deploy service - Audit or deploy named boards from the source to a target
use crate::application::audit_service::{audit_board_content, MissingDashboard, MissingLook};
use crate::application::board_service::{
    create_board_item, create_board_section, create_or_update_board, return_board,
};
use crate::application::error::DeployError;
use crate::application::looker_api::LookerApi;
use crate::domain::board::Board;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub board_title: String,
    pub missing_dashboards: Vec<MissingDashboard>,
    pub missing_looks: Vec<MissingLook>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.missing_dashboards.is_empty() && self.missing_looks.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeploySummary {
    pub board_title: String,
    pub board_id: i64,
    pub sections: usize,
    pub items: usize,
    pub skipped_items: usize,
}

#[derive(Clone)]
pub struct DeployService {
    source: Arc<dyn LookerApi>,
    allow_partial: bool,
}

impl DeployService {
    pub fn new(source: Arc<dyn LookerApi>, allow_partial: bool) -> Self {
        Self {
            source,
            allow_partial,
        }
    }

    /// Full definition of the source board titled `title`.
    pub async fn load_source_board(&self, title: &str) -> Result<Board, DeployError> {
        let board_id = return_board(title, self.source.as_ref())
            .await?
            .ok_or_else(|| DeployError::BoardNotFound(title.to_string()))?;
        let board = self.source.board(board_id).await?;
        tracing::debug!(
            "Loaded board '{}' ({}): {} sections, {} items",
            board.title,
            board_id,
            board.sections.len(),
            board.item_count()
        );
        Ok(board)
    }

    pub async fn audit(&self, title: &str, target: &dyn LookerApi) -> Result<AuditReport, DeployError> {
        let board = self.load_source_board(title).await?;
        self.audit_loaded(&board, target).await
    }

    async fn audit_loaded(&self, board: &Board, target: &dyn LookerApi) -> Result<AuditReport, DeployError> {
        let (missing_dashboards, missing_looks) =
            audit_board_content(board, self.source.as_ref(), target).await?;
        Ok(AuditReport {
            board_title: board.title.clone(),
            missing_dashboards,
            missing_looks,
        })
    }

    /// Mirror the source board titled `title` onto `target`.
    ///
    /// Content is audited first; unless partial deploys are allowed, any
    /// unmatched dashboard or look stops the deploy before the target is
    /// touched. With partial deploys, unmatched items are skipped.
    pub async fn deploy(&self, title: &str, target: &dyn LookerApi) -> Result<DeploySummary, DeployError> {
        let board = self.load_source_board(title).await?;

        let report = self.audit_loaded(&board, target).await?;
        if !report.is_clean() && !self.allow_partial {
            return Err(DeployError::MissingContent {
                title: board.title.clone(),
                dashboards: report.missing_dashboards.len(),
                looks: report.missing_looks.len(),
            });
        }

        let board_id = create_or_update_board(&board, target).await?;
        let mut summary = DeploySummary {
            board_title: board.title.clone(),
            board_id,
            sections: 0,
            items: 0,
            skipped_items: 0,
        };

        for section in &board.sections {
            let section_id = create_board_section(section, board_id, target).await?;
            summary.sections += 1;

            for item in &section.items {
                match create_board_item(item, section_id, self.source.as_ref(), target).await {
                    Ok(_) => summary.items += 1,
                    Err(e) if self.allow_partial && e.is_match_failure() => {
                        tracing::warn!("Skipping item {:?} in section '{}': {}", item.id, section.title, e);
                        summary.skipped_items += 1;
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        tracing::info!(
            "Deployed board '{}' as {}: {} sections, {} items, {} skipped",
            summary.board_title,
            summary.board_id,
            summary.sections,
            summary.items,
            summary.skipped_items
        );
        Ok(summary)
    }
}
