// Audit service - Report source content with no unique match on the target
use crate::application::asset_matcher::{match_dashboard_id, match_look_id};
use crate::application::error::DeployError;
use crate::application::looker_api::LookerApi;
use crate::domain::board::Board;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingDashboard {
    pub dash_id: i64,
    pub dash_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingLook {
    pub look_id: i64,
    pub look_title: String,
}

/// Walk every item of `board` and collect the dashboards and looks that
/// `target` has no single slug match for, in section then item order.
///
/// Nothing is written to either instance. Lookup and transport failures
/// still abort the audit.
pub async fn audit_board_content(
    board: &Board,
    source: &dyn LookerApi,
    target: &dyn LookerApi,
) -> Result<(Vec<MissingDashboard>, Vec<MissingLook>), DeployError> {
    let mut missing_dashboards = Vec::new();
    let mut missing_looks = Vec::new();

    for section in &board.sections {
        for item in &section.items {
            if let Some(dashboard_id) = item.dashboard_id {
                match match_dashboard_id(dashboard_id, source, target).await {
                    Ok(_) => {}
                    Err(e) if e.is_match_failure() => {
                        let dash = source.dashboard(dashboard_id).await?;
                        tracing::warn!("Dashboard {} ({}) has no match: {}", dash.id, dash.title, e);
                        missing_dashboards.push(MissingDashboard {
                            dash_id: dash.id,
                            dash_title: dash.title,
                        });
                    }
                    Err(e) => return Err(e),
                }
            }

            if let Some(look_id) = item.look_id {
                match match_look_id(look_id, source, target).await {
                    Ok(_) => {}
                    Err(e) if e.is_match_failure() => {
                        let look = source.look(look_id).await?;
                        tracing::warn!("Look {} ({}) has no match: {}", look.id, look.title, e);
                        missing_looks.push(MissingLook {
                            look_id: look.id,
                            look_title: look.title,
                        });
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    }

    Ok((missing_dashboards, missing_looks))
}
