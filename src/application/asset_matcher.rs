// Asset matcher - Map a source dashboard/look id to its target counterpart by slug
use crate::application::error::{require_unique, DeployError};
use crate::application::looker_api::LookerApi;
use crate::domain::asset::{Asset, AssetKind};
use anyhow::anyhow;

fn portable_slug(asset: &Asset, kind: AssetKind) -> Result<&str, DeployError> {
    if asset.slug.is_empty() {
        return Err(DeployError::Api(anyhow!("source {} {} has no slug", kind, asset.id)));
    }
    Ok(&asset.slug)
}

/// Resolve `source_id` to the id of the single target dashboard sharing its slug.
pub async fn match_dashboard_id(
    source_id: i64,
    source: &dyn LookerApi,
    target: &dyn LookerApi,
) -> Result<i64, DeployError> {
    let source_dashboard = source.dashboard(source_id).await?;
    tracing::debug!(
        "Matching dashboard {} by slug {}",
        source_id,
        source_dashboard.slug
    );

    let slug = portable_slug(&source_dashboard, AssetKind::Dashboard)?;
    let found = target.search_dashboards(slug).await?;
    let matched = require_unique(found, AssetKind::Dashboard, slug)?;
    Ok(matched.id)
}

/// Resolve `source_id` to the id of the single target look sharing its slug.
pub async fn match_look_id(
    source_id: i64,
    source: &dyn LookerApi,
    target: &dyn LookerApi,
) -> Result<i64, DeployError> {
    let source_look = source.look(source_id).await?;
    tracing::debug!("Matching look {} by slug {}", source_id, source_look.slug);

    let slug = portable_slug(&source_look, AssetKind::Look)?;
    let found = target.search_looks(slug).await?;
    let matched = require_unique(found, AssetKind::Look, slug)?;
    Ok(matched.id)
}
