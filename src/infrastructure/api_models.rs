// Wire types for the REST API and their mapping to domain models
use crate::domain::asset::Asset;
use crate::domain::board::{Board, Item, Section, WriteBoard, WriteItem, WriteSection};
use serde::{Deserialize, Deserializer, Serialize};

/// Ids arrive as numbers on most resources and as numeric strings on others
/// (dashboards in particular).
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

fn opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(n)) => Ok(Some(n)),
        Some(RawId::Text(s)) => s
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("non-numeric id '{}'", s))),
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiAsset {
    #[serde(default, deserialize_with = "opt_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiHomepage {
    #[serde(default, deserialize_with = "opt_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub homepage_sections: Option<Vec<ApiHomepageSection>>,
}

#[derive(Debug, Deserialize)]
pub struct ApiHomepageSection {
    #[serde(default, deserialize_with = "opt_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_header: Option<bool>,
    #[serde(default)]
    pub detail_url: Option<String>,
    #[serde(default)]
    pub homepage_items: Option<Vec<ApiHomepageItem>>,
}

#[derive(Debug, Deserialize)]
pub struct ApiHomepageItem {
    #[serde(default, deserialize_with = "opt_id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "opt_id")]
    pub dashboard_id: Option<i64>,
    #[serde(default, deserialize_with = "opt_id")]
    pub look_id: Option<i64>,
    #[serde(default, deserialize_with = "opt_id")]
    pub homepage_section_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ApiWriteHomepage<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct ApiWriteHomepageSection<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub homepage_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ApiWriteHomepageItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub look_id: Option<i64>,
    pub homepage_section_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ApiLoginResponse {
    pub access_token: String,
}

pub fn asset_from_api(asset: ApiAsset) -> anyhow::Result<Asset> {
    let id = asset
        .id
        .ok_or_else(|| anyhow::anyhow!("asset record returned without an id"))?;
    // An empty slug would turn a search into "list everything".
    let slug = asset
        .slug
        .filter(|slug| !slug.is_empty())
        .ok_or_else(|| anyhow::anyhow!("asset {} returned without a slug", id))?;
    Ok(Asset::new(id, slug, asset.title.unwrap_or_default()))
}

pub fn board_from_api(homepage: ApiHomepage) -> Board {
    Board {
        id: homepage.id,
        title: homepage.title.unwrap_or_default(),
        description: homepage.description,
        sections: homepage
            .homepage_sections
            .unwrap_or_default()
            .into_iter()
            .map(section_from_api)
            .collect(),
    }
}

pub fn section_from_api(section: ApiHomepageSection) -> Section {
    Section {
        id: section.id,
        title: section.title.unwrap_or_default(),
        description: section.description,
        is_header: section.is_header.unwrap_or(false),
        detail_url: section.detail_url,
        items: section
            .homepage_items
            .unwrap_or_default()
            .into_iter()
            .map(item_from_api)
            .collect(),
    }
}

pub fn item_from_api(item: ApiHomepageItem) -> Item {
    Item {
        id: item.id,
        dashboard_id: item.dashboard_id,
        look_id: item.look_id,
        homepage_section_id: item.homepage_section_id,
    }
}

pub fn write_board_to_api(board: &WriteBoard) -> ApiWriteHomepage<'_> {
    ApiWriteHomepage {
        title: &board.title,
        description: board.description.as_deref(),
    }
}

pub fn write_section_to_api(section: &WriteSection) -> ApiWriteHomepageSection<'_> {
    ApiWriteHomepageSection {
        title: &section.title,
        description: section.description.as_deref(),
        homepage_id: section.homepage_id,
    }
}

pub fn write_item_to_api(item: &WriteItem) -> ApiWriteHomepageItem {
    ApiWriteHomepageItem {
        dashboard_id: item.dashboard_id,
        look_id: item.look_id,
        homepage_section_id: item.homepage_section_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::ItemContent;
    use serde_json::json;

    #[test]
    fn test_board_from_api() {
        let raw = json!({
            "id": 3,
            "title": "foo",
            "description": "bar",
            "homepage_sections": [{
                "id": 4,
                "title": "Overview",
                "is_header": true,
                "detail_url": "/browse",
                "homepage_items": [
                    {"id": 5, "dashboard_id": "2", "look_id": null, "homepage_section_id": 4},
                    {"id": 6, "look_id": 1, "homepage_section_id": 4}
                ]
            }]
        });

        let homepage: ApiHomepage = serde_json::from_value(raw).unwrap();
        let board = board_from_api(homepage);

        assert_eq!(board.id, Some(3));
        assert_eq!(board.title, "foo");
        assert_eq!(board.sections.len(), 1);
        assert!(board.sections[0].is_header);
        assert_eq!(board.sections[0].items[0].content(), Some(ItemContent::Dashboard(2)));
        assert_eq!(board.sections[0].items[1].content(), Some(ItemContent::Look(1)));
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let raw = json!({"id": "model::lookml_dash", "slug": "x", "title": "y"});
        assert!(serde_json::from_value::<ApiAsset>(raw).is_err());
    }

    #[test]
    fn test_asset_without_id_is_rejected() {
        let asset = ApiAsset {
            id: None,
            slug: Some("BurritoCat".to_string()),
            title: None,
        };
        assert!(asset_from_api(asset).is_err());
    }

    #[test]
    fn test_asset_without_slug_is_rejected() {
        for raw in [
            json!({"id": 2, "slug": null, "title": "foobarbaz"}),
            json!({"id": 2, "slug": "", "title": "foobarbaz"}),
            json!({"id": 2, "title": "foobarbaz"}),
        ] {
            let asset: ApiAsset = serde_json::from_value(raw).unwrap();
            let err = asset_from_api(asset).unwrap_err();
            assert!(err.to_string().contains("without a slug"));
        }

        let asset: ApiAsset =
            serde_json::from_value(json!({"id": "2", "slug": "BurritoCat"})).unwrap();
        assert_eq!(asset_from_api(asset).unwrap(), Asset::new(2, "BurritoCat", ""));
    }

    #[test]
    fn test_write_item_omits_unset_reference() {
        let item = WriteItem {
            dashboard_id: Some(1),
            look_id: None,
            homepage_section_id: 10,
        };
        let body = serde_json::to_value(write_item_to_api(&item)).unwrap();
        assert_eq!(body, json!({"dashboard_id": 1, "homepage_section_id": 10}));
    }

    #[test]
    fn test_write_board_body() {
        let board = WriteBoard {
            title: "taco".to_string(),
            description: Some("burrito".to_string()),
        };
        let body = serde_json::to_value(write_board_to_api(&board)).unwrap();
        assert_eq!(body, json!({"title": "taco", "description": "burrito"}));
    }
}
