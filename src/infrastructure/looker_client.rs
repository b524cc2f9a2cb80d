// REST client implementation of LookerApi
use crate::application::looker_api::LookerApi;
use crate::domain::asset::Asset;
use crate::domain::board::{Board, Item, Section, WriteBoard, WriteItem, WriteSection};
use crate::infrastructure::api_models::{
    asset_from_api, board_from_api, item_from_api, section_from_api, write_board_to_api,
    write_item_to_api, write_section_to_api, ApiAsset, ApiHomepage, ApiHomepageItem,
    ApiHomepageSection, ApiLoginResponse,
};
use crate::infrastructure::config::InstanceSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const ASSET_FIELDS: &str = "id,slug,title";

#[derive(Clone)]
pub struct LookerClient {
    client: Client,
    api_root: String,
    token: String,
}

impl LookerClient {
    /// Log in with the instance's API credentials and keep the access token.
    pub async fn login(settings: &InstanceSettings) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!settings.verify_ssl)
            .timeout(Duration::from_secs(settings.timeout))
            .build()
            .context("Failed to build HTTP client")?;

        let api_root = format!(
            "{}/api/{}",
            settings.base_url.trim_end_matches('/'),
            settings.api_version
        );

        tracing::debug!("Logging in to {}", api_root);
        let response = client
            .post(format!("{}/login", api_root))
            .form(&[
                ("client_id", settings.client_id.as_str()),
                ("client_secret", settings.client_secret.as_str()),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to send login request to {}", api_root))?;

        let login: ApiLoginResponse = Self::parse(response, "login").await?;

        Ok(Self {
            client,
            api_root,
            token: login.access_token,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.api_root, path))
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/json")
    }

    async fn check(response: Response, what: &str) -> Result<Response> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{} failed with status {}: {}", what, status, body);
        }
        Ok(response)
    }

    async fn parse<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
        Self::check(response, what)
            .await?
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse {} response", what))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!("GET {}", path);
        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .with_context(|| format!("Failed to send GET {}", path))?;
        Self::parse(response, path).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!("{} {}", method, path);
        let response = self
            .request(method.clone(), path)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send {} {}", method, path))?;
        Self::parse(response, path).await
    }
}

#[async_trait]
impl LookerApi for LookerClient {
    async fn dashboard(&self, dashboard_id: i64) -> Result<Asset> {
        let raw: ApiAsset = self
            .get(&format!("/dashboards/{}?fields={}", dashboard_id, ASSET_FIELDS))
            .await?;
        asset_from_api(raw)
    }

    async fn search_dashboards(&self, slug: &str) -> Result<Vec<Asset>> {
        let raw: Vec<ApiAsset> = self
            .get(&format!(
                "/dashboards/search?slug={}&fields={}",
                urlencoding::encode(slug),
                ASSET_FIELDS
            ))
            .await?;
        raw.into_iter().map(asset_from_api).collect()
    }

    async fn look(&self, look_id: i64) -> Result<Asset> {
        let raw: ApiAsset = self
            .get(&format!("/looks/{}?fields={}", look_id, ASSET_FIELDS))
            .await?;
        asset_from_api(raw)
    }

    async fn search_looks(&self, slug: &str) -> Result<Vec<Asset>> {
        let raw: Vec<ApiAsset> = self
            .get(&format!(
                "/looks/search?slug={}&fields={}",
                urlencoding::encode(slug),
                ASSET_FIELDS
            ))
            .await?;
        raw.into_iter().map(asset_from_api).collect()
    }

    async fn search_boards(&self, title: &str) -> Result<Vec<Board>> {
        let raw: Vec<ApiHomepage> = self
            .get(&format!("/homepages/search?title={}", urlencoding::encode(title)))
            .await?;
        Ok(raw.into_iter().map(board_from_api).collect())
    }

    async fn board(&self, board_id: i64) -> Result<Board> {
        let raw: ApiHomepage = self.get(&format!("/homepages/{}", board_id)).await?;
        Ok(board_from_api(raw))
    }

    async fn create_board(&self, board: &WriteBoard) -> Result<Board> {
        let raw: ApiHomepage = self
            .send_json(Method::POST, "/homepages", &write_board_to_api(board))
            .await?;
        Ok(board_from_api(raw))
    }

    async fn update_board(&self, board_id: i64, board: &WriteBoard) -> Result<Board> {
        let raw: ApiHomepage = self
            .send_json(
                Method::PATCH,
                &format!("/homepages/{}", board_id),
                &write_board_to_api(board),
            )
            .await?;
        Ok(board_from_api(raw))
    }

    async fn create_section(&self, section: &WriteSection) -> Result<Section> {
        let raw: ApiHomepageSection = self
            .send_json(Method::POST, "/homepage_sections", &write_section_to_api(section))
            .await?;
        Ok(section_from_api(raw))
    }

    async fn delete_section(&self, section_id: i64) -> Result<()> {
        let path = format!("/homepage_sections/{}", section_id);
        tracing::debug!("DELETE {}", path);
        let response = self
            .request(Method::DELETE, &path)
            .send()
            .await
            .with_context(|| format!("Failed to send DELETE {}", path))?;
        Self::check(response, &path).await?;
        Ok(())
    }

    async fn create_item(&self, item: &WriteItem) -> Result<Item> {
        let raw: ApiHomepageItem = self
            .send_json(Method::POST, "/homepage_items", &write_item_to_api(item))
            .await?;
        Ok(item_from_api(raw))
    }
}
