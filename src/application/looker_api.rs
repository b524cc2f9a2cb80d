// API trait for the instances boards are read from and written to
use crate::domain::asset::Asset;
use crate::domain::board::{Board, Item, Section, WriteBoard, WriteItem, WriteSection};
use async_trait::async_trait;

#[async_trait]
pub trait LookerApi: Send + Sync {
    /// Fetch a single dashboard by its instance-local id
    async fn dashboard(&self, dashboard_id: i64) -> anyhow::Result<Asset>;

    /// All dashboards whose slug equals `slug`
    async fn search_dashboards(&self, slug: &str) -> anyhow::Result<Vec<Asset>>;

    /// Fetch a single look by its instance-local id
    async fn look(&self, look_id: i64) -> anyhow::Result<Asset>;

    /// All looks whose slug equals `slug`
    async fn search_looks(&self, slug: &str) -> anyhow::Result<Vec<Asset>>;

    /// All boards with the given title, including their sections
    async fn search_boards(&self, title: &str) -> anyhow::Result<Vec<Board>>;

    /// Full board definition with sections and items
    async fn board(&self, board_id: i64) -> anyhow::Result<Board>;

    async fn create_board(&self, board: &WriteBoard) -> anyhow::Result<Board>;

    async fn update_board(&self, board_id: i64, board: &WriteBoard) -> anyhow::Result<Board>;

    async fn create_section(&self, section: &WriteSection) -> anyhow::Result<Section>;

    async fn delete_section(&self, section_id: i64) -> anyhow::Result<()>;

    async fn create_item(&self, item: &WriteItem) -> anyhow::Result<Item>;
}
