// In-memory LookerApi for tests
use crate::application::looker_api::LookerApi;
use crate::domain::asset::Asset;
use crate::domain::board::{Board, Item, Section, WriteBoard, WriteItem, WriteSection};
use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::Mutex;

/// A write call received by [`MockApi`], in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateBoard(WriteBoard),
    UpdateBoard(i64, WriteBoard),
    CreateSection(WriteSection),
    DeleteSection(i64),
    CreateItem(WriteItem),
}

/// Serves canned dashboards, looks and boards, and records every write.
/// Created records get ids handed out from `next_id` upwards.
pub struct MockApi {
    dashboards: Vec<Asset>,
    looks: Vec<Asset>,
    boards: Vec<Board>,
    calls: Mutex<Vec<Call>>,
    next_id: Mutex<i64>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            dashboards: Vec::new(),
            looks: Vec::new(),
            boards: Vec::new(),
            calls: Mutex::new(Vec::new()),
            next_id: Mutex::new(100),
        }
    }
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dashboard(mut self, dashboard: Asset) -> Self {
        self.dashboards.push(dashboard);
        self
    }

    pub fn with_look(mut self, look: Asset) -> Self {
        self.looks.push(look);
        self
    }

    pub fn with_board(mut self, board: Board) -> Self {
        self.boards.push(board);
        self
    }

    pub fn with_next_id(self, id: i64) -> Self {
        *self.next_id.lock().unwrap() = id;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn allocate_id(&self) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        let id = *next;
        *next += 1;
        id
    }
}

/// The dashboard/look pair most tests share: both titled "foobarbaz".
pub fn mock_dash() -> Asset {
    Asset::new(2, "BurritoCat", "foobarbaz")
}

pub fn mock_look() -> Asset {
    Asset::new(1, "TacoCat", "foobarbaz")
}

/// Board 3 with section 4 holding one item that references dashboard 2 and
/// look 1 at once.
pub fn mock_board() -> Board {
    let item = Item {
        id: Some(5),
        dashboard_id: Some(2),
        look_id: Some(1),
        homepage_section_id: Some(4),
    };
    let section = Section {
        id: Some(4),
        items: vec![item],
        ..Default::default()
    };
    Board::new("foo", Some("bar".to_string()))
        .with_id(3)
        .with_section(section)
}

#[async_trait]
impl LookerApi for MockApi {
    async fn dashboard(&self, dashboard_id: i64) -> anyhow::Result<Asset> {
        self.dashboards
            .iter()
            .find(|d| d.id == dashboard_id)
            .cloned()
            .ok_or_else(|| anyhow!("dashboard {} not found", dashboard_id))
    }

    async fn search_dashboards(&self, slug: &str) -> anyhow::Result<Vec<Asset>> {
        Ok(self.dashboards.iter().filter(|d| d.slug == slug).cloned().collect())
    }

    async fn look(&self, look_id: i64) -> anyhow::Result<Asset> {
        self.looks
            .iter()
            .find(|l| l.id == look_id)
            .cloned()
            .ok_or_else(|| anyhow!("look {} not found", look_id))
    }

    async fn search_looks(&self, slug: &str) -> anyhow::Result<Vec<Asset>> {
        Ok(self.looks.iter().filter(|l| l.slug == slug).cloned().collect())
    }

    async fn search_boards(&self, title: &str) -> anyhow::Result<Vec<Board>> {
        Ok(self.boards.iter().filter(|b| b.title == title).cloned().collect())
    }

    async fn board(&self, board_id: i64) -> anyhow::Result<Board> {
        self.boards
            .iter()
            .find(|b| b.id == Some(board_id))
            .cloned()
            .ok_or_else(|| anyhow!("board {} not found", board_id))
    }

    async fn create_board(&self, board: &WriteBoard) -> anyhow::Result<Board> {
        self.record(Call::CreateBoard(board.clone()));
        Ok(Board::new(board.title.clone(), board.description.clone()).with_id(self.allocate_id()))
    }

    async fn update_board(&self, board_id: i64, board: &WriteBoard) -> anyhow::Result<Board> {
        self.record(Call::UpdateBoard(board_id, board.clone()));
        Ok(Board::new(board.title.clone(), board.description.clone()).with_id(board_id))
    }

    async fn create_section(&self, section: &WriteSection) -> anyhow::Result<Section> {
        self.record(Call::CreateSection(section.clone()));
        Ok(Section {
            id: Some(self.allocate_id()),
            title: section.title.clone(),
            description: section.description.clone(),
            ..Default::default()
        })
    }

    async fn delete_section(&self, section_id: i64) -> anyhow::Result<()> {
        self.record(Call::DeleteSection(section_id));
        Ok(())
    }

    async fn create_item(&self, item: &WriteItem) -> anyhow::Result<Item> {
        self.record(Call::CreateItem(item.clone()));
        Ok(Item {
            id: Some(self.allocate_id()),
            dashboard_id: item.dashboard_id,
            look_id: item.look_id,
            homepage_section_id: Some(item.homepage_section_id),
        })
    }
}
