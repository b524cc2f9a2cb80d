// Board domain model - a homepage made of sections of dashboard/look shortcuts

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub sections: Vec<Section>,
}

impl Board {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Fields sent when creating or updating a board on the target.
    pub fn to_write(&self) -> WriteBoard {
        WriteBoard {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub is_header: bool,
    pub detail_url: Option<String>,
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
            ..Default::default()
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Only title and description are carried over; header flags and
    /// detail urls stay behind on the source.
    pub fn to_write(&self, homepage_id: i64) -> WriteSection {
        WriteSection {
            title: self.title.clone(),
            description: self.description.clone(),
            homepage_id,
        }
    }
}

/// A shortcut inside a section. Records read from an instance carry both
/// references as optionals; use [`Item::content`] to get the validated form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    pub id: Option<i64>,
    pub dashboard_id: Option<i64>,
    pub look_id: Option<i64>,
    pub homepage_section_id: Option<i64>,
}

/// What an item points at, once exactly one reference has been confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemContent {
    Dashboard(i64),
    Look(i64),
}

impl Item {
    pub fn dashboard(dashboard_id: i64) -> Self {
        Self {
            dashboard_id: Some(dashboard_id),
            ..Default::default()
        }
    }

    pub fn look(look_id: i64) -> Self {
        Self {
            look_id: Some(look_id),
            ..Default::default()
        }
    }

    /// Returns `None` when the item references both a dashboard and a look,
    /// or neither.
    pub fn content(&self) -> Option<ItemContent> {
        match (self.dashboard_id, self.look_id) {
            (Some(id), None) => Some(ItemContent::Dashboard(id)),
            (None, Some(id)) => Some(ItemContent::Look(id)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteBoard {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteSection {
    pub title: String,
    pub description: Option<String>,
    pub homepage_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteItem {
    pub dashboard_id: Option<i64>,
    pub look_id: Option<i64>,
    pub homepage_section_id: i64,
}

impl WriteItem {
    pub fn new(content: ItemContent, homepage_section_id: i64) -> Self {
        let (dashboard_id, look_id) = match content {
            ItemContent::Dashboard(id) => (Some(id), None),
            ItemContent::Look(id) => (None, Some(id)),
        };
        Self {
            dashboard_id,
            look_id,
            homepage_section_id,
        }
    }
}
