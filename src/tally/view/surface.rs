use crate::error::{Result, TallyError};
use crate::model::RecordId;
use std::fmt;
use std::str::FromStr;

const ROW_PREFIX: &str = "item-";

/// The fixed table of places the renderer writes to, plus list rows keyed by
/// record id.
///
/// Every element has a textual id (`item-list`, `item-3`, ...). Click
/// targets arrive as those strings and are parsed back with [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    ItemList,
    NameInput,
    QuantityInput,
    TotalDisplay,
    AddButton,
    UpdateButton,
    DeleteButton,
    BackButton,
    ClearAllButton,
    Row(RecordId),
}

impl Element {
    /// Every element that exists independently of the list contents.
    pub const FIXED: [Element; 9] = [
        Element::ItemList,
        Element::NameInput,
        Element::QuantityInput,
        Element::TotalDisplay,
        Element::AddButton,
        Element::UpdateButton,
        Element::DeleteButton,
        Element::BackButton,
        Element::ClearAllButton,
    ];

    /// The four controls whose visibility follows the create/edit mode.
    pub const MODE_CONTROLS: [Element; 4] = [
        Element::AddButton,
        Element::UpdateButton,
        Element::DeleteButton,
        Element::BackButton,
    ];

    fn name(&self) -> &'static str {
        match self {
            Element::ItemList => "item-list",
            Element::NameInput => "item-name",
            Element::QuantityInput => "item-quantity",
            Element::TotalDisplay => "total",
            Element::AddButton => "add-btn",
            Element::UpdateButton => "update-btn",
            Element::DeleteButton => "delete-btn",
            Element::BackButton => "back-btn",
            Element::ClearAllButton => "clear-all",
            Element::Row(_) => "item",
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Element::NameInput | Element::QuantityInput)
    }

    pub fn row_id(&self) -> Option<RecordId> {
        match self {
            Element::Row(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Row(id) => write!(f, "{}{}", ROW_PREFIX, id),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Element {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(fixed) = Element::FIXED.iter().find(|e| e.name() == s) {
            return Ok(*fixed);
        }
        s.strip_prefix(ROW_PREFIX)
            .and_then(|rest| rest.parse::<u64>().ok())
            .map(|n| Element::Row(RecordId(n)))
            .ok_or_else(|| TallyError::MissingElement(s.to_string()))
    }
}

/// One list row: a label and an edit affordance keyed by the record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowNode {
    pub id: RecordId,
    pub label: String,
}

impl RowNode {
    pub fn new(id: RecordId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    pub fn element(&self) -> Element {
        Element::Row(self.id)
    }
}

/// The document-like surface the view renders into.
///
/// This is the whole contract between the renderer and whatever presents
/// it. Operations on an element the surface does not hold fail with
/// [`TallyError::MissingElement`].
pub trait RenderSurface {
    /// Replace all children of a container with the given rows.
    fn replace_children(&mut self, parent: Element, rows: Vec<RowNode>) -> Result<()>;

    /// Add a row at the end of a container.
    fn append_child(&mut self, parent: Element, row: RowNode) -> Result<()>;

    /// Remove an element from the surface.
    fn remove(&mut self, element: Element) -> Result<()>;

    fn set_text(&mut self, element: Element, text: &str) -> Result<()>;

    fn set_visible(&mut self, element: Element, visible: bool) -> Result<()>;

    /// Current value of an input field.
    fn read_value(&self, element: Element) -> Result<String>;

    fn write_value(&mut self, element: Element, value: &str) -> Result<()>;
}
