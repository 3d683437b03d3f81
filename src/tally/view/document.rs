use super::surface::{Element, RenderSurface, RowNode};
use crate::error::{Result, TallyError};
use crate::model::RecordId;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct Node {
    text: String,
    value: String,
    visible: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            text: String::new(),
            value: String::new(),
            visible: true,
        }
    }
}

/// Retained in-memory render surface.
///
/// Holds every fixed element plus the rows of the item list. The CLI paints
/// it to the terminal; tests inspect it directly.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: BTreeMap<Element, Node>,
    rows: Vec<RowNode>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut nodes: BTreeMap<Element, Node> = Element::FIXED
            .iter()
            .map(|el| (*el, Node::default()))
            .collect();
        for (el, label) in [
            (Element::AddButton, "Add"),
            (Element::UpdateButton, "Update"),
            (Element::DeleteButton, "Delete"),
            (Element::BackButton, "Back"),
            (Element::ClearAllButton, "Clear All"),
            (Element::TotalDisplay, "0"),
        ] {
            if let Some(node) = nodes.get_mut(&el) {
                node.text = label.to_string();
            }
        }
        Self { nodes, rows: Vec::new() }
    }

    pub fn rows(&self) -> &[RowNode] {
        &self.rows
    }

    pub fn row(&self, id: RecordId) -> Option<&RowNode> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Text of an element, or the label of a row.
    pub fn text(&self, element: Element) -> Option<&str> {
        match element {
            Element::Row(id) => self.row(id).map(|r| r.label.as_str()),
            fixed => self.nodes.get(&fixed).map(|n| n.text.as_str()),
        }
    }

    pub fn value(&self, element: Element) -> Option<&str> {
        self.nodes.get(&element).map(|n| n.value.as_str())
    }

    /// Rows are visible whenever the list is.
    pub fn is_visible(&self, element: Element) -> bool {
        match element {
            Element::Row(id) => self.row(id).is_some() && self.is_visible(Element::ItemList),
            fixed => self.nodes.get(&fixed).map(|n| n.visible).unwrap_or(false),
        }
    }

    fn node_mut(&mut self, element: Element) -> Result<&mut Node> {
        self.nodes
            .get_mut(&element)
            .ok_or_else(|| TallyError::MissingElement(element.to_string()))
    }

    fn ensure_container(&self, parent: Element) -> Result<()> {
        if parent == Element::ItemList {
            Ok(())
        } else {
            Err(TallyError::Api(format!("{} cannot hold rows", parent)))
        }
    }

    fn ensure_input(&self, element: Element) -> Result<()> {
        if element.is_input() {
            Ok(())
        } else {
            Err(TallyError::Api(format!("{} has no value", element)))
        }
    }
}

impl RenderSurface for Document {
    fn replace_children(&mut self, parent: Element, rows: Vec<RowNode>) -> Result<()> {
        self.ensure_container(parent)?;
        self.rows = rows;
        Ok(())
    }

    fn append_child(&mut self, parent: Element, row: RowNode) -> Result<()> {
        self.ensure_container(parent)?;
        self.rows.push(row);
        Ok(())
    }

    fn remove(&mut self, element: Element) -> Result<()> {
        if element.row_id().is_none() {
            return Err(TallyError::Api(format!("{} cannot be removed", element)));
        }
        let pos = self
            .rows
            .iter()
            .position(|r| r.element() == element)
            .ok_or_else(|| TallyError::MissingElement(element.to_string()))?;
        self.rows.remove(pos);
        Ok(())
    }

    fn set_text(&mut self, element: Element, text: &str) -> Result<()> {
        match element {
            Element::Row(id) => {
                let row = self
                    .rows
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or_else(|| TallyError::MissingElement(element.to_string()))?;
                row.label = text.to_string();
            }
            fixed => self.node_mut(fixed)?.text = text.to_string(),
        }
        Ok(())
    }

    fn set_visible(&mut self, element: Element, visible: bool) -> Result<()> {
        if element.row_id().is_some() {
            return Err(TallyError::Api(format!(
                "{} follows the list visibility",
                element
            )));
        }
        self.node_mut(element)?.visible = visible;
        Ok(())
    }

    fn read_value(&self, element: Element) -> Result<String> {
        self.ensure_input(element)?;
        self.value(element)
            .map(str::to_string)
            .ok_or_else(|| TallyError::MissingElement(element.to_string()))
    }

    fn write_value(&mut self, element: Element, value: &str) -> Result<()> {
        self.ensure_input(element)?;
        self.node_mut(element)?.value = value.to_string();
        Ok(())
    }
}
