//! # Controller
//!
//! [`App`] owns one [`RecordStore`], one [`SlotStore`] and one
//! [`ViewRenderer`] and turns each user [`Event`] into a fixed sequence of
//! calls across the three. Every mutation touches memory, durable storage
//! and the view in the same order every time:
//!
//! | Event         | Pipeline                                                                 |
//! |---------------|--------------------------------------------------------------------------|
//! | `SubmitNew`   | read form, check non-empty, add, append row, total, persist, clear form  |
//! | `EditClicked` | resolve id, look up, select, show edit mode                              |
//! | `SubmitEdit`  | read form, update selected, persist, update row, total, deselect, create |
//! | `Delete`      | selected, unpersist, delete selected, remove row, total, create mode     |
//! | `Back`        | deselect, create mode                                                    |
//! | `ClearAll`    | clear slot, reset store, clear list                                      |
//!
//! Events run to completion one at a time. Nothing here is async.
//!
//! ## Modes
//!
//! The app is in [`Mode::Create`] unless a record is selected, in which case
//! it is in [`Mode::Editing`]. Only `EditClicked` enters editing; `SubmitEdit`,
//! `Delete` and `Back` leave it.

use crate::error::{Result, TallyError};
use crate::model::{Record, RecordId};
use crate::records::RecordStore;
use crate::store::{SlotBackend, SlotStore};
use crate::view::{Element, RenderSurface, ViewRenderer};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The add control was pressed.
    SubmitNew,
    /// Something in the list was clicked. `target` is the element id of the
    /// clicked row, e.g. `item-3`.
    EditClicked { target: String },
    /// The update control was pressed.
    SubmitEdit,
    Delete,
    Back,
    ClearAll,
}

impl Event {
    pub fn edit(id: RecordId) -> Self {
        Event::EditClicked {
            target: Element::Row(id).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Editing(RecordId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other(String),
}

/// What the global key intercept wants done with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Swallow the key; Enter must not submit the form on its own.
    PreventDefault,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Record>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<Record>) -> Self {
        self.affected = records;
        self
    }

    fn message(message: CmdMessage) -> Self {
        Self {
            affected: Vec::new(),
            messages: vec![message],
        }
    }
}

pub struct App<B: SlotBackend, S: RenderSurface> {
    records: RecordStore,
    slots: SlotStore<B>,
    view: ViewRenderer<S>,
}

impl<B: SlotBackend, S: RenderSurface> App<B, S> {
    /// Builds the app and runs the startup pipeline: idle view, hydrate from
    /// storage, then draw the list (or hide it when there is nothing to show).
    pub fn start(slots: SlotStore<B>, view: ViewRenderer<S>) -> Result<Self> {
        let mut app = Self {
            records: RecordStore::new(),
            slots,
            view,
        };

        app.view.show_create_mode()?;
        let stored = app.slots.load()?;
        debug!(count = stored.len(), slot = app.slots.key(), "hydrating");
        app.records.replace_all(stored);

        if app.records.is_empty() {
            app.view.hide_list()?;
        } else {
            let total = app.records.total();
            app.view.set_total(total)?;
            app.view.render_list(app.records.all())?;
        }
        Ok(app)
    }

    pub fn handle(&mut self, event: Event) -> Result<CmdResult> {
        debug!(?event, "handling event");
        match event {
            Event::SubmitNew => self.submit_new(),
            Event::EditClicked { target } => self.edit_clicked(&target),
            Event::SubmitEdit => self.submit_edit(),
            Event::Delete => self.delete(),
            Event::Back => self.back(),
            Event::ClearAll => self.clear_all(),
        }
    }

    /// Global key intercept. Enter never submits anything by itself.
    pub fn key_down(&self, key: &Key) -> KeyDisposition {
        match key {
            Key::Enter => KeyDisposition::PreventDefault,
            _ => KeyDisposition::Default,
        }
    }

    pub fn mode(&self) -> Mode {
        match self.records.selected() {
            Some(record) => Mode::Editing(record.id),
            None => Mode::Create,
        }
    }

    pub fn records(&self) -> &[Record] {
        self.records.all()
    }

    pub fn selected(&self) -> Option<&Record> {
        self.records.selected()
    }

    pub fn total(&self) -> i64 {
        self.records.cached_total()
    }

    pub fn view(&self) -> &ViewRenderer<S> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewRenderer<S> {
        &mut self.view
    }

    pub fn slots(&self) -> &SlotStore<B> {
        &self.slots
    }

    fn submit_new(&mut self) -> Result<CmdResult> {
        let input = self.view.read_form()?;
        if !input.is_complete() {
            debug!("add skipped, form incomplete");
            return Ok(CmdResult::message(CmdMessage::info(
                "Enter a name and a quantity to add an entry.",
            )));
        }

        let record = self.records.add(&input.name, &input.quantity)?;
        self.view.append_row(&record)?;
        let total = self.records.total();
        self.view.set_total(total)?;
        self.slots.append(&record)?;
        self.view.clear_form()?;

        let mut result = CmdResult::default().with_affected(vec![record.clone()]);
        result.add_message(CmdMessage::success(format!(
            "Added {}: {}",
            record.name, record.quantity
        )));
        Ok(result)
    }

    fn edit_clicked(&mut self, target: &str) -> Result<CmdResult> {
        let Some(id) = target.parse::<Element>().ok().and_then(|el| el.row_id()) else {
            debug!(click = target, "click outside an edit affordance ignored");
            return Ok(CmdResult::default());
        };
        let Some(record) = self.records.by_id(id).cloned() else {
            debug!(%id, "click on unknown record ignored");
            return Ok(CmdResult::message(CmdMessage::warning(format!(
                "No entry with id {}",
                id
            ))));
        };

        self.records.select(Some(record.id));
        self.view.show_edit_mode(&record)?;
        Ok(CmdResult::default().with_affected(vec![record]))
    }

    fn submit_edit(&mut self) -> Result<CmdResult> {
        let input = self.view.read_form()?;
        let record = self.records.update_selected(&input.name, &input.quantity)?;
        self.slots.replace(&record)?;
        self.view.update_row(&record)?;
        let total = self.records.total();
        self.view.set_total(total)?;
        self.records.select(None);
        self.view.show_create_mode()?;

        let mut result = CmdResult::default().with_affected(vec![record.clone()]);
        result.add_message(CmdMessage::success(format!(
            "Updated {}: {}",
            record.name, record.quantity
        )));
        Ok(result)
    }

    fn delete(&mut self) -> Result<CmdResult> {
        let target = self
            .records
            .selected()
            .cloned()
            .ok_or(TallyError::NoSelection)?;
        self.slots.remove(&target)?;
        let removed = self.records.delete_selected()?;
        self.view.remove_row(&removed)?;
        let total = self.records.total();
        self.view.set_total(total)?;
        self.view.show_create_mode()?;

        let mut result = CmdResult::default().with_affected(vec![removed.clone()]);
        result.add_message(CmdMessage::success(format!("Deleted {}", removed.name)));
        Ok(result)
    }

    fn back(&mut self) -> Result<CmdResult> {
        self.records.select(None);
        self.view.show_create_mode()?;
        Ok(CmdResult::default())
    }

    fn clear_all(&mut self) -> Result<CmdResult> {
        self.slots.clear()?;
        let removed = self.records.all().to_vec();
        self.records.reset();
        self.view.clear_list()?;
        Ok(CmdResult::message(CmdMessage::success(format!(
            "Cleared {} entries",
            removed.len()
        )))
        .with_affected(removed))
    }
}
