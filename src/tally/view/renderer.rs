use super::surface::{Element, RenderSurface, RowNode};
use crate::error::Result;
use crate::model::{FormInput, Record};

/// Draws records and form state onto a [`RenderSurface`].
pub struct ViewRenderer<S: RenderSurface> {
    surface: S,
    unit: Option<String>,
}

impl<S: RenderSurface> ViewRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            unit: None,
        }
    }

    /// Suffix shown after each quantity, e.g. `Calories`.
    pub fn with_unit(mut self, unit: Option<String>) -> Self {
        self.unit = unit.filter(|u| !u.is_empty());
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn row_label(&self, record: &Record) -> String {
        match &self.unit {
            Some(unit) => format!("{}: {} {}", record.name, record.quantity, unit),
            None => format!("{}: {}", record.name, record.quantity),
        }
    }

    fn row(&self, record: &Record) -> RowNode {
        RowNode::new(record.id, self.row_label(record))
    }

    /// Replaces the list with one row per record and shows it.
    pub fn render_list(&mut self, records: &[Record]) -> Result<()> {
        let rows = records.iter().map(|r| self.row(r)).collect();
        self.surface.replace_children(Element::ItemList, rows)?;
        self.surface.set_visible(Element::ItemList, true)
    }

    pub fn append_row(&mut self, record: &Record) -> Result<()> {
        let row = self.row(record);
        self.surface.append_child(Element::ItemList, row)?;
        self.surface.set_visible(Element::ItemList, true)
    }

    pub fn update_row(&mut self, record: &Record) -> Result<()> {
        let label = self.row_label(record);
        self.surface.set_text(Element::Row(record.id), &label)
    }

    pub fn remove_row(&mut self, record: &Record) -> Result<()> {
        self.surface.remove(Element::Row(record.id))
    }

    /// Raw form contents, untrimmed and unvalidated.
    pub fn read_form(&self) -> Result<FormInput> {
        Ok(FormInput {
            name: self.surface.read_value(Element::NameInput)?,
            quantity: self.surface.read_value(Element::QuantityInput)?,
        })
    }

    /// Types raw values into the form, as a user would.
    pub fn write_form(&mut self, input: &FormInput) -> Result<()> {
        self.surface.write_value(Element::NameInput, &input.name)?;
        self.surface
            .write_value(Element::QuantityInput, &input.quantity)
    }

    pub fn fill_form(&mut self, record: &Record) -> Result<()> {
        self.surface.write_value(Element::NameInput, &record.name)?;
        self.surface
            .write_value(Element::QuantityInput, &record.quantity.to_string())
    }

    pub fn clear_form(&mut self) -> Result<()> {
        self.surface.write_value(Element::NameInput, "")?;
        self.surface.write_value(Element::QuantityInput, "")
    }

    pub fn set_total(&mut self, value: i64) -> Result<()> {
        self.surface
            .set_text(Element::TotalDisplay, &value.to_string())
    }

    pub fn show_create_mode(&mut self) -> Result<()> {
        self.clear_form()?;
        self.set_mode_controls(false)
    }

    pub fn show_edit_mode(&mut self, record: &Record) -> Result<()> {
        self.fill_form(record)?;
        self.set_mode_controls(true)
    }

    pub fn hide_list(&mut self) -> Result<()> {
        self.surface.set_visible(Element::ItemList, false)
    }

    /// Empties and hides the list and zeroes the total.
    pub fn clear_list(&mut self) -> Result<()> {
        self.surface.replace_children(Element::ItemList, Vec::new())?;
        self.hide_list()?;
        self.set_total(0)
    }

    fn set_mode_controls(&mut self, editing: bool) -> Result<()> {
        for el in Element::MODE_CONTROLS {
            let visible = (el == Element::AddButton) != editing;
            self.surface.set_visible(el, visible)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;
    use crate::view::Document;

    fn rec(id: u64, name: &str, qty: i64) -> Record {
        Record::new(RecordId(id), name, qty)
    }

    fn view() -> ViewRenderer<Document> {
        ViewRenderer::new(Document::new())
    }

    #[test]
    fn render_list_draws_one_row_per_record() {
        let mut view = view();
        view.hide_list().unwrap();
        view.render_list(&[rec(0, "Eggs", 100), rec(1, "Toast", 200)])
            .unwrap();

        let doc = view.surface();
        let labels: Vec<_> = doc.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Eggs: 100", "Toast: 200"]);
        assert!(doc.is_visible(Element::ItemList));
    }

    #[test]
    fn unit_is_appended_to_labels() {
        let view = view().with_unit(Some("Calories".into()));
        assert_eq!(view.row_label(&rec(0, "Eggs", 100)), "Eggs: 100 Calories");
    }

    #[test]
    fn empty_unit_is_ignored() {
        let view = view().with_unit(Some(String::new()));
        assert_eq!(view.row_label(&rec(0, "Eggs", 100)), "Eggs: 100");
    }

    #[test]
    fn incremental_row_operations() {
        let mut view = view();
        view.hide_list().unwrap();
        view.append_row(&rec(0, "Eggs", 100)).unwrap();
        assert!(view.surface().is_visible(Element::ItemList));

        view.update_row(&rec(0, "Eggs", 150)).unwrap();
        assert_eq!(
            view.surface().text(Element::Row(RecordId(0))),
            Some("Eggs: 150")
        );

        view.remove_row(&rec(0, "Eggs", 150)).unwrap();
        assert!(view.surface().rows().is_empty());
    }

    #[test]
    fn edit_and_create_modes_toggle_controls() {
        let mut view = view();
        view.show_edit_mode(&rec(3, "Tea", 7)).unwrap();
        let doc = view.surface();
        assert!(!doc.is_visible(Element::AddButton));
        assert!(doc.is_visible(Element::UpdateButton));
        assert!(doc.is_visible(Element::DeleteButton));
        assert!(doc.is_visible(Element::BackButton));
        assert_eq!(
            view.read_form().unwrap(),
            FormInput::new("Tea", "7")
        );

        view.show_create_mode().unwrap();
        let doc = view.surface();
        assert!(doc.is_visible(Element::AddButton));
        assert!(!doc.is_visible(Element::UpdateButton));
        assert!(!doc.is_visible(Element::DeleteButton));
        assert!(!doc.is_visible(Element::BackButton));
        assert_eq!(view.read_form().unwrap(), FormInput::default());
    }

    #[test]
    fn clear_list_resets_list_and_total() {
        let mut view = view();
        view.render_list(&[rec(0, "Eggs", 100)]).unwrap();
        view.set_total(100).unwrap();
        view.clear_list().unwrap();

        let doc = view.surface();
        assert!(doc.rows().is_empty());
        assert!(!doc.is_visible(Element::ItemList));
        assert_eq!(doc.text(Element::TotalDisplay), Some("0"));
    }

    #[test]
    fn read_form_is_raw() {
        let mut view = view();
        view.write_form(&FormInput::new("  Eggs ", " 10")).unwrap();
        assert_eq!(view.read_form().unwrap(), FormInput::new("  Eggs ", " 10"));
    }
}
