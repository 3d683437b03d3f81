//! Interactive session: one input line is one user interaction.
//!
//! ```text
//! name <text>       type into the name field (kept verbatim)
//! quantity <text>   type into the quantity field (alias: qty)
//! add               press add
//! edit <id>         click the edit affordance of row <id>
//! update            press update
//! delete            press delete
//! back              press back
//! clear             press clear all
//! show              repaint
//! help              this text
//! quit              leave (alias: exit, or end of input)
//! ```
//!
//! A blank line is a bare Enter, which the app intercepts and ignores.

use super::render::{render_document, render_messages};
use colored::*;
use std::io::{BufRead, Write};
use tally::app::{App, CmdMessage, Event, Key, KeyDisposition};
use tally::error::{Result, TallyError};
use tally::model::RecordId;
use tally::store::SlotBackend;
use tally::view::{Document, Element, RenderSurface};
use tracing::debug;

const HELP: &str = "\
Commands:
  name <text>       set the name field
  quantity <text>   set the quantity field
  add               add the entry in the form
  edit <id>         start editing an entry
  update            save the entry being edited
  delete            delete the entry being edited
  back              stop editing
  clear             delete everything
  show              show the list again
  quit              leave
";

enum Step {
    Continue,
    Quit,
}

pub fn run<B, R, W>(app: &mut App<B, Document>, input: R, out: &mut W) -> Result<()>
where
    B: SlotBackend,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", render_document(app.view().surface()))?;
    for line in input.lines() {
        let line = line?;
        if let Step::Quit = step(app, &line, out)? {
            break;
        }
    }
    Ok(())
}

fn step<B, W>(app: &mut App<B, Document>, line: &str, out: &mut W) -> Result<Step>
where
    B: SlotBackend,
    W: Write,
{
    if line.trim().is_empty() {
        if app.key_down(&Key::Enter) == KeyDisposition::PreventDefault {
            debug!("enter suppressed");
        }
        return Ok(Step::Continue);
    }

    let (command, rest) = match line.trim_start().split_once(' ') {
        Some((command, rest)) => (command, rest),
        None => (line.trim(), ""),
    };

    let event = match command {
        "quit" | "exit" => return Ok(Step::Quit),
        "help" => {
            write!(out, "{}", HELP)?;
            return Ok(Step::Continue);
        }
        "show" => {
            write!(out, "{}", render_document(app.view().surface()))?;
            return Ok(Step::Continue);
        }
        "name" => {
            type_into(app, Element::NameInput, rest)?;
            return Ok(Step::Continue);
        }
        "quantity" | "qty" => {
            type_into(app, Element::QuantityInput, rest)?;
            return Ok(Step::Continue);
        }
        "add" => Event::SubmitNew,
        "edit" => Event::EditClicked {
            target: edit_target(rest.trim()),
        },
        "update" => Event::SubmitEdit,
        "delete" => Event::Delete,
        "back" => Event::Back,
        "clear" => Event::ClearAll,
        other => {
            let msg = CmdMessage::error(format!("Unknown command: {} (try `help`)", other));
            write!(out, "{}", render_messages(&[msg]))?;
            return Ok(Step::Continue);
        }
    };

    match app.handle(event) {
        Ok(result) => {
            write!(out, "{}", render_messages(&result.messages))?;
            write!(out, "{}", render_document(app.view().surface()))?;
        }
        // The session survives bad input; storage failures end it.
        Err(e @ (TallyError::NoSelection | TallyError::InvalidQuantity(_))) => {
            writeln!(out, "{} {}", "Error:".red(), e)?;
        }
        Err(e) => return Err(e),
    }
    Ok(Step::Continue)
}

fn type_into<B: SlotBackend>(
    app: &mut App<B, Document>,
    element: Element,
    value: &str,
) -> Result<()> {
    app.view_mut().surface_mut().write_value(element, value)
}

/// `3` and `item-3` both address row 3.
fn edit_target(arg: &str) -> String {
    match arg.parse::<u64>() {
        Ok(n) => Element::Row(RecordId(n)).to_string(),
        Err(_) => arg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tally::app::Mode;
    use tally::store::mem_backend::MemBackend;
    use tally::store::SlotStore;
    use tally::view::ViewRenderer;

    fn app() -> App<MemBackend, Document> {
        App::start(
            SlotStore::new(MemBackend::new()),
            ViewRenderer::new(Document::new()),
        )
        .unwrap()
    }

    fn session(app: &mut App<MemBackend, Document>, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run(app, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_entries_through_the_form() {
        let mut app = app();
        let out = session(
            &mut app,
            "name Eggs\nqty 100\nadd\nname Toast\nquantity 200\nadd\n",
        );
        assert_eq!(app.total(), 300);
        assert!(out.contains("Added Toast: 200"));
        assert!(out.contains("Total: 300"));
    }

    #[test]
    fn names_keep_inner_and_trailing_spaces() {
        let mut app = app();
        session(&mut app, "name Egg  salad \nqty 5\nadd\n");
        assert_eq!(app.records()[0].name, "Egg  salad ");
    }

    #[test]
    fn edit_update_flow() {
        let mut app = app();
        session(
            &mut app,
            "name Eggs\nqty 100\nadd\nedit 0\nqty 150\nupdate\n",
        );
        assert_eq!(app.records()[0].quantity, 150);
        assert_eq!(app.mode(), Mode::Create);
    }

    #[test]
    fn edit_accepts_row_element_ids() {
        let mut app = app();
        session(&mut app, "name Eggs\nqty 100\nadd\nedit item-0\n");
        assert_eq!(app.mode(), Mode::Editing(RecordId(0)));
    }

    #[test]
    fn bad_input_does_not_end_the_session() {
        let mut app = app();
        let out = session(&mut app, "update\nname Eggs\nqty lots\nadd\nqty 1\nadd\n");
        assert!(out.contains("Error: No record is selected"));
        assert!(out.contains("Invalid quantity"));
        assert_eq!(app.records().len(), 1);
    }

    #[test]
    fn blank_lines_and_unknown_commands() {
        let mut app = app();
        let out = session(&mut app, "\n   \nfrobnicate\n");
        assert!(out.contains("Unknown command: frobnicate"));
        assert!(app.records().is_empty());
    }

    #[test]
    fn quit_stops_reading() {
        let mut app = app();
        session(&mut app, "quit\nname Eggs\nqty 1\nadd\n");
        assert!(app.records().is_empty());
    }

    #[test]
    fn edit_target_parsing() {
        assert_eq!(edit_target("7"), "item-7");
        assert_eq!(edit_target("item-7"), "item-7");
        assert_eq!(edit_target("nope"), "nope");
    }
}
