//! The interactive session behind `pairz shell`.
//!
//! One line is one action. The list is printed after every action that changed it,
//! and every print drops the current selection.

use super::render::{print_messages, TerminalPresenter};
use pairz::collection::SortField;
use pairz::commands::CmdMessage;
use pairz::controller::AppController;
use pairz::error::Result;
use pairz::index::parse_selection;
use pairz::presenter::ListPresenter;
use pairz::store::StorageBackend;
use std::io::{BufRead, Write};
use tracing::warn;

const HELP: &str = "\
Actions:
  add Name=Value      append a pair
  sort name|value     reorder the list
  select 0 2 4-6      mark rows for deletion
  delete [0 2 4-6]    delete the given rows, or the marked ones
  list                print the list again
  help                show this help
  quit                leave the shell";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run_session<B, R>(
    controller: &mut AppController<B, TerminalPresenter>,
    input: R,
    interactive: bool,
) -> Result<()>
where
    B: StorageBackend,
    R: BufRead,
{
    controller.presenter_mut().flush();

    let mut lines = input.lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        if dispatch(controller, line.trim()) == Flow::Quit {
            break;
        }
        controller.presenter_mut().flush();
    }
    Ok(())
}

fn dispatch<B: StorageBackend>(
    controller: &mut AppController<B, TerminalPresenter>,
    line: &str,
) -> Flow {
    if line.is_empty() {
        return Flow::Continue;
    }
    let (action, rest) = match line.split_once(char::is_whitespace) {
        Some((action, rest)) => (action, rest.trim()),
        None => (line, ""),
    };
    let tokens: Vec<&str> = rest.split_whitespace().collect();

    let outcome = match action {
        "add" | "a" => controller.on_add(rest).map(|_| ()),
        "sort" => match rest {
            "name" => controller.on_sort(SortField::Name).map(|_| ()),
            "value" => controller.on_sort(SortField::Value).map(|_| ()),
            _ => {
                print_messages(&[CmdMessage::warning("Usage: sort name|value")]);
                Ok(())
            }
        },
        "select" => parse_selection(&tokens).map(|selection| {
            let positions = selection.positions(controller.store().len());
            let count = controller.presenter_mut().select(positions);
            print_messages(&[CmdMessage::info(format!("{} selected", count))]);
        }),
        "delete" | "rm" => delete(controller, &tokens),
        "list" | "ls" => {
            controller.presenter_mut().reprint();
            Ok(())
        }
        "help" | "?" => {
            println!("{}", HELP);
            Ok(())
        }
        "quit" | "exit" | "q" => return Flow::Quit,
        other => {
            print_messages(&[CmdMessage::warning(format!(
                "Unknown action: {} (try help)",
                other
            ))]);
            Ok(())
        }
    };

    if let Err(e) = outcome {
        warn!(error = %e, action, "shell action failed");
        print_messages(&[CmdMessage::warning(e.to_string())]);
    }
    Flow::Continue
}

fn delete<B: StorageBackend>(
    controller: &mut AppController<B, TerminalPresenter>,
    tokens: &[&str],
) -> Result<()> {
    let result = if tokens.is_empty() {
        if controller.presenter().selection().is_empty() {
            print_messages(&[CmdMessage::info("Nothing selected")]);
            return Ok(());
        }
        controller.on_delete_selected()?
    } else {
        let positions = parse_selection(tokens)?.positions(controller.store().len());
        controller.on_delete(&positions)?
    };
    if result.affected_pairs.is_empty() {
        print_messages(&[CmdMessage::warning("No pairs at the given positions")]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairz::model::Scope;
    use pairz::store::mem_backend::MemBackend;
    use pairz::store::PersistenceGateway;
    use std::io::Cursor;

    fn controller() -> AppController<MemBackend, TerminalPresenter> {
        let gateway = PersistenceGateway::new(MemBackend::default(), Scope::Project, "pairs");
        let mut controller = AppController::new(gateway, TerminalPresenter::new());
        controller.on_startup().unwrap();
        controller
    }

    fn labels(controller: &AppController<MemBackend, TerminalPresenter>) -> Vec<String> {
        controller.store().iter().map(|p| p.to_string()).collect()
    }

    fn session(controller: &mut AppController<MemBackend, TerminalPresenter>, script: &str) {
        run_session(controller, Cursor::new(script.to_string()), false).unwrap();
    }

    #[test]
    fn add_and_sort() {
        let mut c = controller();
        session(&mut c, "add Apple = Red\nsort name\n");
        assert_eq!(labels(&c), vec!["Apple=Red", "Happy=Coding", "Hello=World"]);
    }

    #[test]
    fn rejected_add_leaves_list_alone() {
        let mut c = controller();
        session(&mut c, "add NoSeparator\nadd a=b=c\n");
        assert_eq!(labels(&c), vec!["Hello=World", "Happy=Coding"]);
    }

    #[test]
    fn select_then_delete() {
        let mut c = controller();
        session(&mut c, "add A=1\nselect 0 2\ndelete\n");
        assert_eq!(labels(&c), vec!["Happy=Coding"]);
    }

    #[test]
    fn mutation_drops_selection() {
        let mut c = controller();
        session(&mut c, "select 0\nadd A=1\ndelete\n");
        assert_eq!(labels(&c).len(), 3);
    }

    #[test]
    fn delete_with_positions_ignores_missing_rows() {
        let mut c = controller();
        session(&mut c, "delete 1 9\n");
        assert_eq!(labels(&c), vec!["Hello=World"]);
    }

    #[test]
    fn huge_ranges_only_touch_existing_rows() {
        let mut c = controller();
        session(
            &mut c,
            "select 0-18446744073709551615\ndelete 1-99999999999\n",
        );
        assert_eq!(labels(&c), vec!["Hello=World"]);
    }

    #[test]
    fn quit_stops_reading() {
        let mut c = controller();
        session(&mut c, "quit\nadd A=1\n");
        assert_eq!(labels(&c).len(), 2);
    }

    #[test]
    fn bad_input_keeps_the_session_alive() {
        let mut c = controller();
        session(&mut c, "frobnicate\nselect x\nsort size\nadd A=1\n");
        assert_eq!(labels(&c).len(), 3);
    }

    #[test]
    fn storage_failure_does_not_end_the_session() {
        let mut c = controller();
        c.gateway().backend().set_simulate_write_error(true);
        session(&mut c, "add A=1\nadd B=2\n");
        assert_eq!(labels(&c).len(), 4);
    }
}
