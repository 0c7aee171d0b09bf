use crate::board::view::BoardView;
use crate::board::Intent;
use crate::errors::InteractionError;

pub const HELP: &str = "\
Commands:
  add <card>.<chip>   click tag chip <chip> on card <card> (e.g. add 2.3)
  add <tag>           click a tag chip by its label (e.g. add JavaScript)
  rm <n> | rm <tag>   remove an active filter by position or label
  clear               remove all active filters
  help                show this list
  quit                leave the board";

/// One line of user input, resolved against what is currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Help,
    Quit,
}

/// Parses a line into a command. Chip references are checked against `view`
/// so only tags the user can actually see are clickable. Blank lines yield
/// `Ok(None)`.
pub fn parse_command(line: &str, view: &BoardView<'_>) -> Result<Option<Command>, InteractionError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" | "a" => Command::Intent(Intent::AddFilter(card_tag(arg, view)?)),
        "rm" | "remove" | "r" => Command::Intent(Intent::RemoveFilter(active_filter(arg, view)?)),
        "clear" | "c" => {
            if view.filter_bar.is_none() {
                return Err(InteractionError::NoActiveFilters);
            }
            Command::Intent(Intent::ClearFilters)
        }
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(InteractionError::UnknownCommand(line.to_string())),
    };
    Ok(Some(command))
}

fn card_tag(arg: &str, view: &BoardView<'_>) -> Result<String, InteractionError> {
    if arg.is_empty() {
        return Err(InteractionError::MissingArgument("add"));
    }
    if view.cards.iter().any(|c| !c.tags_clickable) {
        return Err(InteractionError::TagsReadOnly);
    }

    if let Some((card, chip)) = chip_ref(arg) {
        return view
            .card_chip(card, chip)
            .map(str::to_string)
            .ok_or_else(|| InteractionError::NoSuchChip(arg.to_string()));
    }

    if view.has_card_chip(arg) {
        Ok(arg.to_string())
    } else {
        Err(InteractionError::NoSuchChip(arg.to_string()))
    }
}

fn active_filter(arg: &str, view: &BoardView<'_>) -> Result<String, InteractionError> {
    if arg.is_empty() {
        return Err(InteractionError::MissingArgument("rm"));
    }
    if view.filter_bar.is_none() {
        return Err(InteractionError::NoActiveFilters);
    }

    if let Ok(n) = arg.parse::<usize>() {
        return view
            .filter_chip(n)
            .map(str::to_string)
            .ok_or_else(|| InteractionError::NoSuchFilter(arg.to_string()));
    }

    let active = view
        .filter_bar
        .as_ref()
        .is_some_and(|bar| bar.chips.contains(&arg));
    if active {
        Ok(arg.to_string())
    } else {
        Err(InteractionError::NoSuchFilter(arg.to_string()))
    }
}

/// `"2.3"` → `(2, 3)`.
fn chip_ref(arg: &str) -> Option<(usize, usize)> {
    let (card, chip) = arg.split_once('.')?;
    Some((card.parse().ok()?, chip.parse().ok()?))
}
