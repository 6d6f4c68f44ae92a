use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::Extra;

/// One user action on the order screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    AddExtra,
    RemoveExtra,
    IncreaseQuantity,
    DecreaseQuantity,
    ToggleFavorite,
    FinishOrder,
    Leave,
}

/// Prompt for the next action on the order screen.
pub fn prompt_screen_action() -> Result<ScreenAction> {
    let options = [
        "Add an extra",
        "Remove an extra",
        "Increase quantity",
        "Decrease quantity",
        "Toggle favorite",
        "Finish order",
        "Leave without ordering",
    ];

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => ScreenAction::AddExtra,
        1 => ScreenAction::RemoveExtra,
        2 => ScreenAction::IncreaseQuantity,
        3 => ScreenAction::DecreaseQuantity,
        4 => ScreenAction::ToggleFavorite,
        5 => ScreenAction::FinishOrder,
        _ => ScreenAction::Leave,
    })
}

/// Prompt for an extra by name, with fuzzy matching.
///
/// Returns the matched extra's id, or None if the user backs out.
pub fn prompt_extra_name(extras: &[Extra]) -> Result<Option<u64>> {
    if extras.is_empty() {
        println!("This item has no extras.");
        return Ok(None);
    }

    let input: String = Input::new()
        .with_prompt("Which extra? (press Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    // Try exact match first (case-insensitive)
    let exact_match = extras
        .iter()
        .find(|e| e.name.to_lowercase() == input.to_lowercase());

    if let Some(extra) = exact_match {
        return Ok(Some(extra.id));
    }

    // Try fuzzy matching
    let mut candidates: Vec<(&Extra, f64)> = extras
        .iter()
        .map(|e| (e, jaro_winkler(&e.name.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No extra matches '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let extra = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", extra.name))
            .default(true)
            .interact()?;

        return Ok(if confirm { Some(extra.id) } else { None });
    }

    // Multiple matches - let user select
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(e, _)| e.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(candidates[selection].0.id))
    } else {
        Ok(None)
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
