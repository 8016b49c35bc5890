//! Model selection from command-line input

use dialoguer::theme::ColorfulTheme;
use dialoguer::MultiSelect;
use nestgen::NestgenError;

/// Merge positional names with a comma-separated list
///
/// Blank entries are dropped and duplicates removed, keeping the first
/// occurrence. Positional names come first.
///
/// # Examples
///
/// ```
/// use nestgen_cli_lib::selection::merge_model_names;
///
/// let names = merge_model_names(&["Account".to_string()], Some("Webhook, Account,,"));
/// assert_eq!(names, vec!["Account", "Webhook"]);
/// ```
#[must_use]
pub fn merge_model_names(positional: &[String], comma_list: Option<&str>) -> Vec<String> {
    let listed = comma_list.into_iter().flat_map(|list| list.split(','));

    let mut names: Vec<String> = Vec::new();
    for name in positional.iter().map(String::as_str).chain(listed) {
        let name = name.trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Ask the user to pick models from the schema
///
/// # Errors
///
/// Returns [`NestgenError::NoSelection`] when nothing is picked, or the
/// prompt error if the terminal is not interactive.
pub fn prompt_models(available: &[&str]) -> anyhow::Result<Vec<String>> {
    let picked = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select models to generate (space to toggle, enter to confirm)")
        .items(available)
        .interact()?;

    if picked.is_empty() {
        return Err(NestgenError::NoSelection.into());
    }

    Ok(picked.into_iter().map(|idx| available[idx].to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_positional_only() {
        assert_eq!(merge_model_names(&strings(&["A", "B"]), None), vec!["A", "B"]);
    }

    #[test]
    fn test_comma_list_only() {
        assert_eq!(merge_model_names(&[], Some(" A ,B")), vec!["A", "B"]);
    }

    #[test]
    fn test_merge_deduplicates() {
        assert_eq!(
            merge_model_names(&strings(&["B", "A"]), Some("A,C,B")),
            vec!["B", "A", "C"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_model_names(&[], Some(" , ")).is_empty());
    }
}
