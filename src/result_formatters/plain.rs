use color_eyre::Result;

use crate::completer::Completion;
use crate::config::Config;

pub fn call(_config: &Config, completion: &Completion) -> Result<()> {
    print!("{}", render(completion));
    Ok(())
}

fn render(completion: &Completion) -> String {
    let mut out = String::new();

    if completion.token.is_empty() {
        return out;
    }

    let header = format!("{} ", completion.token);
    out.push_str(&format!(
        "{header:-<width$} {count} suggestion{plural}\n",
        header = header,
        width = 30,
        count = completion.suggestions.len(),
        plural = if completion.suggestions.len() == 1 { "" } else { "s" },
    ));

    if !completion.suggestions.is_empty() {
        let last = completion.suggestions.len() - 1;

        for (i, suggestion) in completion.suggestions.iter().enumerate() {
            let branch = if i == last { " └─ " } else { " ├─ " };
            out.push_str(&format!("{}{}\n", branch, suggestion));
        }
    }

    if !completion.found {
        out.push_str(&format!(
            "\"{}\" is not found in the dictionary.\n",
            completion.token
        ));
    }

    if let Some(applied) = &completion.applied {
        out.push_str(&format!("=> {}\n", applied));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion(token: &str, found: bool, suggestions: &[&str]) -> Completion {
        Completion {
            text: token.to_string(),
            token: token.to_string(),
            found,
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            applied: None,
        }
    }

    #[test]
    fn draws_suggestions_as_tree() {
        let out = render(&completion("car", true, &["car", "care"]));

        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("car ---"));
        assert!(lines[0].ends_with(" 2 suggestions"));
        assert_eq!(&lines[1..], &[" ├─ car", " └─ care"]);
    }

    #[test]
    fn notes_token_missing_from_dictionary() {
        let out = render(&completion("ca", false, &["cat"]));

        assert!(out.contains(" 1 suggestion\n"));
        assert!(out.contains(" └─ cat\n"));
        assert!(out.ends_with("\"ca\" is not found in the dictionary.\n"));
    }

    #[test]
    fn shows_applied_text() {
        let mut c = completion("ca", false, &["cat"]);
        c.applied = Some("a cat".to_string());

        assert!(render(&c).ends_with("=> a cat\n"));
    }

    #[test]
    fn renders_nothing_without_token() {
        assert_eq!(render(&completion("", false, &[])), "");
    }
}
