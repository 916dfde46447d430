use color_eyre::Result;
use color_eyre::eyre::Context as _;
use serde_json;

use crate::completer::Completion;
use crate::config::Config;

pub fn call(_config: &Config, completion: &Completion) -> Result<()> {
    let j = serde_json::to_string(completion).wrap_err("serializing completion")?;

    println!("{}", j);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_applied_text_unless_selected() {
        let completion = Completion {
            text: "ca".to_string(),
            token: "ca".to_string(),
            found: false,
            suggestions: vec!["car".to_string(), "cat".to_string()],
            applied: None,
        };

        let j = serde_json::to_value(&completion).unwrap();
        assert_eq!(
            j,
            serde_json::json!({
                "text": "ca",
                "token": "ca",
                "found": false,
                "suggestions": ["car", "cat"],
            })
        );
    }
}
