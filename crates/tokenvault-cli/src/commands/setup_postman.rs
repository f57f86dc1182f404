//! Setup-postman command - generate the Postman pre-request script
//!
//! Collects up to three port (or host) to project mappings and renders a
//! script that fetches the mapped project's token from the local server
//! before each request.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tokenvault_core::{fetch_url_prefix, SCRIPT_FILE_NAME};

/// Most mappings the interactive setup asks for.
pub const MAX_MAPPINGS: usize = 3;

/// A request port or host bound to a project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub key: String,
    pub project: String,
}

impl Mapping {
    pub fn new(key: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            project: project.into(),
        }
    }
}

pub fn run() -> Result<()> {
    println!("{}", "Let's configure your Postman automation script".blue().bold());
    println!("Enter up to {} port-to-project mappings.", MAX_MAPPINGS);
    println!("{}", " (Press Enter without typing to finish early)".dimmed());
    println!("---------------------------------------------");

    let mappings = collect_mappings(|prompt| {
        let answer: String = dialoguer::Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    })?;

    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    write_script(&cwd, &mappings)?;

    println!("---------------------------------------------");
    println!(
        "{} Generated '{}' with your settings.",
        "✅ Success!".green().bold(),
        SCRIPT_FILE_NAME.cyan()
    );
    println!("Copy the content of this file into your Postman Collection -> Pre-request Script tab.");

    Ok(())
}

/// Drive the mapping prompts through `ask`.
///
/// An empty port ends collection; an empty project name skips that entry
/// but still uses up one of the slots.
pub fn collect_mappings<F>(mut ask: F) -> Result<Vec<Mapping>>
where
    F: FnMut(&str) -> Result<String>,
{
    let mut mappings = Vec::new();

    for i in 1..=MAX_MAPPINGS {
        let key = ask(&format!("Mapping #{} - Enter Port or Host (e.g. 5000)", i))?;
        let key = key.trim();
        if key.is_empty() {
            break;
        }

        let project = ask(&format!("Mapping #{} - Enter Project Name (e.g. facebook)", i))?;
        let project = project.trim();
        if project.is_empty() {
            println!("{}", "Project name cannot be empty. Skipping this entry.".yellow());
            continue;
        }

        mappings.push(Mapping::new(key, project));
        println!("    {}", "Saved".green());
    }

    Ok(mappings)
}

/// Render the pre-request script. With no mappings an example entry is used.
pub fn render_script(mappings: &[Mapping]) -> String {
    let lines: Vec<String> = if mappings.is_empty() {
        vec![r#"    "5000": "example-project", // Default example"#.to_string()]
    } else {
        mappings
            .iter()
            .map(|m| format!("    {}: {},", js_string(&m.key), js_string(&m.project)))
            .collect()
    };

    format!(
        "const projectMap = {{\n{lines}\n}};\n{body}",
        lines = lines.join("\n"),
        body = SCRIPT_BODY.replace("{fetch_url}", &fetch_url_prefix()),
    )
}

/// Render and write the script into `dir`, returning the file path.
pub fn write_script(dir: &Path, mappings: &[Mapping]) -> Result<PathBuf> {
    let path = dir.join(SCRIPT_FILE_NAME);
    std::fs::write(&path, render_script(mappings))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

fn js_string(value: &str) -> String {
    // A JSON string literal is a valid JS string literal.
    serde_json::Value::String(value.to_string()).to_string()
}

const SCRIPT_BODY: &str = r#"
var currentPort = pm.request.url.port;
var currentHost = pm.request.url.getHost();

var project = projectMap[currentPort];

if (!project) {
    project = projectMap[currentHost];
}

if (!project) {
    console.log("TokenVault: No project mapped for port " + currentPort + ". Skipping auto-fetch");
} else {
    console.log("TokenVault: Detected port " + currentPort + " -> fetching token for '" + project + "'");

    pm.sendRequest({
        url: '{fetch_url}' + encodeURIComponent(project),
        method: 'GET'
    }, function (err, res) {
        if (!err && res.code === 200) {
            var data = res.json();
            pm.environment.set("token", data.token);
            console.log("TokenVault: Token updated for " + project);
        } else {
            console.log("TokenVault: Token not found for " + project);
        }
    });
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn scripted(answers: &[&str]) -> impl FnMut(&str) -> Result<String> {
        let mut queue: VecDeque<String> = answers.iter().map(|s| s.to_string()).collect();
        move |_prompt| Ok(queue.pop_front().unwrap_or_default())
    }

    #[test]
    fn test_collect_stops_on_empty_key() {
        let mappings = collect_mappings(scripted(&["5000", "acme", ""])).unwrap();
        assert_eq!(mappings, vec![Mapping::new("5000", "acme")]);
    }

    #[test]
    fn test_collect_caps_at_three() {
        let mappings = collect_mappings(scripted(&[
            "5000", "acme", "8000", "globex", "api.test", "initech", "9000", "extra",
        ]))
        .unwrap();
        assert_eq!(mappings.len(), MAX_MAPPINGS);
        assert_eq!(mappings[2], Mapping::new("api.test", "initech"));
    }

    #[test]
    fn test_collect_skips_empty_project() {
        let mappings = collect_mappings(scripted(&[" 5000 ", "  ", "8000", " globex ", ""])).unwrap();
        assert_eq!(mappings, vec![Mapping::new("8000", "globex")]);
    }

    #[test]
    fn test_collect_propagates_prompt_errors() {
        let result = collect_mappings(|_| anyhow::bail!("not a terminal"));
        assert!(result.is_err());
    }

    #[test]
    fn test_render_default_mapping() {
        let script = render_script(&[]);
        assert!(script.starts_with("const projectMap = {\n"));
        assert!(script.contains(r#""5000": "example-project""#));
        assert!(script.contains("'http://localhost:9999/fetch/'"));
    }

    #[test]
    fn test_render_mappings_in_order() {
        let script = render_script(&[
            Mapping::new("5000", "realtime_bidding"),
            Mapping::new("backend.test", "astro"),
        ]);
        let first = script.find(r#""5000": "realtime_bidding","#).unwrap();
        let second = script.find(r#""backend.test": "astro","#).unwrap();
        assert!(first < second);
        assert!(!script.contains("example-project"));
        assert!(script.contains(r#"pm.environment.set("token", data.token);"#));
    }

    #[test]
    fn test_render_escapes_quotes() {
        let script = render_script(&[Mapping::new("5000", r#"evil"name"#)]);
        assert!(script.contains(r#""5000": "evil\"name","#));
    }

    #[test]
    fn test_write_script_into_working_dir() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let mappings = collect_mappings(scripted(&["5000", "acme", ""]))?;

        let path = write_script(temp_dir.path(), &mappings)?;

        assert_eq!(path, temp_dir.path().join("tokenvault_script.js"));
        let written = std::fs::read_to_string(&path)?;
        assert_eq!(written, render_script(&mappings));
        assert!(written.contains(r#""5000": "acme","#));
        Ok(())
    }

    #[test]
    fn test_write_script_overwrites_previous_file() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        write_script(temp_dir.path(), &[Mapping::new("5000", "acme")])?;

        let path = write_script(temp_dir.path(), &[])?;

        let written = std::fs::read_to_string(path)?;
        assert!(written.contains("example-project"));
        assert!(!written.contains(r#""acme""#));
        Ok(())
    }
}
