use crate::bridge::syntax::quote_atom;
use crate::bridge::{Bindings, QueryBackend, Term};
use crate::error::BusanaError;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Rule engine backend that runs each query through a `swipl` subprocess.
///
/// The goal is written into a temporary script that consults the knowledge
/// base, runs the goal and prints `true` or `false`. Only that token comes
/// back, so a successful query yields a single `success` binding and never
/// the item list itself. No timeout is applied to the subprocess.
pub struct SwiplProcess {
    kb_path: PathBuf,
}

impl SwiplProcess {
    pub fn new(kb_path: impl Into<PathBuf>) -> Self {
        SwiplProcess {
            kb_path: kb_path.into(),
        }
    }

    pub fn kb_path(&self) -> &Path {
        &self.kb_path
    }

    /// Check if swipl is available on the system.
    pub fn is_available() -> bool {
        Command::new("swipl")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl QueryBackend for SwiplProcess {
    fn query(&self, goal: &str) -> Result<Vec<Bindings>, BusanaError> {
        let mut script = tempfile::Builder::new()
            .suffix(".pl")
            .tempfile()
            .map_err(|e| BusanaError::EngineQuery(e.to_string()))?;
        script
            .write_all(render_script(&self.kb_path, goal).as_bytes())
            .map_err(|e| BusanaError::EngineQuery(e.to_string()))?;
        script
            .flush()
            .map_err(|e| BusanaError::EngineQuery(e.to_string()))?;

        tracing::debug!(goal = %goal, script = %script.path().display(), "running swipl query");

        let output = Command::new("swipl")
            .arg("-q")
            .arg("-f")
            .arg(script.path())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BusanaError::SwiplNotFound
                } else {
                    BusanaError::EngineQuery(format!("swipl failed: {}", e))
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(interpret_output(&stdout))
    }

    fn backend_name(&self) -> &str {
        "swipl"
    }
}

fn render_script(kb_path: &Path, goal: &str) -> String {
    let kb = quote_atom(&kb_path.to_string_lossy());
    format!(
        ":- consult({kb}).\n\
         :- {goal}, write(user_output, true), halt.\n\
         :- write(user_output, false), halt.\n"
    )
}

/// Any `true` token in stdout counts as success.
fn interpret_output(stdout: &str) -> Vec<Bindings> {
    if stdout.contains("true") {
        let mut bindings = Bindings::new();
        bindings.insert("success".to_string(), Term::Bool(true));
        vec![bindings]
    } else {
        Vec::new()
    }
}
