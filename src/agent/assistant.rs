use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{MenuError, Result};
use crate::planner::constants::ASSISTANT_TIMEOUT_SECS;

/// Seam for the optional natural-language planning collaborator.
///
/// Implementations produce free-form text that is expected (but not
/// guaranteed) to contain one JSON object in the weekly-plan wire shape.
/// `max_steps` bounds the assistant's internal reasoning/tool-call loop.
pub trait PlanningAssistant {
    fn run(&self, instruction: &str, max_steps: u32) -> Result<String>;
}

/// Environment variable carrying the step budget to the spawned command.
pub const MAX_STEPS_ENV: &str = "MENU_ASSISTANT_MAX_STEPS";

/// Assistant backed by an external command.
///
/// The instruction is written to the child's stdin and the response read from
/// its stdout. The child is killed if it outlives the wall-clock deadline, so
/// the caller never hangs on an unresponsive assistant.
pub struct CommandAssistant {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandAssistant {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: Duration::from_secs(ASSISTANT_TIMEOUT_SECS),
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl PlanningAssistant for CommandAssistant {
    fn run(&self, instruction: &str, max_steps: u32) -> Result<String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env(MAX_STEPS_ENV, max_steps.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                MenuError::AssistantFailed(format!("failed to spawn {}: {e}", self.program))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(instruction.as_bytes())
                .map_err(|e| MenuError::AssistantFailed(format!("stdin write failed: {e}")))?;
        }

        // Drain stdout on a separate thread so a chatty child cannot fill the
        // pipe while we poll for exit.
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| MenuError::AssistantFailed("stdout not captured".to_string()))?;
        let reader = std::thread::spawn(move || {
            use std::io::Read;
            let mut buf = String::new();
            stdout.read_to_string(&mut buf).map(|_| buf)
        });

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if Instant::now() >= deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        let _ = reader.join();
                        return Err(MenuError::AssistantFailed(format!(
                            "timed out after {:?}",
                            self.timeout
                        )));
                    }
                    std::thread::sleep(Duration::from_millis(50));
                }
                Err(e) => {
                    let _ = child.kill();
                    let _ = reader.join();
                    return Err(MenuError::AssistantFailed(format!("wait failed: {e}")));
                }
            }
        };

        let output = reader
            .join()
            .map_err(|_| MenuError::AssistantFailed("stdout reader panicked".to_string()))?
            .map_err(|e| MenuError::AssistantFailed(format!("stdout read failed: {e}")))?;

        if !status.success() {
            return Err(MenuError::AssistantFailed(format!(
                "exited with {status}"
            )));
        }

        Ok(output)
    }
}
