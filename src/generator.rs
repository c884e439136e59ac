use std::process::Command;
use std::time::{Duration, Instant};

/// Runs a shell command and reports its output as display text, once on
/// start and then every `interval`.
///
/// The schedule is polled from the frame loop; commands run synchronously on
/// the calling thread.
#[derive(Debug)]
pub struct TextGenerator {
    command: String,
    interval: Option<Duration>,
    next_run: Option<Instant>,
}

impl TextGenerator {
    pub fn new(command: impl Into<String>, interval_secs: Option<f64>) -> Self {
        let interval = interval_secs.and_then(|secs| {
            if secs.is_finite() && secs > 0.0 {
                Some(Duration::from_secs_f64(secs))
            } else {
                tracing::warn!(secs, "ignoring non-positive refresh interval");
                None
            }
        });
        Self {
            command: command.into(),
            interval,
            next_run: None,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_run.is_some()
    }

    /// Run the command immediately and schedule the next refresh.
    pub fn start(&mut self, now: Instant) -> String {
        self.next_run = self.interval.map(|i| now + i);
        run_command(&self.command)
    }

    pub fn stop(&mut self) {
        self.next_run = None;
    }

    /// New text when a refresh is due.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let (due, interval) = (self.next_run?, self.interval?);
        if now < due {
            return None;
        }
        let mut next = due + interval;
        if next <= now {
            next = now + interval;
        }
        self.next_run = Some(next);
        Some(run_command(&self.command))
    }

    /// How long the frame loop may sleep before the next refresh.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_run.map(|due| due.saturating_duration_since(now))
    }
}

/// Output of `cmd` run through the platform shell: stdout followed by
/// stderr, with a single trailing newline removed.
///
/// Failures never surface as errors; a command that cannot be spawned
/// produces an empty string.
pub fn run_command(cmd: &str) -> String {
    let mut command = shell_command(cmd);
    match command.output() {
        Ok(output) => {
            if !output.status.success() {
                tracing::debug!(cmd, status = ?output.status, "command exited unsuccessfully");
            }
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));
            if text.ends_with('\n') {
                text.pop();
                if text.ends_with('\r') {
                    text.pop();
                }
            }
            text
        }
        Err(e) => {
            tracing::warn!(cmd, error = %e, "failed to run command");
            String::new()
        }
    }
}

#[cfg(windows)]
fn shell_command(cmd: &str) -> Command {
    let mut c = Command::new("cmd");
    c.arg("/C").arg(cmd);
    c
}

#[cfg(not(windows))]
fn shell_command(cmd: &str) -> Command {
    let mut c = Command::new("sh");
    c.arg("-c").arg(cmd);
    c
}
