use async_trait::async_trait;
use lexifind_core::share::{ShareAttempt, ShareMechanism};
use lexifind_types::{ShareMethod, SharePayload};
use tokio::process::Command;

/// Exit status a share helper uses when the user dismissed the share sheet
pub const CANCELLED_EXIT_CODE: i32 = 130;

/// Hands the link to a platform share helper, run as
/// `<program> <title> <text> <url>`
#[derive(Debug, Clone, Default)]
pub struct CommandShare {
    program: Option<String>,
}

impl CommandShare {
    pub fn new(program: Option<String>) -> Self {
        Self {
            program: program.filter(|p| !p.trim().is_empty()),
        }
    }
}

#[async_trait]
impl ShareMechanism for CommandShare {
    fn method(&self) -> ShareMethod {
        ShareMethod::Native
    }

    fn is_available(&self, _payload: &SharePayload) -> bool {
        self.program.is_some()
    }

    async fn share(&self, payload: &SharePayload) -> ShareAttempt {
        let Some(program) = &self.program else {
            return ShareAttempt::Failed("no native share helper configured".to_string());
        };

        let status = Command::new(program)
            .arg(&payload.title)
            .arg(&payload.text)
            .arg(&payload.url)
            .status()
            .await;

        match status {
            Ok(status) if status.success() => ShareAttempt::Shared,
            Ok(status) if status.code() == Some(CANCELLED_EXIT_CODE) => {
                tracing::debug!("{} reported the share as dismissed", program);
                ShareAttempt::Cancelled
            }
            Ok(status) => ShareAttempt::Failed(format!("{program} exited with {status}")),
            Err(e) => ShareAttempt::Failed(format!("failed to run {program}: {e}")),
        }
    }
}
