/// Message shown once the whole form passes.
pub const SUCCESS_MESSAGE: &str = "High five! Form submitted.";

/// Receives the success notice after a fully valid submission.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Writes the notice to the log at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        log::info!("{message}");
    }
}
