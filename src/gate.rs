use log::warn;
use std::collections::HashSet;


/// Allow-list of temporary passwords. An empty list lets nobody in.
#[derive(Debug)]
pub struct AccessGate {
    passwords: HashSet<String>,
}

impl AccessGate {
    pub fn new(passwords: HashSet<String>) -> Self {
        if passwords.is_empty() {
            warn!("No passwords are configured, the practice test cannot be unlocked");
        }
        AccessGate { passwords }
    }

    pub fn check(&self, attempt: &str) -> bool {
        let attempt = attempt.trim();
        !attempt.is_empty() && self.passwords.contains(attempt)
    }
}
