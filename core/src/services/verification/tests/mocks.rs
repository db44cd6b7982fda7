//! Mock mail transport for service tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::services::verification::MailServiceTrait;

/// Records every message; failures can be toggled per message kind
#[derive(Clone, Default)]
pub struct MockMailService {
    pub codes: Arc<Mutex<Vec<(String, String)>>>,
    pub welcomes: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_codes: Arc<AtomicBool>,
    pub fail_welcome: Arc<AtomicBool>,
}

impl MockMailService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let mock = Self::default();
        mock.fail_codes.store(true, Ordering::SeqCst);
        mock
    }

    /// Most recent code sent to an address
    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.codes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code.clone())
    }

    pub fn code_count(&self) -> usize {
        self.codes.lock().unwrap().len()
    }

    pub fn welcome_count(&self) -> usize {
        self.welcomes.lock().unwrap().len()
    }
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.fail_codes.load(Ordering::SeqCst) {
            return Err("mail transport unavailable".to_string());
        }
        self.codes
            .lock()
            .unwrap()
            .push((email.to_string(), code.to_string()));
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }

    async fn send_welcome(&self, email: &str, name: &str) -> Result<String, String> {
        if self.fail_welcome.load(Ordering::SeqCst) {
            return Err("mail transport unavailable".to_string());
        }
        self.welcomes
            .lock()
            .unwrap()
            .push((email.to_string(), name.to_string()));
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }
}
