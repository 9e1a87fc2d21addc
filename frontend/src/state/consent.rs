//! Cookie consent: one stored choice decides whether the banner appears.

use log::{debug, info, warn};

use crate::config::SiteConfig;
use crate::storage::StorageError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    Accepted,
    Rejected,
    Dismissed,
}

impl ConsentChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentChoice::Accepted => "accepted",
            ConsentChoice::Rejected => "rejected",
            ConsentChoice::Dismissed => "dismissed",
        }
    }

    /// An empty value counts as no choice. Any other unknown value still
    /// counts as a choice and is read as a dismissal.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "accepted" => Some(ConsentChoice::Accepted),
            "rejected" => Some(ConsentChoice::Rejected),
            "dismissed" => Some(ConsentChoice::Dismissed),
            other => {
                debug!("Unrecognised cookie choice {:?}, treating as dismissed", other);
                Some(ConsentChoice::Dismissed)
            }
        }
    }
}

/// Durable string key-value storage.
#[cfg_attr(test, mockall::automock)]
pub trait ConsentStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Clone, Debug)]
pub struct ConsentFlag<S> {
    store: S,
    key: &'static str,
    delay_ms: u32,
    choice: Option<ConsentChoice>,
    banner_visible: bool,
}

impl<S: ConsentStore> ConsentFlag<S> {
    /// Reads the stored choice. This is the only read for the session.
    pub fn init(store: S, config: &SiteConfig) -> Self {
        let choice = match store.load(config.consent_key) {
            Ok(stored) => stored.as_deref().and_then(ConsentChoice::from_stored),
            Err(err) => {
                warn!("Could not read cookie choice, asking again: {}", err);
                None
            }
        };
        Self {
            store,
            key: config.consent_key,
            delay_ms: config.consent_delay_ms,
            choice,
            banner_visible: false,
        }
    }

    #[cfg(test)]
    pub fn choice(&self) -> Option<ConsentChoice> {
        self.choice
    }

    pub fn is_banner_visible(&self) -> bool {
        self.banner_visible
    }

    /// Delay before the banner should appear, if it should appear at all.
    pub fn pending_delay_ms(&self) -> Option<u32> {
        (self.choice.is_none() && !self.banner_visible).then_some(self.delay_ms)
    }

    /// Called once the delay has elapsed. Does nothing if a choice was made
    /// in the meantime.
    pub fn show_banner(&mut self) -> bool {
        if self.choice.is_some() || self.banner_visible {
            return false;
        }
        self.banner_visible = true;
        true
    }

    pub fn close(&mut self) -> Result<(), StorageError> {
        self.choose(ConsentChoice::Dismissed)
    }

    pub fn accept_all(&mut self) -> Result<(), StorageError> {
        info!("All cookies accepted");
        self.choose(ConsentChoice::Accepted)
    }

    pub fn reject_optional(&mut self) -> Result<(), StorageError> {
        info!("Optional cookies rejected");
        self.choose(ConsentChoice::Rejected)
    }

    // The banner stays hidden even if the write fails; the choice then only
    // lasts for this session.
    fn choose(&mut self, choice: ConsentChoice) -> Result<(), StorageError> {
        self.banner_visible = false;
        self.choice = Some(choice);
        self.store.save(self.key, choice.as_str())
    }
}
