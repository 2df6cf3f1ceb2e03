use crate::api::validate_url;
use crate::quota::RateLimiter;

pub const EMPTY_URL_MESSAGE: &str = "Please enter a URL";
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid Reddit or Hacker News URL";
pub const QUOTA_EXHAUSTED_MESSAGE: &str = "You have reached your daily limit";

/// Text in the URL field plus its inline validation message. Kept apart from
/// the controller's network error.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub url: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Raw (untrimmed) URL to hand to the controller.
    Accepted(String),
    Rejected(&'static str),
}

impl FormState {
    pub fn submit(&mut self, url: &str, limiter: &RateLimiter) -> Submission {
        self.url = url.to_string();
        self.error = None;

        let outcome = if url.trim().is_empty() {
            Submission::Rejected(EMPTY_URL_MESSAGE)
        } else if !validate_url(url) {
            Submission::Rejected(INVALID_URL_MESSAGE)
        } else if !limiter.can_make_request() {
            Submission::Rejected(QUOTA_EXHAUSTED_MESSAGE)
        } else {
            Submission::Accepted(url.to_string())
        };

        if let Submission::Rejected(message) = &outcome {
            self.error = Some((*message).to_string());
        }
        outcome
    }

    pub fn clear(&mut self) {
        self.url.clear();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quota::MAX_REQUESTS_PER_DAY;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn limiter() -> RateLimiter {
        RateLimiter::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn blank_input_is_rejected() {
        let mut form = FormState::default();
        assert_eq!(form.submit("   ", &limiter()), Submission::Rejected(EMPTY_URL_MESSAGE));
        assert_eq!(form.error.as_deref(), Some("Please enter a URL"));
    }

    #[test]
    fn unsupported_host_is_rejected() {
        let mut form = FormState::default();
        assert_eq!(
            form.submit("https://example.com", &limiter()),
            Submission::Rejected(INVALID_URL_MESSAGE)
        );
        assert_eq!(form.url, "https://example.com");
    }

    #[test]
    fn exhausted_quota_is_rejected() {
        let limiter = limiter();
        for _ in 0..MAX_REQUESTS_PER_DAY {
            limiter.increment_request_count().unwrap();
        }
        let mut form = FormState::default();
        assert_eq!(
            form.submit("https://news.ycombinator.com/item?id=1", &limiter),
            Submission::Rejected(QUOTA_EXHAUSTED_MESSAGE)
        );
    }

    #[test]
    fn valid_input_is_accepted_untrimmed_and_clears_error() {
        let mut form = FormState {
            url: String::new(),
            error: Some(EMPTY_URL_MESSAGE.to_string()),
        };
        let raw = "https://www.reddit.com/r/x/comments/1";
        assert_eq!(form.submit(raw, &limiter()), Submission::Accepted(raw.to_string()));
        assert!(form.error.is_none());
    }
}
