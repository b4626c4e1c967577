use serde::Serialize;

use crate::error::ScrapeError;

/// Number of search result pages the service crawls for a keyword.
pub const KEYWORD_PAGE_LIMIT: u8 = 10;

pub const MISSING_URLS_MESSAGE: &str = "Please, insert at least one website address.";
pub const MISSING_KEYWORD_MESSAGE: &str = "Please, fill the keyword in.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlScrapeRequest {
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordScrapeRequest {
    pub keyword: String,
    pub pages: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeRequest {
    Urls(UrlScrapeRequest),
    Keyword(KeywordScrapeRequest),
}

impl UrlScrapeRequest {
    pub fn parse(input: &str) -> Result<Self, ScrapeError> {
        let urls: Vec<String> = input.split_whitespace().map(|u| u.to_string()).collect();

        match urls.is_empty() {
            true => Err(ScrapeError::Validation(MISSING_URLS_MESSAGE.to_string())),
            false => Ok(UrlScrapeRequest { urls }),
        }
    }
}

impl KeywordScrapeRequest {
    pub fn parse(input: &str) -> Result<Self, ScrapeError> {
        let keyword = input.trim();

        match keyword.is_empty() {
            true => Err(ScrapeError::Validation(MISSING_KEYWORD_MESSAGE.to_string())),
            false => Ok(KeywordScrapeRequest {
                keyword: keyword.to_string(),
                pages: KEYWORD_PAGE_LIMIT,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{KeywordScrapeRequest, UrlScrapeRequest, MISSING_KEYWORD_MESSAGE};
    use crate::error::ScrapeError;

    #[test]
    fn urls_split_on_space() {
        let request = UrlScrapeRequest::parse("a.com b.com").unwrap();

        assert_eq!(request.urls, vec!["a.com", "b.com"]);
    }

    #[test]
    fn urls_split_on_newlines_and_repeated_spaces() {
        let request = UrlScrapeRequest::parse(" a.com\n\nb.com   c.com\t").unwrap();

        assert_eq!(request.urls, vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn urls_empty_input_invalid() {
        for input in ["", "   ", "\n\t"] {
            let result = UrlScrapeRequest::parse(input);
            assert!(matches!(result, Err(ScrapeError::Validation(_))));
        }
    }

    #[test]
    fn urls_payload_shape() {
        let request = UrlScrapeRequest::parse("a.com b.com").unwrap();

        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({"urls": ["a.com", "b.com"]})
        );
    }

    #[test]
    fn keyword_always_ten_pages() {
        for input in ["plumbers", "yoga mats berlin", "  10  "] {
            let request = KeywordScrapeRequest::parse(input).unwrap();
            assert_eq!(request.pages, 10);
        }
    }

    #[test]
    fn keyword_payload_shape() {
        let request = KeywordScrapeRequest::parse(" yoga mats ").unwrap();

        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({"keyword": "yoga mats", "pages": 10})
        );
    }

    #[test]
    fn keyword_empty_input_invalid() {
        match KeywordScrapeRequest::parse("  ") {
            Err(ScrapeError::Validation(message)) => assert_eq!(message, MISSING_KEYWORD_MESSAGE),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }
}
