//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod espn_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let espn_error = EspnError::from(reqwest_error);

        match espn_error {
            EspnError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let espn_error = EspnError::from(json_error);

        match espn_error {
            EspnError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed");
        let espn_error = EspnError::from(io_error);

        match espn_error {
            EspnError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let espn_error = EspnError::from(header_error);

        match espn_error {
            EspnError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_error_display_messages() {
        let missing = EspnError::MissingLeagueId {
            env_var: "ESPN_FFL_LEAGUE_ID".to_string(),
        };
        assert_eq!(
            missing.to_string(),
            "League ID not provided and ESPN_FFL_LEAGUE_ID environment variable not set"
        );

        let week = EspnError::InvalidWeek {
            value: "0".to_string(),
        };
        assert_eq!(
            week.to_string(),
            "Invalid week \"0\": expected a positive integer"
        );

        let collection = EspnError::Collection {
            message: "boom".to_string(),
        };
        assert_eq!(collection.to_string(), "Player collection failed: boom");
    }
}
