//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod watchlist_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = WatchlistError::from(json_error);

        match error {
            WatchlistError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = WatchlistError::from(io_error);

        match error {
            WatchlistError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_csv_error_conversion() {
        // A record with a different field count than the header is rejected
        let data = "name,mlb_id\nA,1,extra\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let csv_error = reader.records().next().unwrap().unwrap_err();
        let error = WatchlistError::from(csv_error);

        match error {
            WatchlistError::Csv(_) => (),
            _ => panic!("Expected Csv error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "twenty".parse::<u16>().unwrap_err();
        let error = WatchlistError::from(parse_error);

        match error {
            WatchlistError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_missing_watchlist_error() {
        let error = WatchlistError::MissingWatchlist {
            path: PathBuf::from("data/watchlist.csv"),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Missing watchlist file"));
        assert!(error_string.contains("data/watchlist.csv"));
    }

    #[test]
    fn test_invalid_player_id_error() {
        let error = WatchlistError::InvalidPlayerId {
            line: 3,
            value: "abc".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Invalid mlb_id \"abc\" on watchlist line 3"
        );
    }

    #[test]
    fn test_provider_error() {
        let error = WatchlistError::Provider {
            message: "upstream timed out".to_string(),
        };
        assert_eq!(error.to_string(), "Stats provider error: upstream timed out");
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = WatchlistError::from(io_error);

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = WatchlistError::Provider {
            message: "boom".to_string(),
        };
        assert_eq!(format!("{:?}", error), "Provider { message: \"boom\" }");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(WatchlistError::MissingWatchlist {
                path: PathBuf::from("nowhere.csv"),
            })
        }

        match test_function().unwrap_err() {
            WatchlistError::MissingWatchlist { .. } => (),
            _ => panic!("Expected MissingWatchlist error"),
        }
    }
}
