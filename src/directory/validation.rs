//! Record validation rules.

use crate::error::directory::DirectoryError;

/// Checks a trimmed record against the directory's acceptance rules.
///
/// A record must be non-empty, at most `max_length` characters long, and made
/// only of alphabetic characters and whitespace.
pub fn validate_record(record: &str, max_length: usize) -> Result<(), DirectoryError> {
    if record.is_empty() {
        return Err(DirectoryError::EmptyRecord);
    }

    let length = record.chars().count();
    if length > max_length {
        return Err(DirectoryError::RecordTooLong { length, max_length });
    }

    if record
        .chars()
        .any(|c| !c.is_whitespace() && !c.is_alphabetic())
    {
        return Err(DirectoryError::InvalidCharacters(record.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Jane Doe" ; "two words")]
    #[test_case("Ada" ; "single word")]
    #[test_case("José  María Núñez" ; "accented letters and double space")]
    fn test_accepts(record: &str) {
        assert_eq!(validate_record(record, 50), Ok(()));
    }

    #[test_case("" => DirectoryError::EmptyRecord ; "empty")]
    #[test_case("John123" => DirectoryError::InvalidCharacters("John123".to_string()) ; "digits")]
    #[test_case("O'Brien" => DirectoryError::InvalidCharacters("O'Brien".to_string()) ; "apostrophe")]
    fn test_rejects(record: &str) -> DirectoryError {
        validate_record(record, 50).unwrap_err()
    }

    #[test]
    fn test_length_limit_is_inclusive() {
        let at_limit = "a".repeat(50);
        let over_limit = "a".repeat(51);

        assert!(validate_record(&at_limit, 50).is_ok());
        assert_eq!(
            validate_record(&over_limit, 50),
            Err(DirectoryError::RecordTooLong {
                length: 51,
                max_length: 50,
            })
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let record = "é".repeat(50);
        assert!(validate_record(&record, 50).is_ok());
    }
}
