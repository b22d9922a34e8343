use super::ValidationError;

/// Identifier assigned by the member store on first save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(i64);

impl MemberId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = id.parse::<i64>().map_err(|e| {
            ValidationError::new(format!("Invalid member ID: {e}"))
        })?;
        if parsed < 1 {
            return Err(ValidationError::new(
                "Invalid member ID: must be a positive integer".to_string(),
            ));
        }
        Ok(Self(parsed))
    }

    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl AsRef<i64> for MemberId {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_valid_ids() {
    let valid_id = "42";
    let parsed = MemberId::parse(valid_id).expect(valid_id);
    assert_eq!(
        parsed.as_ref().to_string(),
        valid_id,
        "ID does not match expected value"
    );
}

#[test]
fn test_invalid_ids() {
    let test_cases = [
        ("abc", "Invalid member ID: invalid digit found in string"),
        ("", "Invalid member ID: cannot parse integer from empty string"),
        ("0", "Invalid member ID: must be a positive integer"),
        ("-7", "Invalid member ID: must be a positive integer"),
    ];
    for (invalid_id, expected) in test_cases {
        let error = MemberId::parse(invalid_id).expect_err(invalid_id);
        assert_eq!(error.as_ref(), expected);
    }
}
