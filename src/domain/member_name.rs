use super::ValidationError;

pub const MAX_MEMBER_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberName(String);

impl MemberName {
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.chars().any(char::is_control) {
            return Err(ValidationError::new(
                "Member name cannot contain control characters".to_string(),
            ));
        }
        match name.chars().count() {
            0 => Err(ValidationError::new(
                "Member name cannot be empty".to_string(),
            )),
            x if x > MAX_MEMBER_NAME_LENGTH => Err(ValidationError::new(
                "Max name length is 255 characters".to_string(),
            )),
            _ => Ok(Self(name.to_owned())),
        }
    }
}

impl AsRef<str> for MemberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MemberName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
