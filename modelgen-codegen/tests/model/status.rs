// Generated by modelgen. Do not edit.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum Status {
    ACTIVE,
    INACTIVE_LONG,
}

impl Status {
    /// Members in declaration order.
    pub const VALUES: &'static [Self] = &[Self::ACTIVE, Self::INACTIVE_LONG];

    /// Returns the member name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ACTIVE => "ACTIVE",
            Self::INACTIVE_LONG => "INACTIVE_LONG",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::ACTIVE),
            "INACTIVE_LONG" => Ok(Self::INACTIVE_LONG),
            other => Err(format!("unknown Status member '{other}'")),
        }
    }
}
