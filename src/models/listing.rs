/// One job listing: a row of the sheet (or of the upstream table).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub company: String,
    pub role: String,
    pub location: String,
    pub apply_link: String,
}

impl Listing {
    pub fn new(
        company: impl Into<String>,
        role: impl Into<String>,
        location: impl Into<String>,
        apply_link: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            role: role.into(),
            location: location.into(),
            apply_link: apply_link.into(),
        }
    }

    /// Deduplication key: (company, role), case-insensitive
    pub fn key(&self) -> (String, String) {
        (
            self.company.trim().to_lowercase(),
            self.role.trim().to_lowercase(),
        )
    }

    pub fn is_blank(&self) -> bool {
        self.company.is_empty()
            && self.role.is_empty()
            && self.location.is_empty()
            && self.apply_link.is_empty()
    }
}
