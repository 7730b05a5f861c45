//! Sort direction and its query-parameter form.

/// Direction of the current sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending order (A-Z, 0-9)
    #[default]
    Ascending,
    /// Descending order (Z-A, 9-0)
    Descending,
}

impl SortOrder {
    /// Read the direction from a raw parameter value.
    ///
    /// Only the literal `"desc"` selects descending; anything else, including
    /// an absent parameter, is ascending.
    ///
    /// # Examples
    /// ```
    /// use htable_core::table::SortOrder;
    /// assert_eq!(SortOrder::from_param(Some("desc")), SortOrder::Descending);
    /// assert_eq!(SortOrder::from_param(Some("DESC")), SortOrder::Ascending);
    /// assert_eq!(SortOrder::from_param(None), SortOrder::Ascending);
    /// ```
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("desc") => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// The direction a sort link proposes next.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn is_descending(self) -> bool {
        self == SortOrder::Descending
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_param())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }

    #[test]
    fn test_from_param_only_accepts_literal_desc() {
        assert_eq!(SortOrder::from_param(Some("desc")), SortOrder::Descending);
        assert_eq!(SortOrder::from_param(Some("asc")), SortOrder::Ascending);
        assert_eq!(SortOrder::from_param(Some("descending")), SortOrder::Ascending);
        assert_eq!(SortOrder::from_param(Some("")), SortOrder::Ascending);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    }

    #[test]
    fn test_param_round_trip_names() {
        assert_eq!(SortOrder::Ascending.to_string(), "asc");
        assert_eq!(SortOrder::Descending.as_param(), "desc");
        assert!(SortOrder::Descending.is_descending());
    }
}
