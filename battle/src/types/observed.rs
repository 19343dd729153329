//! Partial knowledge about a hidden attribute

/// What the tracker knows about an attribute of a Pokemon it cannot inspect
/// directly. `Absent` means the attribute is known to be empty (no item, a
/// suppressed ability), which is different from never having seen it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Observed<T> {
    #[default]
    Unknown,
    Absent,
    Known(T),
}

impl<T> Observed<T> {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Observed::Unknown)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Observed::Known(_))
    }

    pub fn known(&self) -> Option<&T> {
        match self {
            Observed::Known(value) => Some(value),
            _ => None,
        }
    }
}

impl Observed<String> {
    /// A wire value where the empty string means "none". Normalized to an id.
    pub fn from_wire(value: &str) -> Self {
        let id = scout_protocol::to_id(value);
        if id.is_empty() {
            Observed::Absent
        } else {
            Observed::Known(id)
        }
    }

    /// Compare against a normalized id
    pub fn is(&self, id: &str) -> bool {
        self.known().is_some_and(|known| known == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        let item: Observed<String> = Observed::default();
        assert!(item.is_unknown());
        assert!(!item.is_known());
        assert_eq!(item.known(), None);
    }

    #[test]
    fn test_from_wire() {
        assert_eq!(Observed::from_wire(""), Observed::Absent);
        assert_eq!(
            Observed::from_wire("Choice Scarf"),
            Observed::Known("choicescarf".to_string())
        );
        assert!(Observed::from_wire("leftovers").is("leftovers"));
        assert!(!Observed::<String>::Absent.is(""));
    }
}
