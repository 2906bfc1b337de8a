//! Fixed class id to species name lookup

/// Name returned for any class id outside the known table
pub const UNKNOWN_SPECIES: &str = "Unknown Iris Species";

const SPECIES: [(i64, &str); 3] = [(0, "Setosa"), (1, "Versicolor"), (2, "Virginica")];

/// Resolve a class id to its species name
pub fn species_name(class_id: i64) -> &'static str {
    SPECIES
        .iter()
        .find(|(id, _)| *id == class_id)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_SPECIES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_species() {
        assert_eq!(species_name(0), "Setosa");
        assert_eq!(species_name(1), "Versicolor");
        assert_eq!(species_name(2), "Virginica");
    }

    #[test]
    fn test_unknown_species() {
        assert_eq!(species_name(3), UNKNOWN_SPECIES);
        assert_eq!(species_name(99), UNKNOWN_SPECIES);
        assert_eq!(species_name(-1), UNKNOWN_SPECIES);
    }
}
