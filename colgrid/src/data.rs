//! Synthetic people for the demo table.

use rand::Rng;
use serde::Serialize;

use crate::column::ColumnSpec;
use crate::record::{CellValue, Record};

const WORDS: &[&str] = &[
    "anchor", "badge", "cactus", "dinner", "ember", "falcon", "garden", "harbor", "island",
    "jacket", "kettle", "lantern", "meadow", "needle", "orchard", "pepper", "quarry", "ribbon",
    "saddle", "thunder", "umbrella", "velvet", "walnut", "yonder", "zephyr", "branch", "copper",
    "drift", "feather", "glacier", "hollow", "marble",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Relationship,
    Complicated,
    Single,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Relationship => "relationship",
            Status::Complicated => "complicated",
            Status::Single => "single",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub visits: u32,
    pub progress: u32,
    pub status: Status,
}

impl Record for Person {
    fn cell(&self, accessor: &str) -> Option<CellValue> {
        let value = match accessor {
            "firstName" => self.first_name.as_str().into(),
            "lastName" => self.last_name.as_str().into(),
            "age" => self.age.into(),
            "visits" => self.visits.into(),
            "progress" => self.progress.into(),
            "status" => self.status.as_str().into(),
            _ => return None,
        };
        Some(value)
    }
}

fn word(rng: &mut impl Rng) -> String {
    WORDS[rng.random_range(0..WORDS.len())].to_string()
}

pub fn new_person(rng: &mut impl Rng) -> Person {
    let chance: f64 = rng.random();
    let status = if chance > 0.66 {
        Status::Relationship
    } else if chance > 0.33 {
        Status::Complicated
    } else {
        Status::Single
    };

    Person {
        first_name: word(rng),
        last_name: word(rng),
        age: rng.random_range(0..30),
        visits: rng.random_range(0..100),
        progress: rng.random_range(0..100),
        status,
    }
}

/// Generate `count` random people.
pub fn make_data(count: usize, rng: &mut impl Rng) -> Vec<Person> {
    (0..count).map(|_| new_person(rng)).collect()
}

/// Columns for [`Person`] rows.
pub fn person_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("First Name", "firstName"),
        ColumnSpec::new("Last Name", "lastName"),
        ColumnSpec::new("Age", "age").width(5),
        ColumnSpec::new("Visits", "visits").width(6),
        ColumnSpec::new("Status", "status"),
        ColumnSpec::new("Profile Progress", "progress"),
    ]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_make_data_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let people = make_data(50, &mut rng);
        assert_eq!(people.len(), 50);
        for p in &people {
            assert!(p.age < 30);
            assert!(p.visits < 100);
            assert!(p.progress < 100);
            assert!(WORDS.contains(&p.first_name.as_str()));
        }
    }

    #[test]
    fn test_make_data_is_seeded() {
        let a = make_data(5, &mut StdRng::seed_from_u64(42));
        let b = make_data(5, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_person_cells_cover_columns() {
        let person = new_person(&mut StdRng::seed_from_u64(1));
        for column in person_columns() {
            assert!(person.cell(&column.accessor).is_some(), "{}", column.accessor);
        }
        assert_eq!(person.cell("missing"), None);
    }
}
