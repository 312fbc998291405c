use serde::{Serialize, Deserialize};

use crate::types::{Animal, Species, Trainable};

/// Outcome of the capability test for one pet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum Verdict {
    Trainable { phrase: String },
    Refuses { species: Species },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub name: String,
    #[serde(flatten)]
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub name: String,
    pub sound: String,
}

/// Everything one drill produced, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub roll_call: Vec<Call>,
    pub army: Vec<String>,
    pub pets: Vec<Assessment>,
}

// Train every army member, then classify each pet by whether it can be trained
pub fn run(army: &[&dyn Trainable], pets: &[Animal]) -> Report {
    let army = army.iter().map(|t| t.train().to_string()).collect();
    let pets = pets.iter().map(assess).collect();

    Report {
        roll_call: Vec::new(),
        army,
        pets,
    }
}

pub fn assess(pet: &Animal) -> Assessment {
    let verdict = match pet.as_trainable() {
        Some(trainable) => Verdict::Trainable {
            phrase: trainable.train().to_string(),
        },
        None => Verdict::Refuses {
            species: pet.species(),
        },
    };

    Assessment {
        name: pet.name().to_string(),
        verdict,
    }
}

pub fn roll_call(pets: &[Animal]) -> Vec<Call> {
    pets.iter()
        .map(|pet| Call {
            name: pet.name().to_string(),
            sound: pet.make_sound().to_string(),
        })
        .collect()
}
