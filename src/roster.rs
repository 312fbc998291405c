use crate::types::{Animal, Cat, Dog, RobotDog, Trainable, Turtle};

/// Everything that lives in the menagerie for one run
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pets: Vec<Animal>,
    robots: Vec<RobotDog>,
}

impl Roster {
    pub fn new(pets: Vec<Animal>, robots: Vec<RobotDog>) -> Self {
        Roster { pets, robots }
    }

    /// Ella the dog, a robot dog, Yoda the cat and Leonardo the turtle
    pub fn canonical() -> Self {
        let pets = vec![
            Dog::new("Ella").into(),
            Turtle::new("Leonardo").into(),
            Cat::new("Yoda").into(),
        ];
        Roster::new(pets, vec![RobotDog])
    }

    pub fn pets(&self) -> &[Animal] {
        &self.pets
    }

    // Trainable animals first, in pet order, then the robots
    pub fn army(&self) -> Vec<&dyn Trainable> {
        self.pets
            .iter()
            .filter_map(Animal::as_trainable)
            .chain(self.robots.iter().map(|r| r as &dyn Trainable))
            .collect()
    }
}
