use serde::{Serialize, Deserialize};

/// Concrete animal variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    Dog,
    Cat,
    Turtle,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
            Species::Turtle => "Turtle",
        }
    }
}

/// Anything that can be put through a training routine, animal or not
pub trait Trainable {
    fn train(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Trainable for Dog {
    fn train(&self) -> &'static str {
        "The dog trains"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    name: String,
}

impl Cat {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turtle {
    name: String,
}

impl Turtle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// Not an animal: no name, no sound, only training
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotDog;

impl Trainable for RobotDog {
    fn train(&self) -> &'static str {
        "Robot dog initiates a new training module"
    }
}

/// Animal taxonomy. Trainability is orthogonal and queried through `as_trainable`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "species")]
pub enum Animal {
    Dog(Dog),
    Cat(Cat),
    Turtle(Turtle),
}

impl Animal {
    pub fn name(&self) -> &str {
        match self {
            Animal::Dog(d) => &d.name,
            Animal::Cat(c) => &c.name,
            Animal::Turtle(t) => &t.name,
        }
    }

    pub fn make_sound(&self) -> &'static str {
        match self {
            Animal::Dog(_) => "BARK",
            Animal::Cat(_) => "MEW",
            Animal::Turtle(_) => "...",
        }
    }

    pub fn species(&self) -> Species {
        match self {
            Animal::Dog(_) => Species::Dog,
            Animal::Cat(_) => Species::Cat,
            Animal::Turtle(_) => Species::Turtle,
        }
    }

    /// Capability test: `Some` only for variants that also implement `Trainable`
    pub fn as_trainable(&self) -> Option<&dyn Trainable> {
        match self {
            Animal::Dog(d) => Some(d as &dyn Trainable),
            Animal::Cat(_) | Animal::Turtle(_) => None,
        }
    }
}

impl From<Dog> for Animal {
    fn from(dog: Dog) -> Self {
        Animal::Dog(dog)
    }
}

impl From<Cat> for Animal {
    fn from(cat: Cat) -> Self {
        Animal::Cat(cat)
    }
}

impl From<Turtle> for Animal {
    fn from(turtle: Turtle) -> Self {
        Animal::Turtle(turtle)
    }
}
