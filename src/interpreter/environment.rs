use std::collections::HashMap;

/// Variable table plus the current origin/scale/rotation transform state.
///
/// One is created per program run and mutated only while statements execute.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    pub variables: HashMap<String, f64>,
    pub origin: (f64, f64),
    pub scale: (f64, f64),
    // radians
    pub rotation: f64,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
            origin: (0.0, 0.0),
            scale: (1.0, 1.0),
            rotation: 0.0,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    pub fn assign(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
