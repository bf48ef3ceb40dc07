#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub name: String,
    /// Allows bucketed connector partitionings of different catalogs to be
    /// treated as co-located.
    pub colocated_join: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            name: "noname".to_string(),
            colocated_join: true,
        }
    }
}

impl PlannerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_colocated_join(self, colocated_join: bool) -> Self {
        Self {
            colocated_join,
            ..self
        }
    }
}
