#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Human,
    Computer,
}

impl Owner {
    /// Get the other side
    pub fn other(self) -> Owner {
        match self {
            Owner::Human => Owner::Computer,
            Owner::Computer => Owner::Human,
        }
    }

    /// Get the display name used in status messages
    pub fn name(self) -> &'static str {
        match self {
            Owner::Human => "Player",
            Owner::Computer => "Computer",
        }
    }
}
