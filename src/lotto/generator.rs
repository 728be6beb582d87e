//! Lucky number generator
//!
//! Every mode yields the same placeholder sequence. Deriving numbers from a
//! birthday or phone number is not implemented.

/// The sequence shown after every generation
pub const LUCKY_NUMBERS: [u8; 6] = [8, 2, 9, 5, 1, 7];

/// Input form selected on the generator screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorMode {
    Birthday,
    #[default]
    Phone,
    Random,
}

impl GeneratorMode {
    /// Modes in tab order
    pub fn all() -> [Self; 3] {
        [Self::Birthday, Self::Phone, Self::Random]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Birthday => "Birthday",
            Self::Phone => "Phone number",
            Self::Random => "Random",
        }
    }

    /// Prompt shown above the form for this mode
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Birthday => "Pick your date of birth",
            Self::Phone => "Enter your 11-digit phone number",
            Self::Random => "Press Enter to draw your lucky numbers",
        }
    }

    fn index(&self) -> usize {
        Self::all().iter().position(|m| m == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// Produce the lucky numbers for a mode
pub fn generate(_mode: GeneratorMode) -> [u8; 6] {
    LUCKY_NUMBERS
}
