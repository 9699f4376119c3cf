use super::FiniteDifference;

/// Holds options for the evaluation of material-point functions
#[derive(Clone, Copy, Debug)]
pub struct Settings {
    /// Finite difference scheme for the numerical derivatives (d²g/dσ² and dM/dσ)
    ///
    /// The forward scheme reproduces the reference solver results.
    pub finite_difference: FiniteDifference,

    /// Prints the derived model constants when allocating a model
    pub verbose: bool,
}

impl Settings {
    /// Allocates a new instance
    pub fn new() -> Self {
        Settings {
            finite_difference: FiniteDifference::Forward,
            verbose: false,
        }
    }

    /// Sets the finite difference scheme
    pub fn set_finite_difference(&mut self, method: FiniteDifference) -> &mut Self {
        self.finite_difference = method;
        self
    }

    /// Enables or disables the verbose mode
    pub fn set_verbose(&mut self, flag: bool) -> &mut Self {
        self.verbose = flag;
        self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
