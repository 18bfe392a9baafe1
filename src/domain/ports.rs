use crate::utils::error::Result;

/// Side-effecting greeting collaborator. Implementations decide where the lines go.
pub trait Greeter {
    fn greet(&mut self, name: &str) -> Result<()>;
}
