// Adapters layer: concrete implementations of the domain ports.

pub mod greeter;

pub use greeter::ConsoleGreeter;
