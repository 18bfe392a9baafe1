use crate::config::GreetingConfig;
use crate::domain::ports::Greeter;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Writes the greeting banner to any `Write` sink.
pub struct ConsoleGreeter<W: Write> {
    out: W,
    config: GreetingConfig,
}

impl ConsoleGreeter<io::Stdout> {
    pub fn stdout(config: GreetingConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> ConsoleGreeter<W> {
    pub fn new(out: W, config: GreetingConfig) -> Self {
        Self { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Greeter for ConsoleGreeter<W> {
    fn greet(&mut self, name: &str) -> Result<()> {
        tracing::debug!(
            "Greeting {} (welcome line: {})",
            name,
            self.config.show_welcome
        );

        writeln!(self.out, "Hello from {}!", self.config.app_name)?;
        if self.config.show_welcome {
            writeln!(self.out, "Welcome!")?;
        }
        writeln!(
            self.out,
            "{} - version {}",
            self.config.app_name, self.config.version
        )?;
        writeln!(self.out, "Hello, {}!", name)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DrillError;

    fn render(config: GreetingConfig, name: &str) -> String {
        let mut greeter = ConsoleGreeter::new(Vec::new(), config);
        greeter.greet(name).unwrap();
        String::from_utf8(greeter.into_inner()).unwrap()
    }

    #[test]
    fn test_greeting_with_welcome() {
        let config = GreetingConfig {
            show_welcome: true,
            app_name: "foo".to_string(),
            version: "1.2.3".to_string(),
        };
        assert_eq!(
            render(config, "Ada"),
            "Hello from foo!\nWelcome!\nfoo - version 1.2.3\nHello, Ada!\n"
        );
    }

    #[test]
    fn test_greeting_without_welcome() {
        let config = GreetingConfig {
            show_welcome: false,
            ..GreetingConfig::default()
        };
        let output = render(config, "Grace");
        assert!(!output.contains("Welcome!"));
        assert!(output.ends_with("Hello, Grace!\n"));
        assert!(output.contains(&format!("live-coding - version {}", env!("CARGO_PKG_VERSION"))));
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut greeter = ConsoleGreeter::new(BrokenSink, GreetingConfig::default());
        assert!(matches!(greeter.greet("nobody"), Err(DrillError::IoError(_))));
    }
}
