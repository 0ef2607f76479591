use ticketgen_providers::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Strategy for printing the build version.
///
/// Also names the endpoint and model used when the config leaves them out.
/// Needs no config file.
#[derive(Debug, Clone, Copy)]
pub struct VersionStrategy;

impl super::CommandStrategy for VersionStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        println!("{}", version_line());
        println!("  default endpoint: {DEFAULT_BASE_URL}");
        println!("  default model:    {DEFAULT_MODEL}");
        Ok(())
    }
}

fn version_line() -> String {
    format!("ticketgen {}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_line_names_binary() {
        let line = version_line();
        assert!(line.starts_with("ticketgen "));
        assert!(line.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
