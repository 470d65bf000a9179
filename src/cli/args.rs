use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pizza-builder")]
#[command(about = "Compose a pizza from the menu and get its description and price")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Base choice (1-based menu index); skips the base prompt
    #[arg(long)]
    pub base: Option<String>,

    /// Size choice (1-based menu index); skips the size prompt
    #[arg(long)]
    pub size: Option<String>,

    /// Topping choices, comma separated (e.g. "1,3")
    #[arg(long)]
    pub toppings: Option<String>,

    /// Print the order summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the menu and exit
    #[arg(long)]
    pub menu: bool,
}

impl Args {
    /// Both mandatory choices were given on the command line.
    pub fn is_non_interactive(&self) -> bool {
        self.base.is_some() && self.size.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_interactive_requires_base_and_size() {
        let args = Args::parse_from(["pizza-builder", "--base", "1", "--size", "2"]);
        assert!(args.is_non_interactive());
        assert!(args.toppings.is_none());

        let args = Args::parse_from(["pizza-builder", "--base", "1"]);
        assert!(!args.is_non_interactive());
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from(["pizza-builder", "-v", "--json", "--toppings", "1,2"]);
        assert!(args.verbose);
        assert!(args.json);
        assert_eq!(args.toppings.as_deref(), Some("1,2"));
        assert!(!args.menu);
    }
}
