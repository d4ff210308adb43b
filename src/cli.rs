use clap::Parser;

/// Count the weekdays (Monday to Friday) between two dates, inclusive.
#[derive(Debug, Parser)]
#[command(
    name = "weekday-span",
    version,
    about = "Count weekdays between two YYYY-MM-DD dates, inclusive"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the result as a JSON object instead of a sentence.
    #[arg(long)]
    pub json: bool,

    /// First date (YYYY-MM-DD). May be later than the second date.
    #[arg(value_name = "DATE1")]
    pub first: String,

    /// Second date (YYYY-MM-DD).
    #[arg(value_name = "DATE2")]
    pub second: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_positional_dates() {
        let cli = Cli::try_parse_from(["weekday-span", "2023-01-01", "2023-01-31"])
            .expect("two dates should parse");
        assert_eq!(cli.first, "2023-01-01");
        assert_eq!(cli.second, "2023-01-31");
        assert_eq!(cli.verbose, 0);
        assert!(!cli.json);
    }

    #[test]
    fn flags_are_accepted_anywhere() {
        let cli = Cli::try_parse_from(["weekday-span", "-vv", "2023-01-01", "--json", "2023-01-31"])
            .expect("flags and dates should parse");
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
    }

    #[test]
    fn missing_second_date_is_rejected() {
        assert!(Cli::try_parse_from(["weekday-span", "2023-01-01"]).is_err());
        assert!(Cli::try_parse_from(["weekday-span"]).is_err());
    }

    #[test]
    fn extra_positional_is_rejected() {
        let result = Cli::try_parse_from(["weekday-span", "2023-01-01", "2023-01-02", "2023-01-03"]);
        assert!(result.is_err());
    }

    #[test]
    fn malformed_dates_reach_the_command() {
        // Date validation happens in the command, not in clap.
        let cli = Cli::try_parse_from(["weekday-span", "2023-13-01", "nope"])
            .expect("any two strings should parse");
        assert_eq!(cli.second, "nope");
    }
}
