use clap::Parser;

const LONG_ABOUT: &str = "\
by-age - Filter and sort timestamped records by their age

Reads records from stdin, one per line. One whitespace-separated field of
each record holds its creation time as an RFC 3339 timestamp. Records whose
age falls inside the requested window are printed, oldest first.

If the first line has no valid timestamp it is treated as a header and
printed unchanged.

EXAMPLES:
  kubectl get pods -o custom-columns=CREATED:.metadata.creationTimestamp,NAME:.metadata.name | by-age -m 50d
  by-age -f 2 -m 20d4h -M 21d4h5m < records.txt
";

const AGE_HELP: &str = "\
Represented as a string duration of age, where the duration is subtracted \
from the current time. For example, '1d20h5m' represents 1 day, 20 hours, \
and 5 minutes ago. Accepts time spans of year (y), month (M), day (d), \
hour (h), minute (m), and second (s)";

#[derive(Parser, Debug)]
#[command(name = "by-age")]
#[command(version)]
#[command(about = "Filter and sort timestamped records by their age")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    /// Minimum age of records to return
    #[arg(short = 'm', long = "min-age", value_name = "AGE", long_help = format!("Minimum age of records to return. {AGE_HELP}"))]
    pub min_age: Option<String>,

    /// Maximum age of records to return
    #[arg(short = 'M', long = "max-age", value_name = "AGE", long_help = format!("Maximum age of records to return. {AGE_HELP}"))]
    pub max_age: Option<String>,

    /// Sort by ascending age (newest first). Defaults to descending age.
    #[arg(short = 'r', long = "reverse-sort")]
    pub reverse_sort: bool,

    /// 1-based whitespace-separated field holding the creation timestamp
    #[arg(short = 'f', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub field: u32,

    /// Reference "now" as an RFC 3339 timestamp (defaults to the current time)
    #[arg(long, value_name = "RFC3339")]
    pub now: Option<String>,

    /// IANA time zone whose calendar is used for y/M/d arithmetic
    #[arg(long, value_name = "ZONE", default_value = "UTC")]
    pub timezone: String,

    /// Print how the age expressions were understood as JSON, then exit
    #[arg(long)]
    pub explain: bool,

    /// Log parsing details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags_are_case_sensitive() {
        let cli = Cli::try_parse_from(["by-age", "-m", "1d", "-M", "3d"]).unwrap();
        assert_eq!(cli.min_age.as_deref(), Some("1d"));
        assert_eq!(cli.max_age.as_deref(), Some("3d"));
    }

    #[test]
    fn test_field_must_be_positive() {
        assert!(Cli::try_parse_from(["by-age", "-f", "0"]).is_err());
        let cli = Cli::try_parse_from(["by-age", "-f", "3"]).unwrap();
        assert_eq!(cli.field, 3);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["by-age"]).unwrap();
        assert_eq!(cli.field, 1);
        assert_eq!(cli.timezone, "UTC");
        assert!(!cli.reverse_sort);
        assert!(cli.min_age.is_none());
        assert!(cli.max_age.is_none());
    }
}
